//! ShapeSpec generation: ordered tone scores in, ordered shape descriptors out.
//!
//! Everything here is deterministic given the injected randomness source, so
//! tests can seed an `StdRng` and assert exact structure. No side effects, no
//! network or rendering calls.

use crate::constants::*;
use crate::tone::{EmotionId, ToneScore};
use glam::Vec3;
use rand::prelude::*;
use smallvec::SmallVec;

/// Renderable shape categories. The first six are procedurally generated
/// primitives; the last three are externally authored mesh assets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Cube,
    Diamond,
    Sphere,
    Cylinder,
    Cone,
    Torus,
    Spiral,
    Voronoi,
    Curves,
}

impl ShapeKind {
    pub fn is_mesh_backed(self) -> bool {
        self.mesh_asset_path().is_some()
    }

    /// Asset path for mesh-backed kinds, `None` for procedural primitives.
    pub fn mesh_asset_path(self) -> Option<&'static str> {
        match self {
            ShapeKind::Spiral => Some("assets/obj/spiral_twist.obj"),
            ShapeKind::Voronoi => Some("assets/obj/voronoi_sphere.obj"),
            ShapeKind::Curves => Some("assets/obj/curves.obj"),
            _ => None,
        }
    }

    /// Fixed scale factor for mesh-backed kinds, `None` for primitives
    /// (which draw their factor from the randomness source).
    pub fn mesh_scale_factor(self) -> Option<f32> {
        match self {
            ShapeKind::Spiral => Some(SPIRAL_SCALE_FACTOR),
            ShapeKind::Voronoi => Some(VORONOI_SCALE_FACTOR),
            ShapeKind::Curves => Some(CURVES_SCALE_FACTOR),
            _ => None,
        }
    }

    /// Mesh-backed kinds and the smooth primitives take a bump map; the
    /// remaining primitives take a flat texture. Exactly one of the two is
    /// ever applied.
    pub fn uses_bump_map(self) -> bool {
        matches!(
            self,
            ShapeKind::Sphere
                | ShapeKind::Cylinder
                | ShapeKind::Cone
                | ShapeKind::Spiral
                | ShapeKind::Voronoi
                | ShapeKind::Curves
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureId {
    None,
    Texture1,
    Texture2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BumpMapId {
    None,
    Bmap1,
    Bmap2,
}

impl EmotionId {
    /// Candidate shape kinds; two emotions branch between two kinds, the
    /// rest map 1:1. Adding a kind is a data change here.
    pub fn shape_candidates(self) -> &'static [ShapeKind] {
        match self {
            EmotionId::Anger => &[ShapeKind::Cube, ShapeKind::Diamond],
            EmotionId::Fear => &[ShapeKind::Sphere, ShapeKind::Cylinder],
            EmotionId::Joy => &[ShapeKind::Cone],
            EmotionId::Sadness => &[ShapeKind::Torus],
            EmotionId::Analytical => &[ShapeKind::Spiral],
            EmotionId::Confident => &[ShapeKind::Voronoi],
            EmotionId::Tentative => &[ShapeKind::Curves],
        }
    }

    pub fn color(self) -> [f32; 3] {
        match self {
            EmotionId::Anger => RED,
            EmotionId::Fear => BLUE,
            EmotionId::Joy => PURPLE,
            EmotionId::Sadness => PINK,
            EmotionId::Analytical => GREEN,
            EmotionId::Confident => ORANGE,
            EmotionId::Tentative => YELLOW,
        }
    }
}

/// Everything needed to instantiate one renderable object from one emotion
/// reading. Banding emits several identical copies of a spec.
#[derive(Clone, Debug)]
pub struct ShapeSpec {
    pub emotion: EmotionId,
    pub kind: ShapeKind,
    pub color: [f32; 3],
    pub power: f32,
    pub texture: TextureId,
    pub bump_map: BumpMapId,
    pub scale: Vec3,
}

/// Number of banding copies for a score: one per decile threshold in
/// `0.0..=score`, i.e. `floor(score * 10) + 1`, capped at the full band.
pub fn band_copies(score: f32) -> usize {
    let s = score.clamp(0.0, 1.0);
    (((s / BAND_STEP).floor() as usize) + 1).min(MAX_BAND_COPIES)
}

/// Transform an ordered tone list into an ordered ShapeSpec list.
///
/// Unrecognized `tone_id` values are skipped. Copies for one tone are
/// contiguous, and tones are processed in input order.
pub fn generate<R: Rng + ?Sized>(scores: &[ToneScore], rng: &mut R) -> Vec<ShapeSpec> {
    let mut specs = Vec::new();
    for tone in scores {
        let Some(emotion) = EmotionId::from_tone_id(&tone.tone_id) else {
            log::debug!("skipping unrecognized tone_id {:?}", tone.tone_id);
            continue;
        };
        let kind = emotion
            .shape_candidates()
            .choose(rng)
            .copied()
            .unwrap_or(ShapeKind::Cube);
        let power = tone.score;
        let (texture, bump_map) = if kind.uses_bump_map() {
            let variant = if power <= POWER_VARIANT_THRESHOLD {
                BumpMapId::Bmap1
            } else {
                BumpMapId::Bmap2
            };
            (TextureId::None, variant)
        } else {
            let variant = if power <= POWER_VARIANT_THRESHOLD {
                TextureId::Texture1
            } else {
                TextureId::Texture2
            };
            (variant, BumpMapId::None)
        };
        let factor = match kind.mesh_scale_factor() {
            Some(f) => f,
            None => rng.gen_range(PRIMITIVE_SCALE_MIN..=PRIMITIVE_SCALE_MAX),
        };
        let spec = ShapeSpec {
            emotion,
            kind,
            color: emotion.color(),
            power,
            texture,
            bump_map,
            scale: Vec3::splat(tone.score * factor),
        };
        // All copies in a band share one descriptor, lowest threshold first
        let burst: SmallVec<[ShapeSpec; MAX_BAND_COPIES]> =
            (0..band_copies(tone.score)).map(|_| spec.clone()).collect();
        specs.extend(burst);
    }
    specs
}
