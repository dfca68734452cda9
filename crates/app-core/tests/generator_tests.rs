// Host-side tests for the ShapeSpec generator.

use app_core::{
    band_copies, generate, BumpMapId, EmotionId, ShapeKind, TextureId, ToneScore,
    MAX_BAND_COPIES, PRIMITIVE_SCALE_MAX, PRIMITIVE_SCALE_MIN, RED,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn tone(id: &str, score: f32) -> ToneScore {
    ToneScore {
        tone_id: id.to_string(),
        score,
    }
}

#[test]
fn anger_emits_banded_copies_with_branching_kind() {
    let mut rng = StdRng::seed_from_u64(42);
    let specs = generate(&[tone("anger", 0.7)], &mut rng);

    // floor(0.7 * 10) + 1 copies
    assert_eq!(specs.len(), 8);
    for spec in &specs {
        assert!(
            matches!(spec.kind, ShapeKind::Cube | ShapeKind::Diamond),
            "anger must resolve to cube or diamond, got {:?}",
            spec.kind
        );
        assert_eq!(spec.emotion, EmotionId::Anger);
        assert_eq!(spec.color, RED);
        // Uniform scale = score * factor, factor drawn from [3, 6]
        assert_eq!(spec.scale.x, spec.scale.y);
        assert_eq!(spec.scale.y, spec.scale.z);
        let factor = spec.scale.x / 0.7;
        assert!(
            (PRIMITIVE_SCALE_MIN - 1e-4..=PRIMITIVE_SCALE_MAX + 1e-4).contains(&factor),
            "scale factor {factor} out of range"
        );
    }
}

#[test]
fn joy_is_always_a_bump_mapped_cone() {
    let mut rng = StdRng::seed_from_u64(7);
    let specs = generate(&[tone("joy", 0.9)], &mut rng);

    assert_eq!(specs.len(), 10);
    for spec in &specs {
        assert_eq!(spec.kind, ShapeKind::Cone);
        assert_ne!(spec.bump_map, BumpMapId::None);
        assert_eq!(spec.texture, TextureId::None);
        // power > 0.5 picks the second bump variant
        assert_eq!(spec.bump_map, BumpMapId::Bmap2);
    }
}

#[test]
fn exactly_one_of_texture_and_bump_map_is_set() {
    let mut rng = StdRng::seed_from_u64(9);
    let ids = [
        "anger",
        "fear",
        "joy",
        "sadness",
        "analytical",
        "confident",
        "tentative",
    ];
    for _ in 0..50 {
        let scores: Vec<ToneScore> = ids
            .iter()
            .map(|id| tone(id, rng.gen_range(0.0..=1.0)))
            .collect();
        for spec in generate(&scores, &mut rng) {
            let has_texture = spec.texture != TextureId::None;
            let has_bump = spec.bump_map != BumpMapId::None;
            assert!(
                has_texture ^ has_bump,
                "{:?}: texture={:?} bump={:?}",
                spec.kind,
                spec.texture,
                spec.bump_map
            );
        }
    }
}

#[test]
fn texture_variant_follows_power_threshold() {
    let mut rng = StdRng::seed_from_u64(3);
    let low = generate(&[tone("sadness", 0.3)], &mut rng);
    let high = generate(&[tone("sadness", 0.8)], &mut rng);
    assert!(low.iter().all(|s| s.texture == TextureId::Texture1));
    assert!(high.iter().all(|s| s.texture == TextureId::Texture2));
}

#[test]
fn mesh_backed_kinds_use_fixed_scale_factors() {
    let mut rng = StdRng::seed_from_u64(11);
    let specs = generate(
        &[
            tone("analytical", 0.5),
            tone("confident", 0.5),
            tone("tentative", 0.5),
        ],
        &mut rng,
    );
    for spec in &specs {
        let expected = match spec.kind {
            ShapeKind::Spiral => 0.5 * 0.03,
            ShapeKind::Voronoi => 0.5 * 0.04,
            ShapeKind::Curves => 0.5 * 0.05,
            other => panic!("unexpected kind {other:?}"),
        };
        assert!((spec.scale.x - expected).abs() < 1e-6);
    }
}

#[test]
fn banding_count_is_monotonic_in_score() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut prev = 0usize;
    for tenths in 0..=10 {
        let s = tenths as f32 / 10.0;
        let count = generate(&[tone("joy", s)], &mut rng).len();
        assert!(count >= prev, "count dropped at score {s}: {count} < {prev}");
        prev = count;
    }
}

#[test]
fn band_copies_bounds() {
    assert_eq!(band_copies(0.0), 1);
    assert_eq!(band_copies(0.05), 1);
    assert_eq!(band_copies(0.7), 8);
    assert_eq!(band_copies(1.0), MAX_BAND_COPIES);
    // Out-of-range scores are clamped rather than over-replicated
    assert_eq!(band_copies(7.3), MAX_BAND_COPIES);
    assert_eq!(band_copies(-0.2), 1);
}

#[test]
fn unrecognized_tone_ids_are_skipped() {
    let mut rng = StdRng::seed_from_u64(5);
    let specs = generate(&[tone("boredom", 0.9), tone("hunger", 0.4)], &mut rng);
    assert!(specs.is_empty());
}

#[test]
fn recognized_tones_survive_around_unknown_ones_in_order() {
    let mut rng = StdRng::seed_from_u64(5);
    let specs = generate(
        &[tone("joy", 0.15), tone("mystery", 0.9), tone("sadness", 0.25)],
        &mut rng,
    );
    // 2 joy copies then 3 sadness copies, contiguous and in input order
    assert_eq!(specs.len(), 5);
    assert!(specs[..2].iter().all(|s| s.emotion == EmotionId::Joy));
    assert!(specs[2..].iter().all(|s| s.emotion == EmotionId::Sadness));
}

#[test]
fn generation_is_deterministic_for_a_seed() {
    let scores = vec![tone("anger", 0.6), tone("fear", 0.3)];
    let a = generate(&scores, &mut StdRng::seed_from_u64(99));
    let b = generate(&scores, &mut StdRng::seed_from_u64(99));
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.kind, y.kind);
        assert_eq!(x.scale, y.scale);
        assert_eq!(x.texture, y.texture);
        assert_eq!(x.bump_map, y.bump_map);
    }
}
