//! Shared scene state: the camera, the object registry, and the session
//! flags. One explicit context value is passed to every component so unit
//! tests can construct isolated scenes.

use crate::constants::*;
use crate::factory::Placement;
use crate::shapes::{BumpMapId, ShapeKind, ShapeSpec, TextureId};
use crate::tone::EmotionId;
use glam::{EulerRot, Mat4, Quat, Vec3};

/// First-person camera fixed at the origin; only orientation changes.
#[derive(Clone, Debug)]
pub struct CameraState {
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
    pub aspect: f32,
}

impl CameraState {
    pub fn new(aspect: f32) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
            aspect,
        }
    }

    /// Orientation quaternion with yaw-first composition, matching the
    /// YXZ Euler order the look controls assume.
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, self.roll)
    }

    /// Forward unit vector: -Z rotated by the camera's orientation.
    pub fn forward(&self) -> Vec3 {
        self.orientation() * Vec3::NEG_Z
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_quat(self.orientation()).inverse()
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(FOV_Y_RADIANS, self.aspect, Z_NEAR, Z_FAR)
    }

    pub fn reset_orientation(&mut self) {
        self.yaw = 0.0;
        self.pitch = 0.0;
        self.roll = 0.0;
    }
}

/// Runtime instantiation of one ShapeSpec plus its ephemeral fields.
/// Created by the factory, moved by the animator, spun by the pick handler,
/// and only ever destroyed at session teardown.
#[derive(Clone, Debug)]
pub struct SceneObject {
    pub kind: ShapeKind,
    pub emotion: EmotionId,
    pub power: f32,
    pub color: [f32; 3],
    pub texture: TextureId,
    pub bump_map: BumpMapId,
    pub scale: Vec3,
    pub position: Vec3,
    pub orbit_distance: f32,
    pub spin_x: f32,
}

impl SceneObject {
    pub fn new(spec: &ShapeSpec, placement: Placement) -> Self {
        Self {
            kind: spec.kind,
            emotion: spec.emotion,
            power: spec.power,
            color: spec.color,
            texture: spec.texture,
            bump_map: spec.bump_map,
            scale: spec.scale,
            position: placement.position,
            orbit_distance: placement.orbit_distance,
            spin_x: 0.0,
        }
    }

    /// Bounding-sphere radius used by the pick ray.
    pub fn pick_radius(&self) -> f32 {
        if self.kind.is_mesh_backed() {
            MESH_PICK_RADIUS
        } else {
            self.scale.x * PICK_RADIUS_FACTOR
        }
    }
}

/// Owner of everything the components mutate: registry, camera, spotlight
/// target, and the two session flags.
#[derive(Clone, Debug)]
pub struct SceneContext {
    pub objects: Vec<SceneObject>,
    pub camera: CameraState,
    /// Derived aim point for the camera-attached spotlight, recomputed from
    /// orientation on every look update.
    pub spotlight_target: Vec3,
    pub animating: bool,
    pub look_enabled: bool,
}

impl SceneContext {
    pub fn new(aspect: f32) -> Self {
        Self {
            objects: Vec::new(),
            camera: CameraState::new(aspect),
            spotlight_target: Vec3::NEG_Z,
            animating: true,
            look_enabled: true,
        }
    }

    /// Registry appends are append-only so asynchronous asset completions
    /// never disturb objects already placed.
    pub fn push_object(&mut self, object: SceneObject) {
        self.objects.push(object);
    }
}
