//! Placement and instantiation blueprints for generated shape descriptors.
//!
//! The pure half of object creation lives here: drawing each object's
//! position offset and orbit radius from the injected randomness source and
//! pairing it with its descriptor. The host resolves the geometry — building
//! primitive meshes synchronously and fetching mesh assets asynchronously —
//! and appends the resulting [`SceneObject`]s to the registry.

use crate::constants::*;
use crate::scene::SceneObject;
use crate::shapes::{ShapeKind, ShapeSpec};
use glam::Vec3;
use rand::Rng;

/// Initial world placement for one object.
#[derive(Clone, Copy, Debug)]
pub struct Placement {
    pub position: Vec3,
    pub orbit_distance: f32,
}

/// One ShapeSpec ready to instantiate, with its placement fixed.
#[derive(Clone, Debug)]
pub struct ObjectBlueprint {
    pub spec: ShapeSpec,
    pub placement: Placement,
}

impl ObjectBlueprint {
    pub fn into_object(self) -> SceneObject {
        SceneObject::new(&self.spec, self.placement)
    }
}

/// Draw a placement for a shape kind. Mesh assets sit further back and
/// orbit wider than the procedural primitives.
pub fn place<R: Rng + ?Sized>(kind: ShapeKind, rng: &mut R) -> Placement {
    let (z_min, z_max, orbit_min, orbit_max) = if kind.is_mesh_backed() {
        (MESH_Z_MIN, MESH_Z_MAX, MESH_ORBIT_MIN, MESH_ORBIT_MAX)
    } else {
        (
            PRIMITIVE_Z_MIN,
            PRIMITIVE_Z_MAX,
            PRIMITIVE_ORBIT_MIN,
            PRIMITIVE_ORBIT_MAX,
        )
    };
    Placement {
        position: Vec3::new(
            rng.gen_range(-PLACEMENT_XY_RANGE..=PLACEMENT_XY_RANGE),
            rng.gen_range(-PLACEMENT_XY_RANGE..=PLACEMENT_XY_RANGE),
            rng.gen_range(z_min..=z_max),
        ),
        orbit_distance: rng.gen_range(orbit_min..=orbit_max),
    }
}

/// Pair every descriptor with a placement, preserving input order.
pub fn build_blueprints<R: Rng + ?Sized>(specs: Vec<ShapeSpec>, rng: &mut R) -> Vec<ObjectBlueprint> {
    specs
        .into_iter()
        .map(|spec| {
            let placement = place(spec.kind, rng);
            ObjectBlueprint { spec, placement }
        })
        .collect()
}
