// Host-side tests for the orbit animator and its frame gating.

use app_core::{
    BumpMapId, EmotionId, OrbitAnimator, SceneObject, ShapeKind, TextureId, FRAME_INTERVAL_MS,
};
use glam::Vec3;

fn make_object(orbit_distance: f32) -> SceneObject {
    SceneObject {
        kind: ShapeKind::Cube,
        emotion: EmotionId::Anger,
        power: 0.5,
        color: [0.8, 0.0, 0.0],
        texture: TextureId::Texture1,
        bump_map: BumpMapId::None,
        scale: Vec3::splat(2.0),
        position: Vec3::new(1.0, 4.0, -20.0),
        orbit_distance,
        spin_x: 0.0,
    }
}

#[test]
fn objects_trace_circles_of_their_orbit_radius() {
    let mut animator = OrbitAnimator::new();
    let mut objects = vec![make_object(12.0), make_object(25.0), make_object(25.0)];

    let mut now = 10_000.0;
    for _ in 0..100 {
        now += FRAME_INTERVAL_MS + 1.0;
        assert!(animator.tick(now, &mut objects));
        for obj in &objects {
            let r2 = obj.position.x * obj.position.x + obj.position.z * obj.position.z;
            let expected = obj.orbit_distance * obj.orbit_distance;
            assert!(
                (r2 - expected).abs() < expected * 1e-4,
                "radius invariant broken: {r2} vs {expected}"
            );
        }
    }
}

#[test]
fn equal_radii_are_phase_offset_but_coincident_with_each_other() {
    let mut animator = OrbitAnimator::new();
    let mut objects = vec![make_object(25.0), make_object(25.0), make_object(12.0)];
    animator.tick(50_000.0, &mut objects);
    // Same radius, same phase offset: identical positions
    assert_eq!(objects[0].position, objects[1].position);
    // Different radius: different phase
    assert_ne!(objects[0].position, objects[2].position);
}

#[test]
fn y_is_never_touched_by_the_animator() {
    let mut animator = OrbitAnimator::new();
    let mut objects = vec![make_object(18.0)];
    objects[0].position.y = -7.25;
    let mut now = 0.0;
    for _ in 0..20 {
        now += FRAME_INTERVAL_MS * 2.0;
        animator.tick(now, &mut objects);
        assert_eq!(objects[0].position.y, -7.25);
    }
}

#[test]
fn ticks_faster_than_the_simulation_interval_are_no_ops() {
    let mut animator = OrbitAnimator::new();
    let mut objects = vec![make_object(15.0)];

    assert!(animator.tick(1_000.0, &mut objects), "first tick must run");
    let settled = objects[0].position;

    // A burst of sub-interval ticks changes nothing
    for i in 1..=3 {
        let now = 1_000.0 + i as f64 * 10.0;
        assert!(!animator.tick(now, &mut objects));
        assert_eq!(objects[0].position, settled);
    }

    // Once the interval has elapsed the next tick advances the orbit
    assert!(animator.tick(1_000.0 + FRAME_INTERVAL_MS + 1.0, &mut objects));
    assert_ne!(objects[0].position, settled);
}

#[test]
fn registry_growth_between_ticks_is_tolerated() {
    let mut animator = OrbitAnimator::new();
    let mut objects = vec![make_object(10.0)];
    animator.tick(1_000.0, &mut objects);

    // An async mesh load completing mid-session appends to the registry
    objects.push(make_object(30.0));
    let now = 1_000.0 + FRAME_INTERVAL_MS + 1.0;
    assert!(animator.tick(now, &mut objects));
    for obj in &objects {
        let r2 = obj.position.x * obj.position.x + obj.position.z * obj.position.z;
        let expected = obj.orbit_distance * obj.orbit_distance;
        assert!((r2 - expected).abs() < expected * 1e-4);
    }
}
