// Host-side tests for look control and the keyboard command table.

use app_core::{
    apply_command, apply_look_delta, command_for_key, CameraCommand, SceneContext,
    KEY_LOOK_STEP, KEY_ROLL_STEP, LOOK_SENSITIVITY, PITCH_MAX, PITCH_MIN,
};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn ctx() -> SceneContext {
    SceneContext::new(16.0 / 9.0)
}

#[test]
fn pitch_stays_clamped_under_arbitrary_delta_sequences() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut scene = ctx();
    for _ in 0..2_000 {
        let dx = rng.gen_range(-500.0..500.0);
        let dy = rng.gen_range(-500.0..500.0);
        apply_look_delta(&mut scene, dx, dy);
        assert!(
            (PITCH_MIN..=PITCH_MAX).contains(&scene.camera.pitch),
            "pitch {} escaped the clamp",
            scene.camera.pitch
        );
    }
}

#[test]
fn look_delta_moves_against_the_pointer() {
    let mut scene = ctx();
    apply_look_delta(&mut scene, 100.0, -40.0);
    assert!((scene.camera.yaw - (-100.0 * LOOK_SENSITIVITY)).abs() < 1e-6);
    assert!((scene.camera.pitch - (40.0 * LOOK_SENSITIVITY)).abs() < 1e-6);
}

#[test]
fn spotlight_target_tracks_the_forward_vector() {
    let mut scene = ctx();
    assert_eq!(scene.spotlight_target, Vec3::NEG_Z);

    // Pitch all the way up: forward approaches +Y
    apply_look_delta(&mut scene, 0.0, -10_000.0);
    assert!((scene.spotlight_target.length() - 1.0).abs() < 1e-5);
    assert!(scene.spotlight_target.y > 0.999);

    apply_look_delta(&mut scene, 123.0, 45.0);
    assert_eq!(scene.spotlight_target, scene.camera.forward());
}

#[test]
fn key_table_matches_the_bindings() {
    assert_eq!(command_for_key("w"), Some(CameraCommand::TiltUp));
    assert_eq!(command_for_key("s"), Some(CameraCommand::TiltDown));
    assert_eq!(command_for_key("a"), Some(CameraCommand::TiltLeft));
    assert_eq!(command_for_key("d"), Some(CameraCommand::TiltRight));
    assert_eq!(command_for_key("q"), Some(CameraCommand::RollLeft));
    assert_eq!(command_for_key("e"), Some(CameraCommand::RollRight));
    assert_eq!(command_for_key(" "), Some(CameraCommand::ResetOrientation));
    assert_eq!(command_for_key("p"), Some(CameraCommand::ToggleAnimation));
    assert_eq!(command_for_key("Escape"), Some(CameraCommand::ToggleLook));
    assert_eq!(command_for_key("x"), None);
    assert_eq!(command_for_key(""), None);
}

#[test]
fn tilt_commands_feed_the_pointer_delta_path() {
    let mut scene = ctx();
    apply_command(&mut scene, CameraCommand::TiltUp);
    assert!((scene.camera.pitch - KEY_LOOK_STEP * LOOK_SENSITIVITY).abs() < 1e-6);

    let mut scene = ctx();
    apply_command(&mut scene, CameraCommand::TiltRight);
    assert!((scene.camera.yaw - (-KEY_LOOK_STEP * LOOK_SENSITIVITY)).abs() < 1e-6);
}

#[test]
fn roll_commands_turn_about_the_view_axis() {
    let mut scene = ctx();
    apply_command(&mut scene, CameraCommand::RollLeft);
    assert!((scene.camera.roll + KEY_ROLL_STEP).abs() < 1e-6);
    apply_command(&mut scene, CameraCommand::RollRight);
    apply_command(&mut scene, CameraCommand::RollRight);
    assert!((scene.camera.roll - KEY_ROLL_STEP).abs() < 1e-6);
}

#[test]
fn toggle_animation_and_toggle_look_are_independent() {
    let mut scene = ctx();
    assert!(scene.animating);
    assert!(scene.look_enabled);

    apply_command(&mut scene, CameraCommand::ToggleAnimation);
    assert!(!scene.animating);
    assert!(scene.look_enabled, "p must not disturb pointer look");

    apply_command(&mut scene, CameraCommand::ToggleLook);
    assert!(!scene.look_enabled);
    assert!(!scene.animating, "Escape must not disturb animation");

    apply_command(&mut scene, CameraCommand::ToggleAnimation);
    apply_command(&mut scene, CameraCommand::ToggleLook);
    assert!(scene.animating);
    assert!(scene.look_enabled);
}

#[test]
fn reset_returns_to_identity() {
    let mut scene = ctx();
    apply_look_delta(&mut scene, 321.0, -654.0);
    apply_command(&mut scene, CameraCommand::RollRight);
    apply_command(&mut scene, CameraCommand::ResetOrientation);

    assert_eq!(scene.camera.yaw, 0.0);
    assert_eq!(scene.camera.pitch, 0.0);
    assert_eq!(scene.camera.roll, 0.0);
    assert!((scene.spotlight_target - Vec3::NEG_Z).length() < 1e-6);
}
