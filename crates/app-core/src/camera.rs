//! Look control: pointer/keyboard deltas to camera orientation.

use crate::constants::*;
use crate::scene::SceneContext;

/// Discrete camera commands dispatched from the keyboard. Pointer look and
/// keyboard tilt feed the same delta path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraCommand {
    TiltUp,
    TiltDown,
    TiltLeft,
    TiltRight,
    RollLeft,
    RollRight,
    ResetOrientation,
    ToggleAnimation,
    ToggleLook,
}

/// Key binding table. `p` and `Escape` are independent bindings.
pub fn command_for_key(key: &str) -> Option<CameraCommand> {
    match key {
        "w" => Some(CameraCommand::TiltUp),
        "s" => Some(CameraCommand::TiltDown),
        "a" => Some(CameraCommand::TiltLeft),
        "d" => Some(CameraCommand::TiltRight),
        "q" => Some(CameraCommand::RollLeft),
        "e" => Some(CameraCommand::RollRight),
        " " => Some(CameraCommand::ResetOrientation),
        "p" => Some(CameraCommand::ToggleAnimation),
        "Escape" => Some(CameraCommand::ToggleLook),
        _ => None,
    }
}

/// Apply a raw look delta: yaw/pitch move against the pointer, pitch is
/// clamped so the camera cannot flip past straight up or down. The spotlight
/// target follows the new forward direction.
pub fn apply_look_delta(ctx: &mut SceneContext, dx: f32, dy: f32) {
    let cam = &mut ctx.camera;
    cam.yaw -= dx * LOOK_SENSITIVITY;
    cam.pitch = (cam.pitch - dy * LOOK_SENSITIVITY).clamp(PITCH_MIN, PITCH_MAX);
    ctx.spotlight_target = ctx.camera.forward();
}

/// Apply one discrete command. Returns `true` when the command changed
/// camera or flag state (every command does; callers use this to trigger a
/// render pass).
pub fn apply_command(ctx: &mut SceneContext, cmd: CameraCommand) -> bool {
    match cmd {
        CameraCommand::TiltUp => apply_look_delta(ctx, 0.0, -KEY_LOOK_STEP),
        CameraCommand::TiltDown => apply_look_delta(ctx, 0.0, KEY_LOOK_STEP),
        CameraCommand::TiltLeft => apply_look_delta(ctx, -KEY_LOOK_STEP, 0.0),
        CameraCommand::TiltRight => apply_look_delta(ctx, KEY_LOOK_STEP, 0.0),
        CameraCommand::RollLeft => {
            ctx.camera.roll -= KEY_ROLL_STEP;
            ctx.spotlight_target = ctx.camera.forward();
        }
        CameraCommand::RollRight => {
            ctx.camera.roll += KEY_ROLL_STEP;
            ctx.spotlight_target = ctx.camera.forward();
        }
        CameraCommand::ResetOrientation => {
            ctx.camera.reset_orientation();
            ctx.spotlight_target = ctx.camera.forward();
        }
        CameraCommand::ToggleAnimation => {
            ctx.animating = !ctx.animating;
        }
        CameraCommand::ToggleLook => {
            ctx.look_enabled = !ctx.look_enabled;
        }
    }
    true
}
