//! Per-tick orbital motion for every registered object.

use crate::constants::{FRAME_INTERVAL_MS, ORBIT_TIME_SCALE};
use crate::scene::SceneObject;

/// Advances object positions along their circular orbits at a fixed
/// simulation rate. The host invokes [`OrbitAnimator::tick`] from its frame
/// callback; ticks arriving faster than the simulation interval are no-ops,
/// decoupling motion from the display's native refresh rate.
#[derive(Clone, Debug)]
pub struct OrbitAnimator {
    last_update_ms: f64,
}

impl Default for OrbitAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitAnimator {
    pub fn new() -> Self {
        // The first tick always runs
        Self {
            last_update_ms: f64::NEG_INFINITY,
        }
    }

    /// Advance the simulation if enough wall-clock time has elapsed.
    ///
    /// Each object traces a circle of radius `orbit_distance` in the
    /// horizontal plane, phase-offset by its own radius so objects with
    /// equal orbits are not collinear. `y` is never touched. Returns whether
    /// positions changed, i.e. whether the host should issue a render pass.
    pub fn tick(&mut self, now_ms: f64, objects: &mut [SceneObject]) -> bool {
        if now_ms - self.last_update_ms <= FRAME_INTERVAL_MS {
            return false;
        }
        self.last_update_ms = now_ms;

        let t = (now_ms * ORBIT_TIME_SCALE) as f32;
        for obj in objects.iter_mut() {
            let r = obj.orbit_distance;
            obj.position.x = r * (t + r).sin();
            obj.position.z = r * (t + r).cos();
        }
        true
    }
}
