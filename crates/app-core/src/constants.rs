use std::f32::consts::{FRAC_PI_2, PI};

// Shared tuning constants for generation, placement, animation, and camera
// control. Kept in one module so magic numbers stay out of the logic.

// ---------------- Generation ----------------

// One ShapeSpec copy per decile threshold not exceeding the score
pub const BAND_STEP: f32 = 0.1;
pub const MAX_BAND_COPIES: usize = 11;

// Scores at or below this pick texture/bump variant 1, above it variant 2
pub const POWER_VARIANT_THRESHOLD: f32 = 0.5;

// Uniform scale factor range for procedurally generated primitives
pub const PRIMITIVE_SCALE_MIN: f32 = 3.0;
pub const PRIMITIVE_SCALE_MAX: f32 = 6.0;

// Fixed scale factors for the externally authored mesh assets
pub const SPIRAL_SCALE_FACTOR: f32 = 0.03;
pub const VORONOI_SCALE_FACTOR: f32 = 0.04;
pub const CURVES_SCALE_FACTOR: f32 = 0.05;

// Emotion palette (sRGB bytes of the original hex values, normalized)
pub const RED: [f32; 3] = [0.8, 0.0, 0.0]; // #CC0000
pub const BLUE: [f32; 3] = [0.2392, 0.5216, 0.7765]; // #3D85C6
pub const PURPLE: [f32; 3] = [0.4039, 0.3059, 0.6549]; // #674EA7
pub const PINK: [f32; 3] = [0.7608, 0.4824, 0.6275]; // #C27BA0
pub const GREEN: [f32; 3] = [0.4157, 0.6588, 0.3098]; // #6AA84F
pub const ORANGE: [f32; 3] = [0.9020, 0.5686, 0.2196]; // #E69138
pub const YELLOW: [f32; 3] = [1.0, 0.8510, 0.4]; // #FFD966

// ---------------- Placement ----------------

// Position offsets are drawn uniformly from these ranges (world units)
pub const PLACEMENT_XY_RANGE: f32 = 20.0; // x, y in [-20, 20] for every kind
pub const PRIMITIVE_Z_MIN: f32 = -30.0;
pub const PRIMITIVE_Z_MAX: f32 = -10.0;
pub const MESH_Z_MIN: f32 = -40.0;
pub const MESH_Z_MAX: f32 = -20.0;

// Circular orbit radii around the scene origin
pub const PRIMITIVE_ORBIT_MIN: f32 = 10.0;
pub const PRIMITIVE_ORBIT_MAX: f32 = 30.0;
pub const MESH_ORBIT_MIN: f32 = 20.0;
pub const MESH_ORBIT_MAX: f32 = 40.0;

// ---------------- Animation ----------------

// Simulation rate is fixed at 30 updates/second regardless of the host's
// native callback frequency
pub const SIM_RATE_HZ: f64 = 30.0;
pub const FRAME_INTERVAL_MS: f64 = 1000.0 / SIM_RATE_HZ;

// Wall-clock milliseconds to orbit phase
pub const ORBIT_TIME_SCALE: f64 = 0.0002;

// ---------------- Camera ----------------

pub const LOOK_SENSITIVITY: f32 = 0.002;
pub const KEY_LOOK_STEP: f32 = 50.0; // feeds the same path as pointer deltas
pub const KEY_ROLL_STEP: f32 = KEY_LOOK_STEP / 500.0;

// Pitch clamp derived from the polar angle limits: [pi/2 - max, pi/2 - min]
pub const MIN_POLAR_ANGLE: f32 = 0.0;
pub const MAX_POLAR_ANGLE: f32 = PI;
pub const PITCH_MIN: f32 = FRAC_PI_2 - MAX_POLAR_ANGLE;
pub const PITCH_MAX: f32 = FRAC_PI_2 - MIN_POLAR_ANGLE;

pub const FOV_Y_RADIANS: f32 = 75.0 * PI / 180.0;
pub const Z_NEAR: f32 = 1.0;
pub const Z_FAR: f32 = 1000.0;

// ---------------- Picking ----------------

// Bounding-sphere radius: fraction of the uniform scale for primitives,
// fixed world-unit radius for mesh assets (large model-space extents,
// tiny scale factors)
pub const PICK_RADIUS_FACTOR: f32 = 0.6;
pub const MESH_PICK_RADIUS: f32 = 1.5;

// Picked objects spin about X by this much
pub const PICK_SPIN_RADIANS: f32 = 1.2;

// ---------------- Procedural tessellation ----------------

pub const BOX_SEGMENTS: u32 = 4;
pub const RADIAL_SEGMENTS: u32 = 16; // cone and cylinder
pub const HEIGHT_SEGMENTS: u32 = 4;
pub const SPHERE_SEGMENTS: u32 = 32;
pub const DIAMOND_WIDTH_SEGMENTS: u32 = 4; // a coarse sphere reads as a gem
pub const DIAMOND_HEIGHT_SEGMENTS: u32 = 2;
pub const TORUS_RADIAL_SEGMENTS: u32 = 8;
pub const TORUS_TUBULAR_SEGMENTS: u32 = 50;
