pub mod camera;
pub mod constants;
pub mod factory;
pub mod geometry;
pub mod orbit;
pub mod scene;
pub mod shapes;
pub mod tone;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::*;
pub use constants::*;
pub use factory::*;
pub use geometry::*;
pub use orbit::*;
pub use scene::*;
pub use shapes::*;
pub use tone::*;
