// Pure picking math, kept free of web-sys so it can be tested on the host.

use app_core::{CameraState, SceneObject};
use glam::{Vec3, Vec4};

/// Unproject a canvas pixel into a world-space ray. The camera sits at the
/// origin, so the ray origin is fixed and only the direction depends on the
/// camera orientation.
pub fn screen_to_world_ray(
    width: f32,
    height: f32,
    sx: f32,
    sy: f32,
    camera: &CameraState,
) -> (Vec3, Vec3) {
    let ndc_x = (2.0 * sx / width.max(1.0)) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height.max(1.0));
    let inv = (camera.projection_matrix() * camera.view_matrix()).inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    let dir = (p1 - Vec3::ZERO).normalize();
    (Vec3::ZERO, dir)
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Index of the nearest object whose bounding sphere the ray hits.
pub fn pick_object(ray_origin: Vec3, ray_dir: Vec3, objects: &[SceneObject]) -> Option<usize> {
    let mut best = None::<(usize, f32)>;
    for (i, obj) in objects.iter().enumerate() {
        if let Some(t) = ray_sphere(ray_origin, ray_dir, obj.position, obj.pick_radius()) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}
