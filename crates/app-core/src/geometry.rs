//! Procedural geometry for the six primitive shape kinds.
//!
//! Every builder produces a unit-sized mesh centered on the origin; the
//! per-object uniform scale is applied at draw time through instance data.
//! Tessellation is fixed per kind (see `constants.rs`).

use crate::constants::*;
use crate::shapes::ShapeKind;
use std::f32::consts::{PI, TAU};

/// Interleaved vertex layout shared with the GPU backend.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// CPU-side triangle mesh, ready for vertex/index buffer upload.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Build the unit mesh for a procedural kind; mesh-backed kinds load
    /// from assets instead and return `None`.
    pub fn for_kind(kind: ShapeKind) -> Option<MeshData> {
        match kind {
            ShapeKind::Cube => Some(box_mesh(BOX_SEGMENTS)),
            ShapeKind::Diamond => Some(uv_sphere(
                0.5,
                DIAMOND_WIDTH_SEGMENTS,
                DIAMOND_HEIGHT_SEGMENTS,
            )),
            ShapeKind::Sphere => Some(uv_sphere(0.5, SPHERE_SEGMENTS, SPHERE_SEGMENTS)),
            ShapeKind::Cylinder => Some(cylinder(0.5, 0.5, 1.0, RADIAL_SEGMENTS, HEIGHT_SEGMENTS)),
            ShapeKind::Cone => Some(cylinder(0.0, 0.5, 1.0, RADIAL_SEGMENTS, HEIGHT_SEGMENTS)),
            ShapeKind::Torus => Some(torus(
                0.5,
                0.5,
                TORUS_RADIAL_SEGMENTS,
                TORUS_TUBULAR_SEGMENTS,
            )),
            ShapeKind::Spiral | ShapeKind::Voronoi | ShapeKind::Curves => None,
        }
    }

    fn push_grid_indices(&mut self, base: u32, cols: u32, rows: u32) {
        for iy in 0..rows {
            for ix in 0..cols {
                let a = base + iy * (cols + 1) + ix;
                let b = a + cols + 1;
                self.indices.extend_from_slice(&[a, b, a + 1, b, b + 1, a + 1]);
            }
        }
    }
}

/// Unit cube with `segments` subdivisions per face edge.
pub fn box_mesh(segments: u32) -> MeshData {
    let mut mesh = MeshData::default();
    // (u axis, v axis, w axis, u sign, v sign, face sign)
    let faces: [(usize, usize, usize, f32, f32, f32); 6] = [
        (2, 1, 0, -1.0, -1.0, 1.0),  // +x
        (2, 1, 0, 1.0, -1.0, -1.0),  // -x
        (0, 2, 1, 1.0, 1.0, 1.0),    // +y
        (0, 2, 1, 1.0, -1.0, -1.0),  // -y
        (0, 1, 2, 1.0, -1.0, 1.0),   // +z
        (0, 1, 2, -1.0, -1.0, -1.0), // -z
    ];
    for (ua, va, wa, udir, vdir, wsign) in faces {
        let base = mesh.vertices.len() as u32;
        for iy in 0..=segments {
            let v = iy as f32 / segments as f32;
            for ix in 0..=segments {
                let u = ix as f32 / segments as f32;
                let mut position = [0.0f32; 3];
                position[ua] = (u - 0.5) * udir;
                position[va] = (v - 0.5) * vdir;
                position[wa] = 0.5 * wsign;
                let mut normal = [0.0f32; 3];
                normal[wa] = wsign;
                mesh.vertices.push(Vertex {
                    position,
                    normal,
                    uv: [u, 1.0 - v],
                });
            }
        }
        mesh.push_grid_indices(base, segments, segments);
    }
    mesh
}

/// Latitude/longitude sphere. A coarse tessellation (4x2) doubles as the
/// diamond primitive.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let mut mesh = MeshData::default();
    for iy in 0..=height_segments {
        let v = iy as f32 / height_segments as f32;
        let phi = v * PI;
        for ix in 0..=width_segments {
            let u = ix as f32 / width_segments as f32;
            let theta = u * TAU;
            let nx = -theta.cos() * phi.sin();
            let ny = phi.cos();
            let nz = theta.sin() * phi.sin();
            mesh.vertices.push(Vertex {
                position: [radius * nx, radius * ny, radius * nz],
                normal: [nx, ny, nz],
                uv: [u, 1.0 - v],
            });
        }
    }
    mesh.push_grid_indices(0, width_segments, height_segments);
    mesh
}

/// Capped cylinder between `-height/2` and `height/2`; a zero top radius
/// yields the cone.
pub fn cylinder(
    radius_top: f32,
    radius_bottom: f32,
    height: f32,
    radial_segments: u32,
    height_segments: u32,
) -> MeshData {
    let mut mesh = MeshData::default();
    let half = height / 2.0;
    let slope = (radius_bottom - radius_top) / height;

    // Torso
    for iy in 0..=height_segments {
        let v = iy as f32 / height_segments as f32;
        let radius = radius_top + v * (radius_bottom - radius_top);
        let y = half - v * height;
        for ix in 0..=radial_segments {
            let u = ix as f32 / radial_segments as f32;
            let theta = u * TAU;
            let (sin, cos) = theta.sin_cos();
            let n = glam::Vec3::new(sin, slope, cos).normalize();
            mesh.vertices.push(Vertex {
                position: [radius * sin, y, radius * cos],
                normal: [n.x, n.y, n.z],
                uv: [u, 1.0 - v],
            });
        }
    }
    mesh.push_grid_indices(0, radial_segments, height_segments);

    // Caps (skipped for the degenerate cone tip)
    if radius_top > 0.0 {
        push_cap(&mut mesh, radius_top, half, radial_segments, true);
    }
    if radius_bottom > 0.0 {
        push_cap(&mut mesh, radius_bottom, -half, radial_segments, false);
    }
    mesh
}

fn push_cap(mesh: &mut MeshData, radius: f32, y: f32, radial_segments: u32, top: bool) {
    let base = mesh.vertices.len() as u32;
    let sign = if top { 1.0 } else { -1.0 };
    mesh.vertices.push(Vertex {
        position: [0.0, y, 0.0],
        normal: [0.0, sign, 0.0],
        uv: [0.5, 0.5],
    });
    for ix in 0..=radial_segments {
        let u = ix as f32 / radial_segments as f32;
        let theta = u * TAU;
        let (sin, cos) = theta.sin_cos();
        mesh.vertices.push(Vertex {
            position: [radius * sin, y, radius * cos],
            normal: [0.0, sign, 0.0],
            uv: [0.5 + 0.5 * sin, 0.5 + 0.5 * cos],
        });
    }
    for ix in 0..radial_segments {
        mesh.indices
            .extend_from_slice(&[base, base + 1 + ix, base + 2 + ix]);
    }
}

/// Torus in the XY plane; ring and tube radii are equal for this scene's
/// chunky donut look.
pub fn torus(ring_radius: f32, tube_radius: f32, radial_segments: u32, tubular_segments: u32) -> MeshData {
    let mut mesh = MeshData::default();
    for j in 0..=radial_segments {
        let v = j as f32 / radial_segments as f32 * TAU;
        for i in 0..=tubular_segments {
            let u = i as f32 / tubular_segments as f32 * TAU;
            let cx = ring_radius * u.cos();
            let cy = ring_radius * u.sin();
            let px = (ring_radius + tube_radius * v.cos()) * u.cos();
            let py = (ring_radius + tube_radius * v.cos()) * u.sin();
            let pz = tube_radius * v.sin();
            let n = glam::Vec3::new(px - cx, py - cy, pz).normalize();
            mesh.vertices.push(Vertex {
                position: [px, py, pz],
                normal: [n.x, n.y, n.z],
                uv: [
                    i as f32 / tubular_segments as f32,
                    j as f32 / radial_segments as f32,
                ],
            });
        }
    }
    mesh.push_grid_indices(0, tubular_segments, radial_segments);
    mesh
}
