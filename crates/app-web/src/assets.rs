//! Asynchronous asset loading: OBJ meshes for the authored shape kinds and
//! the texture / bump map images. Everything is fetched over HTTP relative
//! to the page, decoded on the wasm side, and handed to the renderer.

use app_core::{MeshData, ShapeKind, Vertex};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

use crate::js_error;

pub const TEXTURE1_PATH: &str = "assets/textures/texture1.png";
pub const TEXTURE2_PATH: &str = "assets/textures/texture2.png";
pub const BMAP1_PATH: &str = "assets/textures/bmap1.png";
pub const BMAP2_PATH: &str = "assets/textures/bmap2.png";

async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error)?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("fetch resolved to a non-Response value"))?;
    if !resp.ok() {
        anyhow::bail!("fetch {url}: status {}", resp.status());
    }
    let buffer = JsFuture::from(resp.array_buffer().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Fetch and triangulate the OBJ asset behind a mesh-backed shape kind.
pub async fn load_mesh_asset(kind: ShapeKind) -> anyhow::Result<MeshData> {
    let path = kind
        .mesh_asset_path()
        .ok_or_else(|| anyhow::anyhow!("{kind:?} has no mesh asset"))?;
    let bytes = fetch_bytes(path).await?;
    let mut reader = std::io::BufReader::new(std::io::Cursor::new(bytes));
    // Materials come from the texture pipeline, not from .mtl files
    let (models, _materials) = tobj::load_obj_buf(&mut reader, &tobj::GPU_LOAD_OPTIONS, |_| {
        Err(tobj::LoadError::OpenFileFailed)
    })?;

    let mut data = MeshData {
        vertices: Vec::new(),
        indices: Vec::new(),
    };
    for model in &models {
        let mesh = &model.mesh;
        let base = data.vertices.len() as u32;
        let count = mesh.positions.len() / 3;
        for i in 0..count {
            let position = [
                mesh.positions[i * 3],
                mesh.positions[i * 3 + 1],
                mesh.positions[i * 3 + 2],
            ];
            // Some exports carry no normals; fall back to the radial direction
            let normal = if mesh.normals.len() >= (i + 1) * 3 {
                [
                    mesh.normals[i * 3],
                    mesh.normals[i * 3 + 1],
                    mesh.normals[i * 3 + 2],
                ]
            } else {
                let len =
                    (position[0] * position[0] + position[1] * position[1] + position[2] * position[2])
                        .sqrt()
                        .max(1e-6);
                [position[0] / len, position[1] / len, position[2] / len]
            };
            let uv = if mesh.texcoords.len() >= (i + 1) * 2 {
                [mesh.texcoords[i * 2], mesh.texcoords[i * 2 + 1]]
            } else {
                [0.0, 0.0]
            };
            data.vertices.push(Vertex {
                position,
                normal,
                uv,
            });
        }
        data.indices.extend(mesh.indices.iter().map(|&i| base + i));
    }
    if data.vertices.is_empty() || data.indices.is_empty() {
        anyhow::bail!("{path} decoded to an empty mesh");
    }
    Ok(data)
}

/// Fetch and decode one material image into tightly packed RGBA8.
pub async fn load_material_image(path: &str) -> anyhow::Result<(Vec<u8>, u32, u32)> {
    let bytes = fetch_bytes(path).await?;
    let image = image::load_from_memory(&bytes)?.to_rgba8();
    let (width, height) = image.dimensions();
    Ok((image.into_raw(), width, height))
}
