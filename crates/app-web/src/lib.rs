#![cfg(target_arch = "wasm32")]

//! Browser entry point. Startup builds the GPU state and wires the text
//! form; everything after that is event-driven. Interaction handlers attach
//! once the first submission succeeds.

pub mod api;
pub mod assets;
pub mod dom;
pub mod events;
pub mod frame;
pub mod input;
pub mod render;

use app_core::SceneContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub(crate) fn js_error(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!(format!("{:?}", e))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("app-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("scene-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #scene-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::sync_canvas_backing_size(&canvas);

    let aspect = canvas.width().max(1) as f32 / canvas.height().max(1) as f32;
    let scene = Rc::new(RefCell::new(SceneContext::new(aspect)));

    let gpu = frame::init_gpu(&canvas)
        .await
        .ok_or_else(|| anyhow::anyhow!("WebGPU unavailable"))?;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        scene.clone(),
        gpu,
        canvas.clone(),
    )));

    events::wire_resize(&canvas, scene.clone(), frame_ctx.clone());
    events::wire_form(&canvas, scene, frame_ctx.clone());
    frame::start_loop(frame_ctx);
    Ok(())
}
