//! DOM event wiring. The text form is live from startup; the camera, look,
//! and pick handlers are attached once the first submission succeeds, so
//! keyboard input cannot disturb an empty scene.

use crate::frame::{start_loop, FrameContext};
use crate::render::MaterialSlot;
use crate::{api, assets, dom, input};
use app_core::{
    apply_command, apply_look_delta, build_blueprints, command_for_key, generate, CameraCommand,
    ObjectBlueprint, SceneContext, ShapeKind, PICK_SPIN_RADIANS,
};
use fnv::FnvHashMap;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// One scene per page load; flipped back only when a submission fails.
static SUBMITTED: AtomicBool = AtomicBool::new(false);

pub fn wire_resize(
    canvas: &web::HtmlCanvasElement,
    scene: Rc<RefCell<SceneContext>>,
    frame_ctx: Rc<RefCell<FrameContext>>,
) {
    let Some(window) = web::window() else {
        return;
    };
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas);
        let w = canvas.width().max(1) as f32;
        let h = canvas.height().max(1) as f32;
        scene.borrow_mut().camera.aspect = w / h;
        frame_ctx.borrow_mut().render_now();
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Enter in the text area submits; further Enter presses are ignored while
/// a submission is in flight or a scene is already up.
pub fn wire_form(
    canvas: &web::HtmlCanvasElement,
    scene: Rc<RefCell<SceneContext>>,
    frame_ctx: Rc<RefCell<FrameContext>>,
) {
    let Some(window) = web::window() else {
        return;
    };
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        let on_text_area = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .map(|el| el.id() == "text-area")
            .unwrap_or(false);
        if !on_text_area {
            return;
        }
        ev.prevent_default();

        let Some(document) = dom::window_document() else {
            return;
        };
        let text = dom::text_area_value(&document).unwrap_or_default();
        if text.trim().is_empty() {
            return;
        }
        if SUBMITTED.swap(true, Ordering::SeqCst) {
            log::warn!("submission already in flight; ignoring Enter");
            return;
        }
        dom::reveal_scene(&document);

        let scene = scene.clone();
        let frame_ctx = frame_ctx.clone();
        let canvas = canvas.clone();
        spawn_local(async move {
            submit(text, canvas, scene, frame_ctx).await;
        });
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("keypress", closure.as_ref().unchecked_ref());
    closure.forget();
}

async fn submit(
    text: String,
    canvas: web::HtmlCanvasElement,
    scene: Rc<RefCell<SceneContext>>,
    frame_ctx: Rc<RefCell<FrameContext>>,
) {
    let scores = match api::fetch_tone_scores(&text).await {
        Ok(scores) => scores,
        Err(e) => {
            log::error!("tone request failed: {e:?}");
            if let Some(document) = dom::window_document() {
                dom::show_error(&document, "Could not analyze that text. Try again.");
                dom::restore_form(&document);
            }
            SUBMITTED.store(false, Ordering::SeqCst);
            return;
        }
    };

    let mut rng = StdRng::from_entropy();
    let specs = generate(&scores, &mut rng);
    log::info!("placing {} objects from {} tones", specs.len(), scores.len());

    let mut mesh_pending: FnvHashMap<ShapeKind, Vec<ObjectBlueprint>> = FnvHashMap::default();
    for blueprint in build_blueprints(specs, &mut rng) {
        let kind = blueprint.spec.kind;
        if kind.is_mesh_backed() {
            mesh_pending.entry(kind).or_default().push(blueprint);
        } else {
            frame_ctx.borrow_mut().gpu.ensure_primitive_mesh(kind);
            scene.borrow_mut().push_object(blueprint.into_object());
        }
    }
    for (kind, blueprints) in mesh_pending {
        spawn_mesh_load(kind, blueprints, scene.clone(), frame_ctx.clone());
    }
    spawn_material_loads(frame_ctx.clone());

    wire_camera_keys(scene.clone(), frame_ctx.clone());
    wire_pointer_look(scene.clone(), frame_ctx.clone());
    wire_pick(&canvas, scene, frame_ctx.clone());

    frame_ctx.borrow_mut().render_now();
}

/// Fetch one OBJ asset; its blueprints join the scene only once the mesh
/// is on the GPU. A failed load drops those objects and nothing else.
fn spawn_mesh_load(
    kind: ShapeKind,
    blueprints: Vec<ObjectBlueprint>,
    scene: Rc<RefCell<SceneContext>>,
    frame_ctx: Rc<RefCell<FrameContext>>,
) {
    spawn_local(async move {
        match assets::load_mesh_asset(kind).await {
            Ok(data) => {
                frame_ctx.borrow_mut().gpu.upload_mesh(kind, &data);
                let mut scene = scene.borrow_mut();
                for blueprint in blueprints {
                    scene.push_object(blueprint.into_object());
                }
                drop(scene);
                frame_ctx.borrow_mut().render_now();
            }
            Err(e) => {
                log::error!("mesh asset for {kind:?} failed to load: {e:?}");
            }
        }
    });
}

fn spawn_material_loads(frame_ctx: Rc<RefCell<FrameContext>>) {
    let slots = [
        (MaterialSlot::Texture1, assets::TEXTURE1_PATH),
        (MaterialSlot::Texture2, assets::TEXTURE2_PATH),
        (MaterialSlot::Bmap1, assets::BMAP1_PATH),
        (MaterialSlot::Bmap2, assets::BMAP2_PATH),
    ];
    for (slot, path) in slots {
        let frame_ctx = frame_ctx.clone();
        spawn_local(async move {
            match assets::load_material_image(path).await {
                Ok((rgba, width, height)) => {
                    let mut fc = frame_ctx.borrow_mut();
                    fc.gpu.set_material_image(slot, &rgba, width, height);
                    fc.render_now();
                }
                Err(e) => {
                    // Placeholder pixel stays bound; shapes render flat
                    log::warn!("material image {path} failed to load: {e:?}");
                }
            }
        });
    }
}

pub fn wire_camera_keys(scene: Rc<RefCell<SceneContext>>, frame_ctx: Rc<RefCell<FrameContext>>) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        let Some(command) = command_for_key(&ev.key()) else {
            return;
        };
        ev.prevent_default();
        let resumed = {
            let mut scene = scene.borrow_mut();
            apply_command(&mut scene, command);
            command == CameraCommand::ToggleAnimation && scene.animating
        };
        if resumed {
            start_loop(frame_ctx.clone());
        }
        frame_ctx.borrow_mut().render_now();
    }) as Box<dyn FnMut(_)>);
    let _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_pointer_look(scene: Rc<RefCell<SceneContext>>, frame_ctx: Rc<RefCell<FrameContext>>) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        {
            let mut scene = scene.borrow_mut();
            if !scene.look_enabled {
                return;
            }
            apply_look_delta(&mut scene, ev.movement_x() as f32, ev.movement_y() as f32);
        }
        frame_ctx.borrow_mut().render_now();
    }) as Box<dyn FnMut(_)>);
    let _ =
        document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_pick(
    canvas: &web::HtmlCanvasElement,
    scene: Rc<RefCell<SceneContext>>,
    frame_ctx: Rc<RefCell<FrameContext>>,
) {
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        // Client CSS pixels -> canvas backing pixels
        let rect = canvas.get_bounding_client_rect();
        let x_css = ev.client_x() as f32 - rect.left() as f32;
        let y_css = ev.client_y() as f32 - rect.top() as f32;
        let width = canvas.width() as f32;
        let height = canvas.height() as f32;
        let sx = (x_css / rect.width().max(1.0) as f32) * width;
        let sy = (y_css / rect.height().max(1.0) as f32) * height;

        let picked = {
            let mut scene = scene.borrow_mut();
            let (ro, rd) = input::screen_to_world_ray(width, height, sx, sy, &scene.camera);
            let hit = input::pick_object(ro, rd, &scene.objects);
            if let Some(i) = hit {
                scene.objects[i].spin_x += PICK_SPIN_RADIANS;
                Some((scene.objects[i].emotion, scene.objects[i].power))
            } else {
                None
            }
        };
        if let Some((emotion, power)) = picked {
            if let Some(document) = dom::window_document() {
                dom::show_emotion(&document, emotion.label(), power);
            }
            frame_ctx.borrow_mut().render_now();
        }
    }) as Box<dyn FnMut(_)>);
    let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
