//! The render loop: requestAnimationFrame drives the orbit animator, which
//! gates itself to the simulation rate and reports whether anything moved.
//! The loop reschedules only while the scene is animating; pausing lets it
//! wind down and a later toggle starts a fresh one.

use crate::render::GpuState;
use app_core::{OrbitAnimator, SceneContext};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<SceneContext>>,
    pub animator: OrbitAnimator,
    pub gpu: GpuState<'static>,
    pub canvas: web::HtmlCanvasElement,
    pub loop_running: bool,
}

impl FrameContext {
    pub fn new(
        scene: Rc<RefCell<SceneContext>>,
        gpu: GpuState<'static>,
        canvas: web::HtmlCanvasElement,
    ) -> Self {
        Self {
            scene,
            animator: OrbitAnimator::new(),
            gpu,
            canvas,
            loop_running: false,
        }
    }

    /// One animation frame. Returns whether the loop should reschedule.
    pub fn frame(&mut self) -> bool {
        let now = js_sys::Date::now();
        let mut scene = self.scene.borrow_mut();
        if self.animator.tick(now, &mut scene.objects) {
            let w = self.canvas.width();
            let h = self.canvas.height();
            self.gpu.resize_if_needed(w, h);
            if let Err(e) = self.gpu.render(&scene) {
                log::error!("render error: {:?}", e);
            }
        }
        scene.animating
    }

    /// Render the current scene outside the animation loop, used after
    /// camera commands and picks while the orbits are paused.
    pub fn render_now(&mut self) {
        let scene = self.scene.borrow();
        let w = self.canvas.width();
        let h = self.canvas.height();
        self.gpu.resize_if_needed(w, h);
        if let Err(e) = self.gpu.render(&scene) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    {
        let mut fc = frame_ctx.borrow_mut();
        if fc.loop_running {
            return;
        }
        fc.loop_running = true;
    }
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let keep_going = frame_ctx_tick.borrow_mut().frame();
        if keep_going {
            if let Some(w) = web::window() {
                let _ = w.request_animation_frame(
                    tick_clone
                        .borrow()
                        .as_ref()
                        .unwrap()
                        .as_ref()
                        .unchecked_ref(),
                );
            }
        } else {
            frame_ctx_tick.borrow_mut().loop_running = false;
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
