use crate::input;
use crate::render;
use app_core::{FrameScheduler, Simulation};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub sim: Rc<RefCell<Simulation>>,
    pub scheduler: Rc<RefCell<FrameScheduler>>,
    pub mouse: Rc<RefCell<input::MouseState>>,
    pub ctx: web::CanvasRenderingContext2d,
}

impl FrameContext {
    /// One update+render pass. Returns whether the loop should request the
    /// next display-refresh signal; a paused frame requests nothing and the
    /// canvas stays static until resumed.
    pub fn frame(&mut self) -> bool {
        if !self.scheduler.borrow().is_running() {
            return false;
        }
        let mouse = self.mouse.borrow().point();
        let mut sim = self.sim.borrow_mut();
        let lines = sim.frame(mouse);
        render::draw_frame(&self.ctx, &sim, &lines);
        true
    }
}

pub type TickHandle = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Request one animation frame for the tick closure.
pub fn request_frame(tick: &TickHandle) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Start the self-resubmitting requestAnimationFrame loop. The returned
/// handle lets the pause-key handler re-kick the loop after a resume.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> TickHandle {
    let tick: TickHandle = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if frame_ctx_tick.borrow_mut().frame() {
            request_frame(&tick_clone);
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
    tick
}
