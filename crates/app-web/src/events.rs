use crate::constants::PAUSE_KEY;
use crate::dom;
use crate::frame;
use crate::input;
use app_core::{FrameScheduler, Simulation};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// mousemove updates the shared pointer position and marks it active;
/// mouseleave deactivates it until the pointer returns.
pub fn wire_pointer_handlers(mouse: Rc<RefCell<input::MouseState>>) {
    let Some(window) = web::window() else { return };

    {
        let mouse_move = mouse.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let mut ms = mouse_move.borrow_mut();
            ms.pos = Some(Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
            ms.active = true;
        }) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let mouse_leave = mouse;
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            mouse_leave.borrow_mut().active = false;
        }) as Box<dyn FnMut()>);
        let _ =
            window.add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Every viewport resize recomputes the backing store and reseeds the
/// particle field for the new dimensions.
pub fn wire_resize(
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    sim: Rc<RefCell<Simulation>>,
) {
    let Some(window) = web::window() else { return };
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let (w, h) = dom::configure_canvas(&canvas, &ctx);
        let mut sim = sim.borrow_mut();
        sim.resize(w, h);
        log::info!(
            "[sim] resize {:.0}x{:.0} particles={}",
            w,
            h,
            sim.particles.len()
        );
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// The pause key flips the scheduler; resuming must re-kick the refresh
/// loop because a paused frame requests no successor.
pub fn wire_pause_key(scheduler: Rc<RefCell<FrameScheduler>>, tick: frame::TickHandle) {
    let Some(window) = web::window() else { return };
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.key().to_lowercase() == PAUSE_KEY {
            let resumed = scheduler.borrow_mut().toggle();
            if resumed {
                frame::request_frame(&tick);
            }
        }
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
