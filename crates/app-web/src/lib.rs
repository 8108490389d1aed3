#![cfg(target_arch = "wasm32")]
use app_core::{FrameScheduler, SimConfig, Simulation};
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;
mod storage;
mod ui;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("app-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("bg")
        .ok_or_else(|| anyhow::anyhow!("missing #bg"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Quick links: read once from storage, then the editor owns updates.
    let links = Rc::new(RefCell::new(storage::load_links()));
    ui::render_links(&document, &links.borrow());
    ui::wire_link_editor(&document, links.clone());
    ui::wire_search_guard(&document);
    ui::focus_search(&document);

    // Size the backing store and seed the field for the initial viewport.
    let (w, h) = dom::configure_canvas(&canvas, &ctx);
    let seed: u64 = rand::thread_rng().gen();
    let sim = Rc::new(RefCell::new(Simulation::new(
        w,
        h,
        SimConfig::default(),
        seed,
    )));
    log::info!(
        "[sim] viewport {:.0}x{:.0} particles={}",
        w,
        h,
        sim.borrow().particles.len()
    );

    let mouse = Rc::new(RefCell::new(input::MouseState::default()));
    let scheduler = Rc::new(RefCell::new(FrameScheduler::new()));

    events::wire_pointer_handlers(mouse.clone());
    events::wire_resize(canvas.clone(), ctx.clone(), sim.clone());

    // Scheduler + renderer loop driven by requestAnimationFrame.
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        sim,
        scheduler: scheduler.clone(),
        mouse,
        ctx,
    }));
    let tick = frame::start_loop(frame_ctx);
    events::wire_pause_key(scheduler, tick);

    Ok(())
}
