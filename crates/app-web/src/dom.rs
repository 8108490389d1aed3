use app_core::DEVICE_PIXEL_SCALE_MAX;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Platform pixel density, guarded against zero and capped to bound
/// backing-store cost on very dense displays.
#[inline]
pub fn device_pixel_scale(window: &web::Window) -> f64 {
    let dpr = window.device_pixel_ratio();
    let dpr = if dpr > 0.0 { dpr } else { 1.0 };
    dpr.min(DEVICE_PIXEL_SCALE_MAX)
}

/// Viewport size in CSS pixels.
#[inline]
pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w, h)
}

/// Size the canvas backing store to `viewport * devicePixelScale`, pin its
/// CSS size to the full viewport, and scale the 2D context so all drawing
/// thereafter uses logical coordinates. Returns the logical size.
pub fn configure_canvas(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
) -> (f32, f32) {
    let Some(window) = web::window() else {
        return (0.0, 0.0);
    };
    let (w, h) = viewport_size(&window);
    let scale = device_pixel_scale(&window);
    canvas.set_width((w * scale).floor() as u32);
    canvas.set_height((h * scale).floor() as u32);
    let style = canvas.style();
    let _ = style.set_property("width", "100vw");
    let _ = style.set_property("height", "100vh");
    let _ = ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
    let _ = ctx.scale(scale, scale);
    (w as f32, h as f32)
}
