use crate::constants::{DOT_FILL, LINE_RGB, LINE_WIDTH};
use app_core::{LinkLine, Simulation};
use web_sys as web;

/// Clear and redraw the whole frame in logical coordinates: particle dots
/// first, then the surviving link lines with their distance-faded alpha.
pub fn draw_frame(ctx: &web::CanvasRenderingContext2d, sim: &Simulation, lines: &[LinkLine]) {
    ctx.clear_rect(0.0, 0.0, sim.width as f64, sim.height as f64);

    ctx.set_fill_style_str(DOT_FILL);
    for p in &sim.particles {
        ctx.begin_path();
        let _ = ctx.arc(
            p.pos.x as f64,
            p.pos.y as f64,
            p.radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        ctx.fill();
    }

    ctx.set_line_width(LINE_WIDTH);
    for line in lines {
        ctx.set_stroke_style_str(&format!("rgba({},{:.3})", LINE_RGB, line.alpha));
        ctx.begin_path();
        ctx.move_to(line.a.x as f64, line.a.y as f64);
        ctx.line_to(line.b.x as f64, line.b.y as f64);
        ctx.stroke();
    }
}
