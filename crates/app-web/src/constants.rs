/// Rendering constants for the canvas layer.
// Particle dot fill.
pub const DOT_FILL: &str = "rgba(229,231,235,0.9)";

// Link line color; alpha is appended per line from the fade law.
pub const LINE_RGB: &str = "148,163,184";

pub const LINE_WIDTH: f64 = 1.0;

// Key that toggles the frame scheduler.
pub const PAUSE_KEY: &str = "p";
