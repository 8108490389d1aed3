/// Simulation tuning constants.
///
/// These constants express intended behavior (e.g., interaction radii,
/// clamp limits) and keep magic numbers out of the code.
// Particles per area unit scale factor; see `particle_count_for_area`.
// The count heuristic is computed in f64 so density 1.8 on a 1100x1000
// viewport lands on exactly 180 rather than flooring to 179.
pub const AREA_PER_PARTICLE_DIVISOR: f64 = 11_000.0;

// Lower bound on the particle count so tiny viewports still animate.
pub const MIN_PARTICLE_COUNT: usize = 40;

// Pointer distance (px) within which a candidate link is cut and its
// endpoints repelled.
pub const DESTROY_RADIUS: f32 = 80.0;

// Impulse magnitude added to velocity before renormalization.
pub const IMPULSE_PUSH: f32 = 0.9;

// Immediate position nudge (px) applied with each impulse.
pub const IMPULSE_NUDGE: f32 = 4.0;

// Particles wrap once they drift this far (px) past the viewport edge.
pub const WRAP_MARGIN: f32 = 50.0;

// Link line opacity at zero pairwise distance.
pub const LINK_ALPHA_MAX: f32 = 0.8;

// Device pixel ratio cap; bounds backing-store size on dense displays.
pub const DEVICE_PIXEL_SCALE_MAX: f64 = 2.0;

// localStorage key holding the JSON-encoded quick-link list.
pub const LINKS_STORAGE_KEY: &str = "pc-links";

// Number of quick-link slots on the page.
pub const QUICK_LINK_SLOTS: usize = 5;

/// Per-session simulation parameters. Fixed after startup.
#[derive(Clone, Copy, Debug)]
pub struct SimConfig {
    /// Particle density factor applied to the area heuristic.
    pub density: f64,
    /// Maximum pairwise distance (px) for a connecting line.
    pub link_distance: f32,
    /// Dot radius (px) given to every particle at creation.
    pub particle_radius: f32,
    /// Constant speed (px/frame) every particle is held to.
    pub speed: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            density: 1.8,
            link_distance: 140.0,
            particle_radius: 3.0,
            speed: 0.5,
        }
    }
}
