use crate::config::{SimConfig, AREA_PER_PARTICLE_DIVISOR, MIN_PARTICLE_COUNT};
use glam::Vec2;
use rand::prelude::*;

/// A simulated point-mass used purely for visual effect.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    /// Position in logical viewport pixels.
    pub pos: Vec2,
    /// Velocity in pixels per frame; magnitude is always the configured speed.
    pub vel: Vec2,
    /// Dot radius, constant after creation.
    pub radius: f32,
}

impl Particle {
    pub fn spawn(rng: &mut impl Rng, width: f32, height: f32, cfg: &SimConfig) -> Self {
        let ang = rng.gen_range(0.0..std::f32::consts::TAU);
        Self {
            pos: Vec2::new(rng.gen_range(0.0..=width), rng.gen_range(0.0..=height)),
            vel: Vec2::new(ang.cos(), ang.sin()) * cfg.speed,
            radius: cfg.particle_radius,
        }
    }
}

/// Density-normalized area heuristic with a floor so very small (or
/// zero-area) viewports still produce visible motion.
pub fn particle_count_for_area(width: f32, height: f32, density: f64) -> usize {
    let base = (width as f64 * height as f64) / AREA_PER_PARTICLE_DIVISOR;
    MIN_PARTICLE_COUNT.max((base * density).floor() as usize)
}

/// Bulk-create a fresh particle field for the given viewport.
pub fn seed_particles(
    rng: &mut impl Rng,
    width: f32,
    height: f32,
    cfg: &SimConfig,
) -> Vec<Particle> {
    let count = particle_count_for_area(width, height, cfg.density);
    (0..count)
        .map(|_| Particle::spawn(rng, width, height, cfg))
        .collect()
}
