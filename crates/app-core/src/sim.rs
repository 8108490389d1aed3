//! Particle field simulation, kept free of platform APIs so the whole
//! update+link pass can be driven synchronously from host-side tests.

use crate::config::{SimConfig, DESTROY_RADIUS, IMPULSE_NUDGE, IMPULSE_PUSH, LINK_ALPHA_MAX, WRAP_MARGIN};
use crate::geometry::{point_segment_distance, rescale_to_speed, unit_away};
use crate::particle::{seed_particles, Particle};
use glam::Vec2;
use rand::prelude::*;

/// A connecting line the renderer should draw this frame.
#[derive(Clone, Copy, Debug)]
pub struct LinkLine {
    pub a: Vec2,
    pub b: Vec2,
    /// 0..LINK_ALPHA_MAX, fading out towards the link distance.
    pub alpha: f32,
}

/// The full simulation context: particle store, viewport extent, and the
/// RNG used for (re)seeding. Owned by the frame loop; mutated once per tick.
pub struct Simulation {
    pub particles: Vec<Particle>,
    pub width: f32,
    pub height: f32,
    pub config: SimConfig,
    rng: StdRng,
}

impl Simulation {
    pub fn new(width: f32, height: f32, config: SimConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = seed_particles(&mut rng, width, height, &config);
        Self {
            particles,
            width,
            height,
            config,
            rng,
        }
    }

    /// Replace the particle store wholesale for a new viewport size.
    /// Prior positions are discarded, not rescaled.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.particles = seed_particles(&mut self.rng, width, height, &self.config);
    }

    /// Advance every particle by its velocity and wrap at the toroidal
    /// margin just outside the visible viewport.
    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.pos += p.vel;
            if p.pos.x < -WRAP_MARGIN {
                p.pos.x = w + WRAP_MARGIN;
            }
            if p.pos.x > w + WRAP_MARGIN {
                p.pos.x = -WRAP_MARGIN;
            }
            if p.pos.y < -WRAP_MARGIN {
                p.pos.y = h + WRAP_MARGIN;
            }
            if p.pos.y > h + WRAP_MARGIN {
                p.pos.y = -WRAP_MARGIN;
            }
        }
    }

    /// Scan all unordered pairs for candidate links. A candidate crossed by
    /// the mouse within the destroy radius is suppressed and both endpoints
    /// take a repulsion impulse; the rest are returned for drawing with a
    /// distance-faded alpha.
    ///
    /// O(n^2) by design at this particle-count scale.
    pub fn link_pass(&mut self, mouse: Option<Vec2>) -> Vec<LinkLine> {
        let max_dist = self.config.link_distance;
        let max_dist_sq = max_dist * max_dist;
        let mut lines = Vec::new();
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let (a, b) = (self.particles[i].pos, self.particles[j].pos);
                let d_sq = a.distance_squared(b);
                if d_sq >= max_dist_sq {
                    continue;
                }
                let cut = mouse.filter(|&m| point_segment_distance(m, a, b) < DESTROY_RADIUS);
                if let Some(m) = cut {
                    apply_impulse(&mut self.particles[i], m, &self.config);
                    apply_impulse(&mut self.particles[j], m, &self.config);
                } else {
                    lines.push(LinkLine {
                        a,
                        b,
                        alpha: (1.0 - d_sq.sqrt() / max_dist) * LINK_ALPHA_MAX,
                    });
                }
            }
        }
        lines
    }

    /// One full update pass: movement, then the pair scan. The returned
    /// lines plus `self.particles` are everything the renderer needs.
    pub fn frame(&mut self, mouse: Option<Vec2>) -> Vec<LinkLine> {
        self.step();
        self.link_pass(mouse)
    }
}

/// Flinch a particle away from the mouse: bias velocity along the
/// mouse-to-particle direction, renormalize back to the constant speed,
/// and nudge position a few pixels so the separation is immediate.
///
/// Called once per suppressed link per endpoint; a particle crossed by
/// several links in one frame accumulates several impulses, which is
/// intentional and repels harder in crowded regions.
pub fn apply_impulse(p: &mut Particle, mouse: Vec2, cfg: &SimConfig) {
    let dir = unit_away(mouse, p.pos);
    p.vel = rescale_to_speed(p.vel + dir * IMPULSE_PUSH, cfg.speed);
    p.pos += dir * IMPULSE_NUDGE;
}
