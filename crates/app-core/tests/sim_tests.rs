// Host-side integration tests for the particle simulation.

use app_core::{
    apply_impulse, particle_count_for_area, FrameScheduler, Particle, SimConfig, Simulation,
    LINK_ALPHA_MAX, MIN_PARTICLE_COUNT, WRAP_MARGIN,
};
use glam::Vec2;

const SEED: u64 = 42;

fn make_sim(width: f32, height: f32) -> Simulation {
    Simulation::new(width, height, SimConfig::default(), SEED)
}

/// A two-particle field with fully controlled geometry, for link tests.
fn make_pair(a: Vec2, b: Vec2) -> Simulation {
    let cfg = SimConfig::default();
    let mut sim = make_sim(1920.0, 1080.0);
    sim.particles = vec![
        Particle {
            pos: a,
            vel: Vec2::new(cfg.speed, 0.0),
            radius: cfg.particle_radius,
        },
        Particle {
            pos: b,
            vel: Vec2::new(-cfg.speed, 0.0),
            radius: cfg.particle_radius,
        },
    ];
    sim
}

#[test]
fn particle_count_matches_area_formula() {
    // Worked example from the design: 1100x1000 at density 1.8 -> 180.
    assert_eq!(particle_count_for_area(1100.0, 1000.0, 1.8), 180);
    assert_eq!(particle_count_for_area(1920.0, 1080.0, 1.8), 339);
}

#[test]
fn particle_count_floor_holds_for_tiny_viewports() {
    assert_eq!(particle_count_for_area(10.0, 10.0, 1.8), MIN_PARTICLE_COUNT);
    assert_eq!(particle_count_for_area(0.0, 0.0, 1.8), MIN_PARTICLE_COUNT);
    assert_eq!(particle_count_for_area(0.0, 2000.0, 1.8), MIN_PARTICLE_COUNT);
}

#[test]
fn seeding_is_deterministic_for_a_seed() {
    let a = make_sim(800.0, 600.0);
    let b = make_sim(800.0, 600.0);
    assert_eq!(a.particles.len(), b.particles.len());
    for (pa, pb) in a.particles.iter().zip(b.particles.iter()) {
        assert_eq!(pa.pos, pb.pos);
        assert_eq!(pa.vel, pb.vel);
    }
}

#[test]
fn seeded_particles_start_in_viewport_at_configured_speed() {
    let cfg = SimConfig::default();
    let sim = make_sim(800.0, 600.0);
    assert_eq!(
        sim.particles.len(),
        particle_count_for_area(800.0, 600.0, cfg.density)
    );
    for p in &sim.particles {
        assert!(p.pos.x >= 0.0 && p.pos.x <= 800.0);
        assert!(p.pos.y >= 0.0 && p.pos.y <= 600.0);
        assert!((p.vel.length() - cfg.speed).abs() < 1e-5);
        assert_eq!(p.radius, cfg.particle_radius);
    }
}

#[test]
fn speed_is_invariant_absent_mouse_activity() {
    let cfg = SimConfig::default();
    let mut sim = make_sim(640.0, 480.0);
    for _ in 0..500 {
        sim.frame(None);
    }
    for p in &sim.particles {
        assert!(
            (p.vel.length() - cfg.speed).abs() < 1e-4,
            "speed drifted to {}",
            p.vel.length()
        );
    }
}

#[test]
fn impulse_renormalizes_velocity_and_nudges_position() {
    let cfg = SimConfig::default();
    let mut p = Particle {
        pos: Vec2::new(10.0, 0.0),
        vel: Vec2::new(0.0, cfg.speed),
        radius: cfg.particle_radius,
    };
    apply_impulse(&mut p, Vec2::ZERO, &cfg);
    // Renormalization law: exact constant speed whatever the push direction.
    assert!((p.vel.length() - cfg.speed).abs() < 1e-5);
    // Push from the left biases velocity towards +x.
    assert!(p.vel.x > 0.0);
    // Immediate 4px separation along the mouse-to-particle direction.
    assert!((p.pos.x - 14.0).abs() < 1e-5);
    assert!(p.pos.y.abs() < 1e-5);
}

#[test]
fn repeated_impulses_keep_constant_speed() {
    let cfg = SimConfig::default();
    let mut p = Particle {
        pos: Vec2::new(100.0, 100.0),
        vel: Vec2::new(cfg.speed, 0.0),
        radius: cfg.particle_radius,
    };
    for mouse in [
        Vec2::new(90.0, 100.0),
        Vec2::new(100.0, 90.0),
        Vec2::new(110.0, 110.0),
    ] {
        apply_impulse(&mut p, mouse, &cfg);
        assert!((p.vel.length() - cfg.speed).abs() < 1e-5);
    }
}

#[test]
fn impulse_with_mouse_on_particle_stays_finite() {
    let cfg = SimConfig::default();
    let mut p = Particle {
        pos: Vec2::new(5.0, 5.0),
        vel: Vec2::new(0.0, cfg.speed),
        radius: cfg.particle_radius,
    };
    apply_impulse(&mut p, Vec2::new(5.0, 5.0), &cfg);
    assert!(p.vel.is_finite());
    assert!(p.pos.is_finite());
    assert!((p.vel.length() - cfg.speed).abs() < 1e-5);
}

#[test]
fn particles_wrap_at_the_toroidal_margin() {
    let (w, h) = (800.0, 600.0);
    let mut sim = make_sim(w, h);
    sim.particles = vec![
        Particle {
            pos: Vec2::new(w + WRAP_MARGIN, 100.0),
            vel: Vec2::new(0.5, 0.0),
            radius: 3.0,
        },
        Particle {
            pos: Vec2::new(-WRAP_MARGIN, 100.0),
            vel: Vec2::new(-0.5, 0.0),
            radius: 3.0,
        },
        Particle {
            pos: Vec2::new(100.0, h + WRAP_MARGIN),
            vel: Vec2::new(0.0, 0.5),
            radius: 3.0,
        },
        Particle {
            pos: Vec2::new(100.0, -WRAP_MARGIN),
            vel: Vec2::new(0.0, -0.5),
            radius: 3.0,
        },
    ];
    sim.step();
    assert_eq!(sim.particles[0].pos.x, -WRAP_MARGIN);
    assert_eq!(sim.particles[1].pos.x, w + WRAP_MARGIN);
    assert_eq!(sim.particles[2].pos.y, -WRAP_MARGIN);
    assert_eq!(sim.particles[3].pos.y, h + WRAP_MARGIN);
}

#[test]
fn link_alpha_fades_linearly_with_distance() {
    let cfg = SimConfig::default();
    // Coincident pair: maximum opacity.
    let mut sim = make_pair(Vec2::new(400.0, 300.0), Vec2::new(400.0, 300.0));
    let lines = sim.link_pass(None);
    assert_eq!(lines.len(), 1);
    assert!((lines[0].alpha - LINK_ALPHA_MAX).abs() < 1e-5);

    // Monotonically decreasing towards zero at the link distance.
    let mut prev = f32::MAX;
    for d in [10.0, 40.0, 70.0, 100.0, 130.0, 139.9] {
        let mut sim = make_pair(Vec2::new(400.0, 300.0), Vec2::new(400.0 + d, 300.0));
        let lines = sim.link_pass(None);
        assert_eq!(lines.len(), 1, "expected a link at distance {d}");
        let expected = (1.0 - d / cfg.link_distance) * LINK_ALPHA_MAX;
        assert!(
            (lines[0].alpha - expected).abs() < 1e-4,
            "alpha at distance {d}: got {}, expected {expected}",
            lines[0].alpha
        );
        assert!(lines[0].alpha < prev);
        prev = lines[0].alpha;
    }

    // At exactly the link distance the pair is no longer a candidate.
    let mut sim = make_pair(
        Vec2::new(400.0, 300.0),
        Vec2::new(400.0 + cfg.link_distance, 300.0),
    );
    assert!(sim.link_pass(None).is_empty());
}

#[test]
fn mouse_within_destroy_radius_cuts_link_and_repels_endpoints() {
    let a = Vec2::new(300.0, 300.0);
    let b = Vec2::new(400.0, 300.0);
    let mut sim = make_pair(a, b);
    let before: Vec<Vec2> = sim.particles.iter().map(|p| p.vel).collect();

    // Mouse sits right on the segment: suppressed, both endpoints flinch.
    let lines = sim.link_pass(Some(Vec2::new(350.0, 310.0)));
    assert!(lines.is_empty(), "cut link must not be drawn");
    for (p, old_vel) in sim.particles.iter().zip(before.iter()) {
        assert!(p.vel != *old_vel, "endpoint velocity unchanged by cut");
        assert!((p.vel.length() - sim.config.speed).abs() < 1e-5);
    }
}

#[test]
fn mouse_outside_destroy_radius_leaves_link_alone() {
    let a = Vec2::new(300.0, 300.0);
    let b = Vec2::new(400.0, 300.0);
    let mut sim = make_pair(a, b);
    let before: Vec<Vec2> = sim.particles.iter().map(|p| p.vel).collect();

    let lines = sim.link_pass(Some(Vec2::new(350.0, 500.0)));
    assert_eq!(lines.len(), 1);
    for (p, old_vel) in sim.particles.iter().zip(before.iter()) {
        assert_eq!(p.vel, *old_vel);
    }
}

#[test]
fn inactive_mouse_never_cuts() {
    let mut sim = make_pair(Vec2::new(300.0, 300.0), Vec2::new(400.0, 300.0));
    let lines = sim.link_pass(None);
    assert_eq!(lines.len(), 1);
}

#[test]
fn resize_replaces_the_whole_field() {
    let mut sim = make_sim(800.0, 600.0);
    let old_positions: Vec<Vec2> = sim.particles.iter().map(|p| p.pos).collect();

    sim.resize(1100.0, 1000.0);
    assert_eq!(sim.width, 1100.0);
    assert_eq!(sim.height, 1000.0);
    assert_eq!(sim.particles.len(), 180);
    for p in &sim.particles {
        assert!(p.pos.x >= 0.0 && p.pos.x <= 1100.0);
        assert!(p.pos.y >= 0.0 && p.pos.y <= 1000.0);
    }
    // Freshly drawn positions, not a rescaling of the old field.
    let reused = sim
        .particles
        .iter()
        .filter(|p| old_positions.contains(&p.pos))
        .count();
    assert_eq!(reused, 0, "stale particles survived the reseed");
}

#[test]
fn scheduler_toggles_between_running_and_paused() {
    let mut sched = FrameScheduler::new();
    assert!(sched.is_running(), "scheduler must start running");
    assert!(!sched.toggle(), "first toggle pauses");
    assert!(!sched.is_running());
    assert!(sched.toggle(), "second toggle resumes");
    assert!(sched.is_running());
}

#[test]
fn paused_scheduler_halts_motion_and_resume_restores_it() {
    let mut sim = make_sim(640.0, 480.0);
    let mut sched = FrameScheduler::new();

    // Drive the loop the way the frame callback does: one update per tick
    // while running, nothing while paused.
    let drive = |sim: &mut Simulation, sched: &FrameScheduler, ticks: usize| {
        for _ in 0..ticks {
            if sched.is_running() {
                sim.frame(None);
            }
        }
    };

    sched.pause();
    let frozen: Vec<Vec2> = sim.particles.iter().map(|p| p.pos).collect();
    drive(&mut sim, &sched, 10);
    let after: Vec<Vec2> = sim.particles.iter().map(|p| p.pos).collect();
    assert_eq!(frozen, after, "positions changed while paused");

    sched.resume();
    drive(&mut sim, &sched, 1);
    let resumed: Vec<Vec2> = sim.particles.iter().map(|p| p.pos).collect();
    assert_ne!(frozen, resumed, "positions static after resume");
}
