// Host-side tests for ripple and particle kinematics.

mod common;

use common::{Op, Recorder};
use glam::DVec2;
use padfx_core::constants::*;
use padfx_core::{Particle, Rgb, Ripple, Surface};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::panic::{catch_unwind, AssertUnwindSafe};

const RED: Rgb = Rgb::new(231, 76, 60);

#[test]
fn ripple_opacity_tracks_radius() {
    let mut r = Ripple::new(DVec2::new(10.0, 20.0), RED);
    assert_eq!(r.radius(), 0.0);
    assert_eq!(r.opacity(), 1.0);
    for n in 1..=37 {
        let expired = r.advance();
        assert!(!expired, "ripple expired early at frame {n}");
        assert_eq!(r.radius(), 4.0 * n as f64);
        assert_eq!(r.opacity(), 1.0 - r.radius() / RIPPLE_MAX_RADIUS);
    }
}

// At 4 units per frame the radius bound (152 > 150) trips before the
// opacity bound could; both remain checked for other speeds.
#[test]
fn ripple_expires_on_frame_38() {
    let mut r = Ripple::new(DVec2::ZERO, RED);
    let mut frames = 0;
    loop {
        frames += 1;
        if r.advance() {
            break;
        }
    }
    assert_eq!(frames, 38);
    assert!(r.radius() > RIPPLE_MAX_RADIUS);
}

#[test]
fn ripple_radius_never_shrinks() {
    let mut r = Ripple::new(DVec2::ZERO, RED);
    let mut prev = r.radius();
    for _ in 0..40 {
        r.advance();
        assert!(r.radius() >= prev);
        prev = r.radius();
    }
}

#[test]
fn ripple_renders_stroked_ring_without_mutating() {
    let mut r = Ripple::new(DVec2::new(5.0, 6.0), RED);
    r.advance();
    let mut s = Recorder::new(100.0, 100.0);
    r.render(&mut s);
    r.render(&mut s);
    assert_eq!(r.radius(), 4.0);
    let expected = Op::StrokeArc {
        x: 5.0,
        y: 6.0,
        radius: 4.0,
        color: RED.with_alpha(1.0 - 4.0 / 150.0),
        line_width: 5.0,
    };
    assert_eq!(s.ops, vec![expected.clone(), expected]);
}

#[test]
fn particle_alpha_decays_linearly_and_expires_at_50() {
    let mut p = Particle::with_motion(DVec2::ZERO, RED, 2.0, DVec2::new(1.0, -1.0));
    assert_eq!(p.alpha(), 1.0);
    for n in 1..50 {
        assert!(!p.advance(), "particle expired early at frame {n}");
        assert!((p.alpha() - (1.0 - 0.02 * n as f64)).abs() < 1e-12);
    }
    assert!(p.advance());
    assert!(p.alpha() <= 0.0);
}

#[test]
fn particle_velocity_decays_by_friction() {
    let v0 = DVec2::new(2.0, -1.5);
    let mut p = Particle::with_motion(DVec2::new(50.0, 50.0), RED, 1.0, v0);
    let mut expected_pos = DVec2::new(50.0, 50.0);
    for n in 1..=30 {
        p.advance();
        let factor = PARTICLE_FRICTION.powi(n);
        expected_pos += v0 * factor;
        assert!((p.velocity().length() - v0.length() * factor).abs() < 1e-9);
        // Components shrink but keep their sign.
        assert!(p.velocity().x > 0.0 && p.velocity().y < 0.0);
        assert!((p.position - expected_pos).length() < 1e-9);
    }
}

#[test]
fn particle_lifetime_ignores_motion_and_size() {
    for (radius, v) in [(1.0, DVec2::ZERO), (3.9, DVec2::new(-3.0, 3.0))] {
        let mut p = Particle::with_motion(DVec2::ZERO, Rgb::new(0, 0, 0), radius, v);
        let frames = (1..=100).find(|_| p.advance()).unwrap();
        assert_eq!(frames, 50);
    }
}

#[test]
fn random_particles_stay_within_ranges() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let p = Particle::new(DVec2::new(1.0, 2.0), RED, &mut rng);
        assert!(p.radius >= PARTICLE_RADIUS_MIN);
        assert!(p.radius < PARTICLE_RADIUS_MIN + PARTICLE_RADIUS_SPAN);
        let half = PARTICLE_SPEED_MAX / 2.0;
        assert!(p.velocity().x.abs() <= half && p.velocity().y.abs() <= half);
        assert_eq!(p.position, DVec2::new(1.0, 2.0));
        assert_eq!(p.alpha(), 1.0);
    }
}

#[test]
fn seeded_rng_gives_repeatable_particles() {
    let a = Particle::new(DVec2::ZERO, RED, &mut StdRng::seed_from_u64(42));
    let b = Particle::new(DVec2::ZERO, RED, &mut StdRng::seed_from_u64(42));
    assert_eq!(a.radius, b.radius);
    assert_eq!(a.velocity(), b.velocity());
}

#[test]
fn particle_render_scopes_global_alpha() {
    let mut p = Particle::with_motion(DVec2::new(3.0, 4.0), RED, 2.5, DVec2::ZERO);
    for _ in 0..10 {
        p.advance();
    }
    let mut s = Recorder::new(10.0, 10.0);
    s.set_global_alpha(0.7);
    p.render(&mut s);

    assert_eq!(s.global_alpha, 0.7);
    assert_eq!(s.depth(), 0);
    match &s.ops[..] {
        [Op::Save, Op::FillArc {
            x,
            y,
            radius,
            color,
            global_alpha,
        }, Op::Restore] => {
            assert_eq!((*x, *y, *radius), (3.0, 4.0, 2.5));
            assert_eq!(*color, RED.with_alpha(1.0));
            assert!((global_alpha - p.alpha()).abs() < 1e-12);
        }
        other => panic!("unexpected ops: {other:?}"),
    }
}

#[test]
fn particle_render_restores_alpha_when_fill_panics() {
    let mut p = Particle::with_motion(DVec2::ZERO, RED, 2.0, DVec2::ZERO);
    p.advance();
    let mut s = Recorder::new(10.0, 10.0);
    s.set_global_alpha(0.4);
    s.panic_on_fill = true;

    let result = catch_unwind(AssertUnwindSafe(|| p.render(&mut s)));
    assert!(result.is_err());
    assert_eq!(s.ops, vec![Op::Save, Op::Restore]);
    assert_eq!(s.depth(), 0);
    assert_eq!(s.global_alpha, 0.4);
}
