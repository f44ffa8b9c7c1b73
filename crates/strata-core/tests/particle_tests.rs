// Host-side tests for the shared particle field: grid sizing, boundary
// behavior per mode, staged reconfiguration and disposal.

use glam::Vec3;
use strata_core::constants::{PARTICLE_DOMAIN_HALF_EXTENT, RAIN_FLOOR_Y, RAIN_RESEED_Y_MAX};
use strata_core::error::ParticleError;
use strata_core::particles::{ParticleConfig, ParticleField, ParticleMode};

fn config(mode: ParticleMode) -> ParticleConfig {
    ParticleConfig {
        mode,
        ..ParticleConfig::default()
    }
}

#[test]
fn budget_quantizes_to_a_square_grid() {
    let field = ParticleField::new(16384, 1);
    assert_eq!(field.grid_side(), 128);
    assert_eq!(field.len(), 128 * 128);

    // tiny budgets are floored at the minimum side
    let field = ParticleField::new(10, 1);
    assert_eq!(field.grid_side(), 32);
    assert_eq!(field.len(), 32 * 32);

    // huge budgets are capped at the maximum side
    let field = ParticleField::new(1_000_000, 1);
    assert_eq!(field.grid_side(), 256);
    assert_eq!(field.len(), 256 * 256);
}

#[test]
fn seeding_fills_the_domain_cube() {
    let field = ParticleField::new(4096, 9);
    let ext = PARTICLE_DOMAIN_HALF_EXTENT;
    for p in field.positions() {
        assert!(p.x.abs() <= ext && p.y.abs() <= ext && p.z.abs() <= ext);
    }
}

#[test]
fn same_seed_reproduces_the_simulation() {
    let mut a = ParticleField::new(1024, 42);
    let mut b = ParticleField::new(1024, 42);
    a.configure(config(ParticleMode::Vortex));
    b.configure(config(ParticleMode::Vortex));
    for i in 0..120 {
        let t = i as f32 / 60.0;
        a.step(t, 1.0 / 60.0).unwrap();
        b.step(t, 1.0 / 60.0).unwrap();
    }
    assert_eq!(a.positions(), b.positions());
    assert_eq!(a.velocities(), b.velocities());
}

#[test]
fn configure_takes_effect_on_the_next_step() {
    let mut field = ParticleField::new(1024, 3);
    assert_eq!(field.config().mode, ParticleMode::Idle);
    field.configure(config(ParticleMode::Snow));
    assert_eq!(field.config().mode, ParticleMode::Idle);
    field.step(0.0, 1.0 / 60.0).unwrap();
    assert_eq!(field.config().mode, ParticleMode::Snow);
}

#[test]
fn rain_reseeds_fallen_drops_into_the_top_band() {
    let mut field = ParticleField::new(1024, 5);
    field.configure(config(ParticleMode::Rain));
    // long enough for every drop to cross the floor at least once
    for i in 0..3000 {
        field.step(i as f32 / 60.0, 1.0 / 60.0).unwrap();
        for p in field.positions() {
            assert!(p.y >= RAIN_FLOOR_Y, "drop escaped below the floor: {p:?}");
            assert!(p.y <= RAIN_RESEED_Y_MAX + 1.0);
        }
    }
    // some drops must be mid-fall and some freshly reseeded near the top
    let high = field.positions().iter().filter(|p| p.y > 5.0).count();
    let low = field.positions().iter().filter(|p| p.y < 0.0).count();
    assert!(high > 0);
    assert!(low > 0);
}

#[test]
fn wrapping_modes_stay_inside_the_domain() {
    for mode in [
        ParticleMode::Idle,
        ParticleMode::Vortex,
        ParticleMode::Explode,
        ParticleMode::Snow,
    ] {
        let mut field = ParticleField::new(1024, 11);
        field.configure(config(mode));
        for i in 0..600 {
            field.step(i as f32 / 60.0, 1.0 / 60.0).unwrap();
        }
        let ext = PARTICLE_DOMAIN_HALF_EXTENT;
        for p in field.positions() {
            assert!(
                p.x.abs() <= ext && p.y.abs() <= ext && p.z.abs() <= ext,
                "{mode:?} escaped the domain: {p:?}"
            );
        }
    }
}

#[test]
fn attract_converges_toward_the_attractor() {
    let mut field = ParticleField::new(1024, 13);
    let target = Vec3::new(2.0, 1.0, -3.0);
    field.configure(ParticleConfig {
        mode: ParticleMode::Attract,
        attractor: target,
        ..ParticleConfig::default()
    });
    let before: f32 = field
        .positions()
        .iter()
        .map(|p| p.distance(target))
        .sum::<f32>()
        / field.len() as f32;
    for i in 0..600 {
        field.step(i as f32 / 60.0, 1.0 / 60.0).unwrap();
    }
    let after: f32 = field
        .positions()
        .iter()
        .map(|p| p.distance(target))
        .sum::<f32>()
        / field.len() as f32;
    assert!(after < before * 0.5);
}

#[test]
fn explode_pushes_mass_away_from_the_origin() {
    let mut field = ParticleField::new(1024, 17);
    field.configure(config(ParticleMode::Explode));
    let before: f32 =
        field.positions().iter().map(|p| p.length()).sum::<f32>() / field.len() as f32;
    for i in 0..60 {
        field.step(i as f32 / 60.0, 1.0 / 60.0).unwrap();
    }
    let after: f32 =
        field.positions().iter().map(|p| p.length()).sum::<f32>() / field.len() as f32;
    assert!(after > before);
}

#[test]
fn dispose_is_idempotent_and_fails_later_steps() {
    let mut field = ParticleField::new(1024, 19);
    field.dispose();
    field.dispose();
    assert!(field.is_disposed());
    assert!(field.is_empty());
    match field.step(0.0, 1.0 / 60.0) {
        Err(ParticleError::Disposed) => {}
        other => panic!("expected Disposed, got {other:?}"),
    }
}

#[test]
fn pulse_is_clamped() {
    let mut field = ParticleField::new(1024, 23);
    field.set_pulse(9.0);
    assert!(field.pulse() <= 1.5);
    field.set_pulse(-1.0);
    assert_eq!(field.pulse(), 0.0);
}
