//! Shared particle field simulation.
//!
//! One field exists for the whole tower; scenes never own it. State lives in
//! two equal-size buffers (position, velocity) addressed as a square grid and
//! is uploaded wholesale into the renderer's instance buffer each frame, so
//! reparenting the field between scenes moves no data at all.

use crate::constants::{
    IDLE_FRICTION, PARTICLE_DOMAIN_HALF_EXTENT, PARTICLE_GRID_MAX, PARTICLE_GRID_MIN,
    PARTICLE_SUB_STEP_SEC, RAIN_FLOOR_Y, RAIN_RESEED_Y_MAX, RAIN_RESEED_Y_MIN,
};
use crate::error::ParticleError;
use glam::Vec3;
use rand::prelude::*;

/// Physical behavior applied by `step`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleMode {
    Idle,
    Rain,
    Vortex,
    Explode,
    Attract,
    Snow,
}

impl ParticleMode {
    pub fn name(&self) -> &'static str {
        match self {
            ParticleMode::Idle => "idle",
            ParticleMode::Rain => "rain",
            ParticleMode::Vortex => "vortex",
            ParticleMode::Explode => "explode",
            ParticleMode::Attract => "attract",
            ParticleMode::Snow => "snow",
        }
    }
}

/// Simulation parameters; applied at the start of the next step.
#[derive(Clone, Copy, Debug)]
pub struct ParticleConfig {
    pub mode: ParticleMode,
    pub color: Vec3,
    pub speed: f32,
    pub attractor: Vec3,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            mode: ParticleMode::Idle,
            color: Vec3::new(0.75, 0.82, 0.95),
            speed: 1.0,
            attractor: Vec3::ZERO,
        }
    }
}

pub struct ParticleField {
    grid_side: usize,
    positions: Vec<Vec3>,
    velocities: Vec<Vec3>,
    config: ParticleConfig,
    pending: Option<ParticleConfig>,
    pulse: f32,
    rng: StdRng,
    disposed: bool,
}

impl ParticleField {
    /// Build a field of `max_particles` quantized to a square grid of side
    /// `clamp(ceil(sqrt(max_particles)), 32, 256)`.
    pub fn new(max_particles: usize, seed: u64) -> Self {
        let side = ((max_particles as f32).sqrt().ceil() as usize)
            .clamp(PARTICLE_GRID_MIN, PARTICLE_GRID_MAX);
        let count = side * side;
        let mut rng = StdRng::seed_from_u64(seed);
        let ext = PARTICLE_DOMAIN_HALF_EXTENT;
        let positions = (0..count)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-ext..ext),
                    rng.gen_range(-ext..ext),
                    rng.gen_range(-ext..ext),
                )
            })
            .collect();
        let velocities = vec![Vec3::ZERO; count];
        Self {
            grid_side: side,
            positions,
            velocities,
            config: ParticleConfig::default(),
            pending: None,
            pulse: 0.0,
            rng,
            disposed: false,
        }
    }

    /// Stage new simulation parameters; they take effect on the next step.
    pub fn configure(&mut self, config: ParticleConfig) {
        self.pending = Some(config);
    }

    /// Interaction pulse driving the reactive gain in idle drift and the
    /// render-time sprite flash.
    pub fn set_pulse(&mut self, pulse: f32) {
        self.pulse = pulse.clamp(0.0, 1.5);
    }

    /// Advance the simulation by one fixed internal sub-step (0.016 s)
    /// regardless of the caller's `dt`; callers tick once per frame and the
    /// field moves at a 60 Hz reference rate.
    pub fn step(&mut self, time: f32, _dt: f32) -> Result<(), ParticleError> {
        if self.disposed {
            return Err(ParticleError::Disposed);
        }
        if let Some(cfg) = self.pending.take() {
            self.config = cfg;
        }
        let h = PARTICLE_SUB_STEP_SEC;
        let cfg = self.config;
        let s = cfg.speed;

        match cfg.mode {
            ParticleMode::Idle => {
                let gain = s * (1.0 + 1.5 * self.pulse);
                for (p, v) in self.positions.iter_mut().zip(self.velocities.iter_mut()) {
                    *v += curl_drift(*p, time) * (1.4 * gain * h);
                    *v *= IDLE_FRICTION;
                    *p += *v * h;
                }
            }
            ParticleMode::Rain => {
                for (p, v) in self.positions.iter_mut().zip(self.velocities.iter_mut()) {
                    v.y -= 22.0 * s * h;
                    v.x *= 0.96;
                    v.z *= 0.96;
                    *p += *v * h;
                }
            }
            ParticleMode::Vortex => {
                for (p, v) in self.positions.iter_mut().zip(self.velocities.iter_mut()) {
                    let radial = Vec3::new(p.x, 0.0, p.z);
                    let r = radial.length().max(0.4);
                    let inward = -radial / r;
                    let tangent = Vec3::new(-p.z, 0.0, p.x) / r;
                    *v += (inward * 6.0 + tangent * 9.0) * (s * h);
                    v.y += -p.y * 0.8 * s * h;
                    *v *= 0.985;
                    *p += *v * h;
                }
            }
            ParticleMode::Explode => {
                for (p, v) in self.positions.iter_mut().zip(self.velocities.iter_mut()) {
                    let d = *p - cfg.attractor;
                    let r2 = d.length_squared().max(0.25);
                    *v += d / r2.sqrt() * (40.0 * s * h / r2);
                    *v *= 0.995;
                    *p += *v * h;
                }
            }
            ParticleMode::Attract => {
                for (p, v) in self.positions.iter_mut().zip(self.velocities.iter_mut()) {
                    let d = cfg.attractor - *p;
                    *v += d * (2.5 * s * h);
                    *v *= 0.94;
                    *p += *v * h;
                }
            }
            ParticleMode::Snow => {
                for (p, v) in self.positions.iter_mut().zip(self.velocities.iter_mut()) {
                    v.y -= 1.6 * s * h;
                    v.x += (time * 0.9 + p.y * 0.45).sin() * 0.7 * h;
                    v.z += (time * 0.7 + p.x * 0.45).cos() * 0.7 * h;
                    *v *= 0.975;
                    *p += *v * h;
                }
            }
        }

        self.apply_boundary(cfg.mode);

        for p in &self.positions {
            if !p.is_finite() {
                return Err(ParticleError::NonFinite {
                    mode: cfg.mode.name(),
                    time,
                });
            }
        }
        Ok(())
    }

    fn apply_boundary(&mut self, mode: ParticleMode) {
        let ext = PARTICLE_DOMAIN_HALF_EXTENT;
        match mode {
            ParticleMode::Rain => {
                // Fallen drops reseed into the top band, never wrap through
                // the bottom.
                for (p, v) in self.positions.iter_mut().zip(self.velocities.iter_mut()) {
                    if p.y < RAIN_FLOOR_Y {
                        p.y = self.rng.gen_range(RAIN_RESEED_Y_MIN..RAIN_RESEED_Y_MAX);
                        p.x = self.rng.gen_range(-ext..ext);
                        p.z = self.rng.gen_range(-ext..ext);
                        v.y *= 0.25;
                    }
                    p.x = wrap_axis(p.x, ext);
                    p.z = wrap_axis(p.z, ext);
                }
            }
            _ => {
                // Toroidal wrap at the cubic domain: cross a face, reappear
                // on the opposite one.
                for p in self.positions.iter_mut() {
                    p.x = wrap_axis(p.x, ext);
                    p.y = wrap_axis(p.y, ext);
                    p.z = wrap_axis(p.z, ext);
                }
            }
        }
    }

    /// Idempotent: the second call is a no-op.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.positions = Vec::new();
        self.velocities = Vec::new();
        self.disposed = true;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn grid_side(&self) -> usize {
        self.grid_side
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    pub fn config(&self) -> ParticleConfig {
        self.config
    }

    pub fn pulse(&self) -> f32 {
        self.pulse
    }
}

#[inline]
fn wrap_axis(v: f32, ext: f32) -> f32 {
    if v > ext {
        v - ext * 2.0
    } else if v < -ext {
        v + ext * 2.0
    } else {
        v
    }
}

/// Analytic divergence-light drift field used for idle motion; cheap stand-in
/// for sampled curl noise.
#[inline]
fn curl_drift(p: Vec3, t: f32) -> Vec3 {
    let f = 0.35;
    Vec3::new(
        (p.y * f + t * 0.6).sin() * (p.z * f - t * 0.4).cos(),
        (p.z * f + t * 0.5).sin() * (p.x * f + t * 0.3).cos(),
        (p.x * f - t * 0.7).sin() * (p.y * f + t * 0.2).cos(),
    )
}
