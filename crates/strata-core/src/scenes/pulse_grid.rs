//! Chapter 14: a flat dot grid carrying concentric pulse waves from the
//! pointer; each tap launches a new wavefront.

use super::{Scene, SceneCommon};
use crate::camera::Camera;
use crate::context::{RuntimeContext, Viewport};
use crate::draw::{DrawList, InstanceData};
use crate::error::SceneError;
use crate::particles::{ParticleConfig, ParticleMode};
use glam::{Vec2, Vec3, Vec4};

const GRID: usize = 24;
const EXTENT: f32 = 7.5;
const RADIUS: f32 = 8.0;
const WAVE_SLOTS: usize = 3;

pub struct PulseGrid {
    common: SceneCommon,
    // (origin, start time) per live wave; oldest slot reused
    waves: [(Vec2, f32); WAVE_SLOTS],
    next_wave: usize,
}

impl PulseGrid {
    pub fn new(seed: u64) -> Self {
        Self {
            common: SceneCommon::new(seed),
            waves: [(Vec2::ZERO, f32::NEG_INFINITY); WAVE_SLOTS],
            next_wave: 0,
        }
    }
}

impl Scene for PulseGrid {
    fn id(&self) -> &'static str {
        "pulse-grid"
    }

    fn content_radius(&self) -> f32 {
        RADIUS
    }

    fn particle_config(&self) -> ParticleConfig {
        ParticleConfig {
            mode: ParticleMode::Idle,
            color: Vec3::new(0.5, 1.0, 0.7),
            speed: 1.3,
            attractor: Vec3::ZERO,
        }
    }

    fn init(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        self.common.instances =
            vec![InstanceData::new(Vec3::ZERO, 0.1, Vec4::ONE, 0.0); GRID * GRID];
        self.common.frame(RADIUS, viewport);
        Ok(())
    }

    fn resize(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        self.common.frame(RADIUS, viewport);
        Ok(())
    }

    fn update(&mut self, ctx: &RuntimeContext) -> Result<(), SceneError> {
        if ctx.tap_pulse > 0.95 {
            self.waves[self.next_wave] =
                (Vec2::new(ctx.pointer.x, ctx.pointer.y) * EXTENT, ctx.time);
            self.next_wave = (self.next_wave + 1) % WAVE_SLOTS;
        }
        let hot = Vec2::new(ctx.pointer.x, ctx.pointer.y) * EXTENT;
        for ix in 0..GRID {
            for iz in 0..GRID {
                let u = ix as f32 / (GRID - 1) as f32;
                let v = iz as f32 / (GRID - 1) as f32;
                let cell = Vec2::new((u - 0.5) * 2.0 * EXTENT, (v - 0.5) * 2.0 * EXTENT);
                let mut lift = 0.0f32;
                let mut energy = 0.0f32;
                for (origin, t0) in &self.waves {
                    let age = ctx.time - t0;
                    if age < 0.0 || age > 4.0 {
                        continue;
                    }
                    let front = age * 5.5;
                    let hit = (1.0 - ((cell.distance(*origin) - front).abs() / 1.0)).max(0.0);
                    let fade = (1.0 - age / 4.0).max(0.0);
                    lift += hit * fade * 1.6;
                    energy += hit * fade;
                }
                // resting shimmer plus proximity warmth around the pointer
                let near = (1.0 - cell.distance(hot) / (EXTENT * 1.4)).clamp(0.0, 1.0);
                let idle = (ctx.time * 1.8 + (ix + iz) as f32 * 0.4).sin() * 0.12;
                let inst = &mut self.common.instances[ix * GRID + iz];
                inst.pos = [cell.x, lift + idle - 1.0, cell.y];
                inst.scale = 0.09 + 0.1 * energy + 0.04 * near;
                inst.color =
                    Vec4::new(0.3 + 0.5 * energy, 0.9, 0.55 + 0.3 * near, 0.9).to_array();
                inst.glow = energy * 1.2;
            }
        }
        self.common.aim(ctx);
        Ok(())
    }

    fn render(&self, out: &mut DrawList) {
        out.extend_from(&self.common.instances);
    }

    fn dispose(&mut self) {
        self.common.dispose();
    }

    fn camera(&self) -> &Camera {
        &self.common.camera
    }
}
