//! Chapter 5: an interference wave field; gyro steers the swell.

use super::{Scene, SceneCommon};
use crate::camera::Camera;
use crate::context::{RuntimeContext, Viewport};
use crate::draw::{DrawList, InstanceData};
use crate::error::SceneError;
use crate::particles::{ParticleConfig, ParticleMode};
use glam::{Vec2, Vec3, Vec4};

const GRID: usize = 42;
const EXTENT: f32 = 9.0;
const RADIUS: f32 = 10.0;

pub struct Tidepool {
    common: SceneCommon,
}

impl Tidepool {
    pub fn new(seed: u64) -> Self {
        Self {
            common: SceneCommon::new(seed),
        }
    }
}

fn height(xz: Vec2, t: f32, drift: Vec2) -> f32 {
    let a = (xz.x * 0.7 + t * 1.3 + drift.x * 2.0).sin();
    let b = (xz.y * 0.55 - t * 0.9 + drift.y * 2.0).sin();
    let c = ((xz.x + xz.y) * 0.35 + t * 0.6).sin();
    (a + b) * 0.8 + c * 0.5
}

impl Scene for Tidepool {
    fn id(&self) -> &'static str {
        "tidepool"
    }

    fn content_radius(&self) -> f32 {
        RADIUS
    }

    fn particle_config(&self) -> ParticleConfig {
        ParticleConfig {
            mode: ParticleMode::Idle,
            color: Vec3::new(0.35, 0.8, 0.9),
            speed: 0.9,
            attractor: Vec3::ZERO,
        }
    }

    fn init(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        self.common.instances =
            vec![InstanceData::new(Vec3::ZERO, 0.12, Vec4::ONE, 0.0); GRID * GRID];
        self.common.frame(RADIUS, viewport);
        Ok(())
    }

    fn resize(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        self.common.frame(RADIUS, viewport);
        Ok(())
    }

    fn update(&mut self, ctx: &RuntimeContext) -> Result<(), SceneError> {
        let drift = Vec2::new(ctx.gyro.y, ctx.gyro.x);
        let amp = 1.0 + ctx.press_intensity * 1.2 + ctx.tap_pulse * 0.8;
        for ix in 0..GRID {
            for iz in 0..GRID {
                let u = ix as f32 / (GRID - 1) as f32;
                let v = iz as f32 / (GRID - 1) as f32;
                let xz = Vec2::new((u - 0.5) * 2.0 * EXTENT, (v - 0.5) * 2.0 * EXTENT);
                let h = height(xz, ctx.time, drift) * amp;
                let inst = &mut self.common.instances[ix * GRID + iz];
                inst.pos = [xz.x, h - 1.5, xz.y];
                inst.scale = 0.11 + 0.04 * (h * 0.5 + 0.5).clamp(0.0, 1.0);
                let crest = ((h + 2.0) / 4.0).clamp(0.0, 1.0);
                inst.color = Vec4::new(0.15 + 0.3 * crest, 0.55 + 0.35 * crest, 0.95, 0.9)
                    .to_array();
                inst.glow = crest * crest * 0.6;
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
