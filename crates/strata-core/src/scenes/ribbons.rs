//! Chapter 7: flowing ribbon trails; pointer height shapes the amplitude.

use super::{Scene, SceneCommon};
use crate::camera::Camera;
use crate::context::{RuntimeContext, Viewport};
use crate::draw::{DrawList, InstanceData};
use crate::error::SceneError;
use crate::particles::{ParticleConfig, ParticleMode};
use glam::{Vec3, Vec4};

const RIBBON_COUNT: usize = 5;
const SEGMENTS: usize = 120;
const RADIUS: f32 = 8.0;

pub struct Ribbons {
    common: SceneCommon,
}

impl Ribbons {
    pub fn new(seed: u64) -> Self {
        Self {
            common: SceneCommon::new(seed),
        }
    }
}

impl Scene for Ribbons {
    fn id(&self) -> &'static str {
        "ribbons"
    }

    fn content_radius(&self) -> f32 {
        RADIUS
    }

    fn particle_config(&self) -> ParticleConfig {
        ParticleConfig {
            mode: ParticleMode::Idle,
            color: Vec3::new(0.9, 0.5, 0.9),
            speed: 1.1,
            attractor: Vec3::ZERO,
        }
    }

    fn init(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        self.common.instances =
            vec![InstanceData::new(Vec3::ZERO, 0.1, Vec4::ONE, 0.0); RIBBON_COUNT * SEGMENTS];
        self.common.frame(RADIUS, viewport);
        Ok(())
    }

    fn resize(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        self.common.frame(RADIUS, viewport);
        Ok(())
    }

    fn update(&mut self, ctx: &RuntimeContext) -> Result<(), SceneError> {
        let amp = 1.6 + ctx.pointer.y * 1.2 + ctx.press_intensity;
        for ribbon in 0..RIBBON_COUNT {
            let lane = (ribbon as f32 - (RIBBON_COUNT as f32 - 1.0) * 0.5) * 1.6;
            let hue = ribbon as f32 / RIBBON_COUNT as f32;
            for seg in 0..SEGMENTS {
                let t = seg as f32 / (SEGMENTS - 1) as f32;
                let x = (t - 0.5) * 2.0 * RADIUS * 0.9;
                let flow = ctx.time * 1.4 + ribbon as f32 * 1.3;
                let y = (x * 0.5 + flow).sin() * amp + (x * 0.23 - flow * 0.7).sin();
                let z = lane + (x * 0.35 + flow * 0.5).cos() * 0.9;
                let inst = &mut self.common.instances[ribbon * SEGMENTS + seg];
                inst.pos = [x, y, z];
                // taper toward the ends
                inst.scale = 0.16 * (1.0 - (t * 2.0 - 1.0).abs() * 0.6);
                inst.color =
                    Vec4::new(0.75 + 0.2 * hue, 0.35 + 0.3 * (1.0 - hue), 0.95, 0.85).to_array();
                inst.glow = ctx.tap_pulse * (1.0 - t);
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
