//! Chapter 13: a funnel vortex; press deepens the throat.

use super::{Scene, SceneCommon};
use crate::camera::Camera;
use crate::context::{RuntimeContext, Viewport};
use crate::draw::{DrawList, InstanceData};
use crate::error::SceneError;
use crate::math::lerp;
use crate::particles::{ParticleConfig, ParticleMode};
use glam::{Vec3, Vec4};
use rand::Rng;

const MOTES: usize = 600;
const RADIUS: f32 = 9.0;

pub struct Maelstrom {
    common: SceneCommon,
    // (orbit phase, depth fraction, radial jitter)
    motes: Vec<(f32, f32, f32)>,
}

impl Maelstrom {
    pub fn new(seed: u64) -> Self {
        Self {
            common: SceneCommon::new(seed),
            motes: Vec::new(),
        }
    }
}

impl Scene for Maelstrom {
    fn id(&self) -> &'static str {
        "maelstrom"
    }

    fn content_radius(&self) -> f32 {
        RADIUS
    }

    fn particle_config(&self) -> ParticleConfig {
        ParticleConfig {
            mode: ParticleMode::Vortex,
            color: Vec3::new(0.35, 0.7, 0.85),
            speed: 1.5,
            attractor: Vec3::ZERO,
        }
    }

    fn init(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        let rng = &mut self.common.rng;
        self.motes = (0..MOTES)
            .map(|_| {
                (
                    rng.gen_range(0.0..6.28),
                    rng.gen_range(0.0f32..1.0),
                    rng.gen_range(0.85..1.15),
                )
            })
            .collect();
        self.common.instances = vec![InstanceData::new(Vec3::ZERO, 0.09, Vec4::ONE, 0.0); MOTES];
        self.common.frame(RADIUS, viewport);
        Ok(())
    }

    fn resize(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        self.common.frame(RADIUS, viewport);
        Ok(())
    }

    fn update(&mut self, ctx: &RuntimeContext) -> Result<(), SceneError> {
        let depth_span = lerp(6.0, 11.0, ctx.press_intensity);
        for ((phase, depth, jitter), inst) in
            self.motes.iter().zip(self.common.instances.iter_mut())
        {
            // deeper motes sit on a narrower ring and spin faster
            let funnel_r = lerp(RADIUS * 0.85, 0.5, *depth) * jitter;
            let angular = lerp(0.5, 3.2, *depth);
            let a = phase + ctx.time * angular;
            let y = lerp(2.5, 2.5 - depth_span, *depth);
            inst.pos = [a.cos() * funnel_r, y, a.sin() * funnel_r];
            inst.scale = 0.07 + 0.08 * depth;
            let churn = depth * depth;
            inst.color = Vec4::new(
                0.2 + 0.5 * churn,
                0.5 + 0.35 * churn,
                0.85,
                0.5 + 0.5 * depth,
            )
            .to_array();
            inst.glow = churn * 0.7 + ctx.tap_pulse * 0.5;
        }
        self.common.aim(ctx);
        Ok(())
    }

    fn render(&self, out: &mut DrawList) {
        out.extend_from(&self.common.instances);
    }

    fn dispose(&mut self) {
        self.motes = Vec::new();
        self.common.dispose();
    }

    fn camera(&self) -> &Camera {
        &self.common.camera
    }
}
