//! Chapter 10: rotating crystal shards refracting under press.

use super::{Scene, SceneCommon};
use crate::camera::Camera;
use crate::context::{RuntimeContext, Viewport};
use crate::draw::{DrawList, InstanceData};
use crate::error::SceneError;
use crate::particles::{ParticleConfig, ParticleMode};
use glam::{Mat3, Vec3, Vec4};
use rand::Rng;

const SHARDS: usize = 320;
const RADIUS: f32 = 6.0;

pub struct Crystal {
    common: SceneCommon,
    // shard anchor, facet axis and glint phase
    shards: Vec<(Vec3, Vec3, f32)>,
}

impl Crystal {
    pub fn new(seed: u64) -> Self {
        Self {
            common: SceneCommon::new(seed),
            shards: Vec::new(),
        }
    }
}

impl Scene for Crystal {
    fn id(&self) -> &'static str {
        "crystal"
    }

    fn content_radius(&self) -> f32 {
        RADIUS
    }

    fn particle_config(&self) -> ParticleConfig {
        ParticleConfig {
            mode: ParticleMode::Attract,
            color: Vec3::new(0.7, 0.95, 1.0),
            speed: 1.2,
            attractor: Vec3::ZERO,
        }
    }

    fn init(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        let rng = &mut self.common.rng;
        self.shards = (0..SHARDS)
            .map(|_| {
                // cluster along five spires
                let spire = rng.gen_range(0..5) as f32;
                let a = spire / 5.0 * std::f32::consts::TAU;
                let h = rng.gen_range(-1.0f32..1.0);
                let spread = rng.gen_range(0.1..0.9);
                let anchor = Vec3::new(
                    a.cos() * 2.2 * spread,
                    h * 4.0,
                    a.sin() * 2.2 * spread,
                );
                let axis = Vec3::new(
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0),
                )
                .normalize_or_zero();
                (anchor, axis, rng.gen_range(0.0..6.28))
            })
            .collect();
        self.common.instances = vec![InstanceData::new(Vec3::ZERO, 0.1, Vec4::ONE, 0.0); SHARDS];
        self.common.frame(RADIUS, viewport);
        Ok(())
    }

    fn resize(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        self.common.frame(RADIUS, viewport);
        Ok(())
    }

    fn update(&mut self, ctx: &RuntimeContext) -> Result<(), SceneError> {
        let rot = Mat3::from_rotation_y(ctx.time * 0.25);
        let refract = ctx.press_intensity;
        for ((anchor, axis, phase), inst) in
            self.shards.iter().zip(self.common.instances.iter_mut())
        {
            // press pushes shards out along their facet axis
            let p = rot * (*anchor + *axis * refract * 1.8);
            inst.pos = p.to_array();
            let glint = (ctx.time * 3.4 + phase).sin().max(0.0).powi(3);
            inst.scale = 0.12 + 0.1 * glint;
            inst.color = Vec4::new(
                0.55 + 0.4 * glint,
                0.85,
                1.0,
                0.85,
            )
            .to_array();
            inst.glow = glint * (0.5 + refract) + ctx.tap_pulse;
        }
        self.common.aim(ctx);
        Ok(())
    }

    fn render(&self, out: &mut DrawList) {
        out.extend_from(&self.common.instances);
    }

    fn dispose(&mut self) {
        self.shards = Vec::new();
        self.common.dispose();
    }

    fn camera(&self) -> &Camera {
        &self.common.camera
    }
}
