//! Chapter 17: the finale. Chapter progress drives the detonation from
//! a compressed core into a radial ejecta shell.

use super::{Scene, SceneCommon};
use crate::camera::Camera;
use crate::context::{RuntimeContext, Viewport};
use crate::draw::{DrawList, InstanceData};
use crate::error::SceneError;
use crate::math::lerp;
use crate::particles::{ParticleConfig, ParticleMode};
use glam::{Vec3, Vec4};
use rand::Rng;

const EJECTA: usize = 800;
const RADIUS: f32 = 12.0;

pub struct Supernova {
    common: SceneCommon,
    // unit direction and speed class per fragment
    ejecta: Vec<(Vec3, f32)>,
}

impl Supernova {
    pub fn new(seed: u64) -> Self {
        Self {
            common: SceneCommon::new(seed),
            ejecta: Vec::new(),
        }
    }
}

impl Scene for Supernova {
    fn id(&self) -> &'static str {
        "supernova"
    }

    fn content_radius(&self) -> f32 {
        RADIUS
    }

    fn particle_config(&self) -> ParticleConfig {
        ParticleConfig {
            mode: ParticleMode::Explode,
            color: Vec3::new(1.0, 0.6, 0.3),
            speed: 1.8,
            attractor: Vec3::ZERO,
        }
    }

    fn init(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        let rng = &mut self.common.rng;
        self.ejecta = (0..EJECTA)
            .map(|_| {
                let dir = Vec3::new(
                    rng.gen_range(-1.0f32..1.0),
                    rng.gen_range(-1.0f32..1.0),
                    rng.gen_range(-1.0f32..1.0),
                )
                .normalize_or(Vec3::Y);
                (dir, rng.gen_range(0.55f32..1.0))
            })
            .collect();
        // slot 0 is the core
        self.common.instances =
            vec![InstanceData::new(Vec3::ZERO, 0.1, Vec4::ONE, 0.0); EJECTA + 1];
        self.common.frame(RADIUS, viewport);
        Ok(())
    }

    fn resize(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        self.common.frame(RADIUS, viewport);
        Ok(())
    }

    fn update(&mut self, ctx: &RuntimeContext) -> Result<(), SceneError> {
        // progress through the chapter is the detonation clock
        let blast = ctx.local_progress.clamp(0.0, 1.0);
        let shell = blast.powf(0.6) * RADIUS * 0.9;
        let core = &mut self.common.instances[0];
        // the core collapses as the shell expands
        core.pos = [0.0, 0.0, 0.0];
        core.scale = lerp(1.6, 0.25, blast) * (1.0 + ctx.press_intensity * 0.4);
        core.color = Vec4::new(1.0, lerp(0.9, 0.4, blast), lerp(0.7, 0.2, blast), 1.0).to_array();
        core.glow = 2.0 * (1.0 - blast) + ctx.tap_pulse;

        for ((dir, speed), inst) in self
            .ejecta
            .iter()
            .zip(self.common.instances[1..].iter_mut())
        {
            let r = shell * speed;
            let shimmer = (ctx.time * 4.0 + dir.x * 13.0 + dir.y * 7.0).sin() * 0.5 + 0.5;
            inst.pos = (*dir * r).to_array();
            inst.scale = lerp(0.02, 0.12, blast * speed);
            let heat = (1.0 - speed) + (1.0 - blast) * 0.5;
            inst.color = Vec4::new(
                1.0,
                0.35 + 0.5 * heat,
                0.15 + 0.3 * heat,
                lerp(0.0, 0.9, (blast * 3.0).min(1.0)),
            )
            .to_array();
            inst.glow = heat * shimmer + ctx.tap_pulse * 0.5;
        }
        self.common.aim(ctx);
        Ok(())
    }

    fn render(&self, out: &mut DrawList) {
        out.extend_from(&self.common.instances);
    }

    fn dispose(&mut self) {
        self.ejecta = Vec::new();
        self.common.dispose();
    }

    fn camera(&self) -> &Camera {
        &self.common.camera
    }
}
