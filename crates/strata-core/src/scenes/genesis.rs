//! Chapter 1: a nebula of seed points coalescing into a core.

use super::{Scene, SceneCommon};
use crate::camera::Camera;
use crate::context::{RuntimeContext, Viewport};
use crate::draw::{DrawList, InstanceData};
use crate::error::SceneError;
use crate::math::lerp;
use crate::particles::{ParticleConfig, ParticleMode};
use glam::{Vec3, Vec4};
use rand::Rng;

const POINT_COUNT: usize = 420;
const RADIUS: f32 = 6.0;

pub struct Genesis {
    common: SceneCommon,
    // unit direction + per-point phase, fixed at init
    seeds: Vec<(Vec3, f32)>,
}

impl Genesis {
    pub fn new(seed: u64) -> Self {
        Self {
            common: SceneCommon::new(seed),
            seeds: Vec::new(),
        }
    }
}

impl Scene for Genesis {
    fn id(&self) -> &'static str {
        "genesis"
    }

    fn content_radius(&self) -> f32 {
        RADIUS
    }

    fn particle_config(&self) -> ParticleConfig {
        ParticleConfig {
            mode: ParticleMode::Idle,
            color: Vec3::new(0.55, 0.65, 1.0),
            speed: 0.7,
            attractor: Vec3::ZERO,
        }
    }

    fn init(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        let rng = &mut self.common.rng;
        self.seeds = (0..POINT_COUNT)
            .map(|_| {
                let dir = Vec3::new(
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0),
                )
                .normalize_or_zero();
                (dir, rng.gen_range(0.0..std::f32::consts::TAU))
            })
            .collect();
        self.common.instances = self
            .seeds
            .iter()
            .map(|_| InstanceData::new(Vec3::ZERO, 0.1, Vec4::ONE, 0.0))
            .collect();
        self.common.frame(RADIUS, viewport);
        Ok(())
    }

    fn resize(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        self.common.frame(RADIUS, viewport);
        Ok(())
    }

    fn update(&mut self, ctx: &RuntimeContext) -> Result<(), SceneError> {
        // Points breathe on a shell that collapses toward a core as the
        // chapter progresses.
        let shell = lerp(RADIUS * 0.9, RADIUS * 0.25, ctx.local_progress);
        for ((dir, phase), inst) in self.seeds.iter().zip(self.common.instances.iter_mut()) {
            let wobble = (ctx.time * 0.8 + phase).sin() * 0.8;
            let r = (shell + wobble).max(0.3);
            let p = *dir * r;
            inst.pos = p.to_array();
            inst.scale = 0.10 + 0.06 * (ctx.time * 1.7 + phase * 3.0).sin().abs();
            let heat = 1.0 - (r / RADIUS).clamp(0.0, 1.0);
            inst.color = Vec4::new(
                0.45 + 0.5 * heat,
                0.5 + 0.3 * heat,
                0.95,
                0.9,
            )
            .to_array();
            inst.glow = ctx.tap_pulse * 1.2 + heat * 0.4;
        }
        self.common.aim(ctx);
        Ok(())
    }

    fn render(&self, out: &mut DrawList) {
        out.extend_from(&self.common.instances);
    }

    fn dispose(&mut self) {
        self.seeds = Vec::new();
        self.common.dispose();
    }

    fn camera(&self) -> &Camera {
        &self.common.camera
    }
}
