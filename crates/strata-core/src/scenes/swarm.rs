//! Chapter 4: a murmuration that chases the pointer.

use super::{Scene, SceneCommon};
use crate::camera::Camera;
use crate::context::{RuntimeContext, Viewport};
use crate::draw::{DrawList, InstanceData};
use crate::error::SceneError;
use crate::math::damp_vec3;
use crate::particles::{ParticleConfig, ParticleMode};
use glam::{Vec3, Vec4};
use rand::Rng;

const AGENTS: usize = 260;
const RADIUS: f32 = 9.0;

struct Agent {
    offset: Vec3,
    freq: Vec3,
    phase: Vec3,
}

pub struct Swarm {
    common: SceneCommon,
    agents: Vec<Agent>,
    center: Vec3,
}

impl Swarm {
    pub fn new(seed: u64) -> Self {
        Self {
            common: SceneCommon::new(seed),
            agents: Vec::new(),
            center: Vec3::ZERO,
        }
    }
}

impl Scene for Swarm {
    fn id(&self) -> &'static str {
        "swarm"
    }

    fn content_radius(&self) -> f32 {
        RADIUS
    }

    fn particle_config(&self) -> ParticleConfig {
        ParticleConfig {
            mode: ParticleMode::Attract,
            color: Vec3::new(0.95, 0.8, 0.45),
            speed: 0.8,
            attractor: Vec3::ZERO,
        }
    }

    fn init(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        let rng = &mut self.common.rng;
        self.agents = (0..AGENTS)
            .map(|_| Agent {
                offset: Vec3::new(
                    rng.gen_range(-3.0..3.0),
                    rng.gen_range(-2.0..2.0),
                    rng.gen_range(-3.0..3.0),
                ),
                freq: Vec3::new(
                    rng.gen_range(0.5..1.4),
                    rng.gen_range(0.5..1.4),
                    rng.gen_range(0.5..1.4),
                ),
                phase: Vec3::new(
                    rng.gen_range(0.0..6.28),
                    rng.gen_range(0.0..6.28),
                    rng.gen_range(0.0..6.28),
                ),
            })
            .collect();
        self.common.instances =
            vec![InstanceData::new(Vec3::ZERO, 0.12, Vec4::ONE, 0.0); AGENTS];
        self.common.frame(RADIUS, viewport);
        Ok(())
    }

    fn resize(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        self.common.frame(RADIUS, viewport);
        Ok(())
    }

    fn update(&mut self, ctx: &RuntimeContext) -> Result<(), SceneError> {
        // swarm center eases toward the pointer projected onto the content
        // plane; press pulls the flock tight
        let target = Vec3::new(ctx.pointer.x * 5.0, ctx.pointer.y * 3.5, 0.0);
        self.center = damp_vec3(self.center, target, 3.0, ctx.dt);
        let cohesion = 1.0 - 0.6 * ctx.press_intensity;
        for (agent, inst) in self.agents.iter().zip(self.common.instances.iter_mut()) {
            let flutter = Vec3::new(
                (ctx.time * agent.freq.x + agent.phase.x).sin(),
                (ctx.time * agent.freq.y + agent.phase.y).sin(),
                (ctx.time * agent.freq.z + agent.phase.z).sin(),
            ) * 1.1;
            let p = self.center + agent.offset * cohesion + flutter;
            inst.pos = p.to_array();
            inst.scale = 0.1 + 0.05 * (ctx.time * 3.0 + agent.phase.x).sin().abs();
            inst.color = Vec4::new(0.95, 0.75 + 0.2 * flutter.y.abs() * 0.5, 0.4, 0.9).to_array();
            inst.glow = ctx.tap_pulse * 0.8;
        }
        self.common.aim(ctx);
        Ok(())
    }

    fn render(&self, out: &mut DrawList) {
        out.extend_from(&self.common.instances);
    }

    fn dispose(&mut self) {
        self.agents = Vec::new();
        self.common.dispose();
    }

    fn camera(&self) -> &Camera {
        &self.common.camera
    }
}
