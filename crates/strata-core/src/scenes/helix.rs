//! Chapter 2: a double helix that tightens under press.

use super::{Scene, SceneCommon};
use crate::camera::Camera;
use crate::context::{RuntimeContext, Viewport};
use crate::draw::{DrawList, InstanceData};
use crate::error::SceneError;
use crate::math::lerp;
use crate::particles::{ParticleConfig, ParticleMode};
use glam::{Vec3, Vec4};

const NODES_PER_STRAND: usize = 160;
const RUNGS: usize = 26;
const RADIUS: f32 = 7.0;
const HELIX_HEIGHT: f32 = 11.0;

pub struct Helix {
    common: SceneCommon,
    spin: f32,
}

impl Helix {
    pub fn new(seed: u64) -> Self {
        Self {
            common: SceneCommon::new(seed),
            spin: 0.0,
        }
    }

    fn node(&self, strand: f32, i: usize, twist: f32, coil_r: f32) -> Vec3 {
        let t = i as f32 / (NODES_PER_STRAND - 1) as f32;
        let angle = self.spin + t * twist + strand * std::f32::consts::PI;
        Vec3::new(
            angle.cos() * coil_r,
            (t - 0.5) * HELIX_HEIGHT,
            angle.sin() * coil_r,
        )
    }
}

impl Scene for Helix {
    fn id(&self) -> &'static str {
        "helix"
    }

    fn content_radius(&self) -> f32 {
        RADIUS
    }

    fn particle_config(&self) -> ParticleConfig {
        ParticleConfig {
            mode: ParticleMode::Idle,
            color: Vec3::new(0.4, 0.95, 0.8),
            speed: 1.0,
            attractor: Vec3::ZERO,
        }
    }

    fn init(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        let total = NODES_PER_STRAND * 2 + RUNGS;
        self.common.instances = vec![InstanceData::new(Vec3::ZERO, 0.12, Vec4::ONE, 0.0); total];
        self.common.frame(RADIUS, viewport);
        Ok(())
    }

    fn resize(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        self.common.frame(RADIUS, viewport);
        Ok(())
    }

    fn update(&mut self, ctx: &RuntimeContext) -> Result<(), SceneError> {
        self.spin += ctx.dt * (0.6 + ctx.scroll_velocity.abs() * 2.5);
        let twist = std::f32::consts::TAU * 2.5;
        // press squeezes the coil radius
        let coil_r = lerp(3.2, 1.6, ctx.press_intensity);
        for strand in 0..2 {
            for i in 0..NODES_PER_STRAND {
                let p = self.node(strand as f32, i, twist, coil_r);
                let inst = &mut self.common.instances[strand * NODES_PER_STRAND + i];
                inst.pos = p.to_array();
                inst.scale = 0.13;
                inst.color = if strand == 0 {
                    Vec4::new(0.35, 0.95, 0.75, 0.95).to_array()
                } else {
                    Vec4::new(0.25, 0.6, 0.95, 0.95).to_array()
                };
                inst.glow = ctx.tap_pulse;
            }
        }
        // rungs bridge the strands at regular intervals
        let base = NODES_PER_STRAND * 2;
        for r in 0..RUNGS {
            let i = r * NODES_PER_STRAND / RUNGS;
            let a = self.node(0.0, i, twist, coil_r);
            let b = self.node(1.0, i, twist, coil_r);
            let inst = &mut self.common.instances[base + r];
            inst.pos = a.lerp(b, 0.5).to_array();
            inst.scale = 0.2 + 0.1 * (ctx.time * 2.0 + r as f32).sin().abs();
            inst.color = Vec4::new(0.9, 0.9, 1.0, 0.8).to_array();
            inst.glow = ctx.press_intensity * 0.8;
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
