//! Chapter 8: a ring tunnel rushing past the camera; scroll speed feeds the
//! rush.

use super::{Scene, SceneCommon};
use crate::camera::Camera;
use crate::context::{RuntimeContext, Viewport};
use crate::draw::{DrawList, InstanceData};
use crate::error::SceneError;
use crate::particles::{ParticleConfig, ParticleMode};
use glam::{Vec3, Vec4};

const RING_COUNT: usize = 24;
const RING_POINTS: usize = 36;
const DEPTH: f32 = 30.0;
const RING_RADIUS: f32 = 4.0;
const RADIUS: f32 = 6.0;

pub struct Tunnel {
    common: SceneCommon,
    travel: f32,
}

impl Tunnel {
    pub fn new(seed: u64) -> Self {
        Self {
            common: SceneCommon::new(seed),
            travel: 0.0,
        }
    }
}

impl Scene for Tunnel {
    fn id(&self) -> &'static str {
        "tunnel"
    }

    fn content_radius(&self) -> f32 {
        RADIUS
    }

    fn particle_config(&self) -> ParticleConfig {
        ParticleConfig {
            mode: ParticleMode::Rain,
            color: Vec3::new(0.7, 0.9, 1.0),
            speed: 1.4,
            attractor: Vec3::ZERO,
        }
    }

    fn init(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        self.common.instances =
            vec![InstanceData::new(Vec3::ZERO, 0.1, Vec4::ONE, 0.0); RING_COUNT * RING_POINTS];
        self.common.frame(RADIUS, viewport);
        Ok(())
    }

    fn resize(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        self.common.frame(RADIUS, viewport);
        Ok(())
    }

    fn update(&mut self, ctx: &RuntimeContext) -> Result<(), SceneError> {
        self.travel += ctx.dt * (4.0 + ctx.scroll_velocity.abs() * 20.0 + ctx.press_intensity * 6.0);
        let spacing = DEPTH / RING_COUNT as f32;
        for ring in 0..RING_COUNT {
            // rings recycle through a fixed depth window in front of the eye
            let z = -((ring as f32 * spacing + self.travel) % DEPTH) + DEPTH * 0.35;
            let wobble = (self.travel * 0.1 + ring as f32).sin() * 0.5;
            let near = ((z + DEPTH * 0.65) / DEPTH).clamp(0.0, 1.0);
            for i in 0..RING_POINTS {
                let a = i as f32 / RING_POINTS as f32 * std::f32::consts::TAU
                    + ring as f32 * 0.13;
                let inst = &mut self.common.instances[ring * RING_POINTS + i];
                inst.pos = [
                    a.cos() * RING_RADIUS + ctx.pointer.x * wobble,
                    a.sin() * RING_RADIUS + ctx.pointer.y * wobble,
                    z,
                ];
                inst.scale = 0.1 + 0.1 * near;
                inst.color = Vec4::new(0.4 + 0.5 * near, 0.7, 1.0, 0.4 + 0.6 * near).to_array();
                inst.glow = near * (0.3 + ctx.tap_pulse);
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
