//! Chapter 3: a breathing cubic lattice with tap-driven ripples.

use super::{Scene, SceneCommon};
use crate::camera::Camera;
use crate::context::{RuntimeContext, Viewport};
use crate::draw::{DrawList, InstanceData};
use crate::error::SceneError;
use crate::particles::{ParticleConfig, ParticleMode};
use glam::{Mat3, Vec3, Vec4};

const SIDE: usize = 7;
const SPACING: f32 = 1.9;
const RADIUS: f32 = 8.0;

pub struct Lattice {
    common: SceneCommon,
    cells: Vec<Vec3>,
    ripple_t: f32,
}

impl Lattice {
    pub fn new(seed: u64) -> Self {
        Self {
            common: SceneCommon::new(seed),
            cells: Vec::new(),
            ripple_t: f32::MAX,
        }
    }
}

impl Scene for Lattice {
    fn id(&self) -> &'static str {
        "lattice"
    }

    fn content_radius(&self) -> f32 {
        RADIUS
    }

    fn particle_config(&self) -> ParticleConfig {
        ParticleConfig {
            mode: ParticleMode::Snow,
            color: Vec3::new(0.85, 0.9, 1.0),
            speed: 0.6,
            attractor: Vec3::ZERO,
        }
    }

    fn init(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        let half = (SIDE as f32 - 1.0) * 0.5;
        self.cells.clear();
        for x in 0..SIDE {
            for y in 0..SIDE {
                for z in 0..SIDE {
                    self.cells.push(
                        Vec3::new(x as f32 - half, y as f32 - half, z as f32 - half) * SPACING,
                    );
                }
            }
        }
        self.common.instances = self
            .cells
            .iter()
            .map(|_| InstanceData::new(Vec3::ZERO, 0.14, Vec4::ONE, 0.0))
            .collect();
        self.common.frame(RADIUS, viewport);
        Ok(())
    }

    fn resize(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        self.common.frame(RADIUS, viewport);
        Ok(())
    }

    fn update(&mut self, ctx: &RuntimeContext) -> Result<(), SceneError> {
        if ctx.tap_pulse > 0.95 {
            self.ripple_t = ctx.time;
        }
        let ripple_age = ctx.time - self.ripple_t;
        let rot = Mat3::from_rotation_y(ctx.time * 0.2 + ctx.pointer.x * 0.5)
            * Mat3::from_rotation_x(ctx.pointer.y * 0.4);
        for (cell, inst) in self.cells.iter().zip(self.common.instances.iter_mut()) {
            let d = cell.length();
            let breathe = 1.0 + 0.05 * (ctx.time * 1.1 - d * 0.4).sin();
            // expanding shell from the last tap
            let ripple = if ripple_age >= 0.0 && ripple_age < 3.0 {
                let front = ripple_age * 6.0;
                (1.0 - ((d - front).abs() / 1.2)).max(0.0)
            } else {
                0.0
            };
            let p = rot * (*cell * breathe);
            inst.pos = p.to_array();
            inst.scale = 0.13 + 0.12 * ripple;
            let shade = 0.55 + 0.45 * (d / RADIUS).clamp(0.0, 1.0);
            inst.color = Vec4::new(0.5 * shade, 0.7 * shade, 1.0, 0.9).to_array();
            inst.glow = ripple * 1.3;
        }
        self.common.aim(ctx);
        Ok(())
    }

    fn render(&self, out: &mut DrawList) {
        out.extend_from(&self.common.instances);
    }

    fn dispose(&mut self) {
        self.cells = Vec::new();
        self.common.dispose();
    }

    fn camera(&self) -> &Camera {
        &self.common.camera
    }
}
