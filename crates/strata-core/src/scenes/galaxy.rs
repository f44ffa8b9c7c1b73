//! Chapter 11: a slowly turning spiral galaxy; gyro tilts the disc.

use super::{Scene, SceneCommon};
use crate::camera::Camera;
use crate::context::{RuntimeContext, Viewport};
use crate::draw::{DrawList, InstanceData};
use crate::error::SceneError;
use crate::particles::{ParticleConfig, ParticleMode};
use glam::{Mat3, Vec3, Vec4};
use rand::Rng;

const STARS: usize = 900;
const ARMS: usize = 3;
const RADIUS: f32 = 11.0;

pub struct Galaxy {
    common: SceneCommon,
    // (radial distance, arm offset angle, vertical scatter)
    stars: Vec<(f32, f32, f32)>,
}

impl Galaxy {
    pub fn new(seed: u64) -> Self {
        Self {
            common: SceneCommon::new(seed),
            stars: Vec::new(),
        }
    }
}

impl Scene for Galaxy {
    fn id(&self) -> &'static str {
        "galaxy"
    }

    fn content_radius(&self) -> f32 {
        RADIUS
    }

    fn particle_config(&self) -> ParticleConfig {
        ParticleConfig {
            mode: ParticleMode::Vortex,
            color: Vec3::new(0.8, 0.75, 1.0),
            speed: 0.9,
            attractor: Vec3::ZERO,
        }
    }

    fn init(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        let rng = &mut self.common.rng;
        self.stars = (0..STARS)
            .map(|i| {
                let arm = (i % ARMS) as f32 / ARMS as f32 * std::f32::consts::TAU;
                let r = rng.gen_range(0.4f32..1.0).powf(0.6) * RADIUS * 0.92;
                let scatter = rng.gen_range(-0.35..0.35);
                (r, arm + scatter, rng.gen_range(-0.4..0.4))
            })
            .collect();
        self.common.instances = vec![InstanceData::new(Vec3::ZERO, 0.08, Vec4::ONE, 0.0); STARS];
        self.common.frame(RADIUS, viewport);
        Ok(())
    }

    fn resize(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        self.common.frame(RADIUS, viewport);
        Ok(())
    }

    fn update(&mut self, ctx: &RuntimeContext) -> Result<(), SceneError> {
        let tilt = Mat3::from_rotation_x(0.5 + ctx.gyro.x * 0.5)
            * Mat3::from_rotation_z(ctx.gyro.y * 0.3);
        let spin = ctx.time * 0.08;
        for ((r, arm, y), inst) in self.stars.iter().zip(self.common.instances.iter_mut()) {
            // logarithmic arm winding; inner stars complete laps faster
            let angle = arm + (r * 0.45).ln_1p() * 2.6 + spin * (6.0 / (r + 1.0));
            let p = tilt * Vec3::new(angle.cos() * r, *y, angle.sin() * r);
            inst.pos = p.to_array();
            let core = (1.0 - r / RADIUS).clamp(0.0, 1.0);
            inst.scale = 0.05 + 0.1 * core;
            inst.color = Vec4::new(
                0.7 + 0.3 * core,
                0.6 + 0.2 * core,
                1.0 - 0.25 * core,
                0.85,
            )
            .to_array();
            inst.glow = core * core * 0.8 + ctx.tap_pulse * 0.4;
        }
        self.common.aim(ctx);
        Ok(())
    }

    fn render(&self, out: &mut DrawList) {
        out.extend_from(&self.common.instances);
    }

    fn dispose(&mut self) {
        self.stars = Vec::new();
        self.common.dispose();
    }

    fn camera(&self) -> &Camera {
        &self.common.camera
    }
}
