//! Chapter 6: inclined planetary orbits around a slow-burning sun.
//!
//! Press applies time dilation to the whole system; taps flare the sun.

use super::{Scene, SceneCommon};
use crate::camera::Camera;
use crate::context::{RuntimeContext, Viewport};
use crate::draw::{DrawList, InstanceData};
use crate::error::SceneError;
use crate::particles::{ParticleConfig, ParticleMode};
use glam::{Mat3, Vec3, Vec4};
use rand::Rng;

const PLANETS: usize = 6;
const DUST: usize = 220;
const RADIUS: f32 = 9.0;

pub struct Orbits {
    common: SceneCommon,
    // per-planet (orbit radius, angular speed, inclination, hue)
    planets: Vec<(f32, f32, f32, f32)>,
    dust_angles: Vec<(f32, f32)>,
    clock: f32,
}

impl Orbits {
    pub fn new(seed: u64) -> Self {
        Self {
            common: SceneCommon::new(seed),
            planets: Vec::new(),
            dust_angles: Vec::new(),
            clock: 0.0,
        }
    }
}

impl Scene for Orbits {
    fn id(&self) -> &'static str {
        "orbits"
    }

    fn content_radius(&self) -> f32 {
        RADIUS
    }

    fn particle_config(&self) -> ParticleConfig {
        ParticleConfig {
            mode: ParticleMode::Vortex,
            color: Vec3::new(1.0, 0.85, 0.6),
            speed: 0.5,
            attractor: Vec3::ZERO,
        }
    }

    fn init(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        let rng = &mut self.common.rng;
        self.planets = (0..PLANETS)
            .map(|i| {
                let r = 2.2 + i as f32 * 1.15;
                (
                    r,
                    1.8 / r, // closer orbits run faster
                    rng.gen_range(-0.35..0.35),
                    rng.gen_range(0.0..1.0),
                )
            })
            .collect();
        self.dust_angles = (0..DUST)
            .map(|_| (rng.gen_range(0.0..6.28), rng.gen_range(6.8..8.4)))
            .collect();
        self.common.instances =
            vec![InstanceData::new(Vec3::ZERO, 0.1, Vec4::ONE, 0.0); 1 + PLANETS + DUST];
        self.common.frame(RADIUS, viewport);
        Ok(())
    }

    fn resize(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        self.common.frame(RADIUS, viewport);
        Ok(())
    }

    fn update(&mut self, ctx: &RuntimeContext) -> Result<(), SceneError> {
        self.clock += ctx.dt * (1.0 - 0.8 * ctx.press_intensity);
        // sun
        let sun = &mut self.common.instances[0];
        sun.pos = [0.0, 0.0, 0.0];
        sun.scale = 0.9 + 0.15 * (ctx.time * 2.2).sin().abs() + 0.4 * ctx.tap_pulse;
        sun.color = Vec4::new(1.0, 0.78, 0.35, 1.0).to_array();
        sun.glow = 0.9 + ctx.tap_pulse;
        for (i, (r, speed, incline, hue)) in self.planets.iter().enumerate() {
            let angle = self.clock * speed + i as f32 * 1.7;
            let tilt = Mat3::from_rotation_x(*incline);
            let p = tilt * Vec3::new(angle.cos() * r, 0.0, angle.sin() * r);
            let inst = &mut self.common.instances[1 + i];
            inst.pos = p.to_array();
            inst.scale = 0.22 + 0.1 * hue;
            inst.color = Vec4::new(0.4 + 0.5 * hue, 0.55, 0.95 - 0.4 * hue, 1.0).to_array();
            inst.glow = 0.15;
        }
        let base = 1 + PLANETS;
        for (i, (a0, r)) in self.dust_angles.iter().enumerate() {
            let angle = a0 + self.clock * 0.12;
            let inst = &mut self.common.instances[base + i];
            inst.pos = [angle.cos() * r, (a0 * 5.0).sin() * 0.25, angle.sin() * r];
            inst.scale = 0.05;
            inst.color = Vec4::new(0.8, 0.8, 0.9, 0.6).to_array();
            inst.glow = 0.0;
        }
        self.common.aim(ctx);
        Ok(())
    }

    fn render(&self, out: &mut DrawList) {
        out.extend_from(&self.common.instances);
    }

    fn dispose(&mut self) {
        self.planets = Vec::new();
        self.dust_angles = Vec::new();
        self.common.dispose();
    }

    fn camera(&self) -> &Camera {
        &self.common.camera
    }
}
