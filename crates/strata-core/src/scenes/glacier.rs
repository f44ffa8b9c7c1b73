//! Chapter 15: drifting ice floes in slow laminar motion; gyro steers
//! the prevailing wind.

use super::{Scene, SceneCommon};
use crate::camera::Camera;
use crate::context::{RuntimeContext, Viewport};
use crate::draw::{DrawList, InstanceData};
use crate::error::SceneError;
use crate::particles::{ParticleConfig, ParticleMode};
use glam::{Vec3, Vec4};
use rand::Rng;

const FLOES: usize = 300;
const EXTENT: f32 = 9.0;
const RADIUS: f32 = 10.0;

pub struct Glacier {
    common: SceneCommon,
    // anchor, drift phase and size class per floe
    floes: Vec<(Vec3, f32, f32)>,
}

impl Glacier {
    pub fn new(seed: u64) -> Self {
        Self {
            common: SceneCommon::new(seed),
            floes: Vec::new(),
        }
    }
}

impl Scene for Glacier {
    fn id(&self) -> &'static str {
        "glacier"
    }

    fn content_radius(&self) -> f32 {
        RADIUS
    }

    fn particle_config(&self) -> ParticleConfig {
        ParticleConfig {
            mode: ParticleMode::Snow,
            color: Vec3::new(0.85, 0.92, 1.0),
            speed: 0.8,
            attractor: Vec3::ZERO,
        }
    }

    fn init(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        let rng = &mut self.common.rng;
        self.floes = (0..FLOES)
            .map(|_| {
                let anchor = Vec3::new(
                    rng.gen_range(-EXTENT..EXTENT),
                    rng.gen_range(-2.5f32..2.5),
                    rng.gen_range(-EXTENT..EXTENT),
                );
                (anchor, rng.gen_range(0.0..6.28), rng.gen_range(0.4f32..1.0))
            })
            .collect();
        self.common.instances = vec![InstanceData::new(Vec3::ZERO, 0.1, Vec4::ONE, 0.0); FLOES];
        self.common.frame(RADIUS, viewport);
        Ok(())
    }

    fn resize(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        self.common.frame(RADIUS, viewport);
        Ok(())
    }

    fn update(&mut self, ctx: &RuntimeContext) -> Result<(), SceneError> {
        let wind = Vec3::new(ctx.gyro.y * 1.8 + 0.4, 0.0, ctx.gyro.x * 1.2);
        let chill = 1.0 - ctx.press_intensity * 0.5;
        for ((anchor, phase, size), inst) in
            self.floes.iter().zip(self.common.instances.iter_mut())
        {
            // larger floes carry more inertia and answer the wind less
            let response = 1.4 - size;
            let t = ctx.time * 0.3 * chill + phase;
            let drift = wind * response * (ctx.time * 0.15).sin().mul_add(0.5, 1.0);
            let bob = (t * 1.7).sin() * 0.25 * response;
            let mut p = *anchor + drift + Vec3::new(t.cos() * 0.6, bob, t.sin() * 0.6);
            // wrap drifting floes back across the field
            p.x = (p.x + EXTENT).rem_euclid(EXTENT * 2.0) - EXTENT;
            p.z = (p.z + EXTENT).rem_euclid(EXTENT * 2.0) - EXTENT;
            inst.pos = p.to_array();
            inst.scale = 0.08 + 0.2 * size;
            let sheen = (t * 2.3).sin().max(0.0) * 0.3;
            inst.color = Vec4::new(
                0.75 + sheen,
                0.85 + sheen * 0.5,
                1.0,
                0.6 + 0.3 * size,
            )
            .to_array();
            inst.glow = sheen + ctx.tap_pulse * 0.3;
        }
        self.common.aim(ctx);
        Ok(())
    }

    fn render(&self, out: &mut DrawList) {
        out.extend_from(&self.common.instances);
    }

    fn dispose(&mut self) {
        self.floes = Vec::new();
        self.common.dispose();
    }

    fn camera(&self) -> &Camera {
        &self.common.camera
    }
}
