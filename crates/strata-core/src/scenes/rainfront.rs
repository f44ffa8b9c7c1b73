//! Chapter 12: a storm front of falling streaks with tap lightning.

use super::{Scene, SceneCommon};
use crate::camera::Camera;
use crate::context::{RuntimeContext, Viewport};
use crate::draw::{DrawList, InstanceData};
use crate::error::SceneError;
use crate::particles::{ParticleConfig, ParticleMode};
use glam::{Vec3, Vec4};
use rand::Rng;

const DROPS: usize = 520;
const EXTENT: f32 = 9.0;
const FALL_SPAN: f32 = 16.0;
const RADIUS: f32 = 10.0;

pub struct Rainfront {
    common: SceneCommon,
    // (x, z, fall speed, phase) per drop; y derived from time
    drops: Vec<(f32, f32, f32, f32)>,
}

impl Rainfront {
    pub fn new(seed: u64) -> Self {
        Self {
            common: SceneCommon::new(seed),
            drops: Vec::new(),
        }
    }
}

impl Scene for Rainfront {
    fn id(&self) -> &'static str {
        "rainfront"
    }

    fn content_radius(&self) -> f32 {
        RADIUS
    }

    fn particle_config(&self) -> ParticleConfig {
        ParticleConfig {
            mode: ParticleMode::Rain,
            color: Vec3::new(0.6, 0.75, 0.95),
            speed: 1.0,
            attractor: Vec3::ZERO,
        }
    }

    fn init(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        let rng = &mut self.common.rng;
        self.drops = (0..DROPS)
            .map(|_| {
                (
                    rng.gen_range(-EXTENT..EXTENT),
                    rng.gen_range(-EXTENT..EXTENT),
                    rng.gen_range(5.0..9.5),
                    rng.gen_range(0.0..FALL_SPAN),
                )
            })
            .collect();
        self.common.instances = vec![InstanceData::new(Vec3::ZERO, 0.07, Vec4::ONE, 0.0); DROPS];
        self.common.frame(RADIUS, viewport);
        Ok(())
    }

    fn resize(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        self.common.frame(RADIUS, viewport);
        Ok(())
    }

    fn update(&mut self, ctx: &RuntimeContext) -> Result<(), SceneError> {
        // tap flashes the whole front like sheet lightning
        let flash = ctx.tap_pulse * ctx.tap_pulse;
        let wind = ctx.gyro.y * 2.0 + ctx.pointer.x * 0.8;
        for ((x, z, speed, phase), inst) in
            self.drops.iter().zip(self.common.instances.iter_mut())
        {
            let y = FALL_SPAN * 0.5 - ((ctx.time * speed + phase) % FALL_SPAN);
            inst.pos = [x + wind * (1.0 - (y / FALL_SPAN + 0.5)), y, *z];
            // streaks read longer when falling faster
            inst.scale = 0.05 + 0.012 * speed;
            let depth = (*z / EXTENT * 0.5 + 0.5).clamp(0.0, 1.0);
            inst.color = Vec4::new(
                0.45 + 0.3 * flash,
                0.55 + 0.3 * flash,
                0.8 + 0.2 * flash,
                0.35 + 0.4 * depth,
            )
            .to_array();
            inst.glow = flash;
        }
        self.common.aim(ctx);
        Ok(())
    }

    fn render(&self, out: &mut DrawList) {
        out.extend_from(&self.common.instances);
    }

    fn dispose(&mut self) {
        self.drops = Vec::new();
        self.common.dispose();
    }

    fn camera(&self) -> &Camera {
        &self.common.camera
    }
}
