//! Chapter 9: radial blossoms that grow with chapter progress.

use super::{Scene, SceneCommon};
use crate::camera::Camera;
use crate::context::{RuntimeContext, Viewport};
use crate::draw::{DrawList, InstanceData};
use crate::error::SceneError;
use crate::particles::{ParticleConfig, ParticleMode};
use glam::{Vec3, Vec4};
use rand::Rng;

const BRANCHES: usize = 9;
const BLOSSOMS_PER_BRANCH: usize = 34;
const RADIUS: f32 = 7.0;

pub struct Flora {
    common: SceneCommon,
    // per-branch azimuth and lean
    branches: Vec<(f32, f32)>,
}

impl Flora {
    pub fn new(seed: u64) -> Self {
        Self {
            common: SceneCommon::new(seed),
            branches: Vec::new(),
        }
    }
}

impl Scene for Flora {
    fn id(&self) -> &'static str {
        "flora"
    }

    fn content_radius(&self) -> f32 {
        RADIUS
    }

    fn particle_config(&self) -> ParticleConfig {
        ParticleConfig {
            mode: ParticleMode::Snow,
            color: Vec3::new(1.0, 0.7, 0.85),
            speed: 0.5,
            attractor: Vec3::ZERO,
        }
    }

    fn init(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        let rng = &mut self.common.rng;
        self.branches = (0..BRANCHES)
            .map(|i| {
                (
                    i as f32 / BRANCHES as f32 * std::f32::consts::TAU,
                    rng.gen_range(0.25..0.75),
                )
            })
            .collect();
        self.common.instances = vec![
            InstanceData::new(Vec3::ZERO, 0.1, Vec4::ONE, 0.0);
            BRANCHES * BLOSSOMS_PER_BRANCH
        ];
        self.common.frame(RADIUS, viewport);
        Ok(())
    }

    fn resize(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        self.common.frame(RADIUS, viewport);
        Ok(())
    }

    fn update(&mut self, ctx: &RuntimeContext) -> Result<(), SceneError> {
        let growth = (ctx.local_progress * 1.15).clamp(0.0, 1.0);
        let sway = ctx.gyro.y * 0.4 + (ctx.time * 0.7).sin() * 0.15;
        for (b, (azimuth, lean)) in self.branches.iter().enumerate() {
            for i in 0..BLOSSOMS_PER_BRANCH {
                let t = i as f32 / (BLOSSOMS_PER_BRANCH - 1) as f32;
                let inst = &mut self.common.instances[b * BLOSSOMS_PER_BRANCH + i];
                // blossoms past the growth frontier stay closed at the root
                let reach = (growth * 1.3 - t).clamp(0.0, 1.0).min(1.0);
                let arc = t * (1.2 + lean) + sway * t * t;
                let r = t * RADIUS * 0.85 * reach.max(0.05);
                let a = azimuth + sway * 0.3;
                inst.pos = [
                    a.cos() * r * arc.cos(),
                    (t * 5.5 - 2.5) * reach + arc.sin() * 0.8 - 1.0,
                    a.sin() * r * arc.cos(),
                ];
                let bloom = (reach * (0.6 + 0.4 * (ctx.time * 2.1 + t * 9.0).sin().abs()))
                    .clamp(0.0, 1.0);
                inst.scale = 0.06 + 0.16 * bloom;
                inst.color = Vec4::new(
                    0.85 + 0.15 * bloom,
                    0.45 + 0.25 * t,
                    0.6 + 0.3 * (1.0 - t),
                    0.9,
                )
                .to_array();
                inst.glow = ctx.tap_pulse * bloom;
            }
        }
        self.common.aim(ctx);
        Ok(())
    }

    fn render(&self, out: &mut DrawList) {
        out.extend_from(&self.common.instances);
    }

    fn dispose(&mut self) {
        self.branches = Vec::new();
        self.common.dispose();
    }

    fn camera(&self) -> &Camera {
        &self.common.camera
    }
}
