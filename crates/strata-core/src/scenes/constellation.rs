//! Chapter 16: a star map whose connecting lines brighten near the
//! pointer.

use super::{Scene, SceneCommon};
use crate::camera::Camera;
use crate::context::{RuntimeContext, Viewport};
use crate::draw::{DrawList, InstanceData};
use crate::error::SceneError;
use crate::particles::{ParticleConfig, ParticleMode};
use glam::{Vec3, Vec4};
use rand::Rng;

const STARS: usize = 90;
const LINK_DOTS: usize = 6;
const RADIUS: f32 = 9.0;

pub struct Constellation {
    common: SceneCommon,
    stars: Vec<Vec3>,
    // star index pairs joined by dotted links
    links: Vec<(usize, usize)>,
}

impl Constellation {
    pub fn new(seed: u64) -> Self {
        Self {
            common: SceneCommon::new(seed),
            stars: Vec::new(),
            links: Vec::new(),
        }
    }
}

impl Scene for Constellation {
    fn id(&self) -> &'static str {
        "constellation"
    }

    fn content_radius(&self) -> f32 {
        RADIUS
    }

    fn particle_config(&self) -> ParticleConfig {
        ParticleConfig {
            mode: ParticleMode::Attract,
            color: Vec3::new(0.9, 0.85, 0.6),
            speed: 0.7,
            attractor: Vec3::ZERO,
        }
    }

    fn init(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        let rng = &mut self.common.rng;
        self.stars = (0..STARS)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-7.0f32..7.0),
                    rng.gen_range(-5.0f32..5.0),
                    rng.gen_range(-3.0f32..3.0),
                )
            })
            .collect();
        // join each star to its nearest unvisited neighbour
        self.links = Vec::with_capacity(STARS);
        for i in 0..STARS {
            let mut best = None;
            let mut best_d = f32::MAX;
            for j in (i + 1)..STARS {
                let d = self.stars[i].distance_squared(self.stars[j]);
                if d < best_d {
                    best_d = d;
                    best = Some(j);
                }
            }
            if let Some(j) = best {
                if best_d < 9.0 {
                    self.links.push((i, j));
                }
            }
        }
        let total = STARS + self.links.len() * LINK_DOTS;
        self.common.instances = vec![InstanceData::new(Vec3::ZERO, 0.08, Vec4::ONE, 0.0); total];
        self.common.frame(RADIUS, viewport);
        Ok(())
    }

    fn resize(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        self.common.frame(RADIUS, viewport);
        Ok(())
    }

    fn update(&mut self, ctx: &RuntimeContext) -> Result<(), SceneError> {
        let hot = Vec3::new(ctx.pointer.x * 7.0, ctx.pointer.y * 5.0, 0.0);
        for (i, star) in self.stars.iter().enumerate() {
            let twinkle = (ctx.time * 2.2 + i as f32 * 1.3).sin() * 0.5 + 0.5;
            let near = (1.0 - star.distance(hot) / 6.0).clamp(0.0, 1.0);
            let inst = &mut self.common.instances[i];
            inst.pos = star.to_array();
            inst.scale = 0.1 + 0.06 * twinkle + 0.08 * near;
            inst.color = Vec4::new(
                0.9,
                0.85 + 0.1 * near,
                0.6 + 0.35 * near,
                0.8 + 0.2 * twinkle,
            )
            .to_array();
            inst.glow = twinkle * 0.4 + near * near;
        }
        for (li, (a, b)) in self.links.iter().enumerate() {
            let (pa, pb) = (self.stars[*a], self.stars[*b]);
            let mid_near = (1.0 - pa.midpoint(pb).distance(hot) / 6.0).clamp(0.0, 1.0);
            for k in 0..LINK_DOTS {
                let t = (k as f32 + 0.5) / LINK_DOTS as f32;
                let inst = &mut self.common.instances[STARS + li * LINK_DOTS + k];
                inst.pos = pa.lerp(pb, t).to_array();
                inst.scale = 0.035 + 0.03 * mid_near;
                inst.color =
                    Vec4::new(0.6, 0.65, 0.8, 0.25 + 0.55 * mid_near).to_array();
                inst.glow = mid_near * 0.6 + ctx.tap_pulse * 0.4;
            }
        }
        self.common.aim(ctx);
        Ok(())
    }

    fn render(&self, out: &mut DrawList) {
        out.extend_from(&self.common.instances);
    }

    fn dispose(&mut self) {
        self.stars = Vec::new();
        self.links = Vec::new();
        self.common.dispose();
    }

    fn camera(&self) -> &Camera {
        &self.common.camera
    }
}
