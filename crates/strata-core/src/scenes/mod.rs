//! The scene catalog: 17 independent visual programs behind one contract.
//!
//! Every scene owns its own geometry, RNG and camera; nothing is shared
//! between scenes except the framing helper in [`SceneCommon`]. The shared
//! particle field is attached to scenes by the director, never owned here.

use crate::camera::{frame_content, Camera};
use crate::constants::SEED_MIX;
use crate::context::{RuntimeContext, Viewport};
use crate::draw::{DrawList, InstanceData};
use crate::error::SceneError;
use crate::particles::ParticleConfig;
use glam::Vec3;
use rand::prelude::*;

mod constellation;
mod crystal;
mod flora;
mod galaxy;
mod genesis;
mod glacier;
mod helix;
mod lattice;
mod maelstrom;
mod orbits;
mod pulse_grid;
mod rainfront;
mod ribbons;
mod swarm;
mod supernova;
mod tidepool;
mod tunnel;

pub use constellation::Constellation;
pub use crystal::Crystal;
pub use flora::Flora;
pub use galaxy::Galaxy;
pub use genesis::Genesis;
pub use glacier::Glacier;
pub use helix::Helix;
pub use lattice::Lattice;
pub use maelstrom::Maelstrom;
pub use orbits::Orbits;
pub use pulse_grid::PulseGrid;
pub use rainfront::Rainfront;
pub use ribbons::Ribbons;
pub use supernova::Supernova;
pub use swarm::Swarm;
pub use tidepool::Tidepool;
pub use tunnel::Tunnel;

/// One self-contained visual program in the tower.
pub trait Scene {
    fn id(&self) -> &'static str;

    /// Radius of the sphere that must remain visible when framing.
    fn content_radius(&self) -> f32;

    /// Preferred settings for the shared particle field while this scene is
    /// active.
    fn particle_config(&self) -> ParticleConfig {
        ParticleConfig::default()
    }

    fn init(&mut self, viewport: Viewport) -> Result<(), SceneError>;
    fn resize(&mut self, viewport: Viewport) -> Result<(), SceneError>;
    fn update(&mut self, ctx: &RuntimeContext) -> Result<(), SceneError>;

    /// Append this scene's instances to the frame's draw list.
    fn render(&self, out: &mut DrawList);

    /// Release owned drawable state. Must be idempotent.
    fn dispose(&mut self);

    fn camera(&self) -> &Camera;
}

/// State every concrete scene embeds: camera, instance buffer, seeded RNG and
/// the dispose flag. Scenes compose this rather than inheriting behavior.
pub struct SceneCommon {
    pub camera: Camera,
    pub instances: Vec<InstanceData>,
    pub rng: StdRng,
    pub disposed: bool,
}

impl SceneCommon {
    pub fn new(seed: u64) -> Self {
        Self {
            camera: Camera::default(),
            instances: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
            disposed: false,
        }
    }

    /// Re-frame the camera so a sphere of `content_radius` stays inscribed in
    /// the viewport (5% margin, portrait-aware).
    pub fn frame(&mut self, content_radius: f32, viewport: Viewport) {
        frame_content(&mut self.camera, content_radius, viewport);
    }

    /// Orbit the camera around the content using the auto-rotate angle plus
    /// a gentle pointer/gyro parallax, preserving framing distance.
    pub fn aim(&mut self, ctx: &RuntimeContext) {
        let dist = self.camera.distance();
        let yaw = ctx.orbit_angle + ctx.pointer.x * 0.25 + ctx.gyro.y * 0.2;
        let pitch = (ctx.pointer.y * 0.18 + ctx.gyro.x * 0.15).clamp(-0.6, 0.6);
        let (sy, cy) = yaw.sin_cos();
        let (sp, cp) = pitch.sin_cos();
        self.camera.eye = self.camera.target + Vec3::new(sy * cp, sp, cy * cp) * dist;
    }

    /// Release the instance buffer; second call is a no-op.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.instances = Vec::new();
        self.disposed = true;
    }
}

/// Build the full tower in chapter order with per-scene derived seeds
/// (same xor-multiply mix used for every seeded subsystem).
pub fn catalog(seed: u64) -> Vec<Box<dyn Scene>> {
    let mix = |i: u64| seed ^ i.wrapping_mul(SEED_MIX);
    vec![
        Box::new(Genesis::new(mix(1))),
        Box::new(Helix::new(mix(2))),
        Box::new(Lattice::new(mix(3))),
        Box::new(Swarm::new(mix(4))),
        Box::new(Tidepool::new(mix(5))),
        Box::new(Orbits::new(mix(6))),
        Box::new(Ribbons::new(mix(7))),
        Box::new(Tunnel::new(mix(8))),
        Box::new(Flora::new(mix(9))),
        Box::new(Crystal::new(mix(10))),
        Box::new(Galaxy::new(mix(11))),
        Box::new(Rainfront::new(mix(12))),
        Box::new(Maelstrom::new(mix(13))),
        Box::new(PulseGrid::new(mix(14))),
        Box::new(Glacier::new(mix(15))),
        Box::new(Constellation::new(mix(16))),
        Box::new(Supernova::new(mix(17))),
    ]
}

/// Number of scenes in the tower.
pub const SCENE_COUNT: usize = 17;
