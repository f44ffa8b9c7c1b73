//! Frame orchestration: progress mapping, scene activation, input fusion,
//! interaction scalars, the failure boundaries and the per-frame draw list.
//!
//! The director is the only writer of shared frame state. Scenes receive an
//! immutable [`RuntimeContext`] and may fail without taking the frame down;
//! the particle field is attached to exactly one scene at a time.

use crate::capability::CapabilityDescriptor;
use crate::constants::{
    CUT_FADE_DECAY_PER_SEC, CUT_FADE_DECAY_REDUCED_MOTION, DT_MAX_SEC, DT_MIN_SEC,
    GYRO_DAMP_LAMBDA, POINTER_DAMP_LAMBDA, PRESS_FALL_PER_SEC, PRESS_RISE_PER_SEC,
    SCROLL_VELOCITY_LAMBDA, SEED_MIX, TAP_PULSE_DECAY_PER_SEC,
};
use crate::context::{FrameInput, RuntimeContext, SceneMarkers, Viewport};
use crate::diag::Diagnostics;
use crate::draw::DrawList;
use crate::math::{damp, damp_vec2, damp_vec3};
use crate::particles::ParticleField;
use crate::scenes::{catalog, Scene};
use crate::transition::TransitionState;
use glam::{Vec2, Vec3};

/// How external progress maps onto the scene tower.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressMode {
    /// Progress is a scroll fraction; chapters are equal floor-indexed bands.
    Scroll,
    /// Progress is a gallery position; the nearest scene wins.
    Gallery,
}

/// Live tuning surface exposed to the host page.
#[derive(Clone, Copy, Debug)]
pub struct Tunables {
    /// Multiplier on the clamped frame delta.
    pub time_scale: f32,
    /// Forces press intensity when set, overriding pointer state.
    pub press_override: Option<f32>,
    /// Feedback retention of the trail pass, [0, 1).
    pub trail_damp: f32,
    /// Depth-of-field blur strength.
    pub dof_aperture: f32,
    pub exposure: f32,
    pub bloom_strength: f32,
    /// Auto-orbit rate, radians per second.
    pub auto_rotate: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            press_override: None,
            trail_damp: 0.82,
            dof_aperture: 1.0,
            exposure: 1.0,
            bloom_strength: 0.65,
            auto_rotate: 0.05,
        }
    }
}

/// Uniform bundle consumed by the post-processing chain each frame.
#[derive(Clone, Copy, Debug)]
pub struct PostParams {
    pub cut_fade: f32,
    pub transition_style: u32,
    pub exposure: f32,
    pub bloom_strength: f32,
    pub dof_aperture: f32,
    pub trail_damp: f32,
    /// Interaction energy feeding grain and the transition flash.
    pub pulse: f32,
    /// Smoothed pointer speed in NDC units per second; widens the chromatic
    /// fringe.
    pub pointer_speed: f32,
    /// Fused tilt magnitude; deepens the vignette.
    pub gyro_tilt: f32,
    /// Camera-to-target distance of the active scene, refocused every frame.
    pub focus_distance: f32,
    pub time: f32,
}

struct SceneSlot {
    scene: Box<dyn Scene>,
    particles_attached: bool,
    initialized: bool,
}

/// Chapter index for scroll mapping: equal bands, floor-indexed, with the
/// final band absorbing progress = 1.
pub fn scene_index_scroll(progress: f32, chapter_count: usize) -> usize {
    debug_assert!(chapter_count > 0);
    let p = progress.clamp(0.0, 1.0);
    ((p * chapter_count as f32).floor() as usize).min(chapter_count - 1)
}

/// Scene index for gallery mapping: nearest of `scene_count` evenly spaced
/// stops. Intentionally a different formula from the scroll mapping.
pub fn scene_index_gallery(progress: f32, scene_count: usize) -> usize {
    debug_assert!(scene_count > 0);
    let p = progress.clamp(0.0, 1.0);
    ((p * (scene_count - 1) as f32).round() as usize).min(scene_count - 1)
}

pub struct Director {
    caps: CapabilityDescriptor,
    scenes: Vec<SceneSlot>,
    chapter_count: usize,
    mode: ProgressMode,

    transition: TransitionState,
    particles: ParticleField,
    diagnostics: Diagnostics,
    draw_list: DrawList,
    pub tunables: Tunables,

    time: f32,
    viewport: Viewport,
    current: usize,
    started: bool,
    destroyed: bool,

    gallery_progress: f32,
    prev_progress: f32,
    scroll_velocity: f32,

    pointer: Vec2,
    prev_pointer: Vec2,
    pointer_velocity: Vec2,
    gyro: Vec3,
    gyro_active: bool,
    press_intensity: f32,
    tap_pulse: f32,
    pending_tap: bool,
    orbit_angle: f32,

    markers: SceneMarkers,
}

impl Director {
    /// Build the full tower with the standard catalog.
    pub fn new(caps: CapabilityDescriptor, mode: ProgressMode, seed: u64) -> Self {
        let scenes = catalog(seed);
        let chapter_count = scenes.len();
        Self::with_scenes(caps, mode, scenes, chapter_count, seed)
    }

    /// Build around an explicit scene list. Used by hosts that present a
    /// subset of chapters and by tests.
    pub fn with_scenes(
        caps: CapabilityDescriptor,
        mode: ProgressMode,
        scenes: Vec<Box<dyn Scene>>,
        chapter_count: usize,
        seed: u64,
    ) -> Self {
        let particles = ParticleField::new(caps.max_particles(), seed ^ SEED_MIX);
        let scenes: Vec<SceneSlot> = scenes
            .into_iter()
            .map(|scene| SceneSlot {
                scene,
                particles_attached: false,
                initialized: false,
            })
            .collect();
        let first_id = scenes
            .first()
            .map(|s| s.scene.id())
            .unwrap_or("none");
        Self {
            caps,
            scenes,
            chapter_count: chapter_count.max(1),
            mode,
            transition: TransitionState::new(),
            particles,
            diagnostics: Diagnostics::new(),
            draw_list: DrawList::default(),
            tunables: Tunables::default(),
            time: 0.0,
            viewport: Viewport::new(1, 1),
            current: 0,
            started: false,
            destroyed: false,
            gallery_progress: 0.0,
            prev_progress: 0.0,
            scroll_velocity: 0.0,
            pointer: Vec2::ZERO,
            prev_pointer: Vec2::ZERO,
            pointer_velocity: Vec2::ZERO,
            gyro: Vec3::ZERO,
            gyro_active: false,
            press_intensity: 0.0,
            tap_pulse: 0.0,
            pending_tap: false,
            orbit_angle: 0.0,
            markers: SceneMarkers {
                scene_id: first_id,
                scene_index: 0,
                progress: 0.0,
                scroll_velocity: 0.0,
                pointer: Vec2::ZERO,
            },
        }
    }

    /// Advance one frame. Returns false when the frame was skipped (hidden
    /// document or destroyed director) and nothing should be rendered.
    pub fn tick(&mut self, input: &FrameInput) -> bool {
        if self.destroyed || !input.visible || self.scenes.is_empty() {
            return false;
        }
        let dt = input.raw_dt.clamp(DT_MIN_SEC, DT_MAX_SEC) * self.tunables.time_scale;
        self.time += dt;

        self.apply_viewport(input.viewport);

        let progress = match self.mode {
            ProgressMode::Scroll => input.scroll_progress.clamp(0.0, 1.0),
            ProgressMode::Gallery => self.gallery_progress,
        };
        let index = match self.mode {
            ProgressMode::Scroll => scene_index_scroll(progress, self.chapter_count),
            ProgressMode::Gallery => scene_index_gallery(progress, self.scenes.len()),
        }
        .min(self.scenes.len() - 1);

        if !self.started {
            // First activation is silent: attach, no cut.
            self.current = index;
            self.activate(index, false);
            self.started = true;
        } else if index != self.current {
            self.scenes[self.current].particles_attached = false;
            self.current = index;
            self.activate(index, true);
        }
        self.ensure_initialized(self.current);

        self.fuse_inputs(input, dt);
        self.step_scalars(input.pointer_down, dt);

        let raw_vel = (progress - self.prev_progress) / dt.max(1e-6);
        self.scroll_velocity = damp(self.scroll_velocity, raw_vel, SCROLL_VELOCITY_LAMBDA, dt);
        self.prev_progress = progress;

        let cut_lambda = if self.caps.reduced_motion {
            CUT_FADE_DECAY_REDUCED_MOTION
        } else {
            CUT_FADE_DECAY_PER_SEC
        };
        self.transition.step(cut_lambda, dt);

        self.orbit_angle += self.tunables.auto_rotate * dt;

        let ctx = self.runtime_context(progress, dt);
        self.markers = SceneMarkers {
            scene_id: ctx.active_scene_id,
            scene_index: ctx.scene_index,
            progress,
            scroll_velocity: self.scroll_velocity,
            pointer: self.pointer,
        };

        // Scene failure boundary: report once per (scene, phase), retry next
        // frame.
        let slot = &mut self.scenes[self.current];
        if slot.initialized {
            if let Err(e) = slot.scene.update(&ctx) {
                self.diagnostics.report(&e.context_key(), e.to_string());
            }
        }

        // Particle failure boundary is sticky: after a fault the field is
        // left frozen for the rest of the session.
        if !self.particles.is_disposed() {
            self.particles
                .set_pulse(self.tap_pulse + self.press_intensity * 0.5);
            // the report is sticky, the simulation is not: keep stepping so a
            // transient fault can recover on a later frame
            if let Err(e) = self.particles.step(self.time, dt) {
                self.diagnostics.report_particle_fault(e.to_string());
            }
        }

        self.draw_list.clear();
        let slot = &self.scenes[self.current];
        if slot.initialized {
            slot.scene.render(&mut self.draw_list);
            self.draw_list.end_batch();
        }

        true
    }

    fn activate(&mut self, index: usize, cut: bool) {
        self.ensure_initialized(index);
        let slot = &mut self.scenes[index];
        slot.particles_attached = true;
        self.particles.configure(slot.scene.particle_config());
        if cut {
            self.transition.begin_cut();
        }
    }

    fn ensure_initialized(&mut self, index: usize) {
        let viewport = self.viewport;
        let slot = &mut self.scenes[index];
        if slot.initialized {
            return;
        }
        match slot.scene.init(viewport) {
            Ok(()) => slot.initialized = true,
            Err(e) => self.diagnostics.report(&e.context_key(), e.to_string()),
        }
    }

    fn apply_viewport(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        // Only initialized scenes hold framing state worth refreshing; the
        // rest pick up the viewport at init.
        let mut failures = Vec::new();
        for slot in self.scenes.iter_mut().filter(|s| s.initialized) {
            if let Err(e) = slot.scene.resize(viewport) {
                failures.push(e);
            }
        }
        for e in failures {
            self.diagnostics.report(&e.context_key(), e.to_string());
        }
    }

    fn fuse_inputs(&mut self, input: &FrameInput, dt: f32) {
        self.prev_pointer = self.pointer;
        self.pointer = damp_vec2(self.pointer, input.pointer, POINTER_DAMP_LAMBDA, dt);
        self.pointer_velocity = (self.pointer - self.prev_pointer) / dt.max(1e-6);
        self.gyro_active = input.gyro_active;
        let gyro_target = if input.gyro_active {
            input.gyro
        } else {
            Vec3::ZERO
        };
        self.gyro = damp_vec3(self.gyro, gyro_target, GYRO_DAMP_LAMBDA, dt);
    }

    fn step_scalars(&mut self, pointer_down: bool, dt: f32) {
        if self.pending_tap {
            self.tap_pulse = 1.0;
            self.pending_tap = false;
        } else {
            self.tap_pulse = damp(self.tap_pulse, 0.0, TAP_PULSE_DECAY_PER_SEC, dt);
            if self.tap_pulse < 1e-3 {
                self.tap_pulse = 0.0;
            }
        }
        self.press_intensity = match self.tunables.press_override {
            Some(v) => v.clamp(0.0, 1.0),
            None if pointer_down => {
                (self.press_intensity + PRESS_RISE_PER_SEC * dt).min(1.0)
            }
            None => (self.press_intensity - PRESS_FALL_PER_SEC * dt).max(0.0),
        };
    }

    fn runtime_context(&self, progress: f32, dt: f32) -> RuntimeContext {
        let local_progress = match self.mode {
            ProgressMode::Scroll => {
                let x = progress * self.chapter_count as f32;
                (x - self.current as f32).clamp(0.0, 1.0)
            }
            ProgressMode::Gallery => {
                let slots = (self.scenes.len().max(2) - 1) as f32;
                (progress * slots - self.current as f32 + 0.5).clamp(0.0, 1.0)
            }
        };
        RuntimeContext {
            time: self.time,
            dt,
            scroll_progress: progress,
            local_progress,
            scroll_velocity: self.scroll_velocity,
            scene_index: self.current,
            active_scene_id: self.scenes[self.current].scene.id(),
            pointer: self.pointer,
            pointer_velocity: self.pointer_velocity,
            gyro: self.gyro,
            gyro_active: self.gyro_active,
            press_intensity: self.press_intensity,
            tap_pulse: self.tap_pulse,
            orbit_angle: self.orbit_angle,
            viewport: self.viewport,
        }
    }

    /// Register a tap; the pulse lands on the next tick.
    pub fn notify_tap(&mut self) {
        self.pending_tap = true;
    }

    /// Gallery-mode progress setter; ignored in scroll mode.
    pub fn set_progress(&mut self, progress: f32) {
        self.gallery_progress = progress.clamp(0.0, 1.0);
    }

    pub fn progress(&self) -> f32 {
        match self.mode {
            ProgressMode::Scroll => self.prev_progress,
            ProgressMode::Gallery => self.gallery_progress,
        }
    }

    /// Dispose every scene and the particle field. Further ticks are no-ops.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        for slot in &mut self.scenes {
            slot.scene.dispose();
            slot.particles_attached = false;
        }
        self.particles.dispose();
        self.destroyed = true;
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    pub fn current_scene_index(&self) -> usize {
        self.current
    }

    pub fn current_scene_id(&self) -> &'static str {
        self.scenes[self.current].scene.id()
    }

    pub fn particles_attached(&self, index: usize) -> bool {
        self.scenes[index].particles_attached
    }

    pub fn camera(&self) -> &crate::camera::Camera {
        self.scenes[self.current].scene.camera()
    }

    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn markers(&self) -> SceneMarkers {
        self.markers
    }

    pub fn transition(&self) -> &TransitionState {
        &self.transition
    }

    pub fn capabilities(&self) -> CapabilityDescriptor {
        self.caps
    }

    pub fn post_params(&self) -> PostParams {
        let focus_distance = self
            .scenes
            .get(self.current)
            .map(|slot| slot.scene.camera().distance())
            .unwrap_or(10.0);
        PostParams {
            cut_fade: self.transition.cut_fade(),
            transition_style: self.transition.style(),
            exposure: self.tunables.exposure,
            bloom_strength: self.tunables.bloom_strength,
            dof_aperture: self.tunables.dof_aperture,
            trail_damp: self.tunables.trail_damp,
            pulse: (self.tap_pulse + self.press_intensity * 0.5).min(1.5),
            pointer_speed: self.pointer_velocity.length(),
            gyro_tilt: self.gyro.length().min(1.0),
            focus_distance,
            time: self.time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_index_covers_both_endpoints() {
        assert_eq!(scene_index_scroll(0.0, 17), 0);
        assert_eq!(scene_index_scroll(1.0, 17), 16);
        assert_eq!(scene_index_scroll(0.5, 4), 2);
    }

    #[test]
    fn gallery_index_rounds_to_nearest_stop() {
        assert_eq!(scene_index_gallery(0.0, 17), 0);
        assert_eq!(scene_index_gallery(1.0, 17), 16);
        // midway between stops 8 and 9 of 17 rounds per f32 round
        assert_eq!(scene_index_gallery(0.5, 17), 8);
    }

    #[test]
    fn indices_clamp_out_of_range_progress() {
        assert_eq!(scene_index_scroll(-0.3, 17), 0);
        assert_eq!(scene_index_scroll(1.7, 17), 16);
        assert_eq!(scene_index_gallery(2.0, 17), 16);
    }
}
