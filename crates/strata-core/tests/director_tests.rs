// Host-side integration tests for the frame director: progress mapping,
// activation, transitions, interaction scalars and the failure boundaries.

use glam::{Vec2, Vec3};
use strata_core::camera::Camera;
use strata_core::constants::{DT_MAX_SEC, DT_MIN_SEC};
use strata_core::context::{FrameInput, RuntimeContext, Viewport};
use strata_core::director::{Director, ProgressMode};
use strata_core::draw::DrawList;
use strata_core::error::SceneError;
use strata_core::particles::{ParticleConfig, ParticleMode};
use strata_core::scenes::Scene;
use strata_core::CapabilityDescriptor;

fn coarse_caps() -> CapabilityDescriptor {
    CapabilityDescriptor {
        pointer_coarse: true,
        device_pixel_ratio: 2.0,
        max_pixel_ratio_cap: 2.0,
        reduced_motion: false,
    }
}

fn input_at(progress: f32) -> FrameInput {
    FrameInput {
        scroll_progress: progress,
        ..FrameInput::default()
    }
}

fn director() -> Director {
    Director::new(coarse_caps(), ProgressMode::Scroll, 7)
}

/// Scene whose update always fails; init and render succeed.
struct Unstable {
    camera: Camera,
}

impl Unstable {
    fn boxed() -> Box<dyn Scene> {
        Box::new(Self {
            camera: Camera::default(),
        })
    }
}

impl Scene for Unstable {
    fn id(&self) -> &'static str {
        "unstable"
    }
    fn content_radius(&self) -> f32 {
        5.0
    }
    fn init(&mut self, _viewport: Viewport) -> Result<(), SceneError> {
        Ok(())
    }
    fn resize(&mut self, _viewport: Viewport) -> Result<(), SceneError> {
        Ok(())
    }
    fn update(&mut self, _ctx: &RuntimeContext) -> Result<(), SceneError> {
        Err(SceneError::during("unstable", "update", "synthetic failure"))
    }
    fn render(&self, _out: &mut DrawList) {}
    fn dispose(&mut self) {}
    fn camera(&self) -> &Camera {
        &self.camera
    }
}

/// Scene whose particle preset carries a non-finite attractor, driving the
/// field simulation into a fault.
struct Singularity {
    camera: Camera,
}

impl Singularity {
    fn boxed() -> Box<dyn Scene> {
        Box::new(Self {
            camera: Camera::default(),
        })
    }
}

impl Scene for Singularity {
    fn id(&self) -> &'static str {
        "singularity"
    }
    fn content_radius(&self) -> f32 {
        5.0
    }
    fn particle_config(&self) -> ParticleConfig {
        ParticleConfig {
            mode: ParticleMode::Attract,
            attractor: Vec3::NAN,
            ..ParticleConfig::default()
        }
    }
    fn init(&mut self, _viewport: Viewport) -> Result<(), SceneError> {
        Ok(())
    }
    fn resize(&mut self, _viewport: Viewport) -> Result<(), SceneError> {
        Ok(())
    }
    fn update(&mut self, _ctx: &RuntimeContext) -> Result<(), SceneError> {
        Ok(())
    }
    fn render(&self, _out: &mut DrawList) {}
    fn dispose(&mut self) {}
    fn camera(&self) -> &Camera {
        &self.camera
    }
}

#[test]
fn first_tick_activates_without_a_cut() {
    let mut d = director();
    assert!(d.tick(&input_at(0.0)));
    assert_eq!(d.current_scene_index(), 0);
    assert_eq!(d.transition().cut_fade(), 0.0);
}

#[test]
fn progress_endpoints_select_first_and_last_scene() {
    let mut d = director();
    d.tick(&input_at(0.0));
    assert_eq!(d.current_scene_index(), 0);
    d.tick(&input_at(1.0));
    assert_eq!(d.current_scene_index(), d.scene_count() - 1);
}

#[test]
fn scene_change_starts_a_decaying_cut() {
    let mut d = director();
    d.tick(&input_at(0.0));
    d.tick(&input_at(0.5));
    let mut prev = d.transition().cut_fade();
    assert!(prev > 0.0);
    assert!(prev < 1.0, "fade must have stepped at least once");
    for _ in 0..300 {
        d.tick(&input_at(0.5));
        let fade = d.transition().cut_fade();
        assert!(fade <= prev);
        assert!(fade >= 0.0);
        prev = fade;
    }
    assert_eq!(prev, 0.0);
}

#[test]
fn particles_attach_to_exactly_one_scene() {
    let mut d = director();
    d.tick(&input_at(0.0));
    let attached = (0..d.scene_count())
        .filter(|&i| d.particles_attached(i))
        .count();
    assert_eq!(attached, 1);
    assert!(d.particles_attached(d.current_scene_index()));

    d.tick(&input_at(0.9));
    let attached = (0..d.scene_count())
        .filter(|&i| d.particles_attached(i))
        .count();
    assert_eq!(attached, 1);
    assert!(d.particles_attached(d.current_scene_index()));
}

#[test]
fn raw_dt_is_clamped_to_the_frame_band() {
    let mut d = director();
    let mut huge = input_at(0.0);
    huge.raw_dt = 10.0;
    d.tick(&huge);
    let after_one = d.post_params().time;
    assert!((after_one - DT_MAX_SEC).abs() < 1e-6);

    let mut tiny = input_at(0.0);
    tiny.raw_dt = 0.0;
    d.tick(&tiny);
    assert!((d.post_params().time - after_one - DT_MIN_SEC).abs() < 1e-6);
}

#[test]
fn hidden_frames_are_skipped() {
    let mut d = director();
    let mut input = input_at(0.0);
    input.visible = false;
    assert!(!d.tick(&input));
    assert_eq!(d.post_params().time, 0.0);
}

#[test]
fn destroy_then_tick_is_a_no_op() {
    let mut d = director();
    d.tick(&input_at(0.0));
    d.destroy();
    assert!(d.is_destroyed());
    assert!(!d.tick(&input_at(0.5)));
    // second destroy must also be safe
    d.destroy();
}

#[test]
fn active_scene_produces_draw_instances() {
    let mut d = director();
    d.tick(&input_at(0.0));
    assert!(!d.draw_list().is_empty());
    assert_eq!(d.draw_list().batch_count(), 1);
}

#[test]
fn resize_updates_camera_aspect() {
    let mut d = director();
    d.tick(&input_at(0.0));
    let mut input = input_at(0.0);
    input.viewport = Viewport::new(800, 1600);
    d.tick(&input);
    assert!((d.camera().aspect - 0.5).abs() < 1e-6);
}

#[test]
fn failing_scene_reports_once_and_keeps_ticking() {
    let mut d = Director::with_scenes(
        coarse_caps(),
        ProgressMode::Scroll,
        vec![Unstable::boxed()],
        1,
        7,
    );
    for _ in 0..60 {
        assert!(d.tick(&input_at(0.0)));
    }
    assert_eq!(d.diagnostics().len(), 1);
    let entry = d.diagnostics().entries().next().unwrap();
    assert_eq!(entry.context, "unstable/update");
}

#[test]
fn particle_fault_reports_once_but_stepping_continues() {
    let mut d = Director::with_scenes(
        coarse_caps(),
        ProgressMode::Scroll,
        vec![Singularity::boxed()],
        1,
        7,
    );
    for _ in 0..40 {
        assert!(d.tick(&input_at(0.0)));
    }
    assert!(d.diagnostics().has_particle_fault());
    assert_eq!(d.diagnostics().len(), 1);
    // the field keeps its buffers and stays in the frame
    assert!(!d.particles().is_disposed());
    assert!(!d.particles().is_empty());
}

#[test]
fn post_params_carry_the_optics_inputs() {
    let mut d = director();
    d.tick(&input_at(0.0));
    let calm = d.post_params();
    assert_eq!(calm.pointer_speed, 0.0);
    assert_eq!(calm.gyro_tilt, 0.0);
    assert!((calm.focus_distance - d.camera().distance()).abs() < 1e-5);

    let mut input = input_at(0.0);
    input.pointer = Vec2::new(1.0, -1.0);
    input.gyro = Vec3::new(0.4, 0.2, 0.0);
    input.gyro_active = true;
    d.tick(&input);
    let live = d.post_params();
    assert!(live.pointer_speed > 0.0);
    assert!(live.gyro_tilt > 0.0);
    assert!(live.gyro_tilt <= 1.0);
}

#[test]
fn gallery_mode_follows_set_progress() {
    let mut d = Director::new(coarse_caps(), ProgressMode::Gallery, 7);
    d.tick(&FrameInput::default());
    assert_eq!(d.current_scene_index(), 0);
    d.set_progress(1.0);
    d.tick(&FrameInput::default());
    assert_eq!(d.current_scene_index(), d.scene_count() - 1);
    assert_eq!(d.progress(), 1.0);
}

#[test]
fn tap_raises_the_interaction_pulse() {
    let mut d = director();
    d.tick(&input_at(0.0));
    let calm = d.post_params().pulse;
    d.notify_tap();
    d.tick(&input_at(0.0));
    assert!(d.post_params().pulse > calm + 0.8);
}

#[test]
fn press_rises_while_pointer_is_down_and_falls_after() {
    let mut d = director();
    let mut held = input_at(0.0);
    held.pointer_down = true;
    for _ in 0..120 {
        d.tick(&held);
    }
    let pressed = d.post_params().pulse;
    assert!(pressed > 0.3);
    for _ in 0..120 {
        d.tick(&input_at(0.0));
    }
    assert!(d.post_params().pulse < 0.05);
}

#[test]
fn pointer_smoothing_lags_the_raw_target() {
    let mut d = director();
    d.tick(&input_at(0.0));
    let mut input = input_at(0.0);
    input.pointer = Vec2::new(1.0, -1.0);
    d.tick(&input);
    let p = d.markers().pointer;
    assert!(p.x > 0.0 && p.x < 1.0);
    assert!(p.y < 0.0 && p.y > -1.0);
    // convergence after enough frames
    for _ in 0..600 {
        d.tick(&input);
    }
    let p = d.markers().pointer;
    assert!((p - Vec2::new(1.0, -1.0)).length() < 0.01);
}

#[test]
fn markers_track_the_active_scene() {
    let mut d = director();
    d.tick(&input_at(0.0));
    let m = d.markers();
    assert_eq!(m.scene_index, 0);
    assert_eq!(m.scene_id, d.current_scene_id());

    d.tick(&input_at(1.0));
    let m = d.markers();
    assert_eq!(m.scene_index, d.scene_count() - 1);
    assert!((m.progress - 1.0).abs() < 1e-6);
}

#[test]
fn gyro_is_ignored_until_active() {
    let mut d = director();
    let mut input = input_at(0.0);
    input.gyro = Vec3::new(1.0, 1.0, 1.0);
    input.gyro_active = false;
    for _ in 0..120 {
        d.tick(&input);
    }
    // without activation the fused gyro stays at rest
    assert!(!d.markers().scene_id.is_empty());
    input.gyro_active = true;
    d.tick(&input);
}
