// Host-side tests across the whole scene catalog plus camera framing.

use glam::{Vec2, Vec3};
use strata_core::camera::framing_distance;
use strata_core::constants::DEFAULT_FOV_RADIANS;
use strata_core::context::{RuntimeContext, Viewport};
use strata_core::draw::DrawList;
use strata_core::scenes::{catalog, SCENE_COUNT};

fn ctx(viewport: Viewport) -> RuntimeContext {
    RuntimeContext {
        time: 1.25,
        dt: 1.0 / 60.0,
        scroll_progress: 0.3,
        local_progress: 0.5,
        scroll_velocity: 0.1,
        scene_index: 0,
        active_scene_id: "test",
        pointer: Vec2::new(0.2, -0.1),
        pointer_velocity: Vec2::ZERO,
        gyro: Vec3::new(0.05, -0.02, 0.0),
        gyro_active: true,
        press_intensity: 0.4,
        tap_pulse: 0.0,
        orbit_angle: 0.3,
        viewport,
    }
}

#[test]
fn catalog_has_the_full_tower_with_unique_ids() {
    let scenes = catalog(99);
    assert_eq!(scenes.len(), SCENE_COUNT);
    let mut ids: Vec<&str> = scenes.iter().map(|s| s.id()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), SCENE_COUNT);
    for s in &scenes {
        assert!(s.content_radius() > 0.0, "{} has no content radius", s.id());
    }
}

#[test]
fn every_scene_initializes_updates_and_renders() {
    let viewport = Viewport::new(1280, 720);
    let c = ctx(viewport);
    for mut scene in catalog(7) {
        scene.init(viewport).unwrap();
        for i in 0..10 {
            let mut step = c;
            step.time = i as f32 / 60.0;
            scene.update(&step).unwrap();
        }
        let mut list = DrawList::default();
        scene.render(&mut list);
        assert!(!list.is_empty(), "{} rendered nothing", scene.id());
        for inst in list.instances() {
            assert!(
                inst.pos.iter().all(|v| v.is_finite()),
                "{} produced a non-finite position",
                scene.id()
            );
            assert!(inst.scale.is_finite() && inst.scale > 0.0);
        }
    }
}

#[test]
fn scene_content_stays_near_the_origin() {
    // Scenes may overflow their framing radius (the tunnel rushes past the
    // eye) but nothing should wander off to clip-space extremes.
    let viewport = Viewport::new(1280, 720);
    let c = ctx(viewport);
    for mut scene in catalog(21) {
        scene.init(viewport).unwrap();
        scene.update(&c).unwrap();
        let mut list = DrawList::default();
        scene.render(&mut list);
        for inst in list.instances() {
            let d = (inst.pos[0].powi(2) + inst.pos[1].powi(2) + inst.pos[2].powi(2)).sqrt();
            assert!(d <= 32.0, "{} instance at {d} is out of bounds", scene.id());
        }
    }
}

#[test]
fn dispose_is_idempotent_for_every_scene() {
    let viewport = Viewport::new(640, 480);
    for mut scene in catalog(3) {
        scene.init(viewport).unwrap();
        scene.dispose();
        scene.dispose();
        let mut list = DrawList::default();
        scene.render(&mut list);
        assert!(list.is_empty(), "{} rendered after dispose", scene.id());
    }
}

#[test]
fn same_seed_builds_identical_geometry() {
    let viewport = Viewport::new(1280, 720);
    let c = ctx(viewport);
    let mut a = catalog(1234);
    let mut b = catalog(1234);
    for (sa, sb) in a.iter_mut().zip(b.iter_mut()) {
        sa.init(viewport).unwrap();
        sb.init(viewport).unwrap();
        sa.update(&c).unwrap();
        sb.update(&c).unwrap();
        let (mut la, mut lb) = (DrawList::default(), DrawList::default());
        sa.render(&mut la);
        sb.render(&mut lb);
        assert_eq!(la.len(), lb.len());
        for (ia, ib) in la.instances().iter().zip(lb.instances()) {
            assert_eq!(ia.pos, ib.pos, "{} diverged", sa.id());
        }
    }
}

#[test]
fn framing_distance_matches_the_landscape_formula() {
    // r = 5, fov 45 degrees, aspect 1.5:
    // 5 * 1.05 / tan(22.5 degrees) = 12.675
    let d = framing_distance(5.0, DEFAULT_FOV_RADIANS, 1.5);
    assert!((d - 12.675).abs() < 0.01, "got {d}");
}

#[test]
fn portrait_framing_backs_off_further() {
    let landscape = framing_distance(5.0, DEFAULT_FOV_RADIANS, 1.5);
    let portrait = framing_distance(5.0, DEFAULT_FOV_RADIANS, 0.5);
    assert!(portrait > landscape);
    // in portrait the horizontal fit dominates: distance scales with 1/aspect
    let narrower = framing_distance(5.0, DEFAULT_FOV_RADIANS, 0.25);
    assert!((narrower / portrait - 2.0).abs() < 1e-3);
}

#[test]
fn cameras_frame_after_init_and_resize() {
    let wide = Viewport::new(1920, 1080);
    let tall = Viewport::new(1080, 1920);
    for mut scene in catalog(5) {
        scene.init(wide).unwrap();
        let d_wide = scene.camera().distance();
        assert!(d_wide > 0.0);
        scene.resize(tall).unwrap();
        let d_tall = scene.camera().distance();
        assert!(d_tall > d_wide, "{} did not back off in portrait", scene.id());
        assert!((scene.camera().aspect - tall.aspect()).abs() < 1e-6);
    }
}
