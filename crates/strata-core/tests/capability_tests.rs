// Host-side tests for capability-derived resource budgets.

use strata_core::capability::CapabilityDescriptor;
use strata_core::constants::{
    PARTICLE_BUDGET_COARSE, PARTICLE_BUDGET_FINE, PIXEL_RATIO_COARSE_LIMIT,
    PIXEL_RATIO_FINE_LIMIT, PLATFORM_PIXEL_CAP_COARSE, PLATFORM_PIXEL_CAP_FINE,
};

fn caps(coarse: bool, dpr: f32) -> CapabilityDescriptor {
    CapabilityDescriptor {
        pointer_coarse: coarse,
        device_pixel_ratio: dpr,
        max_pixel_ratio_cap: PIXEL_RATIO_FINE_LIMIT,
        reduced_motion: false,
    }
}

#[test]
fn coarse_pointers_are_capped_harder() {
    let c = caps(true, 3.0);
    assert_eq!(c.resolution_multiplier(), PIXEL_RATIO_COARSE_LIMIT);
    let f = caps(false, 3.0);
    assert_eq!(f.resolution_multiplier(), PIXEL_RATIO_FINE_LIMIT);
}

#[test]
fn dpr_below_the_caps_passes_through() {
    let c = caps(false, 1.5);
    assert_eq!(c.resolution_multiplier(), 1.5);
}

#[test]
fn multiplier_never_drops_below_one() {
    let c = caps(false, 0.5);
    assert_eq!(c.resolution_multiplier(), 1.0);
}

#[test]
fn platform_cap_wins_when_lowest() {
    let mut c = caps(false, 3.0);
    c.max_pixel_ratio_cap = 1.25;
    assert_eq!(c.resolution_multiplier(), 1.25);
}

#[test]
fn particle_budget_follows_pointer_class() {
    assert_eq!(caps(true, 2.0).max_particles(), PARTICLE_BUDGET_COARSE);
    assert_eq!(caps(false, 2.0).max_particles(), PARTICLE_BUDGET_FINE);

    // grid sides for the two budgets
    assert_eq!(caps(true, 2.0).particle_grid_side(), 64);
    assert_eq!(caps(false, 2.0).particle_grid_side(), 128);
}

#[test]
fn probe_time_platform_caps_bound_the_multiplier() {
    // descriptors as the browser probe builds them: the platform ceiling
    // depends on the pointer class
    let mut c = caps(true, 3.0);
    c.max_pixel_ratio_cap = PLATFORM_PIXEL_CAP_COARSE;
    assert_eq!(c.resolution_multiplier(), PLATFORM_PIXEL_CAP_COARSE);

    let mut f = caps(false, 4.0);
    f.max_pixel_ratio_cap = PLATFORM_PIXEL_CAP_FINE;
    // the fine pointer-class limit still wins below the platform ceiling
    assert_eq!(f.resolution_multiplier(), PIXEL_RATIO_FINE_LIMIT);

    let mut low = caps(false, 4.0);
    low.max_pixel_ratio_cap = 1.5;
    assert_eq!(low.resolution_multiplier(), 1.5);
}

#[test]
fn default_descriptor_is_a_fine_pointer_desktop() {
    let c = CapabilityDescriptor::default();
    assert!(!c.pointer_coarse);
    assert!(!c.reduced_motion);
    assert_eq!(c.resolution_multiplier(), 1.0);
}
