//! Capability probing at startup. The answers feed resource sizing in the
//! core crate, so everything here degrades to the conservative default when
//! a query is unavailable.

use strata_core::capability::CapabilityDescriptor;
use strata_core::constants::{PLATFORM_PIXEL_CAP_COARSE, PLATFORM_PIXEL_CAP_FINE};
use web_sys as web;

fn media_matches(window: &web::Window, query: &str) -> bool {
    window
        .match_media(query)
        .ok()
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false)
}

/// Build the capability descriptor from the live browser environment.
pub fn probe_capabilities(window: &web::Window) -> CapabilityDescriptor {
    let mut caps = CapabilityDescriptor::default();
    caps.pointer_coarse = media_matches(window, "(pointer: coarse)");
    caps.reduced_motion = media_matches(window, "(prefers-reduced-motion: reduce)");
    caps.max_pixel_ratio_cap = if caps.pointer_coarse {
        PLATFORM_PIXEL_CAP_COARSE
    } else {
        PLATFORM_PIXEL_CAP_FINE
    };
    let dpr = window.device_pixel_ratio() as f32;
    if dpr.is_finite() && dpr > 0.0 {
        caps.device_pixel_ratio = dpr;
    }
    log::info!(
        "capabilities: coarse={} dpr={:.2} reduced_motion={} -> multiplier={:.2}, particles={}",
        caps.pointer_coarse,
        caps.device_pixel_ratio,
        caps.reduced_motion,
        caps.resolution_multiplier(),
        caps.max_particles()
    );
    caps
}
