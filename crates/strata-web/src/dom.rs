use strata_core::capability::CapabilityDescriptor;
use strata_core::context::SceneMarkers;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Match the canvas backing store to its CSS size times the capped pixel
/// ratio. Returns the resulting backing size in pixels.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    caps: &CapabilityDescriptor,
) -> (u32, u32) {
    let mult = caps.resolution_multiplier() as f64;
    let rect = canvas.get_bounding_client_rect();
    let w_px = ((rect.width() * mult) as u32).max(1);
    let h_px = ((rect.height() * mult) as u32).max(1);
    if canvas.width() != w_px {
        canvas.set_width(w_px);
    }
    if canvas.height() != h_px {
        canvas.set_height(h_px);
    }
    (w_px, h_px)
}

/// Mirror the per-frame markers onto the document root so page CSS and
/// scripts can react to the active scene without polling the engine.
pub fn sync_markers(document: &web::Document, markers: &SceneMarkers) {
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("data-scene", markers.scene_id);
        let _ = root.set_attribute("data-scene-index", &markers.scene_index.to_string());
        if let Ok(el) = root.dyn_into::<web::HtmlElement>() {
            let style = el.style();
            let _ = style.set_property("--scene-progress", &format!("{:.4}", markers.progress));
            let _ = style.set_property(
                "--scroll-velocity",
                &format!("{:.4}", markers.scroll_velocity),
            );
            let _ = style.set_property("--pointer-x", &format!("{:.4}", markers.pointer.x));
            let _ = style.set_property("--pointer-y", &format!("{:.4}", markers.pointer.y));
        }
    }
}
