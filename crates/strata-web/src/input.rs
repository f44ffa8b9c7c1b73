use glam::Vec2;
use web_sys as web;

/// Raw pointer state shared between event closures and the frame loop.
#[derive(Default, Clone, Copy)]
pub struct PointerState {
    /// Position in normalized device range [-1, 1], y up.
    pub ndc: Vec2,
    pub down: bool,
}

/// Convert a client-space pointer position to NDC over the canvas rect.
#[inline]
pub fn pointer_ndc(client_x: f32, client_y: f32, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w <= 0.0 || h <= 0.0 {
        return Vec2::ZERO;
    }
    let u = ((client_x - rect.left() as f32) / w).clamp(0.0, 1.0);
    let v = ((client_y - rect.top() as f32) / h).clamp(0.0, 1.0);
    Vec2::new(u * 2.0 - 1.0, 1.0 - v * 2.0)
}

/// Scroll progress through the page, [0, 1]. A page without overflow reads
/// as zero.
pub fn scroll_progress(window: &web::Window) -> f32 {
    let doc_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|e| e.scroll_height() as f64)
        .unwrap_or(0.0);
    let view_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let track = doc_height - view_height;
    if track <= 1.0 {
        return 0.0;
    }
    let scrolled = window.scroll_y().unwrap_or(0.0);
    (scrolled / track).clamp(0.0, 1.0) as f32
}
