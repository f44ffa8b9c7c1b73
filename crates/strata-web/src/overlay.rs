//! Diagnostics overlay. Hidden while the log is empty; re-rendered only when
//! the diagnostics revision changes so a quiet session never touches the DOM.

use strata_core::diag::Diagnostics;
use web_sys as web;

const OVERLAY_ID: &str = "strata-diagnostics";

fn ensure_element(document: &web::Document) -> Option<web::Element> {
    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        return Some(el);
    }
    let el = document.create_element("div").ok()?;
    el.set_id(OVERLAY_ID);
    let _ = el.set_attribute(
        "style",
        "position:fixed;bottom:8px;left:8px;z-index:999;\
         font:11px/1.4 monospace;color:#f8a;background:rgba(0,0,0,0.6);\
         padding:6px 8px;border-radius:4px;pointer-events:none;display:none",
    );
    document.body()?.append_child(&el).ok()?;
    Some(el)
}

/// Sync the overlay with the diagnostics log. Returns the revision rendered
/// so the caller can skip future calls until it moves.
pub fn sync(document: &web::Document, diagnostics: &Diagnostics, last_revision: u64) -> u64 {
    let revision = diagnostics.revision();
    if revision == last_revision {
        return last_revision;
    }
    let Some(el) = ensure_element(document) else {
        return last_revision;
    };
    if diagnostics.is_empty() {
        return revision;
    }
    let mut text = String::new();
    for entry in diagnostics.entries() {
        text.push_str(&entry.context);
        text.push_str(": ");
        text.push_str(&entry.message);
        text.push('\n');
    }
    el.set_text_content(Some(text.trim_end()));
    let style = el.get_attribute("style").unwrap_or_default();
    if style.contains("display:none") {
        let _ = el.set_attribute("style", &style.replace("display:none", ""));
    }
    revision
}
