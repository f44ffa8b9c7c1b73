#![cfg(target_arch = "wasm32")]
//! Browser frontend: probes capabilities, builds the director and the GPU
//! state, wires input, and drives the frame loop. The page embeds a single
//! canvas with id `strata-canvas`; scroll position (or the exported
//! `set_progress` in gallery mode) moves through the scene tower.

mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod probe;
mod render;
mod sensors;

use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use strata_core::director::{Director, ProgressMode};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

const CANVAS_ID: &str = "strata-canvas";

thread_local! {
    static APP: RefCell<Option<Rc<RefCell<frame::FrameContext<'static>>>>> =
        RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("strata-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn configured_mode(document: &web::Document) -> ProgressMode {
    let attr = document
        .document_element()
        .and_then(|e| e.get_attribute("data-strata-mode"));
    match attr.as_deref() {
        Some("gallery") => ProgressMode::Gallery,
        _ => ProgressMode::Scroll,
    }
}

fn configured_seed(document: &web::Document) -> u64 {
    document
        .document_element()
        .and_then(|e| e.get_attribute("data-strata-seed"))
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| js_sys::Date::now() as u64)
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let caps = probe::probe_capabilities(&window);
    dom::sync_canvas_backing_size(&canvas, &caps);

    let mode = configured_mode(&document);
    let seed = configured_seed(&document);
    let director = Director::new(caps, mode, seed);

    // the surface borrows the canvas for the life of the page
    let canvas: &'static web::HtmlCanvasElement = Box::leak(Box::new(canvas));
    let gpu = render::GpuState::new(canvas, caps.max_particles()).await?;

    let pointer = Rc::new(RefCell::new(input::PointerState::default()));
    let taps = Rc::new(Cell::new(0u32));
    let gyro = Rc::new(RefCell::new(sensors::GyroState::default()));
    let bindings = events::wire_input(&window, canvas, pointer.clone(), taps.clone(), gyro.clone());

    let ctx = frame::FrameContext {
        director,
        gpu,
        canvas: canvas.clone(),
        caps,
        pointer,
        taps,
        gyro,
        bindings: Some(bindings),
        last_instant: Instant::now(),
        overlay_revision: 0,
    };
    let handle = Rc::new(RefCell::new(ctx));
    APP.with(|app| {
        *app.borrow_mut() = Some(handle.clone());
    });
    frame::start_loop(handle);
    log::info!("strata-web running ({:?} mode, seed {})", mode, seed);
    Ok(())
}

/// Tear the engine down: scenes and particles are disposed, listeners are
/// detached, the frame loop stops on its next callback.
#[wasm_bindgen]
pub fn destroy() {
    APP.with(|app| {
        if let Some(handle) = app.borrow_mut().take() {
            handle.borrow_mut().destroy();
        }
    });
}

/// Gallery-mode progress control, [0, 1]. Ignored in scroll mode.
#[wasm_bindgen]
pub fn set_progress(progress: f32) {
    APP.with(|app| {
        if let Some(handle) = app.borrow().as_ref() {
            handle.borrow_mut().director.set_progress(progress);
        }
    });
}
