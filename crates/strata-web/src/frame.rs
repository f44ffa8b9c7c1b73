//! The requestAnimationFrame loop. One `FrameContext` owns the director, the
//! GPU state and the shared input cells; `frame` runs once per animation
//! frame until the engine is destroyed.

use crate::{dom, events, input, overlay, render, sensors};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use strata_core::capability::CapabilityDescriptor;
use strata_core::context::{FrameInput, Viewport};
use strata_core::director::Director;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub director: Director,
    pub gpu: render::GpuState<'a>,
    pub canvas: web::HtmlCanvasElement,
    pub caps: CapabilityDescriptor,

    pub pointer: Rc<RefCell<input::PointerState>>,
    pub taps: Rc<Cell<u32>>,
    pub gyro: Rc<RefCell<sensors::GyroState>>,
    pub bindings: Option<events::InputBindings>,

    pub last_instant: Instant,
    pub overlay_revision: u64,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let raw_dt = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let Some(window) = web::window() else {
            return;
        };
        let document = match window.document() {
            Some(d) => d,
            None => return,
        };

        let (width, height) = dom::sync_canvas_backing_size(&self.canvas, &self.caps);
        self.gpu.resize_if_needed(width, height);

        for _ in 0..self.taps.take() {
            self.director.notify_tap();
        }

        let pointer = *self.pointer.borrow();
        let gyro = *self.gyro.borrow();
        let frame_input = FrameInput {
            raw_dt,
            visible: !document.hidden(),
            viewport: Viewport::new(width, height),
            scroll_progress: input::scroll_progress(&window),
            pointer: pointer.ndc,
            pointer_down: pointer.down,
            gyro: gyro.tilt,
            gyro_active: gyro.active,
        };
        if !self.director.tick(&frame_input) {
            return;
        }

        let markers = self.director.markers();
        dom::sync_markers(&document, &markers);
        self.overlay_revision =
            overlay::sync(&document, self.director.diagnostics(), self.overlay_revision);

        // a faulted field keeps drawing whatever state it holds; only the
        // diagnostics report is suppressed after the first failure
        let particles = Some(self.director.particles());
        let params = self.director.post_params();
        if let Err(e) = self.gpu.render(
            self.director.camera(),
            self.director.draw_list(),
            particles,
            &params,
        ) {
            match e {
                wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => self.gpu.reconfigure(),
                wgpu::SurfaceError::Timeout => {}
                other => log::warn!("surface error: {:?}", other),
            }
        }
    }

    /// Tear down the engine: dispose scenes and particles, detach listeners.
    pub fn destroy(&mut self) {
        self.director.destroy();
        self.bindings = None;
    }
}

/// Drive `frame` from requestAnimationFrame until the director is destroyed.
pub fn start_loop(ctx: Rc<RefCell<FrameContext<'static>>>) {
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        {
            let mut ctx = ctx.borrow_mut();
            if ctx.director.is_destroyed() {
                // break the closure cycle so the context and its GPU
                // resources are actually freed; the bindgen shim keeps the
                // invocation alive until this call returns
                drop(f.borrow_mut().take());
                return;
            }
            ctx.frame();
        }
        request_animation_frame(&f);
    }) as Box<dyn FnMut()>));
    request_animation_frame(&g);
}

fn request_animation_frame(f: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(window), Some(closure)) = (web::window(), f.borrow().as_ref()) {
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    }
}
