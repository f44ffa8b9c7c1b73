//! Event wiring. Listeners are retained rather than leaked so tearing the
//! engine down also unregisters everything it attached.

use crate::input::{pointer_ndc, PointerState};
use crate::sensors::{self, GyroState};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A registered DOM listener, removed again on drop.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn attach(
        target: &web::EventTarget,
        event: &'static str,
        handler: Box<dyn FnMut(web::Event)>,
    ) -> Option<Self> {
        let closure = Closure::wrap(handler);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Every listener the engine owns. Dropping this detaches them all,
/// including the orientation listener attached lazily after the permission
/// gesture.
pub struct InputBindings {
    _listeners: Vec<Listener>,
    _orientation: Rc<RefCell<Option<Listener>>>,
}

pub fn wire_input(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    pointer: Rc<RefCell<PointerState>>,
    taps: Rc<Cell<u32>>,
    gyro: Rc<RefCell<GyroState>>,
) -> InputBindings {
    let mut listeners = Vec::new();
    let orientation: Rc<RefCell<Option<Listener>>> = Rc::new(RefCell::new(None));
    let win_target: &web::EventTarget = window.as_ref();

    {
        let pointer = pointer.clone();
        let canvas = canvas.clone();
        listeners.extend(Listener::attach(
            win_target,
            "pointermove",
            Box::new(move |ev: web::Event| {
                if let Ok(ev) = ev.dyn_into::<web::PointerEvent>() {
                    pointer.borrow_mut().ndc =
                        pointer_ndc(ev.client_x() as f32, ev.client_y() as f32, &canvas);
                }
            }),
        ));
    }
    {
        let pointer = pointer.clone();
        let canvas = canvas.clone();
        let gyro = gyro.clone();
        let orientation = orientation.clone();
        let gyro_requested = Cell::new(false);
        listeners.extend(Listener::attach(
            win_target,
            "pointerdown",
            Box::new(move |ev: web::Event| {
                if let Ok(ev) = ev.dyn_into::<web::PointerEvent>() {
                    let mut p = pointer.borrow_mut();
                    p.down = true;
                    p.ndc = pointer_ndc(ev.client_x() as f32, ev.client_y() as f32, &canvas);
                }
                // orientation permission must be requested inside a gesture
                if !gyro_requested.replace(true) {
                    sensors::request_and_attach(gyro.clone(), orientation.clone());
                }
            }),
        ));
    }
    {
        let pointer = pointer.clone();
        listeners.extend(Listener::attach(
            win_target,
            "pointerup",
            Box::new(move |_ev: web::Event| {
                pointer.borrow_mut().down = false;
            }),
        ));
    }
    {
        let pointer = pointer.clone();
        listeners.extend(Listener::attach(
            win_target,
            "pointercancel",
            Box::new(move |_ev: web::Event| {
                pointer.borrow_mut().down = false;
            }),
        ));
    }
    {
        let taps = taps.clone();
        let canvas_target: &web::EventTarget = canvas.as_ref();
        listeners.extend(Listener::attach(
            canvas_target,
            "click",
            Box::new(move |_ev: web::Event| {
                taps.set(taps.get().saturating_add(1));
            }),
        ));
    }

    InputBindings {
        _listeners: listeners,
        _orientation: orientation,
    }
}
