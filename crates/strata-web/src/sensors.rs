//! Device orientation input. iOS gates the event behind a permission prompt
//! that must run inside a user gesture; denial is silent and the engine
//! simply never sees an active gyro.

use crate::events::Listener;
use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[derive(Default, Clone, Copy)]
pub struct GyroState {
    /// Tilt vector, components roughly in [-1, 1].
    pub tilt: Vec3,
    pub active: bool,
}

fn tilt_from_event(ev: &web::DeviceOrientationEvent) -> Option<Vec3> {
    let beta = ev.beta()?;
    let gamma = ev.gamma()?;
    // beta is front-back tilt in [-180, 180], gamma left-right in [-90, 90]
    Some(Vec3::new(
        (gamma / 90.0).clamp(-1.0, 1.0) as f32,
        (beta / 90.0).clamp(-1.0, 1.0) as f32,
        0.0,
    ))
}

fn attach_listener(window: &web::Window, state: Rc<RefCell<GyroState>>) -> Option<Listener> {
    let target: &web::EventTarget = window.as_ref();
    Listener::attach(
        target,
        "deviceorientation",
        Box::new(move |ev: web::Event| {
            if let Ok(ev) = ev.dyn_into::<web::DeviceOrientationEvent>() {
                if let Some(tilt) = tilt_from_event(&ev) {
                    let mut s = state.borrow_mut();
                    s.tilt = tilt;
                    s.active = true;
                }
            }
        }),
    )
}

/// Request orientation access if the platform gates it, then attach the
/// listener into `slot` so teardown can detach it again. Call from inside a
/// user gesture.
pub fn request_and_attach(state: Rc<RefCell<GyroState>>, slot: Rc<RefCell<Option<Listener>>>) {
    let Some(window) = web::window() else {
        return;
    };
    let ctor = js_sys::Reflect::get(&window, &JsValue::from_str("DeviceOrientationEvent"))
        .unwrap_or(JsValue::UNDEFINED);
    if ctor.is_undefined() {
        return;
    }
    let request = js_sys::Reflect::get(&ctor, &JsValue::from_str("requestPermission"))
        .unwrap_or(JsValue::UNDEFINED);
    if let Some(f) = request.dyn_ref::<js_sys::Function>() {
        let f = f.clone();
        let ctor = ctor.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let Ok(promise) = f.call0(&ctor) else {
                return;
            };
            let Ok(promise) = promise.dyn_into::<js_sys::Promise>() else {
                return;
            };
            match JsFuture::from(promise).await {
                Ok(v) if v.as_string().as_deref() == Some("granted") => {
                    // a teardown while the prompt was open leaves the engine
                    // as the only other holder of the slot
                    if Rc::strong_count(&slot) > 1 {
                        if let Some(w) = web::window() {
                            *slot.borrow_mut() = attach_listener(&w, state);
                        }
                    }
                }
                _ => log::info!("device orientation permission not granted"),
            }
        });
    } else {
        // No permission gate on this platform.
        *slot.borrow_mut() = attach_listener(&window, state);
    }
}
