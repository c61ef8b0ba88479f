use super::InputWiring;
use crate::input;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn client_px(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Pointer position anywhere in the window steers the follower.
pub(super) fn wire_follow(w: &InputWiring) {
    let scene = w.scene.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        scene.borrow_mut().on_pointer_move(client_px(&ev));
    }) as Box<dyn FnMut(_)>);
    let _ = w
        .window
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Primary-button drags on the canvas orbit the camera.
pub(super) fn wire_orbit_drag(w: &InputWiring) {
    {
        let canvas = w.canvas.clone();
        let drag = w.drag.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            if ev.button() != 0 {
                return;
            }
            let _ = canvas.set_pointer_capture(ev.pointer_id());
            drag.borrow_mut().begin(ev.pointer_id(), client_px(&ev));
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let drag = w.drag.clone();
        let scene = w.scene.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let Some(delta) = drag.borrow_mut().step(ev.pointer_id(), client_px(&ev)) else {
                return;
            };
            let mut scene = scene.borrow_mut();
            let (d_az, d_polar) = input::drag_to_orbit(delta, scene.viewport().y);
            scene.rig.controls.rotate(d_az, d_polar);
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .canvas
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    for kind in ["pointerup", "pointercancel"] {
        let canvas = w.canvas.clone();
        let drag = w.drag.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            drag.borrow_mut().end(ev.pointer_id());
            let _ = canvas.release_pointer_capture(ev.pointer_id());
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .canvas
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub(super) fn wire_wheel(w: &InputWiring) {
    let scene = w.scene.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let scale = input::wheel_to_zoom(ev.delta_y() as f32);
        let mut scene = scene.borrow_mut();
        if scene.rig.controls.enabled {
            ev.prevent_default();
            scene.rig.controls.zoom(scale);
        }
    }) as Box<dyn FnMut(_)>);
    let _ = w
        .canvas
        .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}
