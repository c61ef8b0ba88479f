mod keyboard;
mod pointer;

use crate::dom;
use crate::input::DragState;
use folio_core::Portfolio;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub window: web::Window,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Portfolio>>,
    pub drag: Rc<RefCell<DragState>>,
    pub paused: Rc<RefCell<bool>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    pointer::wire_follow(&w);
    pointer::wire_orbit_drag(&w);
    pointer::wire_wheel(&w);
    keyboard::wire_section_keys(&w);
    wire_visibility(&w);
    wire_resize(&w);
}

/// Hidden tabs freeze the simulation instead of piling up one huge step.
fn wire_visibility(w: &InputWiring) {
    let document = w.document.clone();
    let paused = w.paused.clone();
    let closure = Closure::wrap(Box::new(move || {
        let hidden = document.hidden();
        *paused.borrow_mut() = hidden;
        log::info!("[visibility] {}", if hidden { "paused" } else { "resumed" });
    }) as Box<dyn FnMut()>);
    let _ = w
        .document
        .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_resize(w: &InputWiring) {
    let scene = w.scene.clone();
    let closure = Closure::wrap(Box::new(move || {
        if let Some(size) = dom::viewport_css_size() {
            scene.borrow_mut().resize(size);
        }
    }) as Box<dyn FnMut()>);
    let _ = w
        .window
        .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
