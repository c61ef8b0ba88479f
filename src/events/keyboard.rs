use super::InputWiring;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use folio_core::SectionId;
use web_sys as web;

/// Number keys jump between sections, like the HUD buttons.
pub(super) fn wire_section_keys(w: &InputWiring) {
    let scene = w.scene.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.repeat() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
            return;
        }
        if let Some(id) = SectionId::from_digit_key(&ev.key()) {
            if scene.borrow_mut().go_to(id) {
                log::info!("[keys] -> {}", id.label());
            }
        }
    }) as Box<dyn FnMut(_)>);
    let _ = w
        .window
        .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
