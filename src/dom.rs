use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] missing #{}", element_id);
    }
}

/// Match the canvas backing store to its CSS size times `pixel_ratio`.
/// Returns the new backing size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, pixel_ratio: f64) -> (u32, u32) {
    let rect = canvas.get_bounding_client_rect();
    let w_px = ((rect.width() * pixel_ratio) as u32).max(1);
    let h_px = ((rect.height() * pixel_ratio) as u32).max(1);
    if canvas.width() != w_px || canvas.height() != h_px {
        canvas.set_width(w_px);
        canvas.set_height(h_px);
    }
    (w_px, h_px)
}

/// CSS size of the window's layout viewport.
pub fn viewport_css_size() -> Option<glam::Vec2> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some(glam::Vec2::new(width as f32, height as f32))
}

pub fn html_element(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn set_display(el: &web::HtmlElement, visible: bool) {
    let _ = el
        .style()
        .set_property("display", if visible { "" } else { "none" });
}

pub fn set_transform(el: &web::HtmlElement, css: &str) {
    let _ = el.style().set_property("transform", css);
}

pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}
