use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

#[inline]
pub fn set_opacity(document: &web::Document, element_id: &str, value: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
            let _ = html.style().set_property("opacity", value);
        }
    }
}

/// Fade the input form back and bring the scene forward once a submission
/// is in flight.
pub fn reveal_scene(document: &web::Document) {
    set_opacity(document, "scene-canvas", "1");
    set_opacity(document, "controls", "0.5");
    set_opacity(document, "input-title", "0");
    set_opacity(document, "text-area", "0.1");
    if let Some(el) = document.get_element_by_id("text-area") {
        if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
            area.set_disabled(true);
        }
    }
}

/// Undo `reveal_scene` enough that the user can edit and resubmit.
pub fn restore_form(document: &web::Document) {
    set_opacity(document, "input-title", "1");
    set_opacity(document, "text-area", "1");
    if let Some(el) = document.get_element_by_id("text-area") {
        if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
            area.set_disabled(false);
        }
    }
}

pub fn show_emotion(document: &web::Document, label: &str, power: f32) {
    if let Some(el) = document.get_element_by_id("emotion") {
        el.set_inner_html(&format!(
            "This shape was created because you were feeling {label}, \
             with a strength of {power:.2} out of 1."
        ));
    }
    set_opacity(document, "emotion", "1");
}

pub fn show_error(document: &web::Document, message: &str) {
    if let Some(el) = document.get_element_by_id("emotion") {
        el.set_inner_html(message);
    }
    set_opacity(document, "emotion", "1");
}

pub fn text_area_value(document: &web::Document) -> Option<String> {
    document
        .get_element_by_id("text-area")
        .and_then(|el| el.dyn_into::<web::HtmlTextAreaElement>().ok())
        .map(|area| area.value())
}
