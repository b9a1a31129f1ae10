use crate::core::constants::{LOADER_FADE_MS, LOADER_ID, LOADER_SPINNER_SELECTOR, LOADER_TEXT_SELECTOR};
use crate::core::model::progress_label;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Loading indicator (`#loader`): progress text, fade-out on success, error state.

#[inline]
fn text_element(document: &web::Document) -> Option<web::Element> {
    document.query_selector(LOADER_TEXT_SELECTOR).ok().flatten()
}

pub fn show_progress(document: &web::Document, percent: u32) {
    if let Some(el) = text_element(document) {
        el.set_text_content(Some(&progress_label(percent)));
    }
}

/// Hide immediately; used when the 3D pipeline never starts.
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADER_ID) {
        dom::set_hidden(&el);
    }
}

/// Fade out, then remove from layout once the CSS transition has run.
pub fn complete(document: &web::Document) {
    let Some(el) = document.get_element_by_id(LOADER_ID) else {
        return;
    };
    _ = el.set_attribute("style", "opacity:0");
    let Some(window) = web::window() else {
        dom::set_hidden(&el);
        return;
    };
    let done = Closure::once_into_js(move || dom::set_hidden(&el));
    if window
        .set_timeout_with_callback_and_timeout_and_arguments_0(done.unchecked_ref(), LOADER_FADE_MS)
        .is_err()
    {
        hide(document);
    }
}

pub fn fail(document: &web::Document) {
    if let Some(el) = text_element(document) {
        el.set_text_content(Some("Error loading 3D model."));
        _ = el.set_attribute("style", "color:red");
    }
    if let Ok(Some(spinner)) = document.query_selector(LOADER_SPINNER_SELECTOR) {
        dom::set_hidden(&spinner);
    }
}
