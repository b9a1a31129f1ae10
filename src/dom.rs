use crate::core::constants::{MAX_PIXEL_RATIO, REDUCED_MOTION_QUERY};
use crate::core::{ScrollMetrics, ViewportSize};
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Attach a listener that lives for the rest of the page session.
pub fn add_listener<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::error!("[dom] failed to listen for {}: {:?}", event, e);
    }
    closure.forget();
}

pub fn viewport_size(window: &web::Window) -> ViewportSize {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    ViewportSize::new(dim(window.inner_width()), dim(window.inner_height()))
}

pub fn scroll_metrics(window: &web::Window) -> ScrollMetrics {
    let scroll_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    ScrollMetrics {
        scroll_y: window.scroll_y().unwrap_or(0.0),
        scroll_height,
        viewport_height: viewport_size(window).height,
    }
}

/// Sampled once at startup; later preference changes are not tracked.
pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    match window.match_media(REDUCED_MOTION_QUERY) {
        Ok(Some(mql)) => mql.matches(),
        _ => false,
    }
}

/// Size the canvas to cover `viewport` in CSS pixels and set its backing
/// store to match the (capped) device pixel ratio.
pub fn size_canvas(canvas: &web::HtmlCanvasElement, viewport: ViewportSize, pixel_ratio: f64) {
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", viewport.width));
    _ = style.set_property("height", &format!("{}px", viewport.height));
    let (w, h) = viewport.backing_size(pixel_ratio, MAX_PIXEL_RATIO);
    canvas.set_width(w);
    canvas.set_height(h);
}

/// Node name of a mouse event's related target, if any.
pub fn related_node_name(ev: &web::MouseEvent) -> Option<String> {
    ev.related_target()
        .and_then(|t| t.dyn_into::<web::Node>().ok())
        .map(|n| n.node_name())
}

pub fn set_hidden(el: &web::Element) {
    _ = el.set_attribute("style", "display:none");
}
