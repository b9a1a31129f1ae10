use super::InputWiring;
use crate::dom;
use web_sys as web;

pub(super) fn wire_scroll(w: &InputWiring) {
    let w = w.clone();
    let target = w.window.clone();
    dom::add_listener(&target, "scroll", move |_ev: web::Event| {
        let metrics = dom::scroll_metrics(&w.window);
        w.session.borrow_mut().scrolled(metrics);
    });
}

pub(super) fn wire_resize(w: &InputWiring) {
    let w = w.clone();
    let target = w.window.clone();
    dom::add_listener(&target, "resize", move |_ev: web::Event| {
        let viewport = dom::viewport_size(&w.window);
        let dpr = w.window.device_pixel_ratio();
        dom::size_canvas(&w.canvas, viewport, dpr);
        let mut gpu = w.gpu.borrow_mut();
        w.session.borrow_mut().resized(viewport, dpr, &mut *gpu);
    });
}
