use super::InputWiring;
use crate::dom;
use web_sys as web;

pub(super) fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let target = w.window.clone();
    dom::add_listener(&target, "pointermove", move |ev: web::PointerEvent| {
        w.session
            .borrow_mut()
            .pointer_moved(ev.client_x() as f64, ev.client_y() as f64);
    });
}

/// `pointerout` bubbles from every element under the body, so only a related
/// target of `<html>` (or none) counts as leaving the page.
pub(super) fn wire_pointerout(w: &InputWiring) {
    let Some(body) = w.window.document().and_then(|d| d.body()) else {
        log::warn!("[input] no <body>; pointer-leave reset unavailable");
        return;
    };
    let w = w.clone();
    dom::add_listener(&body, "pointerout", move |ev: web::PointerEvent| {
        let related = dom::related_node_name(&ev);
        if w.session.borrow_mut().pointer_out(related.as_deref()) {
            log::debug!("[input] pointer left viewport; parallax reset");
        }
    });
}
