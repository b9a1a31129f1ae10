use crate::core::ViewportSession;
use crate::render::GpuState;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

mod pointer;
mod viewport;

#[derive(Clone)]
pub struct InputWiring {
    pub window: web::Window,
    pub canvas: web::HtmlCanvasElement,
    pub session: Rc<RefCell<ViewportSession>>,
    pub gpu: Rc<RefCell<GpuState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    viewport::wire_scroll(&w);
    viewport::wire_resize(&w);
    if w.session.borrow().reduced_motion() {
        log::info!("[input] reduced motion preferred; pointer parallax disabled");
        return;
    }
    pointer::wire_pointermove(&w);
    pointer::wire_pointerout(&w);
}
