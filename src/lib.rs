#![cfg(target_arch = "wasm32")]
use crate::core::constants::CANVAS_ID;
use crate::core::model::progress_percent;
use crate::core::{DisplayedObject, ViewerConfig, ViewportSession};
use crate::render::GpuState;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod asset;
pub mod core;
mod dom;
mod events;
mod frame;
mod loader;
mod render;
mod sections;

fn wire_reveals(document: &web::Document, config: &ViewerConfig) {
    if let Err(e) =
        sections::wire_section_reveal(document, config.reveal_threshold, config.reveal_policy)
    {
        log::error!("[reveal] {:?}", e);
    }
}

/// Fetch the model, normalise it and hand it to the session. Failure leaves
/// the page interactive with an empty scene.
async fn load_displayed_object(
    window: web::Window,
    document: web::Document,
    config: ViewerConfig,
    session: Rc<RefCell<ViewportSession>>,
    gpu: Rc<RefCell<GpuState>>,
) {
    let started = Instant::now();
    let doc_progress = document.clone();
    let result = asset::load_model(&window, &config.model_path, move |loaded, total| {
        loader::show_progress(&doc_progress, progress_percent(loaded, total));
    })
    .await;

    match result {
        Ok(mesh) => {
            let size = mesh.bounds.size();
            log::info!(
                "[model] {} loaded in {:.0} ms: {} vertices, {} triangles, size=({:.2},{:.2},{:.2})",
                config.model_path,
                started.elapsed().as_secs_f64() * 1000.0,
                mesh.vertices.len(),
                mesh.indices.len() / 3,
                size.x,
                size.y,
                size.z
            );
            let object = DisplayedObject::centered(
                mesh.bounds.center(),
                config.model_scale,
                config.pose.initial_rotation(),
            );
            gpu.borrow_mut().upload_model(&mesh);
            session.borrow_mut().publish_object(object);
            loader::complete(&document);
            session.borrow().render(&mut *gpu.borrow_mut());
        }
        Err(e) => {
            log::error!("[model] error loading {}: {:?}", config.model_path, e);
            loader::fail(&document);
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("car-backdrop starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = match document
        .get_element_by_id(CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    {
        Some(c) => c,
        None => {
            log::error!("[init] canvas element #{} not found", CANVAS_ID);
            loader::hide(&document);
            wire_reveals(&document, &ViewerConfig::default());
            return Ok(());
        }
    };

    let config = ViewerConfig::default().with_overrides(|name| canvas.get_attribute(name));
    wire_reveals(&document, &config);

    let reduced_motion = dom::prefers_reduced_motion(&window);
    let viewport = dom::viewport_size(&window);
    dom::size_canvas(&canvas, viewport, window.device_pixel_ratio());

    let Some(gpu) = frame::init_gpu(&canvas).await else {
        loader::hide(&document);
        return Ok(());
    };
    let gpu = Rc::new(RefCell::new(gpu));

    let session = Rc::new(RefCell::new(ViewportSession::new(
        config.pose,
        reduced_motion,
        viewport,
    )));
    // The page may have been restored mid-scroll
    session.borrow_mut().scrolled(dom::scroll_metrics(&window));

    events::wire_input_handlers(events::InputWiring {
        window: window.clone(),
        canvas: canvas.clone(),
        session: session.clone(),
        gpu: gpu.clone(),
    });

    spawn_local(load_displayed_object(
        window.clone(),
        document.clone(),
        config,
        session.clone(),
        gpu.clone(),
    ));

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext { session, gpu }));
    frame::start_loop(frame_ctx);

    Ok(())
}
