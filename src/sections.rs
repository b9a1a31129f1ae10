use crate::core::constants::{HERO_ID, REVEALED_CLASS, REVEAL_SECTION_SELECTOR};
use crate::core::{IntersectionSample, RevealMonitor, RevealPolicy};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

// Fade-in of page sections as they scroll into view. Independent of the 3D
// pipeline, so it runs even when the canvas or the model is unavailable.

fn collect_sections(document: &web::Document) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(REVEAL_SECTION_SELECTOR) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

/// The hero section starts revealed and is never observed.
fn reveal_hero(document: &web::Document) {
    if let Some(hero) = document.get_element_by_id(HERO_ID) {
        _ = hero.class_list().add_1(REVEALED_CLASS);
    }
}

pub fn wire_section_reveal(
    document: &web::Document,
    threshold: f64,
    policy: RevealPolicy,
) -> anyhow::Result<()> {
    reveal_hero(document);
    let sections = Rc::new(collect_sections(document));
    if sections.is_empty() {
        log::info!("[reveal] no sections to observe");
        return Ok(());
    }
    let monitor = Rc::new(RefCell::new(RevealMonitor::new(
        sections.len(),
        threshold,
        policy,
    )));

    let thresholds = js_sys::Array::new();
    for t in monitor.borrow().observer_thresholds() {
        thresholds.push(&JsValue::from_f64(t));
    }
    let init = web::IntersectionObserverInit::new();
    init.set_root_margin("0px");
    init.set_threshold(&thresholds);

    let sections_cb = sections.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = sections_cb.iter().position(|s| *s == target) else {
                    continue;
                };
                let sample = IntersectionSample {
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                };
                let Some(change) = monitor.borrow_mut().apply(index, sample) else {
                    continue;
                };
                // Write the class even when unchanged so markup that ships with
                // `visible` is brought in line on the observer's first report
                let cl = target.class_list();
                _ = if change.state.is_visible() {
                    cl.add_1(REVEALED_CLASS)
                } else {
                    cl.remove_1(REVEALED_CLASS)
                };
                if change.changed {
                    log::debug!("[reveal] section {} -> {:?}", index, change.state);
                }
                if change.unobserve {
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    callback.forget();
    for section in sections.iter() {
        observer.observe(section);
    }
    log::info!(
        "[reveal] observing {} sections (threshold {:.2}, {:?})",
        sections.len(),
        threshold,
        policy
    );
    Ok(())
}
