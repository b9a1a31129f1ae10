// Host-side tests for input sampling.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod backdrop {
    pub mod input {
        include!("../src/core/input.rs");
    }
}

use backdrop::input::*;

#[test]
fn scroll_fraction_is_zero_when_page_cannot_scroll() {
    assert_eq!(scroll_fraction(0.0, 600.0, 600.0), 0.0);
    assert_eq!(scroll_fraction(250.0, 600.0, 600.0), 0.0);
    // Content shorter than the viewport must not yield a negative denominator
    assert_eq!(scroll_fraction(250.0, 400.0, 600.0), 0.0);
}

#[test]
fn scroll_fraction_is_clamped_to_unit_range() {
    assert_eq!(scroll_fraction(-50.0, 2600.0, 600.0), 0.0);
    assert_eq!(scroll_fraction(1000.0, 2600.0, 600.0), 0.5);
    assert_eq!(scroll_fraction(2000.0, 2600.0, 600.0), 1.0);
    assert_eq!(scroll_fraction(9000.0, 2600.0, 600.0), 1.0);
}

#[test]
fn scroll_metrics_delegate_to_fraction() {
    let m = ScrollMetrics {
        scroll_y: 500.0,
        scroll_height: 2600.0,
        viewport_height: 600.0,
    };
    assert_eq!(m.fraction(), 0.25);
}

#[test]
fn pointer_corners_map_to_unit_square_with_y_up() {
    let vp = ViewportSize::new(800.0, 600.0);
    assert_eq!(normalize_pointer(0.0, 0.0, vp), [-1.0, 1.0]);
    assert_eq!(normalize_pointer(800.0, 600.0, vp), [1.0, -1.0]);
    assert_eq!(normalize_pointer(400.0, 300.0, vp), [0.0, 0.0]);
}

#[test]
fn pointer_on_degenerate_viewport_is_neutral() {
    let vp = ViewportSize::new(0.0, 0.0);
    assert_eq!(normalize_pointer(120.0, 80.0, vp), [0.0, 0.0]);
}

#[test]
fn leaving_viewport_detection() {
    assert!(is_leaving_viewport(None));
    assert!(is_leaving_viewport(Some("HTML")));
    assert!(is_leaving_viewport(Some("html")));
    assert!(!is_leaving_viewport(Some("DIV")));
    assert!(!is_leaving_viewport(Some("BODY")));
}

#[test]
fn reduced_motion_pins_pointer_to_neutral() {
    let s = InputState::new(true).with_pointer([0.7, -0.4]);
    assert_eq!(s.pointer_x, 0.0);
    assert_eq!(s.pointer_y, 0.0);

    let s = InputState::new(false).with_pointer([0.7, -0.4]);
    assert_eq!(s.pointer_x, 0.7);
    assert_eq!(s.pointer_y, -0.4);
    let cleared = s.with_pointer_cleared();
    assert_eq!((cleared.pointer_x, cleared.pointer_y), (0.0, 0.0));
}

#[test]
fn backing_size_caps_pixel_ratio() {
    let vp = ViewportSize::new(800.0, 600.0);
    assert_eq!(vp.backing_size(1.0, 2.0), (800, 600));
    assert_eq!(vp.backing_size(3.0, 2.0), (1600, 1200));
    assert_eq!(vp.backing_size(f64::NAN, 2.0), (800, 600));
    assert_eq!(ViewportSize::new(0.0, 0.0).backing_size(2.0, 2.0), (1, 1));
}

#[test]
fn aspect_falls_back_for_empty_viewport() {
    assert_eq!(ViewportSize::new(1920.0, 1080.0).aspect(), (1920.0f64 / 1080.0) as f32);
    assert_eq!(ViewportSize::default().aspect(), 1.0);
}
