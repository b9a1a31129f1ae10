// Sanity checks on the compiled-in tuning values.

#![allow(dead_code)]
mod backdrop {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
}

use backdrop::constants::*;

#[test]
fn tuning_values_are_in_range() {
    assert!(SMOOTHING_FACTOR > 0.0 && SMOOTHING_FACTOR <= 1.0);
    assert!(ROTATION_SPEED_FACTOR > 0.0);
    assert!(MODEL_SCALE > 0.0);
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD < 1.0);
    assert!(CAMERA_ZNEAR > 0.0 && CAMERA_ZNEAR < CAMERA_ZFAR);
    assert!(FOG_NEAR < FOG_FAR);
    assert!(MAX_PIXEL_RATIO >= 1.0);
}

#[test]
fn camera_sees_past_the_fog() {
    assert!(CAMERA_ZFAR > FOG_FAR);
}

#[test]
fn srgb_conversion_endpoints() {
    assert_eq!(srgb_hex_to_linear(0x000000), [0.0, 0.0, 0.0]);
    let white = srgb_hex_to_linear(0xffffff);
    assert!(white.iter().all(|c| (c - 1.0).abs() < 1e-6));

    let [r, g, b] = srgb_hex_to_linear(0xff0080);
    assert!((r - 1.0).abs() < 1e-6);
    assert_eq!(g, 0.0);
    // Mid-grey sRGB is darker in linear space
    assert!(b > 0.2 && b < 0.23);
}

#[test]
fn background_is_near_black() {
    let bg = srgb_hex_to_linear(BACKGROUND_COLOR);
    assert!(bg.iter().all(|&c| c > 0.0 && c < 0.01));
}
