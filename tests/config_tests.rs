// Host-side tests for runtime configuration overrides.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod backdrop {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod input {
        include!("../src/core/input.rs");
    }
    pub mod pose {
        include!("../src/core/pose.rs");
    }
    pub mod reveal {
        include!("../src/core/reveal.rs");
    }
    pub mod config {
        include!("../src/core/config.rs");
    }
}

use backdrop::config::*;
use backdrop::constants::*;
use backdrop::reveal::RevealPolicy;
use std::collections::HashMap;

fn with_attrs(attrs: &[(&str, &str)]) -> ViewerConfig {
    let map: HashMap<String, String> = attrs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ViewerConfig::default().with_overrides(|name| map.get(name).cloned())
}

#[test]
fn defaults_match_constants() {
    let cfg = ViewerConfig::default();
    assert_eq!(cfg.model_path, MODEL_PATH);
    assert_eq!(cfg.model_scale, MODEL_SCALE);
    assert_eq!(cfg.pose.smoothing_factor, SMOOTHING_FACTOR);
    assert_eq!(cfg.pose.rotation_speed_factor, ROTATION_SPEED_FACTOR);
    assert_eq!(cfg.reveal_threshold, REVEAL_THRESHOLD);
    assert_eq!(cfg.reveal_policy, RevealPolicy::Toggle);
}

#[test]
fn no_attributes_leaves_defaults() {
    assert_eq!(with_attrs(&[]), ViewerConfig::default());
}

#[test]
fn valid_overrides_apply() {
    let cfg = with_attrs(&[
        (ATTR_MODEL, " assets/coupe.gltf "),
        (ATTR_MODEL_SCALE, "1.5"),
        (ATTR_SMOOTHING, "1"),
        (ATTR_SCROLL_ROTATION, "0"),
        (ATTR_REVEAL_ONCE, ""),
    ]);
    assert_eq!(cfg.model_path, "assets/coupe.gltf");
    assert_eq!(cfg.model_scale, 1.5);
    assert_eq!(cfg.pose.smoothing_factor, 1.0);
    assert_eq!(cfg.pose.rotation_speed_factor, 0.0);
    assert_eq!(cfg.reveal_policy, RevealPolicy::Once);
}

#[test]
fn invalid_overrides_are_ignored() {
    let cfg = with_attrs(&[
        (ATTR_MODEL, "   "),
        (ATTR_MODEL_SCALE, "-2"),
        (ATTR_SMOOTHING, "1.5"),
        (ATTR_SCROLL_ROTATION, "fast"),
        (ATTR_REVEAL_ONCE, "sometimes"),
    ]);
    assert_eq!(cfg, ViewerConfig::default());

    let cfg = with_attrs(&[(ATTR_SMOOTHING, "0"), (ATTR_MODEL_SCALE, "NaN")]);
    assert_eq!(cfg.pose.smoothing_factor, SMOOTHING_FACTOR);
    assert_eq!(cfg.model_scale, MODEL_SCALE);
}

#[test]
fn reveal_once_flag_values() {
    assert_eq!(with_attrs(&[(ATTR_REVEAL_ONCE, "true")]).reveal_policy, RevealPolicy::Once);
    assert_eq!(with_attrs(&[(ATTR_REVEAL_ONCE, "1")]).reveal_policy, RevealPolicy::Once);
    assert_eq!(with_attrs(&[(ATTR_REVEAL_ONCE, "false")]).reveal_policy, RevealPolicy::Toggle);
    assert_eq!(with_attrs(&[(ATTR_REVEAL_ONCE, "0")]).reveal_policy, RevealPolicy::Toggle);
}
