use super::constants::*;
use super::pose::PoseConfig;
use super::reveal::RevealPolicy;

// Runtime configuration: compiled-in defaults, optionally overridden by
// `data-*` attributes on the canvas element.

pub const ATTR_MODEL: &str = "data-model";
pub const ATTR_MODEL_SCALE: &str = "data-model-scale";
pub const ATTR_SMOOTHING: &str = "data-smoothing";
pub const ATTR_SCROLL_ROTATION: &str = "data-scroll-rotation";
pub const ATTR_REVEAL_ONCE: &str = "data-reveal-once";

#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
    pub model_path: String,
    pub model_scale: f32,
    pub pose: PoseConfig,
    pub reveal_threshold: f64,
    pub reveal_policy: RevealPolicy,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            model_path: MODEL_PATH.to_string(),
            model_scale: MODEL_SCALE,
            pose: PoseConfig::default(),
            reveal_threshold: REVEAL_THRESHOLD,
            reveal_policy: RevealPolicy::Toggle,
        }
    }
}

impl ViewerConfig {
    /// Apply overrides from an attribute lookup. Bad values are logged and ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = lookup(ATTR_MODEL) {
            let path = path.trim();
            if path.is_empty() {
                log::warn!("[config] ignoring empty {}", ATTR_MODEL);
            } else {
                self.model_path = path.to_string();
            }
        }
        if let Some(scale) = parse_attr(&lookup, ATTR_MODEL_SCALE, |v| v > 0.0) {
            self.model_scale = scale;
        }
        if let Some(s) = parse_attr(&lookup, ATTR_SMOOTHING, |v| v > 0.0 && v <= 1.0) {
            self.pose.smoothing_factor = s;
        }
        if let Some(r) = parse_attr(&lookup, ATTR_SCROLL_ROTATION, |v| v >= 0.0) {
            self.pose.rotation_speed_factor = r;
        }
        if let Some(flag) = lookup(ATTR_REVEAL_ONCE) {
            self.reveal_policy = match flag.trim() {
                "" | "true" | "1" => RevealPolicy::Once,
                "false" | "0" => RevealPolicy::Toggle,
                other => {
                    log::warn!("[config] ignoring {}={:?}", ATTR_REVEAL_ONCE, other);
                    self.reveal_policy
                }
            };
        }
        self
    }
}

fn parse_attr(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    valid: impl Fn(f32) -> bool,
) -> Option<f32> {
    let raw = lookup(name)?;
    match raw.trim().parse::<f32>() {
        Ok(v) if v.is_finite() && valid(v) => Some(v),
        _ => {
            log::warn!("[config] ignoring {}={:?}", name, raw);
            None
        }
    }
}
