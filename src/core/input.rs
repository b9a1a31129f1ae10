// Input signal sampling: pointer, scroll and reduced-motion, normalised to
// bounded ranges. Nothing in here touches the DOM.

/// CSS-pixel size of the layout viewport.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width over height; falls back to 1.0 for a degenerate viewport.
    pub fn aspect(&self) -> f32 {
        if self.width > 0.0 && self.height > 0.0 {
            (self.width / self.height) as f32
        } else {
            1.0
        }
    }

    /// Backing-store size for a canvas covering this viewport, with the
    /// device pixel ratio capped at `max_ratio`.
    pub fn backing_size(&self, pixel_ratio: f64, max_ratio: f64) -> (u32, u32) {
        let ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            pixel_ratio.min(max_ratio)
        } else {
            1.0
        };
        let w = (self.width.max(0.0) * ratio) as u32;
        let h = (self.height.max(0.0) * ratio) as u32;
        (w.max(1), h.max(1))
    }
}

/// Raw document scroll measurements as reported by the browser.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    #[inline]
    pub fn fraction(&self) -> f32 {
        scroll_fraction(self.scroll_y, self.scroll_height, self.viewport_height)
    }
}

/// How far down the page the reader is, in `[0, 1]`.
///
/// A page that cannot scroll (`scroll_height <= viewport_height`) always
/// reports 0 regardless of `scroll_y`.
#[inline]
pub fn scroll_fraction(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f32 {
    let scrollable = scroll_height - viewport_height;
    if scrollable > 0.0 && scroll_y.is_finite() {
        (scroll_y / scrollable).clamp(0.0, 1.0) as f32
    } else {
        0.0
    }
}

/// Map client coordinates to `[-1, 1]` on both axes, with +Y pointing up.
#[inline]
pub fn normalize_pointer(client_x: f64, client_y: f64, viewport: ViewportSize) -> [f32; 2] {
    if viewport.width <= 0.0 || viewport.height <= 0.0 {
        return [0.0, 0.0];
    }
    let nx = (client_x / viewport.width) * 2.0 - 1.0;
    let ny = -(client_y / viewport.height) * 2.0 + 1.0;
    [nx.clamp(-1.0, 1.0) as f32, ny.clamp(-1.0, 1.0) as f32]
}

/// True when an `out` event's related target means the pointer left the page:
/// either there is no related node or it is the root `<html>` element.
#[inline]
pub fn is_leaving_viewport(related_node_name: Option<&str>) -> bool {
    match related_node_name {
        None => true,
        Some(name) => name.eq_ignore_ascii_case("html"),
    }
}

/// Snapshot of every normalised input signal.
///
/// Each event produces a fresh snapshot; `reduced_motion` is fixed at
/// construction and pins the pointer to neutral for the whole session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputState {
    pub pointer_x: f32,
    pub pointer_y: f32,
    pub scroll_fraction: f32,
    pub reduced_motion: bool,
}

impl InputState {
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            pointer_x: 0.0,
            pointer_y: 0.0,
            scroll_fraction: 0.0,
            reduced_motion,
        }
    }

    pub fn with_pointer(self, pointer: [f32; 2]) -> Self {
        if self.reduced_motion {
            return self;
        }
        Self {
            pointer_x: pointer[0],
            pointer_y: pointer[1],
            ..self
        }
    }

    pub fn with_pointer_cleared(self) -> Self {
        Self {
            pointer_x: 0.0,
            pointer_y: 0.0,
            ..self
        }
    }

    pub fn with_scroll(self, fraction: f32) -> Self {
        Self {
            scroll_fraction: fraction.clamp(0.0, 1.0),
            ..self
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(false)
    }
}
