use super::camera::Camera;
use super::constants::MAX_PIXEL_RATIO;
use super::input::{is_leaving_viewport, normalize_pointer, InputState, ScrollMetrics, ViewportSize};
use super::pose::{effective_smoothing, target_pose, DisplayedObject, PoseConfig, PoseTarget};

// Session-scoped pose pipeline: input snapshot -> target -> smoothed object.
// Every field has one writer: event handlers own `input`/`target`, the
// bootstrap publishes `object` once, and `tick` owns the object's rotation.

/// Receives draw and resize requests; implemented by the GPU renderer.
pub trait FrameSink {
    fn resize(&mut self, width: u32, height: u32);
    fn draw(&mut self, camera: &Camera, object: Option<&DisplayedObject>);
}

pub struct ViewportSession {
    config: PoseConfig,
    input: InputState,
    target: PoseTarget,
    object: Option<DisplayedObject>,
    camera: Camera,
    viewport: ViewportSize,
}

impl ViewportSession {
    pub fn new(config: PoseConfig, reduced_motion: bool, viewport: ViewportSize) -> Self {
        Self {
            config,
            input: InputState::new(reduced_motion),
            target: PoseTarget::initial(&config),
            object: None,
            camera: Camera::backdrop(viewport.aspect()),
            viewport,
        }
    }

    pub fn config(&self) -> &PoseConfig {
        &self.config
    }

    pub fn input(&self) -> InputState {
        self.input
    }

    pub fn target(&self) -> PoseTarget {
        self.target
    }

    pub fn object(&self) -> Option<&DisplayedObject> {
        self.object.as_ref()
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    pub fn reduced_motion(&self) -> bool {
        self.input.reduced_motion
    }

    fn update_input(&mut self, input: InputState) {
        self.input = input;
        self.target = target_pose(&self.input, &self.config);
    }

    /// Pointer moved to client coordinates. Inert under reduced motion.
    pub fn pointer_moved(&mut self, client_x: f64, client_y: f64) {
        if self.input.reduced_motion {
            return;
        }
        let p = normalize_pointer(client_x, client_y, self.viewport);
        self.update_input(self.input.with_pointer(p));
    }

    /// Pointer `out` event; resets parallax only if it actually left the page.
    pub fn pointer_out(&mut self, related_node_name: Option<&str>) -> bool {
        if self.input.reduced_motion || !is_leaving_viewport(related_node_name) {
            return false;
        }
        self.pointer_left();
        true
    }

    pub fn pointer_left(&mut self) {
        self.update_input(self.input.with_pointer_cleared());
    }

    pub fn scrolled(&mut self, metrics: ScrollMetrics) {
        self.update_input(self.input.with_scroll(metrics.fraction()));
    }

    /// Hand over the loaded asset. Its rotation starts at the configured
    /// initial pose; the target keeps tracking the current input.
    pub fn publish_object(&mut self, mut object: DisplayedObject) {
        object.rotation = self.config.initial_rotation();
        self.object = Some(object);
        self.target = target_pose(&self.input, &self.config);
    }

    /// One animation tick. No-op until an object has been published.
    pub fn tick(&mut self) {
        let factor = effective_smoothing(self.input.reduced_motion, &self.config);
        if let Some(object) = self.object.as_mut() {
            object.smooth_toward(self.target, factor);
        }
    }

    /// Tick then draw.
    pub fn frame(&mut self, sink: &mut impl FrameSink) {
        self.tick();
        self.render(sink);
    }

    /// Draw the current state without advancing the pose.
    pub fn render(&self, sink: &mut impl FrameSink) {
        sink.draw(&self.camera, self.object.as_ref());
    }

    /// Viewport changed: update the camera, resize the surface, and draw once
    /// immediately outside the regular tick cadence.
    pub fn resized(&mut self, viewport: ViewportSize, pixel_ratio: f64, sink: &mut impl FrameSink) {
        self.viewport = viewport;
        self.camera.set_aspect(viewport.aspect());
        let (w, h) = viewport.backing_size(pixel_ratio, MAX_PIXEL_RATIO);
        sink.resize(w, h);
        self.render(sink);
    }
}
