use super::constants::*;
use super::input::InputState;
use glam::{EulerRot, Mat4, Vec3};

// Target pose calculation and per-tick exponential smoothing.

/// Fixed tuning for how input maps onto orientation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoseConfig {
    pub initial_yaw: f32,
    pub initial_pitch: f32,
    pub initial_roll: f32,
    pub rotation_speed_factor: f32,
    pub parallax_factor_yaw: f32,
    pub parallax_factor_pitch: f32,
    /// Fraction of the remaining gap closed per tick, in (0, 1].
    pub smoothing_factor: f32,
}

impl Default for PoseConfig {
    fn default() -> Self {
        Self {
            initial_yaw: INITIAL_YAW,
            initial_pitch: INITIAL_PITCH,
            initial_roll: INITIAL_ROLL,
            rotation_speed_factor: ROTATION_SPEED_FACTOR,
            parallax_factor_yaw: PARALLAX_FACTOR_YAW,
            parallax_factor_pitch: PARALLAX_FACTOR_PITCH,
            smoothing_factor: SMOOTHING_FACTOR,
        }
    }
}

impl PoseConfig {
    pub fn initial_rotation(&self) -> Vec3 {
        Vec3::new(self.initial_pitch, self.initial_yaw, self.initial_roll)
    }
}

/// Desired orientation; the smoother chases it every tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoseTarget {
    pub yaw: f32,
    pub pitch: f32,
}

impl PoseTarget {
    pub fn initial(config: &PoseConfig) -> Self {
        Self {
            yaw: config.initial_yaw,
            pitch: config.initial_pitch,
        }
    }
}

/// Yaw contributed by scroll alone.
#[inline]
pub fn base_yaw(scroll_fraction: f32, config: &PoseConfig) -> f32 {
    config.initial_yaw + scroll_fraction * config.rotation_speed_factor
}

/// Pure mapping from an input snapshot to the target orientation.
pub fn target_pose(input: &InputState, config: &PoseConfig) -> PoseTarget {
    PoseTarget {
        yaw: base_yaw(input.scroll_fraction, config) + input.pointer_x * config.parallax_factor_yaw,
        pitch: config.initial_pitch + input.pointer_y * config.parallax_factor_pitch,
    }
}

/// Per-tick lerp factor; reduced motion snaps straight to the target.
#[inline]
pub fn effective_smoothing(reduced_motion: bool, config: &PoseConfig) -> f32 {
    if reduced_motion {
        1.0
    } else {
        config.smoothing_factor
    }
}

/// Close `factor` of the gap between `current` and `target`.
/// A factor of 1 or more lands exactly on `target`.
#[inline]
pub fn approach(current: f32, target: f32, factor: f32) -> f32 {
    if factor >= 1.0 {
        target
    } else {
        current + (target - current) * factor
    }
}

/// The single displayed asset's transform.
///
/// `rotation` holds (pitch, yaw, roll) as XYZ Euler angles. `offset` is applied
/// in model space before scaling so the object pivots about its bounds centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayedObject {
    pub rotation: Vec3,
    pub offset: Vec3,
    pub scale: f32,
}

impl DisplayedObject {
    pub fn centered(center: Vec3, scale: f32, rotation: Vec3) -> Self {
        Self {
            rotation,
            offset: -center,
            scale,
        }
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.rotation.y
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.rotation.x
    }

    /// Advance one tick toward `target`. Roll is left untouched.
    pub fn smooth_toward(&mut self, target: PoseTarget, factor: f32) {
        self.rotation.y = approach(self.rotation.y, target.yaw, factor);
        self.rotation.x = approach(self.rotation.x, target.pitch, factor);
    }

    pub fn model_matrix(&self) -> Mat4 {
        let r = Mat4::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        r * Mat4::from_scale(Vec3::splat(self.scale)) * Mat4::from_translation(self.offset)
    }
}
