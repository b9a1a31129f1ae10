use glam::Vec3;
use std::f32::consts::PI;

// Shared tuning constants for the backdrop. Platform-free so host tests can
// include this file directly.

// DOM hooks
pub const CANVAS_ID: &str = "bg-canvas";
pub const LOADER_ID: &str = "loader";
pub const LOADER_TEXT_SELECTOR: &str = "#loader p";
pub const LOADER_SPINNER_SELECTOR: &str = "#loader .spinner";
pub const HERO_ID: &str = "hero";
pub const REVEAL_SECTION_SELECTOR: &str = ".fade-in-section:not(#hero)";
pub const REVEALED_CLASS: &str = "visible";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Asset
pub const MODEL_PATH: &str = "model/car.glb";
pub const MODEL_SCALE: f32 = 3.0;

// Pose (radians). Rotation is stored as (pitch, yaw, roll) in x/y/z.
pub const INITIAL_PITCH: f32 = 0.0;
pub const INITIAL_YAW: f32 = PI * 0.1;
pub const INITIAL_ROLL: f32 = 0.0;
pub const ROTATION_SPEED_FACTOR: f32 = PI * 1.8; // yaw added over a full page scroll
pub const PARALLAX_FACTOR_PITCH: f32 = 0.15; // pointer Y -> pitch
pub const PARALLAX_FACTOR_YAW: f32 = 0.25; // pointer X -> yaw offset
pub const SMOOTHING_FACTOR: f32 = 0.08; // fraction of the remaining gap closed per tick

// Camera
pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 1.5, 7.0);
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Scene look
pub const BACKGROUND_COLOR: u32 = 0x0f0f0f;
pub const FOG_NEAR: f32 = 10.0;
pub const FOG_FAR: f32 = 25.0;
pub const AMBIENT_LIGHT_COLOR: u32 = 0xffffff;
pub const AMBIENT_LIGHT_INTENSITY: f32 = 0.6;
pub const HEMISPHERE_LIGHT_SKY: u32 = 0xcceeff;
pub const HEMISPHERE_LIGHT_GROUND: u32 = 0x444444;
pub const HEMISPHERE_LIGHT_INTENSITY: f32 = 0.8;
pub const DIRECTIONAL_LIGHT_COLOR: u32 = 0xffffff;
pub const DIRECTIONAL_LIGHT_INTENSITY: f32 = 1.2;
pub const DIRECTIONAL_LIGHT_POSITION: Vec3 = Vec3::new(8.0, 12.0, 10.0);
pub const MATERIAL_METALNESS: f32 = 0.4;
pub const MATERIAL_ROUGHNESS: f32 = 0.5;

// Section reveal
pub const REVEAL_THRESHOLD: f64 = 0.15;

// Loader fade-out; matches the CSS opacity transition
pub const LOADER_FADE_MS: i32 = 500;

/// Convert a `0xRRGGBB` sRGB colour into linear RGB components.
pub fn srgb_hex_to_linear(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| {
        let c = ((hex >> shift) & 0xff) as f32 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    [channel(16), channel(8), channel(0)]
}
