//! Tilt Snake - a tilt-driven snake game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (chain constraints, collisions, game state)
//! - `input`: DIPPID UDP sensor feed
//! - `settings`: Runtime configuration
//!
//! Rendering and window management are intentionally absent: the simulation
//! exposes a per-frame snapshot (`sim::RenderFrame`) and a front end draws it.

pub mod input;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Simulation tick rate; the runner paces frames to this
    pub const TICK_HZ: u32 = 60;

    /// Arena dimensions (pixels)
    pub const ARENA_WIDTH: f32 = 700.0;
    pub const ARENA_HEIGHT: f32 = 700.0;

    /// Head radius
    pub const HEAD_RADIUS: f32 = 20.0;
    /// Body segment radius
    pub const SEGMENT_RADIUS: f32 = 20.0;
    /// Minimum head displacement before the heading re-orients
    /// (suppresses sprite jitter on near-zero input)
    pub const HEADING_DEADZONE: f32 = 0.15;

    /// Food radius
    pub const FOOD_RADIUS: f32 = 15.0;

    /// Accelerometer-to-displacement scale (sign flip matches sensor handedness)
    pub const TILT_STRENGTH: f32 = -5.0;
    /// Per-axis tilt magnitude below which the axis reads as zero
    pub const TILT_DEADZONE: f32 = 0.1;

    /// Directional pulse magnitude in discrete-key mode
    pub const STEP_PULSE: f32 = 0.5;

    /// Head mass for force-mode integration
    pub const HEAD_MASS: f32 = 4.0;
    /// Linear drag coefficient for force-mode integration
    pub const DRAG_COEFF: f32 = 2.0;

    /// Default DIPPID sensor port
    pub const DIPPID_PORT: u16 = 5700;
}

/// Unit direction of a heading angle (0 rad points along +y)
#[inline]
pub fn heading_dir(heading: f32) -> Vec2 {
    Vec2::new(heading.sin(), heading.cos())
}

/// Heading of a movement delta in the sprite convention (0 rad = +y)
#[inline]
pub fn heading_of(delta: Vec2) -> f32 {
    delta.x.atan2(delta.y)
}
