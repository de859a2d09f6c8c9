//! Hoop Shot - A basketball shooting simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (flight, collisions, scoring, game state)
//! - `settings`: Tunable physics and shot parameters
//! - `controls`: Raw key names to simulation commands
//! - `clock`: Fixed-timestep frame accumulator

pub mod clock;
pub mod controls;
pub mod settings;
pub mod sim;

pub use clock::FrameClock;
pub use controls::Key;
pub use settings::{Settings, SettingsError};

use glam::Vec3;

/// Court and hoop geometry constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 12;
    /// Longest frame delta the clock will accept (hitches beyond this are dropped)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Court dimensions. The long axis runs along Z, baselines at ±half length.
    pub const COURT_LENGTH: f32 = 30.0;
    pub const COURT_WIDTH: f32 = 15.0;
    pub const HALF_LEN: f32 = COURT_LENGTH / 2.0;
    pub const HALF_WID: f32 = COURT_WIDTH / 2.0;
    /// How far past a baseline the ball may travel before the shot is called off-court
    pub const OFF_COURT_MARGIN: f32 = 1.0;

    /// Rim plane height above the floor
    pub const RIM_HEIGHT: f32 = 3.05;
    /// Backboard support arm, measured from the baseline toward center court
    pub const BACKBOARD_ARM: f32 = 0.9;
    pub const BACKBOARD_THICKNESS: f32 = 0.05;
    /// Rim center distance in front of the backboard face
    pub const RIM_FROM_BOARD: f32 = 0.35;
    /// Half-height of the band around the rim where the backboard can be struck
    pub const BACKBOARD_BAND: f32 = 1.0;

    /// Points awarded for a made shot
    pub const POINTS_PER_MAKE: u32 = 2;

    /// Feedback text shown for each outcome
    pub const MADE_TEXT: &str = "SHOT MADE!";
    pub const MISSED_TEXT: &str = "MISSED SHOT";
}

/// World up direction
pub const UP: Vec3 = Vec3::Y;

/// Horizontal (XZ-plane) distance between two points
#[inline]
pub fn horizontal_distance(a: Vec3, b: Vec3) -> f32 {
    let dx = a.x - b.x;
    let dz = a.z - b.z;
    dx.hypot(dz)
}

/// Round a 0-1 ratio to a whole percentage for HUD display
#[inline]
pub fn to_percent(ratio: f32) -> u32 {
    (ratio.clamp(0.0, 1.0) * 100.0).round() as u32
}
