//! Simulation tuning
//!
//! Loaded once at startup and validated before a session is created.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid settings: {0}")]
    Invalid(String),
}

/// Physics and shot tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Physics ===
    /// Constant acceleration applied to the ball in flight (units/s²)
    pub gravity: Vec3,
    /// Fraction of speed kept on floor and backboard bounces
    pub restitution: f32,
    /// Rebound speed below which a floor bounce settles the ball (units/s)
    pub settle_speed: f32,
    /// Largest accepted tick delta; longer ticks are clamped (seconds)
    pub max_dt: f32,
    /// Squared cross-product length below which the spin axis is held
    pub spin_axis_epsilon: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Gap between the resting ball and the court surface
    pub floor_clearance: f32,

    // === Hoop ===
    /// Scoring radius of the rim opening. Wider than the visual hoop.
    pub rim_radius: f32,

    // === Shooting ===
    /// Launch speed at full power (units/s)
    pub max_shot_speed: f32,
    /// Upward bias added to the raw aim vector before normalizing
    pub loft_bias: f32,
    pub default_power: f32,
    pub power_step: f32,
    /// Distance moved per repositioning input
    pub move_step: f32,

    // === HUD ===
    /// How long made/missed feedback stays visible (seconds)
    pub feedback_secs: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            // Physics
            gravity: Vec3::new(0.0, -9.8, 0.0),
            restitution: 0.7,
            settle_speed: 1.0,
            max_dt: 0.1,
            spin_axis_epsilon: 1e-6,

            // Ball
            ball_radius: 0.24,
            floor_clearance: 0.1,

            // Hoop
            rim_radius: 2.0,

            // Shooting
            max_shot_speed: 30.0,
            loft_bias: 3.0,
            default_power: 0.5,
            power_step: 0.05,
            move_step: 0.5,

            // HUD
            feedback_secs: 1.5,
        }
    }
}

impl Settings {
    /// Height of the ball center when resting on the court
    pub fn floor_height(&self) -> f32 {
        self.ball_radius + self.floor_clearance
    }

    /// Check configuration invariants. A failure here is fatal for the session.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.gravity.is_finite() {
            return Err(invalid("gravity must be finite"));
        }
        if !(self.ball_radius > 0.0) {
            return Err(invalid(format!(
                "ball_radius must be positive, got {}",
                self.ball_radius
            )));
        }
        if !(self.rim_radius > self.ball_radius) {
            return Err(invalid(format!(
                "rim_radius ({}) must exceed ball_radius ({}) or no shot can ever score",
                self.rim_radius, self.ball_radius
            )));
        }
        if !(self.floor_clearance >= 0.0) {
            return Err(invalid(format!(
                "floor height ({}) must be at least ball_radius ({})",
                self.floor_height(),
                self.ball_radius
            )));
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(invalid(format!(
                "restitution must be within [0, 1], got {}",
                self.restitution
            )));
        }
        if !(0.0..=1.0).contains(&self.default_power) {
            return Err(invalid(format!(
                "default_power must be within [0, 1], got {}",
                self.default_power
            )));
        }
        for (name, value) in [
            ("max_dt", self.max_dt),
            ("max_shot_speed", self.max_shot_speed),
            ("feedback_secs", self.feedback_secs),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(invalid(format!("{name} must be positive, got {value}")));
            }
        }
        for (name, value) in [
            ("settle_speed", self.settle_speed),
            ("spin_axis_epsilon", self.spin_axis_epsilon),
            ("loft_bias", self.loft_bias),
            ("power_step", self.power_step),
            ("move_step", self.move_step),
        ] {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(invalid(format!("{name} must be non-negative, got {value}")));
            }
        }
        Ok(())
    }

    /// Parse and validate settings from JSON text. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings to a JSON file
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> SettingsError {
    SettingsError::Invalid(msg.into())
}
