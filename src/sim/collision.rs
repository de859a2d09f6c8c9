//! Contact detection and response for the floor, backboard, and court bounds
//!
//! Each stage inspects and mutates the ball, then reports what happened.
//! Stages run in the fixed order of [`PIPELINE`]; a later stage sees the
//! velocity an earlier one left behind.

use super::scoring::rim_stage;
use super::state::{Ball, Hoop};
use crate::consts::*;
use crate::settings::Settings;

/// Geometry and material values for the hoop being shot at
#[derive(Debug, Clone, Copy)]
pub struct CourtGeometry {
    pub hoop: Hoop,
    pub floor_height: f32,
    pub restitution: f32,
    pub settle_speed: f32,
    pub rim_radius: f32,
}

impl CourtGeometry {
    pub fn new(settings: &Settings, hoop: Hoop) -> Self {
        Self {
            hoop,
            floor_height: settings.floor_height(),
            restitution: settings.restitution,
            settle_speed: settings.settle_speed,
            rim_radius: settings.rim_radius,
        }
    }
}

/// What a stage did to the ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Contact {
    None,
    /// Ball bounced off the floor and is still in flight
    FloorBounce { rebound_speed: f32 },
    /// Ball came to rest on the floor; the flight is over
    Settled,
    Backboard,
    /// Ball dropped through the rim
    Made,
    /// Ball left the court past a baseline; the flight is over
    OffCourt,
}

impl Contact {
    /// Whether this contact ends the flight
    pub fn ends_flight(self) -> bool {
        matches!(self, Contact::Settled | Contact::OffCourt)
    }
}

/// A single collision stage
pub type Stage = fn(&mut Ball, &CourtGeometry) -> Contact;

/// Stage order is authoritative: floor, backboard, rim, then court bounds
pub const PIPELINE: [Stage; 4] = [floor_stage, backboard_stage, rim_stage, off_court_stage];

/// Clamp to the floor and reflect vertical velocity. Slow rebounds settle.
pub fn floor_stage(ball: &mut Ball, geo: &CourtGeometry) -> Contact {
    if ball.position.y > geo.floor_height {
        return Contact::None;
    }

    ball.position.y = geo.floor_height;
    ball.velocity.y *= -geo.restitution;

    if ball.velocity.y.abs() < geo.settle_speed {
        ball.velocity.y = 0.0;
        ball.is_flying = false;
        return Contact::Settled;
    }

    Contact::FloorBounce {
        rebound_speed: ball.velocity.y,
    }
}

/// Reflect Z velocity off the active backboard.
///
/// Velocity-only: the ball is not pushed back out of the board plane.
pub fn backboard_stage(ball: &mut Ball, geo: &CourtGeometry) -> Contact {
    let board_z = geo.hoop.backboard_z();
    let in_plane = (ball.position.z - board_z).abs() < ball.radius;
    let in_band = ball.position.y > RIM_HEIGHT - BACKBOARD_BAND
        && ball.position.y < RIM_HEIGHT + BACKBOARD_BAND;

    if in_plane && in_band {
        ball.velocity.z = -ball.velocity.z * geo.restitution;
        return Contact::Backboard;
    }
    Contact::None
}

/// End the flight once the ball is well past either baseline
pub fn off_court_stage(ball: &mut Ball, _geo: &CourtGeometry) -> Contact {
    if ball.position.z.abs() > HALF_LEN + OFF_COURT_MARGIN {
        ball.is_flying = false;
        return Contact::OffCourt;
    }
    Contact::None
}
