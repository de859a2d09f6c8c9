//! Controller operations and the per-frame simulation tick
//!
//! Input commands are queued in a [`TickInput`] and applied before physics
//! runs, so input handling and the tick never interleave.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::collision::{Contact, CourtGeometry, PIPELINE};
use super::physics;
use super::state::{
    GameEvent, GameState, Hoop, MissReason, RotationDelta, ShotOutcome, rest_position,
};
use crate::consts::*;

/// Court axis for repositioning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// X, across the court
    Lateral,
    /// Z, baseline to baseline
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Negative,
    Positive,
}

impl Direction {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Negative => -1.0,
            Direction::Positive => 1.0,
        }
    }
}

/// A discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Command {
    Move(Axis, Direction),
    AdjustPower(f32),
    Launch,
    Reset,
}

/// Input commands for a single tick, applied in order
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub commands: Vec<Command>,
}

impl TickInput {
    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

/// Apply queued input, then advance the simulation by `dt`
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    for command in &input.commands {
        state.apply(*command);
    }
    state.step(dt);
}

impl GameState {
    /// Dispatch a single command. Returns whether it was accepted.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Move(axis, direction) => self.move_ball(axis, direction),
            Command::AdjustPower(delta) => self.adjust_power(delta),
            Command::Launch => self.launch_shot(),
            Command::Reset => {
                self.reset_ball();
                true
            }
        }
    }

    /// Nudge the resting ball one step along an axis, clamped to the court.
    /// Rejected while the ball is flying.
    pub fn move_ball(&mut self, axis: Axis, direction: Direction) -> bool {
        if self.ball.is_flying {
            return false;
        }
        let step = self.settings.move_step * direction.sign();
        let pos = &mut self.ball.position;
        match axis {
            Axis::Lateral => pos.x = (pos.x + step).clamp(-HALF_WID, HALF_WID),
            Axis::Long => pos.z = (pos.z + step).clamp(-HALF_LEN, HALF_LEN),
        }
        true
    }

    /// Change shot power by `delta`, clamped to [0, 1]. Rejected while flying.
    pub fn adjust_power(&mut self, delta: f32) -> bool {
        if self.ball.is_flying || !delta.is_finite() {
            return false;
        }
        self.shot.power = (self.shot.power + delta).clamp(0.0, 1.0);
        true
    }

    /// Shoot at the hoop whose baseline is nearer the ball
    pub fn launch_shot(&mut self) -> bool {
        if self.ball.is_flying {
            return false;
        }

        let hoop = Hoop::nearest_to(self.ball.position.z);
        let pos = self.ball.position;
        let mut raw = Vec3::new(-pos.x, RIM_HEIGHT - pos.y, hoop.baseline_z() - pos.z);
        raw.y += self.settings.loft_bias;
        let dir = raw.normalize_or_zero();

        let speed = self.shot.power * self.settings.max_shot_speed;
        self.ball.velocity = dir * speed;
        self.ball.is_flying = true;
        self.ball.has_scored = false;
        self.shot.target_hoop = hoop;
        self.stats.record_attempt();

        log::debug!(
            "Shot launched at {:?} hoop: power {:.2}, velocity {:?}",
            hoop,
            self.shot.power,
            self.ball.velocity
        );
        self.push_event(GameEvent::ShotLaunched {
            hoop,
            power: self.shot.power,
            velocity: self.ball.velocity,
        });
        true
    }

    /// Cancel any flight and return the ball to center court at default power.
    /// Stats are kept.
    pub fn reset_ball(&mut self) {
        self.ball.is_flying = false;
        self.ball.has_scored = false;
        self.ball.velocity = Vec3::ZERO;
        self.ball.position = rest_position(&self.settings);
        self.ball.last_rotation = RotationDelta::NONE;
        self.shot.power = self.settings.default_power;
        self.push_event(GameEvent::BallReset);
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// Negative or non-finite deltas are dropped; deltas above the
    /// configured cap are clamped.
    pub fn step(&mut self, dt: f32) {
        let Some(dt) = sanitize_dt(dt, self.settings.max_dt) else {
            return;
        };

        self.time_ticks += 1;
        self.time += dt as f64;
        self.expire_feedback();

        if !self.ball.is_flying {
            self.ball.last_rotation = RotationDelta::NONE;
            return;
        }

        physics::integrate(&mut self.ball, self.settings.gravity, dt);
        physics::update_spin(&mut self.ball, dt, self.settings.spin_axis_epsilon);

        let geo = CourtGeometry::new(&self.settings, self.shot.target_hoop);
        for stage in PIPELINE {
            let contact = stage(&mut self.ball, &geo);
            self.handle_contact(contact);
            if contact.ends_flight() {
                break;
            }
        }
    }

    fn handle_contact(&mut self, contact: Contact) {
        let hoop = self.shot.target_hoop;
        match contact {
            Contact::None => {}
            Contact::FloorBounce { rebound_speed } => {
                self.push_event(GameEvent::FloorBounce { rebound_speed });
            }
            Contact::Backboard => {
                log::debug!("Backboard hit ({:?})", hoop);
                self.push_event(GameEvent::BackboardHit { hoop });
            }
            Contact::Made => {
                self.stats.record_make();
                log::info!(
                    "Shot made: {}/{} (score {})",
                    self.stats.made,
                    self.stats.attempted,
                    self.stats.score
                );
                self.show_feedback(ShotOutcome::Made);
                self.push_event(GameEvent::ShotMade { hoop });
            }
            Contact::Settled => {
                self.finish_flight(MissReason::Settled);
                self.push_event(GameEvent::BallSettled {
                    position: self.ball.position,
                });
            }
            Contact::OffCourt => self.finish_flight(MissReason::OffCourt),
        }
    }

    /// Close out a flight. A flight that never scored counts as a miss.
    fn finish_flight(&mut self, reason: MissReason) {
        self.ball.is_flying = false;
        if !self.ball.has_scored {
            log::info!("Shot missed ({:?})", reason);
            self.show_feedback(ShotOutcome::Missed);
            self.push_event(GameEvent::ShotMissed {
                hoop: self.shot.target_hoop,
                reason,
            });
        }
        self.ball.has_scored = false;
    }
}

/// Coerce a frame delta into something safe to integrate
fn sanitize_dt(dt: f32, max_dt: f32) -> Option<f32> {
    if !dt.is_finite() || dt < 0.0 {
        log::warn!("Ignoring invalid tick delta: {}", dt);
        return None;
    }
    if dt == 0.0 {
        return None;
    }
    Some(dt.min(max_dt))
}
