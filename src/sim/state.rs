//! Game state and core simulation types
//!
//! One `GameState` owns everything a session mutates: ball, shot
//! parameters, stats, feedback, and the outbound event queue.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::stats::SessionStats;
use crate::consts::*;
use crate::settings::{Settings, SettingsError};

/// Undrained events kept before the oldest are discarded
pub const MAX_PENDING_EVENTS: usize = 256;

/// Current phase of play, derived from the ball's flight flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball at rest; may be repositioned and power adjusted
    Idle,
    /// Ball in ballistic motion; repositioning and power changes are rejected
    Flying,
}

/// One of the two hoops, named by baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Hoop {
    /// Hoop on the -Z baseline
    #[default]
    Near,
    /// Hoop on the +Z baseline
    Far,
}

impl Hoop {
    /// Pick the hoop whose baseline is closer to `z`. Ties go to `Near`.
    pub fn nearest_to(z: f32) -> Self {
        if (z - HALF_LEN).abs() < (z + HALF_LEN).abs() {
            Hoop::Far
        } else {
            Hoop::Near
        }
    }

    /// Sign of the baseline along Z
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Hoop::Near => -1.0,
            Hoop::Far => 1.0,
        }
    }

    /// Baseline Z coordinate
    pub fn baseline_z(self) -> f32 {
        self.sign() * HALF_LEN
    }

    /// Z of the backboard's center plane
    pub fn backboard_z(self) -> f32 {
        self.sign() * (HALF_LEN - BACKBOARD_ARM - BACKBOARD_THICKNESS / 2.0)
    }

    /// Center of the rim opening
    pub fn rim_center(self) -> Vec3 {
        let z = self.backboard_z() - self.sign() * RIM_FROM_BOARD;
        Vec3::new(0.0, RIM_HEIGHT, z)
    }
}

/// Rotation applied to the ball during the most recent tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationDelta {
    pub axis: Vec3,
    /// Radians
    pub angle: f32,
}

impl RotationDelta {
    pub const NONE: Self = Self {
        axis: Vec3::X,
        angle: 0.0,
    };
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub position: Vec3,
    pub velocity: Vec3,
    pub radius: f32,
    /// Remembered spin axis (unit length), held while velocity is near-vertical
    pub spin_axis: Vec3,
    /// Remembered spin rate (radians/sec)
    pub spin_speed: f32,
    /// Accumulated visual orientation
    pub orientation: Quat,
    pub last_rotation: RotationDelta,
    pub is_flying: bool,
    /// Set once the current flight has scored; cleared whenever the flight ends
    pub has_scored: bool,
}

impl Ball {
    /// Create a ball resting at `position`
    pub fn new(position: Vec3, radius: f32) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            radius,
            spin_axis: Vec3::X,
            spin_speed: 0.0,
            orientation: Quat::IDENTITY,
            last_rotation: RotationDelta::NONE,
            is_flying: false,
            has_scored: false,
        }
    }
}

/// Aim and power for the next shot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotParams {
    /// 0-1, scaled by the max shot speed at launch
    pub power: f32,
    /// Hoop chosen at the last launch
    pub target_hoop: Hoop,
}

/// Outcome of a completed flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotOutcome {
    Made,
    Missed,
}

impl ShotOutcome {
    pub fn text(self) -> &'static str {
        match self {
            ShotOutcome::Made => MADE_TEXT,
            ShotOutcome::Missed => MISSED_TEXT,
        }
    }
}

/// Why a flight ended without scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissReason {
    /// Ball travelled past a baseline
    OffCourt,
    /// Ball came to rest on the floor without scoring. Not an off-court
    /// miss: the ball never left play, it just ran out of bounce.
    Settled,
}

/// Transient made/missed message with a simulated-time deadline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub outcome: ShotOutcome,
    /// Session time (seconds) at which the message disappears
    pub expires_at: f64,
}

/// Events raised by the simulation for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ShotLaunched { hoop: Hoop, power: f32, velocity: Vec3 },
    FloorBounce { rebound_speed: f32 },
    BackboardHit { hoop: Hoop },
    ShotMade { hoop: Hoop },
    ShotMissed { hoop: Hoop, reason: MissReason },
    BallSettled { position: Vec3 },
    BallReset,
}

/// Complete session state (deterministic given settings and inputs)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub settings: Settings,
    pub ball: Ball,
    pub shot: ShotParams,
    pub stats: SessionStats,
    /// Active feedback message, if any
    pub feedback: Option<Feedback>,
    /// Simulated seconds since session start
    pub time: f64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events raised since the last drain. Hosts should call
    /// [`GameState::drain_events`] each frame; past [`MAX_PENDING_EVENTS`]
    /// the oldest entries are dropped.
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a session, validating the settings first
    pub fn new(settings: Settings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self::from_valid(settings))
    }

    fn from_valid(settings: Settings) -> Self {
        let ball = Ball::new(rest_position(&settings), settings.ball_radius);
        let shot = ShotParams {
            power: settings.default_power,
            target_hoop: Hoop::default(),
        };
        Self {
            settings,
            ball,
            shot,
            stats: SessionStats::default(),
            feedback: None,
            time: 0.0,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        if self.ball.is_flying {
            GamePhase::Flying
        } else {
            GamePhase::Idle
        }
    }

    /// Take all events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Queue an event, discarding the oldest once the queue is full
    pub(crate) fn push_event(&mut self, event: GameEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            let excess = self.events.len() + 1 - MAX_PENDING_EVENTS;
            self.events.drain(..excess);
        }
        self.events.push(event);
    }

    /// Show outcome feedback, replacing any message already visible
    pub(crate) fn show_feedback(&mut self, outcome: ShotOutcome) {
        self.feedback = Some(Feedback {
            outcome,
            expires_at: self.time + self.settings.feedback_secs as f64,
        });
    }

    /// Drop feedback whose deadline has passed
    pub(crate) fn expire_feedback(&mut self) {
        if self.feedback.is_some_and(|f| self.time >= f.expires_at) {
            self.feedback = None;
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::from_valid(Settings::default())
    }
}

/// Resting spot at center court
pub fn rest_position(settings: &Settings) -> Vec3 {
    Vec3::new(0.0, settings.floor_height(), 0.0)
}
