//! Deterministic simulation module
//!
//! All shot logic lives here. This module must be pure and deterministic:
//! - Explicit `dt` only, never wall-clock time
//! - Collision stages in fixed order
//! - No rendering or platform dependencies

pub mod collision;
pub mod physics;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod stats;
pub mod tick;

pub use collision::{Contact, CourtGeometry, PIPELINE};
pub use snapshot::{FeedbackView, Snapshot};
pub use state::{
    Ball, Feedback, GameEvent, GamePhase, GameState, Hoop, MAX_PENDING_EVENTS, MissReason,
    RotationDelta, ShotOutcome, ShotParams,
};
pub use stats::SessionStats;
pub use tick::{Axis, Command, Direction, TickInput, tick};
