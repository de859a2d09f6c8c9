//! Read-only view of the session for the presentation layer

use glam::Vec3;
use serde::Serialize;

use super::state::{GameState, RotationDelta, ShotOutcome};
use crate::to_percent;

/// Transient message currently on screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeedbackView {
    pub outcome: ShotOutcome,
    pub text: &'static str,
    /// Seconds until the message disappears
    pub remaining_secs: f32,
}

/// Everything a renderer or HUD needs after a tick or input
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot {
    pub position: Vec3,
    /// Rotation to apply to the ball mesh for the last tick
    pub rotation: RotationDelta,
    pub is_flying: bool,
    pub power: f32,
    pub power_percent: u32,
    pub attempted: u32,
    pub made: u32,
    pub score: u32,
    pub accuracy: f32,
    pub accuracy_percent: u32,
    pub feedback: Option<FeedbackView>,
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot {
        let feedback = self.feedback.map(|f| FeedbackView {
            outcome: f.outcome,
            text: f.outcome.text(),
            remaining_secs: (f.expires_at - self.time).max(0.0) as f32,
        });

        Snapshot {
            position: self.ball.position,
            rotation: self.ball.last_rotation,
            is_flying: self.ball.is_flying,
            power: self.shot.power,
            power_percent: to_percent(self.shot.power),
            attempted: self.stats.attempted,
            made: self.stats.made,
            score: self.stats.score,
            accuracy: self.stats.accuracy(),
            accuracy_percent: self.stats.accuracy_percent(),
            feedback,
        }
    }
}
