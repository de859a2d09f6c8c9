//! Session shooting stats
//!
//! Accumulated for the life of a session; never cleared by a ball reset.

use serde::{Deserialize, Serialize};

use crate::consts::POINTS_PER_MAKE;
use crate::to_percent;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub attempted: u32,
    pub made: u32,
    pub score: u32,
}

impl SessionStats {
    pub fn record_attempt(&mut self) {
        self.attempted += 1;
    }

    /// Count a make for the current attempt
    pub fn record_make(&mut self) {
        debug_assert!(self.made < self.attempted, "make recorded without an attempt");
        self.made += 1;
        self.score += POINTS_PER_MAKE;
    }

    /// Made / attempted, 0 before the first attempt
    pub fn accuracy(&self) -> f32 {
        if self.attempted == 0 {
            0.0
        } else {
            self.made as f32 / self.attempted as f32
        }
    }

    pub fn accuracy_percent(&self) -> u32 {
        to_percent(self.accuracy())
    }
}
