//! Fixed-timestep frame accumulator
//!
//! Render frames arrive at whatever cadence the display runs; the
//! simulation always advances in `SIM_DT` steps.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::sim::{GameState, TickInput, tick};

#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    accumulator: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fixed steps owed for a frame of length `frame_dt`
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        if !frame_dt.is_finite() || frame_dt <= 0.0 {
            return 0;
        }
        self.accumulator += frame_dt.min(MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        // Drop any backlog the substep cap couldn't absorb
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(SIM_DT);
        }
        substeps
    }

    /// Run one render frame. Input is applied on the first substep only.
    pub fn run_frame(&mut self, state: &mut GameState, input: &mut TickInput, frame_dt: f32) -> u32 {
        let steps = self.advance(frame_dt);
        for _ in 0..steps {
            tick(state, input, SIM_DT);
            // Clear one-shot inputs after processing
            input.clear();
        }
        steps
    }

    /// Leftover time not yet simulated
    pub fn pending(&self) -> f32 {
        self.accumulator
    }
}
