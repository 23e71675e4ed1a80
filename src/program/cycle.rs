//! Position within the training program.

use serde::{Deserialize, Serialize};

use super::error::{ProgramError, ProgramResult};
use super::week::{amrap_minimum_reps, CycleWeek};

/// Current cycle and week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CyclePosition {
    /// Cycle number, starting at 1
    pub cycle: u32,
    pub week: CycleWeek,
}

impl Default for CyclePosition {
    fn default() -> Self {
        Self {
            cycle: 1,
            week: CycleWeek::One,
        }
    }
}

impl CyclePosition {
    /// Build a position from raw numbers.
    pub fn new(cycle: u32, week: u8) -> ProgramResult<Self> {
        if cycle < 1 {
            return Err(ProgramError::InvalidCycle(cycle));
        }
        Ok(Self {
            cycle,
            week: CycleWeek::try_from(week)?,
        })
    }

    /// Move to the next week. Returns true when a new cycle began.
    pub fn advance(&mut self) -> bool {
        let (next, rollover) = self.week.next();
        self.week = next;
        if rollover {
            self.cycle = self.cycle.saturating_add(1);
        }
        rollover
    }
}

impl std::fmt::Display for CyclePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cycle {}, {}", self.cycle, self.week)
    }
}

/// Whether a logged AMRAP fell short of the week's minimum reps.
pub fn amrap_failed(week: CycleWeek, reps: u32) -> bool {
    amrap_minimum_reps(week).is_some_and(|minimum| reps < minimum)
}
