//! Training max resolution.
//!
//! The training max is a deliberately submaximal share of the one-rep max.
//! It grows by a fixed increment every completed cycle and shrinks by 10%
//! for every recorded failure on the lift:
//!
//! ```text
//! adjusted = one_rep_max + progression * (cycle - 1)
//! tm       = round_2_5(adjusted * percentage / 100 * 0.9^failures)
//! ```

use serde::{Deserialize, Serialize};

use super::error::{ProgramError, ProgramResult};
use super::lift::{Lift, LiftMap};
use super::rounding::round_weight;
use crate::settings::TrainingSettings;

/// Multiplier applied per recorded failure.
pub const FAILURE_DECREASE: f64 = 0.9;

/// Inputs needed to resolve one lift's training max.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingMaxInputs {
    pub one_rep_max: f64,
    pub progression: f64,
    pub training_max_percentage: f64,
    pub cycle_number: u32,
    pub failure_decrease_count: u32,
}

impl TrainingMaxInputs {
    /// Reject inputs that would produce a meaningless training max.
    pub fn validate(&self) -> ProgramResult<()> {
        if !self.one_rep_max.is_finite() || self.one_rep_max <= 0.0 {
            return Err(ProgramError::InvalidInput(format!(
                "one rep max must be a positive number, got {}",
                self.one_rep_max
            )));
        }
        if !self.progression.is_finite() || self.progression < 0.0 {
            return Err(ProgramError::InvalidInput(format!(
                "progression must be zero or positive, got {}",
                self.progression
            )));
        }
        if !self.training_max_percentage.is_finite() || self.training_max_percentage < 0.0 {
            return Err(ProgramError::InvalidInput(format!(
                "training max percentage must be zero or positive, got {}",
                self.training_max_percentage
            )));
        }
        if self.cycle_number < 1 {
            return Err(ProgramError::InvalidCycle(self.cycle_number));
        }
        Ok(())
    }

    /// Resolve without validation.
    pub fn resolve(&self) -> f64 {
        resolve_training_max(
            self.one_rep_max,
            self.progression,
            self.training_max_percentage,
            self.cycle_number,
            self.failure_decrease_count,
        )
    }
}

/// Compounding decrease for `count` failures: `0.9^count`.
pub fn decrease_factor(count: u32) -> f64 {
    FAILURE_DECREASE.powi(count.min(i32::MAX as u32) as i32)
}

/// Resolve a training max from raw inputs.
///
/// Total over numeric input; NaN and negative values pass straight through.
/// A cycle number of 0 is treated as cycle 1.
pub fn resolve_training_max(
    one_rep_max: f64,
    progression: f64,
    training_max_percentage: f64,
    cycle_number: u32,
    failure_decrease_count: u32,
) -> f64 {
    let completed_cycles = cycle_number.saturating_sub(1) as f64;
    let adjusted = one_rep_max + progression * completed_cycles;
    let raw = adjusted * (training_max_percentage / 100.0);
    round_weight(raw * decrease_factor(failure_decrease_count))
}

/// Validate, then resolve.
pub fn try_resolve_training_max(inputs: &TrainingMaxInputs) -> ProgramResult<f64> {
    inputs.validate()?;
    Ok(inputs.resolve())
}

/// Inputs for one lift drawn from the stored settings.
pub fn inputs_for(settings: &TrainingSettings, lift: Lift, cycle_number: u32) -> TrainingMaxInputs {
    TrainingMaxInputs {
        one_rep_max: *settings.one_rep_max.get(lift),
        progression: *settings.progression.get(lift),
        training_max_percentage: settings.training_max_percentage,
        cycle_number,
        failure_decrease_count: *settings.failure_decreases.get(lift),
    }
}

/// Training maxes for every lift in the given cycle.
pub fn training_maxes(settings: &TrainingSettings, cycle_number: u32) -> LiftMap<f64> {
    LiftMap::from_fn(|lift| inputs_for(settings, lift, cycle_number).resolve())
}
