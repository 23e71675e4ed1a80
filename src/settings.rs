//! Lifter training settings.
//!
//! Everything the calculator needs, passed around by value. The settings
//! store persists this record as a whole.

use serde::{Deserialize, Serialize};

use crate::program::error::{ProgramError, ProgramResult};
use crate::program::lift::{Lift, LiftMap};
use crate::program::session::{AssistanceConfig, WarmupConfig, MAX_WARMUP_SETS};

/// Accepted training max percentage range during intake.
pub const TRAINING_MAX_PERCENT_RANGE: std::ops::RangeInclusive<f64> = 80.0..=100.0;

/// Default training max percentage.
pub const DEFAULT_TRAINING_MAX_PERCENT: f64 = 90.0;

/// Weight unit preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Kilograms
    #[default]
    Kg,
    /// Pounds
    Lbs,
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Units::Kg => write!(f, "kg"),
            Units::Lbs => write!(f, "lbs"),
        }
    }
}

/// Per-lifter program settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSettings {
    /// Unit the weights are expressed in
    #[serde(default)]
    pub units: Units,
    /// Tested or estimated one-rep maxes
    pub one_rep_max: LiftMap<f64>,
    /// Increment added per completed cycle
    pub progression: LiftMap<f64>,
    /// Share of the one-rep max used as training max
    pub training_max_percentage: f64,
    /// Recorded failures per lift, each costing 10% of training max
    #[serde(default)]
    pub failure_decreases: LiftMap<u32>,
    #[serde(default)]
    pub warmup: WarmupConfig,
    #[serde(default)]
    pub assistance: AssistanceConfig,
}

impl Default for TrainingSettings {
    fn default() -> Self {
        Self {
            units: Units::Kg,
            one_rep_max: LiftMap::default(),
            progression: LiftMap::default_progression(),
            training_max_percentage: DEFAULT_TRAINING_MAX_PERCENT,
            failure_decreases: LiftMap::default(),
            warmup: WarmupConfig::default(),
            assistance: AssistanceConfig::default(),
        }
    }
}

impl TrainingSettings {
    /// Settings from an onboarding intake.
    pub fn from_intake(
        one_rep_max: LiftMap<f64>,
        training_max_percentage: f64,
        units: Units,
    ) -> ProgramResult<Self> {
        let settings = Self {
            units,
            one_rep_max,
            training_max_percentage,
            ..Default::default()
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Check every field against its accepted range.
    pub fn validate(&self) -> ProgramResult<()> {
        for (lift, value) in self.one_rep_max.iter() {
            if !Self::validate_weight(*value) {
                return Err(ProgramError::InvalidInput(format!(
                    "{} one rep max must be a positive number, got {}",
                    lift, value
                )));
            }
        }

        for (lift, value) in self.progression.iter() {
            if !value.is_finite() || *value <= 0.0 {
                return Err(ProgramError::InvalidInput(format!(
                    "{} progression must be positive, got {}",
                    lift, value
                )));
            }
        }

        if !Self::validate_training_max_percentage(self.training_max_percentage) {
            return Err(ProgramError::PercentageOutOfRange(self.training_max_percentage));
        }

        if self.warmup.sets.len() > MAX_WARMUP_SETS {
            return Err(ProgramError::InvalidInput(format!(
                "at most {} warm-up sets are supported, got {}",
                MAX_WARMUP_SETS,
                self.warmup.sets.len()
            )));
        }
        if let Some(bad) = self
            .warmup
            .sets
            .iter()
            .find(|w| !Self::validate_percentage(w.percentage))
        {
            return Err(ProgramError::InvalidInput(format!(
                "warm-up percentage must be within 0-100, got {}",
                bad.percentage
            )));
        }

        if !Self::validate_percentage(self.assistance.percentage) {
            return Err(ProgramError::InvalidInput(format!(
                "assistance percentage must be within 0-100, got {}",
                self.assistance.percentage
            )));
        }

        Ok(())
    }

    /// Validate a one-rep max entry.
    pub fn validate_weight(weight: f64) -> bool {
        weight.is_finite() && weight > 0.0
    }

    /// Validate the training max percentage (80-100).
    pub fn validate_training_max_percentage(percent: f64) -> bool {
        TRAINING_MAX_PERCENT_RANGE.contains(&percent)
    }

    fn validate_percentage(percent: f64) -> bool {
        (0.0..=100.0).contains(&percent)
    }

    /// Record a failed cycle for a lift.
    pub fn record_failure(&mut self, lift: Lift) {
        let count = self.failure_decreases.get_mut(lift);
        *count = count.saturating_add(1);
    }

    /// Clear recorded failures for a lift.
    pub fn reset_failures(&mut self, lift: Lift) {
        self.failure_decreases.set(lift, 0);
    }
}
