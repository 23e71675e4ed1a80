//! Session set plans: warm-ups, working sets and BBB assistance.

use serde::{Deserialize, Serialize};

use super::lift::Lift;
use super::rounding::round_weight;
use super::week::{self, CycleWeek, WORKING_SETS};

/// Maximum number of warm-up sets honoured from the configuration.
pub const MAX_WARMUP_SETS: usize = 3;

/// BBB assistance volume.
pub const ASSISTANCE_SETS: usize = 5;
pub const ASSISTANCE_REPS: u32 = 10;

/// Role of a set within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetKind {
    Warmup,
    Working,
    Assistance,
}

impl std::fmt::Display for SetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetKind::Warmup => write!(f, "Warm-up"),
            SetKind::Working => write!(f, "Working"),
            SetKind::Assistance => write!(f, "BBB"),
        }
    }
}

/// A single prescribed set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlannedSet {
    pub kind: SetKind,
    /// Rounded load
    pub weight: f64,
    /// Prescribed reps (minimum reps for an AMRAP set)
    pub reps: u32,
    pub is_amrap: bool,
    /// Percentage of training max the weight was derived from
    pub percentage: f64,
}

/// One warm-up (percentage, reps) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WarmupSet {
    pub percentage: f64,
    pub reps: u32,
}

/// Warm-up configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarmupConfig {
    pub enabled: bool,
    pub sets: Vec<WarmupSet>,
}

impl Default for WarmupConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sets: vec![
                WarmupSet {
                    percentage: 40.0,
                    reps: 5,
                },
                WarmupSet {
                    percentage: 50.0,
                    reps: 5,
                },
                WarmupSet {
                    percentage: 60.0,
                    reps: 3,
                },
            ],
        }
    }
}

/// Boring But Big assistance configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssistanceConfig {
    pub enabled: bool,
    /// Percentage of training max
    pub percentage: f64,
}

impl Default for AssistanceConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            percentage: 50.0,
        }
    }
}

fn planned(
    kind: SetKind,
    training_max: f64,
    percentage: f64,
    reps: u32,
    is_amrap: bool,
) -> PlannedSet {
    PlannedSet {
        kind,
        weight: round_weight(training_max * percentage / 100.0),
        reps,
        is_amrap,
        percentage,
    }
}

/// Build the ordered set list for one lift's session.
///
/// The deload week never carries warm-ups, assistance or an AMRAP set.
pub fn generate_session_sets(
    training_max: f64,
    week: CycleWeek,
    warmup: &WarmupConfig,
    assistance: &AssistanceConfig,
) -> Vec<PlannedSet> {
    let mut sets = Vec::with_capacity(MAX_WARMUP_SETS + WORKING_SETS + ASSISTANCE_SETS);
    let deload = week.is_deload();

    if warmup.enabled && !deload {
        sets.extend(
            warmup
                .sets
                .iter()
                .take(MAX_WARMUP_SETS)
                .filter(|w| w.percentage > 0.0)
                .map(|w| planned(SetKind::Warmup, training_max, w.percentage, w.reps, false)),
        );
    }

    let percentages = week::percentages(week);
    let reps = week::reps(week);
    let amrap = week::has_amrap(week);
    for index in 0..WORKING_SETS {
        let is_last = index == WORKING_SETS - 1;
        sets.push(planned(
            SetKind::Working,
            training_max,
            percentages[index],
            reps[index],
            amrap && is_last,
        ));
    }

    if assistance.enabled && assistance.percentage > 0.0 && !deload {
        let bbb = planned(
            SetKind::Assistance,
            training_max,
            assistance.percentage,
            ASSISTANCE_REPS,
            false,
        );
        sets.extend(std::iter::repeat(bbb).take(ASSISTANCE_SETS));
    }

    sets
}

/// A full session plan for one lift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionPlan {
    pub lift: Lift,
    pub week: CycleWeek,
    pub training_max: f64,
    pub sets: Vec<PlannedSet>,
}

impl SessionPlan {
    pub fn new(
        lift: Lift,
        training_max: f64,
        week: CycleWeek,
        warmup: &WarmupConfig,
        assistance: &AssistanceConfig,
    ) -> Self {
        Self {
            lift,
            week,
            training_max,
            sets: generate_session_sets(training_max, week, warmup, assistance),
        }
    }

    pub fn working_sets(&self) -> impl Iterator<Item = &PlannedSet> {
        self.sets.iter().filter(|s| s.kind == SetKind::Working)
    }

    /// The AMRAP set, absent in the deload week.
    pub fn amrap_set(&self) -> Option<&PlannedSet> {
        self.sets.iter().find(|s| s.is_amrap)
    }

    /// Total prescribed volume (weight x reps) across all sets.
    pub fn total_volume(&self) -> f64 {
        self.sets.iter().map(|s| s.weight * s.reps as f64).sum()
    }
}
