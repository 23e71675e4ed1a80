//! Workout history records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::program::cycle::amrap_failed;
use crate::program::estimate::epley_one_rep_max;
use crate::program::lift::Lift;
use crate::program::session::{SessionPlan, SetKind};
use crate::program::week::CycleWeek;

/// Training max in effect for a lift during a cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingMaxRecord {
    pub lift: Lift,
    pub cycle: u32,
    pub weight: f64,
    pub recorded_at: DateTime<Utc>,
}

/// Best AMRAP performance for a lift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalRecord {
    pub lift: Lift,
    pub weight: f64,
    pub reps: u32,
    /// Epley estimate from weight and reps
    pub estimated_one_rep_max: f64,
    pub achieved_at: DateTime<Utc>,
}

impl PersonalRecord {
    pub fn new(lift: Lift, weight: f64, reps: u32, achieved_at: DateTime<Utc>) -> Self {
        Self {
            lift,
            weight,
            reps,
            estimated_one_rep_max: epley_one_rep_max(weight, reps),
            achieved_at,
        }
    }
}

/// A set as performed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoggedSet {
    pub kind: SetKind,
    pub weight: f64,
    pub reps: u32,
    pub completed: bool,
}

/// A logged workout for one lift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSession {
    pub id: Uuid,
    pub lift: Lift,
    pub cycle: u32,
    pub week: CycleWeek,
    pub completed_at: DateTime<Utc>,
    pub sets: Vec<LoggedSet>,
    /// Reps achieved on the AMRAP set
    pub amrap_reps: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl WorkoutSession {
    /// Record a session from its plan. The AMRAP set takes `amrap_reps`,
    /// every other set is logged as prescribed.
    pub fn from_plan(
        plan: &SessionPlan,
        cycle: u32,
        amrap_reps: Option<u32>,
        completed_at: DateTime<Utc>,
    ) -> Self {
        let amrap_reps = plan.amrap_set().and(amrap_reps);
        let sets = plan
            .sets
            .iter()
            .map(|set| LoggedSet {
                kind: set.kind,
                weight: set.weight,
                reps: match (set.is_amrap, amrap_reps) {
                    (true, Some(reps)) => reps,
                    _ => set.reps,
                },
                completed: true,
            })
            .collect();

        Self {
            id: Uuid::new_v4(),
            lift: plan.lift,
            cycle,
            week: plan.week,
            completed_at,
            sets,
            amrap_reps,
            notes: None,
        }
    }

    /// The AMRAP set as performed.
    pub fn amrap_set(&self) -> Option<LoggedSet> {
        let reps = self.amrap_reps?;
        self.sets
            .iter()
            .rev()
            .find(|s| s.kind == SetKind::Working)
            .map(|s| LoggedSet { reps, ..*s })
    }

    /// Whether the AMRAP fell short of the week's minimum reps.
    pub fn missed_amrap(&self) -> bool {
        self.amrap_reps.is_some_and(|reps| amrap_failed(self.week, reps))
    }

    /// Same lift in the same cycle and week.
    pub fn same_slot(&self, other: &WorkoutSession) -> bool {
        self.lift == other.lift && self.cycle == other.cycle && self.week == other.week
    }

    /// Total lifted volume across completed sets.
    pub fn volume(&self) -> f64 {
        self.sets
            .iter()
            .filter(|s| s.completed)
            .map(|s| s.weight * s.reps as f64)
            .sum()
    }
}

/// Highest estimated 1RM recorded for a lift.
pub fn best_personal_record(
    records: &[PersonalRecord],
    lift: Lift,
) -> Option<&PersonalRecord> {
    records
        .iter()
        .filter(|r| r.lift == lift)
        .max_by(|a, b| a.estimated_one_rep_max.total_cmp(&b.estimated_one_rep_max))
}
