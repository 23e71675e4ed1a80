//! Logging sessions and advancing through the program.

use chrono::{DateTime, Utc};

use super::types::{best_personal_record, PersonalRecord, TrainingMaxRecord, WorkoutSession};
use crate::program::cycle::CyclePosition;
use crate::program::lift::Lift;
use crate::program::session::SessionPlan;
use crate::program::training_max::training_maxes;
use crate::storage::error::StorageResult;
use crate::storage::kv::KeyValueStore;
use crate::storage::settings_store::SettingsStore;

/// What logging a session changed.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOutcome {
    pub session: WorkoutSession,
    /// Set when the AMRAP beat the previous best estimated 1RM
    pub new_record: Option<PersonalRecord>,
    /// Whether the AMRAP fell short of the week's minimum reps
    pub amrap_missed: bool,
    /// Whether an earlier log of the same lift and week was replaced
    pub replaced_previous: bool,
}

/// Result of finishing a week.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekCompletion {
    pub position: CyclePosition,
    /// Lifts given a failure decrease for the cycle that just ended
    pub failed_lifts: Vec<Lift>,
}

/// Plan one lift's session at the stored position.
pub fn plan_for<S: KeyValueStore>(
    store: &SettingsStore<S>,
    lift: Lift,
) -> StorageResult<SessionPlan> {
    let settings = store.settings()?;
    let position = store.position()?;
    let tm = *training_maxes(&settings, position.cycle).get(lift);
    Ok(SessionPlan::new(
        lift,
        tm,
        position.week,
        &settings.warmup,
        &settings.assistance,
    ))
}

/// Persist a completed session.
///
/// An AMRAP whose Epley estimate beats the lift's best becomes a personal
/// record. Logging a lift again in the same cycle and week replaces the
/// earlier session. A missed AMRAP only takes effect when the cycle rolls
/// over, see [`complete_week`].
pub fn log_session<S: KeyValueStore>(
    store: &mut SettingsStore<S>,
    plan: &SessionPlan,
    amrap_reps: Option<u32>,
    now: DateTime<Utc>,
) -> StorageResult<SessionOutcome> {
    let position = store.position()?;
    let session = WorkoutSession::from_plan(plan, position.cycle, amrap_reps, now);

    let mut new_record = None;
    if let Some(amrap) = session.amrap_set().filter(|set| set.reps > 0) {
        let candidate = PersonalRecord::new(plan.lift, amrap.weight, amrap.reps, now);
        let records = store.personal_records()?;
        let beats_best = best_personal_record(&records, plan.lift)
            .map_or(true, |best| candidate.estimated_one_rep_max > best.estimated_one_rep_max);

        if beats_best {
            tracing::info!(
                "New {} record: {} x {} (e1RM {:.1})",
                plan.lift,
                candidate.weight,
                candidate.reps,
                candidate.estimated_one_rep_max
            );
            store.push_personal_record(candidate.clone())?;
            new_record = Some(candidate);
        }
    }

    let amrap_missed = session.missed_amrap();
    if amrap_missed {
        tracing::warn!(
            "{} AMRAP missed minimum reps in {} of cycle {}",
            plan.lift,
            plan.week,
            position.cycle
        );
    }

    let mut sessions = store.sessions()?;
    let before = sessions.len();
    sessions.retain(|s| !s.same_slot(&session));
    let replaced_previous = sessions.len() != before;
    if replaced_previous {
        tracing::info!(
            "Replacing earlier {} session for cycle {}, {}",
            plan.lift,
            position.cycle,
            plan.week
        );
    }
    sessions.push(session.clone());
    store.set_sessions(&sessions)?;
    tracing::debug!("Logged {} session {}", plan.lift, session.id);

    Ok(SessionOutcome {
        session,
        new_record,
        amrap_missed,
        replaced_previous,
    })
}

/// Lifts with at least one missed AMRAP among the sessions of `cycle`.
pub fn failed_lifts(sessions: &[WorkoutSession], cycle: u32) -> Vec<Lift> {
    Lift::ALL
        .into_iter()
        .filter(|&lift| {
            sessions
                .iter()
                .any(|s| s.cycle == cycle && s.lift == lift && s.missed_amrap())
        })
        .collect()
}

/// Advance to the next week.
///
/// When a new cycle starts, every lift that missed an AMRAP during the
/// finished cycle gets one failure decrease, then the training max of every
/// lift for the new cycle is appended to the history.
pub fn complete_week<S: KeyValueStore>(
    store: &mut SettingsStore<S>,
    now: DateTime<Utc>,
) -> StorageResult<WeekCompletion> {
    let mut position = store.position()?;
    let finished_cycle = position.cycle;
    let new_cycle = position.advance();

    let mut failed = Vec::new();
    if new_cycle {
        let mut settings = store.settings()?;
        failed = failed_lifts(&store.sessions()?, finished_cycle);
        for &lift in &failed {
            settings.record_failure(lift);
            tracing::warn!(
                "{} failed in cycle {}, failure decreases now {}",
                lift,
                finished_cycle,
                settings.failure_decreases.get(lift)
            );
        }
        if !failed.is_empty() {
            store.set_settings(&settings)?;
        }

        let tms = training_maxes(&settings, position.cycle);
        for (lift, weight) in tms.iter() {
            store.push_training_max(TrainingMaxRecord {
                lift,
                cycle: position.cycle,
                weight: *weight,
                recorded_at: now,
            })?;
        }
        tracing::info!("Starting cycle {}", position.cycle);
    }
    store.set_position(position)?;

    Ok(WeekCompletion {
        position,
        failed_lifts: failed,
    })
}

/// Record the starting training maxes after onboarding.
pub fn record_initial_training_maxes<S: KeyValueStore>(
    store: &mut SettingsStore<S>,
    now: DateTime<Utc>,
) -> StorageResult<()> {
    let settings = store.settings()?;
    let position = store.position()?;
    for (lift, weight) in training_maxes(&settings, position.cycle).iter() {
        store.push_training_max(TrainingMaxRecord {
            lift,
            cycle: position.cycle,
            weight: *weight,
            recorded_at: now,
        })?;
    }
    Ok(())
}
