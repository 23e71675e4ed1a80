//! Workout history: logged sessions, personal records and training max
//! progression across cycles.

pub mod log;
pub mod types;

pub use log::{
    complete_week, failed_lifts, log_session, plan_for, record_initial_training_maxes,
    SessionOutcome, WeekCompletion,
};
pub use types::{
    best_personal_record, LoggedSet, PersonalRecord, TrainingMaxRecord, WorkoutSession,
};
