//! FiveThreeOne - 5/3/1 Strength Training Planner
//!
//! Derives training maxes and session set plans for the 5/3/1 method,
//! keeps a workout log with personal records, and persists lifter
//! settings in a local key-value store with JSON backup support.

pub mod backup;
pub mod history;
pub mod program;
pub mod settings;
pub mod storage;

// Re-export commonly used types
pub use program::{generate_session_sets, resolve_training_max, CycleWeek, Lift, SessionPlan};
pub use settings::TrainingSettings;
pub use storage::{Database, SettingsStore};
