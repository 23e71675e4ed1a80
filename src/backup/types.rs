//! Backup document and errors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::history::types::{PersonalRecord, TrainingMaxRecord, WorkoutSession};
use crate::settings::TrainingSettings;
use crate::storage::error::StorageError;

/// Format version written by this build.
pub const BACKUP_VERSION: &str = "1.0";

/// Full export of planner state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupDocument {
    pub version: String,
    #[serde(default)]
    pub exported_at: Option<DateTime<Utc>>,
    pub settings: TrainingSettings,
    #[serde(default)]
    pub training_maxes: Vec<TrainingMaxRecord>,
    #[serde(default)]
    pub personal_records: Vec<PersonalRecord>,
    #[serde(default)]
    pub workout_sessions: Vec<WorkoutSession>,
    pub current_cycle: u32,
    pub current_week: u8,
}

/// Backup errors.
#[derive(Debug, Error)]
pub enum BackupError {
    /// Document is not valid JSON or does not match the expected shape.
    #[error("Failed to parse backup: {0}")]
    Parse(String),

    /// A field holds a value outside its accepted range.
    #[error("Invalid field '{field}': {reason}")]
    InvalidField { field: String, reason: String },

    /// Backup was written by an incompatible version.
    #[error("Unsupported backup version: {0}")]
    UnsupportedVersion(String),

    #[error("Failed to serialize backup: {0}")]
    Serialize(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl BackupError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        BackupError::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for backup operations.
pub type BackupResult<T> = Result<T, BackupError>;
