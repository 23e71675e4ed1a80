//! Backup import with field-level validation.
//!
//! Nothing is written unless the whole document validates.

use super::types::{BackupDocument, BackupError, BackupResult, BACKUP_VERSION};
use crate::program::cycle::CyclePosition;
use crate::program::error::ProgramError;
use crate::program::week::CycleWeek;
use crate::storage::kv::KeyValueStore;
use crate::storage::settings_store::{SettingsStore, StoredState};

/// Parse and validate a backup document.
pub fn parse_backup(json: &str) -> BackupResult<BackupDocument> {
    let document: BackupDocument =
        serde_json::from_str(json).map_err(|e| BackupError::Parse(e.to_string()))?;
    validate_backup(&document)?;
    Ok(document)
}

/// Check every field of a parsed document.
pub fn validate_backup(document: &BackupDocument) -> BackupResult<()> {
    validate_version(&document.version)?;

    if document.current_cycle < 1 {
        return Err(BackupError::invalid("current_cycle", "must be at least 1"));
    }
    if CycleWeek::try_from(document.current_week).is_err() {
        return Err(BackupError::invalid(
            "current_week",
            format!("must be 1-4, got {}", document.current_week),
        ));
    }

    document.settings.validate().map_err(|e| {
        let field = match e {
            ProgramError::PercentageOutOfRange(_) => "settings.training_max_percentage",
            _ => "settings",
        };
        BackupError::invalid(field, e.to_string())
    })?;

    for (i, record) in document.training_maxes.iter().enumerate() {
        if !is_positive(record.weight) {
            return Err(BackupError::invalid(
                format!("training_maxes[{}].weight", i),
                format!("must be a positive number, got {}", record.weight),
            ));
        }
        if record.cycle < 1 {
            return Err(BackupError::invalid(
                format!("training_maxes[{}].cycle", i),
                "must be at least 1",
            ));
        }
    }

    for (i, record) in document.personal_records.iter().enumerate() {
        if !is_positive(record.weight) {
            return Err(BackupError::invalid(
                format!("personal_records[{}].weight", i),
                format!("must be a positive number, got {}", record.weight),
            ));
        }
        if record.reps == 0 {
            return Err(BackupError::invalid(
                format!("personal_records[{}].reps", i),
                "must be at least 1",
            ));
        }
    }

    for (i, session) in document.workout_sessions.iter().enumerate() {
        if session.cycle < 1 {
            return Err(BackupError::invalid(
                format!("workout_sessions[{}].cycle", i),
                "must be at least 1",
            ));
        }
        if let Some(j) = session.sets.iter().position(|s| !s.weight.is_finite() || s.weight < 0.0) {
            return Err(BackupError::invalid(
                format!("workout_sessions[{}].sets[{}].weight", i, j),
                "must be a non-negative number",
            ));
        }
    }

    Ok(())
}

fn validate_version(version: &str) -> BackupResult<()> {
    if version.trim().is_empty() {
        return Err(BackupError::invalid("version", "must not be empty"));
    }

    let major = |v: &str| v.split('.').next().map(str::trim).map(str::to_string);
    if major(version) != major(BACKUP_VERSION) {
        return Err(BackupError::UnsupportedVersion(version.to_string()));
    }
    Ok(())
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Replace the stored state with a validated backup.
pub fn import_backup<S: KeyValueStore>(
    store: &mut SettingsStore<S>,
    json: &str,
) -> BackupResult<BackupDocument> {
    let document = parse_backup(json)?;
    let position = CyclePosition::new(document.current_cycle, document.current_week)
        .map_err(|e| BackupError::invalid("current_week", e.to_string()))?;

    store.replace_all(&StoredState {
        settings: &document.settings,
        position,
        training_maxes: &document.training_maxes,
        personal_records: &document.personal_records,
        sessions: &document.workout_sessions,
        onboarding_complete: true,
    })?;

    tracing::info!(
        "Imported backup version {} ({} sessions, {})",
        document.version,
        document.workout_sessions.len(),
        position
    );

    Ok(document)
}
