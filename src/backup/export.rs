//! Backup export.

use chrono::{DateTime, Utc};

use super::types::{BackupDocument, BackupError, BackupResult, BACKUP_VERSION};
use crate::storage::kv::KeyValueStore;
use crate::storage::settings_store::SettingsStore;

/// Collect the stored state into a backup document.
pub fn build_backup<S: KeyValueStore>(
    store: &SettingsStore<S>,
    now: DateTime<Utc>,
) -> BackupResult<BackupDocument> {
    let position = store.position()?;

    Ok(BackupDocument {
        version: BACKUP_VERSION.to_string(),
        exported_at: Some(now),
        settings: store.settings()?,
        training_maxes: store.training_max_history()?,
        personal_records: store.personal_records()?,
        workout_sessions: store.sessions()?,
        current_cycle: position.cycle,
        current_week: position.week.number(),
    })
}

/// Export the stored state as pretty-printed JSON.
pub fn export_backup<S: KeyValueStore>(
    store: &SettingsStore<S>,
    now: DateTime<Utc>,
) -> BackupResult<String> {
    let document = build_backup(store, now)?;
    let json = serde_json::to_string_pretty(&document)
        .map_err(|e| BackupError::Serialize(e.to_string()))?;

    tracing::info!(
        "Exported backup with {} sessions and {} personal records",
        document.workout_sessions.len(),
        document.personal_records.len()
    );

    Ok(json)
}
