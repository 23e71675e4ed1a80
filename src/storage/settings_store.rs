//! Typed getters and setters over a key-value store.
//!
//! Every value is stored as JSON under a fixed key. Absent keys read as
//! defaults; writes replace the whole value.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::history::types::{PersonalRecord, TrainingMaxRecord, WorkoutSession};
use crate::program::cycle::CyclePosition;
use crate::settings::TrainingSettings;
use crate::storage::error::{StorageError, StorageResult};
use crate::storage::kv::KeyValueStore;

/// Storage keys.
pub mod keys {
    pub const SETTINGS: &str = "settings";
    pub const POSITION: &str = "cycle_position";
    pub const TRAINING_MAXES: &str = "training_maxes";
    pub const PERSONAL_RECORDS: &str = "personal_records";
    pub const WORKOUT_SESSIONS: &str = "workout_sessions";
    pub const ONBOARDING_COMPLETE: &str = "onboarding_complete";

    pub const ALL: [&str; 6] = [
        SETTINGS,
        POSITION,
        TRAINING_MAXES,
        PERSONAL_RECORDS,
        WORKOUT_SESSIONS,
        ONBOARDING_COMPLETE,
    ];
}

/// The complete planner state, written as one batch by
/// [`SettingsStore::replace_all`].
#[derive(Debug, Clone, Copy)]
pub struct StoredState<'a> {
    pub settings: &'a TrainingSettings,
    pub position: CyclePosition,
    pub training_maxes: &'a [TrainingMaxRecord],
    pub personal_records: &'a [PersonalRecord],
    pub sessions: &'a [WorkoutSession],
    pub onboarding_complete: bool,
}

fn encode<T: Serialize + ?Sized>(value: &T) -> StorageResult<String> {
    serde_json::to_string(value).map_err(|e| StorageError::SerializationError(e.to_string()))
}

/// Typed access to persisted planner state.
pub struct SettingsStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SettingsStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Give back the underlying store.
    pub fn into_inner(self) -> S {
        self.store
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>> {
        match self.store.get(key)? {
            Some(raw) => serde_json::from_str(&raw).map(Some).map_err(|e| {
                StorageError::DeserializationError {
                    key: key.to_string(),
                    message: e.to_string(),
                }
            }),
            None => Ok(None),
        }
    }

    fn write<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> StorageResult<()> {
        let raw = encode(value)?;
        self.store.set(key, &raw)
    }

    fn push<T: Serialize + DeserializeOwned>(&mut self, key: &str, item: T) -> StorageResult<()> {
        let mut items: Vec<T> = self.read(key)?.unwrap_or_default();
        items.push(item);
        self.write(key, &items)
    }

    // ========== Settings ==========

    /// Stored settings, or defaults when none have been saved.
    pub fn settings(&self) -> StorageResult<TrainingSettings> {
        Ok(self.read(keys::SETTINGS)?.unwrap_or_default())
    }

    pub fn set_settings(&mut self, settings: &TrainingSettings) -> StorageResult<()> {
        self.write(keys::SETTINGS, settings)
    }

    // ========== Cycle position ==========

    pub fn position(&self) -> StorageResult<CyclePosition> {
        Ok(self.read(keys::POSITION)?.unwrap_or_default())
    }

    pub fn set_position(&mut self, position: CyclePosition) -> StorageResult<()> {
        self.write(keys::POSITION, &position)
    }

    // ========== History ==========

    pub fn training_max_history(&self) -> StorageResult<Vec<TrainingMaxRecord>> {
        Ok(self.read(keys::TRAINING_MAXES)?.unwrap_or_default())
    }

    pub fn set_training_max_history(
        &mut self,
        records: &[TrainingMaxRecord],
    ) -> StorageResult<()> {
        self.write(keys::TRAINING_MAXES, records)
    }

    pub fn push_training_max(&mut self, record: TrainingMaxRecord) -> StorageResult<()> {
        self.push(keys::TRAINING_MAXES, record)
    }

    pub fn personal_records(&self) -> StorageResult<Vec<PersonalRecord>> {
        Ok(self.read(keys::PERSONAL_RECORDS)?.unwrap_or_default())
    }

    pub fn set_personal_records(&mut self, records: &[PersonalRecord]) -> StorageResult<()> {
        self.write(keys::PERSONAL_RECORDS, records)
    }

    pub fn push_personal_record(&mut self, record: PersonalRecord) -> StorageResult<()> {
        self.push(keys::PERSONAL_RECORDS, record)
    }

    pub fn sessions(&self) -> StorageResult<Vec<WorkoutSession>> {
        Ok(self.read(keys::WORKOUT_SESSIONS)?.unwrap_or_default())
    }

    pub fn set_sessions(&mut self, sessions: &[WorkoutSession]) -> StorageResult<()> {
        self.write(keys::WORKOUT_SESSIONS, sessions)
    }

    pub fn push_session(&mut self, session: WorkoutSession) -> StorageResult<()> {
        self.push(keys::WORKOUT_SESSIONS, session)
    }

    // ========== Onboarding ==========

    pub fn onboarding_complete(&self) -> StorageResult<bool> {
        Ok(self.read(keys::ONBOARDING_COMPLETE)?.unwrap_or(false))
    }

    pub fn set_onboarding_complete(&mut self, complete: bool) -> StorageResult<()> {
        self.write(keys::ONBOARDING_COMPLETE, &complete)
    }

    /// Overwrite every planner key in one batch. On error nothing is
    /// written.
    pub fn replace_all(&mut self, state: &StoredState<'_>) -> StorageResult<()> {
        let entries = [
            (keys::SETTINGS, encode(state.settings)?),
            (keys::POSITION, encode(&state.position)?),
            (keys::TRAINING_MAXES, encode(state.training_maxes)?),
            (keys::PERSONAL_RECORDS, encode(state.personal_records)?),
            (keys::WORKOUT_SESSIONS, encode(state.sessions)?),
            (keys::ONBOARDING_COMPLETE, encode(&state.onboarding_complete)?),
        ];
        self.store.set_many(&entries)
    }

    /// Remove every planner key.
    pub fn clear(&mut self) -> StorageResult<()> {
        for key in keys::ALL {
            self.store.remove(key)?;
        }
        Ok(())
    }
}
