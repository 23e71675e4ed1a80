//! Storage module for the key-value store, typed settings access and configuration.

pub mod config;
pub mod database;
pub mod error;
pub mod kv;
pub mod schema;
pub mod settings_store;

pub use config::{AppConfig, ConfigError, DisplaySettings};
pub use database::Database;
pub use error::{StorageError, StorageResult};
pub use kv::{KeyValueStore, MemoryStore};
pub use settings_store::{SettingsStore, StoredState};
