//! JSON backup export and import.

pub mod export;
pub mod import;
pub mod types;

pub use export::{build_backup, export_backup};
pub use import::{import_backup, parse_backup, validate_backup};
pub use types::{BackupDocument, BackupError, BackupResult, BACKUP_VERSION};
