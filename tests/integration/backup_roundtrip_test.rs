//! Integration tests for backup export and import between stores.

use chrono::Utc;
use fivethreeone::backup::{export_backup, import_backup, BackupError};
use fivethreeone::history::{complete_week, log_session, plan_for};
use fivethreeone::program::{Lift, LiftMap};
use fivethreeone::settings::{TrainingSettings, Units};
use fivethreeone::storage::{Database, MemoryStore, SettingsStore};

fn populated_store() -> SettingsStore<Database> {
    let mut store = SettingsStore::new(Database::open_in_memory().unwrap());
    let settings = TrainingSettings::from_intake(
        LiftMap {
            bench_press: 225.0,
            squat: 315.0,
            deadlift: 405.0,
            overhead_press: 135.0,
        },
        85.0,
        Units::Lbs,
    )
    .unwrap();
    store.set_settings(&settings).unwrap();
    store.set_onboarding_complete(true).unwrap();

    let plan = plan_for(&store, Lift::Deadlift).unwrap();
    log_session(&mut store, &plan, Some(9), Utc::now()).unwrap();
    complete_week(&mut store, Utc::now()).unwrap();
    store
}

#[test]
fn test_export_then_import_into_empty_store() {
    let source = populated_store();
    let json = export_backup(&source, Utc::now()).unwrap();

    let mut target = SettingsStore::new(MemoryStore::new());
    let document = import_backup(&mut target, &json).unwrap();

    assert_eq!(document.current_week, 2);
    assert_eq!(target.settings().unwrap(), source.settings().unwrap());
    assert_eq!(target.position().unwrap(), source.position().unwrap());
    assert_eq!(target.sessions().unwrap(), source.sessions().unwrap());
    assert_eq!(target.personal_records().unwrap().len(), 1);
    assert_eq!(target.settings().unwrap().units, Units::Lbs);
}

#[test]
fn test_import_replaces_existing_data() {
    let source = populated_store();
    let json = export_backup(&source, Utc::now()).unwrap();

    let mut target = populated_store();
    let plan = plan_for(&target, Lift::Squat).unwrap();
    log_session(&mut target, &plan, Some(5), Utc::now()).unwrap();
    assert_eq!(target.sessions().unwrap().len(), 2);

    import_backup(&mut target, &json).unwrap();
    assert_eq!(target.sessions().unwrap().len(), 1);
}

#[test]
fn test_import_rejects_garbage() {
    let mut target = SettingsStore::new(MemoryStore::new());

    assert!(matches!(
        import_backup(&mut target, "{ not json"),
        Err(BackupError::Parse(_))
    ));
    assert!(matches!(
        import_backup(&mut target, "{\"version\": \"1.0\"}"),
        Err(BackupError::Parse(_))
    ));
    assert!(target.inner().is_empty());
}
