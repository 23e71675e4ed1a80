//! Integration tests for a full training cycle.
//!
//! Tests the flow from onboarding through logging sessions to the next cycle.

use chrono::Utc;
use fivethreeone::history::{complete_week, log_session, plan_for, record_initial_training_maxes};
use fivethreeone::program::{CycleWeek, Lift, LiftMap};
use fivethreeone::settings::{TrainingSettings, Units};
use fivethreeone::storage::{Database, SettingsStore};

fn onboard(store: &mut SettingsStore<Database>) {
    let mut settings = TrainingSettings::from_intake(
        LiftMap {
            bench_press: 100.0,
            squat: 140.0,
            deadlift: 180.0,
            overhead_press: 60.0,
        },
        90.0,
        Units::Kg,
    )
    .unwrap();
    settings.assistance.enabled = true;
    store.set_settings(&settings).unwrap();
    store.set_onboarding_complete(true).unwrap();
    record_initial_training_maxes(store, Utc::now()).unwrap();
}

#[test]
fn test_full_cycle_flow() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("planner.db");
    let mut store = SettingsStore::new(Database::open(&path).unwrap());
    onboard(&mut store);

    for week in CycleWeek::ALL {
        assert_eq!(store.position().unwrap().week, week);
        for lift in Lift::ALL {
            let plan = plan_for(&store, lift).unwrap();
            let reps = plan.amrap_set().map(|set| set.reps + 2);
            let outcome = log_session(&mut store, &plan, reps, Utc::now()).unwrap();
            assert!(!outcome.amrap_missed);

            if week.is_deload() {
                assert!(plan.sets.iter().all(|s| !s.is_amrap));
                assert_eq!(plan.sets.len(), 3);
            }
        }
        complete_week(&mut store, Utc::now()).unwrap();
    }

    let position = store.position().unwrap();
    assert_eq!(position.cycle, 2);
    assert_eq!(position.week, CycleWeek::One);

    // 4 lifts x 4 weeks
    assert_eq!(store.sessions().unwrap().len(), 16);

    // Cycle 1 and cycle 2 training maxes
    let history = store.training_max_history().unwrap();
    assert_eq!(history.len(), 8);
    let bench: Vec<f64> = history
        .iter()
        .filter(|r| r.lift == Lift::BenchPress)
        .map(|r| r.weight)
        .collect();
    assert_eq!(bench, vec![90.0, 92.5]);
}

#[test]
fn test_state_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("planner.db");

    {
        let mut store = SettingsStore::new(Database::open(&path).unwrap());
        onboard(&mut store);
        complete_week(&mut store, Utc::now()).unwrap();
    }

    let store = SettingsStore::new(Database::open(&path).unwrap());
    assert!(store.onboarding_complete().unwrap());
    assert_eq!(store.position().unwrap().week, CycleWeek::Two);
    assert_eq!(store.settings().unwrap().one_rep_max.squat, 140.0);
}

#[test]
fn test_failed_cycle_lowers_training_max_once() {
    let mut store = SettingsStore::new(Database::open_in_memory().unwrap());
    onboard(&mut store);

    let mut cycle_one = Vec::new();
    for week in CycleWeek::ALL {
        let plan = plan_for(&store, Lift::OverheadPress).unwrap();
        cycle_one.push(plan.training_max);
        let reps = plan.amrap_set().map(|_| 0);
        log_session(&mut store, &plan, reps, Utc::now()).unwrap();
        if week == CycleWeek::One {
            // Same week logged again replaces the first entry
            log_session(&mut store, &plan, reps, Utc::now()).unwrap();
        }
        complete_week(&mut store, Utc::now()).unwrap();
    }

    assert_eq!(cycle_one, vec![55.0; 4]);
    assert_eq!(store.sessions().unwrap().len(), 4);
    assert_eq!(store.settings().unwrap().failure_decreases.overhead_press, 1);

    // (60 + 2.5) * 0.9 * 0.9 = 50.625 -> 50
    let cycle_two = plan_for(&store, Lift::OverheadPress).unwrap().training_max;
    assert_eq!(cycle_two, 50.0);

    // A clean cycle adds no further decrease
    for _ in CycleWeek::ALL {
        let plan = plan_for(&store, Lift::OverheadPress).unwrap();
        let reps = plan.amrap_set().map(|set| set.reps);
        log_session(&mut store, &plan, reps, Utc::now()).unwrap();
        complete_week(&mut store, Utc::now()).unwrap();
    }
    assert_eq!(store.settings().unwrap().failure_decreases.overhead_press, 1);
}
