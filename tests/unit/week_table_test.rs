//! Unit tests for the week percentage table.

use fivethreeone::program::week::{
    has_amrap, percentages, reps, weight_for_set, CycleWeek, SET_PERCENTAGES,
};

#[test]
fn test_table_shape() {
    assert_eq!(SET_PERCENTAGES.len(), 4);
    for row in SET_PERCENTAGES {
        assert!(row[0] < row[1] && row[1] < row[2]);
    }
}

#[test]
fn test_deload_row() {
    assert_eq!(percentages(CycleWeek::Four), [40.0, 50.0, 60.0]);
    assert_eq!(reps(CycleWeek::Four), [5, 5, 5]);
    assert!(!has_amrap(CycleWeek::Four));
}

#[test]
fn test_weights_for_tm_200() {
    assert_eq!(weight_for_set(200.0, CycleWeek::One, 0), Some(130.0));
    assert_eq!(weight_for_set(200.0, CycleWeek::One, 1), Some(150.0));
    assert_eq!(weight_for_set(200.0, CycleWeek::One, 2), Some(170.0));
    assert_eq!(weight_for_set(200.0, CycleWeek::Two, 2), Some(180.0));
    assert_eq!(weight_for_set(200.0, CycleWeek::Three, 2), Some(190.0));
    assert_eq!(weight_for_set(200.0, CycleWeek::Four, 2), Some(120.0));
}

#[test]
fn test_weights_rounded_to_plates() {
    // 117.5 * 0.85 = 99.875
    assert_eq!(weight_for_set(117.5, CycleWeek::One, 2), Some(100.0));
    // 117.5 * 0.70 = 82.25
    assert_eq!(weight_for_set(117.5, CycleWeek::Two, 0), Some(82.5));
}

#[test]
fn test_rep_scheme() {
    assert_eq!(reps(CycleWeek::One), [5, 5, 5]);
    assert_eq!(reps(CycleWeek::Two), [3, 3, 3]);
    assert_eq!(reps(CycleWeek::Three), [5, 3, 1]);
}
