//! Unit tests for training max resolution.

use fivethreeone::program::rounding::round_weight;
use fivethreeone::program::training_max::{decrease_factor, resolve_training_max};

#[test]
fn test_cycle_two_example() {
    // adjusted = 102.5, raw = 92.25, rounded = 92.5
    assert_eq!(resolve_training_max(100.0, 2.5, 90.0, 2, 0), 92.5);
}

#[test]
fn test_cycle_two_with_failure() {
    // 92.25 * 0.9 = 83.025 -> 82.5
    assert_eq!(resolve_training_max(100.0, 2.5, 90.0, 2, 1), 82.5);
}

#[test]
fn test_progression_per_cycle() {
    // Squat 1RM 140, +5 per cycle, 90%
    assert_eq!(resolve_training_max(140.0, 5.0, 90.0, 1, 0), 125.0); // 126.0
    assert_eq!(resolve_training_max(140.0, 5.0, 90.0, 2, 0), 130.0); // 130.5
    assert_eq!(resolve_training_max(140.0, 5.0, 90.0, 3, 0), 135.0); // 135.0
    assert_eq!(resolve_training_max(140.0, 5.0, 90.0, 4, 0), 140.0); // 139.5
}

#[test]
fn test_failures_compound() {
    let tm = resolve_training_max(200.0, 5.0, 100.0, 1, 2);
    // 200 * 0.81 = 162
    assert_eq!(tm, 162.5);
    assert!((decrease_factor(3) - 0.729).abs() < 1e-12);
}

#[test]
fn test_results_are_rounded() {
    for orm in [57.3, 88.8, 123.4, 201.7] {
        for failures in 0..3 {
            let tm = resolve_training_max(orm, 2.5, 85.0, 2, failures);
            assert_eq!(round_weight(tm), tm);
        }
    }
}

#[test]
fn test_non_positive_max_passes_through() {
    assert_eq!(resolve_training_max(0.0, 0.0, 90.0, 1, 0), 0.0);
    assert!(resolve_training_max(-100.0, 0.0, 90.0, 1, 0) < 0.0);
    assert!(resolve_training_max(f64::NAN, 2.5, 90.0, 1, 0).is_nan());
}
