//! Unit tests for session set generation.

use fivethreeone::program::session::{
    generate_session_sets, AssistanceConfig, SetKind, WarmupConfig, WarmupSet,
};
use fivethreeone::program::week::CycleWeek;

fn bbb(percentage: f64) -> AssistanceConfig {
    AssistanceConfig {
        enabled: true,
        percentage,
    }
}

#[test]
fn test_full_session_order() {
    let sets = generate_session_sets(100.0, CycleWeek::One, &WarmupConfig::default(), &bbb(50.0));

    let kinds: Vec<SetKind> = sets.iter().map(|s| s.kind).collect();
    let mut expected = vec![SetKind::Warmup; 3];
    expected.extend([SetKind::Working; 3]);
    expected.extend([SetKind::Assistance; 5]);
    assert_eq!(kinds, expected);
}

#[test]
fn test_single_amrap_in_training_weeks() {
    for week in [CycleWeek::One, CycleWeek::Two, CycleWeek::Three] {
        let sets = generate_session_sets(150.0, week, &WarmupConfig::default(), &bbb(60.0));
        let amraps: Vec<_> = sets.iter().filter(|s| s.is_amrap).collect();
        assert_eq!(amraps.len(), 1);
        assert_eq!(amraps[0].kind, SetKind::Working);
    }
}

#[test]
fn test_deload_ignores_warmup_and_bbb() {
    let sets = generate_session_sets(150.0, CycleWeek::Four, &WarmupConfig::default(), &bbb(60.0));

    assert_eq!(sets.len(), 3);
    assert!(sets.iter().all(|s| s.kind == SetKind::Working && !s.is_amrap));
}

#[test]
fn test_bbb_example() {
    let warmup = WarmupConfig {
        enabled: false,
        sets: Vec::new(),
    };
    let sets = generate_session_sets(100.0, CycleWeek::One, &warmup, &bbb(50.0));
    let assistance: Vec<_> = sets.iter().filter(|s| s.kind == SetKind::Assistance).collect();

    assert_eq!(assistance.len(), 5);
    assert!(assistance.iter().all(|s| s.weight == 50.0 && s.reps == 10));
}

#[test]
fn test_disabled_bbb() {
    let disabled = AssistanceConfig {
        enabled: false,
        percentage: 50.0,
    };
    let sets = generate_session_sets(100.0, CycleWeek::Two, &WarmupConfig::default(), &disabled);
    assert!(sets.iter().all(|s| s.kind != SetKind::Assistance));
}

#[test]
fn test_custom_warmups_in_order() {
    let warmup = WarmupConfig {
        enabled: true,
        sets: vec![
            WarmupSet {
                percentage: 30.0,
                reps: 8,
            },
            WarmupSet {
                percentage: 45.0,
                reps: 5,
            },
        ],
    };
    let sets =
        generate_session_sets(200.0, CycleWeek::Three, &warmup, &AssistanceConfig::default());

    assert_eq!(sets[0].weight, 60.0);
    assert_eq!(sets[0].reps, 8);
    assert_eq!(sets[1].weight, 90.0);
    assert_eq!(sets[2].kind, SetKind::Working);
}
