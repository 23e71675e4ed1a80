//! Week percentage table for the 5/3/1 cycle.
//!
//! Each week prescribes three working sets as percentages of the training
//! max. Weeks 1-3 finish with an AMRAP set; week 4 is the deload.

use serde::{Deserialize, Serialize};

use super::error::ProgramError;
use super::rounding::round_weight;

/// Week within a four-week cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CycleWeek {
    /// 65/75/85, 5/5/5+
    #[default]
    One,
    /// 70/80/90, 3/3/3+
    Two,
    /// 75/85/95, 5/3/1+
    Three,
    /// Deload: 40/50/60, 5/5/5
    Four,
}

impl CycleWeek {
    pub const ALL: [CycleWeek; 4] = [
        CycleWeek::One,
        CycleWeek::Two,
        CycleWeek::Three,
        CycleWeek::Four,
    ];

    /// Week number (1-4).
    pub fn number(&self) -> u8 {
        match self {
            CycleWeek::One => 1,
            CycleWeek::Two => 2,
            CycleWeek::Three => 3,
            CycleWeek::Four => 4,
        }
    }

    pub fn is_deload(&self) -> bool {
        matches!(self, CycleWeek::Four)
    }

    /// The following week, and whether a new cycle starts with it.
    pub fn next(&self) -> (CycleWeek, bool) {
        match self {
            CycleWeek::One => (CycleWeek::Two, false),
            CycleWeek::Two => (CycleWeek::Three, false),
            CycleWeek::Three => (CycleWeek::Four, false),
            CycleWeek::Four => (CycleWeek::One, true),
        }
    }

    fn index(&self) -> usize {
        self.number() as usize - 1
    }
}

impl TryFrom<u8> for CycleWeek {
    type Error = ProgramError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(CycleWeek::One),
            2 => Ok(CycleWeek::Two),
            3 => Ok(CycleWeek::Three),
            4 => Ok(CycleWeek::Four),
            other => Err(ProgramError::InvalidWeek(other)),
        }
    }
}

impl From<CycleWeek> for u8 {
    fn from(week: CycleWeek) -> Self {
        week.number()
    }
}

impl std::fmt::Display for CycleWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CycleWeek::Four => write!(f, "Week 4 (deload)"),
            other => write!(f, "Week {}", other.number()),
        }
    }
}

/// Working-set percentages of training max, one row per week.
pub const SET_PERCENTAGES: [[f64; 3]; 4] = [
    [65.0, 75.0, 85.0],
    [70.0, 80.0, 90.0],
    [75.0, 85.0, 95.0],
    [40.0, 50.0, 60.0],
];

/// Prescribed reps for the working sets. The last set of weeks 1-3 is a
/// minimum for the AMRAP.
pub const WORKING_REPS: [[u32; 3]; 4] = [[5, 5, 5], [3, 3, 3], [5, 3, 1], [5, 5, 5]];

/// Number of working sets per session.
pub const WORKING_SETS: usize = 3;

/// Percentages for a week.
pub fn percentages(week: CycleWeek) -> [f64; 3] {
    SET_PERCENTAGES[week.index()]
}

/// Prescribed reps for a week.
pub fn reps(week: CycleWeek) -> [u32; 3] {
    WORKING_REPS[week.index()]
}

/// Whether the week's final working set is AMRAP.
pub fn has_amrap(week: CycleWeek) -> bool {
    !week.is_deload()
}

/// Minimum reps the AMRAP set must reach, if the week has one.
pub fn amrap_minimum_reps(week: CycleWeek) -> Option<u32> {
    has_amrap(week).then(|| reps(week)[WORKING_SETS - 1])
}

/// Rounded weight for a working set, or `None` for a set index past 2.
pub fn weight_for_set(training_max: f64, week: CycleWeek, set_index: usize) -> Option<f64> {
    percentages(week)
        .get(set_index)
        .map(|percent| round_weight(training_max * percent / 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_values() {
        assert_eq!(percentages(CycleWeek::One), [65.0, 75.0, 85.0]);
        assert_eq!(percentages(CycleWeek::Two), [70.0, 80.0, 90.0]);
        assert_eq!(percentages(CycleWeek::Three), [75.0, 85.0, 95.0]);
        assert_eq!(percentages(CycleWeek::Four), [40.0, 50.0, 60.0]);
    }

    #[test]
    fn test_last_set_is_row_max() {
        for week in CycleWeek::ALL {
            let row = percentages(week);
            let max = row.iter().cloned().fold(f64::MIN, f64::max);
            assert_eq!(row[2], max);
        }
    }

    #[test]
    fn test_deload_has_no_amrap() {
        assert!(!has_amrap(CycleWeek::Four));
        assert_eq!(amrap_minimum_reps(CycleWeek::Four), None);
        assert_eq!(amrap_minimum_reps(CycleWeek::One), Some(5));
        assert_eq!(amrap_minimum_reps(CycleWeek::Two), Some(3));
        assert_eq!(amrap_minimum_reps(CycleWeek::Three), Some(1));
    }

    #[test]
    fn test_weight_for_set() {
        assert_eq!(weight_for_set(200.0, CycleWeek::One, 2), Some(170.0));
        assert_eq!(weight_for_set(100.0, CycleWeek::Three, 2), Some(95.0));
        // 92.5 * 0.65 = 60.125
        assert_eq!(weight_for_set(92.5, CycleWeek::One, 0), Some(60.0));
        assert_eq!(weight_for_set(200.0, CycleWeek::One, 3), None);
    }

    #[test]
    fn test_week_conversion() {
        assert_eq!(CycleWeek::try_from(4).unwrap(), CycleWeek::Four);
        assert_eq!(CycleWeek::try_from(0), Err(ProgramError::InvalidWeek(0)));
        assert_eq!(CycleWeek::try_from(5), Err(ProgramError::InvalidWeek(5)));
        assert_eq!(u8::from(CycleWeek::Three), 3);
    }

    #[test]
    fn test_week_next_rolls_over() {
        assert_eq!(CycleWeek::One.next(), (CycleWeek::Two, false));
        assert_eq!(CycleWeek::Four.next(), (CycleWeek::One, true));
    }

    #[test]
    fn test_week_serde_as_number() {
        assert_eq!(serde_json::to_string(&CycleWeek::Two).unwrap(), "2");
        let week: CycleWeek = serde_json::from_str("4").unwrap();
        assert_eq!(week, CycleWeek::Four);
        assert!(serde_json::from_str::<CycleWeek>("7").is_err());
    }
}
