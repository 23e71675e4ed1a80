//! One-rep max estimation from rep sets.

/// Estimated 1RM using Epley: `w × (1 + r/30)`.
///
/// A single rep returns the weight itself. Zero reps or a non-positive
/// weight yields 0.
pub fn epley_one_rep_max(weight: f64, reps: u32) -> f64 {
    if weight <= 0.0 || reps == 0 {
        return 0.0;
    }
    if reps == 1 {
        return weight;
    }

    weight * (1.0 + reps as f64 / 30.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_rep_is_weight() {
        assert_eq!(epley_one_rep_max(140.0, 1), 140.0);
    }

    #[test]
    fn test_epley() {
        // 100 * (1 + 10/30) = 133.33
        assert!((epley_one_rep_max(100.0, 10) - 133.333).abs() < 0.01);
        assert!((epley_one_rep_max(90.0, 5) - 105.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(epley_one_rep_max(100.0, 0), 0.0);
        assert_eq!(epley_one_rep_max(0.0, 5), 0.0);
        assert_eq!(epley_one_rep_max(-20.0, 5), 0.0);
    }

    #[test]
    fn test_high_reps_not_capped() {
        // 100 * (1 + 20/30) = 166.67
        assert!((epley_one_rep_max(100.0, 20) - 166.667).abs() < 0.01);
        assert!(epley_one_rep_max(100.0, 40) > epley_one_rep_max(100.0, 15));
    }
}
