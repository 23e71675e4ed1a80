//! Program calculation error types.

use thiserror::Error;

/// Errors raised when calculator inputs are rejected.
#[derive(Debug, Error, PartialEq)]
pub enum ProgramError {
    /// Week number outside 1-4.
    #[error("Invalid week: {0} (expected 1-4)")]
    InvalidWeek(u8),

    /// Cycle numbers start at 1.
    #[error("Invalid cycle: {0} (cycles start at 1)")]
    InvalidCycle(u32),

    /// Training max percentage outside the intake range.
    #[error("Training max percentage {0} is outside 80-100")]
    PercentageOutOfRange(f64),

    /// Invalid numeric input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for program calculations.
pub type ProgramResult<T> = Result<T, ProgramError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_week_error() {
        let err = ProgramError::InvalidWeek(5);
        assert!(err.to_string().contains("5"));
    }

    #[test]
    fn test_invalid_input_error() {
        let err = ProgramError::InvalidInput("one rep max must be positive".to_string());
        assert!(err.to_string().contains("one rep max must be positive"));
    }
}
