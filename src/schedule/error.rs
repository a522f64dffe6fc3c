//! Schedule error types

use std::fmt;
use thiserror::Error;

/// Which timestamp field an operation was parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Start,
    End,
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start time",
            Self::End => "end time",
        })
    }
}

/// Errors surfaced by schedule operations.
///
/// None of these are fatal: every operation leaves the task collection in a
/// valid state, failed or not.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// A date string did not match the fixed `YYYY-MM-DD HH:MM` format
    #[error("invalid {field} '{value}': expected format YYYY-MM-DD HH:MM")]
    InvalidTimestamp { field: TimeField, value: String },

    /// No task with the given description exists
    #[error("task not found: {0}")]
    TaskNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_field_display() {
        assert_eq!(TimeField::Start.to_string(), "start time");
        assert_eq!(TimeField::End.to_string(), "end time");
    }

    #[test]
    fn test_error_messages() {
        let err = ScheduleError::InvalidTimestamp {
            field: TimeField::End,
            value: "tomorrow".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid end time 'tomorrow': expected format YYYY-MM-DD HH:MM"
        );

        let err = ScheduleError::TaskNotFound("Spacewalk".to_string());
        assert_eq!(err.to_string(), "task not found: Spacewalk");
    }
}
