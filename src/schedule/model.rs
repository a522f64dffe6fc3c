//! Task data model

use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

use super::error::{ScheduleError, TimeField};

/// Fixed timestamp format, minute resolution. Used uniformly for input
/// parsing and listing output so times round-trip unchanged.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parse a timestamp in the fixed `YYYY-MM-DD HH:MM` format.
pub fn parse_time(field: TimeField, value: &str) -> Result<NaiveDateTime, ScheduleError> {
    NaiveDateTime::parse_from_str(value, TIME_FORMAT).map_err(|_| {
        ScheduleError::InvalidTimestamp {
            field,
            value: value.to_string(),
        }
    })
}

/// A single schedulable activity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    /// Free-text description; also the lookup key for remove/update
    pub description: String,

    /// Start of the activity
    pub start_time: NaiveDateTime,

    /// End of the activity; may precede the start (never validated against it)
    pub end_time: NaiveDateTime,

    /// Free-form priority label, conventionally High/Medium/Low
    pub priority: String,
}

impl Task {
    /// Create a new task. All four fields are required.
    pub fn new(
        description: impl Into<String>,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        priority: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            start_time,
            end_time,
            priority: priority.into(),
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Description: {}\nStart Time: {}\nEnd Time: {}\nPriority: {}",
            self.description,
            self.start_time.format(TIME_FORMAT),
            self.end_time.format(TIME_FORMAT),
            self.priority
        )
    }
}
