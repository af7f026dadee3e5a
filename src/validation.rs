//! Input validation for study planning.
//!
//! Turns raw console input into validated domain values before any
//! scheduling or output happens. Detects:
//! - Empty topic lists (after trimming blank entries)
//! - Malformed deadline dates
//! - Deadlines that are not strictly in the future
//!
//! Validation always runs to completion before the first line of progress
//! is printed, so a rejected run never leaves a partial report behind.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::models::Topic;

/// Calendar-date pattern accepted for deadlines.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// Four-digit year; month and day may drop the leading zero. No sign, no spaces.
static DATE_SHAPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}$").expect("valid date shape regex")
});

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Deadline does not match `YYYY-MM-DD` or is not a real date.
    InvalidDateFormat,
    /// Deadline is today or earlier.
    PastDeadline,
    /// No topic survived trimming.
    EmptyTopics,
    /// Date arithmetic left the representable calendar.
    OutOfRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Deadline string could not be parsed.
    pub fn invalid_date_format() -> Self {
        Self::new(
            ValidationErrorKind::InvalidDateFormat,
            "Invalid date format. Use YYYY-MM-DD.",
        )
    }

    /// Deadline is not after the planning date.
    pub fn past_deadline() -> Self {
        Self::new(
            ValidationErrorKind::PastDeadline,
            "Deadline must be a future date.",
        )
    }

    /// Topic list is empty.
    pub fn empty_topics() -> Self {
        Self::new(ValidationErrorKind::EmptyTopics, "No valid topics entered.")
    }

    /// A computed date fell outside the supported calendar.
    pub fn out_of_range(date: NaiveDate, days: u64) -> Self {
        Self::new(
            ValidationErrorKind::OutOfRange,
            format!("Date {date} plus {days} day(s) is out of the supported range."),
        )
    }
}

/// Splits a comma-separated topic list into trimmed topics.
///
/// Blank and whitespace-only entries are dropped; order and duplicates
/// are preserved.
///
/// # Returns
/// `Err` with [`ValidationErrorKind::EmptyTopics`] if nothing remains.
pub fn parse_topics(input: &str) -> Result<Vec<Topic>, ValidationError> {
    let topics: Vec<Topic> = input.split(',').filter_map(Topic::parse).collect();
    if topics.is_empty() {
        Err(ValidationError::empty_topics())
    } else {
        Ok(topics)
    }
}

/// Parses a `YYYY-MM-DD` deadline.
///
/// The input must be exactly four year digits, a month, and a day
/// separated by `-` (`2024-1-5` is accepted). Signs, short years, and
/// any whitespace are rejected, as are impossible dates like `2025-13-01`
/// or `2025-02-30`.
pub fn parse_deadline(input: &str) -> Result<NaiveDate, ValidationError> {
    if !DATE_SHAPE_RE.is_match(input) {
        return Err(ValidationError::invalid_date_format());
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| ValidationError::invalid_date_format())
}

/// Ensures the deadline is strictly after `today`.
pub fn ensure_future(deadline: NaiveDate, today: NaiveDate) -> Result<(), ValidationError> {
    if deadline <= today {
        Err(ValidationError::past_deadline())
    } else {
        Ok(())
    }
}
