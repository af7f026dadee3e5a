//! Per-topic output record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{DateRange, Topic};

/// A scheduled topic together with its reference summary.
///
/// Field order is the JSON key order of the written report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicReport {
    /// Topic label.
    pub topic: Topic,
    /// First study day (`YYYY-MM-DD`).
    pub start_date: NaiveDate,
    /// Last study day (`YYYY-MM-DD`).
    pub end_date: NaiveDate,
    /// Pipe-joined reference links.
    pub summary: String,
}

impl TopicReport {
    /// Builds a report from a scheduled range and its summary.
    pub fn new(range: DateRange, summary: impl Into<String>) -> Self {
        Self {
            topic: range.topic,
            start_date: range.start_date,
            end_date: range.end_date,
            summary: summary.into(),
        }
    }
}
