//! Study plan (solution) model.
//!
//! A plan is an ordered sequence of date ranges, one per input topic,
//! in input order. Ranges are inclusive on both ends and calendar-day
//! granular.
//!
//! # Invariants
//! - Every range satisfies `start_date <= end_date`.
//! - Adjacent ranges are contiguous: `plan[i].end_date + 1 == plan[i+1].start_date`.
//! - The first range starts on the planning date ("today").

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::Topic;

/// A block of calendar days assigned to one topic.
///
/// Closed interval: includes both `start_date` and `end_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Topic studied in this block.
    pub topic: Topic,
    /// First day of the block (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the block (inclusive).
    pub end_date: NaiveDate,
}

impl DateRange {
    /// Creates a new date range.
    pub fn new(topic: Topic, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        debug_assert!(start_date <= end_date, "range must not be inverted");
        Self {
            topic,
            start_date,
            end_date,
        }
    }

    /// Number of calendar days in the block, counting both ends.
    #[inline]
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Whether a date falls within this block.
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Whether two blocks share at least one day.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_date <= other.end_date && other.start_date <= self.end_date
    }

    /// Whether `next` begins on the day immediately after this block ends.
    pub fn is_followed_by(&self, next: &Self) -> bool {
        self.end_date
            .checked_add_days(Days::new(1))
            .is_some_and(|day| day == next.start_date)
    }
}

/// An ordered study plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudyPlan {
    ranges: Vec<DateRange>,
}

impl StudyPlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a range.
    pub fn push(&mut self, range: DateRange) {
        self.ranges.push(range);
    }

    /// All ranges, in topic order.
    pub fn ranges(&self) -> &[DateRange] {
        &self.ranges
    }

    /// Number of ranges.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Whether the plan holds no ranges.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Iterates ranges in topic order.
    pub fn iter(&self) -> std::slice::Iter<'_, DateRange> {
        self.ranges.iter()
    }

    /// First scheduled day.
    pub fn first_day(&self) -> Option<NaiveDate> {
        self.ranges.first().map(|r| r.start_date)
    }

    /// Last scheduled day.
    pub fn last_day(&self) -> Option<NaiveDate> {
        self.ranges.last().map(|r| r.end_date)
    }

    /// Total days covered from the first to the last scheduled day.
    pub fn span_days(&self) -> i64 {
        match (self.first_day(), self.last_day()) {
            (Some(first), Some(last)) => (last - first).num_days() + 1,
            _ => 0,
        }
    }

    /// Finds the first range for a topic label.
    pub fn range_for(&self, topic: &str) -> Option<&DateRange> {
        self.ranges.iter().find(|r| r.topic.as_str() == topic)
    }

    /// Whether every adjacent pair of ranges is back-to-back with no gap or overlap.
    pub fn is_contiguous(&self) -> bool {
        self.ranges.windows(2).all(|w| w[0].is_followed_by(&w[1]))
    }
}

impl IntoIterator for StudyPlan {
    type Item = DateRange;
    type IntoIter = std::vec::IntoIter<DateRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.into_iter()
    }
}

impl<'a> IntoIterator for &'a StudyPlan {
    type Item = &'a DateRange;
    type IntoIter = std::slice::Iter<'a, DateRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}
