//! Even-split schedule partitioner.
//!
//! # Algorithm
//!
//! 1. `days_remaining = deadline - today` (whole days).
//! 2. `per_topic_days = max(1, days_remaining / topic_count)` (floor).
//! 3. Walk topics in input order; block `i` spans
//!    `[today + i*per_topic_days, today + (i+1)*per_topic_days - 1]`.
//!
//! The remainder of the floor division is not redistributed: the plan may
//! end before the deadline (large, uneven remainders) or after it (more
//! topics than days). Every block has the same length.
//!
//! # Complexity
//! O(n) where n = topics.

use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::models::{DateRange, StudyPlan, Topic};
use crate::validation::{ensure_future, ValidationError};

/// Input container for planning.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    /// Topics to schedule, in study order.
    pub topics: Vec<Topic>,
    /// Completion deadline (exclusive: the last full study day is the day before).
    pub deadline: NaiveDate,
    /// Planning date. The first block starts here.
    pub today: NaiveDate,
}

impl PlanRequest {
    /// Creates a new plan request.
    pub fn new(deadline: NaiveDate, today: NaiveDate) -> Self {
        Self {
            topics: Vec::new(),
            deadline,
            today,
        }
    }

    /// Adds a topic to the end of the study order.
    pub fn with_topic(mut self, topic: Topic) -> Self {
        self.topics.push(topic);
        self
    }

    /// Replaces the topic list.
    pub fn with_topics(mut self, topics: Vec<Topic>) -> Self {
        self.topics = topics;
        self
    }
}

/// Even-split scheduler.
///
/// Stateless; the planning date is always passed in rather than read from
/// the system clock, so plans are reproducible.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use u_study::models::Topic;
/// use u_study::scheduler::{EvenScheduler, PlanRequest};
///
/// let topics = vec![Topic::parse("Math").unwrap(), Topic::parse("Physics").unwrap()];
/// let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let deadline = NaiveDate::from_ymd_opt(2024, 1, 11).unwrap();
///
/// let request = PlanRequest::new(deadline, today).with_topics(topics);
/// let plan = EvenScheduler::new().plan_request(&request).unwrap();
/// assert_eq!(plan.len(), 2);
/// assert_eq!(plan.last_day(), NaiveDate::from_ymd_opt(2024, 1, 10));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EvenScheduler;

impl EvenScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Partitions `topics` across the days from `today` to `deadline`.
    pub fn plan(
        &self,
        topics: &[Topic],
        deadline: NaiveDate,
        today: NaiveDate,
    ) -> Result<StudyPlan, ValidationError> {
        partition(topics, deadline, today)
    }

    /// Plans from a request.
    pub fn plan_request(&self, request: &PlanRequest) -> Result<StudyPlan, ValidationError> {
        self.plan(&request.topics, request.deadline, request.today)
    }
}

/// Whole days between `today` and `deadline`.
#[inline]
pub fn days_remaining(deadline: NaiveDate, today: NaiveDate) -> i64 {
    (deadline - today).num_days()
}

/// Block length shared by every topic: `max(1, days_remaining / topic_count)`.
pub fn block_length(days_remaining: i64, topic_count: usize) -> u64 {
    let days = u64::try_from(days_remaining).unwrap_or(0);
    let count = u64::try_from(topic_count).unwrap_or(u64::MAX).max(1);
    (days / count).max(1)
}

/// Partitions topics into contiguous, equal-length blocks starting today.
///
/// # Errors
/// - [`EmptyTopics`](crate::validation::ValidationErrorKind::EmptyTopics) if `topics` is empty.
/// - [`PastDeadline`](crate::validation::ValidationErrorKind::PastDeadline) if `deadline <= today`.
/// - [`OutOfRange`](crate::validation::ValidationErrorKind::OutOfRange) if a block
///   would end past the last representable date.
pub fn partition(
    topics: &[Topic],
    deadline: NaiveDate,
    today: NaiveDate,
) -> Result<StudyPlan, ValidationError> {
    if topics.is_empty() {
        return Err(ValidationError::empty_topics());
    }
    ensure_future(deadline, today)?;

    let remaining = days_remaining(deadline, today);
    let per_topic_days = block_length(remaining, topics.len());
    debug!(
        days_remaining = remaining,
        topics = topics.len(),
        per_topic_days,
        "partitioning study window"
    );

    let mut plan = StudyPlan::new();
    let mut start = today;

    for (index, topic) in topics.iter().enumerate() {
        if index > 0 {
            start = add_days(start, per_topic_days)?;
        }
        let end = add_days(start, per_topic_days - 1)?;
        debug!(topic = %topic, %start, %end, "scheduled block");
        plan.push(DateRange::new(topic.clone(), start, end));
    }

    Ok(plan)
}

fn add_days(date: NaiveDate, days: u64) -> Result<NaiveDate, ValidationError> {
    date.checked_add_days(Days::new(days))
        .ok_or_else(|| ValidationError::out_of_range(date, days))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn topics(labels: &[&str]) -> Vec<Topic> {
        labels.iter().map(|l| Topic::parse(l).unwrap()).collect()
    }

    fn spans(plan: &StudyPlan) -> Vec<(&str, NaiveDate, NaiveDate)> {
        plan.iter()
            .map(|r| (r.topic.as_str(), r.start_date, r.end_date))
            .collect()
    }

    #[test]
    fn test_two_topics_even_split() {
        let plan = partition(&topics(&["Math", "Physics"]), date(2024, 1, 11), date(2024, 1, 1))
            .unwrap();
        assert_eq!(
            spans(&plan),
            vec![
                ("Math", date(2024, 1, 1), date(2024, 1, 5)),
                ("Physics", date(2024, 1, 6), date(2024, 1, 10)),
            ]
        );
    }

    #[test]
    fn test_more_topics_than_days() {
        // 2 days / 3 topics floors to 0, raised to 1
        let plan =
            partition(&topics(&["A", "B", "C"]), date(2024, 1, 3), date(2024, 1, 1)).unwrap();
        assert_eq!(
            spans(&plan),
            vec![
                ("A", date(2024, 1, 1), date(2024, 1, 1)),
                ("B", date(2024, 1, 2), date(2024, 1, 2)),
                ("C", date(2024, 1, 3), date(2024, 1, 3)),
            ]
        );
    }

    #[test]
    fn test_single_topic_fills_window() {
        let plan = partition(&topics(&["Solo"]), date(2024, 1, 31), date(2024, 1, 1)).unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.ranges()[0].start_date, date(2024, 1, 1));
        assert_eq!(plan.ranges()[0].end_date, date(2024, 1, 30));
    }

    #[test]
    fn test_single_topic_tomorrow() {
        let plan = partition(&topics(&["Solo"]), date(2024, 1, 2), date(2024, 1, 1)).unwrap();
        assert_eq!(plan.ranges()[0].duration_days(), 1);
        assert_eq!(plan.ranges()[0].end_date, date(2024, 1, 1));
    }

    #[test]
    fn test_remainder_not_redistributed() {
        // 10 days / 3 topics = 3 days each; day 10 is left unscheduled
        let plan =
            partition(&topics(&["A", "B", "C"]), date(2024, 1, 11), date(2024, 1, 1)).unwrap();
        assert!(plan.iter().all(|r| r.duration_days() == 3));
        assert_eq!(plan.last_day(), Some(date(2024, 1, 9)));
    }

    #[test]
    fn test_contiguous_and_uniform() {
        let today = date(2024, 2, 20);
        let labels = ["a", "b", "c", "d", "e", "f", "g"];
        for offset in 1..60u64 {
            for n in 1..=labels.len() {
                let deadline = today.checked_add_days(Days::new(offset)).unwrap();
                let plan = partition(&topics(&labels[..n]), deadline, today).unwrap();
                let expected = block_length(offset as i64, n) as i64;

                assert_eq!(plan.first_day(), Some(today));
                assert!(plan.is_contiguous());
                assert!(plan.iter().all(|r| r.duration_days() == expected));
                assert!(plan.iter().all(|r| r.start_date <= r.end_date));
            }
        }
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let input = topics(&["B", "A", "B", "C"]);
        let plan = partition(&input, date(2024, 3, 1), date(2024, 1, 1)).unwrap();
        let order: Vec<&Topic> = plan.iter().map(|r| &r.topic).collect();
        assert_eq!(order, input.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_past_deadline_rejected() {
        let today = date(2024, 1, 1);
        for deadline in [today, date(2023, 12, 31), date(2000, 1, 1)] {
            let err = partition(&topics(&["A"]), deadline, today).unwrap_err();
            assert_eq!(err.kind, ValidationErrorKind::PastDeadline);
        }
    }

    #[test]
    fn test_empty_topics_rejected() {
        let err = partition(&[], date(2024, 1, 11), date(2024, 1, 1)).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::EmptyTopics);
    }

    #[test]
    fn test_out_of_range() {
        let today = NaiveDate::MAX.pred_opt().unwrap();
        let err = partition(&topics(&["A", "B", "C"]), NaiveDate::MAX, today).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::OutOfRange);
    }

    #[test]
    fn test_block_length() {
        assert_eq!(block_length(10, 2), 5);
        assert_eq!(block_length(10, 3), 3);
        assert_eq!(block_length(2, 3), 1);
        assert_eq!(block_length(1, 1), 1);
        assert_eq!(block_length(0, 4), 1);
    }

    #[test]
    fn test_plan_request() {
        let request = PlanRequest::new(date(2024, 1, 11), date(2024, 1, 1))
            .with_topic(Topic::parse("Math").unwrap())
            .with_topic(Topic::parse("Physics").unwrap());
        let plan = EvenScheduler::new().plan_request(&request).unwrap();
        assert_eq!(plan.first_day(), Some(date(2024, 1, 1)));
        assert_eq!(plan.span_days(), 10);
        assert_eq!(plan.range_for("Physics").unwrap().start_date, date(2024, 1, 6));
    }

    #[test]
    fn test_plan_request_without_topics() {
        let request = PlanRequest::new(date(2024, 1, 11), date(2024, 1, 1));
        let err = EvenScheduler::new().plan_request(&request).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::EmptyTopics);
    }
}
