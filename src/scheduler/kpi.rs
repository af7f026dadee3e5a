//! Study plan metrics.
//!
//! Describes how well a plan fits its deadline without changing it.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Days Remaining | `deadline - today` |
//! | Per-Topic Days | Shared block length |
//! | Span | Days from first to last scheduled day |
//! | Overrun | Days scheduled on or after the deadline |
//! | Slack | Unscheduled days before the deadline |

use chrono::NaiveDate;

use crate::models::StudyPlan;

/// Study plan indicators. All values are whole calendar days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanKpi {
    /// Days between the first scheduled day and the deadline.
    pub days_remaining: i64,
    /// Length of each topic's block.
    pub per_topic_days: i64,
    /// Days covered by the plan.
    pub span_days: i64,
    /// Days the plan runs on or past the deadline.
    pub overrun_days: i64,
    /// Days before the deadline left unscheduled.
    pub slack_days: i64,
}

impl PlanKpi {
    /// Computes metrics for a plan against its deadline.
    ///
    /// An empty plan reports all zeros.
    pub fn calculate(plan: &StudyPlan, deadline: NaiveDate) -> Self {
        let (Some(first), Some(last)) = (plan.first_day(), plan.last_day()) else {
            return Self {
                days_remaining: 0,
                per_topic_days: 0,
                span_days: 0,
                overrun_days: 0,
                slack_days: 0,
            };
        };

        let days_remaining = (deadline - first).num_days();
        // Last full study day is the one before the deadline
        let gap = (deadline - last).num_days() - 1;

        Self {
            days_remaining,
            per_topic_days: plan.ranges()[0].duration_days(),
            span_days: plan.span_days(),
            overrun_days: (-gap).max(0),
            slack_days: gap.max(0),
        }
    }

    /// Whether every block ends before the deadline.
    pub fn fits_deadline(&self) -> bool {
        self.overrun_days == 0
    }
}
