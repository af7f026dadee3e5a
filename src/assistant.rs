//! End-to-end planning pipeline without I/O.
//!
//! Validates raw input, partitions the study window, and builds one
//! report per topic. Console prompting, printing, and file output live
//! in the binary; this module only returns values or errors.
//!
//! # Order of checks
//! 1. Topic list (empty after trimming → `EmptyTopics`)
//! 2. Deadline format (`InvalidDateFormat`)
//! 3. Deadline in the future (`PastDeadline`)
//!
//! Nothing is produced unless all three pass.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::Result;
use crate::models::{StudyPlan, Topic, TopicReport};
use crate::research::research_links;
use crate::scheduler::{EvenScheduler, PlanKpi};
use crate::summary::summarize;
use crate::validation::{parse_deadline, parse_topics};

/// Result of a successful planning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyOutcome {
    /// Validated deadline.
    pub deadline: NaiveDate,
    /// One report per topic, in input order.
    pub reports: Vec<TopicReport>,
    /// Fit of the plan against the deadline.
    pub kpi: PlanKpi,
}

/// Study assistant pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct StudyAssistant {
    scheduler: EvenScheduler,
}

impl StudyAssistant {
    /// Creates a new assistant.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the pipeline on raw console input.
    ///
    /// `today` is the planning date; pass the system date in production
    /// and a fixed date in tests.
    pub fn run(
        &self,
        topics_input: &str,
        deadline_input: &str,
        today: NaiveDate,
    ) -> Result<StudyOutcome> {
        let topics = parse_topics(topics_input)?;
        let deadline = parse_deadline(deadline_input)?;
        self.run_parsed(&topics, deadline, today)
    }

    /// Runs the pipeline on already-parsed input.
    pub fn run_parsed(
        &self,
        topics: &[Topic],
        deadline: NaiveDate,
        today: NaiveDate,
    ) -> Result<StudyOutcome> {
        let plan = self.scheduler.plan(topics, deadline, today)?;
        let kpi = PlanKpi::calculate(&plan, deadline);
        debug!(?kpi, "plan computed");

        Ok(StudyOutcome {
            deadline,
            reports: build_reports(plan),
            kpi,
        })
    }
}

/// Attaches a link summary to every block of a plan.
pub fn build_reports(plan: StudyPlan) -> Vec<TopicReport> {
    plan.into_iter()
        .map(|range| {
            let summary = summarize(&research_links(&range.topic));
            TopicReport::new(range, summary)
        })
        .collect()
}
