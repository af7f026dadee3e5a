//! Study planning domain models.
//!
//! Provides the data types produced and consumed by a planning run.
//! All entities are created once per run and never mutated afterward.
//!
//! # Domain Mappings
//!
//! | u-study | u-schedule |
//! |---------|------------|
//! | Topic | Task |
//! | DateRange | Assignment |
//! | StudyPlan | Schedule |
//! | TopicReport | (output record) |

mod plan;
mod report;
mod topic;

pub use plan::{DateRange, StudyPlan};
pub use report::TopicReport;
pub use topic::Topic;
