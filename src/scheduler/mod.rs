//! Study schedule partitioning and plan metrics.
//!
//! # Algorithm
//!
//! `EvenScheduler` splits the days before a deadline into equal,
//! back-to-back blocks, one per topic, in input order. Block length is
//! floor-divided and never below one day; the remainder is left as-is.
//!
//! # KPI
//!
//! `PlanKpi` reports the span of a plan and how far it undershoots or
//! overruns the deadline.

mod kpi;
mod partition;

pub use kpi::PlanKpi;
pub use partition::{block_length, days_remaining, partition, EvenScheduler, PlanRequest};
