//! Study planner for the U-Engine ecosystem.
//!
//! Splits a list of study topics evenly across the days left before a
//! deadline, attaches a fixed set of reference links to each topic, and
//! writes the result as a JSON report.
//!
//! # Modules
//!
//! - **`models`**: Domain types (`Topic`, `DateRange`, `StudyPlan`, `TopicReport`)
//! - **`validation`**: Topic-list and deadline parsing, future-date check
//! - **`scheduler`**: Even-split partitioner and plan metrics
//! - **`research`**: Templated reference links per topic
//! - **`summary`**: Link joining
//! - **`report`**: JSON report writer
//! - **`assistant`**: Validation → partition → reports, with no I/O
//! - **`config`**: Layered configuration (defaults, TOML, environment)
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use u_study::assistant::StudyAssistant;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let outcome = StudyAssistant::new()
//!     .run("Math, Physics", "2024-01-11", today)
//!     .unwrap();
//!
//! assert_eq!(outcome.reports.len(), 2);
//! assert_eq!(outcome.reports[1].start_date, NaiveDate::from_ymd_opt(2024, 1, 6).unwrap());
//! ```

pub mod assistant;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod research;
pub mod scheduler;
pub mod summary;
pub mod validation;

pub use error::{Result, StudyError};
