//! Domain core for the Schedsy academic timetable manager.
//!
//! Provides the timetable data model, the conflict/anomaly validation
//! engine, quality scoring, local schedule history, and tabular export.
//! Schedule generation itself is an external service; this crate consumes
//! its flat entry list.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ScheduleEntry`, `Weekday`, reference data
//!   (`Teacher`, `Subject`, `StudentGroup`, `Room`, `Timeslot`), `NameTable`,
//!   `SavedSchedule`
//! - **`validation`**: The rule engine — conflicts, missing data, load
//!   anomalies, informational notices
//! - **`summary`**: Per-severity counts, validity, and the 0-100 score
//! - **`history`**: Capped file-backed store of generated schedules
//! - **`export`**: CSV export with resolved names
//!
//! # Example
//!
//! ```
//! use schedsy_core::models::{NameTable, ScheduleEntry, Weekday};
//! use schedsy_core::summary::summarize;
//! use schedsy_core::validation::validate;
//!
//! let entries = vec![
//!     ScheduleEntry::new("G1", "MATH101", "T1", "R201", Weekday::Mon, 1),
//!     ScheduleEntry::new("G2", "PHYS102", "T1", "R202", Weekday::Mon, 1),
//! ];
//! let names = NameTable::new();
//! let issues = validate(&entries, &names, &names, &names);
//! let summary = summarize(&issues);
//! assert!(!summary.is_valid); // T1 is double-booked
//! assert_eq!(summary.score, 85);
//! ```

pub mod export;
pub mod history;
pub mod models;
pub mod summary;
pub mod validation;
