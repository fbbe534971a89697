//! Timetable domain models.
//!
//! Core data types for the academic timetable: the atomic schedule entry,
//! reference-data records (teachers, subjects, groups, rooms, timeslots),
//! name-resolution tables, and persisted schedule snapshots.
//!
//! All types are serde-compatible with the JSON shapes used by the
//! generation service and the history store.

mod catalog;
mod entry;
mod saved;

pub use catalog::{NameTable, Room, StudentGroup, Subject, Teacher, Timeslot};
pub use entry::{period_time, ScheduleEntry, ScheduleResponse, Weekday, BREAK_PERIOD};
pub use saved::SavedSchedule;
