//! Reference-data records and name resolution.
//!
//! Mirrors the JSON shapes served by the timetable backend for teachers,
//! subjects, student groups, rooms, and timeslots. These are read-only
//! display inputs; the validation engine only consumes them through
//! [`NameTable`] lookups.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Weekday;

/// A teaching staff member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier.
    pub teacher_id: String,
    /// Display name.
    pub teacher_name: String,
    /// Organizational role, if recorded.
    pub role: Option<String>,
}

/// A course subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject identifier.
    pub subject_id: String,
    /// Display name.
    pub subject_name: String,
    /// Theory hours per week.
    pub theory: i32,
    /// Practice hours per week.
    pub practice: i32,
    /// Credit units.
    pub credit: i32,
}

/// A student group (class/section).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentGroup {
    /// Unique group identifier.
    pub group_id: String,
    /// Display name.
    pub group_name: String,
    /// Number of students, if recorded.
    pub student_count: Option<i32>,
    /// Advising teacher, if recorded.
    pub advisor: Option<String>,
}

/// A physical room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub room_id: String,
    /// Display name, if recorded.
    pub room_name: Option<String>,
    /// Room classification (lab, lecture, ...), if recorded.
    pub room_type: Option<String>,
}

/// A timeslot definition row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timeslot {
    /// Unique timeslot identifier.
    pub timeslot_id: i64,
    /// Day, if defined.
    pub day: Option<Weekday>,
    /// Period number, if defined.
    pub period: Option<u32>,
    /// Start clock time ("08:00"), if defined.
    pub start: Option<String>,
    /// End clock time ("09:00"), if defined.
    pub end: Option<String>,
}

/// Identifier → display-name mapping with raw-id fallback.
///
/// Lookups never fail: an identifier absent from the table resolves to
/// itself, so messages always have something printable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NameTable(HashMap<String, String>);

impl NameTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a mapping.
    pub fn insert(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.0.insert(id.into(), name.into());
    }

    /// Resolves an identifier to its display name, falling back to the
    /// identifier itself when no name is known.
    pub fn resolve<'a>(&'a self, id: &'a str) -> &'a str {
        match self.0.get(id) {
            Some(name) => name.as_str(),
            None => id,
        }
    }

    /// Number of mappings.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table has no mappings.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Builds a table from teacher records.
    pub fn from_teachers<'a>(teachers: impl IntoIterator<Item = &'a Teacher>) -> Self {
        teachers
            .into_iter()
            .map(|t| (t.teacher_id.clone(), t.teacher_name.clone()))
            .collect()
    }

    /// Builds a table from subject records.
    pub fn from_subjects<'a>(subjects: impl IntoIterator<Item = &'a Subject>) -> Self {
        subjects
            .into_iter()
            .map(|s| (s.subject_id.clone(), s.subject_name.clone()))
            .collect()
    }

    /// Builds a table from group records.
    pub fn from_groups<'a>(groups: impl IntoIterator<Item = &'a StudentGroup>) -> Self {
        groups
            .into_iter()
            .map(|g| (g.group_id.clone(), g.group_name.clone()))
            .collect()
    }
}

impl FromIterator<(String, String)> for NameTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
