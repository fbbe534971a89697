//! Schedule validation engine.
//!
//! Inspects a flat list of schedule entries and reports conflicts,
//! missing-data defects, load anomalies, and informational notices.
//! Detects:
//! - Double-booked teachers, rooms, and groups
//! - Entries with no teacher or no room assigned
//! - Unusually heavy subject and teacher loads
//! - Weekend and break-period usage
//!
//! The engine is a pure function: identical entries and name tables yield
//! an identical issue list in the same order. Rules run in a fixed sequence
//! and each rule scans the input once, grouping by composite keys, so the
//! whole pass is linear in the number of entries.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::models::{NameTable, ScheduleEntry, Weekday, BREAK_PERIOD};

/// Periods per week for one (group, subject) pair above which a heavy-load
/// warning is raised.
pub const HEAVY_LOAD_MAX: usize = 8;

/// Total periods per week one teacher may carry before an overload warning.
pub const TEACHER_LOAD_MAX: usize = 20;

/// Issue urgency. Ordered: `Info < Warning < Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Notable but benign.
    Info,
    /// Unusual but not invalid.
    Warning,
    /// The schedule is not usable as-is.
    Error,
}

impl Severity {
    /// Stable lowercase tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

/// Which rule produced an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Same teacher in two places in one slot.
    TeacherConflict,
    /// Same room used by two classes in one slot.
    RoomConflict,
    /// Same group attending two different subjects in one slot.
    GroupConflict,
    /// Entries with an empty teacher identifier.
    MissingTeacher,
    /// Entries with an empty room identifier.
    MissingRoom,
    /// A (group, subject) pair with too many periods per week.
    HeavyLoad,
    /// A teacher carrying too many periods per week.
    TeacherOverload,
    /// Classes scheduled on Saturday or Sunday.
    WeekendClass,
    /// Classes scheduled in the midday break period.
    BreakPeriodUsed,
}

impl IssueKind {
    /// Stable machine tag, e.g. `"teacher_conflict"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::TeacherConflict => "teacher_conflict",
            IssueKind::RoomConflict => "room_conflict",
            IssueKind::GroupConflict => "group_conflict",
            IssueKind::MissingTeacher => "missing_teacher",
            IssueKind::MissingRoom => "missing_room",
            IssueKind::HeavyLoad => "heavy_load",
            IssueKind::TeacherOverload => "teacher_overload",
            IssueKind::WeekendClass => "weekend_class",
            IssueKind::BreakPeriodUsed => "break_period_used",
        }
    }

    /// Fixed severity of issues produced by this rule.
    pub fn severity(&self) -> Severity {
        match self {
            IssueKind::TeacherConflict
            | IssueKind::RoomConflict
            | IssueKind::GroupConflict
            | IssueKind::MissingTeacher
            | IssueKind::MissingRoom => Severity::Error,
            IssueKind::HeavyLoad | IssueKind::TeacherOverload => Severity::Warning,
            IssueKind::WeekendClass | IssueKind::BreakPeriodUsed => Severity::Info,
        }
    }
}

/// One detected problem in a schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Unique within one validation run (`issue-1`, `issue-2`, ...).
    pub id: String,
    /// Issue urgency.
    pub severity: Severity,
    /// Rule that produced this issue.
    #[serde(rename = "type")]
    pub kind: IssueKind,
    /// Human-readable description with resolved names where available.
    pub message: String,
    /// Identifiers implicated in the issue. May contain duplicates;
    /// consumers deduplicate for display.
    pub affected: Vec<String>,
}

/// Issue accumulator. Owns the per-run id counter so no state outlives
/// one `validate` call.
struct IssueCollector {
    issues: Vec<ValidationIssue>,
    next_id: usize,
}

impl IssueCollector {
    fn new() -> Self {
        Self {
            issues: Vec::new(),
            next_id: 0,
        }
    }

    fn push(&mut self, kind: IssueKind, message: String, affected: Vec<String>) {
        self.next_id += 1;
        self.issues.push(ValidationIssue {
            id: format!("issue-{}", self.next_id),
            severity: kind.severity(),
            kind,
            message,
            affected,
        });
    }
}

/// Appends `value` unless already present. Preserves first-appearance order.
fn push_distinct(list: &mut Vec<String>, value: &str) {
    if !list.iter().any(|v| v == value) {
        list.push(value.to_string());
    }
}

/// Validates a schedule against the full rule set.
///
/// Returns all detected issues in rule order (conflicts, missing data,
/// load warnings, informational notices). Bad schedule content is never
/// an error of this call itself: empty identifiers, overlapping slots,
/// and overloads all come back as issues.
///
/// Name tables are optional lookups; unknown identifiers appear raw in
/// messages.
pub fn validate(
    entries: &[ScheduleEntry],
    subject_names: &NameTable,
    teacher_names: &NameTable,
    group_names: &NameTable,
) -> Vec<ValidationIssue> {
    let mut out = IssueCollector::new();

    // 1. Teacher double-booked: same (teacher, day, period), any two entries.
    let mut teacher_slots: IndexMap<(&str, Weekday, u32), Vec<&ScheduleEntry>> = IndexMap::new();
    for e in entries {
        teacher_slots
            .entry((e.teacher.as_str(), e.day, e.period))
            .or_default()
            .push(e);
    }
    for (&(teacher, day, period), slot) in &teacher_slots {
        if slot.len() > 1 {
            let mut groups: Vec<String> = Vec::new();
            for e in slot {
                push_distinct(&mut groups, group_names.resolve(&e.group));
            }
            out.push(
                IssueKind::TeacherConflict,
                format!(
                    "Teacher {} is double-booked on {} period {} ({})",
                    teacher_names.resolve(teacher),
                    day.label(),
                    period,
                    groups.join(", ")
                ),
                slot.iter().map(|e| e.teacher.clone()).collect(),
            );
        }
    }

    // 2. Room double-booked: same (room, day, period).
    let mut room_slots: IndexMap<(&str, Weekday, u32), Vec<&ScheduleEntry>> = IndexMap::new();
    for e in entries {
        room_slots
            .entry((e.room.as_str(), e.day, e.period))
            .or_default()
            .push(e);
    }
    for (&(room, day, period), slot) in &room_slots {
        if slot.len() > 1 {
            let mut groups: Vec<String> = Vec::new();
            for e in slot {
                push_distinct(&mut groups, group_names.resolve(&e.group));
            }
            out.push(
                IssueKind::RoomConflict,
                format!(
                    "Room {} is double-booked on {} period {} ({})",
                    room,
                    day.label(),
                    period,
                    groups.join(", ")
                ),
                slot.iter().map(|e| e.room.clone()).collect(),
            );
        }
    }

    // 3. Group double-booked: same (group, day, period) with 2+ distinct
    // subjects. Two sessions of the same subject in one slot pass.
    let mut group_slots: IndexMap<(&str, Weekday, u32), Vec<&ScheduleEntry>> = IndexMap::new();
    for e in entries {
        group_slots
            .entry((e.group.as_str(), e.day, e.period))
            .or_default()
            .push(e);
    }
    for (&(group, day, period), slot) in &group_slots {
        let mut subjects: Vec<String> = Vec::new();
        for e in slot {
            push_distinct(&mut subjects, &e.subject);
        }
        if subjects.len() > 1 {
            out.push(
                IssueKind::GroupConflict,
                format!(
                    "Group {} has overlapping subjects on {} period {}",
                    group_names.resolve(group),
                    day.label(),
                    period
                ),
                vec![group.to_string()],
            );
        }
    }

    // 4. Missing teacher: one aggregate issue.
    let no_teacher: Vec<&ScheduleEntry> = entries
        .iter()
        .filter(|e| e.teacher.trim().is_empty())
        .collect();
    if !no_teacher.is_empty() {
        out.push(
            IssueKind::MissingTeacher,
            format!("Found {} entries with no teacher assigned", no_teacher.len()),
            no_teacher.iter().map(|e| e.subject.clone()).collect(),
        );
    }

    // 5. Missing room: one aggregate issue.
    let no_room: Vec<&ScheduleEntry> = entries
        .iter()
        .filter(|e| e.room.trim().is_empty())
        .collect();
    if !no_room.is_empty() {
        out.push(
            IssueKind::MissingRoom,
            format!("Found {} entries with no room assigned", no_room.len()),
            no_room.iter().map(|e| e.subject.clone()).collect(),
        );
    }

    // 6. Heavy subject load per (group, subject).
    let mut subject_periods: IndexMap<(&str, &str), usize> = IndexMap::new();
    for e in entries {
        *subject_periods
            .entry((e.group.as_str(), e.subject.as_str()))
            .or_default() += 1;
    }
    for (&(group, subject), &count) in &subject_periods {
        if count > HEAVY_LOAD_MAX {
            out.push(
                IssueKind::HeavyLoad,
                format!(
                    "Subject {} for group {} has {} periods/week (unusually high)",
                    subject_names.resolve(subject),
                    group_names.resolve(group),
                    count
                ),
                vec![subject.to_string(), group.to_string()],
            );
        }
    }

    // 7. Teacher weekly load.
    let mut teacher_load: IndexMap<&str, usize> = IndexMap::new();
    for e in entries {
        *teacher_load.entry(e.teacher.as_str()).or_default() += 1;
    }
    for (&teacher, &count) in &teacher_load {
        if count > TEACHER_LOAD_MAX {
            out.push(
                IssueKind::TeacherOverload,
                format!(
                    "Teacher {} teaches {} periods/week in total (above normal load)",
                    teacher_names.resolve(teacher),
                    count
                ),
                vec![teacher.to_string()],
            );
        }
    }

    // 8. Weekend classes: one aggregate issue.
    let weekend: Vec<&ScheduleEntry> = entries.iter().filter(|e| e.day.is_weekend()).collect();
    if !weekend.is_empty() {
        let mut days: Vec<String> = Vec::new();
        for e in &weekend {
            push_distinct(&mut days, e.day.as_str());
        }
        let mut groups: Vec<String> = Vec::new();
        for e in &weekend {
            push_distinct(&mut groups, &e.group);
        }
        out.push(
            IssueKind::WeekendClass,
            format!(
                "{} periods scheduled on the weekend ({})",
                weekend.len(),
                days.join(", ")
            ),
            groups,
        );
    }

    // 9. Break-period usage: one aggregate issue.
    let in_break: Vec<&ScheduleEntry> = entries.iter().filter(|e| e.in_break_period()).collect();
    if !in_break.is_empty() {
        let mut groups: Vec<String> = Vec::new();
        for e in &in_break {
            push_distinct(&mut groups, &e.group);
        }
        out.push(
            IssueKind::BreakPeriodUsed,
            format!(
                "{} entries scheduled during the break (period {}, 12:00-13:00)",
                in_break.len(),
                BREAK_PERIOD
            ),
            groups,
        );
    }

    out.issues
}
