//! Tabular schedule export.
//!
//! Writes a schedule as CSV with one row per entry: raw identifiers,
//! resolved display names, day label, period, and the period's clock
//! range. Quoting and escaping are handled by the `csv` writer.

use std::io::Write;

use thiserror::Error;

use crate::models::{period_time, NameTable, ScheduleEntry};

/// Export failures.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The underlying CSV writer failed.
    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),
    /// Flushing the output failed.
    #[error("export output failed: {0}")]
    Io(#[from] std::io::Error),
}

const HEADER: [&str; 10] = [
    "group",
    "group_name",
    "subject",
    "subject_name",
    "teacher",
    "teacher_name",
    "room",
    "day",
    "period",
    "time",
];

/// Writes the schedule as CSV to `writer`.
///
/// Name tables resolve display names; unknown identifiers export as-is.
/// Periods outside the known time grid export with an empty time column.
pub fn write_csv<W: Write>(
    writer: W,
    entries: &[ScheduleEntry],
    subject_names: &NameTable,
    teacher_names: &NameTable,
    group_names: &NameTable,
) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(HEADER)?;
    for e in entries {
        let period = e.period.to_string();
        csv.write_record([
            e.group.as_str(),
            group_names.resolve(&e.group),
            e.subject.as_str(),
            subject_names.resolve(&e.subject),
            e.teacher.as_str(),
            teacher_names.resolve(&e.teacher),
            e.room.as_str(),
            e.day.label(),
            period.as_str(),
            period_time(e.period).unwrap_or(""),
        ])?;
    }
    csv.flush()?;
    Ok(())
}
