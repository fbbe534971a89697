//! Saved schedule snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ScheduleEntry;

/// One persisted schedule, as stored by the history store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedSchedule {
    /// Opaque identifier (`sched_{unix_millis}`).
    pub id: String,
    /// User-visible name; defaults to a timestamp if not supplied.
    pub name: String,
    /// When the snapshot was saved.
    pub created_at: DateTime<Utc>,
    /// Number of entries, denormalized for list views.
    pub entry_count: usize,
    /// Generation status the schedule was saved with.
    pub status: String,
    /// The entries themselves.
    pub data: Vec<ScheduleEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday;

    #[test]
    fn test_saved_schedule_roundtrip() {
        let saved = SavedSchedule {
            id: "sched_1700000000000".into(),
            name: "Week 12 draft".into(),
            created_at: Utc::now(),
            entry_count: 1,
            status: "success".into(),
            data: vec![ScheduleEntry::new("G1", "S1", "T1", "R1", Weekday::Mon, 1)],
        };
        let json = serde_json::to_string(&saved).unwrap();
        let back: SavedSchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, saved.id);
        assert_eq!(back.entry_count, 1);
        assert_eq!(back.data[0].day, Weekday::Mon);
    }
}
