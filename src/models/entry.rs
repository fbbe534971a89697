//! Schedule entry model.
//!
//! A `ScheduleEntry` is the atomic timetable fact: one group, one subject,
//! one teacher, one room, at one weekday/period slot. A schedule is an
//! ordered list of entries with no uniqueness constraint — duplicates are
//! legal input and are what validation detects.
//!
//! # Wire Format
//! Entries round-trip the JSON shape produced by the generation service:
//! weekdays serialize as the short codes `"Mon"`..`"Sun"`, periods are
//! 1-indexed positive integers.

use serde::{Deserialize, Serialize};

/// The midday break slot. Scheduling a class here is legal but notable.
pub const BREAK_PERIOD: u32 = 5;

/// Day of week, order-significant (Mon first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    /// All days in timetable order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// Short wire code (`"Mon"`..`"Sun"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        }
    }

    /// Full display name.
    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }

    /// Whether this day falls on the weekend.
    pub fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Sat | Weekday::Sun)
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scheduled lesson occurrence.
///
/// "Group `group` is taught subject `subject` by teacher `teacher` in room
/// `room` on `day` during period `period`."
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Student group identifier.
    pub group: String,
    /// Subject identifier.
    pub subject: String,
    /// Teacher identifier. May be empty when generation left it unassigned.
    pub teacher: String,
    /// Room identifier. May be empty when generation left it unassigned.
    pub room: String,
    /// Day of week.
    pub day: Weekday,
    /// 1-indexed lesson slot within the day.
    pub period: u32,
}

impl ScheduleEntry {
    /// Creates a new entry.
    pub fn new(
        group: impl Into<String>,
        subject: impl Into<String>,
        teacher: impl Into<String>,
        room: impl Into<String>,
        day: Weekday,
        period: u32,
    ) -> Self {
        Self {
            group: group.into(),
            subject: subject.into(),
            teacher: teacher.into(),
            room: room.into(),
            day,
            period,
        }
    }

    /// Whether this entry occupies the midday break slot.
    pub fn in_break_period(&self) -> bool {
        self.period == BREAK_PERIOD
    }
}

/// Response envelope returned by the external generation service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResponse {
    /// Generation outcome status (e.g., "success").
    pub status: String,
    /// Human-readable status message from the service.
    pub message: String,
    /// The generated entries.
    pub schedule_data: Vec<ScheduleEntry>,
}

/// Clock range for a period (periods 1..=12), e.g. period 1 = "08:00-09:00".
///
/// Returns `None` for periods outside the displayed range; validation does
/// not bound periods, only display and export care about this mapping.
pub fn period_time(period: u32) -> Option<&'static str> {
    match period {
        1 => Some("08:00-09:00"),
        2 => Some("09:00-10:00"),
        3 => Some("10:00-11:00"),
        4 => Some("11:00-12:00"),
        5 => Some("12:00-13:00"),
        6 => Some("13:00-14:00"),
        7 => Some("14:00-15:00"),
        8 => Some("15:00-16:00"),
        9 => Some("16:00-17:00"),
        10 => Some("17:00-18:00"),
        11 => Some("18:00-19:00"),
        12 => Some("19:00-20:00"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_order() {
        assert!(Weekday::Mon < Weekday::Tue);
        assert!(Weekday::Fri < Weekday::Sat);
        assert_eq!(Weekday::ALL[0], Weekday::Mon);
        assert_eq!(Weekday::ALL[6], Weekday::Sun);
    }

    #[test]
    fn test_weekday_weekend() {
        assert!(Weekday::Sat.is_weekend());
        assert!(Weekday::Sun.is_weekend());
        assert!(!Weekday::Wed.is_weekend());
    }

    #[test]
    fn test_weekday_serde_short_codes() {
        let json = serde_json::to_string(&Weekday::Thu).unwrap();
        assert_eq!(json, "\"Thu\"");
        let day: Weekday = serde_json::from_str("\"Sun\"").unwrap();
        assert_eq!(day, Weekday::Sun);
    }

    #[test]
    fn test_entry_wire_shape() {
        let json = r#"{
            "group": "G1", "subject": "MATH101", "teacher": "T9",
            "room": "R201", "day": "Mon", "period": 3
        }"#;
        let e: ScheduleEntry = serde_json::from_str(json).unwrap();
        assert_eq!(e.group, "G1");
        assert_eq!(e.day, Weekday::Mon);
        assert_eq!(e.period, 3);
        assert!(!e.in_break_period());
    }

    #[test]
    fn test_break_period() {
        let e = ScheduleEntry::new("G1", "S1", "T1", "R1", Weekday::Tue, BREAK_PERIOD);
        assert!(e.in_break_period());
    }

    #[test]
    fn test_period_time() {
        assert_eq!(period_time(1), Some("08:00-09:00"));
        assert_eq!(period_time(5), Some("12:00-13:00"));
        assert_eq!(period_time(12), Some("19:00-20:00"));
        assert_eq!(period_time(0), None);
        assert_eq!(period_time(13), None);
    }

    #[test]
    fn test_response_envelope() {
        let json = r#"{
            "status": "success",
            "message": "generated",
            "schedule_data": [
                {"group":"G1","subject":"S1","teacher":"T1","room":"R1","day":"Fri","period":2}
            ]
        }"#;
        let resp: ScheduleResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.status, "success");
        assert_eq!(resp.schedule_data.len(), 1);
        assert_eq!(resp.schedule_data[0].day, Weekday::Fri);
    }
}
