//! Timetable entries.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::ids::{ClassId, SubjectId, TeacherId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub day: Weekday,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub subject_id: SubjectId,
    pub subject_name: String,
    pub class_id: ClassId,
    pub class_name: String,
    #[serde(default)]
    pub teacher_id: Option<TeacherId>,
    #[serde(default)]
    pub room: Option<String>,
}

/// Sorts entries by day, then start time.
pub fn sort_timetable(entries: &mut [ScheduleEntry]) {
    entries.sort_by(|a, b| a.day.cmp(&b.day).then(a.start_time.cmp(&b.start_time)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(day: Weekday, hour: u32) -> ScheduleEntry {
        ScheduleEntry {
            day,
            start_time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(hour + 1, 0, 0).unwrap(),
            subject_id: SubjectId::from_u128(1),
            subject_name: "Maths".into(),
            class_id: ClassId::from_u128(2),
            class_name: "JSS 1A".into(),
            teacher_id: None,
            room: None,
        }
    }

    #[test]
    fn test_sort_timetable() {
        let mut entries = vec![
            entry(Weekday::Wednesday, 9),
            entry(Weekday::Monday, 11),
            entry(Weekday::Monday, 8),
        ];
        sort_timetable(&mut entries);
        assert_eq!(entries[0].day, Weekday::Monday);
        assert_eq!(entries[0].start_time.format("%H:%M").to_string(), "08:00");
        assert_eq!(entries[2].day, Weekday::Wednesday);
    }

    #[test]
    fn test_time_wire_format() {
        let parsed: ScheduleEntry = serde_json::from_str(
            r#"{"day":"friday","start_time":"10:30:00","end_time":"11:15:00",
                "subject_id":"00000000-0000-0000-0000-000000000001","subject_name":"English",
                "class_id":"00000000-0000-0000-0000-000000000002","class_name":"SS 2"}"#,
        )
        .unwrap();
        assert_eq!(parsed.day, Weekday::Friday);
        assert!(parsed.room.is_none());
    }
}
