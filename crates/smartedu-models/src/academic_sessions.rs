//! Academic session entities.
//!
//! An academic session is a school year split into terms. The current session's
//! term dates bound every date picker in the dashboards.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use smartedu_core::serde::deserialize_date;

use crate::ids::{AcademicSessionId, SchoolId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcademicSession {
    pub id: AcademicSessionId,
    /// e.g. "2024/2025"
    pub academic_year: String,
    /// e.g. "first", "second", "third"
    pub term: String,
    pub school_id: SchoolId,
    #[serde(deserialize_with = "deserialize_date")]
    pub term_start_date: NaiveDate,
    #[serde(deserialize_with = "deserialize_date")]
    pub term_end_date: NaiveDate,
    #[serde(default)]
    pub is_current: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AcademicSession {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.term_start_date <= date && date <= self.term_end_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn session() -> AcademicSession {
        serde_json::from_value(json!({
            "id": "00000000-0000-0000-0000-000000000001",
            "academic_year": "2024/2025",
            "term": "first",
            "school_id": "00000000-0000-0000-0000-000000000002",
            "term_start_date": "2024-09-01T00:00:00.000Z",
            "term_end_date": "2024-12-20",
            "is_current": true,
            "created_at": "2024-08-01T00:00:00Z",
            "updated_at": "2024-08-01T00:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_term_dates_parse_from_timestamps_and_dates() {
        let session = session();
        assert_eq!(session.term_start_date, NaiveDate::from_ymd_opt(2024, 9, 1).unwrap());
        assert_eq!(session.term_end_date, NaiveDate::from_ymd_opt(2024, 12, 20).unwrap());
    }

    #[test]
    fn test_contains_is_inclusive() {
        let session = session();
        assert!(session.contains(NaiveDate::from_ymd_opt(2024, 9, 1).unwrap()));
        assert!(session.contains(NaiveDate::from_ymd_opt(2024, 12, 20).unwrap()));
        assert!(!session.contains(NaiveDate::from_ymd_opt(2024, 12, 21).unwrap()));
    }
}
