//! Attendance registers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use smartedu_core::serde::deserialize_date;

use crate::ids::{ClassId, StudentId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    Excused,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub student_id: StudentId,
    pub student_name: String,
    /// `None` until the register has been taken
    #[serde(default)]
    pub status: Option<AttendanceStatus>,
    #[serde(default)]
    pub remark: Option<String>,
}

/// The register of one class for one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRegister {
    pub class_id: ClassId,
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub is_submitted: bool,
    pub records: Vec<AttendanceRecord>,
}

impl AttendanceRegister {
    pub fn count(&self, status: AttendanceStatus) -> usize {
        self.records
            .iter()
            .filter(|r| r.status == Some(status))
            .count()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AttendanceEntry {
    pub student_id: StudentId,
    pub status: AttendanceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitAttendanceDto {
    pub class_id: ClassId,
    pub date: NaiveDate,
    pub records: Vec<AttendanceEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_counts() {
        let register: AttendanceRegister = serde_json::from_value(json!({
            "class_id": "00000000-0000-0000-0000-000000000001",
            "date": "2024-10-15",
            "records": [
                { "student_id": "00000000-0000-0000-0000-00000000000a", "student_name": "A", "status": "present" },
                { "student_id": "00000000-0000-0000-0000-00000000000b", "student_name": "B", "status": "absent" },
                { "student_id": "00000000-0000-0000-0000-00000000000c", "student_name": "C", "status": "present" },
                { "student_id": "00000000-0000-0000-0000-00000000000d", "student_name": "D" }
            ]
        }))
        .unwrap();
        assert_eq!(register.count(AttendanceStatus::Present), 2);
        assert_eq!(register.count(AttendanceStatus::Absent), 1);
        assert!(!register.is_submitted);
    }
}
