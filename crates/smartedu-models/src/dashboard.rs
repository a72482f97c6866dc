//! Dashboard summaries.

use serde::{Deserialize, Serialize};

use crate::academic_sessions::AcademicSession;
use crate::assessments::Assessment;
use crate::classes::SchoolClass;
use crate::schedules::ScheduleEntry;

/// Headline numbers on the director (admin) dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectorDashboard {
    pub total_students: u64,
    pub total_teachers: u64,
    pub total_classes: u64,
    pub total_subjects: u64,
    /// Percentage of present marks this term, 0-100
    #[serde(default)]
    pub attendance_rate: Option<f64>,
    #[serde(default)]
    pub current_session: Option<AcademicSession>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherDashboard {
    #[serde(default)]
    pub classes: Vec<SchoolClass>,
    #[serde(default)]
    pub upcoming_assessments: Vec<Assessment>,
    #[serde(default)]
    pub today_schedule: Vec<ScheduleEntry>,
}
