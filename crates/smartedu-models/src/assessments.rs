//! Assessment entities and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{AcademicSessionId, AssessmentId, ClassId, SubjectId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStatus {
    Draft,
    Published,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub id: AssessmentId,
    pub title: String,
    pub subject_id: SubjectId,
    #[serde(default)]
    pub class_id: Option<ClassId>,
    #[serde(default)]
    pub academic_session_id: Option<AcademicSessionId>,
    /// e.g. "quiz", "test", "exam"
    pub assessment_type: String,
    pub total_marks: u32,
    pub status: AssessmentStatus,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateAssessmentDto {
    pub title: String,
    pub subject_id: SubjectId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_id: Option<ClassId>,
    pub assessment_type: String,
    pub total_marks: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}
