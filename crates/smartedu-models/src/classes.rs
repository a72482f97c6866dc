//! School class entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{ClassId, SchoolId, TeacherId};

/// A class (e.g. "JSS 1A") within a school.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolClass {
    pub id: ClassId,
    pub name: String,
    pub school_id: SchoolId,
    #[serde(default)]
    pub class_teacher_id: Option<TeacherId>,
    #[serde(default)]
    pub student_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
