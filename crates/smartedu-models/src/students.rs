//! Student entities and DTOs.
//!
//! Students are listed and managed from the director dashboard
//! (`/director/dashboard/students`).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use smartedu_core::PaginationParams;

use crate::ids::{ClassId, SchoolId, StudentId};

/// A student enrolled in a school.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub admission_number: Option<String>,
    #[serde(default)]
    pub class_id: Option<ClassId>,
    #[serde(default)]
    pub class_name: Option<String>,
    pub school_id: SchoolId,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Filters for the student list. Owned by the page, passed to the list query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentFilterParams {
    /// Free-text search over name, email and admission number
    pub search: Option<String>,
    /// Only students in this class
    pub class_id: Option<ClassId>,
    /// Pagination parameters
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

impl StudentFilterParams {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        self.search = (!search.trim().is_empty()).then(|| search.trim().to_string());
        self
    }

    pub fn with_class(mut self, class_id: Option<ClassId>) -> Self {
        self.class_id = class_id;
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.pagination.page = Some(page);
        self
    }

    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = self.pagination.to_query();
        if let Some(search) = &self.search {
            query.push(("search", search.clone()));
        }
        if let Some(class_id) = self.class_id {
            query.push(("class_id", class_id.to_string()));
        }
        query
    }
}

/// DTO for enrolling a new student.
#[derive(Debug, Clone, Serialize)]
pub struct CreateStudentDto {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admission_number: Option<String>,
    pub class_id: ClassId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

/// DTO for updating a student. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateStudentDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_id: Option<ClassId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_student_deserialize_with_missing_optionals() {
        let student: Student = serde_json::from_value(json!({
            "id": "00000000-0000-0000-0000-000000000001",
            "first_name": "Ada",
            "last_name": "Obi",
            "school_id": "00000000-0000-0000-0000-000000000002",
            "created_at": "2024-09-01T08:00:00Z",
            "updated_at": "2024-09-01T08:00:00Z"
        }))
        .unwrap();
        assert_eq!(student.full_name(), "Ada Obi");
        assert!(student.class_id.is_none());
    }

    #[test]
    fn test_filters_to_query() {
        let class_id = ClassId::from_u128(5);
        let filters = StudentFilterParams::default()
            .with_search("  ada ")
            .with_class(Some(class_id))
            .with_page(3);
        let query = filters.to_query();
        assert!(query.contains(&("page", "3".to_string())));
        assert!(query.contains(&("search", "ada".to_string())));
        assert!(query.contains(&("class_id", class_id.to_string())));
    }

    #[test]
    fn test_blank_search_is_dropped() {
        let filters = StudentFilterParams::default().with_search("   ");
        assert!(filters.search.is_none());
        assert!(!filters.to_query().iter().any(|(k, _)| *k == "search"));
    }

    #[test]
    fn test_update_dto_skips_absent_fields() {
        let dto = UpdateStudentDto {
            last_name: Some("Okafor".into()),
            ..Default::default()
        };
        let serialized = serde_json::to_string(&dto).unwrap();
        assert_eq!(serialized, r#"{"last_name":"Okafor"}"#);
    }
}
