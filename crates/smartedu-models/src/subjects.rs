//! Subject entities and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{ClassId, SchoolId, SubjectId};

/// A subject taught in a school, optionally tied to a class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub class_id: Option<ClassId>,
    #[serde(default)]
    pub school_id: Option<SchoolId>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a subject. Sent as multipart fields next to an optional thumbnail.
#[derive(Debug, Clone, Serialize)]
pub struct CreateSubjectDto {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_id: Option<ClassId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl CreateSubjectDto {
    /// Text fields for a multipart form, absent values omitted.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("name", self.name.clone())];
        if let Some(code) = &self.code {
            fields.push(("code", code.clone()));
        }
        if let Some(description) = &self.description {
            fields.push(("description", description.clone()));
        }
        if let Some(class_id) = self.class_id {
            fields.push(("class_id", class_id.to_string()));
        }
        if let Some(color) = &self.color {
            fields.push(("color", color.clone()));
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_fields_omit_absent_values() {
        let dto = CreateSubjectDto {
            name: "Mathematics".into(),
            code: Some("MTH101".into()),
            description: None,
            class_id: None,
            color: None,
        };
        assert_eq!(
            dto.form_fields(),
            vec![("name", "Mathematics".to_string()), ("code", "MTH101".to_string())]
        );
    }
}
