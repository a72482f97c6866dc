//! Multipart request bodies for file uploads.

use reqwest::multipart::{Form, Part};
use smartedu_core::ApiError;

/// A file picked for upload.
#[derive(Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}

impl std::fmt::Debug for FileUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Field {
    Text(String),
    File {
        file_name: String,
        content_type: String,
        bytes: Vec<u8>,
    },
}

/// An owned multipart body.
///
/// Kept as plain data until the request is sent, so it can be logged and
/// inspected in tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipartBody {
    fields: Vec<(String, Field)>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a body from `(name, value)` text fields.
    pub fn from_fields<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, String)>,
        K: Into<String>,
    {
        fields
            .into_iter()
            .fold(Self::new(), |body, (name, value)| body.text(name, value))
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), Field::Text(value.into())));
        self
    }

    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        self.fields.push((
            name.into(),
            Field::File {
                file_name: file_name.into(),
                content_type: content_type.into(),
                bytes,
            },
        ));
        self
    }

    /// Adds `upload` under `name`, if present.
    pub fn attach(self, name: impl Into<String>, upload: Option<FileUpload>) -> Self {
        match upload {
            Some(upload) => self.file(name, upload.file_name, upload.content_type, upload.bytes),
            None => self,
        }
    }

    /// Value of a text field, if present.
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.fields.iter().find_map(|(n, field)| match field {
            Field::Text(value) if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    pub fn has_file(&self, name: &str) -> bool {
        self.fields
            .iter()
            .any(|(n, field)| n == name && matches!(field, Field::File { .. }))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Converts into a `reqwest` form.
    ///
    /// # Errors
    ///
    /// Returns a failure when a file part carries an invalid content type.
    pub fn into_form(self) -> Result<Form, ApiError> {
        self.fields
            .into_iter()
            .try_fold(Form::new(), |form, (name, field)| match field {
                Field::Text(value) => Ok(form.text(name, value)),
                Field::File {
                    file_name,
                    content_type,
                    bytes,
                } => {
                    let part = Part::bytes(bytes)
                        .file_name(file_name)
                        .mime_str(&content_type)
                        .map_err(|_| {
                            ApiError::failure(0, format!("Invalid content type: {content_type}"))
                        })?;
                    Ok(form.part(name, part))
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fields_and_file() {
        let body = MultipartBody::from_fields(vec![("title", "Fractions".to_string())]).file(
            "video",
            "lesson.mp4",
            "video/mp4",
            vec![0, 1, 2],
        );

        assert_eq!(body.len(), 2);
        assert_eq!(body.text_value("title"), Some("Fractions"));
        assert!(body.has_file("video"));
        assert!(!body.has_file("title"));
    }

    #[test]
    fn test_attach_optional_upload() {
        let body = MultipartBody::new().attach("thumbnail", None);
        assert!(body.is_empty());

        let upload = FileUpload::new("cover.png", "image/png", vec![1; 4]);
        assert!(format!("{upload:?}").contains("len: 4"));
        let body = MultipartBody::new().attach("thumbnail", Some(upload));
        assert!(body.has_file("thumbnail"));
    }

    #[test]
    fn test_into_form_rejects_bad_content_type() {
        let body = MultipartBody::new().file("f", "a.bin", "not a mime", vec![]);
        assert!(body.into_form().is_err());
    }

    #[test]
    fn test_into_form_accepts_valid_parts() {
        let body = MultipartBody::new()
            .text("name", "Biology")
            .file("thumbnail", "cell.png", "image/png", vec![137, 80]);
        assert!(body.into_form().is_ok());
    }
}
