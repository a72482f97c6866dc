//! Response envelope used by every backend endpoint.
//!
//! ```json
//! { "success": true, "data": { ... }, "message": "OK", "statusCode": 200 }
//! ```

use serde::{Deserialize, Serialize};

/// The `{ success, data?, message?, statusCode? }` wrapper around every API response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    /// Whether the backend considers the call successful
    pub success: bool,
    /// Payload, absent for most write endpoints and for failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human readable message from the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Application status code, which may differ from the HTTP status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

impl<T> Envelope<T> {
    /// A successful envelope carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            status_code: Some(200),
        }
    }

    /// A failed envelope with a message and application status.
    pub fn failure(message: impl Into<String>, status_code: u16) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            status_code: Some(status_code),
        }
    }

    /// Replaces the payload, keeping message and status.
    pub fn map<U, F>(self, f: F) -> Envelope<U>
    where
        F: FnOnce(T) -> U,
    {
        Envelope {
            success: self.success,
            data: self.data.map(f),
            message: self.message,
            status_code: self.status_code,
        }
    }
}
