use serde_json::Value;

use crate::envelope::Envelope;

pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please login again.";
pub const FORBIDDEN_MESSAGE: &str = "You do not have permission to perform this action.";
pub const NETWORK_MESSAGE: &str = "Network error. Please check your connection.";
pub const CONFIGURATION_MESSAGE: &str =
    "The application is not configured correctly. Please contact support.";
pub const GENERIC_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// The client is missing configuration (no request was attempted)
    Configuration,
    /// No response was received
    Network,
    Unauthorized,
    Forbidden,
    NotFound,
    /// Any other non-2xx status or `success: false` envelope
    Failure,
}

/// Error raised by the API client and carried by failed queries and mutations.
///
/// `status` is the HTTP status, or the envelope's `statusCode` when the backend
/// reported a failure inside a 2xx response. Network and configuration errors use 0.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message} (status {status})")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub status: u16,
    pub message: String,
    pub envelope: Option<Envelope<Value>>,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, status: u16, message: impl Into<String>) -> Self {
        Self {
            kind,
            status,
            message: message.into(),
            envelope: None,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Configuration, 0, message)
    }

    pub fn network() -> Self {
        Self::new(ApiErrorKind::Network, 0, NETWORK_MESSAGE)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Unauthorized, 401, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Forbidden, 403, message)
    }

    pub fn failure(status: u16, message: impl Into<String>) -> Self {
        Self::new(Self::kind_for_status(status), status, message)
    }

    /// Builds the error for a failed response, keeping the raw envelope if one was parsed.
    pub fn from_status(status: u16, envelope: Option<Envelope<Value>>) -> Self {
        let message = envelope
            .as_ref()
            .and_then(|e| e.message.clone())
            .unwrap_or_else(|| format!("Request failed with status {status}"));

        Self {
            kind: Self::kind_for_status(status),
            status,
            message,
            envelope,
        }
    }

    fn kind_for_status(status: u16) -> ApiErrorKind {
        match status {
            401 => ApiErrorKind::Unauthorized,
            403 => ApiErrorKind::Forbidden,
            404 => ApiErrorKind::NotFound,
            _ => ApiErrorKind::Failure,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind == ApiErrorKind::Unauthorized
    }

    pub fn is_forbidden(&self) -> bool {
        self.kind == ApiErrorKind::Forbidden
    }

    /// Whether repeating the same request could succeed.
    ///
    /// Only network failures and server-side (5xx) failures qualify.
    pub fn is_retryable(&self) -> bool {
        match self.kind {
            ApiErrorKind::Network => true,
            ApiErrorKind::Failure => self.status >= 500,
            _ => false,
        }
    }

    /// The message shown to the user for this error.
    pub fn user_message(&self) -> String {
        match self.kind {
            ApiErrorKind::Unauthorized => SESSION_EXPIRED_MESSAGE.to_string(),
            ApiErrorKind::Forbidden => FORBIDDEN_MESSAGE.to_string(),
            ApiErrorKind::Network => NETWORK_MESSAGE.to_string(),
            ApiErrorKind::Configuration => CONFIGURATION_MESSAGE.to_string(),
            ApiErrorKind::NotFound | ApiErrorKind::Failure => self
                .envelope
                .as_ref()
                .and_then(|e| e.message.clone())
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| GENERIC_MESSAGE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_401_envelope_maps_to_session_expired() {
        let envelope = Envelope::failure("jwt expired", 401);
        let error = ApiError::from_status(401, Some(envelope));
        assert_eq!(error.kind, ApiErrorKind::Unauthorized);
        assert_eq!(error.message, "jwt expired");
        assert_eq!(
            error.user_message(),
            "Your session has expired. Please login again."
        );
    }

    #[test]
    fn test_from_status_403_is_forbidden() {
        let error = ApiError::from_status(403, None);
        assert!(error.is_forbidden());
        assert_eq!(error.user_message(), FORBIDDEN_MESSAGE);
    }

    #[test]
    fn test_failure_uses_server_message() {
        let error = ApiError::from_status(422, Some(Envelope::failure("Email already taken", 422)));
        assert_eq!(error.kind, ApiErrorKind::Failure);
        assert_eq!(error.user_message(), "Email already taken");
    }

    #[test]
    fn test_failure_without_message_uses_generic_text() {
        let error = ApiError::from_status(500, None);
        assert_eq!(error.user_message(), GENERIC_MESSAGE);
        assert_eq!(error.message, "Request failed with status 500");
    }

    #[test]
    fn test_network_error_has_status_zero() {
        let error = ApiError::network();
        assert_eq!(error.status, 0);
        assert_eq!(error.kind, ApiErrorKind::Network);
        assert_eq!(error.user_message(), NETWORK_MESSAGE);
    }

    #[test]
    fn test_retryable_classification() {
        assert!(ApiError::network().is_retryable());
        assert!(ApiError::failure(503, "down").is_retryable());
        assert!(!ApiError::failure(400, "bad").is_retryable());
        assert!(!ApiError::unauthorized("expired").is_retryable());
        assert!(!ApiError::configuration("missing url").is_retryable());
    }

    #[test]
    fn test_failure_constructor_classifies_status() {
        assert_eq!(ApiError::failure(404, "gone").kind, ApiErrorKind::NotFound);
        assert_eq!(ApiError::failure(401, "x").kind, ApiErrorKind::Unauthorized);
    }

    #[test]
    fn test_display_includes_status() {
        let error = ApiError::failure(409, "Duplicate subject");
        assert_eq!(error.to_string(), "Duplicate subject (status 409)");
    }
}
