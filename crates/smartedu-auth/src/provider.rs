//! Session providers.
//!
//! A [`SessionProvider`] is the only way a session enters the client. The CLI
//! picks one at startup; tests use [`StaticSessionProvider`].

use std::path::{Path, PathBuf};

use tracing::debug;
use uuid::Uuid;

use crate::session::{Role, Session, UserType};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("failed to read session file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid session data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid session variable {key}: {reason}")]
    InvalidVariable { key: &'static str, reason: String },
}

/// Source of the current session. `Ok(None)` means "signed out".
pub trait SessionProvider {
    fn load(&self) -> Result<Option<Session>, SessionError>;
}

/// Reads a session JSON document from disk. A missing file means signed out.
#[derive(Debug, Clone)]
pub struct FileSessionProvider {
    path: PathBuf,
}

impl FileSessionProvider {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SessionProvider for FileSessionProvider {
    fn load(&self) -> Result<Option<Session>, SessionError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No session file, treating as signed out");
                return Ok(None);
            }
            Err(source) => {
                return Err(SessionError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        Ok(Some(serde_json::from_str(&raw)?))
    }
}

/// Builds a session from `SMARTEDU_*` environment variables.
///
/// - `SMARTEDU_ACCESS_TOKEN` and `SMARTEDU_ROLE`: required; without a token the user is signed out
/// - `SMARTEDU_USER_ID`: required with a token
/// - `SMARTEDU_USER_TYPE`, `SMARTEDU_PLATFORM_ID`, `SMARTEDU_SCHOOL_ID`: optional
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSessionProvider;

impl EnvSessionProvider {
    pub fn from_lookup<F>(lookup: F) -> Result<Option<Session>, SessionError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let Some(access_token) = get("SMARTEDU_ACCESS_TOKEN") else {
            return Ok(None);
        };

        let role: Role = get("SMARTEDU_ROLE")
            .ok_or(SessionError::InvalidVariable {
                key: "SMARTEDU_ROLE",
                reason: "missing".into(),
            })?
            .parse()
            .map_err(|e: crate::session::UnknownRole| SessionError::InvalidVariable {
                key: "SMARTEDU_ROLE",
                reason: e.to_string(),
            })?;

        let user_type = get("SMARTEDU_USER_TYPE")
            .map(|v| v.parse().unwrap_or(UserType::Other))
            .unwrap_or(UserType::Other);

        let user_id = parse_uuid(get("SMARTEDU_USER_ID"), "SMARTEDU_USER_ID")?.ok_or(
            SessionError::InvalidVariable {
                key: "SMARTEDU_USER_ID",
                reason: "missing".into(),
            },
        )?;

        Ok(Some(Session {
            user_id,
            role,
            user_type,
            platform_id: parse_uuid(get("SMARTEDU_PLATFORM_ID"), "SMARTEDU_PLATFORM_ID")?,
            school_id: parse_uuid(get("SMARTEDU_SCHOOL_ID"), "SMARTEDU_SCHOOL_ID")?,
            access_token,
            expires_at: None,
        }))
    }
}

fn parse_uuid(value: Option<String>, key: &'static str) -> Result<Option<Uuid>, SessionError> {
    value
        .map(|v| {
            Uuid::parse_str(v.trim()).map_err(|e| SessionError::InvalidVariable {
                key,
                reason: e.to_string(),
            })
        })
        .transpose()
}

impl SessionProvider for EnvSessionProvider {
    fn load(&self) -> Result<Option<Session>, SessionError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

/// Hands out a fixed session.
#[derive(Debug, Clone, Default)]
pub struct StaticSessionProvider(pub Option<Session>);

impl SessionProvider for StaticSessionProvider {
    fn load(&self) -> Result<Option<Session>, SessionError> {
        Ok(self.0.clone())
    }
}
