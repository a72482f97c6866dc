//! Session structures supplied by the auth provider.
//!
//! The provider hands out JSON of this shape:
//!
//! ```json
//! {
//!   "userId": "6f1c...",
//!   "role": "school_director",
//!   "userType": "schooladmin",
//!   "platformId": "9a0e...",
//!   "schoolId": "77b2...",
//!   "accessToken": "eyJhbGciOi...",
//!   "expiresAt": "2025-01-31T10:00:00Z"
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The user's role. Unknown role strings fail to parse instead of falling back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Teacher,
    SchoolDirector,
    Student,
    LibraryOwner,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Teacher,
        Role::SchoolDirector,
        Role::Student,
        Role::LibraryOwner,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Teacher => "teacher",
            Role::SchoolDirector => "school_director",
            Role::Student => "student",
            Role::LibraryOwner => "library_owner",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s.trim())
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// Account type reported next to the role.
///
/// Only `libraryresourceowner` influences routing; every other value is advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    LibraryResourceOwner,
    Teacher,
    Student,
    SchoolAdmin,
    #[serde(other)]
    Other,
}

impl FromStr for UserType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "libraryresourceowner" => UserType::LibraryResourceOwner,
            "teacher" => UserType::Teacher,
            "student" => UserType::Student,
            "schooladmin" => UserType::SchoolAdmin,
            _ => UserType::Other,
        })
    }
}

/// An authenticated session. Read-only to the client.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: Uuid,
    pub role: Role,
    #[serde(default = "default_user_type")]
    pub user_type: UserType,
    #[serde(default)]
    pub platform_id: Option<Uuid>,
    #[serde(default)]
    pub school_id: Option<Uuid>,
    pub access_token: String,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

fn default_user_type() -> UserType {
    UserType::Other
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user_id", &self.user_id)
            .field("role", &self.role)
            .field("user_type", &self.user_type)
            .field("platform_id", &self.platform_id)
            .field("school_id", &self.school_id)
            .field("expires_at", &self.expires_at)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Whether the session is past its expiry. Sessions without an expiry never expire here.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }
}
