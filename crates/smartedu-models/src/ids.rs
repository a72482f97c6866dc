//! Strongly-typed ID newtypes for backend entities.
//!
//! Each entity gets its own wrapper around `Uuid`, so a `SubjectId` can never be
//! passed where a `ClassId` is expected. IDs serialize as plain UUID strings.
//!
//! # Example
//!
//! ```ignore
//! use smartedu_models::ids::{SubjectId, TopicId};
//!
//! fn topic_materials(topic: TopicId) { /* ... */ }
//!
//! let topic: TopicId = "5b0c6a2e-1f7d-4f6a-9a53-3c1f2a9d2b10".parse()?;
//! topic_materials(topic);
//! // topic_materials(SubjectId::new()); // Compile error! Type mismatch.
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Macro to define a strongly-typed ID newtype.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new random ID.
            #[inline]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Create an ID from an existing UUID.
            #[inline]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Create an ID from a u128 value (useful for constants and fixtures).
            #[inline]
            pub const fn from_u128(v: u128) -> Self {
                Self(Uuid::from_u128(v))
            }

            /// Get the inner UUID value.
            #[inline]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            #[inline]
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            #[inline]
            fn from(id: $name) -> Uuid {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s.trim()).map(Self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                Uuid::deserialize(deserializer).map(Self)
            }
        }
    };
}

define_id!(
    /// Strongly-typed ID for School entities.
    SchoolId
);

define_id!(
    /// Strongly-typed ID for Platform (tenant) entities.
    PlatformId
);

define_id!(
    /// Strongly-typed ID for Student entities.
    StudentId
);

define_id!(
    /// Strongly-typed ID for Teacher entities.
    TeacherId
);

define_id!(
    /// Strongly-typed ID for Subject entities.
    SubjectId
);

define_id!(
    /// Strongly-typed ID for Class entities.
    ClassId
);

define_id!(
    /// Strongly-typed ID for AcademicSession entities.
    AcademicSessionId
);

define_id!(
    /// Strongly-typed ID for Assessment entities.
    AssessmentId
);

define_id!(
    /// Strongly-typed ID for Chapter entities.
    ChapterId
);

define_id!(
    /// Strongly-typed ID for Topic entities.
    TopicId
);

define_id!(
    /// Strongly-typed ID for Video entities.
    VideoId
);

define_id!(
    /// Strongly-typed ID for Material entities.
    MaterialId
);

define_id!(
    /// Strongly-typed ID for Link entities.
    LinkId
);
