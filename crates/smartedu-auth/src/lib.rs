//! # SmartEdu Auth
//!
//! Session and role types for the SmartEdu client.
//!
//! The session is owned by an external auth provider. This crate only reads it:
//!
//! - [`session`]: [`Session`], the closed [`Role`] enum and [`UserType`]
//! - [`provider`]: The [`SessionProvider`] seam and the file/env/static providers
//! - [`context`]: [`SessionContext`], resolved once at the root and passed down
//!
//! # Example
//!
//! ```ignore
//! use smartedu_auth::{EnvSessionProvider, SessionContext};
//!
//! let context = SessionContext::resolve(&EnvSessionProvider)?;
//! if let Some(role) = context.role() {
//!     println!("signed in as {role}");
//! }
//! ```

pub mod context;
pub mod provider;
pub mod session;

pub use context::SessionContext;
pub use provider::{
    EnvSessionProvider, FileSessionProvider, SessionError, SessionProvider, StaticSessionProvider,
};
pub use session::{Role, Session, UserType};
