//! # SmartEdu Hub client
//!
//! The client side of the SmartEdu Hub school platform: role-specific shells
//! for school directors, teachers, students and library resource owners, over
//! a typed REST client and a shared query cache.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── smartedu-core/          # ApiError, response envelope, pagination
//! ├── smartedu-config/        # ApiConfig, QueryConfig, LoggingConfig
//! ├── smartedu-auth/          # Session, Role, SessionContext and providers
//! ├── smartedu-models/        # Backend entities and request DTOs
//! ├── smartedu-cache/         # QueryKey, QueryCache, key builders
//! ├── smartedu-api/           # reqwest-based ApiClient, multipart bodies
//! └── smartedu-observability/ # tracing setup, log forwarding, log sink
//! src/
//! ├── query/       # Query, Mutation, QueryClient, QueryState
//! ├── modules/     # One module per backend resource (service + hooks)
//! ├── components/  # Pagination, selectors, filters, date bounds, views
//! ├── shell.rs     # Shell selection from path and session
//! └── cli/         # Command handlers for the binary
//! ```
//!
//! Each resource module follows the same structure:
//!
//! - `mod.rs`: Module exports
//! - `service.rs`: Typed API calls
//! - `hooks.rs`: Query and mutation declarations with cache keys and invalidation sets
//!
//! ## Data flow
//!
//! A page builds a [`query::Query`] from a resource's hooks and hands it to the
//! [`query::QueryClient`]. Fresh cache entries are served without a request;
//! otherwise the service call runs and the result is cached. Mutations
//! invalidate their declared key prefixes on success, so the next read refetches.
//!
//! ## Environment
//!
//! See [`smartedu_config`] for the variables read at startup. Sessions come from
//! a JSON file (`--session-file`) or `SMARTEDU_*` variables.

pub mod cli;
pub mod components;
pub mod modules;
pub mod query;
pub mod shell;

pub use smartedu_api as api;
pub use smartedu_auth as auth;
pub use smartedu_cache as cache;
pub use smartedu_config as config;
pub use smartedu_core as core;
pub use smartedu_models as models;
pub use smartedu_observability as observability;
