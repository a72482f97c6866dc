//! Query and mutation layer.
//!
//! A [`Query`] pairs a cache key with a fetch function; a [`Mutation`] pairs a
//! write with the key prefixes it makes stale. [`QueryClient`] runs both
//! against the process-wide cache and reports results as [`QueryState`].
//!
//! # Example
//!
//! ```ignore
//! let client = QueryClient::new(api, &QueryConfig::from_env());
//!
//! let state = client.fetch(&subjects::hooks::list()).await;
//! client.mutate(&subjects::hooks::delete(), subject_id).await?;
//! // the next `fetch` of the subject list goes to the network
//! ```

mod client;
mod declaration;
mod options;
mod state;

pub use client::QueryClient;
pub use declaration::{Mutation, Query};
pub use options::QueryOptions;
pub use state::QueryState;
