use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use futures::future::join_all;
use metrics::counter;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use smartedu_api::ApiClient;
use smartedu_cache::{CacheError, FetchTicket, Lookup, QueryCache, QueryKey};
use smartedu_config::QueryConfig;
use smartedu_core::ApiError;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

use super::declaration::FetchFn;
use super::{Mutation, Query, QueryOptions, QueryState};

/// How to refetch a key without knowing its type.
#[derive(Clone)]
struct Refetcher {
    fetch: FetchFn<Value>,
    options: QueryOptions,
}

/// Runs queries and mutations against the shared [`QueryCache`].
///
/// Cheap to clone; clones share the cache and API client.
#[derive(Clone)]
pub struct QueryClient {
    api: ApiClient,
    cache: Arc<QueryCache>,
    defaults: QueryOptions,
    refetchers: Arc<RwLock<HashMap<QueryKey, Refetcher>>>,
}

impl std::fmt::Debug for QueryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryClient")
            .field("api", &self.api)
            .field("entries", &self.cache.len())
            .finish_non_exhaustive()
    }
}

impl QueryClient {
    pub fn new(api: ApiClient, config: &QueryConfig) -> Self {
        Self::with_cache(api, config, Arc::new(QueryCache::new()))
    }

    pub fn with_cache(api: ApiClient, config: &QueryConfig, cache: Arc<QueryCache>) -> Self {
        Self {
            api,
            cache,
            defaults: QueryOptions::from(config),
            refetchers: Arc::default(),
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn cache(&self) -> &Arc<QueryCache> {
        &self.cache
    }

    /// Options a query gets from configuration, before per-query overrides.
    pub fn default_options(&self) -> QueryOptions {
        self.defaults
    }

    /// Resolves a query: cached data while fresh, otherwise a network fetch.
    #[instrument(skip(self, query), fields(query.key = %query.key))]
    pub async fn fetch<T>(&self, query: &Query<T>) -> QueryState<T>
    where
        T: Serialize + DeserializeOwned + Send + 'static,
    {
        let options = query.resolved_options(self.defaults);
        let Some(fetch) = query.fetch.as_ref().filter(|_| options.enabled) else {
            debug!("Query disabled");
            return QueryState::Disabled;
        };

        if let Lookup::Fresh(snapshot) = self.cache.lookup(&query.key) {
            match CacheError::decode(snapshot) {
                Ok(data) => return QueryState::Success(data),
                Err(e) => warn!(error = %e, "Cached snapshot did not decode, refetching"),
            }
        }

        self.register(&query.key, fetch, options);
        self.run_fetch(&query.key, fetch, options).await.into()
    }

    /// Fills the cache for `query` unless it is already fresh.
    pub async fn prefetch<T>(&self, query: &Query<T>) -> Result<(), ApiError>
    where
        T: Serialize + DeserializeOwned + Send + 'static,
    {
        match self.fetch(query).await {
            QueryState::Error(e) => Err(e),
            _ => Ok(()),
        }
    }

    /// Last-known data for `key`, regardless of freshness.
    pub fn get_cached<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        let snapshot = self.cache.get(key)?;
        CacheError::decode(snapshot)
            .map_err(|e| warn!(query.key = %key, error = %e, "Cached snapshot did not decode"))
            .ok()
    }

    /// Seeds `key` with `data`, fresh from now.
    pub fn set_cached<T: Serialize>(&self, key: &QueryKey, data: &T) -> Result<(), CacheError> {
        let snapshot = CacheError::encode(data)?;
        self.cache.set(key, snapshot, self.defaults.entry_options());
        Ok(())
    }

    /// Marks every entry under `prefixes` stale.
    pub fn invalidate(&self, prefixes: &[QueryKey]) -> usize {
        self.cache.invalidate_prefixes(prefixes)
    }

    /// Performs a write. On success every declared prefix is invalidated.
    ///
    /// Writes are never retried and failures invalidate nothing.
    #[instrument(skip(self, mutation, input), fields(mutation = mutation.name))]
    pub async fn mutate<I, O>(&self, mutation: &Mutation<I, O>, input: I) -> Result<O, ApiError> {
        match (mutation.mutate)(self.api.clone(), input).await {
            Ok(output) => {
                let invalidated = self.cache.invalidate_prefixes(&mutation.invalidates);
                counter!("mutations_total", "name" => mutation.name, "status" => "success")
                    .increment(1);
                info!(invalidated, "Mutation succeeded");
                Ok(output)
            }
            Err(e) => {
                counter!("mutations_total", "name" => mutation.name, "status" => "failure")
                    .increment(1);
                warn!(error = %e, "Mutation failed");
                Err(e)
            }
        }
    }

    /// The user returned to the client: refetch stale entries that opted in.
    ///
    /// Returns the keys that were refetched.
    pub async fn on_window_focus(&self) -> Vec<QueryKey> {
        let keys = self.cache.stale_keys_for_focus();
        self.refetch_keys(keys).await
    }

    /// Connectivity was restored: refetch stale entries that opted in.
    pub async fn on_reconnect(&self) -> Vec<QueryKey> {
        let keys = self.cache.stale_keys_for_reconnect();
        self.refetch_keys(keys).await
    }

    /// Periodically evicts entries unused for longer than their retention window.
    pub fn spawn_gc(&self, interval: Duration) -> JoinHandle<()> {
        let cache = Arc::clone(&self.cache);
        let refetchers = Arc::clone(&self.refetchers);

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if cache.evict_unused() > 0 {
                    let live = cache.keys();
                    refetchers
                        .write()
                        .unwrap_or_else(|e| e.into_inner())
                        .retain(|key, _| live.binary_search(key).is_ok());
                }
            }
        })
    }

    async fn refetch_keys(&self, keys: Vec<QueryKey>) -> Vec<QueryKey> {
        let jobs: Vec<_> = {
            let refetchers = self.refetchers.read().unwrap_or_else(|e| e.into_inner());
            keys.into_iter()
                .filter_map(|key| refetchers.get(&key).cloned().map(|r| (key, r)))
                .collect()
        };

        if !jobs.is_empty() {
            debug!(count = jobs.len(), "Refetching stale queries");
        }

        join_all(jobs.into_iter().map(|(key, refetcher)| async move {
            // Errors are recorded on the entry; the page sees them on its next read.
            let _ = self
                .run_fetch(&key, &refetcher.fetch, refetcher.options)
                .await;
            key
        }))
        .await
    }

    fn register<T>(&self, key: &QueryKey, fetch: &FetchFn<T>, options: QueryOptions)
    where
        T: Serialize + Send + 'static,
    {
        let fetch = Arc::clone(fetch);
        let erased: FetchFn<Value> = Arc::new(move |api| {
            let fut = fetch(api);
            Box::pin(async move {
                let data = fut.await?;
                CacheError::encode(&data).map_err(|e| {
                    ApiError::failure(0, format!("Failed to cache response: {e}"))
                })
            })
        });

        self.refetchers
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(
                key.clone(),
                Refetcher {
                    fetch: erased,
                    options,
                },
            );
    }

    /// Fetches with retries and writes the snapshot under a fresh ticket.
    async fn run_fetch<T>(
        &self,
        key: &QueryKey,
        fetch: &FetchFn<T>,
        options: QueryOptions,
    ) -> Result<T, ApiError>
    where
        T: Serialize + DeserializeOwned,
    {
        let ticket = self.cache.begin_fetch(key, options.entry_options());
        let mut attempt = 0;

        loop {
            match fetch(self.api.clone()).await {
                Ok(data) => return Ok(self.store(&ticket, data)),
                Err(e) if e.is_retryable() && attempt < options.retry => {
                    let delay = options.delay_for_attempt(attempt);
                    attempt += 1;
                    counter!("query_retries_total").increment(1);
                    debug!(error = %e, attempt, delay_ms = delay.as_millis() as u64, "Retrying query");
                    tokio::time::sleep(delay).await;
                }
                Err(e) => {
                    self.cache.fail_fetch(&ticket);
                    warn!(query.key = %key, error = %e, "Query failed");
                    return Err(e);
                }
            }
        }
    }

    /// Writes `data` for `ticket`. When a newer response already landed, that
    /// one is returned instead.
    fn store<T>(&self, ticket: &FetchTicket, data: T) -> T
    where
        T: Serialize + DeserializeOwned,
    {
        let snapshot = match CacheError::encode(&data) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(query.key = %ticket.key, error = %e, "Response could not be cached");
                return data;
            }
        };

        if self.cache.complete_fetch(ticket, snapshot) {
            return data;
        }

        self.cache
            .get(&ticket.key)
            .and_then(|newer| CacheError::decode(newer).ok())
            .unwrap_or(data)
    }
}
