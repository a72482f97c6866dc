use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use smartedu_api::ApiClient;
use smartedu_cache::QueryKey;
use smartedu_core::ApiError;

use super::QueryOptions;

pub(crate) type FetchFn<T> =
    Arc<dyn Fn(ApiClient) -> BoxFuture<'static, Result<T, ApiError>> + Send + Sync>;

pub(crate) type MutateFn<I, O> =
    Arc<dyn Fn(ApiClient, I) -> BoxFuture<'static, Result<O, ApiError>> + Send + Sync>;

/// A cached read: key, fetch function and option overrides.
///
/// Without overrides the query runs with the client's configured defaults.
pub struct Query<T> {
    pub(crate) key: QueryKey,
    pub(crate) fetch: Option<FetchFn<T>>,
    pub(crate) options: Option<QueryOptions>,
    pub(crate) refetch_on_events: bool,
}

impl<T> Clone for Query<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            fetch: self.fetch.clone(),
            options: self.options,
            refetch_on_events: self.refetch_on_events,
        }
    }
}

impl<T> fmt::Debug for Query<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("key", &self.key)
            .field("enabled", &self.is_enabled())
            .finish_non_exhaustive()
    }
}

impl<T: 'static> Query<T> {
    pub fn new<F, Fut>(key: QueryKey, fetch: F) -> Self
    where
        F: Fn(ApiClient) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, ApiError>> + Send + 'static,
    {
        Self {
            key,
            fetch: Some(Arc::new(move |api| fetch(api).boxed())),
            options: None,
            refetch_on_events: true,
        }
    }

    /// A query whose precondition is missing. Always resolves to `Disabled`.
    pub fn disabled(key: QueryKey) -> Self {
        Self {
            key,
            fetch: None,
            options: None,
            refetch_on_events: true,
        }
    }

    /// Builds the query when `value` is present, otherwise a disabled query.
    pub fn when<V, B>(key: QueryKey, value: Option<V>, build: B) -> Self
    where
        B: FnOnce(V) -> Self,
    {
        match value {
            Some(value) => build(value),
            None => Self::disabled(key),
        }
    }
}

impl<T> Query<T> {
    /// Overrides the client defaults. A query without a fetch function stays disabled.
    pub fn with_options(mut self, options: QueryOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Skips refetching on window focus and reconnect, whatever the
    /// defaults or overrides say. For views that don't need live data.
    pub fn without_event_refetch(mut self) -> Self {
        self.refetch_on_events = false;
        self
    }

    /// The options this query runs with under the client's `defaults`.
    pub fn resolved_options(&self, defaults: QueryOptions) -> QueryOptions {
        let options = self.options.unwrap_or(defaults);
        if self.refetch_on_events {
            options
        } else {
            options
                .refetch_on_window_focus(false)
                .refetch_on_reconnect(false)
        }
    }

    pub fn key(&self) -> &QueryKey {
        &self.key
    }

    pub fn options(&self) -> Option<&QueryOptions> {
        self.options.as_ref()
    }

    pub fn is_enabled(&self) -> bool {
        self.fetch.is_some() && self.options.is_none_or(|options| options.enabled)
    }
}

/// A write plus the key prefixes it makes stale on success.
pub struct Mutation<I, O> {
    pub(crate) name: &'static str,
    pub(crate) mutate: MutateFn<I, O>,
    pub(crate) invalidates: Vec<QueryKey>,
}

impl<I, O> Clone for Mutation<I, O> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            mutate: self.mutate.clone(),
            invalidates: self.invalidates.clone(),
        }
    }
}

impl<I, O> fmt::Debug for Mutation<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mutation")
            .field("name", &self.name)
            .field("invalidates", &self.invalidates)
            .finish_non_exhaustive()
    }
}

impl<I: 'static, O: 'static> Mutation<I, O> {
    pub fn new<F, Fut>(name: &'static str, mutate: F) -> Self
    where
        F: Fn(ApiClient, I) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<O, ApiError>> + Send + 'static,
    {
        Self {
            name,
            mutate: Arc::new(move |api, input| mutate(api, input).boxed()),
            invalidates: Vec::new(),
        }
    }

    /// Adds key prefixes invalidated after a successful write.
    pub fn invalidates<K>(mut self, keys: K) -> Self
    where
        K: IntoIterator<Item = QueryKey>,
    {
        self.invalidates.extend(keys);
        self
    }
}

impl<I, O> Mutation<I, O> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn invalidated_keys(&self) -> &[QueryKey] {
        &self.invalidates
    }
}
