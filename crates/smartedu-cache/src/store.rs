//! Process-wide query cache.
//!
//! Entries hold JSON snapshots of server data. Every fetch takes a ticket from a
//! monotonic sequence; a snapshot is only written when its ticket is newer than
//! the one that produced the current data, so a slow response can never
//! overwrite a fresher one.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use metrics::counter;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::time::Instant;
use tracing::{debug, instrument};

use crate::{EntryOptions, QueryKey};

/// Error type for cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CacheError {
    /// Serializes a typed value into a cache snapshot.
    pub fn encode<T: Serialize>(value: &T) -> Result<Value, CacheError> {
        Ok(serde_json::to_value(value)?)
    }

    /// Deserializes a cache snapshot back into a typed value.
    pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, CacheError> {
        Ok(serde_json::from_value(value)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    /// A fetch is in flight.
    Pending,
    Success,
    /// The last fetch failed. Earlier data, if any, is kept.
    Error,
}

/// Result of a cache read.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    /// Data younger than the freshness window and not invalidated.
    Fresh(Value),
    /// The entry exists but must be refetched. Carries the last-known data.
    Stale(Option<Value>),
    Miss,
}

/// Permission to write the result of one fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub key: QueryKey,
    pub seq: u64,
    options: EntryOptions,
}

/// Read-only view of an entry, for diagnostics and tests.
#[derive(Debug, Clone, PartialEq)]
pub struct EntrySnapshot {
    pub status: EntryStatus,
    pub has_data: bool,
    pub is_stale: bool,
    pub invalidated: bool,
    pub invalidation_count: u64,
    pub data_seq: u64,
    pub age: Option<Duration>,
    pub options: EntryOptions,
}

#[derive(Debug)]
struct CacheEntry {
    data: Option<Value>,
    status: EntryStatus,
    updated_at: Option<Instant>,
    last_accessed: Instant,
    /// Sequence of the write that produced `data`.
    data_seq: u64,
    /// Latest ticket issued for this entry.
    pending_seq: u64,
    invalidated: bool,
    /// Last issued sequence at the time of the latest invalidation.
    invalidated_mark: u64,
    invalidation_count: u64,
    options: EntryOptions,
}

impl CacheEntry {
    fn new(options: EntryOptions, now: Instant) -> Self {
        Self {
            data: None,
            status: EntryStatus::Pending,
            updated_at: None,
            last_accessed: now,
            data_seq: 0,
            pending_seq: 0,
            invalidated: false,
            invalidated_mark: 0,
            invalidation_count: 0,
            options,
        }
    }

    fn is_stale(&self, now: Instant) -> bool {
        if self.data.is_none() || self.invalidated {
            return true;
        }
        match self.updated_at {
            Some(updated_at) => now.duration_since(updated_at) >= self.options.stale_time,
            None => true,
        }
    }

    fn is_in_flight(&self) -> bool {
        self.status == EntryStatus::Pending && self.pending_seq > self.data_seq
    }

    fn write(&mut self, seq: u64, value: Value, now: Instant) {
        self.data = Some(value);
        self.data_seq = seq;
        self.updated_at = Some(now);
        self.last_accessed = now;
        self.status = EntryStatus::Success;
        // Invalidations that happened after this fetch was issued still apply.
        self.invalidated = self.invalidated && self.invalidated_mark >= seq;
    }
}

/// In-memory cache shared by every query and mutation.
///
/// Share it behind an `Arc`; all methods take `&self`.
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: RwLock<HashMap<QueryKey, CacheEntry>>,
    seq: AtomicU64,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<QueryKey, CacheEntry>> {
        self.entries.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<QueryKey, CacheEntry>> {
        self.entries.write().unwrap_or_else(|e| e.into_inner())
    }

    fn next_seq(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Reads an entry and records the access.
    #[instrument(skip(self), fields(cache.key = %key))]
    pub fn lookup(&self, key: &QueryKey) -> Lookup {
        let now = Instant::now();
        let mut entries = self.write();

        let Some(entry) = entries.get_mut(key) else {
            counter!("query_cache_lookups_total", "result" => "miss").increment(1);
            debug!("Cache miss");
            return Lookup::Miss;
        };

        entry.last_accessed = now;
        if entry.is_stale(now) {
            counter!("query_cache_lookups_total", "result" => "stale").increment(1);
            debug!(invalidated = entry.invalidated, "Cache entry stale");
            Lookup::Stale(entry.data.clone())
        } else {
            counter!("query_cache_lookups_total", "result" => "hit").increment(1);
            debug!("Cache hit");
            // `is_stale` is true whenever data is absent.
            entry.data.clone().map_or(Lookup::Stale(None), Lookup::Fresh)
        }
    }

    /// Registers a fetch for `key` and returns its ticket.
    ///
    /// Creates the entry when missing and records `options` on it.
    pub fn begin_fetch(&self, key: &QueryKey, options: EntryOptions) -> FetchTicket {
        let now = Instant::now();
        let seq = self.next_seq();
        let mut entries = self.write();

        let entry = entries
            .entry(key.clone())
            .or_insert_with(|| CacheEntry::new(options, now));
        entry.options = options;
        entry.pending_seq = seq;
        entry.status = EntryStatus::Pending;
        entry.last_accessed = now;

        FetchTicket {
            key: key.clone(),
            seq,
            options,
        }
    }

    /// Writes a fetch result. Returns `false` when a newer write already landed.
    #[instrument(skip(self, value), fields(cache.key = %ticket.key, seq = ticket.seq))]
    pub fn complete_fetch(&self, ticket: &FetchTicket, value: Value) -> bool {
        let now = Instant::now();
        let mut entries = self.write();

        let entry = entries
            .entry(ticket.key.clone())
            .or_insert_with(|| CacheEntry::new(ticket.options, now));

        if ticket.seq <= entry.data_seq {
            counter!("query_cache_discarded_writes_total").increment(1);
            debug!(current = entry.data_seq, "Discarding out-of-order response");
            return false;
        }

        entry.write(ticket.seq, value, now);
        true
    }

    /// Records a failed fetch. Last-known data is kept.
    pub fn fail_fetch(&self, ticket: &FetchTicket) {
        let mut entries = self.write();
        if let Some(entry) = entries.get_mut(&ticket.key) {
            if entry.pending_seq == ticket.seq {
                entry.status = EntryStatus::Error;
            }
        }
    }

    /// Returns the last-known data regardless of freshness.
    pub fn get(&self, key: &QueryKey) -> Option<Value> {
        let now = Instant::now();
        let mut entries = self.write();
        let entry = entries.get_mut(key)?;
        entry.last_accessed = now;
        entry.data.clone()
    }

    /// Seeds an entry directly, as if a fetch had just completed.
    pub fn set(&self, key: &QueryKey, value: Value, options: EntryOptions) {
        let ticket = self.begin_fetch(key, options);
        self.complete_fetch(&ticket, value);
    }

    /// Marks a single entry stale. Returns whether it existed.
    pub fn invalidate(&self, key: &QueryKey) -> bool {
        let mark = self.seq.load(Ordering::SeqCst);
        let mut entries = self.write();
        match entries.get_mut(key) {
            Some(entry) => {
                invalidate_entry(entry, mark);
                true
            }
            None => false,
        }
    }

    /// Marks every entry under any of `prefixes` stale.
    ///
    /// An entry matched by several prefixes is invalidated once. Returns the
    /// number of entries invalidated.
    #[instrument(skip(self, prefixes), fields(prefixes = prefixes.len()))]
    pub fn invalidate_prefixes(&self, prefixes: &[QueryKey]) -> usize {
        let mark = self.seq.load(Ordering::SeqCst);
        let mut entries = self.write();

        let mut count = 0;
        for (key, entry) in entries.iter_mut() {
            if prefixes.iter().any(|prefix| key.starts_with(prefix)) {
                invalidate_entry(entry, mark);
                count += 1;
            }
        }

        counter!("query_cache_invalidations_total").increment(count as u64);
        debug!(invalidated = count, "Invalidated cache entries");
        count
    }

    /// Removes entries unused for longer than their retention window.
    ///
    /// Entries with a fetch in flight are kept.
    pub fn evict_unused(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.write();
        let before = entries.len();

        entries.retain(|_, entry| {
            entry.is_in_flight() || now.duration_since(entry.last_accessed) < entry.options.gc_time
        });

        let evicted = before - entries.len();
        if evicted > 0 {
            counter!("query_cache_evictions_total").increment(evicted as u64);
            debug!(evicted, "Evicted unused cache entries");
        }
        evicted
    }

    pub fn inspect(&self, key: &QueryKey) -> Option<EntrySnapshot> {
        let now = Instant::now();
        let entries = self.read();
        entries.get(key).map(|entry| EntrySnapshot {
            status: entry.status,
            has_data: entry.data.is_some(),
            is_stale: entry.is_stale(now),
            invalidated: entry.invalidated,
            invalidation_count: entry.invalidation_count,
            data_seq: entry.data_seq,
            age: entry.updated_at.map(|t| now.duration_since(t)),
            options: entry.options,
        })
    }

    pub fn keys(&self) -> Vec<QueryKey> {
        let mut keys: Vec<_> = self.read().keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn clear(&self) {
        self.write().clear();
    }

    /// Stale entries that opted in to refetch when the user returns.
    pub fn stale_keys_for_focus(&self) -> Vec<QueryKey> {
        self.stale_keys_where(|options| options.refetch_on_window_focus)
    }

    /// Stale entries that opted in to refetch when connectivity returns.
    pub fn stale_keys_for_reconnect(&self) -> Vec<QueryKey> {
        self.stale_keys_where(|options| options.refetch_on_reconnect)
    }

    fn stale_keys_where(&self, opted_in: impl Fn(&EntryOptions) -> bool) -> Vec<QueryKey> {
        let now = Instant::now();
        let mut keys: Vec<_> = self
            .read()
            .iter()
            .filter(|(_, entry)| {
                opted_in(&entry.options) && !entry.is_in_flight() && entry.is_stale(now)
            })
            .map(|(key, _)| key.clone())
            .collect();
        keys.sort();
        keys
    }
}

fn invalidate_entry(entry: &mut CacheEntry, mark: u64) {
    entry.invalidated = true;
    entry.invalidated_mark = mark;
    entry.invalidation_count += 1;
}
