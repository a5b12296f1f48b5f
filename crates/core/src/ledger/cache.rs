//! Materialised party balance cache using Moka.
//!
//! Full replay on every read is fine for hundreds to thousands of entries.
//! For larger histories a caller can hold this cache keyed by party and
//! invalidate a party whenever its entry list changes.

use moka::sync::Cache;
use std::sync::Arc;
use std::time::Duration;
use tilebook_shared::config::LedgerConfig;

use super::balance::{PartyBalance, fold_party, party_key};
use super::entry::FinanceEntry;

/// Default cache capacity (number of parties).
const DEFAULT_CACHE_CAPACITY: u64 = 1_000;

/// Default time-to-live for cache entries (5 minutes).
const DEFAULT_TTL_SECS: u64 = 300;

/// Cache of per-party balances.
///
/// Thread-safe and suitable for concurrent access. The cache never looks at
/// entries itself: a stale party must be invalidated explicitly.
#[derive(Clone)]
pub struct BalanceCache {
    cache: Cache<String, Arc<PartyBalance>>,
}

impl BalanceCache {
    /// Creates a cache with default settings (1000 parties, 5 minute TTL).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_CACHE_CAPACITY, DEFAULT_TTL_SECS)
    }

    /// Creates a cache with custom capacity and TTL.
    #[must_use]
    pub fn with_config(max_capacity: u64, ttl_secs: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache }
    }

    /// Creates a cache from ledger configuration.
    #[must_use]
    pub fn from_config(config: &LedgerConfig) -> Self {
        Self::with_config(config.balance_cache_capacity, config.balance_cache_ttl_secs)
    }

    /// Returns the party's balance, folding `entries` only on a miss.
    #[must_use]
    pub fn balance_for(&self, party: &str, entries: &[FinanceEntry]) -> PartyBalance {
        let key = party_key(party).to_string();

        if let Some(cached) = self.cache.get(&key) {
            tracing::debug!(party = %key, "balance cache hit");
            return (*cached).clone();
        }

        tracing::debug!(party = %key, "balance cache miss");
        let balance = fold_party(entries, &key);
        self.cache.insert(key, Arc::new(balance.clone()));
        balance
    }

    /// Returns true if the party is cached.
    #[must_use]
    pub fn contains(&self, party: &str) -> bool {
        self.cache.contains_key(party_key(party))
    }

    /// Invalidates one party, e.g. after an entry for it was added or removed.
    pub fn invalidate(&self, party: &str) {
        self.cache.invalidate(party_key(party));
    }

    /// Invalidates all cached balances.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Returns the number of parties currently cached.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Runs pending cache maintenance (eviction, invalidation).
    pub fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks();
    }
}

impl Default for BalanceCache {
    fn default() -> Self {
        Self::new()
    }
}
