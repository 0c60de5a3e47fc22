//! Per-resolver memo of accessibility answers.
//!
//! Keyed by the exact query `(symbol, within, through)`. The cache lives
//! inside one [`AccessibilityResolver`](crate::AccessibilityResolver), so it
//! never outlives the symbol graph it was computed against. `DashMap` lets
//! concurrent binding threads share one resolver.

use crate::{AccessContext, AccessOutcome};
use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use sharpbind_symbols::SymbolId;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AccessKey {
    pub symbol: SymbolId,
    pub within: AccessContext,
    pub through: Option<SymbolId>,
}

/// Hit/miss counters, for tuning and tests.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AccessCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

#[derive(Default)]
pub struct AccessCache {
    entries: DashMap<AccessKey, AccessOutcome, FxBuildHasher>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl AccessCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &AccessKey) -> Option<AccessOutcome> {
        let found = self.entries.get(key).map(|entry| *entry.value());
        match found {
            Some(_) => self.hits.fetch_add(1, Ordering::Relaxed),
            None => self.misses.fetch_add(1, Ordering::Relaxed),
        };
        found
    }

    pub fn insert(&self, key: AccessKey, outcome: AccessOutcome) {
        self.entries.insert(key, outcome);
    }

    pub fn stats(&self) -> AccessCacheStats {
        AccessCacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.entries.len(),
        }
    }
}
