//! Explicit query cache for listings.
//!
//! Listings are served from here until a write invalidates them. The cache is
//! passed to the operations that read or write it instead of living in global
//! state; clones share the same storage.

use crate::entities::{ReceiptModel, StudentModel};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, trace};

/// Identifies a cached listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// All receipts, newest first
    Receipts,
    /// All students, newest first
    Students,
}

/// A cached listing.
#[derive(Debug, Clone, PartialEq)]
pub enum CachedValue {
    /// Receipt listing
    Receipts(Vec<ReceiptModel>),
    /// Student listing
    Students(Vec<StudentModel>),
}

/// Shared cache of fetched listings.
#[derive(Debug, Clone, Default)]
pub struct QueryCache {
    entries: Arc<RwLock<HashMap<CacheKey, CachedValue>>>,
}

impl QueryCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached value for `key`, if any.
    pub async fn get(&self, key: CacheKey) -> Option<CachedValue> {
        let entries = self.entries.read().await;
        let hit = entries.get(&key).cloned();
        trace!("Cache {} for {key:?}", if hit.is_some() { "hit" } else { "miss" });
        hit
    }

    /// Stores `value` under `key`, replacing any previous entry.
    pub async fn set(&self, key: CacheKey, value: CachedValue) {
        self.entries.write().await.insert(key, value);
        debug!("Cache populated for {key:?}");
    }

    /// Drops the entry for `key` so the next read goes to the database.
    pub async fn invalidate(&self, key: CacheKey) {
        if self.entries.write().await.remove(&key).is_some() {
            debug!("Cache invalidated for {key:?}");
        }
    }

    /// Cached receipt listing, if present.
    pub async fn receipts(&self) -> Option<Vec<ReceiptModel>> {
        match self.get(CacheKey::Receipts).await? {
            CachedValue::Receipts(receipts) => Some(receipts),
            CachedValue::Students(_) => None,
        }
    }

    /// Cached student listing, if present.
    pub async fn students(&self) -> Option<Vec<StudentModel>> {
        match self.get(CacheKey::Students).await? {
            CachedValue::Students(students) => Some(students),
            CachedValue::Receipts(_) => None,
        }
    }
}
