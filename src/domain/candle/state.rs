//! Response cache — bounded FIFO of finished candle series.

use super::Candle;
use crate::network::DEFAULT_CACHE_CAPACITY;
use crate::shared::CacheKey;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

/// Finished series keyed by `symbol|range|interval`.
///
/// Eviction is insertion-ordered: once the store holds more than `capacity`
/// entries, the oldest-inserted key is dropped. Reads do not refresh an entry
/// and overwriting a key keeps its original position. There is no TTL.
#[derive(Debug, Clone)]
pub struct CandleCache {
    entries: HashMap<CacheKey, Arc<[Candle]>>,
    order: VecDeque<CacheKey>,
    capacity: usize,
}

impl Default for CandleCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl CandleCache {
    /// A capacity of 0 is raised to 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: HashMap::with_capacity(capacity + 1),
            order: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn get(&self, key: &CacheKey) -> Option<Arc<[Candle]>> {
        self.entries.get(key).cloned()
    }

    /// Insert or overwrite, then evict the oldest entry if over capacity.
    pub fn set(&mut self, key: CacheKey, candles: Arc<[Candle]>) {
        if self.entries.insert(key.clone(), candles).is_none() {
            self.order.push_back(key);
        }
        if self.entries.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                tracing::debug!(key = %oldest, "Evicted oldest cached series");
                self.entries.remove(&oldest);
            }
        }
    }

    pub fn remove(&mut self, key: &CacheKey) -> Option<Arc<[Candle]>> {
        let removed = self.entries.remove(key)?;
        self.order.retain(|k| k != key);
        Some(removed)
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}
