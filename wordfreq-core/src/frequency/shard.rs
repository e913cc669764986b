//! Lock-sharded word table for parallel aggregation.

use core::hash::BuildHasher;
use core::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use rustc_hash::{FxBuildHasher, FxHashMap};
use wordfreq_types::Frequency;

use crate::frequency::types::FrequencyTable;

/// Word table split into independently locked shards.
///
/// A word always lands in the same shard, so increments to one key are
/// serialized by that shard's lock and none is lost. Different words
/// usually live in different shards and proceed without contention.
///
/// The token total is tracked apart from the counts, so it stays exact
/// when a count saturates, as it does in a sequentially built table.
pub(crate) struct ShardedTable {
    shards: Box<[Mutex<FxHashMap<Box<str>, Frequency>>]>,
    total_tokens: AtomicU64,
}

impl ShardedTable {
    /// Creates a table with `shards` shards (at least one).
    pub(crate) fn new(shards: usize) -> Self {
        let shards = (0..shards.max(1))
            .map(|_| Mutex::new(FxHashMap::default()))
            .collect();
        Self {
            shards,
            total_tokens: AtomicU64::new(0),
        }
    }

    #[inline]
    fn shard_of(&self, word: &str) -> usize {
        let hash = FxBuildHasher.hash_one(word);
        // hashbrown buckets by the low bits and tags by the top seven.
        ((hash >> 32) as usize) % self.shards.len()
    }

    #[inline]
    fn add_count(&self, word: Box<str>, count: Frequency) {
        let mut shard = self.shards[self.shard_of(&word)].lock();
        let slot = shard.entry(word).or_insert(0);
        *slot = slot.saturating_add(count);
    }

    /// Adds `count` occurrences of `word`.
    #[cfg(test)]
    pub(crate) fn add(&self, word: Box<str>, count: Frequency) {
        self.add_count(word, count);
        self.total_tokens
            .fetch_add(u64::from(count), Ordering::Relaxed);
    }

    /// Folds a partial table into the shards.
    pub(crate) fn merge(&self, partial: FrequencyTable) {
        self.total_tokens
            .fetch_add(partial.total_tokens, Ordering::Relaxed);
        for (word, count) in partial.counts {
            self.add_count(word, count);
        }
    }

    /// Consumes the shards into a single table.
    ///
    /// Taking `self` by value means every worker holding a reference has
    /// finished, so the result is a complete snapshot.
    pub(crate) fn into_table(self) -> FrequencyTable {
        let shards: Vec<FxHashMap<Box<str>, Frequency>> = self
            .shards
            .into_vec()
            .into_iter()
            .map(|shard| shard.into_inner())
            .collect();

        let distinct = shards.iter().map(FxHashMap::len).sum();
        let mut counts = FxHashMap::with_capacity_and_hasher(distinct, FxBuildHasher);

        for shard in shards {
            counts.extend(shard);
        }

        FrequencyTable::from_parts(counts, self.total_tokens.into_inner())
    }
}
