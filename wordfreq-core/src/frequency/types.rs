//! Frequency table and analyzer types.

use rustc_hash::FxHashMap;
use wordfreq_types::{Aggregation, AnalyzerConfig, Frequency};

/// Word → occurrence count, built fresh for one analysis call.
///
/// Every stored count is at least 1 and the counts sum to
/// [`total_tokens`](Self::total_tokens) unless a count saturated at
/// `Frequency::MAX`; the total always counts every token. Tables are never
/// shared between calls; the caller owns the result outright.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    pub(crate) counts: FxHashMap<Box<str>, Frequency>,
    pub(crate) total_tokens: u64,
}

impl FrequencyTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(counts: FxHashMap<Box<str>, Frequency>, total_tokens: u64) -> Self {
        debug_assert!(counts.values().all(|&c| c >= 1));
        Self {
            counts,
            total_tokens,
        }
    }

    /// Counts one occurrence of an already-normalized token.
    #[inline]
    pub(crate) fn record(&mut self, token: &str) {
        match self.counts.get_mut(token) {
            Some(count) => *count = count.saturating_add(1),
            None => {
                self.counts.insert(token.into(), 1);
            }
        }
        self.total_tokens += 1;
    }

    /// Returns the count for a normalized word, if it occurred.
    #[inline]
    #[must_use]
    pub fn get(&self, word: &str) -> Option<Frequency> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if the text contained no tokens.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of tokens aggregated into the table.
    #[inline(always)]
    #[must_use]
    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }

    /// Highest count in the table, or 0 when empty.
    #[must_use]
    pub fn highest_frequency(&self) -> Frequency {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// Iterates `(word, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Frequency)> + '_ {
        self.counts.iter().map(|(w, &c)| (&**w, c))
    }
}

/// Word frequency analyzer.
///
/// Holds configuration only. Each query tokenizes and aggregates its own
/// text into a private table, so one analyzer can serve any number of
/// threads at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrequencyAnalyzer {
    pub(crate) config: AnalyzerConfig,
}

impl FrequencyAnalyzer {
    /// Creates an analyzer with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an analyzer with a custom configuration.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    #[inline(always)]
    #[must_use]
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Chunks used for parallel aggregation.
    pub(crate) fn worker_count(&self) -> usize {
        match self.config.workers {
            0 => rayon::current_num_threads(),
            n => n,
        }
    }

    /// Resolves `Auto` against the size of `text`.
    pub(crate) fn strategy_for(&self, text: &str) -> Aggregation {
        match self.config.aggregation {
            Aggregation::Auto => {
                if text.len() >= self.config.parallel_threshold && self.worker_count() > 1 {
                    Aggregation::Parallel
                } else {
                    Aggregation::Sequential
                }
            }
            fixed => fixed,
        }
    }
}
