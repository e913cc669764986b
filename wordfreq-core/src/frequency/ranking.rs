//! Ranked selection.

use core::cmp::Ordering;

use wordfreq_types::{Frequency, WordFrequency};

use crate::frequency::types::FrequencyTable;

/// Count descending, then word ascending. Same order as `WordFrequency::rank_cmp`.
#[inline(always)]
fn rank(a: &(&str, Frequency), b: &(&str, Frequency)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))
}

impl FrequencyTable {
    /// Returns the `limit` highest-ranked entries.
    ///
    /// Ordered by count descending, ties broken by the word in ascending
    /// order. Words are unique, so the order is total and the output is
    /// identical on every call.
    #[inline(never)]
    pub fn top_n(&self, limit: usize) -> Vec<WordFrequency> {
        if limit == 0 || self.is_empty() {
            return Vec::new();
        }

        let mut entries: Vec<(&str, Frequency)> = self.iter().collect();

        if entries.len() > limit {
            entries.select_nth_unstable_by(limit, rank);
            entries.truncate(limit);
        }
        entries.sort_unstable_by(rank);

        entries
            .into_iter()
            .map(|(word, count)| WordFrequency::new(word, count))
            .collect()
    }

    /// Consumes the table into all of its entries, ranked.
    pub fn into_ranked(self) -> Vec<WordFrequency> {
        let mut entries: Vec<WordFrequency> = self
            .counts
            .into_iter()
            .map(|(word, count)| WordFrequency::new(word, count))
            .collect();
        entries.sort_unstable();
        entries
    }
}
