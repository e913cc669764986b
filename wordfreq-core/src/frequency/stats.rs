//! Statistics and TableStats.

use wordfreq_types::Frequency;

use crate::frequency::types::FrequencyTable;

/// A snapshot of table statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStats {
    /// Number of tokens aggregated.
    pub total_tokens: u64,
    /// Number of distinct words.
    pub distinct_words: usize,
    /// Highest count of any word, 0 when empty.
    pub highest_frequency: Frequency,
}

impl FrequencyTable {
    /// Returns table statistics.
    pub fn stats(&self) -> TableStats {
        TableStats {
            total_tokens: self.total_tokens,
            distinct_words: self.len(),
            highest_frequency: self.highest_frequency(),
        }
    }
}

impl TableStats {
    /// Average occurrences per distinct word, 0.0 when empty.
    pub fn mean_frequency(&self) -> f64 {
        if self.distinct_words == 0 {
            0.0
        } else {
            self.total_tokens as f64 / self.distinct_words as f64
        }
    }
}

impl core::fmt::Display for TableStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} tokens, {} distinct words, highest frequency {}",
            self.total_tokens, self.distinct_words, self.highest_frequency
        )
    }
}
