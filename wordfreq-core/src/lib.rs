//! Word frequency analysis engine.
//!
//! Answers three questions about a block of text:
//!
//! - the highest occurrence count of any word ([`highest_frequency`])
//! - the occurrence count of one word ([`frequency_for_word`])
//! - the `n` most frequent words, ties broken alphabetically
//!   ([`most_frequent_n_words`])
//!
//! A word is a maximal run of ASCII letters, lowercased. Everything else
//! (digits, punctuation, apostrophes, whitespace, non-ASCII characters)
//! separates words.
//!
//! ```
//! use wordfreq_core::{frequency_for_word, highest_frequency, most_frequent_n_words};
//!
//! let text = "cat bat cat dog bat cat";
//! assert_eq!(highest_frequency(text), 3);
//! assert_eq!(frequency_for_word(text, "Bat"), 2);
//!
//! let top = most_frequent_n_words(text, 2);
//! assert_eq!(top[0].word(), "cat");
//! assert_eq!(top[1].word(), "bat");
//! ```
//!
//! Large inputs can be aggregated in parallel; see [`AnalyzerConfig`].

pub mod analyzer;
pub mod frequency;
pub mod request;

pub use frequency::{FrequencyAnalyzer, FrequencyTable, TableStats};
pub use request::{AnalysisRequest, Query};
pub use wordfreq_types::{
    Aggregation, AnalyzerConfig, Answer, Frequency, RequestError, WordFrequency,
};

/// Highest occurrence count of any word in `text`, using the default analyzer.
pub fn highest_frequency(text: &str) -> Frequency {
    FrequencyAnalyzer::new().highest_frequency(text)
}

/// Whole-word, case-insensitive count of `word` in `text`.
pub fn frequency_for_word(text: &str, word: &str) -> Frequency {
    FrequencyAnalyzer::new().frequency_for_word(text, word)
}

/// Up to `n` most frequent words in `text`, ranked by count then word.
pub fn most_frequent_n_words(text: &str, n: i64) -> Vec<WordFrequency> {
    FrequencyAnalyzer::new().most_frequent_n_words(text, n)
}
