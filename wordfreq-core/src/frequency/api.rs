//! Public query API.

use log::debug;
use wordfreq_types::{Answer, Frequency, WordFrequency};

use crate::analyzer::WordMatcher;
use crate::frequency::types::FrequencyAnalyzer;
use crate::request::{AnalysisRequest, Query};

impl FrequencyAnalyzer {
    /// Returns the highest occurrence count of any word in `text`.
    ///
    /// Returns 0 when `text` contains no words.
    ///
    /// ```
    /// use wordfreq_core::FrequencyAnalyzer;
    ///
    /// let analyzer = FrequencyAnalyzer::new();
    /// assert_eq!(analyzer.highest_frequency("The quick brown fox jumps over the lazy dog"), 2);
    /// assert_eq!(analyzer.highest_frequency(""), 0);
    /// ```
    pub fn highest_frequency(&self, text: &str) -> Frequency {
        self.analyze(text).highest_frequency()
    }

    /// Returns how many times `word` occurs in `text` as a whole word.
    ///
    /// `word` is lowercased like every token, so case variants are counted
    /// together. It is treated as plain text: a target containing anything
    /// other than ASCII letters can never match and yields 0.
    ///
    /// ```
    /// use wordfreq_core::FrequencyAnalyzer;
    ///
    /// let analyzer = FrequencyAnalyzer::new();
    /// assert_eq!(analyzer.frequency_for_word("apple banana Apple pineapple", "APPLE"), 2);
    /// ```
    pub fn frequency_for_word(&self, text: &str, word: &str) -> Frequency {
        match WordMatcher::new(word) {
            Some(matcher) => matcher.count(text),
            None => {
                debug!("target {:?} cannot match any token", word);
                0
            }
        }
    }

    /// Returns up to `n` most frequent words, ranked.
    ///
    /// Ordered by count descending, then word ascending. `n <= 0` yields
    /// an empty list without looking at the text.
    ///
    /// ```
    /// use wordfreq_core::FrequencyAnalyzer;
    ///
    /// let top = FrequencyAnalyzer::new().most_frequent_n_words("cat bat cat dog bat cat", 2);
    /// let pairs: Vec<(&str, u32)> = top.iter().map(|e| (e.word(), e.frequency())).collect();
    /// assert_eq!(pairs, [("cat", 3), ("bat", 2)]);
    /// ```
    pub fn most_frequent_n_words(&self, text: &str, n: i64) -> Vec<WordFrequency> {
        if n <= 0 {
            return Vec::new();
        }
        let limit = usize::try_from(n).unwrap_or(usize::MAX);
        self.analyze(text).top_n(limit)
    }

    /// Answers a validated request.
    pub fn answer(&self, request: &AnalysisRequest<'_>) -> Answer {
        let text = request.text();
        match request.query() {
            Query::HighestFrequency => Answer::Frequency(self.highest_frequency(text)),
            Query::FrequencyForWord(word) => Answer::Frequency(self.frequency_for_word(text, word)),
            Query::MostFrequentNWords(limit) => Answer::Words(self.analyze(text).top_n(*limit)),
        }
    }
}
