//! Core types for the wordfreq analyzer.
//!
//! This crate provides the value types shared between the analysis engine
//! and its front ends. Keeping them separate means:
//!
//! - **No engine dependency**: front ends can render results without
//!   pulling in rayon or the hashing stack
//! - **One ordering**: every consumer ranks entries with the same comparator
//! - **Optional serialization**: the `serde` feature adds `Serialize` /
//!   `Deserialize` without burdening library users who don't need it

#![warn(missing_docs)]

use core::cmp::Ordering;
use core::fmt;

/// Occurrence count of a word.
///
/// 32 bits covers any text that fits comfortably in memory: a token needs
/// at least two bytes (letter + separator), so overflow needs more than 8 GiB
/// of input. Aggregation saturates instead of wrapping.
pub type Frequency = u32;

/// A word together with its number of occurrences.
///
/// Entries are immutable once built. Their [`Ord`] is the *ranking* order:
/// higher frequency first, then the word in ascending byte order. Sorting a
/// slice of entries ascending therefore yields the top-N order directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordFrequency {
    word: Box<str>,
    frequency: Frequency,
}

impl WordFrequency {
    /// Creates a new entry.
    #[inline]
    pub fn new(word: impl Into<Box<str>>, frequency: Frequency) -> Self {
        Self {
            word: word.into(),
            frequency,
        }
    }

    /// The normalized word.
    #[inline(always)]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// How many times the word occurred.
    #[inline(always)]
    #[must_use]
    pub const fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Ranking comparator: frequency descending, then word ascending.
    ///
    /// Total and deterministic; two entries compare `Equal` only when both
    /// fields are equal.
    #[inline]
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .frequency
            .cmp(&self.frequency)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for WordFrequency {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WordFrequency {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank_cmp(other)
    }
}

impl fmt::Display for WordFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.word, self.frequency)
    }
}

/// How the word→count table is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Aggregation {
    /// Parallel for inputs at or above the configured threshold, sequential otherwise.
    #[default]
    Auto,
    /// Single linear scan on the calling thread.
    Sequential,
    /// Chunked fan-out on the rayon pool into a sharded, lock-protected table.
    Parallel,
}

impl Aggregation {
    /// Parses a strategy name (`auto`, `sequential`, `parallel`), ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("auto") {
            Some(Aggregation::Auto)
        } else if name.eq_ignore_ascii_case("sequential") {
            Some(Aggregation::Sequential)
        } else if name.eq_ignore_ascii_case("parallel") {
            Some(Aggregation::Parallel)
        } else {
            None
        }
    }
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Aggregation::Auto => "auto",
            Aggregation::Sequential => "sequential",
            Aggregation::Parallel => "parallel",
        })
    }
}

/// Analyzer configuration options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Aggregation strategy.
    pub aggregation: Aggregation,
    /// Minimum input size in bytes before `Auto` goes parallel.
    /// Default: 256 KiB
    pub parallel_threshold: usize,
    /// Number of chunks the text is split into for parallel aggregation.
    /// `0` means one per rayon worker thread.
    pub workers: usize,
    /// Number of lock-protected shards in the parallel table.
    /// Values below 1 are treated as 1.
    pub shards: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            aggregation: Aggregation::Auto,
            parallel_threshold: 256 * 1024,
            workers: 0,
            shards: 16,
        }
    }
}

impl AnalyzerConfig {
    /// Always aggregates on the calling thread.
    pub const fn sequential() -> Self {
        Self {
            aggregation: Aggregation::Sequential,
            parallel_threshold: usize::MAX,
            workers: 1,
            shards: 1,
        }
    }

    /// Always fans out, regardless of input size.
    pub const fn parallel() -> Self {
        Self {
            aggregation: Aggregation::Parallel,
            parallel_threshold: 0,
            workers: 0,
            shards: 16,
        }
    }
}

/// Result of a validated request, in the shape a front end returns it.
///
/// With the `serde` feature this serializes untagged: a bare integer for a
/// single count, or a list of `{"word": .., "frequency": ..}` objects.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Answer {
    /// A single count (highest frequency, or frequency of one word).
    Frequency(Frequency),
    /// Ranked entries of a top-N query.
    Words(Vec<WordFrequency>),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Frequency(n) => write!(f, "{}", n),
            Answer::Words(words) => {
                for (i, entry) in words.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}", entry)?;
                }
                Ok(())
            }
        }
    }
}

/// Errors raised while validating a request at the system boundary.
///
/// The analysis engine itself never fails; these describe client input that
/// must be rejected before the engine is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// Text was missing or contained only whitespace.
    EmptyText,
    /// Target word was missing or contained only whitespace.
    EmptyWord,
    /// Result limit `n` was not supplied.
    MissingLimit,
    /// Result limit `n` was not an integer.
    InvalidLimit {
        /// The raw value that failed to parse.
        raw: String,
    },
    /// Result limit `n` was zero or negative.
    NonPositiveLimit {
        /// The rejected value.
        n: i64,
    },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::EmptyText => write!(f, "input text cannot be null or empty"),
            RequestError::EmptyWord => write!(f, "word parameter cannot be null or empty"),
            RequestError::MissingLimit => write!(f, "number of words (n) is required"),
            RequestError::InvalidLimit { raw } => {
                write!(f, "number of words (n) must be an integer, got {:?}", raw)
            }
            RequestError::NonPositiveLimit { n } => {
                write!(f, "number of words (n) must be greater than 0, got {}", n)
            }
        }
    }
}

impl core::error::Error for RequestError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranking_orders_by_frequency_then_word() {
        let mut entries = vec![
            WordFrequency::new("bat", 2),
            WordFrequency::new("dog", 1),
            WordFrequency::new("cat", 3),
            WordFrequency::new("ant", 2),
        ];
        entries.sort();

        let words: Vec<&str> = entries.iter().map(WordFrequency::word).collect();
        assert_eq!(words, ["cat", "ant", "bat", "dog"]);
    }

    #[test]
    fn rank_cmp_is_total() {
        let a = WordFrequency::new("same", 4);
        let b = WordFrequency::new("same", 4);
        assert_eq!(a.rank_cmp(&b), Ordering::Equal);
        assert_eq!(a, b);

        let higher = WordFrequency::new("zebra", 5);
        assert_eq!(higher.rank_cmp(&a), Ordering::Less);
        assert_eq!(a.rank_cmp(&higher), Ordering::Greater);
    }

    #[test]
    fn entry_display() {
        assert_eq!(WordFrequency::new("cat", 3).to_string(), "cat: 3");
    }

    #[test]
    fn aggregation_from_name() {
        assert_eq!(Aggregation::from_name("auto"), Some(Aggregation::Auto));
        assert_eq!(
            Aggregation::from_name("Parallel"),
            Some(Aggregation::Parallel)
        );
        assert_eq!(
            Aggregation::from_name("SEQUENTIAL"),
            Some(Aggregation::Sequential)
        );
        assert_eq!(Aggregation::from_name("threads"), None);

        for strategy in [
            Aggregation::Auto,
            Aggregation::Sequential,
            Aggregation::Parallel,
        ] {
            assert_eq!(Aggregation::from_name(&strategy.to_string()), Some(strategy));
        }
    }

    #[test]
    fn config_presets() {
        let d = AnalyzerConfig::default();
        assert_eq!(d.aggregation, Aggregation::Auto);
        assert_eq!(d.parallel_threshold, 256 * 1024);

        assert_eq!(
            AnalyzerConfig::sequential().aggregation,
            Aggregation::Sequential
        );
        assert_eq!(AnalyzerConfig::parallel().parallel_threshold, 0);
    }

    #[test]
    fn answer_display() {
        assert_eq!(Answer::Frequency(7).to_string(), "7");

        let words = Answer::Words(vec![
            WordFrequency::new("cat", 3),
            WordFrequency::new("bat", 2),
        ]);
        assert_eq!(words.to_string(), "cat: 3\nbat: 2");
        assert_eq!(Answer::Words(Vec::new()).to_string(), "");
    }

    #[test]
    fn request_error_messages() {
        assert_eq!(
            RequestError::EmptyText.to_string(),
            "input text cannot be null or empty"
        );
        assert_eq!(
            RequestError::NonPositiveLimit { n: -3 }.to_string(),
            "number of words (n) must be greater than 0, got -3"
        );
        assert!(RequestError::InvalidLimit { raw: "ten".into() }
            .to_string()
            .contains("\"ten\""));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn answer_serializes_untagged() {
        let words = Answer::Words(vec![WordFrequency::new("cat", 3)]);
        assert_eq!(
            serde_json::to_string(&words).unwrap(),
            r#"[{"word":"cat","frequency":3}]"#
        );
        assert_eq!(serde_json::to_string(&Answer::Frequency(2)).unwrap(), "2");
    }
}
