//! Frequency aggregation and queries.
//!
//! Every query runs the same pipeline over its own input:
//! tokenize → aggregate into a [`FrequencyTable`] → reduce (max, lookup, or
//! ranked top-N). Nothing is kept between calls.
//!
//! Aggregation:
//! - Sequential: one linear scan into an `FxHashMap`
//! - Parallel: the text is cut on separators, chunks are counted on the
//!   rayon pool and merged into a lock-sharded table. The fan-out joins
//!   before the table is read, so reductions always see every token.
//!
//! Threading:
//! - [`FrequencyAnalyzer`] carries configuration only and is `Send + Sync`.

mod api;
mod builder;
mod ranking;
mod shard;
mod stats;
mod types;

pub use stats::TableStats;
pub use types::{FrequencyAnalyzer, FrequencyTable};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::Tokenizer;
    use crate::request::AnalysisRequest;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use wordfreq_types::{Aggregation, AnalyzerConfig, Answer, Frequency, WordFrequency};

    fn pairs(entries: &[WordFrequency]) -> Vec<(&str, Frequency)> {
        entries.iter().map(|e| (e.word(), e.frequency())).collect()
    }

    fn analyzers() -> [FrequencyAnalyzer; 3] {
        [
            FrequencyAnalyzer::new(),
            FrequencyAnalyzer::with_config(AnalyzerConfig::sequential()),
            FrequencyAnalyzer::with_config(AnalyzerConfig {
                workers: 4,
                shards: 3,
                ..AnalyzerConfig::parallel()
            }),
        ]
    }

    #[test]
    fn highest_frequency_basic() {
        for a in analyzers() {
            assert_eq!(
                a.highest_frequency("The quick brown fox jumps over the lazy dog"),
                2
            );
            assert_eq!(a.highest_frequency("The sun shines over the lake"), 2);
        }
    }

    #[test]
    fn empty_text() {
        for a in analyzers() {
            assert_eq!(a.highest_frequency(""), 0);
            assert_eq!(a.frequency_for_word("", "the"), 0);
            assert!(a.most_frequent_n_words("", 5).is_empty());
            assert!(a.analyze("").is_empty());
        }
    }

    #[test]
    fn no_alphabetic_runs() {
        for a in analyzers() {
            assert_eq!(a.highest_frequency("123 456 ... ?!"), 0);
            assert!(a.most_frequent_n_words("  \t\n ", 3).is_empty());
        }
    }

    #[test]
    fn case_insensitive_counting() {
        for a in analyzers() {
            assert_eq!(a.highest_frequency("Hello hello HELLO world"), 3);
            assert_eq!(a.frequency_for_word("Hello hello HELLO", "hello"), 3);
        }
    }

    #[test]
    fn frequency_for_word_basic() {
        let a = FrequencyAnalyzer::new();
        assert_eq!(
            a.frequency_for_word("apple banana apple orange apple", "apple"),
            3
        );
        assert_eq!(a.frequency_for_word("apple banana", "cherry"), 0);
        assert_eq!(a.frequency_for_word("don't stop", "don't"), 0);
    }

    #[test]
    fn punctuation_stripped() {
        let text = "Hello, world! How are you? I'm fine, thanks.";
        let a = FrequencyAnalyzer::new();
        assert_eq!(a.highest_frequency(text), 1);

        let table = a.analyze(text);
        assert_eq!(table.get("i"), Some(1));
        assert_eq!(table.get("m"), Some(1));
        assert_eq!(table.get("i'm"), None);
        assert_eq!(table.len(), 9);
    }

    #[test]
    fn most_frequent_basic() {
        for a in analyzers() {
            let top = a.most_frequent_n_words("cat bat cat dog bat cat", 2);
            assert_eq!(pairs(&top), [("cat", 3), ("bat", 2)]);
        }
    }

    #[test]
    fn most_frequent_non_positive_n() {
        let a = FrequencyAnalyzer::new();
        assert!(a.most_frequent_n_words("cat bat cat", 0).is_empty());
        assert!(a.most_frequent_n_words("cat bat cat", -1).is_empty());
        assert!(a.most_frequent_n_words("cat bat cat", i64::MIN).is_empty());
    }

    #[test]
    fn most_frequent_n_beyond_distinct() {
        let a = FrequencyAnalyzer::new();
        let top = a.most_frequent_n_words("b a c a", 10);
        assert_eq!(pairs(&top), [("a", 2), ("b", 1), ("c", 1)]);

        let top = a.most_frequent_n_words("b a c a", i64::MAX);
        assert_eq!(top.len(), 3);
    }

    #[test]
    fn ties_broken_alphabetically() {
        let a = FrequencyAnalyzer::new();
        let top = a.most_frequent_n_words("pear fig apple fig pear apple kiwi", 3);
        assert_eq!(pairs(&top), [("apple", 2), ("fig", 2), ("pear", 2)]);

        let top = a.most_frequent_n_words("zeta alpha mu", 2);
        assert_eq!(pairs(&top), [("alpha", 1), ("mu", 1)]);
    }

    #[test]
    fn ranking_is_deterministic() {
        let text = "one two three two three three four four four four five";
        let a = FrequencyAnalyzer::new();
        let first = a.most_frequent_n_words(text, 3);
        for _ in 0..10 {
            assert_eq!(a.most_frequent_n_words(text, 3), first);
        }
        assert_eq!(
            pairs(&first),
            [("four", 4), ("three", 3), ("two", 2)]
        );
    }

    #[test]
    fn top_n_is_prefix_of_full_ranking() {
        let text = "d c b a d c b d c d e f g e";
        let table = FrequencyAnalyzer::new().analyze(text);
        let full = table.clone().into_ranked();
        for n in 0..=full.len() + 2 {
            let top = table.top_n(n);
            assert_eq!(top.as_slice(), &full[..n.min(full.len())]);
        }
    }

    #[test]
    fn table_invariants() {
        let text = "It was the best of times, it was the worst of times; 1859!";
        let table = FrequencyAnalyzer::new().analyze(text);

        let sum: u64 = table.iter().map(|(_, c)| u64::from(c)).sum();
        assert_eq!(sum, table.total_tokens());
        assert_eq!(table.total_tokens(), Tokenizer::new().count(text) as u64);
        assert!(table.iter().all(|(_, c)| c >= 1));
        assert_eq!(
            table.highest_frequency(),
            table.iter().map(|(_, c)| c).max().unwrap_or(0)
        );
    }

    #[test]
    fn ranked_counts_sum_to_tokens() {
        let text = "a b c a b a, Z z z? q";
        let a = FrequencyAnalyzer::new();
        let distinct = a.analyze(text).len() as i64;
        let total: u64 = a
            .most_frequent_n_words(text, distinct)
            .iter()
            .map(|e| u64::from(e.frequency()))
            .sum();
        assert_eq!(total, Tokenizer::new().count(text) as u64);
    }

    #[test]
    fn stats_snapshot() {
        let stats = FrequencyAnalyzer::new().analyze("cat bat cat dog").stats();
        assert_eq!(stats.total_tokens, 4);
        assert_eq!(stats.distinct_words, 3);
        assert_eq!(stats.highest_frequency, 2);
        assert!((stats.mean_frequency() - 4.0 / 3.0).abs() < 1e-9);
        assert_eq!(
            stats.to_string(),
            "4 tokens, 3 distinct words, highest frequency 2"
        );

        let empty = FrequencyAnalyzer::new().analyze("").stats();
        assert_eq!(empty.mean_frequency(), 0.0);
    }

    #[test]
    fn auto_strategy_respects_threshold() {
        let a = FrequencyAnalyzer::with_config(AnalyzerConfig {
            parallel_threshold: 10,
            workers: 2,
            ..AnalyzerConfig::default()
        });
        assert_eq!(a.strategy_for("short"), Aggregation::Sequential);
        assert_eq!(a.strategy_for("long enough text"), Aggregation::Parallel);

        let single = FrequencyAnalyzer::with_config(AnalyzerConfig {
            parallel_threshold: 0,
            workers: 1,
            ..AnalyzerConfig::default()
        });
        assert_eq!(single.strategy_for("anything"), Aggregation::Sequential);

        let seq = FrequencyAnalyzer::with_config(AnalyzerConfig::sequential());
        assert_eq!(seq.strategy_for(&"x ".repeat(1000)), Aggregation::Sequential);
    }

    fn random_text(rng: &mut StdRng, words: usize) -> String {
        const VOCAB: &[&str] = &[
            "the", "The", "THE", "cat", "Cat", "sat", "on", "mat", "a", "I", "m", "zebra",
        ];
        const SEPS: &[&str] = &[" ", " ", ", ", ". ", "'", "\n", "42", " -- ", "é", "\t"];

        let mut out = String::new();
        for _ in 0..words {
            out.push_str(VOCAB[rng.gen_range(0..VOCAB.len())]);
            out.push_str(SEPS[rng.gen_range(0..SEPS.len())]);
        }
        out
    }

    #[test]
    fn parallel_matches_sequential() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let words = rng.gen_range(0..400);
            let text = random_text(&mut rng, words);
            let workers = rng.gen_range(1..9);
            let shards = rng.gen_range(1..17);

            let sequential = FrequencyAnalyzer::aggregate_sequential(&text);
            let parallel = FrequencyAnalyzer::aggregate_parallel(&text, workers, shards);

            assert_eq!(parallel, sequential, "workers {workers}, shards {shards}");
            assert_eq!(parallel.top_n(5), sequential.top_n(5));
        }
    }

    #[test]
    fn large_parallel_input() {
        let text = "alpha beta gamma alpha beta alpha ".repeat(20_000);
        let a = FrequencyAnalyzer::with_config(AnalyzerConfig::parallel());
        let table = a.analyze(&text);

        assert_eq!(table.get("alpha"), Some(60_000));
        assert_eq!(table.get("beta"), Some(40_000));
        assert_eq!(table.get("gamma"), Some(20_000));
        assert_eq!(table.total_tokens(), 120_000);
    }

    #[test]
    fn word_lookup_agrees_with_table() {
        let mut rng = StdRng::seed_from_u64(99);
        let a = FrequencyAnalyzer::new();

        for _ in 0..30 {
            let words = rng.gen_range(0..200);
            let text = random_text(&mut rng, words);
            let table = a.analyze(&text);

            for word in ["the", "THE", "cat", "i", "m", "zebra", "mat", "absent"] {
                let expected = table.get(&word.to_ascii_lowercase()).unwrap_or(0);
                assert_eq!(a.frequency_for_word(&text, word), expected, "{word:?}");
            }
        }
    }

    #[test]
    fn analyzer_shared_across_threads() {
        let a = FrequencyAnalyzer::new();
        std::thread::scope(|s| {
            for i in 1..=4 {
                let a = &a;
                s.spawn(move || {
                    let text = "word ".repeat(i);
                    assert_eq!(a.highest_frequency(&text), i as Frequency);
                });
            }
        });
    }

    #[test]
    fn answer_requests() {
        let a = FrequencyAnalyzer::new();
        let text = "cat bat cat dog bat cat";

        let req = AnalysisRequest::highest_frequency(Some(text)).unwrap();
        assert_eq!(a.answer(&req), Answer::Frequency(3));

        let req = AnalysisRequest::frequency_for_word(Some(text), Some(" Bat ")).unwrap();
        assert_eq!(a.answer(&req), Answer::Frequency(2));

        let req = AnalysisRequest::most_frequent_n_words(Some(text), Some("2")).unwrap();
        assert_eq!(
            a.answer(&req),
            Answer::Words(vec![WordFrequency::new("cat", 3), WordFrequency::new("bat", 2)])
        );
    }
}
