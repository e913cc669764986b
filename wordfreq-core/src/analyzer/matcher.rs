//! Whole-word matching without building a frequency table.
//!
//! Counting one word does not need the full word→count table. The matcher
//! jumps between occurrences of the target's first letter (either case)
//! with `memchr2`, then checks that the candidate sits on token boundaries
//! and equals the target ignoring ASCII case. The target is plain text;
//! nothing in it is interpreted as pattern syntax.

use memchr::memchr2_iter;
use wordfreq_types::Frequency;

use crate::analyzer::normalizer::{is_letter, WordNormalizer};

/// Counts whole-token occurrences of one normalized word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordMatcher {
    needle: Box<[u8]>,
}

impl WordMatcher {
    /// Builds a matcher for `word`, normalized like a token.
    ///
    /// Returns `None` if `word` could never equal a token (empty, or
    /// containing anything other than ASCII letters).
    pub fn new(word: &str) -> Option<Self> {
        let needle = WordNormalizer::new().normalize_target(word)?;
        Some(Self {
            needle: needle.into_bytes().into_boxed_slice(),
        })
    }

    /// The normalized target word.
    #[must_use]
    pub fn word(&self) -> &str {
        // SAFETY: built from a `String` of ASCII letters.
        unsafe { core::str::from_utf8_unchecked(&self.needle) }
    }

    /// Counts occurrences of the target as a whole token in `text`.
    pub fn count(&self, text: &str) -> Frequency {
        let bytes = text.as_bytes();
        let needle = &self.needle[..];
        let lower = needle[0];
        let upper = lower.to_ascii_uppercase();

        let mut count: Frequency = 0;
        for start in memchr2_iter(lower, upper, bytes) {
            if start > 0 && is_letter(bytes[start - 1]) {
                continue;
            }

            let end = start + needle.len();
            if end > bytes.len() || (end < bytes.len() && is_letter(bytes[end])) {
                continue;
            }

            if bytes[start..end].eq_ignore_ascii_case(needle) {
                count = count.saturating_add(1);
            }
        }

        count
    }
}
