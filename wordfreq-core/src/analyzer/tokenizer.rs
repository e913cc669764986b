//! Streaming Tokenizer Module
//!
//! Splits raw text into normalized word tokens. It's the first stage of the
//! analysis pipeline: everything downstream (aggregation, word matching,
//! ranking) sees text only through the tokens emitted here.
//!
//! ## What It Does
//!
//! Given `"Hello, world! I'm fine."`, it emits:
//!
//! ```text
//! "hello" "world" "i" "m" "fine"
//! ```
//!
//! A token is a maximal run of ASCII letters. Digits, punctuation,
//! whitespace, apostrophes, control characters and every non-ASCII character
//! act as separators and never become part of a token. Tokens are
//! lowercased before they are emitted.
//!
//! ## Key Features
//!
//! - **Streaming**: tokens are handed to a callback, no intermediate collection
//! - **Mostly zero allocation**: runs that are already lowercase are emitted
//!   as slices of the input; others are folded into one reusable buffer
//! - **Single pass**: one table lookup per byte, left to right
//! - **Chunkable**: [`split_at_separators`] cuts text into pieces that can be
//!   tokenized independently without splitting any token
//!
//! ## Usage
//!
//! ```rust
//! use wordfreq_core::analyzer::Tokenizer;
//!
//! let mut tokens = Vec::new();
//! Tokenizer::new().tokenize("The cat, THE hat", |token| tokens.push(token.to_owned()));
//!
//! assert_eq!(tokens, ["the", "cat", "the", "hat"]);
//! ```

use core::ops::Range;
use smallvec::SmallVec;

use crate::analyzer::normalizer::{is_letter, WordNormalizer};

/// Ranges produced by [`split_at_separators`].
pub type ChunkRanges = SmallVec<[Range<usize>; 16]>;

/// Streaming tokenizer: extracts lowercased ASCII letter runs.
///
/// Tokens passed to the callback borrow either the input or an internal
/// buffer, so they are only valid for the duration of the call. Copy them
/// out (e.g. into a `Box<str>`) if they need to outlive it.
///
/// ## Example
///
/// ```
/// use wordfreq_core::analyzer::Tokenizer;
///
/// let tokenizer = Tokenizer::new();
/// let mut count = 0;
///
/// tokenizer.tokenize("apple banana apple", |_token| count += 1);
///
/// assert_eq!(count, 3);
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct Tokenizer {
    normalizer: WordNormalizer,
}

impl Tokenizer {
    /// Creates a new tokenizer.
    #[inline]
    pub const fn new() -> Self {
        Self {
            normalizer: WordNormalizer::new(),
        }
    }

    /// Emits the byte range `(start, end)` of every letter run, left to right.
    ///
    /// Ranges are in the original (un-normalized) text and always lie on
    /// char boundaries, since letters are single-byte ASCII.
    #[inline]
    pub fn spans<F>(&self, text: &str, mut emit: F)
    where
        F: FnMut(usize, usize),
    {
        let bytes = text.as_bytes();
        let mut start: Option<usize> = None;

        for (i, &b) in bytes.iter().enumerate() {
            match (is_letter(b), start) {
                (true, None) => start = Some(i),
                (false, Some(s)) => {
                    emit(s, i);
                    start = None;
                }
                _ => {}
            }
        }

        if let Some(s) = start {
            emit(s, bytes.len());
        }
    }

    /// Tokenizes `text` and emits each lowercased token.
    #[inline]
    pub fn tokenize<F>(&self, text: &str, mut emit: F)
    where
        F: FnMut(&str),
    {
        let mut buf = String::new();

        self.spans(text, |start, end| {
            let run = &text[start..end];
            if self.normalizer.is_normalized(run) {
                emit(run);
            } else {
                buf.clear();
                self.normalizer.normalize_into(run, &mut buf);
                emit(buf.as_str());
            }
        });
    }

    /// Returns the number of tokens in `text`.
    pub fn count(&self, text: &str) -> usize {
        let mut n = 0usize;
        self.spans(text, |_, _| n += 1);
        n
    }
}

/// Splits `text` into at most `parts` contiguous ranges for independent tokenization.
///
/// Every boundary falls where a token cannot continue: at the text ends, or
/// next to a separator byte. Boundaries also never land inside a multi-byte
/// character. Consequently:
///
/// - concatenating the ranges in order reproduces `text` exactly
/// - tokenizing each range and concatenating the tokens gives the same
///   sequence as tokenizing `text` as a whole
///
/// Ranges are never empty. Empty text yields no ranges; `parts` of 0 or 1
/// yields a single range covering all of `text`.
///
/// ```
/// use wordfreq_core::analyzer::split_at_separators;
///
/// let text = "alpha beta gamma delta";
/// let ranges = split_at_separators(text, 3);
///
/// let rebuilt: String = ranges.iter().map(|r| &text[r.clone()]).collect();
/// assert_eq!(rebuilt, text);
/// assert!(ranges.len() <= 3);
/// ```
pub fn split_at_separators(text: &str, parts: usize) -> ChunkRanges {
    let len = text.len();
    let mut ranges = ChunkRanges::new();

    if len == 0 {
        return ranges;
    }

    if parts <= 1 {
        ranges.push(0..len);
        return ranges;
    }

    let bytes = text.as_bytes();
    let target = len.div_ceil(parts);
    let mut start = 0usize;

    while start < len {
        let mut end = (start + target).min(len);

        // Don't cut a token in half.
        while end < len && is_letter(bytes[end]) && is_letter(bytes[end - 1]) {
            end += 1;
        }

        // Continuation bytes are separators, so stepping past them keeps the
        // token rule above intact.
        while end < len && !text.is_char_boundary(end) {
            end += 1;
        }

        ranges.push(start..end);
        start = end;
    }

    ranges
}
