//! ASCII word normalization.
//!
//! Words are maximal runs of ASCII letters; everything else separates them.
//! A single 256-entry table answers both questions the pipeline asks of a
//! byte, "is this a letter?" and "what is its lowercase form?", so the hot
//! tokenizer loop does one lookup per byte.
//!
//! Non-ASCII bytes (including every byte of a multi-byte UTF-8 sequence)
//! map to `0`, which makes them separators. That is what keeps the
//! tokenizer's output valid UTF-8 without any decoding.

/// Byte → lowercase ASCII letter, or `0` for anything that is not a letter.
const FOLD_TABLE: [u8; 256] = build_fold_table();

const fn build_fold_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let b = i as u8;
        table[i] = if b.is_ascii_lowercase() {
            b
        } else if b.is_ascii_uppercase() {
            b + (b'a' - b'A')
        } else {
            0
        };
        i += 1;
    }
    table
}

/// Returns the lowercase form of `b` if it is an ASCII letter.
#[inline(always)]
pub const fn fold(b: u8) -> Option<u8> {
    match FOLD_TABLE[b as usize] {
        0 => None,
        lower => Some(lower),
    }
}

/// Returns `true` if `b` is an ASCII letter.
#[inline(always)]
pub const fn is_letter(b: u8) -> bool {
    FOLD_TABLE[b as usize] != 0
}

/// Lowercases letter runs and validates lookup targets.
///
/// Stateless; exists as a type so the tokenizer and matcher share one
/// definition of what a normalized word is.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordNormalizer;

impl WordNormalizer {
    /// Creates a normalizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Appends the lowercase form of `run` to `out`.
    ///
    /// `run` must consist of ASCII letters only (as produced by the tokenizer).
    #[inline]
    pub fn normalize_into(&self, run: &str, out: &mut String) {
        debug_assert!(
            run.bytes().all(is_letter),
            "normalizer: input {run:?} is not a letter run"
        );

        out.reserve(run.len());
        for b in run.bytes() {
            out.push(FOLD_TABLE[b as usize] as char);
        }
    }

    /// Returns `true` if `run` is already in normalized form.
    #[inline]
    pub fn is_normalized(&self, run: &str) -> bool {
        run.bytes().all(|b| b.is_ascii_lowercase())
    }

    /// Normalizes a lookup target the same way tokens are normalized.
    ///
    /// Returns `None` when the target is empty or contains anything other
    /// than ASCII letters, since such a word can never equal a token.
    pub fn normalize_target(&self, word: &str) -> Option<String> {
        if word.is_empty() {
            return None;
        }

        let mut out = String::with_capacity(word.len());
        for b in word.bytes() {
            out.push(fold(b)? as char);
        }
        Some(out)
    }
}
