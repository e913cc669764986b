//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Normalizer**: Classifies bytes and lowercases letter runs
//! - **Tokenizer**: Splits raw text into normalized word tokens
//! - **Matcher**: Counts whole-word occurrences of one target word

pub mod matcher;
pub mod normalizer;
pub mod tokenizer;

pub use matcher::WordMatcher;
pub use normalizer::WordNormalizer;
pub use tokenizer::{split_at_separators, ChunkRanges, Tokenizer};
