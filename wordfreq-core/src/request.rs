//! Request validation for front ends.
//!
//! The analyzer answers every input, but a service in front of it should
//! still refuse requests that make no sense: blank text, a blank target
//! word, or a missing / malformed / non-positive result limit. These
//! constructors apply those checks to raw boundary input and hand back a
//! request the analyzer can answer without further thought.

use core::num::IntErrorKind;

use wordfreq_types::RequestError;

/// What to compute over the request text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Highest count of any word.
    HighestFrequency,
    /// Count of one word (trimmed of surrounding whitespace).
    FrequencyForWord(String),
    /// The `n` most frequent words, `n >= 1`.
    MostFrequentNWords(usize),
}

/// A validated analysis request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest<'t> {
    text: &'t str,
    query: Query,
}

impl<'t> AnalysisRequest<'t> {
    /// Validates a highest-frequency request.
    pub fn highest_frequency(text: Option<&'t str>) -> Result<Self, RequestError> {
        Ok(Self {
            text: validate_text(text)?,
            query: Query::HighestFrequency,
        })
    }

    /// Validates a single-word frequency request.
    pub fn frequency_for_word(
        text: Option<&'t str>,
        word: Option<&str>,
    ) -> Result<Self, RequestError> {
        let text = validate_text(text)?;
        let word = match word.map(str::trim) {
            Some(w) if !w.is_empty() => w.to_owned(),
            _ => return Err(RequestError::EmptyWord),
        };

        Ok(Self {
            text,
            query: Query::FrequencyForWord(word),
        })
    }

    /// Validates a top-N request; `n` is parsed from its raw form.
    pub fn most_frequent_n_words(
        text: Option<&'t str>,
        n: Option<&str>,
    ) -> Result<Self, RequestError> {
        let text = validate_text(text)?;
        let limit = parse_limit(n)?;

        Ok(Self {
            text,
            query: Query::MostFrequentNWords(limit),
        })
    }

    /// The text to analyze.
    #[inline(always)]
    pub fn text(&self) -> &'t str {
        self.text
    }

    /// The query to run.
    #[inline(always)]
    pub fn query(&self) -> &Query {
        &self.query
    }
}

fn validate_text(text: Option<&str>) -> Result<&str, RequestError> {
    match text {
        Some(t) if !t.trim().is_empty() => Ok(t),
        _ => Err(RequestError::EmptyText),
    }
}

/// Parses a raw result limit.
///
/// Accepts any integer with optional surrounding whitespace; rejects
/// missing, non-numeric and non-positive values. Limits beyond `usize`
/// (or beyond `i64`) are clamped, which is equivalent to "all words";
/// negative values beyond `i64` are reported as `i64::MIN`.
pub fn parse_limit(raw: Option<&str>) -> Result<usize, RequestError> {
    let raw = raw.map(str::trim).ok_or(RequestError::MissingLimit)?;
    if raw.is_empty() {
        return Err(RequestError::MissingLimit);
    }

    let n: i64 = match raw.parse() {
        Ok(n) => n,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => return Ok(usize::MAX),
            IntErrorKind::NegOverflow => i64::MIN,
            _ => {
                return Err(RequestError::InvalidLimit {
                    raw: raw.to_owned(),
                })
            }
        },
    };

    if n <= 0 {
        return Err(RequestError::NonPositiveLimit { n });
    }

    Ok(usize::try_from(n).unwrap_or(usize::MAX))
}
