//! Lexical sophistication: academic-word density and n-gram variety.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::resources::AcademicWordList;
use crate::row::round4;

/// Sophistication ratios for one word sequence, each rounded to 4 places.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SophisticationReport {
    /// Share of tokens that appear in the academic word list.
    pub awl_ratio: f64,
    /// Distinct bigrams over total bigrams.
    pub bigram_ratio: f64,
    /// Distinct trigrams over total trigrams.
    pub trigram_ratio: f64,
}

/// Compute academic-word ratio and bigram/trigram type-token ratios.
///
/// The academic ratio counts tokens, not types. N-grams overlap and are
/// taken at every consecutive position; a sequence too short to form any
/// n-gram of a given size scores `0.0` for that size.
#[tracing::instrument(skip_all, fields(words = all_words.len()))]
pub fn calc_lexical_soph(all_words: &[String], academic: &AcademicWordList) -> SophisticationReport {
    if all_words.is_empty() {
        return SophisticationReport::default();
    }

    let total = all_words.len() as f64;
    let academic_hits = all_words.iter().filter(|w| academic.contains(w)).count();

    SophisticationReport {
        awl_ratio: round4(academic_hits as f64 / total),
        bigram_ratio: round4(ngram_ratio(all_words, 2)),
        trigram_ratio: round4(ngram_ratio(all_words, 3)),
    }
}

/// Distinct over total contiguous n-grams, or `0.0` if none can be formed.
pub fn ngram_ratio(words: &[String], n: usize) -> f64 {
    if n == 0 || words.len() < n {
        return 0.0;
    }
    let grams: Vec<&[String]> = words.windows(n).collect();
    let unique: HashSet<&[String]> = grams.iter().copied().collect();
    unique.len() as f64 / grams.len() as f64
}
