//! The per-document result record.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::resources::Category;

/// Column headers in output order.
pub const COLUMNS: [&str; 9] = [
    "Filename",
    "All_words_MATTR",
    "Verb_MATTR",
    "Noun_MATTR",
    "Adjective_MATTR",
    "Adverb_MATTR",
    "LexSoph_AWLratio",
    "LexSoph_BigramRatio",
    "LexSoph_TrigramRatio",
];

/// Metrics for one analyzed document. Every number is rounded to 4 places.
///
/// Field order matches the exported column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisRow {
    /// Document identifier.
    #[serde(rename = "Filename")]
    pub filename: String,
    /// MATTR over all alphabetic words.
    #[serde(rename = "All_words_MATTR")]
    pub all_words_mattr: f64,
    /// Verb-restricted MATTR.
    #[serde(rename = "Verb_MATTR")]
    pub verb_mattr: f64,
    /// Noun-restricted MATTR.
    #[serde(rename = "Noun_MATTR")]
    pub noun_mattr: f64,
    /// Adjective-restricted MATTR.
    #[serde(rename = "Adjective_MATTR")]
    pub adjective_mattr: f64,
    /// Adverb-restricted MATTR.
    #[serde(rename = "Adverb_MATTR")]
    pub adverb_mattr: f64,
    /// Academic-word token ratio.
    #[serde(rename = "LexSoph_AWLratio")]
    pub awl_ratio: f64,
    /// Bigram type-token ratio.
    #[serde(rename = "LexSoph_BigramRatio")]
    pub bigram_ratio: f64,
    /// Trigram type-token ratio.
    #[serde(rename = "LexSoph_TrigramRatio")]
    pub trigram_ratio: f64,
}

impl AnalysisRow {
    pub(crate) const fn set_category_mattr(&mut self, category: Category, value: f64) {
        match category {
            Category::Verb => self.verb_mattr = value,
            Category::Noun => self.noun_mattr = value,
            Category::Adjective => self.adjective_mattr = value,
            Category::Adverb => self.adverb_mattr = value,
        }
    }

    /// The eight metric values in column order.
    pub const fn metrics(&self) -> [f64; 8] {
        [
            self.all_words_mattr,
            self.verb_mattr,
            self.noun_mattr,
            self.adjective_mattr,
            self.adverb_mattr,
            self.awl_ratio,
            self.bigram_ratio,
            self.trigram_ratio,
        ]
    }
}

/// Round to 4 decimal places.
///
/// Rounds the exact binary value, so a true tie (e.g. `0.03125`) goes to
/// the even digit while `0.12345`, stored slightly above the tie, rounds up.
pub fn round4(v: f64) -> f64 {
    format!("{v:.4}").parse().unwrap_or(v)
}
