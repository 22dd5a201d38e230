//! Per-document orchestration.
//!
//! [`DocumentAnalyzer`] tokenizes and tags a document once, derives the
//! alphabetic word population and the four category word lists from that
//! single tagged stream, runs both engines, and assembles an
//! [`AnalysisRow`].
//!
//! Category lists are filtered from the full tagged stream, not from the
//! alphabetic population: a non-alphabetic token whose tag carries a
//! category prefix is still a category member.

use unicode_general_category::{GeneralCategory, get_general_category};

use crate::diversity::{calculate_category_mattr, calculate_mattr};
use crate::error::{AnalysisError, AnalysisResult};
use crate::resources::{AcademicWordList, Category, CategoryMap};
use crate::row::{AnalysisRow, round4};
use crate::sophistication::calc_lexical_soph;
use crate::tagger::{TaggedToken, Tagger};
use crate::window::WindowSizes;

/// Computes one [`AnalysisRow`] per document.
///
/// Holds the tagger and the immutable scoring resources. Analysis never
/// mutates the analyzer, so one instance can serve many threads.
#[derive(Debug, Clone)]
pub struct DocumentAnalyzer<T> {
    tagger: T,
    academic_words: AcademicWordList,
    categories: CategoryMap,
}

impl<T: Tagger> DocumentAnalyzer<T> {
    /// Analyzer with the built-in academic word list and category map.
    pub fn new(tagger: T) -> Self {
        Self {
            tagger,
            academic_words: AcademicWordList::builtin(),
            categories: CategoryMap::default(),
        }
    }

    /// Use a different academic word list.
    #[must_use]
    pub fn with_academic_words(mut self, words: AcademicWordList) -> Self {
        self.academic_words = words;
        self
    }

    /// Use a different category map.
    #[must_use]
    pub fn with_categories(mut self, categories: CategoryMap) -> Self {
        self.categories = categories;
        self
    }

    /// The academic word list in use.
    pub const fn academic_words(&self) -> &AcademicWordList {
        &self.academic_words
    }

    /// The category map in use.
    pub const fn categories(&self) -> &CategoryMap {
        &self.categories
    }

    /// Analyze one document.
    ///
    /// Identical inputs always produce an identical row. The only failure
    /// is a tagger failure, reported against `filename`.
    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn analyze(
        &self,
        filename: &str,
        text: &str,
        windows: WindowSizes,
    ) -> AnalysisResult<AnalysisRow> {
        let tagged = self
            .tagger
            .tokenize_and_tag(text)
            .map_err(|source| AnalysisError::Tagging {
                filename: filename.to_string(),
                source,
            })?;

        let all_words = alphabetic_words(&tagged);
        let soph = calc_lexical_soph(&all_words, &self.academic_words);

        let mut row = AnalysisRow {
            filename: filename.to_string(),
            all_words_mattr: round4(calculate_mattr(&all_words, windows.all())),
            verb_mattr: 0.0,
            noun_mattr: 0.0,
            adjective_mattr: 0.0,
            adverb_mattr: 0.0,
            awl_ratio: soph.awl_ratio,
            bigram_ratio: soph.bigram_ratio,
            trigram_ratio: soph.trigram_ratio,
        };

        for category in Category::ALL {
            let members = category_words(&tagged, &self.categories, category);
            let score = calculate_category_mattr(&members, &all_words, windows.pos());
            tracing::trace!(%category, members = members.len(), score, "category scored");
            row.set_category_mattr(category, round4(score));
        }

        tracing::debug!(
            tokens = tagged.len(),
            words = all_words.len(),
            all_words_mattr = row.all_words_mattr,
            "document analyzed"
        );
        Ok(row)
    }
}

/// Lowercased tokens made entirely of letters, in order.
///
/// A letter is a character in one of the Unicode letter categories (`Lu`,
/// `Ll`, `Lt`, `Lm`, `Lo`). Combining marks are not letters, so a word
/// written with vowel signs or decomposed accents is not counted.
pub fn alphabetic_words(tagged: &[TaggedToken]) -> Vec<String> {
    tagged
        .iter()
        .map(|t| t.text.as_str())
        .filter(|w| is_alphabetic(w))
        .map(str::to_lowercase)
        .collect()
}

/// Lowercased tokens whose tag selects `category` in `categories`, in order.
pub fn category_words(
    tagged: &[TaggedToken],
    categories: &CategoryMap,
    category: Category,
) -> Vec<String> {
    tagged
        .iter()
        .filter(|t| categories.matches(category, &t.tag))
        .map(|t| t.text.to_lowercase())
        .collect()
}

fn is_alphabetic(word: &str) -> bool {
    !word.is_empty() && word.chars().all(is_letter)
}

fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}
