//! Part-of-speech category map.
//!
//! Maps the four reported word classes to the tag prefix that selects them
//! from a Penn-Treebank-style tag stream. Prefix matching groups variants:
//! `VB` covers `VB`, `VBD`, `VBG`, `VBN`, `VBP` and `VBZ`.

use serde::{Deserialize, Serialize};

/// A reported word class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Verbs (`VB*`).
    Verb,
    /// Nouns (`NN*`).
    Noun,
    /// Adjectives (`JJ*`).
    Adjective,
    /// Adverbs (`RB*`).
    Adverb,
}

impl Category {
    /// All categories in report order.
    pub const ALL: [Self; 4] = [Self::Verb, Self::Noun, Self::Adjective, Self::Adverb];

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Verb => "Verb",
            Self::Noun => "Noun",
            Self::Adjective => "Adjective",
            Self::Adverb => "Adverb",
        }
    }

    /// Penn Treebank tag prefix used by default.
    pub const fn default_prefix(self) -> &'static str {
        match self {
            Self::Verb => "VB",
            Self::Noun => "NN",
            Self::Adjective => "JJ",
            Self::Adverb => "RB",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Verb => 0,
            Self::Noun => 1,
            Self::Adjective => 2,
            Self::Adverb => 3,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Immutable category → tag prefix mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMap {
    prefixes: [String; 4],
}

impl Default for CategoryMap {
    fn default() -> Self {
        Self {
            prefixes: Category::ALL.map(|c| c.default_prefix().to_string()),
        }
    }
}

impl CategoryMap {
    /// Replace the prefix for one category.
    #[must_use]
    pub fn with_prefix(mut self, category: Category, prefix: impl Into<String>) -> Self {
        self.prefixes[category.index()] = prefix.into();
        self
    }

    /// The prefix configured for `category`.
    pub fn prefix(&self, category: Category) -> &str {
        &self.prefixes[category.index()]
    }

    /// Whether `tag` selects `category`.
    pub fn matches(&self, category: Category, tag: &str) -> bool {
        tag.starts_with(self.prefix(category))
    }

    /// Iterate `(category, prefix)` pairs in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &str)> {
        Category::ALL.into_iter().map(|c| (c, self.prefix(c)))
    }
}
