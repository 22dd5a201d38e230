//! Academic word resource for sophistication scoring.
//!
//! The built-in list is a compact sample of high-frequency Academic Word
//! List headwords. Entries are lowercase; membership tests are exact, so
//! inflected forms ("analyzed", "factors") do not match.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Built-in academic headwords.
pub static ACADEMIC_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "analyze", "approach", "area", "assess", "assume", "authority", "concept", "consistent",
        "constitute", "context", "contract", "create", "data", "definition", "derive",
        "distribute", "economy", "environment", "establish", "estimate", "evidence", "export",
        "factor", "formula", "function", "identify", "income", "indicate", "interpret",
        "involve", "issue", "legal", "major", "method", "occur", "percent", "policy",
        "principle", "process", "require", "research", "response", "role", "section", "sector",
        "significant", "similar", "source", "specific", "structure", "theory", "vary",
    ]
    .into_iter()
    .collect()
});

/// An immutable set of lowercase reference words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcademicWordList {
    words: HashSet<String>,
}

impl Default for AcademicWordList {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AcademicWordList {
    /// The built-in list.
    pub fn builtin() -> Self {
        Self {
            words: ACADEMIC_WORDS.iter().map(|w| (*w).to_string()).collect(),
        }
    }

    /// Build a list from arbitrary words. Entries are trimmed and lowercased;
    /// blank entries are dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .filter_map(|w| normalize(w.as_ref()))
                .collect(),
        }
    }

    /// Parse a newline-delimited word list. Text after `#` is a comment.
    pub fn parse(contents: &str) -> Self {
        Self::from_words(
            contents
                .lines()
                .map(|line| line.split_once('#').map_or(line, |(head, _)| head)),
        )
    }

    /// Return a new list holding this list's words plus `extra`.
    #[must_use]
    pub fn extended<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(extra.into_iter().filter_map(|w| normalize(w.as_ref())));
        self
    }

    /// Return a new list holding the words of both lists.
    #[must_use]
    pub fn union(mut self, other: Self) -> Self {
        self.words.extend(other.words);
        self
    }

    /// Whether `word` is a member. The caller supplies lowercase words.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn normalize(word: &str) -> Option<String> {
    let trimmed = word.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}
