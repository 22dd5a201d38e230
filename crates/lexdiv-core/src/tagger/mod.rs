//! Tokenizer/tagger capability.
//!
//! The analyzer only needs two operations from a natural-language toolkit:
//! word segmentation and part-of-speech tagging. [`Tagger`] captures that
//! contract so any backend (a rule engine, a statistical model, a service
//! client, a test stub) can be plugged in.
//!
//! [`BuiltinTagger`] is the default backend: a Treebank-style tokenizer
//! ([`tokenize::TreebankTokenizer`]) feeding a deterministic rule tagger
//! ([`rules::RuleTagger`]) that emits Penn Treebank tags.

pub mod lexicon;
pub mod rules;
pub mod tokenize;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::TaggerError;

pub use rules::RuleTagger;
pub use tokenize::TreebankTokenizer;

/// A surface token with its part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TaggedToken {
    /// The token exactly as segmented.
    pub text: String,
    /// Penn-Treebank-style tag (`NN`, `VBD`, `JJ`, ...).
    pub tag: String,
}

impl TaggedToken {
    /// Pair a token with its tag.
    pub fn new(text: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tag: tag.into(),
        }
    }
}

/// Word segmentation and part-of-speech tagging.
///
/// Implementations must be deterministic: identical input yields identical
/// output. `tag` returns exactly one entry per input token, in input order.
pub trait Tagger: Send + Sync {
    /// Split text into an ordered sequence of surface tokens.
    fn tokenize(&self, text: &str) -> Result<Vec<String>, TaggerError>;

    /// Assign a tag to every token.
    fn tag(&self, tokens: &[String]) -> Result<Vec<TaggedToken>, TaggerError>;

    /// Tokenize then tag, checking the length contract.
    fn tokenize_and_tag(&self, text: &str) -> Result<Vec<TaggedToken>, TaggerError> {
        let tokens = self.tokenize(text)?;
        let tagged = self.tag(&tokens)?;
        if tagged.len() != tokens.len() {
            return Err(TaggerError::LengthMismatch {
                tokens: tokens.len(),
                tags: tagged.len(),
            });
        }
        Ok(tagged)
    }
}

/// Default backend: [`TreebankTokenizer`] + [`RuleTagger`].
#[derive(Debug, Clone, Default)]
pub struct BuiltinTagger {
    tokenizer: TreebankTokenizer,
    tagger: RuleTagger,
}

impl BuiltinTagger {
    /// Create the default backend.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tagger for BuiltinTagger {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, TaggerError> {
        Ok(self.tokenizer.tokenize(text))
    }

    fn tag(&self, tokens: &[String]) -> Result<Vec<TaggedToken>, TaggerError> {
        Ok(self.tagger.tag(tokens))
    }
}
