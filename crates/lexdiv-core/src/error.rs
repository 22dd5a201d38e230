//! Error types for lexdiv-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,

    /// A window size lies outside its permitted range.
    #[error("{name} must be between {min} and {max} (got {value})")]
    InvalidWindow {
        /// The parameter name (`win_all` or `win_pos`).
        name: &'static str,
        /// The rejected value.
        value: usize,
        /// Smallest accepted value.
        min: usize,
        /// Largest accepted value.
        max: usize,
    },

    /// The configured academic word list file could not be read.
    #[error("failed to read academic word list {path}: {source}")]
    WordListFile {
        /// The resolved path of the word list.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised by a [`Tagger`](crate::tagger::Tagger) implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaggerError {
    /// Word segmentation failed.
    #[error("tokenization failed: {0}")]
    Tokenize(String),

    /// Part-of-speech tagging failed.
    #[error("tagging failed: {0}")]
    Tag(String),

    /// The tagger returned a different number of tags than tokens it was given.
    #[error("tagger returned {tags} tags for {tokens} tokens")]
    LengthMismatch {
        /// Number of tokens passed in.
        tokens: usize,
        /// Number of tagged tokens returned.
        tags: usize,
    },
}

/// Errors that can occur while analyzing documents.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The tokenizer/tagger failed on one document.
    #[error("{filename}: {source}")]
    Tagging {
        /// The document that could not be tagged.
        filename: String,
        /// The tagger's failure.
        #[source]
        source: TaggerError,
    },

    /// A document could not be loaded.
    #[error("{filename}: {message}")]
    Load {
        /// The document that could not be loaded.
        filename: String,
        /// What went wrong.
        message: String,
    },

    /// Reading or writing delimited output failed.
    #[error("CSV export failed: {0}")]
    Export(#[from] csv::Error),

    /// An I/O error outside CSV encoding.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
