//! Core library for lexdiv.
//!
//! Computes lexical diversity and lexical sophistication metrics for
//! documents: moving-average type-token ratio (MATTR) over all words and
//! over each of four part-of-speech categories, the academic-word ratio,
//! and bigram/trigram type-token ratios.
//!
//! # Modules
//!
//! - [`analyzer`] - Single-pass per-document analysis
//! - [`batch`] - Parallel, failure-tolerant batch runs
//! - [`config`] - Configuration loading and management
//! - [`diversity`] - MATTR engines
//! - [`document`] - Document assembly from pages or Markdown
//! - [`error`] - Error types and result aliases
//! - [`export`] - BOM-prefixed CSV output
//! - [`inputs`] - Path expansion and file loading
//! - [`resources`] - Academic word list and category prefixes
//! - [`row`] - The per-document result record
//! - [`sophistication`] - Academic-word and n-gram ratios
//! - [`tagger`] - Tokenizer/tagger contract and the built-in implementation
//! - [`window`] - Validated window sizes
//!
//! # Quick Start
//!
//! ```
//! use lexdiv_core::{BuiltinTagger, DocumentAnalyzer, WindowSizes};
//!
//! let analyzer = DocumentAnalyzer::new(BuiltinTagger::new());
//! let row = analyzer
//!     .analyze("memo.txt", "The data show a clear trend.", WindowSizes::default())
//!     .unwrap();
//! assert_eq!(row.filename, "memo.txt");
//! ```
#![deny(unsafe_code)]

pub mod analyzer;
pub mod batch;
pub mod config;
pub mod diversity;
pub mod document;
pub mod error;
pub mod export;
pub mod inputs;
pub mod resources;
pub mod row;
pub mod sophistication;
pub mod tagger;
pub mod window;

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5_242_880;

pub use analyzer::DocumentAnalyzer;
pub use batch::{BatchReport, DocumentFailure, run_batch};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use document::Document;
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult, TaggerError};
pub use inputs::{IncludeFilter, expand_inputs, load_document};
pub use resources::{AcademicWordList, Category, CategoryMap};
pub use row::{AnalysisRow, COLUMNS};
pub use sophistication::SophisticationReport;
pub use tagger::{BuiltinTagger, TaggedToken, Tagger};
pub use window::WindowSizes;
