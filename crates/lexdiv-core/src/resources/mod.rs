//! Static reference resources for lexical scoring.
//!
//! Both resources are immutable once built and are handed to the
//! [`DocumentAnalyzer`](crate::analyzer::DocumentAnalyzer) explicitly, so
//! tests and localized deployments can substitute their own.

pub mod academic_words;
pub mod pos_categories;

pub use academic_words::AcademicWordList;
pub use pos_categories::{Category, CategoryMap};
