//! Batch analysis with per-document failure tolerance.
//!
//! Documents are analyzed in parallel on the rayon pool that is current
//! when [`run_batch`] is called. Output order always matches input order.
//! A document that fails is recorded with its cause and the batch moves on.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analyzer::DocumentAnalyzer;
use crate::document::Document;
use crate::error::AnalysisError;
use crate::row::AnalysisRow;
use crate::tagger::Tagger;
use crate::window::WindowSizes;

/// A document that produced no row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFailure {
    /// The document's name.
    pub filename: String,
    /// Human-readable cause.
    pub error: String,
}

impl DocumentFailure {
    /// Failure for `filename` with the given cause.
    pub fn new(filename: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            error: error.into(),
        }
    }

    /// Failure for `filename` caused by `err`.
    pub fn from_error(filename: &str, err: &AnalysisError) -> Self {
        // Tagging and load errors already lead with the filename.
        let error = match err {
            AnalysisError::Tagging { source, .. } => source.to_string(),
            AnalysisError::Load { message, .. } => message.clone(),
            other => other.to_string(),
        };
        Self::new(filename, error)
    }
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    /// One row per successfully analyzed document, in input order.
    pub rows: Vec<AnalysisRow>,
    /// Documents that failed, in input order.
    pub failures: Vec<DocumentFailure>,
}

impl BatchReport {
    /// Number of documents attempted.
    pub fn total(&self) -> usize {
        self.rows.len() + self.failures.len()
    }

    /// Whether at least one document was analyzed.
    pub fn has_rows(&self) -> bool {
        !self.rows.is_empty()
    }

    /// Record a failure that happened before analysis (e.g. while loading).
    pub fn push_failure(&mut self, failure: DocumentFailure) {
        self.failures.push(failure);
    }
}

/// Analyze every document, tolerating per-document failures.
///
/// `on_done` is called once per document, from whichever worker finished it,
/// with the document's filename. Use it to drive a progress display.
#[tracing::instrument(skip_all, fields(documents = documents.len(), win_all = windows.all(), win_pos = windows.pos()))]
pub fn run_batch<T, F>(
    analyzer: &DocumentAnalyzer<T>,
    documents: &[Document],
    windows: WindowSizes,
    on_done: F,
) -> BatchReport
where
    T: Tagger,
    F: Fn(&str) + Sync,
{
    let outcomes: Vec<_> = documents
        .par_iter()
        .map(|doc| {
            let outcome = analyzer.analyze(&doc.filename, &doc.text, windows);
            on_done(&doc.filename);
            outcome
        })
        .collect();

    let mut report = BatchReport::default();
    for (doc, outcome) in documents.iter().zip(outcomes) {
        match outcome {
            Ok(row) => report.rows.push(row),
            Err(err) => {
                tracing::warn!(filename = %doc.filename, error = %err, "document failed");
                report.failures.push(DocumentFailure::from_error(&doc.filename, &err));
            }
        }
    }

    tracing::info!(
        analyzed = report.rows.len(),
        failed = report.failures.len(),
        "batch complete"
    );
    report
}
