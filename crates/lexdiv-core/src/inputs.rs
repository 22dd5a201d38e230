//! Turning command-line paths into documents.
//!
//! Paths naming files are taken as given. Directories are scanned
//! recursively and filtered by the configured include globs, matched
//! against each file name. Files are read with a size preflight; `.md` and
//! `.markdown` files are flattened to prose, everything else is used
//! verbatim.

use camino::{Utf8Path, Utf8PathBuf};
use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::batch::DocumentFailure;
use crate::document::Document;
use crate::error::{AnalysisError, AnalysisResult};

/// File-name filter built from include globs.
#[derive(Debug, Clone)]
pub struct IncludeFilter {
    set: GlobSet,
}

impl IncludeFilter {
    /// Compile `patterns`. Invalid patterns are skipped with a warning.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Self {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            match Glob::new(pattern) {
                Ok(glob) => {
                    builder.add(glob);
                }
                Err(e) => tracing::warn!(pattern, error = %e, "skipping invalid include pattern"),
            }
        }
        let set = builder.build().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "include patterns failed to compile; matching nothing");
            GlobSet::empty()
        });
        Self { set }
    }

    /// Whether the file name of `path` matches any include pattern.
    pub fn matches(&self, path: &Utf8Path) -> bool {
        path.file_name().is_some_and(|name| self.set.is_match(name))
    }
}

/// Expand `paths` into the list of files to analyze, in a stable order.
///
/// Directory entries are sorted by path. Directories that cannot be read
/// are returned as failures.
#[tracing::instrument(skip_all, fields(paths = paths.len()))]
pub fn expand_inputs(
    paths: &[Utf8PathBuf],
    filter: &IncludeFilter,
) -> (Vec<Utf8PathBuf>, Vec<DocumentFailure>) {
    let mut files = Vec::new();
    let mut failures = Vec::new();
    for path in paths {
        if path.is_dir() {
            scan_dir(path, filter, &mut files, &mut failures);
        } else {
            files.push(path.clone());
        }
    }
    tracing::debug!(files = files.len(), failures = failures.len(), "inputs expanded");
    (files, failures)
}

fn scan_dir(
    dir: &Utf8Path,
    filter: &IncludeFilter,
    files: &mut Vec<Utf8PathBuf>,
    failures: &mut Vec<DocumentFailure>,
) {
    let entries = match dir.read_dir_utf8() {
        Ok(entries) => entries,
        Err(e) => {
            failures.push(DocumentFailure::new(dir.as_str(), format!("failed to read directory: {e}")));
            return;
        }
    };

    let mut children: Vec<Utf8PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.into_path()),
            Err(e) => {
                tracing::warn!(dir = %dir, error = %e, "skipping unreadable entry");
                None
            }
        })
        .collect();
    children.sort();

    for child in children {
        if child.is_dir() {
            scan_dir(&child, filter, files, failures);
        } else if filter.matches(&child) {
            files.push(child);
        }
    }
}

/// Name a document is reported under: the file name, or the whole path
/// when it has none.
pub fn display_name(path: &Utf8Path) -> &str {
    path.file_name().unwrap_or_else(|| path.as_str())
}

/// Read one file into a [`Document`], enforcing `max_bytes` when set.
pub fn load_document(path: &Utf8Path, max_bytes: Option<usize>) -> AnalysisResult<Document> {
    let filename = display_name(path).to_string();
    let load_error = |message: String| AnalysisError::Load {
        filename: filename.clone(),
        message,
    };

    let metadata = std::fs::metadata(path).map_err(|e| load_error(format!("failed to read: {e}")))?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > max {
            return Err(load_error(format!(
                "input too large: {size} bytes (limit: {max} bytes)"
            )));
        }
    }

    let content =
        std::fs::read_to_string(path).map_err(|e| load_error(format!("failed to read: {e}")))?;

    let document = match path.extension() {
        Some("md" | "markdown") => Document::from_markdown(filename, &content),
        _ => Document::new(filename, content),
    };
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn utf8_dir(tmp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap()
    }

    #[test]
    fn filter_matches_file_names() {
        let filter = IncludeFilter::new(&["*.txt", "*.md"]);
        assert!(filter.matches(Utf8Path::new("corpus/a.txt")));
        assert!(filter.matches(Utf8Path::new("notes.md")));
        assert!(!filter.matches(Utf8Path::new("paper.pdf")));
    }

    #[test]
    fn invalid_patterns_are_skipped() {
        let filter = IncludeFilter::new(&["[", "*.txt"]);
        assert!(filter.matches(Utf8Path::new("a.txt")));
    }

    #[test]
    fn directories_expand_recursively_in_sorted_order() {
        let tmp = TempDir::new().unwrap();
        let root = utf8_dir(&tmp);
        fs::create_dir(root.join("sub")).unwrap();
        fs::write(root.join("b.txt"), "b").unwrap();
        fs::write(root.join("a.md"), "a").unwrap();
        fs::write(root.join("skip.pdf"), "x").unwrap();
        fs::write(root.join("sub").join("c.txt"), "c").unwrap();

        let filter = IncludeFilter::new(&["*.txt", "*.md"]);
        let (files, failures) = expand_inputs(&[root.clone()], &filter);
        assert!(failures.is_empty());
        let names: Vec<&str> = files.iter().map(|p| display_name(p)).collect();
        assert_eq!(names, ["a.md", "b.txt", "c.txt"]);
    }

    #[test]
    fn explicit_files_bypass_the_filter() {
        let filter = IncludeFilter::new(&["*.txt"]);
        let (files, _) = expand_inputs(&[Utf8PathBuf::from("paper.pdf")], &filter);
        assert_eq!(files, [Utf8PathBuf::from("paper.pdf")]);
    }

    #[test]
    fn loads_text_and_markdown() {
        let tmp = TempDir::new().unwrap();
        let root = utf8_dir(&tmp);
        fs::write(root.join("plain.txt"), "# not a heading\n").unwrap();
        fs::write(root.join("doc.md"), "# Title\n\nBody `code`.").unwrap();

        let plain = load_document(&root.join("plain.txt"), None).unwrap();
        assert_eq!(plain.filename, "plain.txt");
        assert_eq!(plain.text, "# not a heading\n");

        let md = load_document(&root.join("doc.md"), None).unwrap();
        assert_eq!(md.text, "Title\nBody .");
    }

    #[test]
    fn oversized_file_is_a_load_failure() {
        let tmp = TempDir::new().unwrap();
        let path = utf8_dir(&tmp).join("big.txt");
        fs::write(&path, "x".repeat(100)).unwrap();

        let err = load_document(&path, Some(10)).unwrap_err();
        assert!(matches!(err, AnalysisError::Load { ref filename, .. } if filename == "big.txt"));
        assert!(err.to_string().contains("input too large"));
        assert!(load_document(&path, None).is_ok());
    }

    #[test]
    fn missing_file_is_a_load_failure() {
        let err = load_document(Utf8Path::new("/no/such/file.txt"), None).unwrap_err();
        assert!(err.to_string().starts_with("file.txt: failed to read"));
    }
}
