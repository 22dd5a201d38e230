//! Analyze command: diversity and sophistication metrics for a batch of documents.

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use lexdiv_core::config::{Config, ConfigSources};
use lexdiv_core::{
    AnalysisRow, BatchReport, BuiltinTagger, Document, DocumentAnalyzer, DocumentFailure,
    IncludeFilter, WindowSizes, expand_inputs, export, load_document, run_batch,
};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Files or directories to analyze. Directories are filtered by the
    /// configured `include` globs.
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<Utf8PathBuf>,

    /// Window size for all-words MATTR (5-500).
    #[arg(long, value_name = "N")]
    pub win_all: Option<usize>,

    /// Window size for part-of-speech MATTR (5-200).
    #[arg(long, value_name = "N")]
    pub win_pos: Option<usize>,

    /// Write results as CSV (UTF-8 with BOM) to FILE.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Utf8PathBuf>,

    /// Worker threads (default: all cores).
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,
}

/// Run the batch and report rows, failures, and the optional CSV.
///
/// Fails only when configuration is invalid or no document produced a row.
#[instrument(name = "cmd_analyze", skip_all, fields(paths = args.paths.len()))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    quiet: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    let windows = WindowSizes::new(
        args.win_all.unwrap_or(config.win_all),
        args.win_pos.unwrap_or(config.win_pos),
    )
    .context("invalid window size")?;

    let base_dir = sources.primary_dir().unwrap_or_else(|| Utf8Path::new("."));
    let academic = config
        .academic_word_list(base_dir)
        .context("failed to load academic word list")?;
    debug!(
        win_all = windows.all(),
        win_pos = windows.pos(),
        academic_words = academic.len(),
        "executing analyze command"
    );

    let analyzer = DocumentAnalyzer::new(BuiltinTagger::new())
        .with_academic_words(academic)
        .with_categories(config.category_map());

    let filter = IncludeFilter::new(&config.include);
    let (files, mut failures) = expand_inputs(&args.paths, &filter);
    let documents = load_documents(&files, config.input_limit(), &mut failures);

    let bar = (!quiet && !global_json && documents.len() > 1)
        .then(|| progress_bar(documents.len()))
        .transpose()?;
    let on_done = |filename: &str| {
        if let Some(ref pb) = bar {
            pb.set_message(filename.to_string());
            pb.inc(1);
        }
    };

    let mut report = match args.jobs.or(config.jobs) {
        Some(jobs) => rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build()
            .context("failed to start worker pool")?
            .install(|| run_batch(&analyzer, &documents, windows, on_done)),
        None => run_batch(&analyzer, &documents, windows, on_done),
    };
    if let Some(pb) = bar {
        pb.finish_and_clear();
    }

    failures.append(&mut report.failures);
    report.failures = failures;

    if let Some(ref path) = args.output {
        export::write_csv_file(&report.rows, path)
            .with_context(|| format!("failed to write {path}"))?;
    }

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_rows(&report.rows);
    }

    for failure in &report.failures {
        eprintln!("{}: {}", failure.filename, failure.error);
    }
    if !quiet && !global_json {
        print_summary(&report, args.output.as_deref());
    }

    if !report.has_rows() {
        bail!("no documents could be analyzed");
    }
    Ok(())
}

fn load_documents(
    files: &[Utf8PathBuf],
    max_bytes: Option<usize>,
    failures: &mut Vec<DocumentFailure>,
) -> Vec<Document> {
    let mut documents = Vec::with_capacity(files.len());
    for path in files {
        match load_document(path, max_bytes) {
            Ok(doc) => documents.push(doc),
            Err(err) => {
                tracing::warn!(path = %path, error = %err, "document could not be loaded");
                failures.push(DocumentFailure::from_error(
                    lexdiv_core::inputs::display_name(path),
                    &err,
                ));
            }
        }
    }
    documents
}

fn progress_bar(len: usize) -> anyhow::Result<ProgressBar> {
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .context("invalid progress template")?
        .progress_chars("#>-");
    let pb = ProgressBar::new(len as u64);
    pb.set_style(style);
    Ok(pb)
}

fn print_rows(rows: &[AnalysisRow]) {
    for row in rows {
        println!("{}", row.filename.bold());
        println!(
            "  {} all {:.4}  verb {:.4}  noun {:.4}  adj {:.4}  adv {:.4}",
            "MATTR:".cyan(),
            row.all_words_mattr,
            row.verb_mattr,
            row.noun_mattr,
            row.adjective_mattr,
            row.adverb_mattr,
        );
        println!(
            "  {} AWL {:.4}  bigram {:.4}  trigram {:.4}",
            "Sophistication:".cyan(),
            row.awl_ratio,
            row.bigram_ratio,
            row.trigram_ratio,
        );
    }
}

fn print_summary(report: &BatchReport, output: Option<&Utf8Path>) {
    let analyzed = report.rows.len();
    let total = report.total();
    let counts = format!("{analyzed} of {total}");
    if report.failures.is_empty() {
        eprintln!("{} {} documents analyzed", "✓".green(), counts);
    } else {
        eprintln!("{} {} documents analyzed", "!".yellow(), counts);
    }
    if let Some(path) = output {
        eprintln!("{}: {}", "Results written to".dimmed(), path.cyan());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(paths: Vec<Utf8PathBuf>) -> AnalyzeArgs {
        AnalyzeArgs {
            paths,
            win_all: None,
            win_pos: None,
            output: None,
            jobs: Some(1),
        }
    }

    fn corpus() -> (TempDir, Utf8PathBuf) {
        let tmp = TempDir::new().unwrap();
        let root = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        fs::write(
            root.join("a.txt"),
            "The committee approved the new policy after a long debate.",
        )
        .unwrap();
        (tmp, root)
    }

    #[test]
    fn analyzes_a_file() {
        let (_tmp, root) = corpus();
        let result = cmd_analyze(
            args(vec![root.join("a.txt")]),
            true,
            true,
            &Config::default(),
            &ConfigSources::default(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn invalid_window_is_an_error() {
        let (_tmp, root) = corpus();
        let mut a = args(vec![root.join("a.txt")]);
        a.win_pos = Some(201);
        let err = cmd_analyze(a, true, true, &Config::default(), &ConfigSources::default())
            .unwrap_err();
        assert!(format!("{err:#}").contains("win_pos must be between 5 and 200"));
    }

    #[test]
    fn all_failures_is_an_error() {
        let (_tmp, root) = corpus();
        let err = cmd_analyze(
            args(vec![root.join("missing.txt")]),
            true,
            true,
            &Config::default(),
            &ConfigSources::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("no documents"));
    }

    #[test]
    fn writes_csv_output() {
        let (_tmp, root) = corpus();
        let out = root.join("out.csv");
        let mut a = args(vec![root.join("a.txt"), root.join("missing.txt")]);
        a.output = Some(out.clone());
        cmd_analyze(a, true, true, &Config::default(), &ConfigSources::default()).unwrap();

        let rows = export::read_csv(fs::File::open(&out).unwrap()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].filename, "a.txt");
    }

    #[test]
    fn load_failures_are_collected() {
        let (_tmp, root) = corpus();
        let mut failures = Vec::new();
        let docs = load_documents(
            &[root.join("a.txt"), root.join("gone.txt")],
            None,
            &mut failures,
        );
        assert_eq!(docs.len(), 1);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].filename, "gone.txt");
        assert!(failures[0].error.starts_with("failed to read"));
    }
}
