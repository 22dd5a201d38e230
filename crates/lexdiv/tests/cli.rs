//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

const HEADER: &str = "Filename,All_words_MATTR,Verb_MATTR,Noun_MATTR,Adjective_MATTR,\
Adverb_MATTR,LexSoph_AWLratio,LexSoph_BigramRatio,LexSoph_TrigramRatio";

/// A temp directory holding two small text documents and one Markdown file.
fn corpus() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("essay.txt"),
        "The researchers analyzed the data carefully. Their analysis revealed a \
         significant trend in the economic indicators over several periods.",
    )
    .unwrap();
    fs::write(
        tmp.path().join("story.txt"),
        "The small dog ran quickly across the green field and barked loudly at the birds.",
    )
    .unwrap();
    fs::write(
        tmp.path().join("notes.md"),
        "# Notes\n\nThe method requires a consistent approach.\n\n```\nignored code\n```\n",
    )
    .unwrap();
    fs::write(tmp.path().join("skip.log"), "not a document").unwrap();
    tmp
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("analyze"));
}

#[test]
fn long_help_lists_environment_variables() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("LEXDIV_WIN_ALL"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn no_arguments_prints_help_and_fails() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_reports_default_windows() {
    let tmp = TempDir::new().unwrap();
    let output = cmd()
        .args(["-C", path_str(tmp.path()), "info", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["config"]["win_all"], 50);
    assert_eq!(json["config"]["win_pos"], 11);
    assert_eq!(json["config"]["categories"].as_array().unwrap().len(), 4);
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_and_verbose_flags_accepted() {
    cmd().args(["-q", "info"]).assert().success();
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_never_accepted() {
    cmd().args(["--color", "never", "info"]).assert().success();
}

// =============================================================================
// Analyze
// =============================================================================

#[test]
fn analyze_requires_a_path() {
    cmd()
        .arg("analyze")
        .assert()
        .failure()
        .stderr(predicate::str::contains("PATH"));
}

#[test]
fn analyze_single_file_prints_metrics() {
    let tmp = corpus();
    cmd()
        .args(["analyze", path_str(&tmp.path().join("essay.txt"))])
        .assert()
        .success()
        .stdout(predicate::str::contains("essay.txt"))
        .stdout(predicate::str::contains("MATTR:"))
        .stdout(predicate::str::contains("Sophistication:"));
}

#[test]
fn analyze_directory_honors_include_globs() {
    let tmp = corpus();
    let output = cmd()
        .args(["analyze", path_str(tmp.path()), "--json"])
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    let names: Vec<&str> = json["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["Filename"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["essay.txt", "notes.md", "story.txt"]);
    assert!(json["failures"].as_array().unwrap().is_empty());
}

#[test]
fn analyze_json_values_are_bounded() {
    let tmp = corpus();
    let output = cmd()
        .args(["analyze", path_str(&tmp.path().join("story.txt")), "--json"])
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    let row = &json["rows"][0];
    for column in HEADER.split(',').skip(1) {
        let value = row[column].as_f64().unwrap();
        assert!((0.0..=1.0).contains(&value), "{column} = {value}");
    }
    // Every word in this sentence is distinct except "the".
    assert!(row["All_words_MATTR"].as_f64().unwrap() > 0.8);
}

#[test]
fn analyze_writes_csv_with_bom_and_header() {
    let tmp = corpus();
    let out = tmp.path().join("results.csv");
    cmd()
        .args([
            "analyze",
            path_str(&tmp.path().join("essay.txt")),
            path_str(&tmp.path().join("story.txt")),
            "-o",
            path_str(&out),
            "-q",
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).unwrap();
    assert!(bytes.starts_with(&[0xEF, 0xBB, 0xBF]), "CSV must start with a BOM");
    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(HEADER));
    assert!(lines.next().unwrap().starts_with("essay.txt,"));
    assert!(lines.next().unwrap().starts_with("story.txt,"));
    assert_eq!(lines.next(), None);
}

#[test]
fn analyze_reports_missing_file_and_continues() {
    let tmp = corpus();
    cmd()
        .args([
            "analyze",
            path_str(&tmp.path().join("essay.txt")),
            path_str(&tmp.path().join("missing.txt")),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("essay.txt"))
        .stderr(predicate::str::contains("missing.txt: "))
        .stderr(predicate::str::contains("1 of 2 documents analyzed"));
}

#[test]
fn analyze_fails_when_nothing_could_be_analyzed() {
    let tmp = TempDir::new().unwrap();
    cmd()
        .args(["analyze", path_str(&tmp.path().join("missing.txt"))])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no documents could be analyzed"));
}

#[test]
fn analyze_rejects_out_of_range_windows() {
    let tmp = corpus();
    let file = tmp.path().join("essay.txt");
    cmd()
        .args(["analyze", path_str(&file), "--win-all", "501"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("win_all must be between 5 and 500"));
    cmd()
        .args(["analyze", path_str(&file), "--win-pos", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("win_pos must be between 5 and 200"));
}

#[test]
fn analyze_accepts_window_bounds() {
    let tmp = corpus();
    let file = tmp.path().join("essay.txt");
    cmd()
        .args(["analyze", path_str(&file), "--win-all", "5", "--win-pos", "200"])
        .assert()
        .success();
}

#[test]
fn env_window_is_validated() {
    let tmp = corpus();
    cmd()
        .env("LEXDIV_WIN_ALL", "1000")
        .args(["analyze", path_str(&tmp.path().join("essay.txt"))])
        .assert()
        .failure()
        .stderr(predicate::str::contains("win_all"));
}

#[test]
fn empty_document_yields_zero_row() {
    let tmp = TempDir::new().unwrap();
    let empty = tmp.path().join("empty.txt");
    fs::write(&empty, "").unwrap();

    let output = cmd()
        .args(["analyze", path_str(&empty), "--json"])
        .assert()
        .success();
    let json: serde_json::Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    assert_eq!(json["rows"][0]["All_words_MATTR"], 0.0);
    assert_eq!(json["rows"][0]["LexSoph_TrigramRatio"], 0.0);
}

#[test]
fn oversized_input_is_a_per_document_failure() {
    let tmp = corpus();
    fs::write(tmp.path().join(".lexdiv.toml"), "max_input_bytes = 10\n").unwrap();
    cmd()
        .args([
            "-C",
            path_str(tmp.path()),
            "analyze",
            "essay.txt",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("essay.txt: input too large"));
}

#[test]
fn jobs_flag_is_accepted() {
    let tmp = corpus();
    cmd()
        .args(["analyze", path_str(tmp.path()), "-j", "2", "-q"])
        .assert()
        .success();
}
