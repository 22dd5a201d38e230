//! Info command implementation

use camino::Utf8Path;
use clap::Args;
use lexdiv_core::config::{Config, ConfigSources};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    homepage: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            homepage: env!("CARGO_PKG_HOMEPAGE"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    win_all: usize,
    win_pos: usize,
    /// Size of the effective academic list; absent when it cannot be loaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    academic_words: Option<usize>,
    categories: Vec<CategoryInfo>,
    include: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    jobs: Option<usize>,
}

#[derive(Serialize)]
struct CategoryInfo {
    category: &'static str,
    prefix: String,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        let base_dir = sources.primary_dir().unwrap_or_else(|| Utf8Path::new("."));
        let academic_words = match config.academic_word_list(base_dir) {
            Ok(list) => Some(list.len()),
            Err(e) => {
                tracing::warn!(error = %e, "academic word list unavailable");
                None
            }
        };
        let categories = config
            .category_map()
            .iter()
            .map(|(category, prefix)| CategoryInfo {
                category: category.label(),
                prefix: prefix.to_string(),
            })
            .collect();

        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            win_all: config.win_all,
            win_pos: config.win_pos,
            academic_words,
            categories,
            include: config.include.clone(),
            max_input_bytes: config.input_limit(),
            jobs: config.jobs,
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `sources` - Config source metadata from loading
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    let package = &full_info.package;
    println!("{} {}", package.name.bold(), package.version.green());
    if !package.description.is_empty() {
        println!("{}", package.description);
    }
    if !package.license.is_empty() {
        println!("{}: {}", "License".dimmed(), package.license);
    }
    if !package.repository.is_empty() {
        println!("{}: {}", "Repository".dimmed(), package.repository.cyan());
    }

    let cfg = &full_info.config;
    println!();
    println!("{}", "Configuration".bold().underline());
    if let Some(ref path) = cfg.config_file {
        println!("{}: {}", "Config file".dimmed(), path.cyan());
    } else {
        println!("{}: {}", "Config file".dimmed(), "none loaded".yellow());
    }
    println!("{}: {}", "Log level".dimmed(), cfg.log_level);
    if let Some(ref dir) = cfg.log_dir {
        println!("{}: {}", "Log directory".dimmed(), dir);
    }

    println!();
    println!("{}", "Analysis".bold().underline());
    println!("{}: {}", "All-words window".dimmed(), cfg.win_all);
    println!("{}: {}", "Part-of-speech window".dimmed(), cfg.win_pos);
    print_opt("Academic words", &cfg.academic_words);
    let prefixes: Vec<String> = cfg
        .categories
        .iter()
        .map(|c| format!("{}={}", c.category, c.prefix))
        .collect();
    println!("{}: {}", "Category prefixes".dimmed(), prefixes.join(", "));
    println!("{}: {}", "Include".dimmed(), cfg.include.join(", "));
    print_opt("Max input bytes", &cfg.max_input_bytes);
    print_opt("Jobs", &cfg.jobs);

    Ok(())
}

/// Print an optional value or "(not set)".
fn print_opt<T: std::fmt::Display>(label: &str, value: &Option<T>) {
    match value {
        Some(v) => println!("{}: {}", label.dimmed(), v),
        None => println!("{}: {}", label.dimmed(), "(not set)".dimmed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmd_info_text_succeeds() {
        assert!(
            cmd_info(InfoArgs::default(), false, &Config::default(), &ConfigSources::default())
                .is_ok()
        );
    }

    #[test]
    fn test_cmd_info_json_via_global() {
        assert!(
            cmd_info(InfoArgs::default(), true, &Config::default(), &ConfigSources::default())
                .is_ok()
        );
    }

    #[test]
    fn test_config_info_no_file() {
        let info = ConfigInfo::from_config(&Config::default(), &ConfigSources::default());
        assert!(info.config_file.is_none());
        assert_eq!(info.log_level, "info");
        assert_eq!(info.win_all, 50);
        assert_eq!(info.win_pos, 11);
        assert_eq!(info.categories.len(), 4);
        assert_eq!(info.categories[0].prefix, "VB");
        assert!(info.academic_words.is_some_and(|n| n > 0));
    }

    #[test]
    fn unreadable_word_list_is_reported_as_absent() {
        let config = Config {
            academic_words_file: Some("/definitely/not/here.txt".into()),
            ..Config::default()
        };
        let info = ConfigInfo::from_config(&config, &ConfigSources::default());
        assert!(info.academic_words.is_none());
    }
}
