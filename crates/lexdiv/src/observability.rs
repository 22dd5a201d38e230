//! Logging setup: human-readable stderr output plus an optional JSON log file.

use std::path::{Path, PathBuf};

use anyhow::Context;
use lexdiv_core::config::user_data_local_dir;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_PREFIX: &str = "lexdiv.log";

/// Where (and whether) to write the JSON log file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Directory for daily-rotated JSON logs. `None` disables file logging.
    pub log_dir: Option<PathBuf>,
    /// Log file name; the daily appender adds a `.YYYY-MM-DD` suffix.
    /// `None` means `lexdiv.log`.
    pub file_name: Option<String>,
    /// Set when `log_dir` is the platform default rather than an explicit choice.
    pub is_default_dir: bool,
}

impl ObservabilityConfig {
    /// Resolve the log location from the environment and config.
    ///
    /// Precedence: `LEXDIV_LOG_PATH` (directory and file name of the log),
    /// `LEXDIV_LOG_DIR`, the config file's `log_dir`, then the platform's
    /// local data directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os("LEXDIV_LOG_PATH").map(PathBuf::from),
            std::env::var_os("LEXDIV_LOG_DIR").map(PathBuf::from),
            config_log_dir,
        )
    }

    fn resolve(
        log_path: Option<PathBuf>,
        log_dir: Option<PathBuf>,
        config_log_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = log_path
            && let Some(name) = path.file_name().and_then(|n| n.to_str())
        {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
            return Self {
                log_dir: Some(dir),
                file_name: Some(name.to_string()),
                is_default_dir: false,
            };
        }

        match log_dir.or(config_log_dir) {
            Some(dir) => Self {
                log_dir: Some(dir),
                file_name: None,
                is_default_dir: false,
            },
            None => Self {
                log_dir: user_data_local_dir().map(|dir| dir.join("logs").into_std_path_buf()),
                file_name: None,
                is_default_dir: true,
            },
        }
    }

    fn file_name(&self) -> &str {
        self.file_name.as_deref().unwrap_or(LOG_FILE_PREFIX)
    }
}

/// Build the event filter.
///
/// `RUST_LOG` wins when set. Otherwise `--quiet` means errors only, each
/// `-v` raises the level by one step, and the configured level is the base.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(level_for(quiet, verbose, config_level))
}

fn level_for(quiet: bool, verbose: u8, config_level: &str) -> &str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => config_level,
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop; hold it for the
/// life of the process.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    let (file_layer, guard) = match config.log_dir {
        Some(ref dir) if config.is_default_dir && std::fs::create_dir_all(dir).is_err() => {
            // An unwritable platform default only disables the file log.
            (None, None)
        }
        Some(ref dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, config.file_name());
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_writer(writer).boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(level_for(true, 3, "debug"), "error");
    }

    #[test]
    fn verbosity_steps() {
        assert_eq!(level_for(false, 0, "warn"), "warn");
        assert_eq!(level_for(false, 1, "warn"), "debug");
        assert_eq!(level_for(false, 2, "warn"), "trace");
    }

    #[test]
    fn log_path_sets_directory_and_file_name() {
        let cfg = ObservabilityConfig::resolve(
            Some(PathBuf::from("/var/log/lexdiv/run.jsonl")),
            Some(PathBuf::from("/ignored")),
            None,
        );
        assert_eq!(cfg.log_dir, Some(PathBuf::from("/var/log/lexdiv")));
        assert_eq!(cfg.file_name(), "run.jsonl");
        assert!(!cfg.is_default_dir);
    }

    #[test]
    fn bare_log_path_uses_current_dir() {
        let cfg = ObservabilityConfig::resolve(Some(PathBuf::from("run.log")), None, None);
        assert_eq!(cfg.log_dir, Some(PathBuf::from(".")));
        assert_eq!(cfg.file_name(), "run.log");
    }

    #[test]
    fn log_dir_beats_config_and_keeps_default_name() {
        let cfg = ObservabilityConfig::resolve(
            None,
            Some(PathBuf::from("/env/logs")),
            Some(PathBuf::from("/config/logs")),
        );
        assert_eq!(cfg.log_dir, Some(PathBuf::from("/env/logs")));
        assert_eq!(cfg.file_name(), "lexdiv.log");
    }

    #[test]
    fn config_dir_is_the_fallback() {
        let cfg = ObservabilityConfig::resolve(None, None, Some(PathBuf::from("/tmp/logs")));
        assert_eq!(cfg.log_dir, Some(PathBuf::from("/tmp/logs")));
        assert!(!cfg.is_default_dir);

        let fallback = ObservabilityConfig::resolve(None, None, None);
        assert!(fallback.is_default_dir);
        if let Some(dir) = fallback.log_dir {
            assert!(dir.ends_with("logs"));
        }
    }
}
