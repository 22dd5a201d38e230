//! Configuration loading and discovery.
//!
//! Settings are layered with figment. From lowest to highest precedence:
//! 1. Built-in defaults
//! 2. User config: `~/.config/lexdiv/config.<ext>`
//! 3. Project config: `.lexdiv.<ext>` then `lexdiv.<ext>`, found by walking
//!    up from the working directory (stopping at a `.git` boundary)
//! 4. Explicit files (`--config`)
//! 5. `LEXDIV_*` environment variables
//!
//! Where `<ext>` is one of `toml`, `yaml`, `yml`, `json`. When several files
//! sit in the same directory they all merge; later extensions win.
//!
//! # Example
//! ```no_run
//! use camino::Utf8PathBuf;
//! use lexdiv_core::config::ConfigLoader;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let cwd = Utf8PathBuf::try_from(cwd).expect("current directory is not valid UTF-8");
//! let (config, _sources) = ConfigLoader::new()
//!     .with_project_search(&cwd)
//!     .load()
//!     .unwrap();
//! let windows = config.window_sizes().unwrap();
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::DEFAULT_MAX_INPUT_BYTES;
use crate::error::{ConfigError, ConfigResult};
use crate::resources::{AcademicWordList, Category, CategoryMap};
use crate::window::{DEFAULT_WIN_ALL, DEFAULT_WIN_POS, WindowSizes};

/// Tag prefix overrides, one per category. Unset categories keep their
/// Penn Treebank default.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct CategoryPrefixes {
    /// Prefix selecting verbs (default `VB`).
    pub verb: Option<String>,
    /// Prefix selecting nouns (default `NN`).
    pub noun: Option<String>,
    /// Prefix selecting adjectives (default `JJ`).
    pub adjective: Option<String>,
    /// Prefix selecting adverbs (default `RB`).
    pub adverb: Option<String>,
}

impl CategoryPrefixes {
    const fn get(&self, category: Category) -> Option<&String> {
        match category {
            Category::Verb => self.verb.as_ref(),
            Category::Noun => self.noun.as_ref(),
            Category::Adjective => self.adjective.as_ref(),
            Category::Adverb => self.adverb.as_ref(),
        }
    }
}

/// The configuration for lexdiv.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory for JSONL log files (falls back to platform defaults if unset).
    pub log_dir: Option<Utf8PathBuf>,
    /// Window size for all-words MATTR (5 to 500).
    pub win_all: usize,
    /// Window size for category MATTR (5 to 200).
    pub win_pos: usize,
    /// Extra academic words, added to the built-in list.
    pub academic_words: Vec<String>,
    /// Newline-delimited academic word file (relative to the config file).
    pub academic_words_file: Option<Utf8PathBuf>,
    /// Drop the built-in academic list, keeping only configured words.
    pub replace_academic_words: bool,
    /// Tag prefix overrides for the four categories.
    pub categories: CategoryPrefixes,
    /// Glob patterns selecting files when a directory is given as input.
    pub include: Vec<String>,
    /// Maximum input size in bytes (default: 5 MiB).
    ///
    /// Files larger than this are reported as failures instead of analyzed.
    /// Use `disable_input_limit` to remove the limit entirely.
    pub max_input_bytes: Option<usize>,
    /// Disable the input size limit entirely.
    pub disable_input_limit: bool,
    /// Worker threads for batch analysis. Omit to use every core.
    pub jobs: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            log_dir: None,
            win_all: DEFAULT_WIN_ALL,
            win_pos: DEFAULT_WIN_POS,
            academic_words: Vec::new(),
            academic_words_file: None,
            replace_academic_words: false,
            categories: CategoryPrefixes::default(),
            include: vec!["*.txt".to_string(), "*.md".to_string()],
            max_input_bytes: None,
            disable_input_limit: false,
            jobs: None,
        }
    }
}

impl Config {
    /// Validated window sizes.
    pub fn window_sizes(&self) -> ConfigResult<WindowSizes> {
        WindowSizes::new(self.win_all, self.win_pos)
    }

    /// The academic word list this configuration describes.
    ///
    /// A relative `academic_words_file` is resolved against `base_dir`,
    /// normally the directory of the primary config file.
    pub fn academic_word_list(&self, base_dir: &Utf8Path) -> ConfigResult<AcademicWordList> {
        let mut list = if self.replace_academic_words {
            AcademicWordList::from_words(std::iter::empty::<&str>())
        } else {
            AcademicWordList::builtin()
        };

        if let Some(ref file) = self.academic_words_file {
            let path = if file.is_relative() {
                base_dir.join(file)
            } else {
                file.clone()
            };
            let contents = std::fs::read_to_string(&path)
                .map_err(|source| ConfigError::WordListFile { path, source })?;
            list = list.union(AcademicWordList::parse(&contents));
        }

        Ok(list.extended(&self.academic_words))
    }

    /// The category map with configured prefixes applied.
    pub fn category_map(&self) -> CategoryMap {
        Category::ALL
            .into_iter()
            .fold(CategoryMap::default(), |map, category| {
                match self.categories.get(category) {
                    Some(prefix) if !prefix.is_empty() => map.with_prefix(category, prefix.as_str()),
                    _ => map,
                }
            })
    }

    /// Effective input size limit; `None` when the limit is disabled.
    pub fn input_limit(&self) -> Option<usize> {
        if self.disable_input_limit {
            None
        } else {
            Some(self.max_input_bytes.unwrap_or(DEFAULT_MAX_INPUT_BYTES))
        }
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Metadata about which configuration sources were loaded.
///
/// Returned alongside [`Config`] from [`ConfigLoader::load()`] so commands
/// can report the actual config files without re-discovering them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project config files found by walking up, ordered low→high precedence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// User config file from XDG config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Explicit config files loaded (e.g., from `--config` flag).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// Returns the highest-precedence config file that was loaded.
    ///
    /// Precedence: explicit files > project files > user file.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .map(Utf8PathBuf::as_path)
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }

    /// Directory holding the primary config file, if any was loaded.
    pub fn primary_dir(&self) -> Option<&Utf8Path> {
        self.primary_file().and_then(Utf8Path::parent)
    }
}

/// Supported configuration file extensions (in order of preference).
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Application name for XDG directory lookup and config file names.
const APP_NAME: &str = "lexdiv";

/// Builder for loading configuration from multiple sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Starting directory for project config search.
    project_search_root: Option<Utf8PathBuf>,
    /// Whether to include user config from XDG directory.
    include_user_config: bool,
    /// Stop searching when we hit a directory containing this file/dir.
    boundary_marker: Option<String>,
    /// Explicit config files to load.
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a new config loader with default settings.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Set the starting directory for project config search.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set whether to include user config from `~/.config/lexdiv/`.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Stop the upward search at a directory containing `marker`.
    pub fn with_boundary_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.boundary_marker = Some(marker.into());
        self
    }

    /// Disable boundary marker (search all the way to filesystem root).
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary_marker = None;
        self
    }

    /// Add an explicit config file to load. Later files take precedence.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration, merging all discovered sources.
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let mut sources = ConfigSources::default();

        if self.include_user_config
            && let Some(user_config) = self.find_user_config()
        {
            figment = Self::merge_file(figment, &user_config);
            sources.user_file = Some(user_config);
        }

        if let Some(ref root) = self.project_search_root {
            let project_configs = self.find_project_configs(root);
            for pc in &project_configs {
                figment = Self::merge_file(figment, pc);
            }
            sources.project_files = project_configs;
        }

        for file in &self.explicit_files {
            figment = Self::merge_file(figment, file);
        }
        sources.explicit_files = self.explicit_files;

        // LEXDIV_WIN_ALL=100, LEXDIV_LOG_LEVEL=debug, ...
        figment = figment.merge(Env::prefixed("LEXDIV_").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::info!(
            log_level = config.log_level.as_str(),
            win_all = config.win_all,
            win_pos = config.win_pos,
            "configuration loaded"
        );
        Ok((config, sources))
    }

    /// Load configuration, returning an error if no config file is found.
    pub fn load_or_error(self) -> ConfigResult<(Config, ConfigSources)> {
        let has_user = self.include_user_config && self.find_user_config().is_some();
        let has_project = self
            .project_search_root
            .as_ref()
            .is_some_and(|root| !self.find_project_configs(root).is_empty());
        let has_explicit = !self.explicit_files.is_empty();

        if !has_user && !has_project && !has_explicit {
            return Err(ConfigError::NotFound);
        }

        self.load()
    }

    /// Config files from the closest directory that has any, ordered
    /// low-to-high precedence: dotfiles before regular files.
    fn find_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        let mut current = Some(start.to_path_buf());

        while let Some(dir) = current {
            let dotfiles = CONFIG_EXTENSIONS
                .iter()
                .map(|ext| dir.join(format!(".{APP_NAME}.{ext}")));
            let regular = CONFIG_EXTENSIONS
                .iter()
                .map(|ext| dir.join(format!("{APP_NAME}.{ext}")));
            let found: Vec<Utf8PathBuf> = dotfiles.chain(regular).filter(|p| p.is_file()).collect();

            if !found.is_empty() {
                return found;
            }

            // Checked after the config files so a config next to the marker is found.
            if let Some(ref marker) = self.boundary_marker
                && dir.join(marker).exists()
                && dir != start
            {
                break;
            }

            current = dir.parent().map(Utf8Path::to_path_buf);
        }

        Vec::new()
    }

    fn find_user_config(&self) -> Option<Utf8PathBuf> {
        let config_dir = user_config_dir()?;
        CONFIG_EXTENSIONS
            .iter()
            .map(|ext| config_dir.join(format!("config.{ext}")))
            .find(|p| p.is_file())
    }

    /// Merge a config file into the figment, detecting format from extension.
    fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
        match path.extension() {
            Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
            Some("json") => figment.merge(Json::file_exact(path.as_str())),
            _ => figment.merge(Toml::file_exact(path.as_str())),
        }
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", APP_NAME)
}

/// Get the user config directory path.
///
/// Returns `~/.config/lexdiv/` on Linux, `~/Library/Application Support/lexdiv/`
/// on macOS, and equivalent on other platforms.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = project_dirs()?;
    Utf8PathBuf::from_path_buf(proj_dirs.config_dir().to_path_buf()).ok()
}

/// Get the local data directory path, used as the default log location.
pub fn user_data_local_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = project_dirs()?;
    Utf8PathBuf::from_path_buf(proj_dirs.data_local_dir().to_path_buf()).ok()
}
