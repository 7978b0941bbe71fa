// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! `.devlogrc` configuration
//!
//! The file is JSON with camelCase keys. It is looked up in the working
//! directory, then in the home directory; the first file found wins. A file
//! that cannot be read or parsed yields the defaults.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// File names checked in each directory, in order
pub const CONFIG_FILE_NAMES: [&str; 2] = [".devlogrc", ".devlogrc.json"];

/// Default cap on commits read per selection
pub const DEFAULT_MAX_COMMITS: usize = 100;

/// How reports are printed to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Coloured terminal output
    #[default]
    Terminal,
    /// A markdown document
    Markdown,
    /// The JSON envelope
    Json,
}

/// User configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Output format for stdout
    pub format: OutputFormat,
    /// Whether Copilot may be used
    pub use_copilot: bool,
    /// Author override; also filters commits to this author
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Show changed files under each commit
    pub show_files: bool,
    /// Show the stats block
    pub show_stats: bool,
    /// Cap on commits read per selection
    pub max_commits: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Terminal,
            use_copilot: true,
            author: None,
            show_files: true,
            show_stats: true,
            max_commits: DEFAULT_MAX_COMMITS,
        }
    }
}

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Parsed from this file
    File(PathBuf),
    /// This file was found but could not be used
    Invalid(PathBuf),
    /// No file was found
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Invalid(path) => write!(f, "{} (invalid, using defaults)", path.display()),
            Self::Defaults => write!(f, "defaults"),
        }
    }
}

/// A configuration together with its source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    /// The configuration values
    pub config: Config,
    /// Where they came from
    pub source: ConfigSource,
}

impl Config {
    /// Load from `cwd`, falling back to the home directory
    #[must_use]
    pub fn load(cwd: &Path) -> LoadedConfig {
        let mut search = vec![cwd.to_path_buf()];
        if let Some(home) = dirs::home_dir() {
            search.push(home);
        }
        Self::load_from(&search)
    }

    /// Load the first config file found in `dirs`
    #[must_use]
    pub fn load_from(dirs: &[PathBuf]) -> LoadedConfig {
        let Some(path) = find_config_file(dirs) else {
            debug!("No config file found, using defaults");
            return LoadedConfig {
                config: Self::default(),
                source: ConfigSource::Defaults,
            };
        };

        let parsed = std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|text| Self::from_json(&text).map_err(|e| e.to_string()));

        match parsed {
            Ok(config) => {
                debug!(path = %path.display(), "Loaded config");
                LoadedConfig {
                    config,
                    source: ConfigSource::File(path),
                }
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Ignoring invalid config file");
                LoadedConfig {
                    config: Self::default(),
                    source: ConfigSource::Invalid(path),
                }
            }
        }
    }

    /// Parse configuration JSON; missing keys take their defaults
    ///
    /// # Errors
    ///
    /// Returns the parse error for malformed JSON or mistyped values.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Pretty JSON, as written by `devlog init`
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// First existing config file in `dirs`
#[must_use]
pub fn find_config_file(dirs: &[PathBuf]) -> Option<PathBuf> {
    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.is_file())
}
