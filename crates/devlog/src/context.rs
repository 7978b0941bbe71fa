// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Per-invocation state threaded through each command

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use devlog_copilot::{CopilotCli, Summarizer, SummaryStrategy};
use devlog_git::ReadOptions;
use tracing::debug;

use crate::cli::Cli;
use crate::config::{Config, ConfigSource, LoadedConfig, OutputFormat};

/// Loaded config, AI availability and output switches for one run
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Active configuration
    pub config: Config,
    /// Where the configuration came from
    pub config_source: ConfigSource,
    /// Directory the run acts on
    pub directory: PathBuf,
    /// Copilot adapter
    pub copilot: CopilotCli,
    /// Result of the availability probe
    pub ai_available: bool,
    /// `--no-ai` was given
    pub no_ai: bool,
    /// `--json` was given
    pub json: bool,
    /// Export file from `-o`
    pub output: Option<PathBuf>,
    /// Reference time for windows and relative timestamps
    pub now: DateTime<Local>,
}

impl RunContext {
    /// Build the context for `cli`, loading config from its directory
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn new(cli: &Cli) -> std::io::Result<Self> {
        let directory = match &cli.directory {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };
        let loaded = Config::load(&directory);
        Ok(Self::with_config(cli, directory, loaded, CopilotCli::from_env()))
    }

    /// Build the context from already loaded parts
    #[must_use]
    pub fn with_config(
        cli: &Cli,
        directory: PathBuf,
        loaded: LoadedConfig,
        copilot: CopilotCli,
    ) -> Self {
        Self {
            config: loaded.config,
            config_source: loaded.source,
            directory,
            copilot,
            ai_available: false,
            no_ai: cli.no_ai,
            json: cli.json,
            output: cli.output.clone(),
            now: Local::now(),
        }
    }

    /// Working directory for git and `init`
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Whether Copilot may be tried at all
    #[must_use]
    pub fn ai_allowed(&self) -> bool {
        !self.no_ai && self.config.use_copilot
    }

    /// Probe the Copilot CLI unless AI use is disabled
    pub async fn probe_ai(&mut self) -> bool {
        self.ai_available = if self.ai_allowed() {
            self.copilot.is_available().await
        } else {
            debug!(no_ai = self.no_ai, "Copilot disabled, skipping probe");
            false
        };
        self.ai_available
    }

    /// Copilot first when available, the local summarizer otherwise
    #[must_use]
    pub fn strategy(&self) -> SummaryStrategy {
        let primary: Option<Box<dyn Summarizer>> = if self.ai_available {
            Some(Box::new(self.copilot.clone()))
        } else {
            None
        };
        SummaryStrategy::new(primary)
    }

    /// Commit cap and author filter from the config
    #[must_use]
    pub fn read_options(&self) -> ReadOptions {
        let options = ReadOptions::default().with_limit(self.config.max_commits);
        match &self.config.author {
            Some(author) => options.by_author(author.clone()),
            None => options,
        }
    }

    /// Format printed on stdout
    #[must_use]
    pub fn stdout_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.config.format
        }
    }

    /// Format written to the `-o` file, if any
    #[must_use]
    pub fn export_format(&self) -> Option<OutputFormat> {
        let path = self.output.as_ref()?;
        let is_json = self.json
            || path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        Some(if is_json {
            OutputFormat::Json
        } else {
            OutputFormat::Markdown
        })
    }
}
