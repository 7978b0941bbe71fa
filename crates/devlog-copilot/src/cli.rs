// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! GitHub Copilot CLI adapter
//!
//! Runs `copilot --version` to probe for the tool and `copilot -p <prompt>`
//! to generate narratives. Every generation operation returns an empty
//! string on failure so callers can fall back to the local summarizer.

use std::process::Stdio;
use std::sync::LazyLock;
use std::time::Duration;

use devlog_git::Commit;
use regex::Regex;
use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tracing::{Instrument, debug, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;
use tracing_indicatif::style::ProgressStyle;

use crate::error::CopilotError;
use crate::prompt::{ReportContext, SummaryKind, SummaryRequest, build_prompt};
use crate::sanitize::sanitize_output;

/// Default program name
pub const DEFAULT_PROGRAM: &str = "copilot";

/// Environment variable overriding the program
pub const PROGRAM_ENV_VAR: &str = "DEVLOG_COPILOT_BIN";

/// Timeout for `--version`
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(15);

/// Timeout for a generation call
pub const GENERATE_TIMEOUT: Duration = Duration::from_secs(60);

/// Maximum captured stdout, in bytes
pub const MAX_OUTPUT_BYTES: usize = 10 * 1024 * 1024;

mod flags {
    pub const VERSION: &str = "--version";
    pub const PROMPT: &str = "-p";
}

static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d+").expect("Invalid version regex"));

/// Handle to the Copilot CLI
#[derive(Debug, Clone)]
pub struct CopilotCli {
    program: String,
    probe_timeout: Duration,
    generate_timeout: Duration,
    max_output: usize,
}

impl Default for CopilotCli {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl CopilotCli {
    /// Create a handle for a specific program
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            probe_timeout: PROBE_TIMEOUT,
            generate_timeout: GENERATE_TIMEOUT,
            max_output: MAX_OUTPUT_BYTES,
        }
    }

    /// Use `DEVLOG_COPILOT_BIN` if set, else `copilot`
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var(PROGRAM_ENV_VAR) {
            Ok(program) if !program.trim().is_empty() => Self::new(program),
            _ => Self::default(),
        }
    }

    /// Override both timeouts
    #[must_use]
    pub fn with_timeouts(mut self, probe: Duration, generate: Duration) -> Self {
        self.probe_timeout = probe;
        self.generate_timeout = generate;
        self
    }

    /// Override the stdout capture limit
    #[must_use]
    pub fn with_max_output(mut self, bytes: usize) -> Self {
        self.max_output = bytes;
        self
    }

    /// The program this handle runs
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Check whether the CLI is installed and answers `--version`
    ///
    /// Any failure means unavailable.
    #[tracing::instrument(level = "debug", skip(self), fields(program = %self.program))]
    pub async fn is_available(&self) -> bool {
        match self.run(&[flags::VERSION], self.probe_timeout).await {
            Ok(stdout) => {
                let available = VERSION_REGEX.is_match(&stdout);
                debug!(available, version = stdout.trim(), "Probed Copilot CLI");
                available
            }
            Err(e) => {
                debug!(error = %e, "Copilot CLI unavailable");
                false
            }
        }
    }

    /// Run `-p <prompt>` and return sanitized output
    ///
    /// # Errors
    ///
    /// Returns `CopilotError` if the process cannot be spawned, exits
    /// unsuccessfully, times out, or writes more than the capture limit.
    pub async fn run_prompt(&self, prompt: &str) -> Result<String, CopilotError> {
        let stdout = self
            .run(&[flags::PROMPT, prompt], self.generate_timeout)
            .await?;
        Ok(sanitize_output(&stdout))
    }

    /// Generate a summary for a request, or `""` on empty input or failure
    #[tracing::instrument(level = "debug", skip(self, request), fields(kind = ?request.kind))]
    pub async fn generate(&self, request: &SummaryRequest<'_>) -> String {
        if request.is_empty() {
            return String::new();
        }

        let prompt = build_prompt(request);
        debug!(prompt_len = prompt.len(), "Built prompt");

        let span = info_span!("copilot");
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg}") {
            span.pb_set_style(&style);
        }
        span.pb_set_message("Asking Copilot...");
        span.pb_set_finish_message("");

        match self.run_prompt(&prompt).instrument(span).await {
            Ok(text) => text,
            Err(e) => {
                debug!(error = %e, "Copilot generation failed, falling back");
                String::new()
            }
        }
    }

    /// Narrative for today's commits
    pub async fn daily_summary(&self, context: &ReportContext, commits: &[Commit]) -> String {
        self.generate(&SummaryRequest::new(SummaryKind::Daily, context, commits))
            .await
    }

    /// Standup update from yesterday's and today's commits
    pub async fn standup_summary(
        &self,
        context: &ReportContext,
        yesterday: &[Commit],
        today: &[Commit],
    ) -> String {
        self.generate(&SummaryRequest::standup(context, yesterday, today))
            .await
    }

    /// Recap of this week's commits
    pub async fn weekly_summary(&self, context: &ReportContext, commits: &[Commit]) -> String {
        self.generate(&SummaryRequest::new(SummaryKind::Weekly, context, commits))
            .await
    }

    /// Release notes since the last tag
    pub async fn release_notes(&self, context: &ReportContext, commits: &[Commit]) -> String {
        self.generate(&SummaryRequest::new(SummaryKind::Release, context, commits))
            .await
    }

    /// Summary of an arbitrary `from..to` range
    pub async fn range_summary(&self, context: &ReportContext, commits: &[Commit]) -> String {
        self.generate(&SummaryRequest::new(SummaryKind::Recap, context, commits))
            .await
    }

    /// Spawn the program and collect stdout within `limit`
    async fn run(&self, args: &[&str], limit: Duration) -> Result<String, CopilotError> {
        let mut child = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    CopilotError::NotInstalled {
                        program: self.program.clone(),
                    }
                } else {
                    CopilotError::Io(e)
                }
            })?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| std::io::Error::other("stdout not captured"))?;
        let mut stderr = child
            .stderr
            .take()
            .ok_or_else(|| std::io::Error::other("stderr not captured"))?;
        let max_output = self.max_output;

        let collect = async move {
            let stderr_task = tokio::spawn(async move {
                let mut buf = Vec::new();
                let _ = stderr.read_to_end(&mut buf).await;
                buf
            });

            let mut out = Vec::new();
            stdout
                .take(max_output as u64 + 1)
                .read_to_end(&mut out)
                .await?;
            if out.len() > max_output {
                return Err(CopilotError::OutputTooLarge { limit: max_output });
            }

            let status = child.wait().await?;
            let err = stderr_task.await.unwrap_or_default();

            if status.success() {
                Ok::<String, CopilotError>(String::from_utf8_lossy(&out).into_owned())
            } else {
                Err(CopilotError::Failed {
                    code: status.code().unwrap_or(-1),
                    stderr: String::from_utf8_lossy(&err).trim().to_string(),
                })
            }
        };

        tokio::time::timeout(limit, collect)
            .await
            .map_err(|_| CopilotError::Timeout {
                seconds: limit.as_secs(),
            })?
    }
}
