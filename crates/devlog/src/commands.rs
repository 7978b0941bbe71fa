// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Command dispatch
//!
//! Each report command loads the config, probes Copilot, reads the commits
//! it needs and hands a [`Report`] to the presenters. Reads that do not
//! depend on each other run concurrently.

use std::io::Write;
use std::path::PathBuf;

use devlog_copilot::{ReportContext, SummaryKind, SummaryRequest};
use devlog_git::{GitError, Selection, group_commits_by_date};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::cli::{Cli, Command, RangeArg};
use crate::config::{CONFIG_FILE_NAMES, Config, OutputFormat};
use crate::context::RunContext;
use crate::history::{History, RepoInfo};
use crate::present::{
    RenderOptions, TerminalPresenter, render_json, render_markdown, render_status_json,
};
use crate::report::{Report, ReportBody};

// ============================================================================
// Error Types
// ============================================================================

/// Errors that end a command
#[derive(Debug, Error)]
pub enum CommandError {
    /// Reading the repository failed
    #[error(transparent)]
    Git(#[from] GitError),

    /// The `recap` argument is not a `<from>..<to>` range
    #[error("Invalid range '{input}': expected <from>..<to>, e.g. v1.0.0..HEAD")]
    InvalidRange {
        /// The argument as given
        input: String,
    },

    /// `init` found an existing config file
    #[error("{} already exists. Use --force to overwrite it.", path.display())]
    ConfigExists {
        /// The existing file
        path: PathBuf,
    },

    /// Filesystem or stream error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Failed to produce JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A blocking git read panicked or was cancelled
    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// No subcommand was given
    #[error("No command given. Run 'devlog --help' for usage.")]
    MissingCommand,
}

// ============================================================================
// Outcomes
// ============================================================================

/// Repository, config and Copilot state shown by `devlog status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    /// Repository name
    pub repo: String,
    /// Current branch
    pub branch: String,
    /// Author name
    pub author: String,
    /// Commits reachable from HEAD
    pub commit_count: usize,
    /// Config file in use, or "defaults"
    pub config_source: String,
    /// Whether Copilot answered the probe
    pub ai_available: bool,
    /// Binary that was probed
    pub ai_program: String,
}

/// What a command produced
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A report to render
    Report(Box<Report>),
    /// Nothing to report; carries the warning
    NoCommits(String),
    /// `init` wrote this file
    Initialized(PathBuf),
    /// `devlog status`
    Status(StatusReport),
}

// ============================================================================
// Dispatch
// ============================================================================

/// Run the command selected on `cli`
///
/// # Errors
///
/// Returns `CommandError` for an invalid range, a directory outside any
/// repository, unknown references or filesystem failures. Copilot failures
/// are never errors; they fall back to the local summary.
pub async fn execute(cli: &Cli, ctx: &mut RunContext) -> Result<Outcome, CommandError> {
    let command = cli.command.as_ref().ok_or(CommandError::MissingCommand)?;

    // Validate before touching the repository
    let job = match command {
        Command::Init { force } => return init(ctx, *force).map(Outcome::Initialized),
        Command::Recap { range } => Job::Recap(RangeArg::parse(range)?),
        Command::Today => Job::Today,
        Command::Standup => Job::Standup,
        Command::Week => Job::Week,
        Command::Release => Job::Release,
        Command::Status => Job::Status,
    };

    if command.uses_ai() {
        ctx.probe_ai().await;
    }

    let history = History::open(ctx.directory()).await?;
    debug!(workdir = %history.workdir().display(), "Opened repository");

    match job {
        Job::Today => today(&history, ctx).await,
        Job::Standup => standup(&history, ctx).await,
        Job::Week => week(&history, ctx).await,
        Job::Release => release(&history, ctx).await,
        Job::Recap(range) => recap(&history, ctx, range).await,
        Job::Status => status(&history, ctx).await.map(Outcome::Status),
    }
}

/// A command that reads the repository, with its arguments validated
enum Job {
    Today,
    Standup,
    Week,
    Release,
    Recap(RangeArg),
    Status,
}

async fn today(history: &History, ctx: &RunContext) -> Result<Outcome, CommandError> {
    let (commits, info) = tokio::try_join!(
        history.commits(Selection::Today, ctx.read_options(), ctx.now),
        history.repo_info(ctx.config.author.clone()),
    )?;
    if commits.is_empty() {
        return Ok(Outcome::NoCommits("No commits found today.".to_string()));
    }

    let report_context = report_context(&info, None, None);
    let summary = ctx
        .strategy()
        .summarize(&SummaryRequest::new(SummaryKind::Daily, &report_context, &commits))
        .await;

    Ok(finish(ctx, info, ReportBody::Daily { commits }, summary))
}

async fn standup(history: &History, ctx: &RunContext) -> Result<Outcome, CommandError> {
    let (yesterday, today, info) = tokio::try_join!(
        history.commits(Selection::Yesterday, ctx.read_options(), ctx.now),
        history.commits(Selection::Today, ctx.read_options(), ctx.now),
        history.repo_info(ctx.config.author.clone()),
    )?;
    if yesterday.is_empty() && today.is_empty() {
        return Ok(Outcome::NoCommits(
            "No commits found yesterday or today.".to_string(),
        ));
    }

    let report_context = report_context(&info, None, None);
    let summary = ctx
        .strategy()
        .summarize(&SummaryRequest::standup(&report_context, &yesterday, &today))
        .await;

    Ok(finish(ctx, info, ReportBody::Standup { yesterday, today }, summary))
}

async fn week(history: &History, ctx: &RunContext) -> Result<Outcome, CommandError> {
    let (commits, info) = tokio::try_join!(
        history.commits(Selection::ThisWeek, ctx.read_options(), ctx.now),
        history.repo_info(ctx.config.author.clone()),
    )?;
    if commits.is_empty() {
        return Ok(Outcome::NoCommits("No commits found this week.".to_string()));
    }

    let report_context = report_context(&info, None, None);
    let summary = ctx
        .strategy()
        .summarize(&SummaryRequest::new(SummaryKind::Weekly, &report_context, &commits))
        .await;
    let groups = group_commits_by_date(&commits);

    Ok(finish(ctx, info, ReportBody::Weekly { groups }, summary))
}

async fn release(history: &History, ctx: &RunContext) -> Result<Outcome, CommandError> {
    let (tag, commits, info) = tokio::try_join!(
        history.release_label(),
        history.commits(Selection::SinceLastTag, ctx.read_options(), ctx.now),
        history.repo_info(ctx.config.author.clone()),
    )?;
    if commits.is_empty() {
        return Ok(Outcome::NoCommits(format!("No commits found since {tag}.")));
    }

    let report_context = report_context(&info, Some(tag.clone()), None);
    let summary = ctx
        .strategy()
        .summarize(&SummaryRequest::new(SummaryKind::Release, &report_context, &commits))
        .await;

    Ok(finish(ctx, info, ReportBody::Release { tag, commits }, summary))
}

async fn recap(
    history: &History,
    ctx: &RunContext,
    range: RangeArg,
) -> Result<Outcome, CommandError> {
    let selection = Selection::Range {
        from: range.from.clone(),
        to: range.to.clone(),
    };
    let (commits, info) = tokio::try_join!(
        history.commits(selection, ctx.read_options(), ctx.now),
        history.repo_info(ctx.config.author.clone()),
    )?;
    let range = range.to_string();
    if commits.is_empty() {
        return Ok(Outcome::NoCommits(format!("No commits found in {range}.")));
    }

    let report_context = report_context(&info, None, Some(range.clone()));
    let summary = ctx
        .strategy()
        .summarize(&SummaryRequest::new(SummaryKind::Recap, &report_context, &commits))
        .await;

    Ok(finish(ctx, info, ReportBody::Recap { range, commits }, summary))
}

async fn status(history: &History, ctx: &RunContext) -> Result<StatusReport, CommandError> {
    let (info, commit_count) = tokio::try_join!(
        history.repo_info(ctx.config.author.clone()),
        history.commit_count(),
    )?;
    Ok(StatusReport {
        repo: info.name,
        branch: info.branch,
        author: info.author,
        commit_count,
        config_source: ctx.config_source.to_string(),
        ai_available: ctx.ai_available,
        ai_program: ctx.copilot.program().to_string(),
    })
}

/// Write a default `.devlogrc` into the run directory
fn init(ctx: &RunContext, force: bool) -> Result<PathBuf, CommandError> {
    let path = ctx.directory().join(CONFIG_FILE_NAMES[0]);
    if path.exists() && !force {
        return Err(CommandError::ConfigExists { path });
    }
    let mut text = Config::default().to_json_pretty()?;
    text.push('\n');
    std::fs::write(&path, text)?;
    Ok(path)
}

fn report_context(info: &RepoInfo, tag: Option<String>, range: Option<String>) -> ReportContext {
    ReportContext {
        repo: info.name.clone(),
        branch: info.branch.clone(),
        author: info.author.clone(),
        tag,
        range,
    }
}

fn finish(
    ctx: &RunContext,
    info: RepoInfo,
    body: ReportBody,
    summary: devlog_copilot::Summary,
) -> Outcome {
    debug!(source = %summary.source, "Summarized report");
    Outcome::Report(Box::new(Report {
        info,
        body,
        summary,
        generated_at: ctx.now.fixed_offset(),
    }))
}

// ============================================================================
// Output
// ============================================================================

/// Where a run writes its output
pub struct Streams<'a> {
    /// Reports and command results
    pub out: &'a mut dyn Write,
    /// Warnings
    pub err: &'a mut dyn Write,
    /// Whether to emit colour codes
    pub color: bool,
}

/// Execute `cli` and print its outcome
///
/// # Errors
///
/// Returns any `CommandError` from the command or from writing output.
pub async fn run(cli: &Cli, streams: Streams<'_>) -> Result<(), CommandError> {
    let mut ctx = RunContext::new(cli)?;
    debug!(config = %ctx.config_source, directory = %ctx.directory().display(), "Loaded context");

    let outcome = execute(cli, &mut ctx).await?;
    emit(&ctx, &outcome, streams)
}

/// Print an outcome according to the context's output settings
///
/// # Errors
///
/// Returns an error if writing to a stream or the export file fails.
pub fn emit(ctx: &RunContext, outcome: &Outcome, streams: Streams<'_>) -> Result<(), CommandError> {
    let Streams { out, err, color } = streams;
    let options = RenderOptions {
        show_files: ctx.config.show_files,
        show_stats: ctx.config.show_stats,
    };

    match outcome {
        Outcome::Report(report) => {
            match ctx.stdout_format() {
                OutputFormat::Json => writeln!(out, "{}", render_json(report)?)?,
                OutputFormat::Markdown => write!(out, "{}", render_markdown(report, options))?,
                OutputFormat::Terminal => {
                    TerminalPresenter::new(out, color, options, ctx.now).render_report(report)?;
                }
            }
            if let (Some(path), Some(format)) = (&ctx.output, ctx.export_format()) {
                let text = match format {
                    OutputFormat::Json => format!("{}\n", render_json(report)?),
                    _ => render_markdown(report, options),
                };
                std::fs::write(path, text)?;
                info!(path = %path.display(), "Wrote report");
            }
        }
        Outcome::NoCommits(message) => {
            TerminalPresenter::new(err, color, options, ctx.now).warn(message)?;
        }
        Outcome::Initialized(path) => {
            TerminalPresenter::new(out, color, options, ctx.now)
                .success(&format!("Created {}", path.display()))?;
        }
        Outcome::Status(status) => {
            if ctx.json {
                writeln!(out, "{}", render_status_json(status)?)?;
            } else {
                TerminalPresenter::new(out, color, options, ctx.now).render_status(status)?;
            }
        }
    }
    Ok(())
}
