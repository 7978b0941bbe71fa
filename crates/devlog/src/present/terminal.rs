// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Coloured terminal rendering

use std::fmt::Display;
use std::io::{self, Write};

use chrono::{DateTime, Local};
use crossterm::style::{Color, Stylize};
use devlog_copilot::SummarySource;
use devlog_git::Commit;

use super::{CommitType, MAX_LISTED_FILES, RenderOptions, files_summary, relative_time};
use crate::commands::StatusReport;
use crate::report::{Report, ReportBody};

/// Smallest inner width of the header box
const MIN_BOX_WIDTH: usize = 40;

/// Indent for lines under a commit
const DETAIL_INDENT: &str = "           ";

impl CommitType {
    /// Colour used for the subject line
    #[must_use]
    pub fn color(self) -> Option<Color> {
        match self {
            Self::Feat => Some(Color::Green),
            Self::Fix => Some(Color::Red),
            Self::Docs => Some(Color::Blue),
            Self::Refactor => Some(Color::Magenta),
            Self::Test => Some(Color::Cyan),
            Self::Chore => Some(Color::DarkGrey),
            Self::Other => None,
        }
    }
}

/// Writes reports and messages to a terminal stream
pub struct TerminalPresenter<W: Write> {
    out: W,
    color: bool,
    options: RenderOptions,
    now: DateTime<Local>,
}

impl<W: Write> TerminalPresenter<W> {
    /// Create a presenter; `color` turns ANSI styling on
    pub fn new(out: W, color: bool, options: RenderOptions, now: DateTime<Local>) -> Self {
        Self {
            out,
            color,
            options,
            now,
        }
    }

    /// Consume the presenter, returning the stream
    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: impl Display, color: Option<Color>) -> String {
        match color {
            Some(color) if self.color => text.to_string().with(color).to_string(),
            _ => text.to_string(),
        }
    }

    fn bold(&self, text: impl Display) -> String {
        if self.color {
            text.to_string().bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Render a full report
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn render_report(&mut self, report: &Report) -> io::Result<()> {
        self.header(report)?;

        match &report.body {
            ReportBody::Daily { commits }
            | ReportBody::Release { commits, .. }
            | ReportBody::Recap { commits, .. } => {
                writeln!(self.out)?;
                self.commit_list(commits)?;
            }
            ReportBody::Standup { yesterday, today } => {
                self.section("Yesterday", yesterday)?;
                self.section("Today", today)?;
            }
            ReportBody::Weekly { groups } => {
                for group in groups {
                    writeln!(self.out)?;
                    let heading = format!("{} ({})", group.label, commit_count(group.len()));
                    let heading = self.bold(heading);
                    writeln!(self.out, "{heading}")?;
                    self.commit_list(&group.commits)?;
                }
            }
        }

        if self.options.show_stats {
            self.stats(report)?;
        }
        self.summary(report)?;
        self.out.flush()
    }

    fn header(&mut self, report: &Report) -> io::Result<()> {
        let title = report.title();
        let width = (title.chars().count() + 4).max(MIN_BOX_WIDTH);
        let rule = "─".repeat(width);
        let padding = " ".repeat(width - title.chars().count() - 2);

        let top = self.paint(format!("╭{rule}╮"), Some(Color::Cyan));
        let side = self.paint("│", Some(Color::Cyan));
        let bottom = self.paint(format!("╰{rule}╯"), Some(Color::Cyan));
        writeln!(self.out, "{top}")?;
        let title = self.bold(&title);
        writeln!(self.out, "{side}  {title}{padding}{side}")?;
        writeln!(self.out, "{bottom}")?;

        let info = &report.info;
        self.field("Repository", &info.name)?;
        self.field("Branch", &info.branch)?;
        self.field("Author", &info.author)?;
        match &report.body {
            ReportBody::Release { tag, .. } => self.field("Since", tag)?,
            ReportBody::Recap { range, .. } => self.field("Range", range)?,
            _ => {}
        }
        Ok(())
    }

    fn field(&mut self, name: &str, value: &str) -> io::Result<()> {
        let label = self.paint(format!("{name}:"), Some(Color::DarkGrey));
        writeln!(self.out, "  {label} {value}")
    }

    fn section(&mut self, title: &str, commits: &[Commit]) -> io::Result<()> {
        let title = self.bold(title);
        writeln!(self.out)?;
        writeln!(self.out, "{title}")?;
        if commits.is_empty() {
            let none = self.paint("No commits", Some(Color::DarkGrey));
            writeln!(self.out, "  {none}")
        } else {
            self.commit_list(commits)
        }
    }

    fn commit_list(&mut self, commits: &[Commit]) -> io::Result<()> {
        for commit in commits {
            let hash = self.paint(&commit.short_hash, Some(Color::Yellow));
            let subject = self.paint(
                &commit.message,
                CommitType::from_subject(&commit.message).color(),
            );
            let when = self.paint(
                format!("({})", relative_time(&commit.date, &self.now)),
                Some(Color::DarkGrey),
            );
            writeln!(self.out, "  {hash}  {subject} {when}")?;

            if self.options.show_files && !commit.files.is_empty() {
                let files = files_summary(&commit.files, MAX_LISTED_FILES);
                let files = self.paint(files, Some(Color::DarkGrey));
                writeln!(self.out, "{DETAIL_INDENT}{files}")?;
            }
        }
        Ok(())
    }

    fn stats(&mut self, report: &Report) -> io::Result<()> {
        let stats = report.stats();
        let heading = self.bold("Stats");
        writeln!(self.out)?;
        writeln!(self.out, "{heading}")?;
        let insertions = self.paint(format!("+{}", stats.insertions), Some(Color::Green));
        let deletions = self.paint(format!("-{}", stats.deletions), Some(Color::Red));
        writeln!(
            self.out,
            "  {}, {} touched, {insertions} {deletions}, {} {}",
            commit_count(stats.commits),
            plural(stats.files, "file"),
            stats.contributors,
            if stats.contributors == 1 {
                "contributor"
            } else {
                "contributors"
            }
        )
    }

    fn summary(&mut self, report: &Report) -> io::Result<()> {
        let title = match report.summary.source {
            SummarySource::Copilot => "Summary (Copilot)",
            SummarySource::Local => "Summary (local)",
        };
        let title = self.paint(self.bold(title), Some(Color::Cyan));
        writeln!(self.out)?;
        writeln!(self.out, "{title}")?;
        for line in report.summary.text.lines() {
            if line.is_empty() {
                writeln!(self.out)?;
            } else {
                writeln!(self.out, "  {line}")?;
            }
        }
        Ok(())
    }

    /// Render `devlog status`
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn render_status(&mut self, status: &StatusReport) -> io::Result<()> {
        let heading = self.bold("devlog status");
        writeln!(self.out, "{heading}")?;
        self.field("Repository", &status.repo)?;
        self.field("Branch", &status.branch)?;
        self.field("Author", &status.author)?;
        self.field("Commits", &status.commit_count.to_string())?;
        self.field("Config", &status.config_source)?;
        let ai = if status.ai_available {
            self.paint(format!("available ({})", status.ai_program), Some(Color::Green))
        } else {
            self.paint(
                format!("unavailable ({}), using local summaries", status.ai_program),
                Some(Color::Yellow),
            )
        };
        self.field("Copilot", &ai)?;
        self.out.flush()
    }

    /// One green line
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn success(&mut self, message: &str) -> io::Result<()> {
        let line = self.paint(format!("✓ {message}"), Some(Color::Green));
        writeln!(self.out, "{line}")
    }

    /// One yellow line
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn warn(&mut self, message: &str) -> io::Result<()> {
        let line = self.paint(format!("⚠ {message}"), Some(Color::Yellow));
        writeln!(self.out, "{line}")
    }

    /// One red line
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn error(&mut self, message: &str) -> io::Result<()> {
        let line = self.paint(format!("Error: {message}"), Some(Color::Red));
        writeln!(self.out, "{line}")
    }
}

fn plural(n: usize, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

fn commit_count(n: usize) -> String {
    plural(n, "commit")
}
