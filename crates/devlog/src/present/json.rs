// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! JSON export
//!
//! Every report becomes an object tagged by `type`. Fields that do not apply
//! to a report type are omitted rather than set to null.

use chrono::{DateTime, FixedOffset};
use devlog_copilot::SummarySource;
use devlog_git::{Commit, CommitGroup};
use serde::Serialize;

use crate::commands::StatusReport;
use crate::report::{Report, ReportBody, ReportStats};

/// Serialized shape of a report
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
enum Envelope<'a> {
    Daily {
        repo: &'a str,
        branch: &'a str,
        author: &'a str,
        commits: &'a [Commit],
        stats: ReportStats,
        summary: &'a str,
        summary_source: SummarySource,
        generated_at: DateTime<FixedOffset>,
    },
    Standup {
        repo: &'a str,
        branch: &'a str,
        author: &'a str,
        yesterday: &'a [Commit],
        today: &'a [Commit],
        stats: ReportStats,
        summary: &'a str,
        summary_source: SummarySource,
        generated_at: DateTime<FixedOffset>,
    },
    Weekly {
        repo: &'a str,
        branch: &'a str,
        author: &'a str,
        groups: &'a [CommitGroup],
        stats: ReportStats,
        summary: &'a str,
        summary_source: SummarySource,
        generated_at: DateTime<FixedOffset>,
    },
    Release {
        repo: &'a str,
        branch: &'a str,
        tag: &'a str,
        commits: &'a [Commit],
        stats: ReportStats,
        summary: &'a str,
        summary_source: SummarySource,
        generated_at: DateTime<FixedOffset>,
    },
    Recap {
        repo: &'a str,
        branch: &'a str,
        range: &'a str,
        commits: &'a [Commit],
        stats: ReportStats,
        summary: &'a str,
        summary_source: SummarySource,
        generated_at: DateTime<FixedOffset>,
    },
}

impl<'a> Envelope<'a> {
    fn from_report(report: &'a Report) -> Self {
        let info = &report.info;
        let stats = report.stats();
        let summary = report.summary.text.as_str();
        let summary_source = report.summary.source;
        let generated_at = report.generated_at;

        match &report.body {
            ReportBody::Daily { commits } => Self::Daily {
                repo: &info.name,
                branch: &info.branch,
                author: &info.author,
                commits,
                stats,
                summary,
                summary_source,
                generated_at,
            },
            ReportBody::Standup { yesterday, today } => Self::Standup {
                repo: &info.name,
                branch: &info.branch,
                author: &info.author,
                yesterday,
                today,
                stats,
                summary,
                summary_source,
                generated_at,
            },
            ReportBody::Weekly { groups } => Self::Weekly {
                repo: &info.name,
                branch: &info.branch,
                author: &info.author,
                groups,
                stats,
                summary,
                summary_source,
                generated_at,
            },
            ReportBody::Release { tag, commits } => Self::Release {
                repo: &info.name,
                branch: &info.branch,
                tag,
                commits,
                stats,
                summary,
                summary_source,
                generated_at,
            },
            ReportBody::Recap { range, commits } => Self::Recap {
                repo: &info.name,
                branch: &info.branch,
                range,
                commits,
                stats,
                summary,
                summary_source,
                generated_at,
            },
        }
    }
}

/// Render a report as pretty-printed JSON
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&Envelope::from_report(report))
}

/// Render `devlog status` as pretty-printed JSON
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_status_json(status: &StatusReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(status)
}
