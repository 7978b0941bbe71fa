// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Report data handed to the presenters

use std::collections::BTreeSet;

use chrono::{DateTime, FixedOffset};
use devlog_copilot::Summary;
use devlog_git::{Commit, CommitGroup};
use serde::Serialize;

use crate::history::RepoInfo;

/// Totals shown in the stats block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStats {
    /// Number of commits
    pub commits: usize,
    /// Distinct paths touched
    pub files: usize,
    /// Lines added
    pub insertions: usize,
    /// Lines removed
    pub deletions: usize,
    /// Distinct authors
    pub contributors: usize,
}

impl ReportStats {
    /// Compute totals over a set of commits
    #[must_use]
    pub fn from_commits<'a>(commits: impl IntoIterator<Item = &'a Commit>) -> Self {
        let mut stats = Self::default();
        let mut files = BTreeSet::new();
        let mut authors = BTreeSet::new();

        for commit in commits {
            stats.commits += 1;
            stats.insertions += commit.stats.insertions;
            stats.deletions += commit.stats.deletions;
            files.extend(commit.files.iter().map(String::as_str));
            authors.insert(commit.author_email.to_lowercase());
        }

        stats.files = files.len();
        stats.contributors = authors.len();
        stats
    }
}

/// Commits a report covers, shaped per command
#[derive(Debug, Clone, PartialEq)]
pub enum ReportBody {
    /// `today`
    Daily {
        /// Today's commits
        commits: Vec<Commit>,
    },
    /// `standup`
    Standup {
        /// Yesterday's commits
        yesterday: Vec<Commit>,
        /// Today's commits
        today: Vec<Commit>,
    },
    /// `week`
    Weekly {
        /// This week's commits by day, newest first
        groups: Vec<CommitGroup>,
    },
    /// `release`
    Release {
        /// Latest tag, or the no-tag label
        tag: String,
        /// Commits since the tag
        commits: Vec<Commit>,
    },
    /// `recap`
    Recap {
        /// `from..to`
        range: String,
        /// Commits in the range
        commits: Vec<Commit>,
    },
}

/// A finished report
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Repository details
    pub info: RepoInfo,
    /// The commits covered
    pub body: ReportBody,
    /// Narrative and its source
    pub summary: Summary,
    /// When the report was produced
    pub generated_at: DateTime<FixedOffset>,
}

impl Report {
    /// Heading used by the presenters
    #[must_use]
    pub fn title(&self) -> String {
        match &self.body {
            ReportBody::Daily { .. } => "Today's Dev Log".to_string(),
            ReportBody::Standup { .. } => "Standup".to_string(),
            ReportBody::Weekly { .. } => "Weekly Recap".to_string(),
            ReportBody::Release { tag, .. } => format!("Release Notes since {tag}"),
            ReportBody::Recap { range, .. } => format!("Recap {range}"),
        }
    }

    /// Every commit in the report, in display order
    #[must_use]
    pub fn commits(&self) -> Vec<&Commit> {
        match &self.body {
            ReportBody::Daily { commits }
            | ReportBody::Release { commits, .. }
            | ReportBody::Recap { commits, .. } => commits.iter().collect(),
            ReportBody::Standup { yesterday, today } => yesterday.iter().chain(today).collect(),
            ReportBody::Weekly { groups } => groups.iter().flat_map(|g| &g.commits).collect(),
        }
    }

    /// Totals over every commit in the report
    #[must_use]
    pub fn stats(&self) -> ReportStats {
        ReportStats::from_commits(self.commits())
    }
}
