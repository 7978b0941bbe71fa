// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Grouping commits by calendar day

use chrono::{Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use crate::commit::Commit;

/// Format used for group labels, e.g. "Monday, January 5, 2026"
pub const GROUP_LABEL_FORMAT: &str = "%A, %B %-d, %Y";

/// Commits sharing one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitGroup {
    /// Human readable date of the first commit in the group
    pub label: String,
    /// The calendar day the group covers
    pub date: NaiveDate,
    /// Commits in their original order
    pub commits: Vec<Commit>,
}

impl CommitGroup {
    /// Number of commits in the group
    #[must_use]
    pub fn len(&self) -> usize {
        self.commits.len()
    }

    /// Check if the group has no commits
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}

/// Group commits by local calendar date, newest group first
#[must_use]
pub fn group_commits_by_date(commits: &[Commit]) -> Vec<CommitGroup> {
    group_commits_by_date_in(commits, &Local)
}

/// Group commits by calendar date in `tz`, newest group first
///
/// Commits keep their input order inside a group. Groups are sorted by the
/// timestamp of their first commit, descending.
#[must_use]
pub fn group_commits_by_date_in<Tz: TimeZone>(commits: &[Commit], tz: &Tz) -> Vec<CommitGroup>
where
    Tz::Offset: std::fmt::Display,
{
    let mut groups: Vec<CommitGroup> = Vec::new();

    for commit in commits {
        let local = commit.date.with_timezone(tz);
        let day = local.date_naive();
        match groups.iter_mut().find(|g| g.date == day) {
            Some(group) => group.commits.push(commit.clone()),
            None => groups.push(CommitGroup {
                label: local.format(GROUP_LABEL_FORMAT).to_string(),
                date: day,
                commits: vec![commit.clone()],
            }),
        }
    }

    // Stable sort keeps first-seen order for groups whose heads tie.
    groups.sort_by(|a, b| b.commits[0].date.cmp(&a.commits[0].date));
    groups
}
