// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Rendering reports for the terminal, markdown and JSON

pub mod json;
pub mod markdown;
pub mod terminal;

use chrono::{DateTime, FixedOffset, TimeZone};

pub use json::{render_json, render_status_json};
pub use markdown::render_markdown;
pub use terminal::TerminalPresenter;

/// Changed files listed per commit in the terminal
pub const MAX_LISTED_FILES: usize = 3;

/// Presentation switches taken from the config
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// List changed files under each commit
    pub show_files: bool,
    /// Include the stats block
    pub show_stats: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_files: true,
            show_stats: true,
        }
    }
}

/// Conventional-commit type of a subject line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitType {
    /// `feat:`
    Feat,
    /// `fix:`
    Fix,
    /// `docs:`
    Docs,
    /// `refactor:`
    Refactor,
    /// `test:`
    Test,
    /// `chore:`
    Chore,
    /// Anything else
    Other,
}

impl CommitType {
    /// Detect the type from the start of the subject, e.g. `feat:`,
    /// `Fix(scope):` or a bare `Fix typo`
    #[must_use]
    pub fn from_subject(subject: &str) -> Self {
        const PREFIXES: [(&str, CommitType); 6] = [
            ("feat", CommitType::Feat),
            ("fix", CommitType::Fix),
            ("docs", CommitType::Docs),
            ("refactor", CommitType::Refactor),
            ("test", CommitType::Test),
            ("chore", CommitType::Chore),
        ];
        let lower = subject.trim_start().to_lowercase();
        PREFIXES
            .iter()
            .find(|(prefix, _)| lower.starts_with(*prefix))
            .map_or(Self::Other, |(_, kind)| *kind)
    }
}

/// Human relative time for a commit
///
/// "just now" under a minute, minutes and hours within a day, the local
/// date beyond that.
#[must_use]
pub fn relative_time<Tz: TimeZone>(ts: &DateTime<FixedOffset>, now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let elapsed = now.clone().fixed_offset().signed_duration_since(ts);
    let seconds = elapsed.num_seconds();
    if seconds < 60 {
        "just now".to_string()
    } else if seconds < 3600 {
        plural(seconds / 60, "minute")
    } else if seconds < 86_400 {
        plural(seconds / 3600, "hour")
    } else {
        ts.with_timezone(&now.timezone())
            .format("%b %-d, %Y")
            .to_string()
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

/// First few files plus `+N more`
#[must_use]
pub fn files_summary(files: &[String], limit: usize) -> String {
    let shown: Vec<&str> = files.iter().take(limit).map(String::as_str).collect();
    let mut text = shown.join(", ");
    if files.len() > limit {
        text.push_str(&format!(" +{} more", files.len() - limit));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use similar_asserts::assert_eq;

    #[test]
    fn test_commit_type_prefixes() {
        assert_eq!(CommitType::from_subject("feat: add x"), CommitType::Feat);
        assert_eq!(CommitType::from_subject("Fix(parser): y"), CommitType::Fix);
        assert_eq!(CommitType::from_subject("docs!: z"), CommitType::Docs);
        assert_eq!(CommitType::from_subject("refactor: split"), CommitType::Refactor);
        assert_eq!(CommitType::from_subject("test: cover"), CommitType::Test);
        assert_eq!(CommitType::from_subject("chore: bump"), CommitType::Chore);
        assert_eq!(CommitType::from_subject("Update README"), CommitType::Other);
        assert_eq!(CommitType::from_subject(""), CommitType::Other);
    }

    #[test]
    fn test_commit_type_without_delimiter() {
        assert_eq!(CommitType::from_subject("Fix typo"), CommitType::Fix);
        assert_eq!(CommitType::from_subject("feature: x"), CommitType::Feat);
        assert_eq!(CommitType::from_subject("Docs update"), CommitType::Docs);
        assert_eq!(CommitType::from_subject("  tests for grouper"), CommitType::Test);
        assert_eq!(CommitType::from_subject("reword intro"), CommitType::Other);
    }

    #[test]
    fn test_relative_time_buckets() {
        let now = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
        let at = |d: Duration| (now - d).fixed_offset();

        assert_eq!(relative_time(&at(Duration::seconds(30)), &now), "just now");
        assert_eq!(relative_time(&at(Duration::minutes(1)), &now), "1 minute ago");
        assert_eq!(relative_time(&at(Duration::minutes(45)), &now), "45 minutes ago");
        assert_eq!(relative_time(&at(Duration::hours(3)), &now), "3 hours ago");
        assert_eq!(relative_time(&at(Duration::hours(23)), &now), "23 hours ago");
        assert_eq!(relative_time(&at(Duration::hours(30)), &now), "Jan 14, 2026");
    }

    #[test]
    fn test_future_timestamp_is_just_now() {
        let now = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
        let ahead = (now + Duration::minutes(5)).fixed_offset();
        assert_eq!(relative_time(&ahead, &now), "just now");
    }

    #[test]
    fn test_files_summary() {
        let files: Vec<String> = ["a", "b", "c", "d", "e"].iter().map(|s| s.to_string()).collect();
        assert_eq!(files_summary(&files, 3), "a, b, c +2 more");
        assert_eq!(files_summary(&files[..2], 3), "a, b");
        assert_eq!(files_summary(&[], 3), "");
    }
}
