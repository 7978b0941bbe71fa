//! Git commit types

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Line and file counts for a single commit's diff
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffStats {
    /// Number of files changed
    pub files_changed: usize,
    /// Lines added
    pub insertions: usize,
    /// Lines removed
    pub deletions: usize,
}

/// A commit as read from the repository
///
/// Commits are never mutated after the reader produces them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commit {
    /// The commit SHA (40 hex characters)
    pub hash: String,
    /// Abbreviated SHA (first 7 characters)
    pub short_hash: String,
    /// Commit timestamp with the committer's UTC offset
    pub date: DateTime<FixedOffset>,
    /// First line of the commit message
    pub message: String,
    /// Remainder of the commit message, without the subject line
    pub body: String,
    /// Author name
    pub author_name: String,
    /// Author email
    pub author_email: String,
    /// Parent commit SHAs
    pub parents: Vec<String>,
    /// Paths touched by the commit
    pub files: Vec<String>,
    /// Short stat line, e.g. `2 files changed, 10 insertions(+)`
    pub diff: String,
    /// Numeric form of the stat line
    pub stats: DiffStats,
}

impl Commit {
    /// Validate that a SHA is a valid 40-character hex string
    #[must_use]
    pub fn is_valid_sha(sha: &str) -> bool {
        sha.len() == 40 && sha.chars().all(|c| c.is_ascii_hexdigit())
    }

    /// Abbreviate a SHA to its first 7 characters
    #[must_use]
    pub fn abbreviate(sha: &str) -> &str {
        &sha[..7.min(sha.len())]
    }

    /// Split a raw commit message into subject and body
    #[must_use]
    pub fn split_message(raw: &str) -> (String, String) {
        let mut lines = raw.lines();
        let subject = lines.next().unwrap_or("").trim().to_string();
        let body = lines.collect::<Vec<_>>().join("\n").trim().to_string();
        (subject, body)
    }

    /// Check if this is a root commit (has no parents)
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }
}
