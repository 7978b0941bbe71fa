// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Deterministic summary used when Copilot is unavailable

use devlog_git::Commit;

/// Returned for an empty commit list
pub const NO_COMMITS_SUMMARY: &str = "No commits to summarize.";

/// Bucket a commit subject falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    /// New functionality
    Feature,
    /// Bug fixes
    Fix,
    /// Everything else
    Other,
}

impl Category {
    /// Section heading used in the summary
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::Feature => "Features:",
            Self::Fix => "Fixes:",
            Self::Other => "Other:",
        }
    }
}

/// Classify a commit subject
///
/// Features are checked before fixes, so "add bug guard" is a feature.
#[must_use]
pub fn classify(subject: &str) -> Category {
    let lower = subject.to_lowercase();
    if lower.starts_with("feat") || lower.contains("add") || lower.contains("new") {
        Category::Feature
    } else if lower.starts_with("fix") || lower.contains("bug") || lower.contains("patch") {
        Category::Fix
    } else {
        Category::Other
    }
}

/// Summarize commits into Features / Fixes / Other sections
#[must_use]
pub fn local_summarize(commits: &[Commit]) -> String {
    if commits.is_empty() {
        return NO_COMMITS_SUMMARY.to_string();
    }

    let mut features = Vec::new();
    let mut fixes = Vec::new();
    let mut other = Vec::new();
    for commit in commits {
        match classify(&commit.message) {
            Category::Feature => features.push(commit.message.as_str()),
            Category::Fix => fixes.push(commit.message.as_str()),
            Category::Other => other.push(commit.message.as_str()),
        }
    }

    [
        (Category::Feature, features),
        (Category::Fix, fixes),
        (Category::Other, other),
    ]
    .into_iter()
    .filter(|(_, subjects)| !subjects.is_empty())
    .map(|(category, subjects)| {
        let lines: Vec<String> = subjects.iter().map(|s| format!("- {s}")).collect();
        format!("{}\n{}", category.heading(), lines.join("\n"))
    })
    .collect::<Vec<_>>()
    .join("\n\n")
    .trim()
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use devlog_git::DiffStats;
    use similar_asserts::assert_eq;

    fn commit(subject: &str) -> Commit {
        let hash = "0123456789abcdef0123456789abcdef01234567".to_string();
        Commit {
            short_hash: Commit::abbreviate(&hash).to_string(),
            hash,
            date: Utc
                .with_ymd_and_hms(2026, 1, 15, 9, 0, 0)
                .unwrap()
                .fixed_offset(),
            message: subject.to_string(),
            body: String::new(),
            author_name: "Test Author".to_string(),
            author_email: "test@example.com".to_string(),
            parents: vec![],
            files: vec![],
            diff: String::new(),
            stats: DiffStats::default(),
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(local_summarize(&[]), NO_COMMITS_SUMMARY);
    }

    #[test]
    fn test_sections_in_fixed_order() {
        let commits = vec![
            commit("chore: bump deps"),
            commit("fix: handle empty repo"),
            commit("feat: weekly recap"),
        ];
        assert_eq!(
            local_summarize(&commits),
            "Features:\n- feat: weekly recap\n\nFixes:\n- fix: handle empty repo\n\nOther:\n- chore: bump deps"
        );
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let commits = vec![commit("Fix typo"), commit("Patch release script")];
        assert_eq!(
            local_summarize(&commits),
            "Fixes:\n- Fix typo\n- Patch release script"
        );
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        assert_eq!(classify("FEAT: shout"), Category::Feature);
        assert_eq!(classify("Added a flag"), Category::Feature);
        assert_eq!(classify("Brand NEW parser"), Category::Feature);
        assert_eq!(classify("FIXUP config"), Category::Fix);
        assert_eq!(classify("squash a Bug"), Category::Fix);
        assert_eq!(classify("docs: readme"), Category::Other);
    }

    #[test]
    fn test_feature_wins_over_fix() {
        assert_eq!(classify("add bug guard"), Category::Feature);
        assert_eq!(classify("fix: renew token"), Category::Feature);
    }

    #[test]
    fn test_headings() {
        assert_eq!(Category::Feature.heading(), "Features:");
        assert_eq!(Category::Fix.heading(), "Fixes:");
        assert_eq!(Category::Other.heading(), "Other:");
    }
}
