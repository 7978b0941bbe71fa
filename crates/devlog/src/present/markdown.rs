// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Markdown export

use std::fmt::Write as _;

use devlog_copilot::SummarySource;
use devlog_git::Commit;

use super::{RenderOptions, files_summary};
use crate::report::{Report, ReportBody};

/// Timestamp format used in documents
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Render a report as a markdown document
#[must_use]
pub fn render_markdown(report: &Report, options: RenderOptions) -> String {
    let mut doc = String::new();

    let _ = writeln!(doc, "# {}", report.title());
    let _ = writeln!(doc);
    let _ = writeln!(doc, "- **Repository:** {}", report.info.name);
    let _ = writeln!(doc, "- **Branch:** {}", report.info.branch);
    let _ = writeln!(doc, "- **Author:** {}", report.info.author);
    match &report.body {
        ReportBody::Release { tag, .. } => {
            let _ = writeln!(doc, "- **Since:** {tag}");
        }
        ReportBody::Recap { range, .. } => {
            let _ = writeln!(doc, "- **Range:** `{range}`");
        }
        _ => {}
    }
    let _ = writeln!(
        doc,
        "- **Generated:** {}",
        report.generated_at.format(DATE_FORMAT)
    );

    let _ = writeln!(doc);
    let _ = writeln!(doc, "## Summary");
    let _ = writeln!(doc);
    let _ = writeln!(doc, "{}", report.summary.text.trim_end());
    let _ = writeln!(doc);
    let source = match report.summary.source {
        SummarySource::Copilot => "_Generated by GitHub Copilot_",
        SummarySource::Local => "_Generated locally from commit messages_",
    };
    let _ = writeln!(doc, "{source}");

    match &report.body {
        ReportBody::Daily { commits } => section(&mut doc, "Commits", commits, options),
        ReportBody::Standup { yesterday, today } => {
            section(&mut doc, "Yesterday", yesterday, options);
            section(&mut doc, "Today", today, options);
        }
        ReportBody::Weekly { groups } => {
            let _ = writeln!(doc);
            let _ = writeln!(doc, "## Commits by Day");
            for group in groups {
                let _ = writeln!(doc);
                let _ = writeln!(doc, "### {}", group.label);
                let _ = writeln!(doc);
                commit_list(&mut doc, &group.commits, options);
            }
        }
        ReportBody::Release { commits, .. } | ReportBody::Recap { commits, .. } => {
            section(&mut doc, "Changes", commits, options);
        }
    }

    if options.show_stats {
        let stats = report.stats();
        let _ = writeln!(doc);
        let _ = writeln!(doc, "## Stats");
        let _ = writeln!(doc);
        let _ = writeln!(doc, "| Commits | Files | Insertions | Deletions | Contributors |");
        let _ = writeln!(doc, "|---------|-------|------------|-----------|--------------|");
        let _ = writeln!(
            doc,
            "| {} | {} | +{} | -{} | {} |",
            stats.commits, stats.files, stats.insertions, stats.deletions, stats.contributors
        );
    }

    doc
}

fn section(doc: &mut String, title: &str, commits: &[Commit], options: RenderOptions) {
    let _ = writeln!(doc);
    let _ = writeln!(doc, "## {title}");
    let _ = writeln!(doc);
    if commits.is_empty() {
        let _ = writeln!(doc, "_No commits_");
    } else {
        commit_list(doc, commits, options);
    }
}

fn commit_list(doc: &mut String, commits: &[Commit], options: RenderOptions) {
    for commit in commits {
        let _ = writeln!(
            doc,
            "- `{}` {} ({}, {})",
            commit.short_hash,
            commit.message,
            commit.author_name,
            commit.date.format(DATE_FORMAT)
        );
        if options.show_files && !commit.files.is_empty() {
            // Markdown exports list every file
            let _ = writeln!(doc, "  - Files: {}", files_summary(&commit.files, usize::MAX));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::RepoInfo;
    use chrono::{FixedOffset, NaiveDate, TimeZone};
    use devlog_copilot::Summary;
    use devlog_git::{CommitGroup, DiffStats};
    use similar_asserts::assert_eq;

    fn commit(seed: char, subject: &str, hour: u32, files: &[&str]) -> Commit {
        let hash = seed.to_string().repeat(40);
        Commit {
            short_hash: Commit::abbreviate(&hash).to_string(),
            hash,
            date: FixedOffset::east_opt(0)
                .unwrap()
                .with_ymd_and_hms(2026, 1, 15, hour, 30, 0)
                .unwrap(),
            message: subject.to_string(),
            body: String::new(),
            author_name: "Alice".to_string(),
            author_email: "alice@example.com".to_string(),
            parents: vec![],
            files: files.iter().map(|f| f.to_string()).collect(),
            diff: String::new(),
            stats: DiffStats {
                files_changed: files.len(),
                insertions: 4,
                deletions: 2,
            },
        }
    }

    fn report(body: ReportBody) -> Report {
        Report {
            info: RepoInfo {
                name: "devlog".to_string(),
                branch: "main".to_string(),
                author: "Alice".to_string(),
            },
            body,
            summary: Summary {
                text: "Shipped the export.\n".to_string(),
                source: SummarySource::Copilot,
            },
            generated_at: FixedOffset::east_opt(0)
                .unwrap()
                .with_ymd_and_hms(2026, 1, 15, 18, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_daily_document() {
        let r = report(ReportBody::Daily {
            commits: vec![
                commit('a', "feat: add export", 10, &["src/a.rs", "src/b.rs"]),
                commit('b', "fix: crash", 9, &[]),
            ],
        });

        let doc = render_markdown(&r, RenderOptions::default());

        assert_eq!(
            doc,
            "# Today's Dev Log\n\
             \n\
             - **Repository:** devlog\n\
             - **Branch:** main\n\
             - **Author:** Alice\n\
             - **Generated:** 2026-01-15 18:00\n\
             \n\
             ## Summary\n\
             \n\
             Shipped the export.\n\
             \n\
             _Generated by GitHub Copilot_\n\
             \n\
             ## Commits\n\
             \n\
             - `aaaaaaa` feat: add export (Alice, 2026-01-15 10:30)\n  \
             - Files: src/a.rs, src/b.rs\n\
             - `bbbbbbb` fix: crash (Alice, 2026-01-15 09:30)\n\
             \n\
             ## Stats\n\
             \n\
             | Commits | Files | Insertions | Deletions | Contributors |\n\
             |---------|-------|------------|-----------|--------------|\n\
             | 2 | 2 | +8 | -4 | 1 |\n"
        );
    }

    #[test]
    fn test_release_and_recap_headers() {
        let release = render_markdown(
            &report(ReportBody::Release {
                tag: "v1.2.0".to_string(),
                commits: vec![commit('a', "feat: x", 10, &[])],
            }),
            RenderOptions::default(),
        );
        assert!(release.starts_with("# Release Notes since v1.2.0\n"));
        assert!(release.contains("- **Since:** v1.2.0\n"));
        assert!(release.contains("## Changes\n"));

        let recap = render_markdown(
            &report(ReportBody::Recap {
                range: "v1.0.0..HEAD".to_string(),
                commits: vec![commit('a', "feat: x", 10, &[])],
            }),
            RenderOptions::default(),
        );
        assert!(recap.contains("- **Range:** `v1.0.0..HEAD`\n"));
    }

    #[test]
    fn test_standup_sections() {
        let doc = render_markdown(
            &report(ReportBody::Standup {
                yesterday: vec![],
                today: vec![commit('a', "docs: readme", 10, &[])],
            }),
            RenderOptions::default(),
        );
        assert!(doc.contains("## Yesterday\n\n_No commits_\n\n## Today\n\n- `aaaaaaa` docs: readme"));
    }

    #[test]
    fn test_weekly_groups() {
        let doc = render_markdown(
            &report(ReportBody::Weekly {
                groups: vec![
                    CommitGroup {
                        label: "Thursday, January 15, 2026".to_string(),
                        date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
                        commits: vec![commit('b', "fix: y", 11, &[])],
                    },
                    CommitGroup {
                        label: "Wednesday, January 14, 2026".to_string(),
                        date: NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
                        commits: vec![commit('a', "feat: x", 10, &[])],
                    },
                ],
            }),
            RenderOptions::default(),
        );
        let thursday = doc.find("### Thursday").expect("thursday");
        let wednesday = doc.find("### Wednesday").expect("wednesday");
        assert!(thursday < wednesday);
        assert!(doc.starts_with("# Weekly Recap\n"));
    }

    #[test]
    fn test_options_hide_files_and_stats() {
        let doc = render_markdown(
            &report(ReportBody::Daily {
                commits: vec![commit('a', "feat: x", 10, &["src/a.rs"])],
            }),
            RenderOptions {
                show_files: false,
                show_stats: false,
            },
        );
        assert!(!doc.contains("Files:"));
        assert!(!doc.contains("## Stats"));
    }
}
