// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Prompt construction for each report kind

use std::collections::HashMap;
use std::sync::LazyLock;

use devlog_git::Commit;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

/// Changed files listed per commit before collapsing to `+N more`
pub const MAX_PROMPT_FILES: usize = 5;

/// The report a summary is generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryKind {
    /// `devlog today`
    Daily,
    /// `devlog standup`
    Standup,
    /// `devlog week`
    Weekly,
    /// `devlog release`
    Release,
    /// `devlog recap <from>..<to>`
    Recap,
}

/// Repository details included in the prompt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportContext {
    /// Repository name
    pub repo: String,
    /// Current branch
    pub branch: String,
    /// Author the report is for
    pub author: String,
    /// Tag the release notes start from
    pub tag: Option<String>,
    /// `from..to` for recaps
    pub range: Option<String>,
}

/// A titled list of commits, e.g. "Yesterday" and "Today" for a standup
#[derive(Debug, Clone, Copy)]
pub struct PromptSection<'a> {
    /// Section title
    pub title: &'static str,
    /// Commits in reader order
    pub commits: &'a [Commit],
}

/// Everything a summarizer needs for one report
#[derive(Debug, Clone)]
pub struct SummaryRequest<'a> {
    /// Which report is being produced
    pub kind: SummaryKind,
    /// Repository details
    pub context: &'a ReportContext,
    /// Commits, split into sections
    pub sections: Vec<PromptSection<'a>>,
}

impl<'a> SummaryRequest<'a> {
    /// A request with a single "Commits" section
    #[must_use]
    pub fn new(kind: SummaryKind, context: &'a ReportContext, commits: &'a [Commit]) -> Self {
        Self {
            kind,
            context,
            sections: vec![PromptSection {
                title: "Commits",
                commits,
            }],
        }
    }

    /// A standup request with yesterday's and today's commits
    #[must_use]
    pub fn standup(
        context: &'a ReportContext,
        yesterday: &'a [Commit],
        today: &'a [Commit],
    ) -> Self {
        Self {
            kind: SummaryKind::Standup,
            context,
            sections: vec![
                PromptSection {
                    title: "Yesterday",
                    commits: yesterday,
                },
                PromptSection {
                    title: "Today",
                    commits: today,
                },
            ],
        }
    }

    /// Check if no section has commits
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|s| s.commits.is_empty())
    }

    /// All commits across sections, in section order
    #[must_use]
    pub fn all_commits(&self) -> Vec<Commit> {
        self.sections
            .iter()
            .flat_map(|s| s.commits.iter().cloned())
            .collect()
    }
}

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(\w+)\}\}").expect("Invalid placeholder regex"));

/// A template with `{{key}}` placeholders
pub struct PromptTemplate {
    template: &'static str,
}

impl PromptTemplate {
    /// Wrap a static template
    pub const fn new(template: &'static str) -> Self {
        Self { template }
    }

    /// Replace every `{{key}}` with its value
    ///
    /// Substitution is a single pass over the template, so values are never
    /// rescanned. Unknown keys are left in place.
    #[must_use]
    pub fn render(&self, vars: &HashMap<&str, &str>) -> String {
        PLACEHOLDER_REGEX
            .replace_all(self.template, |caps: &Captures<'_>| {
                vars.get(&caps[1])
                    .map_or_else(|| caps[0].to_string(), |value| (*value).to_string())
            })
            .into_owned()
    }
}

static DAILY_PROMPT: PromptTemplate = PromptTemplate::new(
    "You are writing a developer's daily work journal for the repository {{repo}} \
(branch {{branch}}), on behalf of {{author}}.
Summarize what was accomplished today in a few short paragraphs or bullet points. \
Focus on outcomes rather than listing every commit. Do not invent work that is not shown.

{{commits}}",
);

static STANDUP_PROMPT: PromptTemplate = PromptTemplate::new(
    "You are preparing a standup update for {{author}} on the repository {{repo}} \
(branch {{branch}}).
Write three short sections: \"Yesterday\", \"Today\" and \"Blockers\". \
Base Yesterday and Today on the commits below. Write \"None\" under Blockers unless \
a commit clearly mentions one.

{{commits}}",
);

static WEEKLY_PROMPT: PromptTemplate = PromptTemplate::new(
    "You are writing a weekly recap of work on the repository {{repo}} (branch {{branch}}) \
for {{author}}.
Group related changes into themes, highlight the most significant work and keep it \
under 200 words.

{{commits}}",
);

static RELEASE_PROMPT: PromptTemplate = PromptTemplate::new(
    "You are writing release notes for the repository {{repo}} covering changes since {{tag}}.
Organize the notes under the headings \"Features\", \"Fixes\" and \"Other changes\", \
omitting empty headings. Write for users of the project, not its developers.

{{commits}}",
);

static RECAP_PROMPT: PromptTemplate = PromptTemplate::new(
    "You are summarizing the changes in {{range}} of the repository {{repo}}.
Describe what changed and why it matters in a few short paragraphs.

{{commits}}",
);

impl SummaryKind {
    fn template(self) -> &'static PromptTemplate {
        match self {
            Self::Daily => &DAILY_PROMPT,
            Self::Standup => &STANDUP_PROMPT,
            Self::Weekly => &WEEKLY_PROMPT,
            Self::Release => &RELEASE_PROMPT,
            Self::Recap => &RECAP_PROMPT,
        }
    }
}

/// One prompt line for a commit
///
/// `<short hash> <subject> [files: a, b, +N more] (<diff stat>)`
#[must_use]
pub fn format_commit_line(commit: &Commit) -> String {
    let mut line = format!("- {} {}", commit.short_hash, commit.message);

    if !commit.files.is_empty() {
        let shown: Vec<&str> = commit
            .files
            .iter()
            .take(MAX_PROMPT_FILES)
            .map(String::as_str)
            .collect();
        line.push_str(" [files: ");
        line.push_str(&shown.join(", "));
        if commit.files.len() > MAX_PROMPT_FILES {
            line.push_str(&format!(", +{} more", commit.files.len() - MAX_PROMPT_FILES));
        }
        line.push(']');
    }

    if !commit.diff.is_empty() {
        line.push_str(&format!(" ({})", commit.diff));
    }

    line
}

fn render_sections(sections: &[PromptSection<'_>]) -> String {
    sections
        .iter()
        .map(|section| {
            let body = if section.commits.is_empty() {
                "- (none)".to_string()
            } else {
                section
                    .commits
                    .iter()
                    .map(format_commit_line)
                    .collect::<Vec<_>>()
                    .join("\n")
            };
            format!("{}:\n{}", section.title, body)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render the full prompt for a request
#[must_use]
pub fn build_prompt(request: &SummaryRequest<'_>) -> String {
    let ctx = request.context;
    let commits = render_sections(&request.sections);
    let tag = ctx.tag.as_deref().unwrap_or(devlog_git::NO_TAG_LABEL);
    let range = ctx.range.as_deref().unwrap_or("the selected range");

    let vars = HashMap::from([
        ("repo", ctx.repo.as_str()),
        ("branch", ctx.branch.as_str()),
        ("author", ctx.author.as_str()),
        ("tag", tag),
        ("range", range),
        ("commits", commits.as_str()),
    ]);

    request.kind.template().render(&vars)
}
