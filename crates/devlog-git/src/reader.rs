// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Git history reading
//!
//! This module reads commits and repository metadata from a local repository
//! using the `git2` crate.

use std::path::Path;

use chrono::{DateTime, FixedOffset, Offset, Utc};
use git2::{
    DescribeFormatOptions, DescribeOptions, DiffOptions, DiffStatsFormat, ErrorCode, Oid,
    Repository, Revwalk, Sort,
};
use tracing::{debug, trace};

use crate::commit::{Commit, DiffStats};
use crate::error::GitError;
use crate::window::{Selection, TimeWindow};

/// Tag label used when the repository has no tags
pub const NO_TAG_LABEL: &str = "initial commit";

/// Author name used when git has no `user.name` configured
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// How far before a date window the walk continues before giving up
///
/// Commits are walked in committer time order while windows test author
/// time, so a little skew between the two is tolerated.
const WALK_SLACK_HOURS: i64 = 24;

/// Filters applied while reading commits
#[derive(Debug, Clone, Default)]
pub struct ReadOptions {
    /// Maximum number of commits to return
    pub max_commits: Option<usize>,
    /// Only keep commits whose `Name <email>` contains this string
    pub author: Option<String>,
}

impl ReadOptions {
    /// Cap the number of commits returned
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.max_commits = Some(limit);
        self
    }

    /// Only keep commits by a matching author
    #[must_use]
    pub fn by_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }
}

/// A git work tree opened for reading
pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Open the repository whose work tree contains `path`
    ///
    /// # Errors
    ///
    /// Returns `GitError::NotAGitRepository` if `path` is not inside a work
    /// tree. Bare repositories are rejected the same way.
    pub fn discover(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let path = path.as_ref();
        let not_a_repo = || GitError::NotAGitRepository {
            path: path.display().to_string(),
        };
        let repo = Repository::discover(path).map_err(|_| not_a_repo())?;
        if repo.is_bare() || repo.workdir().is_none() {
            return Err(not_a_repo());
        }
        Ok(Self { repo })
    }

    /// Root of the work tree
    #[must_use]
    pub fn workdir(&self) -> &Path {
        // discover() guarantees a work tree
        self.repo.workdir().unwrap_or_else(|| self.repo.path())
    }

    /// Read the commits selected by `selection`, newest first
    ///
    /// `now` anchors the date based selections; day boundaries are taken in
    /// its timezone.
    ///
    /// # Errors
    ///
    /// Returns `GitError::InvalidReference` when a range endpoint does not
    /// resolve, or `GitError::Git2` when the history cannot be walked.
    #[tracing::instrument(level = "debug", skip(self, now))]
    pub fn read<Tz: chrono::TimeZone>(
        &self,
        selection: &Selection,
        options: &ReadOptions,
        now: &DateTime<Tz>,
    ) -> Result<Vec<Commit>, GitError> {
        if self.is_unborn()? {
            debug!("Repository has no commits yet");
            return Ok(Vec::new());
        }

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME)?;

        match selection {
            Selection::Range { from, to } => {
                revwalk.push(self.resolve(to)?)?;
                revwalk.hide(self.resolve(from)?)?;
            }
            Selection::SinceLastTag => {
                revwalk.push_head()?;
                if let Some(tag) = self.latest_tag() {
                    debug!(tag = %tag, "Reading commits since tag");
                    revwalk.hide(self.resolve(&tag)?)?;
                }
            }
            Selection::Today | Selection::Yesterday | Selection::ThisWeek => {
                revwalk.push_head()?;
            }
        }

        self.collect(revwalk, &selection.window(now), options)
    }

    fn collect(
        &self,
        revwalk: Revwalk<'_>,
        window: &TimeWindow,
        options: &ReadOptions,
    ) -> Result<Vec<Commit>, GitError> {
        let limit = options.max_commits.unwrap_or(usize::MAX);
        let slack = chrono::Duration::hours(WALK_SLACK_HOURS);
        let mut commits = Vec::new();

        for oid_result in revwalk {
            if commits.len() >= limit {
                break;
            }

            let oid = oid_result?;
            let git_commit = self.repo.find_commit(oid)?;

            if window.is_past(&signature_time(&git_commit.committer()), slack) {
                trace!(%oid, "Walked past the date window");
                break;
            }

            let date = signature_time(&git_commit.author());
            if !window.contains(&date) {
                continue;
            }

            if let Some(ref author) = options.author
                && !author_ident(&git_commit.author()).contains(author.as_str())
            {
                continue;
            }

            commits.push(self.extract_commit(&git_commit, date)?);
        }

        debug!(count = commits.len(), "Read commits");
        Ok(commits)
    }

    /// Build a `Commit` record, including its first-parent diff
    fn extract_commit(
        &self,
        git_commit: &git2::Commit<'_>,
        date: DateTime<FixedOffset>,
    ) -> Result<Commit, GitError> {
        let hash = git_commit.id().to_string();
        let (message, body) = Commit::split_message(git_commit.message().unwrap_or(""));
        let author = git_commit.author();
        let parents: Vec<String> = git_commit.parent_ids().map(|id| id.to_string()).collect();

        let (files, diff, stats) = if git_commit.parent_count() > 0 {
            self.extract_diff(git_commit)?
        } else {
            trace!(%hash, "Root commit, skipping diff");
            (Vec::new(), String::new(), DiffStats::default())
        };

        Ok(Commit {
            short_hash: Commit::abbreviate(&hash).to_string(),
            hash,
            date,
            message,
            body,
            author_name: author.name().unwrap_or("Unknown").to_string(),
            author_email: author.email().unwrap_or("").to_string(),
            parents,
            files,
            diff,
            stats,
        })
    }

    /// Diff a commit against its first parent
    fn extract_diff(
        &self,
        git_commit: &git2::Commit<'_>,
    ) -> Result<(Vec<String>, String, DiffStats), GitError> {
        let tree = git_commit.tree()?;
        let parent_tree = git_commit.parent(0)?.tree()?;

        let mut opts = DiffOptions::new();
        opts.ignore_whitespace(false);

        let diff = self
            .repo
            .diff_tree_to_tree(Some(&parent_tree), Some(&tree), Some(&mut opts))?;

        let files = diff
            .deltas()
            .map(|delta| {
                delta
                    .new_file()
                    .path()
                    .or_else(|| delta.old_file().path())
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "<unknown>".to_string())
            })
            .collect();

        let stats = diff.stats()?;
        let summary = stats
            .to_buf(DiffStatsFormat::SHORT, 80)?
            .as_str()
            .unwrap_or("")
            .trim()
            .to_string();

        Ok((
            files,
            summary,
            DiffStats {
                files_changed: stats.files_changed(),
                insertions: stats.insertions(),
                deletions: stats.deletions(),
            },
        ))
    }

    /// Resolve a revision string to a commit id
    fn resolve(&self, reference: &str) -> Result<Oid, GitError> {
        self.repo
            .revparse_single(reference)
            .and_then(|obj| obj.peel_to_commit())
            .map(|commit| commit.id())
            .map_err(|_| GitError::InvalidReference {
                reference: reference.to_string(),
            })
    }

    fn is_unborn(&self) -> Result<bool, GitError> {
        match self.repo.head() {
            Ok(_) => Ok(false),
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
                Ok(true)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// The most recent tag reachable from HEAD, if any
    #[must_use]
    pub fn latest_tag(&self) -> Option<String> {
        let mut describe_opts = DescribeOptions::new();
        describe_opts.describe_tags();
        let mut format_opts = DescribeFormatOptions::new();
        format_opts.abbreviated_size(0);

        self.repo
            .describe(&describe_opts)
            .and_then(|describe| describe.format(Some(&format_opts)))
            .ok()
    }

    /// The latest tag, or `NO_TAG_LABEL` when the repository has none
    #[must_use]
    pub fn release_label(&self) -> String {
        self.latest_tag()
            .unwrap_or_else(|| NO_TAG_LABEL.to_string())
    }

    /// Repository name from the `origin` remote, else the work tree directory
    #[must_use]
    pub fn repo_name(&self) -> String {
        self.repo
            .find_remote("origin")
            .ok()
            .and_then(|remote| remote.url().and_then(repo_name_from_url))
            .unwrap_or_else(|| repo_name_from_path(self.workdir()))
    }

    /// Current branch name
    ///
    /// Returns `"HEAD"` when detached, and the unborn branch name for a
    /// repository without commits.
    #[must_use]
    pub fn current_branch(&self) -> String {
        match self.repo.head() {
            Ok(head) => {
                if self.repo.head_detached().unwrap_or(false) {
                    "HEAD".to_string()
                } else {
                    head.shorthand().unwrap_or("HEAD").to_string()
                }
            }
            Err(_) => self
                .repo
                .find_reference("HEAD")
                .ok()
                .and_then(|r| r.symbolic_target().map(str::to_string))
                .map(|target| {
                    target
                        .strip_prefix("refs/heads/")
                        .unwrap_or(&target)
                        .to_string()
                })
                .unwrap_or_else(|| "HEAD".to_string()),
        }
    }

    /// Configured `user.name`, or `UNKNOWN_AUTHOR`
    #[must_use]
    pub fn user_name(&self) -> String {
        self.repo
            .config()
            .and_then(|config| config.get_string("user.name"))
            .ok()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string())
    }

    /// Count commits reachable from HEAD
    ///
    /// # Errors
    ///
    /// Returns `GitError` if the repository cannot be walked.
    pub fn commit_count(&self) -> Result<usize, GitError> {
        if self.is_unborn()? {
            return Ok(0);
        }
        let mut revwalk = self.repo.revwalk()?;
        revwalk.push_head()?;
        Ok(revwalk.count())
    }
}

/// `Name <email>`, the text git's `--author` filter matches against
fn author_ident(signature: &git2::Signature<'_>) -> String {
    format!(
        "{} <{}>",
        signature.name().unwrap_or(""),
        signature.email().unwrap_or("")
    )
}

fn signature_time(signature: &git2::Signature<'_>) -> DateTime<FixedOffset> {
    let when = signature.when();
    let offset = FixedOffset::east_opt(when.offset_minutes() * 60).unwrap_or(Utc.fix());
    DateTime::from_timestamp(when.seconds(), 0)
        .unwrap_or_else(Utc::now)
        .with_timezone(&offset)
}

/// Derive a repository name from a remote URL
///
/// Handles `https://host/org/name.git`, `ssh://git@host/org/name` and the
/// scp-like `git@host:org/name.git` form.
#[must_use]
pub fn repo_name_from_url(url: &str) -> Option<String> {
    let trimmed = url.trim().trim_end_matches('/');
    let last = trimmed.rsplit(['/', ':']).next()?;
    let name = last.strip_suffix(".git").unwrap_or(last);
    (!name.is_empty()).then(|| name.to_string())
}

/// Directory name of a work tree root
#[must_use]
pub fn repo_name_from_path(path: &Path) -> String {
    path.components()
        .next_back()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .filter(|name| !name.is_empty() && name != "/")
        .unwrap_or_else(|| "repository".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_author_ident_format() {
        let sig = git2::Signature::now("Test Author", "test@example.com").expect("signature");
        assert_eq!(author_ident(&sig), "Test Author <test@example.com>");
    }

    #[test]
    fn test_repo_name_from_https_url() {
        assert_eq!(
            repo_name_from_url("https://github.com/org/myrepo.git"),
            Some("myrepo".to_string())
        );
    }

    #[test]
    fn test_repo_name_from_url_without_suffix() {
        assert_eq!(
            repo_name_from_url("https://gitlab.com/group/sub/project"),
            Some("project".to_string())
        );
    }

    #[test]
    fn test_repo_name_from_scp_url() {
        assert_eq!(
            repo_name_from_url("git@github.com:org/myrepo.git"),
            Some("myrepo".to_string())
        );
        assert_eq!(
            repo_name_from_url("git@host:myrepo.git"),
            Some("myrepo".to_string())
        );
    }

    #[test]
    fn test_repo_name_from_url_trailing_slash() {
        assert_eq!(
            repo_name_from_url("ssh://git@host/org/myrepo/"),
            Some("myrepo".to_string())
        );
    }

    #[test]
    fn test_repo_name_from_empty_url() {
        assert_eq!(repo_name_from_url(""), None);
        assert_eq!(repo_name_from_url(".git"), None);
    }

    #[test]
    fn test_repo_name_from_path() {
        assert_eq!(
            repo_name_from_path(Path::new("/home/me/projects/devlog/")),
            "devlog"
        );
        assert_eq!(repo_name_from_path(Path::new("/")), "repository");
    }

    #[test]
    fn test_discover_nonexistent_path() {
        let result = GitRepo::discover("/nonexistent/path/12345");
        match result {
            Err(GitError::NotAGitRepository { path }) => {
                assert!(path.contains("nonexistent"));
            }
            _ => panic!("Expected NotAGitRepository error"),
        }
    }

    #[test]
    fn test_read_options_builder() {
        let options = ReadOptions::default().with_limit(10).by_author("alice");
        assert_eq!(options.max_commits, Some(10));
        assert_eq!(options.author.as_deref(), Some("alice"));
    }
}
