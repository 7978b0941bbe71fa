// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Async access to git history
//!
//! Each call opens its own repository handle on the blocking pool so reads
//! can run concurrently.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use devlog_git::{Commit, GitError, GitRepo, ReadOptions, Selection};
use serde::Serialize;

use crate::commands::CommandError;

/// Repository details shown in report headers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RepoInfo {
    /// Repository name
    pub name: String,
    /// Current branch
    pub branch: String,
    /// Author the report is for
    pub author: String,
}

/// Handle to a repository's work tree
#[derive(Debug, Clone)]
pub struct History {
    workdir: PathBuf,
}

impl History {
    /// Open the repository containing `dir`
    ///
    /// # Errors
    ///
    /// Returns `CommandError::Git` with `GitError::NotAGitRepository` when
    /// `dir` is not inside a work tree.
    pub async fn open(dir: &Path) -> Result<Self, CommandError> {
        let dir = dir.to_path_buf();
        let workdir = tokio::task::spawn_blocking(move || {
            GitRepo::discover(&dir).map(|repo| repo.workdir().to_path_buf())
        })
        .await??;
        Ok(Self { workdir })
    }

    /// Root of the work tree
    #[must_use]
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Run a read against a fresh repository handle on the blocking pool
    async fn with_repo<T, F>(&self, f: F) -> Result<T, CommandError>
    where
        T: Send + 'static,
        F: FnOnce(&GitRepo) -> Result<T, GitError> + Send + 'static,
    {
        let workdir = self.workdir.clone();
        let result = tokio::task::spawn_blocking(move || {
            let repo = GitRepo::discover(&workdir)?;
            f(&repo)
        })
        .await??;
        Ok(result)
    }

    /// Commits for a selection, newest first
    pub async fn commits(
        &self,
        selection: Selection,
        options: ReadOptions,
        now: DateTime<Local>,
    ) -> Result<Vec<Commit>, CommandError> {
        self.with_repo(move |repo| repo.read(&selection, &options, &now))
            .await
    }

    /// Name, branch and author, read concurrently
    ///
    /// `author_override` replaces the git `user.name` when set.
    pub async fn repo_info(&self, author_override: Option<String>) -> Result<RepoInfo, CommandError> {
        let author = async {
            match author_override {
                Some(author) => Ok(author),
                None => self.with_repo(|repo| Ok(repo.user_name())).await,
            }
        };
        let (name, branch, author) = tokio::try_join!(
            self.with_repo(|repo| Ok(repo.repo_name())),
            self.with_repo(|repo| Ok(repo.current_branch())),
            author,
        )?;
        Ok(RepoInfo {
            name,
            branch,
            author,
        })
    }

    /// Latest tag, or the no-tag label
    pub async fn release_label(&self) -> Result<String, CommandError> {
        self.with_repo(|repo| Ok(repo.release_label())).await
    }

    /// Number of commits reachable from HEAD
    pub async fn commit_count(&self) -> Result<usize, CommandError> {
        self.with_repo(GitRepo::commit_count).await
    }
}
