// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Test utilities for devlog integration tests
//!
//! This module provides utilities for:
//! - Temporary directory management
//! - Git repository scaffolding with controlled dates
//! - Running the `devlog` binary in isolation
//! - Stand-in Copilot CLI scripts

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::atomic::{AtomicU32, Ordering};

// ============================================================================
// Temporary Directory Management
// ============================================================================

/// Counter for generating unique test directory names
static TEST_DIR_COUNTER: AtomicU32 = AtomicU32::new(0);

/// A temporary directory that is automatically cleaned up when dropped
pub struct TempTestDir {
    path: PathBuf,
}

impl TempTestDir {
    /// Create a new temporary test directory
    ///
    /// The name combines the test name, process id and a counter so
    /// concurrent tests never share a directory.
    pub fn new(test_name: &str) -> Self {
        let counter = TEST_DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir_name = format!(
            "devlog-test-{}-{}-{}",
            test_name,
            std::process::id(),
            counter
        );
        let path = std::env::temp_dir().join(dir_name);

        fs::create_dir_all(&path).expect("Failed to create temp test directory");

        Self { path }
    }

    /// Get the path to the temporary directory
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a file within the temp directory with the given content
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(relative_path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }
}

impl Drop for TempTestDir {
    fn drop(&mut self) {
        if self.path.exists() {
            let _ = fs::remove_dir_all(&self.path);
        }
    }
}

// ============================================================================
// Git Repository Scaffolding
// ============================================================================

/// A date well outside any "today" or "this week" window
pub const OLD_DATE: &str = "2020-03-02T10:00:00+00:00";

/// A temporary git repository built with the `git` CLI
pub struct TestGitRepo {
    temp_dir: TempTestDir,
}

impl TestGitRepo {
    /// Create and initialize a repository on branch `main`
    pub fn new(test_name: &str) -> Self {
        let temp_dir = TempTestDir::new(test_name);
        let repo = Self { temp_dir };
        repo.git(&["init", "--initial-branch=main"]);
        repo.git(&["config", "user.email", "test@example.com"]);
        repo.git(&["config", "user.name", "Test Author"]);
        repo.git(&["config", "commit.gpgsign", "false"]);
        repo
    }

    /// Get the path to the repository
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a file and stage it
    pub fn create_file(&self, relative_path: &str, content: &str) -> &Self {
        self.temp_dir.create_file(relative_path, content);
        self.git(&["add", relative_path]);
        self
    }

    /// Commit staged changes now
    pub fn commit(&self, message: &str) -> String {
        self.git(&["commit", "--allow-empty", "-m", message]);
        self.head_sha()
    }

    /// Commit staged changes with both author and committer dates set
    pub fn commit_at(&self, message: &str, date: &str) -> String {
        run_git_env(
            self.path(),
            &["commit", "--allow-empty", "-m", message],
            &[("GIT_AUTHOR_DATE", date), ("GIT_COMMITTER_DATE", date)],
        );
        self.head_sha()
    }

    /// Create a file and commit it now
    pub fn create_and_commit(&self, relative_path: &str, content: &str, message: &str) -> String {
        self.create_file(relative_path, content);
        self.commit(message)
    }

    /// Add a lightweight tag at HEAD
    pub fn tag(&self, name: &str) {
        self.git(&["tag", name]);
    }

    /// Get the SHA of HEAD
    pub fn head_sha(&self) -> String {
        let output = Command::new("git")
            .current_dir(self.path())
            .args(["rev-parse", "HEAD"])
            .output()
            .expect("Failed to get HEAD SHA");

        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    fn git(&self, args: &[&str]) {
        run_git_env(self.path(), args, &[]);
    }
}

/// Run a git command in the given directory with extra environment
fn run_git_env(dir: &Path, args: &[&str], envs: &[(&str, &str)]) {
    let output = Command::new("git")
        .current_dir(dir)
        .args(args)
        .envs(envs.iter().copied())
        .output()
        .expect("Failed to run git command");

    if !output.status.success() {
        panic!(
            "Git command failed: git {}\nstderr: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

// ============================================================================
// Running the Binary
// ============================================================================

/// Result of one `devlog` run
pub struct RunResult {
    /// Exit code, -1 if killed by a signal
    pub code: i32,
    /// Captured stdout
    pub stdout: String,
    /// Captured stderr
    pub stderr: String,
}

impl From<Output> for RunResult {
    fn from(output: Output) -> Self {
        Self {
            code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl RunResult {
    /// Parse stdout as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}):\n{}", self.stdout))
    }
}

/// Run `devlog` in `dir` with an isolated home directory
///
/// `copilot` is the binary used for the Copilot CLI; a path that does not
/// exist makes Copilot unavailable.
pub fn run_devlog(dir: &Path, home: &Path, copilot: &Path, args: &[&str]) -> RunResult {
    Command::new(env!("CARGO_BIN_EXE_devlog"))
        .current_dir(dir)
        .args(args)
        .env("HOME", home)
        .env("DEVLOG_COPILOT_BIN", copilot)
        .env_remove("DEVLOG_LOG")
        .env_remove("NO_COLOR")
        .output()
        .expect("Failed to run devlog")
        .into()
}

// ============================================================================
// Stand-in Copilot CLI
// ============================================================================

/// Write a Copilot stand-in that answers the version probe and prints
/// `reply` for prompts, touching `marker` when a prompt is received
#[cfg(unix)]
pub fn fake_copilot(dir: &Path, reply: &str, marker: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("copilot");
    let script = format!(
        "#!/bin/sh\n\
         if [ \"$1\" = \"--version\" ]; then echo '0.0.339'; exit 0; fi\n\
         if [ \"$1\" = \"-p\" ]; then touch '{}'; fi\n\
         echo '{}'\n",
        marker.display(),
        reply
    );
    fs::write(&path, script).expect("Failed to write fake copilot");
    let mut perms = fs::metadata(&path).expect("metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("chmod");
    path
}

// ============================================================================
// Unit Tests for Utilities
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utils_temp_dir_cleanup() {
        let path;
        {
            let temp = TempTestDir::new("test_cleanup");
            path = temp.path().to_path_buf();
            assert!(path.exists());
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_utils_git_repo_commit_at() {
        let repo = TestGitRepo::new("test_commit_at");
        repo.create_file("a.txt", "a");
        let sha = repo.commit_at("Old commit", OLD_DATE);

        assert_eq!(sha.len(), 40);
        let output = Command::new("git")
            .current_dir(repo.path())
            .args(["log", "-1", "--format=%aI"])
            .output()
            .expect("git log");
        assert_eq!(
            String::from_utf8_lossy(&output.stdout).trim(),
            "2020-03-02T10:00:00+00:00"
        );
    }
}
