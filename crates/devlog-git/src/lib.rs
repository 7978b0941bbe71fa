// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! devlog-git: Git history reading for devlog
//!
//! This library crate reads commits out of a local git repository, windows
//! them by time range or ref range, and groups them by calendar day for the
//! devlog reports.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use devlog_git::{GitRepo, ReadOptions, Selection, group_commits_by_date};
//!
//! let repo = GitRepo::discover(".").expect("open repo");
//! let commits = repo
//!     .read(&Selection::ThisWeek, &ReadOptions::default(), &chrono::Local::now())
//!     .expect("read commits");
//!
//! for group in group_commits_by_date(&commits) {
//!     println!("{} ({} commits)", group.label, group.commits.len());
//! }
//! ```

pub mod commit;
pub mod error;
pub mod grouper;
pub mod reader;
pub mod window;

pub use commit::{Commit, DiffStats};
pub use error::GitError;
pub use grouper::{CommitGroup, group_commits_by_date, group_commits_by_date_in};
pub use reader::{
    GitRepo, NO_TAG_LABEL, ReadOptions, UNKNOWN_AUTHOR, repo_name_from_path, repo_name_from_url,
};
pub use window::{Selection, TimeWindow};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::commit::{Commit, DiffStats};
    pub use crate::error::GitError;
    pub use crate::grouper::{CommitGroup, group_commits_by_date};
    pub use crate::reader::{GitRepo, ReadOptions};
    pub use crate::window::Selection;
}
