// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! devlog-copilot: commit summarization for devlog
//!
//! This library crate turns lists of commits into prose. It drives the
//! GitHub Copilot CLI when it is installed and falls back to a deterministic
//! keyword summarizer otherwise.

#![warn(missing_docs)]

//! ## Summarizing
//!
//! ```rust,no_run
//! use devlog_copilot::{CopilotCli, ReportContext, SummaryKind, SummaryRequest, SummaryStrategy};
//!
//! # async fn run(commits: Vec<devlog_git::Commit>) {
//! let cli = CopilotCli::from_env();
//! let primary: Option<Box<dyn devlog_copilot::Summarizer>> = if cli.is_available().await {
//!     Some(Box::new(cli))
//! } else {
//!     None
//! };
//! let strategy = SummaryStrategy::new(primary);
//! let context = ReportContext::default();
//! let summary = strategy
//!     .summarize(&SummaryRequest::new(SummaryKind::Daily, &context, &commits))
//!     .await;
//! println!("[{}] {}", summary.source, summary.text);
//! # }
//! ```

pub mod cli;
pub mod error;
pub mod local;
pub mod prompt;
pub mod sanitize;
pub mod summarizer;

pub use cli::CopilotCli;
pub use error::CopilotError;
pub use local::{NO_COMMITS_SUMMARY, local_summarize};
pub use prompt::{ReportContext, SummaryKind, SummaryRequest, build_prompt};
pub use sanitize::sanitize_output;
pub use summarizer::{LocalSummarizer, Summarizer, Summary, SummarySource, SummaryStrategy};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::cli::CopilotCli;
    pub use crate::error::CopilotError;
    pub use crate::prompt::{ReportContext, SummaryKind, SummaryRequest};
    pub use crate::summarizer::{Summarizer, Summary, SummarySource, SummaryStrategy};
}
