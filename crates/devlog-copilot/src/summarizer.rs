// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Summarizer trait and the primary/fallback strategy

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::CopilotCli;
use crate::local::local_summarize;
use crate::prompt::SummaryRequest;

/// Which summarizer produced a summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummarySource {
    /// The Copilot CLI
    Copilot,
    /// The built-in keyword summarizer
    Local,
}

impl fmt::Display for SummarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Copilot => write!(f, "copilot"),
            Self::Local => write!(f, "local"),
        }
    }
}

/// A summary and where it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Summary text
    pub text: String,
    /// The summarizer that produced it
    pub source: SummarySource,
}

/// Something that turns commits into prose
///
/// An empty or blank result means "no summary".
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Identifies the implementation in reports
    fn source(&self) -> SummarySource;

    /// Summarize the request
    async fn summarize(&self, request: &SummaryRequest<'_>) -> String;
}

#[async_trait]
impl Summarizer for CopilotCli {
    fn source(&self) -> SummarySource {
        SummarySource::Copilot
    }

    async fn summarize(&self, request: &SummaryRequest<'_>) -> String {
        self.generate(request).await
    }
}

/// Keyword-bucket summarizer, always available
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSummarizer;

#[async_trait]
impl Summarizer for LocalSummarizer {
    fn source(&self) -> SummarySource {
        SummarySource::Local
    }

    async fn summarize(&self, request: &SummaryRequest<'_>) -> String {
        local_summarize(&request.all_commits())
    }
}

/// Try the primary summarizer, fall back to the local one
pub struct SummaryStrategy {
    primary: Option<Box<dyn Summarizer>>,
    fallback: LocalSummarizer,
}

impl SummaryStrategy {
    /// Build a strategy; `None` means only the local summarizer is used
    pub fn new(primary: Option<Box<dyn Summarizer>>) -> Self {
        Self {
            primary,
            fallback: LocalSummarizer,
        }
    }

    /// A strategy without a primary summarizer
    #[must_use]
    pub fn local_only() -> Self {
        Self::new(None)
    }

    /// Check if a primary summarizer is configured
    #[must_use]
    pub fn has_primary(&self) -> bool {
        self.primary.is_some()
    }

    /// Summarize with the primary if it returns non-blank text, else locally
    pub async fn summarize(&self, request: &SummaryRequest<'_>) -> Summary {
        if let Some(primary) = &self.primary {
            let text = primary.summarize(request).await;
            if !text.trim().is_empty() {
                return Summary {
                    text,
                    source: primary.source(),
                };
            }
            debug!("Primary summarizer returned nothing, using local summary");
        }

        Summary {
            text: self.fallback.summarize(request).await,
            source: self.fallback.source(),
        }
    }
}

impl fmt::Debug for SummaryStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SummaryStrategy")
            .field("primary", &self.primary.as_ref().map(|p| p.source()))
            .finish()
    }
}
