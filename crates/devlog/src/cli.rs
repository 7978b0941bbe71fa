// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Command line interface
//!
//! Global flags are accepted before or after the subcommand.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::CommandError;

/// devlog - turn your git history into a dev journal, standup notes and release notes
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "devlog")]
#[command(version, about, long_about = None)]
#[command(subcommand_required = true, arg_required_else_help = true)]
pub struct Cli {
    /// Report to produce
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Also write the report to a file
    ///
    /// JSON when --json is given or the file ends in `.json`, markdown otherwise.
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Skip Copilot and use the local summary
    #[arg(long, global = true, default_value = "false")]
    pub no_ai: bool,

    /// Run as if started in this directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - only warnings and errors are logged
    #[arg(short, long, global = true, default_value = "false")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Journal of today's commits
    Today,
    /// Standup notes from yesterday's and today's commits
    Standup,
    /// Recap of this week's commits, grouped by day
    Week,
    /// Release notes for commits since the last tag
    Release,
    /// Recap of a commit range
    ///
    /// Example:
    ///   devlog recap v1.0.0..HEAD
    Recap {
        /// Range in the form <from>..<to>
        range: String,
    },
    /// Write a default .devlogrc into the working directory
    Init {
        /// Overwrite an existing .devlogrc
        #[arg(long)]
        force: bool,
    },
    /// Show repository, configuration and Copilot status
    Status,
}

impl Command {
    /// Check if the command may call Copilot
    #[must_use]
    pub fn uses_ai(&self) -> bool {
        !matches!(self, Self::Init { .. })
    }
}

impl Cli {
    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// A validated `<from>..<to>` range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeArg {
    /// Exclusive start
    pub from: String,
    /// Inclusive end
    pub to: String,
}

impl RangeArg {
    /// Parse `<from>..<to>`
    ///
    /// Exactly one `..` separator with non-empty sides is accepted; the
    /// symmetric-difference form `a...b` is rejected. Sides are trimmed.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::InvalidRange` for any other shape.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let invalid = || CommandError::InvalidRange {
            input: input.to_string(),
        };

        if input.contains("...") || input.matches("..").count() != 1 {
            return Err(invalid());
        }
        let (from, to) = input.split_once("..").ok_or_else(invalid)?;
        let (from, to) = (from.trim(), to.trim());
        // A side ending or starting with a dot would merge into the separator
        if from.is_empty() || to.is_empty() || from.ends_with('.') || to.starts_with('.') {
            return Err(invalid());
        }

        Ok(Self {
            from: from.to_string(),
            to: to.to_string(),
        })
    }
}

impl fmt::Display for RangeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.from, self.to)
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: any two dot-free refs joined by `..` round trip
        #[test]
        fn prop_valid_ranges_parse(from in "[A-Za-z0-9_/~^-]{1,20}", to in "[A-Za-z0-9_/~^-]{1,20}") {
            let range = RangeArg::parse(&format!("{from}..{to}")).expect("valid range");
            prop_assert_eq!(range.from, from);
            prop_assert_eq!(range.to, to);
        }

        /// Property: input without a `..` separator is always rejected
        #[test]
        fn prop_missing_separator_rejected(input in "[A-Za-z0-9_/~^-]{0,30}") {
            prop_assert!(RangeArg::parse(&input).is_err());
        }

        /// Property: a parsed range never contains a separator in either side
        #[test]
        fn prop_sides_have_no_separator(input in "[a-z.]{0,12}") {
            if let Ok(range) = RangeArg::parse(&input) {
                prop_assert!(!range.from.contains(".."));
                prop_assert!(!range.to.contains(".."));
                prop_assert!(!range.from.is_empty() && !range.to.is_empty());
            }
        }
    }
}
