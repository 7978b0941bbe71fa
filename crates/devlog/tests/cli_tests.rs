// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! CLI parsing tests
//!
//! These tests verify subcommand parsing, global flag placement and the
//! logging level derived from --verbose / --quiet.

use std::path::PathBuf;

use clap::Parser;
use devlog::cli::{Cli, Command, RangeArg};
use devlog::commands::CommandError;
use tracing::Level;

// ============================================================================
// Subcommands
// ============================================================================

#[test]
fn test_report_subcommands() {
    for (arg, expected) in [
        ("today", Command::Today),
        ("standup", Command::Standup),
        ("week", Command::Week),
        ("release", Command::Release),
        ("status", Command::Status),
    ] {
        let cli = Cli::try_parse_from(["devlog", arg]).expect("parse should succeed");
        assert_eq!(cli.command, Some(expected));
    }
}

#[test]
fn test_recap_takes_range() {
    let cli = Cli::try_parse_from(["devlog", "recap", "v1.0.0..HEAD"]).expect("parse");
    assert_eq!(
        cli.command,
        Some(Command::Recap {
            range: "v1.0.0..HEAD".to_string()
        })
    );
}

#[test]
fn test_recap_requires_range() {
    assert!(Cli::try_parse_from(["devlog", "recap"]).is_err());
}

#[test]
fn test_recap_shape_is_checked_later() {
    // clap accepts any string; RangeArg::parse rejects it
    let cli = Cli::try_parse_from(["devlog", "recap", "abc123"]).expect("parse");
    let Some(Command::Recap { range }) = cli.command else {
        panic!("expected recap");
    };
    assert!(matches!(
        RangeArg::parse(&range),
        Err(CommandError::InvalidRange { .. })
    ));
}

#[test]
fn test_init_force() {
    let cli = Cli::try_parse_from(["devlog", "init"]).expect("parse");
    assert_eq!(cli.command, Some(Command::Init { force: false }));
    let cli = Cli::try_parse_from(["devlog", "init", "--force"]).expect("parse");
    assert_eq!(cli.command, Some(Command::Init { force: true }));
}

#[test]
fn test_subcommand_required() {
    assert!(Cli::try_parse_from(["devlog"]).is_err());
    assert!(Cli::try_parse_from(["devlog", "--json"]).is_err());
}

#[test]
fn test_unknown_subcommand() {
    let err = Cli::try_parse_from(["devlog", "yesterday"]).expect_err("should fail");
    assert!(err.use_stderr());
}

#[test]
fn test_help_and_version_are_not_errors_for_exit_status() {
    let help = Cli::try_parse_from(["devlog", "--help"]).expect_err("help short-circuits");
    assert!(!help.use_stderr());
    let version = Cli::try_parse_from(["devlog", "--version"]).expect_err("version");
    assert!(!version.use_stderr());
}

// ============================================================================
// Global flags
// ============================================================================

#[test]
fn test_flags_before_subcommand() {
    let cli = Cli::try_parse_from([
        "devlog", "--json", "--no-ai", "-o", "out.json", "-C", "/tmp", "today",
    ])
    .expect("parse");
    assert!(cli.json);
    assert!(cli.no_ai);
    assert_eq!(cli.output, Some(PathBuf::from("out.json")));
    assert_eq!(cli.directory, Some(PathBuf::from("/tmp")));
    assert_eq!(cli.command, Some(Command::Today));
}

#[test]
fn test_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "devlog",
        "week",
        "--json",
        "--no-ai",
        "--output",
        "week.md",
        "--directory",
        "repo",
    ])
    .expect("parse");
    assert!(cli.json);
    assert!(cli.no_ai);
    assert_eq!(cli.output, Some(PathBuf::from("week.md")));
    assert_eq!(cli.directory, Some(PathBuf::from("repo")));
}

#[test]
fn test_flags_around_recap_range() {
    let cli =
        Cli::try_parse_from(["devlog", "--no-ai", "recap", "a..b", "--json"]).expect("parse");
    assert!(cli.no_ai);
    assert!(cli.json);
    assert_eq!(
        cli.command,
        Some(Command::Recap {
            range: "a..b".to_string()
        })
    );
}

#[test]
fn test_defaults_without_flags() {
    let cli = Cli::try_parse_from(["devlog", "today"]).expect("parse");
    assert!(!cli.json);
    assert!(!cli.no_ai);
    assert!(cli.output.is_none());
    assert!(cli.directory.is_none());
}

// ============================================================================
// Logging level
// ============================================================================

#[test]
fn test_verbose_short_flag() {
    let cli = Cli::try_parse_from(["devlog", "-v", "today"]).expect("parse");
    assert!(cli.verbose);
    assert_eq!(cli.log_level(), Level::DEBUG);
}

#[test]
fn test_quiet_long_flag_after_subcommand() {
    let cli = Cli::try_parse_from(["devlog", "status", "--quiet"]).expect("parse");
    assert!(cli.quiet);
    assert_eq!(cli.log_level(), Level::WARN);
}

#[test]
fn test_verbose_wins_over_quiet() {
    let cli = Cli::try_parse_from(["devlog", "-v", "-q", "today"]).expect("parse");
    assert_eq!(cli.log_level(), Level::DEBUG);
}

#[test]
fn test_default_log_level() {
    let cli = Cli::try_parse_from(["devlog", "today"]).expect("parse");
    assert_eq!(cli.log_level(), Level::INFO);
}

#[test]
fn test_flag_value_syntax_not_supported() {
    // Boolean flags are toggled by presence only
    assert!(Cli::try_parse_from(["devlog", "today", "--json=true"]).is_err());
}
