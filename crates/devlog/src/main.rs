// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! devlog: turn git history into a dev journal, standup notes and release notes
//!
//! Binary entry point. Errors are printed as a single line on stderr and the
//! process exits with status 1.

use std::io::IsTerminal;
use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use tracing::debug;

use devlog::cli::Cli;
use devlog::commands::{self, Streams};
use devlog::logging;
use devlog::present::{RenderOptions, TerminalPresenter};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are reported through the error path
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let stderr_is_terminal = std::io::stderr().is_terminal();
    logging::init(cli.log_level(), stderr_is_terminal);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let mut presenter = TerminalPresenter::new(
                std::io::stderr(),
                stderr_is_terminal,
                RenderOptions::default(),
                Local::now(),
            );
            let _ = presenter.error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    debug!(?cli, "Parsed arguments");
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    let streams = Streams {
        out: &mut stdout,
        err: &mut stderr,
        color: std::io::stdout().is_terminal(),
    };
    commands::run(cli, streams).await?;
    Ok(())
}
