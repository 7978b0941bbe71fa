// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! devlog library
//!
//! Configuration, command dispatch and presentation for the `devlog`
//! binary, exported for integration tests and benchmarks.

#![warn(missing_docs)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod history;
pub mod logging;
pub mod present;
pub mod report;

pub use cli::{Cli, Command, RangeArg};
pub use commands::{CommandError, Outcome, StatusReport, Streams, execute};
pub use config::{Config, ConfigSource, LoadedConfig, OutputFormat};
pub use context::RunContext;
pub use report::{Report, ReportBody, ReportStats};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::cli::{Cli, Command};
    pub use crate::commands::{CommandError, Outcome};
    pub use crate::config::{Config, OutputFormat};
    pub use crate::context::RunContext;
    pub use crate::report::Report;
}
