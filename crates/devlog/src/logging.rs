// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Tracing setup
//!
//! Logs go to stderr through the indicatif writer so they do not tear the
//! Copilot spinner. `DEVLOG_LOG` overrides the level chosen by the flags.

use tracing::Level;
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding a filter directive, e.g. `devlog=debug`
pub const LOG_ENV_VAR: &str = "DEVLOG_LOG";

/// Install the global subscriber
///
/// Does nothing if a subscriber is already installed.
pub fn init(level: Level, ansi: bool) {
    let indicatif_layer = IndicatifLayer::new();

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy();

    let fmt = fmt::layer()
        .with_ansi(ansi)
        .with_target(false)
        .without_time()
        .with_writer(indicatif_layer.get_stderr_writer())
        .compact();

    let _ = tracing_subscriber::registry()
        .with(fmt)
        .with(indicatif_layer)
        .with(env_filter)
        .try_init();
}
