// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Cleaning raw Copilot CLI output

use regex::Regex;
use std::sync::LazyLock;

/// Lines that start the CLI's usage statistics footer
pub const USAGE_MARKERS: &[&str] = &[
    "Total usage est:",
    "Total duration (API):",
    "Total duration (wall):",
    "Total code changes:",
    "Usage by model:",
];

/// CSI sequences, OSC sequences and lone two-byte escapes
static ANSI_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1b\[[0-?]*[ -/]*[@-~]|\x1b\][^\x07\x1b]*(?:\x07|\x1b\\)|\x1b[@-Z\\-_]")
        .expect("Invalid ANSI regex")
});

/// Remove terminal escape sequences
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    ANSI_REGEX.replace_all(text, "").into_owned()
}

/// Strip escapes, cut the usage footer and trim
///
/// Everything from the earliest usage marker onward is dropped.
#[must_use]
pub fn sanitize_output(raw: &str) -> String {
    let clean = strip_ansi(raw);
    let cut = USAGE_MARKERS
        .iter()
        .filter_map(|marker| clean.find(marker))
        .min()
        .unwrap_or(clean.len());
    clean[..cut].trim().to_string()
}
