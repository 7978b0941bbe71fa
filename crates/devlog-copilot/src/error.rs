//! Error types for devlog-copilot

use thiserror::Error;

/// Errors that can occur while invoking the Copilot CLI
#[derive(Debug, Error)]
pub enum CopilotError {
    /// The CLI binary could not be found on PATH
    #[error("Copilot CLI not found: {program}")]
    NotInstalled {
        /// The program that was looked up
        program: String,
    },

    /// Error spawning or talking to the child process
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The CLI did not finish in time and was killed
    #[error("Copilot CLI timed out after {seconds}s")]
    Timeout {
        /// The timeout that elapsed
        seconds: u64,
    },

    /// The CLI exited unsuccessfully
    #[error("Copilot CLI failed (exit code {code}): {stderr}")]
    Failed {
        /// Exit code, or -1 when killed by a signal
        code: i32,
        /// Captured standard error
        stderr: String,
    },

    /// Standard output exceeded the capture limit
    #[error("Copilot CLI output exceeded {limit} bytes")]
    OutputTooLarge {
        /// The limit in bytes
        limit: usize,
    },
}
