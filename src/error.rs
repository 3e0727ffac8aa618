//! Error types for dependency resolution and installation.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The running system is not a Debian or Ubuntu release we know about.
    #[error("Unsupported distribution: {reason}")]
    UnsupportedDistribution { reason: String },

    /// The executable exists but could not be started.
    #[error("Permission denied while executing {command}. Is the file executable?")]
    HookLaunchDenied { command: String },

    /// Spawning failed for a reason other than permissions.
    #[error("Failed to run {command}: {source}")]
    LaunchFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The process ran and exited unsuccessfully.
    #[error("{command} failed ({})", exit_status(.code))]
    SubprocessFailed {
        command: String,
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    #[error("Package manager '{program}' not found in PATH")]
    PackageManagerNotFound { program: String },

    #[error("Not a directory: {}", path.display())]
    InvalidSearchRoot { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Exit code for display; `None` means the process died from a signal.
pub fn return_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "killed by signal".to_string(),
    }
}

fn exit_status(code: &Option<i32>) -> String {
    match code {
        Some(_) => format!("exit code {}", return_code(code)),
        None => return_code(code),
    }
}
