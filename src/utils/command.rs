//! Command execution primitives with consistent error handling.
//!
//! Every invocation takes an explicit working directory. The process-wide
//! working directory is never mutated.

use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

/// Captured outcome of an external command that was allowed to fail.
///
/// The caller decides whether a non-zero exit is fatal; the full stdout and
/// stderr are always preserved so failures can be reported verbatim.
#[derive(Debug, Clone)]
pub struct CommandCapture {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandCapture {
    /// Extract error text from the capture.
    ///
    /// Prefers stderr, falls back to stdout if stderr is empty.
    pub fn error_text(&self) -> &str {
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            stderr
        } else {
            self.stdout.trim()
        }
    }
}

/// Run a command in a directory, capturing output regardless of exit status.
///
/// Returns an error only if the command could not be spawned at all.
pub fn capture_in(dir: &Path, program: &str, args: &[&str], context: &str) -> Result<CommandCapture> {
    let output = Command::new(program)
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(|e| {
            Error::internal_io(
                format!("Failed to run {}: {}", context, e),
                Some(context.to_string()),
            )
        })?;

    Ok(CommandCapture {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).trim_end().to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
    })
}

/// Run a command in a directory, returning Ok(None) on failure instead of error.
///
/// Useful when command failure is expected/acceptable (e.g., capturing a
/// commit hash outside a repository).
pub fn run_in_optional(dir: &Path, program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program)
        .args(args)
        .current_dir(dir)
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if stdout.is_empty() {
        None
    } else {
        Some(stdout)
    }
}

/// Render a program and its arguments as a single display string.
///
/// For logging and error details only, never re-parsed for execution.
pub fn display_command(program: &str, args: &[&str]) -> String {
    let mut parts = vec![program.to_string()];
    parts.extend(args.iter().map(|a| (*a).to_string()));
    parts.join(" ")
}
