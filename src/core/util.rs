//! Common utilities

use std::time::Duration;

/// Check if a command is available in PATH
pub fn command_exists(cmd: &str) -> bool {
    std::process::Command::new("which")
        .arg(cmd)
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Elapsed time rounded to whole milliseconds, e.g. `12ms`
pub fn format_elapsed(elapsed: Duration) -> String {
    let ms = (elapsed.as_micros() + 500) / 1000;
    format!("{}ms", ms)
}
