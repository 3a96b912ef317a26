//! Clipboard sink
//!
//! Pipes bytes into the first pasteboard command found on PATH.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::core::error::GrabError;
use crate::core::util::command_exists;

/// Candidate clipboard commands, in preference order
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("clip.exe", &[]),
];

/// Find the clipboard command to use on this machine
pub fn detect_command() -> Option<(&'static str, &'static [&'static str])> {
    CLIPBOARD_COMMANDS
        .iter()
        .copied()
        .find(|(cmd, _)| command_exists(cmd))
}

/// Write bytes to the system clipboard
pub fn write_clipboard(data: &[u8]) -> Result<(), GrabError> {
    let (cmd, args) = detect_command().ok_or_else(|| {
        GrabError::Clipboard(
            "no clipboard command found (tried pbcopy, wl-copy, xclip, xsel, clip.exe)".to_string(),
        )
    })?;
    pipe_to_command(cmd, args, data)
}

/// Run `cmd args...` with `data` on its stdin
pub fn pipe_to_command(cmd: &str, args: &[&str], data: &[u8]) -> Result<(), GrabError> {
    debug!(command = cmd, bytes = data.len(), "writing clipboard");

    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()?;

    // Dropping stdin closes the pipe before waiting
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(data),
        None => Ok(()),
    };

    let output = child.wait_with_output()?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GrabError::Clipboard(format!(
            "{} exited with {}: {}",
            cmd,
            output.status,
            stderr.trim()
        )));
    }
    written?;

    Ok(())
}
