//! Collect → confirm → render → dispatch
//!
//! The pipeline only reaches the outside world through [`Host`], so the whole
//! flow can be driven by a scripted host in tests.

use std::io;

use tracing::{debug, info};

use crate::backends::collect::collect;
use crate::core::error::GrabError;
use crate::core::model::{Config, Sink};
use crate::core::render::Renderer;

/// Above this many candidate files the host is asked to confirm
pub const LARGE_BATCH_THRESHOLD: usize = 50;

/// Side effects the pipeline needs from its environment
pub trait Host {
    /// Yes/no decision for a batch of `count` files
    fn confirm_large_batch(&mut self, count: usize) -> bool;

    fn write_clipboard(&mut self, data: &[u8]) -> Result<(), GrabError>;

    fn print(&mut self, text: &str) -> io::Result<()>;

    /// Non-fatal diagnostic
    fn report_warning(&mut self, message: &str, context: &str) {
        tracing::warn!(context, "{}", message);
    }
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing matched; no sink was touched
    NoFiles,
    /// The large-batch confirmation was declined
    Cancelled,
    /// Output was handed to the sinks; failed sinks were reported
    Delivered { text: String, failed_sinks: Vec<Sink> },
}

/// Run one invocation end to end.
///
/// Collection errors abort before anything is emitted. Per-file read errors
/// and sink failures are reported through the host and do not fail the run.
pub fn run_pipeline<H: Host>(config: &Config, host: &mut H) -> Result<Outcome, GrabError> {
    let files = collect(&config.roots, &config.filter)?;
    let total = files.total();
    debug!(candidates = total, roots = files.groups.len(), "collection finished");

    if files.is_empty() {
        return Ok(Outcome::NoFiles);
    }

    if total > LARGE_BATCH_THRESHOLD && !host.confirm_large_batch(total) {
        info!(candidates = total, "large batch declined");
        return Ok(Outcome::Cancelled);
    }

    let rendered = Renderer::new(&files, &config.filter).render_all(&config.formats);
    for warning in &rendered.warnings {
        host.report_warning(
            &format!("{}: {}", warning.code.as_str(), warning.message),
            &warning.path,
        );
    }

    let text = rendered.combined();
    if text.is_empty() {
        return Ok(Outcome::NoFiles);
    }

    let failed_sinks = dispatch(&text, &config.sinks, host);
    Ok(Outcome::Delivered { text, failed_sinks })
}

/// Hand the text to each sink in order; a failing sink never blocks the next
fn dispatch<H: Host>(text: &str, sinks: &[Sink], host: &mut H) -> Vec<Sink> {
    let mut failed = Vec::new();

    for &sink in sinks {
        let result = match sink {
            Sink::Print => host.print(text).map_err(|e| e.to_string()),
            Sink::Copy => host.write_clipboard(text.as_bytes()).map_err(|e| e.to_string()),
        };
        if let Err(message) = result {
            let context = match sink {
                Sink::Print => "print",
                Sink::Copy => "copy",
            };
            host.report_warning(&message, context);
            failed.push(sink);
        }
    }

    failed
}
