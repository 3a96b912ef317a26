//! grepcat - collect files by extension and substring, render them, and
//! print or copy the result
//!
//! grepcat provides:
//! - Depth-bounded directory walking over several roots
//! - Extension and case-insensitive substring filters
//! - tree / list / contents output formats
//! - stdout and clipboard sinks

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod backends;
mod cli;
mod core;
mod flows;

fn main() -> Result<()> {
    if std::env::args_os().len() <= 1 {
        return cli::print_help();
    }

    let cli = cli::Cli::parse();
    init_logging(&cli);
    cli::run(cli)
}

/// Diagnostics go to stderr so stdout carries only rendered output.
/// RUST_LOG, when set, overrides the -v/-q level.
fn init_logging(cli: &cli::Cli) {
    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!cli.no_color)
        .with_target(false)
        .without_time()
        .init();
}
