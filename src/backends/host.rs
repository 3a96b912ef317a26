//! The real host: terminal prompt, system clipboard and stdout

use std::io::{self, Write};
use std::time::Instant;

use colored::Colorize;

use crate::backends::clipboard::write_clipboard;
use crate::backends::prompt::confirm_on_terminal;
use crate::core::error::GrabError;
use crate::core::model::Sink;
use crate::core::util::format_elapsed;
use crate::flows::pipeline::Host;

pub struct SystemHost {
    started: Instant,
    assume_yes: bool,
    /// Show "Copied to clipboard!"; off when the output is also printed
    announce_copy: bool,
}

impl SystemHost {
    pub fn new(assume_yes: bool, sinks: &[Sink]) -> Self {
        Self {
            started: Instant::now(),
            assume_yes,
            announce_copy: !sinks.contains(&Sink::Print),
        }
    }
}

impl Host for SystemHost {
    fn confirm_large_batch(&mut self, count: usize) -> bool {
        self.assume_yes || confirm_on_terminal(count)
    }

    fn write_clipboard(&mut self, data: &[u8]) -> Result<(), GrabError> {
        write_clipboard(data)?;
        if !self.announce_copy {
            return Ok(());
        }
        eprintln!(
            "{} {}",
            "Copied to clipboard!".green().bold(),
            format!("({})", format_elapsed(self.started.elapsed())).dimmed()
        );
        Ok(())
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", text)?;
        stdout.flush()
    }
}
