//! CLI module - Command-line interface definitions and handlers

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use colored::Colorize;
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::debug;

use crate::backends::host::SystemHost;
use crate::core::error::GrabError;
use crate::core::model::{Config, FilterSpec, Format, Root, Sink};
use crate::core::paths::{expand_home, normalize_extension};
use crate::flows::pipeline::{run_pipeline, Outcome};

/// grepcat - collect files by extension and substring, then print or copy them.
#[derive(Parser, Debug)]
#[command(name = "grepcat")]
#[command(
    author,
    version,
    about,
    long_about = r##"grepcat walks one or more directories, keeps files whose extension and
path/content match the given filters, and renders them as a tree, a sorted
path list, or concatenated contents.

The output is printed to stdout, copied to the clipboard, or both.

Output formats:
- tree: indented directory tree per root
- list: sorted file paths, one per line
- contents: "# <path>" header followed by each file's content

Examples:
    grepcat --substring store --action print
    grepcat --dir app --ext .js --action copy
    grepcat --dir foo,bar --substring bar,baz --ext .ts,.tsx
    grepcat --format tree,contents --max-depth 2
"##
)]
pub struct Cli {
    /// Directories to search (comma-separated).
    #[arg(
        long = "dir",
        value_name = "DIRS",
        value_delimiter = ',',
        default_value = ".",
        env = "GREPCAT_DIR",
        long_help = "Directories to search (comma-separated, repeatable).\n\n\
A leading ~ is expanded to the home directory. Every directory must exist."
    )]
    pub dirs: Vec<PathBuf>,

    /// File extensions to include (comma-separated).
    #[arg(
        long = "ext",
        value_name = "EXTS",
        value_delimiter = ',',
        env = "GREPCAT_EXT",
        long_help = "File extensions to include (comma-separated), e.g. .ts,.tsx\n\n\
The leading dot is optional and matching is case-insensitive.\n\
If omitted, files of every extension are included."
    )]
    pub exts: Vec<String>,

    /// Substrings to filter files by (comma-separated).
    #[arg(
        long = "substring",
        value_name = "SUBSTRINGS",
        value_delimiter = ',',
        long_help = "Substrings to filter files by (comma-separated).\n\n\
A file is kept when any substring occurs in its path, or (for the contents\n\
format) in its content. Matching is case-insensitive."
    )]
    pub substrings: Vec<String>,

    /// Maximum directory depth below each root (-1 = unlimited).
    #[arg(
        long,
        value_name = "N",
        default_value_t = -1,
        allow_negative_numbers = true,
        long_help = "Maximum depth of a file below its root, counted in path separators.\n\n\
0 keeps only files directly inside the root; -1 (default) is unlimited."
    )]
    pub max_depth: i64,

    /// Output formats, in output order (tree/list/contents).
    #[arg(
        long = "format",
        value_name = "FORMATS",
        value_delimiter = ',',
        default_value = "contents",
        value_parser = ["tree", "list", "contents"],
        env = "GREPCAT_FORMAT",
        long_help = "Output formats (comma-separated), rendered in the given order and\n\
separated by one blank line.\n\n\
Supported values:\n\
- tree\n\
- list\n\
- contents (default)"
    )]
    pub formats: Vec<String>,

    /// Actions to perform (print/copy/both).
    #[arg(
        long = "action",
        value_name = "ACTIONS",
        value_delimiter = ',',
        default_value = "both",
        value_parser = ["print", "copy", "both"],
        env = "GREPCAT_ACTION",
        long_help = "Where the output goes (comma-separated, in order).\n\n\
Supported values:\n\
- print: write to stdout\n\
- copy: copy to the system clipboard\n\
- both (default): print, then copy"
    )]
    pub actions: Vec<String>,

    /// Skip the confirmation prompt for more than 50 files.
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Disable colored output (NO_COLOR is honored too).
    #[arg(long)]
    pub no_color: bool,

    /// Quiet mode (errors only on stderr).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug diagnostics on stderr).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Validate arguments into an immutable run configuration
    pub fn to_config(&self) -> Result<Config, GrabError> {
        let mut roots = Vec::with_capacity(self.dirs.len());
        for dir in &self.dirs {
            let path = expand_home(dir)?;
            if !path.exists() {
                return Err(GrabError::RootNotFound(path));
            }
            if !path.is_dir() {
                return Err(GrabError::NotADirectory(path));
            }
            roots.push(Root::new(path));
        }

        let max_depth = match self.max_depth {
            -1 => None,
            d if d >= 0 => Some(d as usize),
            d => return Err(GrabError::InvalidDepth(d)),
        };

        let extensions = self
            .exts
            .iter()
            .map(|ext| normalize_extension(ext))
            .collect::<Result<BTreeSet<_>, _>>()?;

        let substrings = self
            .substrings
            .iter()
            .filter(|s| !s.is_empty())
            .cloned()
            .collect();

        let mut formats = Vec::new();
        for name in &self.formats {
            let format: Format = name.parse().map_err(GrabError::InvalidFormat)?;
            push_unique(&mut formats, format);
        }

        let mut sinks = Vec::new();
        for name in &self.actions {
            for sink in Sink::parse_action(name).map_err(GrabError::InvalidAction)? {
                push_unique(&mut sinks, sink);
            }
        }

        Ok(Config {
            roots,
            filter: FilterSpec {
                extensions,
                substrings,
                max_depth,
            },
            formats,
            sinks,
        })
    }
}

fn push_unique<T: PartialEq>(items: &mut Vec<T>, item: T) {
    if !items.contains(&item) {
        items.push(item);
    }
}

/// Bare invocation: show help instead of dumping the current directory
pub fn print_help() -> Result<()> {
    Cli::command().print_long_help()?;
    println!();
    Ok(())
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = cli.to_config().context("invalid arguments")?;
    debug!(?config, "configuration");

    let mut host = SystemHost::new(cli.yes, &config.sinks);
    match run_pipeline(&config, &mut host)? {
        Outcome::NoFiles => eprintln!("{}", "No matching files found.".yellow()),
        Outcome::Cancelled => eprintln!("Operation cancelled."),
        Outcome::Delivered { text, failed_sinks } => {
            debug!(bytes = text.len(), failed = failed_sinks.len(), "output delivered");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["grepcat"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.dirs, vec![PathBuf::from(".")]);
        assert_eq!(cli.max_depth, -1);

        let config = cli.to_config().unwrap();
        assert_eq!(config.formats, vec![Format::Contents]);
        assert_eq!(config.sinks, vec![Sink::Print, Sink::Copy]);
        assert_eq!(config.filter.max_depth, None);
        assert!(config.filter.extensions.is_empty());
    }

    #[test]
    fn test_comma_separated_values() {
        let temp = tempdir().unwrap();
        let dir = temp.path().to_str().unwrap();
        let cli = parse(&[
            "--dir",
            &format!("{},{}", dir, dir),
            "--ext",
            ".TS,tsx",
            "--substring",
            "bar,,baz",
            "--format",
            "list,tree,list",
            "--action",
            "copy,both",
            "--max-depth",
            "2",
        ]);
        let config = cli.to_config().unwrap();

        assert_eq!(config.roots.len(), 2);
        let exts: Vec<_> = config.filter.extensions.iter().cloned().collect();
        assert_eq!(exts, vec!["ts", "tsx"]);
        assert_eq!(config.filter.substrings, vec!["bar", "baz"]);
        assert_eq!(config.formats, vec![Format::List, Format::Tree]);
        assert_eq!(config.sinks, vec![Sink::Copy, Sink::Print]);
        assert_eq!(config.filter.max_depth, Some(2));
    }

    #[test]
    fn test_negative_depth_parses() {
        let cli = parse(&["--max-depth", "-1"]);
        assert_eq!(cli.max_depth, -1);

        let cli = parse(&["--max-depth", "-2"]);
        assert!(matches!(cli.to_config(), Err(GrabError::InvalidDepth(-2))));
    }

    #[test]
    fn test_unknown_format_rejected_by_parser() {
        let argv = ["grepcat", "--format", "yaml"];
        assert!(Cli::try_parse_from(argv).is_err());

        let argv = ["grepcat", "--action", "email"];
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_missing_dir() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("nope");
        let cli = parse(&["--dir", missing.to_str().unwrap()]);
        assert!(matches!(cli.to_config(), Err(GrabError::RootNotFound(_))));
    }

    #[test]
    fn test_invalid_extension() {
        let cli = parse(&["--ext", "a/b"]);
        assert!(matches!(
            cli.to_config(),
            Err(GrabError::InvalidExtension(_))
        ));
    }
}
