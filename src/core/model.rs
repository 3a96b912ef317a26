//! Data model shared by the collector, renderers and pipeline
//!
//! The CLI builds one immutable [`Config`]; everything downstream borrows it.

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::core::paths::root_label;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Tree,
    List,
    Contents,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Tree => "tree",
            Format::List => "list",
            Format::Contents => "contents",
        }
    }
}

impl std::str::FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tree" => Ok(Format::Tree),
            "list" => Ok(Format::List),
            "contents" | "content" => Ok(Format::Contents),
            _ => Err(format!(
                "Unknown format: {} (expected tree, list or contents)",
                s
            )),
        }
    }
}

/// Where rendered output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sink {
    Print,
    Copy,
}

impl Sink {
    /// Parse one `--action` value; `both` expands to print then copy
    pub fn parse_action(s: &str) -> Result<Vec<Sink>, String> {
        match s.trim().to_lowercase().as_str() {
            "print" => Ok(vec![Sink::Print]),
            "copy" => Ok(vec![Sink::Copy]),
            "both" => Ok(vec![Sink::Print, Sink::Copy]),
            _ => Err(format!(
                "Unknown action: {} (expected print, copy or both)",
                s
            )),
        }
    }
}

/// Extension, substring and depth filters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    /// Normalized extensions (no leading dot, lowercase); empty matches all
    pub extensions: BTreeSet<String>,
    /// Case-insensitive substrings; empty matches all
    pub substrings: Vec<String>,
    /// Maximum separator depth of a file below its root; `None` is unbounded
    pub max_depth: Option<usize>,
}

impl FilterSpec {
    pub fn depth_allowed(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|max| depth <= max)
    }
}

/// A traversal root as given by the user (after `~` expansion)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Root {
    pub path: PathBuf,
    pub label: String,
}

impl Root {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let label = root_label(&path);
        Self { path, label }
    }
}

/// A file that passed the collector's extension and depth filters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path shown to users: root label joined with `relative`
    pub path: String,
    /// Filesystem path as walked; the only path used for reading
    pub abs: PathBuf,
    /// Path relative to the root, '/' separated
    pub relative: String,
    /// Index of the originating root in [`CollectedFiles::groups`]
    pub root: usize,
    /// Separators in `relative`; 0 means directly inside the root
    pub depth: usize,
}

/// Entries discovered under one root, in walk order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootGroup {
    pub root: Root,
    pub entries: Vec<FileEntry>,
}

/// Collector output: one group per root, in the order roots were given
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectedFiles {
    pub groups: Vec<RootGroup>,
}

impl CollectedFiles {
    /// Candidate count before substring filtering
    pub fn total(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn entries(&self) -> impl Iterator<Item = &FileEntry> {
        self.groups.iter().flat_map(|g| g.entries.iter())
    }
}

/// Validated configuration for one run
#[derive(Debug, Clone)]
pub struct Config {
    pub roots: Vec<Root>,
    pub filter: FilterSpec,
    pub formats: Vec<Format>,
    pub sinks: Vec<Sink>,
}
