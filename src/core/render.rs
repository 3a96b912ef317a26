//! Renderer module
//!
//! Renders collected files as `tree`, `list` or `contents` sections and joins
//! them into the final output text.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::core::file_reader::{read_file, FileWarning, WarningCode};
use crate::core::model::{CollectedFiles, FileEntry, FilterSpec, Format, RootGroup};
use crate::core::paths::substring_matches;
use crate::core::tree::{DirectoryTree, INDENT};

static EXTRA_NEWLINES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("Invalid EXTRA_NEWLINES regex"));

/// Collapse runs of 3+ newlines to exactly 2, then trim the whole section
pub fn normalize_section(text: &str) -> String {
    EXTRA_NEWLINES.replace_all(text, "\n\n").trim().to_string()
}

/// One rendered format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub format: Format,
    pub text: String,
}

/// All sections of a run, in requested order, plus per-file warnings
#[derive(Debug, Clone, Default)]
pub struct RenderedOutput {
    pub sections: Vec<Section>,
    pub warnings: Vec<FileWarning>,
}

impl RenderedOutput {
    /// Join non-empty sections with exactly one blank line between them
    pub fn combined(&self) -> String {
        self.sections
            .iter()
            .filter(|s| !s.text.is_empty())
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Renderer over one collection and its filter
pub struct Renderer<'a> {
    files: &'a CollectedFiles,
    filter: &'a FilterSpec,
}

impl<'a> Renderer<'a> {
    pub fn new(files: &'a CollectedFiles, filter: &'a FilterSpec) -> Self {
        Self { files, filter }
    }

    /// Render every format in the given order
    pub fn render_all(&self, formats: &[Format]) -> RenderedOutput {
        let mut output = RenderedOutput::default();
        for &format in formats {
            let text = match format {
                Format::Tree => self.render_tree(),
                Format::List => self.render_list(),
                Format::Contents => {
                    let (text, warnings) = self.render_contents();
                    output.warnings.extend(warnings);
                    text
                }
            };
            let text = normalize_section(&text);
            debug!(format = format.as_str(), bytes = text.len(), "rendered section");
            output.sections.push(Section { format, text });
        }
        output
    }

    fn path_matches(&self, entry: &FileEntry) -> bool {
        substring_matches(&self.filter.substrings, &entry.path, None)
    }

    /// `<root>/` followed by an indented tree, for each root with matches
    pub fn render_tree(&self) -> String {
        let blocks: Vec<String> = self
            .files
            .groups
            .iter()
            .filter_map(|group| self.render_tree_block(group))
            .collect();
        blocks.join("\n")
    }

    fn render_tree_block(&self, group: &RootGroup) -> Option<String> {
        let mut tree = DirectoryTree::new();
        for entry in group.entries.iter().filter(|e| self.path_matches(e)) {
            tree.insert_path(&entry.relative, true);
        }
        if tree.is_empty() {
            return None;
        }

        let label = &group.root.label;
        let mut block = if label.ends_with('/') {
            format!("{}\n", label)
        } else {
            format!("{}/\n", label)
        };
        block.push_str(&tree.render(INDENT));
        Some(block)
    }

    /// Matching display paths across all roots, sorted
    pub fn render_list(&self) -> String {
        let mut paths: Vec<&str> = self
            .files
            .entries()
            .filter(|e| self.path_matches(e))
            .map(|e| e.path.as_str())
            .collect();
        paths.sort_unstable();
        paths.join("\n")
    }

    /// `# <path>` headers followed by file contents.
    ///
    /// Unreadable files are skipped and returned as warnings.
    pub fn render_contents(&self) -> (String, Vec<FileWarning>) {
        let mut output = String::new();
        let mut warnings = Vec::new();

        for entry in self.files.entries() {
            let content = match read_file(&entry.abs) {
                Ok(c) => c,
                Err(e) => {
                    warnings.push(FileWarning::new(
                        WarningCode::FileUnreadable,
                        format!("failed to read file: {}", e),
                        &entry.path,
                    ));
                    continue;
                }
            };

            if !substring_matches(&self.filter.substrings, &entry.path, Some(&content.text)) {
                continue;
            }

            if content.lossy {
                warnings.push(FileWarning::new(
                    WarningCode::LossyConversion,
                    "invalid UTF-8 replaced with U+FFFD",
                    &entry.path,
                ));
            }

            output.push_str("# ");
            output.push_str(&entry.path);
            output.push('\n');
            output.push_str(&content.text);
            output.push_str("\n\n");
        }

        (output, warnings)
    }
}
