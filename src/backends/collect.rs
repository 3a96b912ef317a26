//! File collection backend
//!
//! Walks each root with walkdir, pruning directories past the depth bound and
//! keeping files whose extension is allowed. Substring filters are applied
//! later by the renderers.

use std::path::Path;

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::core::error::GrabError;
use crate::core::model::{CollectedFiles, FileEntry, FilterSpec, Root, RootGroup};
use crate::core::paths::{depth_of, display_path, extension_matches, make_relative};

/// What the walk should do after visiting an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    Continue,
    SkipSubtree,
}

/// Collect matching files under every root, in root order.
///
/// Any invalid root or unreadable entry aborts the whole collection.
pub fn collect(roots: &[Root], filter: &FilterSpec) -> Result<CollectedFiles, GrabError> {
    let mut collected = CollectedFiles::default();

    for (index, root) in roots.iter().enumerate() {
        check_root(&root.path)?;
        let entries = collect_root(root, index, filter)?;
        debug!(root = %root.label, files = entries.len(), "collected root");
        collected.groups.push(RootGroup {
            root: root.clone(),
            entries,
        });
    }

    Ok(collected)
}

fn check_root(path: &Path) -> Result<(), GrabError> {
    if !path.exists() {
        return Err(GrabError::RootNotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(GrabError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}

fn collect_root(
    root: &Root,
    index: usize,
    filter: &FilterSpec,
) -> Result<Vec<FileEntry>, GrabError> {
    let mut entries = Vec::new();
    let mut walker = WalkDir::new(&root.path).sort_by_file_name().into_iter();

    while let Some(entry) = walker.next() {
        let entry = entry.map_err(|source| GrabError::Traversal {
            root: root.path.clone(),
            source,
        })?;

        // The root itself
        if entry.depth() == 0 {
            continue;
        }

        let Some(relative) = make_relative(entry.path(), &root.path) else {
            continue;
        };

        if visit(&entry, &relative, filter) == Visit::SkipSubtree {
            walker.skip_current_dir();
            continue;
        }

        if is_file(&entry) && keep_file(&entry, &relative, filter) {
            entries.push(FileEntry {
                path: display_path(&root.label, &relative),
                abs: entry.path().to_path_buf(),
                depth: depth_of(&relative),
                relative,
                root: index,
            });
        }
    }

    Ok(entries)
}

/// Directories at depth `d` hold entries at depth `d + 1`; once that is past
/// the bound none of the subtree is yielded.
fn visit(entry: &DirEntry, relative: &str, filter: &FilterSpec) -> Visit {
    if entry.file_type().is_dir() && !filter.depth_allowed(depth_of(relative) + 1) {
        Visit::SkipSubtree
    } else {
        Visit::Continue
    }
}

/// Regular files, and symlinks that resolve to one. Links are never followed
/// as directories.
fn is_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_file() {
        return true;
    }
    file_type.is_symlink() && entry.path().is_file()
}

fn keep_file(entry: &DirEntry, relative: &str, filter: &FilterSpec) -> bool {
    let name = entry.file_name().to_string_lossy();
    filter.depth_allowed(depth_of(relative)) && extension_matches(&name, &filter.extensions)
}
