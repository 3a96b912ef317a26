//! Path utilities
//!
//! Normalizes paths to use '/' as separator, expands `~`, and implements the
//! extension and substring filters shared by the collector and renderers.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::core::error::GrabError;

/// Normalize a path to use '/' as separator (for cross-platform consistency).
///
/// Only Windows separators are rewritten; on Unix a `\\` is part of the name.
pub fn normalize_path(path: &Path) -> String {
    let text = path.to_string_lossy();
    if cfg!(windows) {
        text.replace('\\', "/")
    } else {
        text.into_owned()
    }
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Replace a leading `~` with the user's home directory.
pub fn expand_home(path: &Path) -> Result<PathBuf, GrabError> {
    expand_home_with(path, dirs::home_dir())
}

fn expand_home_with(path: &Path, home: Option<PathBuf>) -> Result<PathBuf, GrabError> {
    match path.strip_prefix("~") {
        Ok(rest) => {
            let home = home.ok_or(GrabError::HomeResolution)?;
            if rest.as_os_str().is_empty() {
                Ok(home)
            } else {
                Ok(home.join(rest))
            }
        }
        Err(_) => Ok(path.to_path_buf()),
    }
}

/// Label used for a root in headers and display paths.
///
/// Leading `./` components and trailing slashes are dropped, so `./src/`
/// becomes `src`; the current directory stays `.`.
pub fn root_label(root: &Path) -> String {
    let normalized = normalize_path(root);
    if normalized.is_empty() {
        return ".".to_string();
    }
    if normalized.chars().all(|c| c == '/') {
        return "/".to_string();
    }

    let mut label = normalized.trim_end_matches('/');
    while let Some(rest) = label.strip_prefix("./") {
        label = rest.trim_start_matches('/');
    }
    if label.is_empty() {
        ".".to_string()
    } else {
        label.to_string()
    }
}

/// Join a root label and a root-relative path into the path shown to users.
pub fn display_path(root_label: &str, relative: &str) -> String {
    match root_label {
        "." => relative.to_string(),
        "/" => format!("/{}", relative),
        label => format!("{}/{}", label, relative),
    }
}

/// Number of separators in a root-relative path (0 = directly in the root)
pub fn depth_of(relative: &str) -> usize {
    relative.matches('/').count()
}

/// Normalize a user-supplied extension: one leading dot stripped, lowercased.
///
/// Only single suffixes are accepted (`ts`, not `d.ts`), since matching looks
/// at the final suffix of a file name.
pub fn normalize_extension(ext: &str) -> Result<String, GrabError> {
    let trimmed = ext.trim();
    let bare = trimmed.strip_prefix('.').unwrap_or(trimmed);

    let invalid = bare.is_empty()
        || bare.contains(['/', '\\', '.'])
        || bare.chars().any(char::is_whitespace);
    if invalid {
        return Err(GrabError::InvalidExtension(ext.to_string()));
    }

    Ok(bare.to_lowercase())
}

/// Check whether a file name carries one of the allowed extensions.
///
/// An empty set allows everything. Comparison is case-insensitive and
/// ignores a leading dot on either side. Dotfiles such as `.gitignore` have
/// no extension.
pub fn extension_matches(filename: &str, extensions: &BTreeSet<String>) -> bool {
    if extensions.is_empty() {
        return true;
    }

    let ext = match Path::new(filename).extension() {
        Some(ext) => ext.to_string_lossy().to_lowercase(),
        None => return false,
    };

    extensions
        .iter()
        .any(|allowed| allowed.trim_start_matches('.').to_lowercase() == ext)
}

/// Check whether any substring occurs in the path or in the content.
///
/// Both comparisons are case-insensitive. An empty substring list matches
/// everything.
pub fn substring_matches(substrings: &[String], path: &str, content: Option<&str>) -> bool {
    if substrings.is_empty() {
        return true;
    }

    let path_lower = path.to_lowercase();
    let content_lower = content.map(str::to_lowercase);

    substrings.iter().any(|sub| {
        let sub_lower = sub.to_lowercase();
        path_lower.contains(&sub_lower)
            || content_lower
                .as_deref()
                .is_some_and(|c| c.contains(&sub_lower))
    })
}
