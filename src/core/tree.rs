//! Directory tree built from flat relative paths
//!
//! Children live in a `BTreeMap`, so rendering is always in lexicographic
//! order no matter how the filesystem listed them.

use std::collections::BTreeMap;

/// Indent used by the `tree` format
pub const INDENT: &str = "  ";

/// A node in the tree: either a file leaf or a directory with children
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    File,
    Directory(BTreeMap<String, Node>),
}

impl Node {
    fn directory() -> Self {
        Node::Directory(BTreeMap::new())
    }

    /// Turn this node into a directory (keeping children) and return them
    fn as_children_mut(&mut self) -> &mut BTreeMap<String, Node> {
        if let Node::File = self {
            *self = Node::directory();
        }
        match self {
            Node::Directory(children) => children,
            Node::File => unreachable!("file nodes were converted above"),
        }
    }
}

/// Root of a directory tree (the root itself is rendered by the caller)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryTree {
    children: BTreeMap<String, Node>,
}

impl DirectoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Insert a `/`-separated relative path
    pub fn insert_path(&mut self, relative: &str, is_file: bool) {
        let segments: Vec<&str> = relative.split('/').filter(|s| !s.is_empty()).collect();
        self.insert(&segments, is_file);
    }

    /// Insert a path given as segments.
    ///
    /// Intermediate segments are always directories. The final segment is a
    /// file or a directory per `is_file`, but an existing directory is never
    /// turned back into a file.
    pub fn insert<S: AsRef<str>>(&mut self, segments: &[S], is_file: bool) {
        let Some((last, parents)) = segments.split_last() else {
            return;
        };

        let mut children = &mut self.children;
        for segment in parents {
            children = children
                .entry(segment.as_ref().to_string())
                .or_insert_with(Node::directory)
                .as_children_mut();
        }

        let leaf = children
            .entry(last.as_ref().to_string())
            .or_insert_with(|| if is_file { Node::File } else { Node::directory() });
        if !is_file {
            leaf.as_children_mut();
        }
    }

    /// Render children with one `indent_unit` per nesting level, starting at
    /// one level deep. Every line ends with a newline.
    pub fn render(&self, indent_unit: &str) -> String {
        let mut out = String::new();
        render_level(&self.children, indent_unit, 1, &mut out);
        out
    }
}

fn render_level(
    children: &BTreeMap<String, Node>,
    indent_unit: &str,
    level: usize,
    out: &mut String,
) {
    for (name, node) in children {
        out.push_str(&indent_unit.repeat(level));
        out.push_str(name);
        match node {
            Node::File => out.push('\n'),
            Node::Directory(grandchildren) => {
                out.push_str("/\n");
                render_level(grandchildren, indent_unit, level + 1, out);
            }
        }
    }
}
