//! Virtual file system node types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::path::{location_segments, DIRECTORY_MARKER};

/// Kind of a file-like VFS entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeafKind {
    /// Launchable application; `payload` is the application id.
    App,
    /// Document opened in the document viewer; `payload` is a document reference or URL.
    Document,
    /// Plain text; `payload` is the literal text.
    Txt,
}

impl LeafKind {
    /// Lowercase label used in terminal messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::App => "application",
            Self::Document => "document",
            Self::Txt => "text",
        }
    }
}

/// File-like VFS entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VfsLeaf {
    /// Display name, for example `aboutMe.html`.
    pub name: String,
    /// Entry kind.
    #[serde(rename = "type")]
    pub kind: LeafKind,
    /// Token correlating the entry with a launchable action.
    pub id: String,
    /// Kind-dependent opaque payload.
    pub payload: String,
}

/// Named child of a directory node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VfsDirectoryEntry {
    /// Directory name without the trailing marker.
    pub name: String,
    /// Child node.
    pub node: VfsNode,
}

/// A VFS node: either a directory of named children or an ordered sequence of leaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VfsNode {
    /// Directory of named child nodes.
    Directory(Vec<VfsDirectoryEntry>),
    /// Ordered leaf sequence.
    Leaves(Vec<VfsLeaf>),
}

impl VfsNode {
    /// Returns the child directory named `name`. Accepts the name with or without the trailing
    /// directory marker.
    pub fn child(&self, name: &str) -> Option<&VfsNode> {
        let name = name.strip_suffix(DIRECTORY_MARKER).unwrap_or(name);
        match self {
            Self::Directory(entries) => entries
                .iter()
                .find(|entry| entry.name == name)
                .map(|entry| &entry.node),
            Self::Leaves(_) => None,
        }
    }

    /// Child directory names in configured order, without trailing markers.
    pub fn directory_names(&self) -> Vec<&str> {
        match self {
            Self::Directory(entries) => entries.iter().map(|entry| entry.name.as_str()).collect(),
            Self::Leaves(_) => Vec::new(),
        }
    }

    /// Leaf entries in configured order. Empty for directory nodes.
    pub fn leaves(&self) -> &[VfsLeaf] {
        match self {
            Self::Directory(_) => &[],
            Self::Leaves(leaves) => leaves,
        }
    }

    /// Finds a leaf by exact display name.
    pub fn find_leaf(&self, name: &str) -> Option<&VfsLeaf> {
        self.leaves().iter().find(|leaf| leaf.name == name)
    }

    /// Display listing: directory names with their trailing marker, or leaf names.
    pub fn list(&self) -> Vec<String> {
        match self {
            Self::Directory(entries) => entries
                .iter()
                .map(|entry| format!("{}{DIRECTORY_MARKER}", entry.name))
                .collect(),
            Self::Leaves(leaves) => leaves.iter().map(|leaf| leaf.name.clone()).collect(),
        }
    }
}

/// VFS lookup and loading failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VfsError {
    /// A path segment does not name an existing directory.
    #[error("no such directory: {path}")]
    NotFound {
        /// Path as requested.
        path: String,
    },
    /// A path walks through a leaf sequence.
    #[error("not a directory: {path}")]
    NotADirectory {
        /// Path as requested.
        path: String,
    },
    /// Path is not rooted at the home symbol.
    #[error("invalid path: {path}")]
    InvalidPath {
        /// Path as requested.
        path: String,
    },
    /// Seed data could not be decoded.
    #[error("invalid vfs seed: {0}")]
    Seed(String),
}

/// Immutable virtual file system rooted at `~/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vfs {
    root: VfsNode,
}

impl Default for Vfs {
    fn default() -> Self {
        Self::new(VfsNode::Directory(Vec::new()))
    }
}

impl Vfs {
    /// Wraps a root node.
    pub fn new(root: VfsNode) -> Self {
        Self { root }
    }

    /// Root node (`~/`).
    pub fn root(&self) -> &VfsNode {
        &self.root
    }

    /// Resolves a `~`-rooted location to its node.
    ///
    /// Walks segments left to right; never mutates the tree.
    pub fn resolve(&self, path: &str) -> Result<&VfsNode, VfsError> {
        let segments = location_segments(path)?;
        segments.iter().try_fold(&self.root, |node, segment| {
            if matches!(node, VfsNode::Leaves(_)) {
                return Err(VfsError::NotADirectory {
                    path: path.to_string(),
                });
            }
            node.child(segment).ok_or_else(|| VfsError::NotFound {
                path: path.to_string(),
            })
        })
    }

    /// Display listing of the node at `path`.
    pub fn list(&self, path: &str) -> Result<Vec<String>, VfsError> {
        self.resolve(path).map(VfsNode::list)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample() -> Vfs {
        Vfs::new(VfsNode::Directory(vec![
            VfsDirectoryEntry {
                name: "Documents".to_string(),
                node: VfsNode::Leaves(vec![VfsLeaf {
                    name: "notes.txt".to_string(),
                    kind: LeafKind::Txt,
                    id: "notes".to_string(),
                    payload: "hello".to_string(),
                }]),
            },
            VfsDirectoryEntry {
                name: "Music".to_string(),
                node: VfsNode::Leaves(Vec::new()),
            },
        ]))
    }

    #[test]
    fn resolve_walks_directories_and_lists_in_order() {
        let vfs = sample();
        assert_eq!(
            vfs.list("~/").unwrap(),
            vec!["Documents/".to_string(), "Music/".to_string()]
        );
        assert_eq!(
            vfs.list("~/Documents/").unwrap(),
            vec!["notes.txt".to_string()]
        );
        assert_eq!(vfs.list("~/Music").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn resolve_reports_missing_and_leaf_segments() {
        let vfs = sample();
        assert_eq!(
            vfs.resolve("~/Nope/"),
            Err(VfsError::NotFound {
                path: "~/Nope/".to_string()
            })
        );
        assert_eq!(
            vfs.resolve("~/Documents/notes.txt/"),
            Err(VfsError::NotADirectory {
                path: "~/Documents/notes.txt/".to_string()
            })
        );
        assert!(matches!(
            vfs.resolve("/Documents"),
            Err(VfsError::InvalidPath { .. })
        ));
    }

    #[test]
    fn child_accepts_trailing_marker() {
        let vfs = sample();
        assert!(vfs.root().child("Documents/").is_some());
        assert!(vfs.root().child("Documents").is_some());
        assert!(vfs.root().child("documents").is_none());
    }

    #[test]
    fn leaf_kind_deserializes_lowercase_and_rejects_unknown() {
        let leaf: VfsLeaf = serde_json::from_str(
            r#"{"name":"a.app","type":"app","id":"a","payload":"a"}"#,
        )
        .unwrap();
        assert_eq!(leaf.kind, LeafKind::App);
        assert!(serde_json::from_str::<VfsLeaf>(
            r#"{"name":"a.bin","type":"binary","id":"a","payload":"a"}"#
        )
        .is_err());
    }
}
