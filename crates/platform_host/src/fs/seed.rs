//! Build-time VFS seed loading.

use serde::Deserialize;

use super::types::{Vfs, VfsDirectoryEntry, VfsError, VfsLeaf, VfsNode};

include!(concat!(env!("OUT_DIR"), "/vfs_seed_generated.rs"));

#[derive(Debug, Deserialize)]
struct SeedDirectory {
    name: String,
    #[serde(default)]
    directories: Vec<SeedDirectory>,
    #[serde(default)]
    entries: Vec<VfsLeaf>,
}

#[derive(Debug, Deserialize)]
struct SeedRoot {
    directories: Vec<SeedDirectory>,
}

fn into_entry(directory: SeedDirectory) -> Result<VfsDirectoryEntry, VfsError> {
    let node = match (directory.directories.is_empty(), directory.entries.is_empty()) {
        (true, _) => VfsNode::Leaves(directory.entries),
        (false, true) => VfsNode::Directory(
            directory
                .directories
                .into_iter()
                .map(into_entry)
                .collect::<Result<_, _>>()?,
        ),
        (false, false) => {
            return Err(VfsError::Seed(format!(
                "directory `{}` has both directories and entries",
                directory.name
            )))
        }
    };
    Ok(VfsDirectoryEntry {
        name: directory.name,
        node,
    })
}

impl Vfs {
    /// Decodes seed JSON of the shape `{ "directories": [{ "name", "directories"?, "entries"? }] }`.
    pub fn from_json(raw: &str) -> Result<Self, VfsError> {
        let seed: SeedRoot =
            serde_json::from_str(raw).map_err(|err| VfsError::Seed(err.to_string()))?;
        let entries = seed
            .directories
            .into_iter()
            .map(into_entry)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(VfsNode::Directory(entries)))
    }
}

/// Loads the VFS compiled from `vfs.seed.toml`.
pub fn load_default_vfs() -> Result<Vfs, VfsError> {
    Vfs::from_json(VFS_SEED_JSON)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::fs::types::LeafKind;

    #[test]
    fn default_seed_has_configured_top_level_order() {
        let vfs = load_default_vfs().expect("seed");
        assert_eq!(
            vfs.list("~/").expect("home"),
            vec![
                "Applications/".to_string(),
                "Documents/".to_string(),
                "Pictures/".to_string(),
                "Music/".to_string(),
                "Videos/".to_string(),
            ]
        );
    }

    #[test]
    fn default_seed_documents_are_document_leaves() {
        let vfs = load_default_vfs().expect("seed");
        let documents = vfs.resolve("~/Documents/").expect("documents");
        let leaf = documents.find_leaf("aboutMe.html").expect("about me");
        assert_eq!(leaf.kind, LeafKind::Document);
        assert_eq!(leaf.payload, "aboutme");
        assert!(vfs.resolve("~/Pictures/").expect("pictures").leaves().is_empty());
    }

    #[test]
    fn nested_directories_decode() {
        let vfs = Vfs::from_json(
            r#"{"directories":[{"name":"Music","directories":[{"name":"Live","entries":[
                {"name":"set.txt","type":"txt","id":"set","payload":"encore"}]}]}]}"#,
        )
        .expect("nested");
        assert_eq!(
            vfs.list("~/Music/Live/").expect("live"),
            vec!["set.txt".to_string()]
        );
        assert_eq!(vfs.list("~/Music/").expect("music"), vec!["Live/".to_string()]);
    }

    #[test]
    fn malformed_seed_is_reported() {
        assert!(matches!(
            Vfs::from_json(r#"{"directories":[{"name":"X","entries":[{"name":"a","type":"exe","id":"a","payload":""}]}]}"#),
            Err(VfsError::Seed(_))
        ));
        assert!(matches!(
            Vfs::from_json(
                r#"{"directories":[{"name":"X","directories":[{"name":"Y"}],"entries":[{"name":"a","type":"txt","id":"a","payload":""}]}]}"#
            ),
            Err(VfsError::Seed(_))
        ));
    }
}
