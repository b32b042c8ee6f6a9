use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const LEAF_KINDS: [&str; 3] = ["app", "document", "txt"];

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SeedLeaf {
    name: String,
    #[serde(rename = "type")]
    kind: String,
    id: String,
    payload: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SeedDirectory {
    name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    directories: Vec<SeedDirectory>,
    #[serde(default)]
    entries: Vec<SeedLeaf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SeedRoot {
    directories: Vec<SeedDirectory>,
}

fn validate_directories(
    parent: &str,
    directories: &[SeedDirectory],
    leaf_ids: &mut HashSet<String>,
) {
    let mut names = HashSet::new();
    for directory in directories {
        let path = format!("{parent}{}/", directory.name);
        if directory.name.trim().is_empty() || directory.name.contains('/') {
            panic!("invalid directory name `{}` under {parent}", directory.name);
        }
        if !names.insert(directory.name.clone()) {
            panic!("duplicate directory `{path}`");
        }
        if !directory.directories.is_empty() && !directory.entries.is_empty() {
            panic!("directory `{path}` declares both nested directories and entries");
        }
        for leaf in &directory.entries {
            if leaf.name.trim().is_empty() {
                panic!("empty entry name in `{path}`");
            }
            if !LEAF_KINDS.contains(&leaf.kind.as_str()) {
                panic!(
                    "entry `{}` in `{path}` has unknown type `{}` (expected one of {LEAF_KINDS:?})",
                    leaf.name, leaf.kind
                );
            }
            if !leaf_ids.insert(leaf.id.clone()) {
                panic!("duplicate entry id `{}` in `{path}`", leaf.id);
            }
        }
        validate_directories(&path, &directory.directories, leaf_ids);
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let seed_path = crate_root.join("vfs.seed.toml");
    println!("cargo:rerun-if-changed={}", seed_path.display());

    let raw = fs::read_to_string(&seed_path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", seed_path.display()));
    let seed: SeedRoot = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", seed_path.display()));
    validate_directories("~/", &seed.directories, &mut HashSet::new());

    let json = serde_json::to_string_pretty(&seed).expect("serialize vfs seed");
    let generated = format!(
        "/// Build-time generated virtual file system seed JSON.\n\
pub const VFS_SEED_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("vfs_seed_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
