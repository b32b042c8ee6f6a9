use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppManifest {
    schema_version: u32,
    app_id: String,
    display_name: String,
    window_title: String,
    quick_launch: bool,
    quick_launch_order: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    embed_url: Option<String>,
}

fn app_manifest_paths(root: &Path) -> Vec<PathBuf> {
    let dir = root.join("manifests");
    println!("cargo:rerun-if-changed={}", dir.display());
    let mut paths = fs::read_dir(&dir)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", dir.display()))
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
        .collect::<Vec<_>>();
    paths.sort();
    paths
}

fn validate(path: &Path, manifest: &AppManifest) {
    if manifest.schema_version != 1 {
        panic!(
            "manifest schema mismatch in {}: expected 1 found {}",
            path.display(),
            manifest.schema_version
        );
    }
    let valid_id = manifest
        .app_id
        .bytes()
        .next()
        .is_some_and(|b| b.is_ascii_lowercase())
        && manifest
            .app_id
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-');
    if !valid_id {
        panic!(
            "invalid app_id `{}` in {}",
            manifest.app_id,
            path.display()
        );
    }
    if manifest.display_name.trim().is_empty() || manifest.window_title.trim().is_empty() {
        panic!("empty display_name or window_title in {}", path.display());
    }
    if let Some(url) = &manifest.embed_url {
        if !url.starts_with("https://") {
            panic!("embed_url must be https in {}", path.display());
        }
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let mut manifests = Vec::<AppManifest>::new();
    let mut seen = BTreeSet::new();

    for path in app_manifest_paths(&crate_root) {
        println!("cargo:rerun-if-changed={}", path.display());
        let raw = fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
        let manifest: AppManifest = toml::from_str(&raw)
            .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
        validate(&path, &manifest);
        if !seen.insert(manifest.app_id.clone()) {
            panic!("duplicate app_id `{}` in {}", manifest.app_id, path.display());
        }
        manifests.push(manifest);
    }

    manifests.sort_by(|a, b| {
        (!a.quick_launch, a.quick_launch_order, &a.app_id).cmp(&(
            !b.quick_launch,
            b.quick_launch_order,
            &b.app_id,
        ))
    });
    let json = serde_json::to_string_pretty(&manifests).expect("serialize app manifest catalog");
    let generated = format!(
        "/// Build-time generated app manifest catalog JSON.\n\
pub const APP_MANIFEST_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("app_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
