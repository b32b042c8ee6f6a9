//! Completion candidate sets and prefix helpers.

use platform_host::{Vfs, VfsNode, DIRECTORY_MARKER};

use crate::ArgumentCompletion;

/// Parent-directory candidate offered by `cd`.
pub const PARENT_DIRECTORY: &str = "..";

/// Unfiltered argument candidates for `source` at `cwd`. Unresolvable locations yield none.
pub fn argument_candidates(vfs: &Vfs, cwd: &str, source: ArgumentCompletion) -> Vec<String> {
    let Ok(node) = vfs.resolve(cwd) else {
        return Vec::new();
    };
    match source {
        ArgumentCompletion::Directories => std::iter::once(PARENT_DIRECTORY.to_string())
            .chain(
                node.directory_names()
                    .into_iter()
                    .map(|name| format!("{name}{DIRECTORY_MARKER}")),
            )
            .collect(),
        ArgumentCompletion::Leaves => node.leaves().iter().map(|leaf| leaf.name.clone()).collect(),
        ArgumentCompletion::Entries => VfsNode::list(node),
    }
}

/// Keeps candidates starting with `prefix`, ignoring ASCII case. Order is preserved.
pub fn filter_candidates(candidates: Vec<String>, prefix: &str) -> Vec<String> {
    let prefix = prefix.to_lowercase();
    candidates
        .into_iter()
        .filter(|candidate| candidate.to_lowercase().starts_with(&prefix))
        .collect()
}

/// Longest prefix shared by every candidate, compared case-insensitively and spelled as in the
/// first candidate.
pub fn longest_common_prefix(candidates: &[String]) -> String {
    let Some((first, rest)) = candidates.split_first() else {
        return String::new();
    };
    let mut len = first.chars().count();
    for other in rest {
        len = first
            .chars()
            .zip(other.chars())
            .take(len)
            .take_while(|(a, b)| a.to_lowercase().eq(b.to_lowercase()))
            .count();
    }
    first.chars().take(len).collect()
}
