//! Explorer navigation state.

use platform_host::{
    is_home, join_location, normalize_location, parent_location, LeafKind, Vfs, VfsError,
    VfsLeaf, VfsNode, HOME_LOCATION,
};
use system_shell_contract::LaunchTarget;

/// Sidebar shortcuts, top to bottom.
pub const SIDEBAR_SHORTCUTS: [SidebarShortcut; 5] = [
    SidebarShortcut::new("Home", HOME_LOCATION),
    SidebarShortcut::new("Documents", "~/Documents/"),
    SidebarShortcut::new("Music", "~/Music/"),
    SidebarShortcut::new("Pictures", "~/Pictures/"),
    SidebarShortcut::new("Videos", "~/Videos/"),
];

/// One sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarShortcut {
    /// Display label.
    pub label: &'static str,
    /// Target location.
    pub path: &'static str,
}

impl SidebarShortcut {
    const fn new(label: &'static str, path: &'static str) -> Self {
        Self { label, path }
    }

    /// Whether the shortcut is highlighted while `current` is shown.
    ///
    /// Home only matches itself; every other shortcut matches its whole subtree.
    pub fn is_active(&self, current: &str) -> bool {
        if is_home(self.path) {
            is_home(current)
        } else {
            current.starts_with(self.path)
        }
    }
}

/// Icon class of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerItemKind {
    /// Directory.
    Folder,
    /// Application bundle.
    App,
    /// Document.
    Document,
    /// Plain text.
    Text,
}

impl ExplorerItemKind {
    /// CSS modifier used for the item icon.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Folder => "explorer-item-folder",
            Self::App => "explorer-item-app",
            Self::Document => "explorer-item-document",
            Self::Text => "explorer-item-text",
        }
    }
}

/// What opening an item does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplorerAction {
    /// Show another directory.
    Navigate(String),
    /// Ask the desktop to open a window.
    Launch(LaunchTarget),
}

/// One entry in the content pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerItem {
    /// Label without the directory marker.
    pub name: String,
    /// Icon class.
    pub kind: ExplorerItemKind,
    /// Open action.
    pub action: ExplorerAction,
}

impl ExplorerItem {
    fn folder(current: &str, name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: ExplorerItemKind::Folder,
            action: ExplorerAction::Navigate(join_location(current, name)),
        }
    }

    fn leaf(leaf: &VfsLeaf) -> Self {
        let (kind, target) = match leaf.kind {
            LeafKind::App => (
                ExplorerItemKind::App,
                LaunchTarget::App {
                    app_id: leaf.payload.clone(),
                },
            ),
            LeafKind::Document => (
                ExplorerItemKind::Document,
                LaunchTarget::Document {
                    id: leaf.id.clone(),
                    title: leaf.name.clone(),
                    source: leaf.payload.clone(),
                },
            ),
            LeafKind::Txt => (
                ExplorerItemKind::Text,
                LaunchTarget::Text {
                    id: leaf.id.clone(),
                    title: leaf.name.clone(),
                    body: leaf.payload.clone(),
                },
            ),
        };
        Self {
            name: leaf.name.clone(),
            kind,
            action: ExplorerAction::Launch(target),
        }
    }
}

/// Current location of one explorer window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerState {
    path: String,
}

impl Default for ExplorerState {
    fn default() -> Self {
        Self {
            path: HOME_LOCATION.to_string(),
        }
    }
}

impl ExplorerState {
    /// Current location, `~/`-rooted with a trailing marker.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Items of the current location. A location that no longer resolves shows nothing.
    pub fn items(&self, vfs: &Vfs) -> Vec<ExplorerItem> {
        match vfs.resolve(&self.path) {
            Ok(node @ VfsNode::Directory(_)) => node
                .directory_names()
                .into_iter()
                .map(|name| ExplorerItem::folder(&self.path, name))
                .collect(),
            Ok(VfsNode::Leaves(leaves)) => leaves.iter().map(ExplorerItem::leaf).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Moves to `path` when it names an existing directory.
    pub fn navigate(&mut self, vfs: &Vfs, path: &str) -> Result<(), VfsError> {
        let path = normalize_location(path)?;
        vfs.resolve(&path)?;
        self.path = path;
        Ok(())
    }

    /// Returns to the home location.
    pub fn go_home(&mut self) {
        self.path = HOME_LOCATION.to_string();
    }

    /// Moves to the parent location. No-op at home.
    pub fn go_back(&mut self) {
        self.path = parent_location(&self.path);
    }

    /// Whether [`Self::go_back`] would move.
    pub fn can_go_back(&self) -> bool {
        !is_home(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use platform_host::load_default_vfs;
    use pretty_assertions::assert_eq;

    use super::*;

    fn names(items: &[ExplorerItem]) -> Vec<&str> {
        items.iter().map(|item| item.name.as_str()).collect()
    }

    #[test]
    fn home_lists_folders_that_navigate() {
        let vfs = load_default_vfs().expect("seed");
        let state = ExplorerState::default();
        let items = state.items(&vfs);
        assert_eq!(
            names(&items),
            vec!["Applications", "Documents", "Pictures", "Music", "Videos"]
        );
        assert_eq!(items[1].kind, ExplorerItemKind::Folder);
        assert_eq!(
            items[1].action,
            ExplorerAction::Navigate("~/Documents/".to_string())
        );
    }

    #[test]
    fn leaf_items_launch_by_kind() {
        let vfs = load_default_vfs().expect("seed");
        let mut state = ExplorerState::default();
        state.navigate(&vfs, "~/Applications").expect("navigate");
        let items = state.items(&vfs);
        assert_eq!(items[1].kind, ExplorerItemKind::App);
        assert_eq!(
            items[1].action,
            ExplorerAction::Launch(LaunchTarget::App {
                app_id: "terminal".to_string()
            })
        );

        state.navigate(&vfs, "~/Documents/").expect("navigate");
        let items = state.items(&vfs);
        assert_eq!(
            items[0].action,
            ExplorerAction::Launch(LaunchTarget::Document {
                id: "aboutme".to_string(),
                title: "aboutMe.html".to_string(),
                source: "aboutme".to_string(),
            })
        );
    }

    #[test]
    fn text_leaves_open_as_text() {
        let vfs = Vfs::from_json(
            r#"{"directories":[{"name":"Notes","entries":[{"name":"todo.txt","type":"txt","id":"todo","payload":"buy milk"}]}]}"#,
        )
        .expect("vfs");
        let mut state = ExplorerState::default();
        state.navigate(&vfs, "~/Notes/").expect("navigate");
        assert_eq!(
            state.items(&vfs)[0].action,
            ExplorerAction::Launch(LaunchTarget::Text {
                id: "todo".to_string(),
                title: "todo.txt".to_string(),
                body: "buy milk".to_string(),
            })
        );
    }

    #[test]
    fn navigate_rejects_missing_paths() {
        let vfs = load_default_vfs().expect("seed");
        let mut state = ExplorerState::default();
        assert!(state.navigate(&vfs, "~/Downloads/").is_err());
        assert!(state.navigate(&vfs, "Documents").is_err());
        assert_eq!(state.path(), "~/");
    }

    #[test]
    fn back_and_home() {
        let vfs = load_default_vfs().expect("seed");
        let mut state = ExplorerState::default();
        assert!(!state.can_go_back());
        state.go_back();
        assert_eq!(state.path(), "~/");

        state.navigate(&vfs, "~/Music/").expect("navigate");
        assert!(state.can_go_back());
        state.go_back();
        assert_eq!(state.path(), "~/");

        state.navigate(&vfs, "~/Videos/").expect("navigate");
        state.go_home();
        assert_eq!(state.path(), "~/");
    }

    #[test]
    fn sidebar_highlights_by_prefix() {
        let active = |path: &str| -> Vec<&str> {
            SIDEBAR_SHORTCUTS
                .iter()
                .filter(|shortcut| shortcut.is_active(path))
                .map(|shortcut| shortcut.label)
                .collect()
        };
        assert_eq!(active("~/"), vec!["Home"]);
        assert_eq!(active("~/Documents/"), vec!["Documents"]);
        assert_eq!(active("~/Music/Live/"), vec!["Music"]);
        assert!(active("~/Applications/").is_empty());
    }
}
