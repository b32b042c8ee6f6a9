//! Desktop state: the window registry and the geometry values shared with the window manager.

use desktop_app_contract::{ApplicationId, LaunchPayload};
use platform_host::Viewport;
use serde::{Deserialize, Serialize};

/// Page title shown when no window is in front.
pub const SITE_TITLE: &str = "nygosaki.dev";

/// Window identifier, `<app>-<launch timestamp>`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub String);

impl WindowId {
    /// Builds the id for a window launched at `launched_at_ms`.
    pub fn for_launch(app_id: &ApplicationId, launched_at_ms: u64) -> Self {
        Self(format!("{app_id}-{launched_at_ms}"))
    }

    /// Returns the string form of the id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Window box in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    /// Box covering the whole viewport.
    pub const fn full(viewport: Viewport) -> Self {
        Self {
            x: 0,
            y: 0,
            w: viewport.width,
            h: viewport.height,
        }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Returns `true` when the whole box lies inside `viewport`.
    pub fn fits_in(self, viewport: Viewport) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x + self.w <= viewport.width
            && self.y + self.h <= viewport.height
    }

    /// Inline CSS placing an element at this box.
    pub fn css(self) -> String {
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;",
            self.x, self.y, self.w, self.h
        )
    }
}

/// Edge or corner grabbed by a resize gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    /// Every edge and corner, edges first.
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    pub fn moves_north(self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }

    pub fn moves_south(self) -> bool {
        matches!(self, Self::South | Self::SouthEast | Self::SouthWest)
    }

    pub fn moves_east(self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    pub fn moves_west(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }

    /// Short compass token, `n`, `se`, ...
    pub fn token(self) -> &'static str {
        match self {
            Self::North => "n",
            Self::South => "s",
            Self::East => "e",
            Self::West => "w",
            Self::NorthEast => "ne",
            Self::NorthWest => "nw",
            Self::SouthEast => "se",
            Self::SouthWest => "sw",
        }
    }
}

/// One open window in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    pub id: WindowId,
    pub app_id: ApplicationId,
    pub title: String,
    pub minimized: bool,
    pub payload: LaunchPayload,
}

/// Taskbar indicator state for an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppActivity {
    /// No window is open.
    Inactive,
    /// Every window of the app is minimized.
    Minimized,
    /// At least one window is visible.
    Active,
}

impl AppActivity {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Inactive => "inactive",
            Self::Minimized => "minimized",
            Self::Active => "active",
        }
    }
}

/// Desktop window registry. The last record is the front window.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DesktopState {
    pub windows: Vec<WindowRecord>,
}

impl DesktopState {
    pub fn window_for_app(&self, app_id: &ApplicationId) -> Option<&WindowRecord> {
        self.windows.iter().find(|window| &window.app_id == app_id)
    }

    pub fn window_index(&self, window_id: &WindowId) -> Option<usize> {
        self.windows.iter().position(|window| &window.id == window_id)
    }

    /// Front-most window that is not minimized.
    pub fn front_window(&self) -> Option<&WindowRecord> {
        self.windows.iter().rev().find(|window| !window.minimized)
    }

    pub fn app_activity(&self, app_id: &ApplicationId) -> AppActivity {
        let mut windows = self
            .windows
            .iter()
            .filter(|window| &window.app_id == app_id)
            .peekable();
        if windows.peek().is_none() {
            AppActivity::Inactive
        } else if windows.all(|window| window.minimized) {
            AppActivity::Minimized
        } else {
            AppActivity::Active
        }
    }

    /// Page title for the current front window.
    pub fn page_title(&self) -> String {
        match self.front_window() {
            Some(window) => format!("{} | {SITE_TITLE}", window.title),
            None => SITE_TITLE.to_string(),
        }
    }

    /// Window ids in launch order, independent of stacking.
    pub fn window_ids_by_launch(&self) -> Vec<WindowId> {
        let mut ids = self
            .windows
            .iter()
            .map(|window| window.id.clone())
            .collect::<Vec<_>>();
        ids.sort();
        ids
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn record(app: &str, minimized: bool) -> WindowRecord {
        let app_id = ApplicationId::trusted(app);
        WindowRecord {
            id: WindowId::for_launch(&app_id, 1),
            title: app.to_string(),
            app_id,
            minimized,
            payload: LaunchPayload::None,
        }
    }

    #[test]
    fn activity_follows_minimized_flags() {
        let state = DesktopState {
            windows: vec![record("terminal", false), record("explorer", true)],
        };
        assert_eq!(
            state.app_activity(&ApplicationId::trusted("terminal")),
            AppActivity::Active
        );
        assert_eq!(
            state.app_activity(&ApplicationId::trusted("explorer")),
            AppActivity::Minimized
        );
        assert_eq!(
            state.app_activity(&ApplicationId::trusted("firefox")),
            AppActivity::Inactive
        );
    }

    #[test]
    fn page_title_uses_front_visible_window() {
        let mut state = DesktopState {
            windows: vec![record("terminal", false), record("explorer", true)],
        };
        assert_eq!(state.page_title(), "terminal | nygosaki.dev");
        state.windows[0].minimized = true;
        assert_eq!(state.page_title(), SITE_TITLE);
    }

    #[test]
    fn window_id_embeds_app_and_timestamp() {
        let id = WindowId::for_launch(&ApplicationId::trusted("terminal"), 1_700_000);
        assert_eq!(id.as_str(), "terminal-1700000");
    }

    #[test]
    fn resize_edges_cover_both_axes_once() {
        for edge in ResizeEdge::ALL {
            assert!(!(edge.moves_east() && edge.moves_west()));
            assert!(!(edge.moves_north() && edge.moves_south()));
        }
        assert_eq!(ResizeEdge::NorthWest.token(), "nw");
    }
}
