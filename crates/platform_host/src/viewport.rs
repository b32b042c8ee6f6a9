//! Browser viewport dimensions shared between the window controller and host adapters.

use serde::{Deserialize, Serialize};

/// Inner size of the browser viewport in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Viewport {
    /// Inner width.
    pub width: i32,
    /// Inner height.
    pub height: i32,
}

impl Viewport {
    /// Builds a viewport, flooring negative dimensions at zero.
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width: if width < 0 { 0 } else { width },
            height: if height < 0 { 0 } else { height },
        }
    }
}

impl Default for Viewport {
    /// Fallback used when no browser window is available.
    fn default() -> Self {
        Self::new(1280, 800)
    }
}
