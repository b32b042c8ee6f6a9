//! Per-window geometry and the pointer gesture machine driving drag, resize and maximize.
//!
//! Every geometry change passes through [`clamp_to_viewport`], so a window box always keeps its
//! minimum size and stays inside the viewport. [`WindowController`] owns one window's geometry
//! and at most one active gesture, keyed by the pointer id that started it.

use platform_host::Viewport;

use crate::model::{PointerPosition, ResizeEdge, WindowRect};

/// Minimum allowed managed window width.
pub const MIN_WINDOW_WIDTH: i32 = 320;
/// Minimum allowed managed window height.
pub const MIN_WINDOW_HEIGHT: i32 = 240;
/// Largest initial window width.
pub const INITIAL_MAX_WIDTH: i32 = 896;
/// Largest initial window height.
pub const INITIAL_MAX_HEIGHT: i32 = 640;
/// Horizontal space left free around a freshly opened window.
pub const INITIAL_MARGIN_X: i32 = 40;
/// Vertical space left free around a freshly opened window.
pub const INITIAL_MARGIN_Y: i32 = 120;
/// Top offset of a freshly opened window.
pub const INITIAL_TOP: i32 = 80;

/// Title-bar descendants that never start a drag.
pub const DRAG_EXCLUDED_SELECTOR: &str =
    "button, [role='button'], a, input, textarea, select";

/// Bounds size to `[minimum, viewport]` and position so the box stays inside the viewport.
///
/// On a viewport smaller than the minimum the minimum wins and the box is pinned to the origin.
pub fn clamp_to_viewport(rect: WindowRect, viewport: Viewport) -> WindowRect {
    let w = rect.w.min(viewport.width).max(MIN_WINDOW_WIDTH);
    let h = rect.h.min(viewport.height).max(MIN_WINDOW_HEIGHT);
    let max_x = (viewport.width - w).max(0);
    let max_y = (viewport.height - h).max(0);
    WindowRect {
        x: rect.x.clamp(0, max_x),
        y: rect.y.clamp(0, max_y),
        w,
        h,
    }
}

/// Initial box: viewport minus margins, capped, centered horizontally at a fixed top offset.
pub fn initial_rect(viewport: Viewport) -> WindowRect {
    let w = (viewport.width - INITIAL_MARGIN_X)
        .max(MIN_WINDOW_WIDTH)
        .min(INITIAL_MAX_WIDTH);
    let h = (viewport.height - INITIAL_MARGIN_Y)
        .max(MIN_WINDOW_HEIGHT)
        .min(INITIAL_MAX_HEIGHT);
    let x = ((viewport.width - w + 1) / 2).max(0);
    clamp_to_viewport(
        WindowRect {
            x,
            y: INITIAL_TOP,
            w,
            h,
        },
        viewport,
    )
}

/// Box a maximized window occupies.
pub fn maximized_rect(viewport: Viewport) -> WindowRect {
    clamp_to_viewport(WindowRect::full(viewport), viewport)
}

/// Applies resize deltas for an edge/corner drag.
///
/// West and north resizes move the origin so the opposite edge stays put, including when the
/// size hits the minimum. The result is not yet viewport-clamped.
pub fn resize_rect(start: WindowRect, edge: ResizeEdge, dx: i32, dy: i32) -> WindowRect {
    let mut rect = start;
    if edge.moves_east() {
        rect.w = (start.w + dx).max(MIN_WINDOW_WIDTH);
    }
    if edge.moves_west() {
        rect.w = (start.w - dx).max(MIN_WINDOW_WIDTH);
        rect.x = start.x + start.w - rect.w;
    }
    if edge.moves_south() {
        rect.h = (start.h + dy).max(MIN_WINDOW_HEIGHT);
    }
    if edge.moves_north() {
        rect.h = (start.h - dy).max(MIN_WINDOW_HEIGHT);
        rect.y = start.y + start.h - rect.h;
    }
    rect
}

/// Window box plus the snapshot taken before maximizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGeometry {
    rect: WindowRect,
    restore: Option<WindowRect>,
}

impl WindowGeometry {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            rect: initial_rect(viewport),
            restore: None,
        }
    }

    /// Geometry at `rect`, clamped into `viewport`.
    pub fn from_rect(rect: WindowRect, viewport: Viewport) -> Self {
        Self {
            rect: clamp_to_viewport(rect, viewport),
            restore: None,
        }
    }

    pub fn rect(&self) -> WindowRect {
        self.rect
    }

    pub fn restore_snapshot(&self) -> Option<WindowRect> {
        self.restore
    }

    pub fn is_maximized(&self, viewport: Viewport) -> bool {
        self.rect == maximized_rect(viewport)
    }

    pub fn set_rect(&mut self, rect: WindowRect, viewport: Viewport) {
        self.rect = clamp_to_viewport(rect, viewport);
    }

    /// Restores the pre-maximize snapshot when maximized, otherwise snapshots and fills the
    /// viewport.
    pub fn toggle_maximize(&mut self, viewport: Viewport) {
        if self.is_maximized(viewport) {
            if let Some(snapshot) = self.restore.take() {
                self.rect = clamp_to_viewport(snapshot, viewport);
                return;
            }
        }
        self.restore = Some(self.rect);
        self.rect = maximized_rect(viewport);
    }

    /// Re-applies the clamp after the viewport changed.
    pub fn reclamp(&mut self, viewport: Viewport) {
        self.rect = clamp_to_viewport(self.rect, viewport);
    }
}

/// Pointer gesture in progress on one window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowGesture {
    #[default]
    Idle,
    Dragging {
        pointer_id: i32,
        origin: PointerPosition,
        start: WindowRect,
    },
    Resizing {
        pointer_id: i32,
        edge: ResizeEdge,
        origin: PointerPosition,
        start: WindowRect,
    },
}

impl WindowGesture {
    pub fn pointer_id(&self) -> Option<i32> {
        match self {
            Self::Idle => None,
            Self::Dragging { pointer_id, .. } | Self::Resizing { pointer_id, .. } => {
                Some(*pointer_id)
            }
        }
    }
}

/// Geometry state machine for a single window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowController {
    geometry: WindowGeometry,
    gesture: WindowGesture,
}

impl WindowController {
    /// Controller at the initial geometry for `viewport`.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            geometry: WindowGeometry::new(viewport),
            gesture: WindowGesture::Idle,
        }
    }

    pub fn with_rect(rect: WindowRect, viewport: Viewport) -> Self {
        Self {
            geometry: WindowGeometry::from_rect(rect, viewport),
            gesture: WindowGesture::Idle,
        }
    }

    pub fn rect(&self) -> WindowRect {
        self.geometry.rect()
    }

    pub fn geometry(&self) -> &WindowGeometry {
        &self.geometry
    }

    pub fn gesture(&self) -> WindowGesture {
        self.gesture
    }

    pub fn is_maximized(&self, viewport: Viewport) -> bool {
        self.geometry.is_maximized(viewport)
    }

    /// Starts a title-bar drag. Ignored while another gesture is active.
    pub fn begin_drag(&mut self, pointer_id: i32, origin: PointerPosition) -> bool {
        if self.gesture != WindowGesture::Idle {
            return false;
        }
        self.gesture = WindowGesture::Dragging {
            pointer_id,
            origin,
            start: self.rect(),
        };
        true
    }

    /// Starts an edge/corner resize. Ignored while another gesture is active.
    pub fn begin_resize(
        &mut self,
        pointer_id: i32,
        edge: ResizeEdge,
        origin: PointerPosition,
    ) -> bool {
        if self.gesture != WindowGesture::Idle {
            return false;
        }
        self.gesture = WindowGesture::Resizing {
            pointer_id,
            edge,
            origin,
            start: self.rect(),
        };
        true
    }

    /// Applies a pointer move. Moves from any pointer other than the gesture's are ignored.
    ///
    /// Returns `true` when the move belonged to the active gesture.
    pub fn pointer_move(
        &mut self,
        pointer_id: i32,
        pointer: PointerPosition,
        viewport: Viewport,
    ) -> bool {
        match self.gesture {
            WindowGesture::Dragging {
                pointer_id: active,
                origin,
                start,
            } if active == pointer_id => {
                let next = start.offset(pointer.x - origin.x, pointer.y - origin.y);
                self.geometry.set_rect(next, viewport);
                true
            }
            WindowGesture::Resizing {
                pointer_id: active,
                edge,
                origin,
                start,
            } if active == pointer_id => {
                let next = resize_rect(start, edge, pointer.x - origin.x, pointer.y - origin.y);
                self.geometry.set_rect(next, viewport);
                true
            }
            _ => false,
        }
    }

    /// Ends the active gesture on pointer up or cancel.
    ///
    /// Returns `true` when `pointer_id` owned the gesture, so the caller releases capture.
    pub fn end_gesture(&mut self, pointer_id: i32) -> bool {
        if self.gesture.pointer_id() != Some(pointer_id) {
            return false;
        }
        self.gesture = WindowGesture::Idle;
        true
    }

    pub fn toggle_maximize(&mut self, viewport: Viewport) {
        self.geometry.toggle_maximize(viewport);
    }

    pub fn viewport_resized(&mut self, viewport: Viewport) {
        self.geometry.reclamp(viewport);
    }
}
