//! Rubber-band selection on the desktop background.
//!
//! The overlay tracks a single pointer from pointer-down to pointer-up. Page-wide text selection
//! is suppressed while a gesture runs; the overlay reports that as [`SelectionEffect`] values for
//! the host to apply instead of touching the page itself.

use crate::model::PointerPosition;

/// Elements that never start a selection gesture.
pub const SELECTION_BLOCKING_SELECTOR: &str = "[data-desktop-block-select='true']";

/// Page-level side effect requested by the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEffect {
    SuppressTextSelection,
    RestoreTextSelection,
}

/// Axis-aligned rectangle spanning the gesture's start and current points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl SelectionRect {
    pub fn spanning(a: PointerPosition, b: PointerPosition) -> Self {
        Self {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    Selecting {
        pointer_id: i32,
        start: PointerPosition,
        current: PointerPosition,
    },
}

/// Selection gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionOverlay {
    state: SelectionState,
}

impl SelectionOverlay {
    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn is_selecting(&self) -> bool {
        matches!(self.state, SelectionState::Selecting { .. })
    }

    /// Starts a gesture for a primary-button press on unblocked background.
    ///
    /// Presses while a gesture is running are ignored, whatever their pointer id.
    pub fn pointer_down(
        &mut self,
        pointer_id: i32,
        primary_button: bool,
        blocked: bool,
        at: PointerPosition,
    ) -> Option<SelectionEffect> {
        if !primary_button || blocked || self.is_selecting() {
            return None;
        }
        self.state = SelectionState::Selecting {
            pointer_id,
            start: at,
            current: at,
        };
        Some(SelectionEffect::SuppressTextSelection)
    }

    /// Tracks the gesture's pointer. Returns `true` when the rectangle changed.
    pub fn pointer_move(&mut self, pointer_id: i32, at: PointerPosition) -> bool {
        match &mut self.state {
            SelectionState::Selecting {
                pointer_id: active,
                current,
                ..
            } if *active == pointer_id && *current != at => {
                *current = at;
                true
            }
            _ => false,
        }
    }

    /// Ends the gesture on pointer up or cancel from the gesture's pointer.
    pub fn pointer_up(&mut self, pointer_id: i32) -> Option<SelectionEffect> {
        match self.state {
            SelectionState::Selecting {
                pointer_id: active, ..
            } if active == pointer_id => self.cancel(),
            _ => None,
        }
    }

    /// Ends any running gesture (Escape).
    pub fn cancel(&mut self) -> Option<SelectionEffect> {
        if !self.is_selecting() {
            return None;
        }
        self.state = SelectionState::Idle;
        Some(SelectionEffect::RestoreTextSelection)
    }

    pub fn pointer_id(&self) -> Option<i32> {
        match self.state {
            SelectionState::Selecting { pointer_id, .. } => Some(pointer_id),
            SelectionState::Idle => None,
        }
    }

    pub fn rect(&self) -> Option<SelectionRect> {
        match self.state {
            SelectionState::Selecting { start, current, .. } => {
                Some(SelectionRect::spanning(start, current))
            }
            SelectionState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn at(x: i32, y: i32) -> PointerPosition {
        PointerPosition::new(x, y)
    }

    #[test]
    fn gesture_spans_start_to_current_in_any_direction() {
        let mut overlay = SelectionOverlay::default();
        assert_eq!(
            overlay.pointer_down(1, true, false, at(200, 150)),
            Some(SelectionEffect::SuppressTextSelection)
        );
        assert!(overlay.pointer_move(1, at(120, 300)));
        assert_eq!(
            overlay.rect(),
            Some(SelectionRect {
                left: 120,
                top: 150,
                width: 80,
                height: 150,
            })
        );
        assert_eq!(
            overlay.pointer_up(1),
            Some(SelectionEffect::RestoreTextSelection)
        );
        assert_eq!(overlay.rect(), None);
    }

    #[test]
    fn blocked_targets_and_secondary_buttons_do_not_start() {
        let mut overlay = SelectionOverlay::default();
        assert_eq!(overlay.pointer_down(1, true, true, at(0, 0)), None);
        assert_eq!(overlay.pointer_down(1, false, false, at(0, 0)), None);
        assert!(!overlay.is_selecting());
    }

    #[test]
    fn only_one_pointer_owns_the_gesture() {
        let mut overlay = SelectionOverlay::default();
        overlay.pointer_down(1, true, false, at(10, 10));
        assert_eq!(overlay.pointer_down(2, true, false, at(50, 50)), None);
        assert!(!overlay.pointer_move(2, at(90, 90)));
        assert_eq!(overlay.pointer_up(2), None);
        assert_eq!(overlay.pointer_id(), Some(1));
        assert_eq!(
            overlay.rect(),
            Some(SelectionRect {
                left: 10,
                top: 10,
                width: 0,
                height: 0,
            })
        );
    }

    #[test]
    fn escape_cancels_running_gesture_once() {
        let mut overlay = SelectionOverlay::default();
        assert_eq!(overlay.cancel(), None);
        overlay.pointer_down(4, true, false, at(10, 10));
        assert_eq!(overlay.cancel(), Some(SelectionEffect::RestoreTextSelection));
        assert_eq!(overlay.cancel(), None);
        assert_eq!(overlay.pointer_up(4), None);
    }
}
