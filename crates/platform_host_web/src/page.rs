//! Synchronous page-level browser effects: viewport size, body text selection, document title.
//!
//! On non-wasm targets these fall back to [`Viewport::default`] and no-ops.

use platform_host::Viewport;

use crate::bridge;

/// Current inner viewport size, or [`Viewport::default`] when no browser window is available.
pub fn current_viewport() -> Viewport {
    bridge::viewport().unwrap_or_default()
}

/// Enables or suppresses text selection on the page body.
///
/// # Errors
///
/// Returns an error when the body style cannot be updated.
pub fn set_body_text_selection(enabled: bool) -> Result<(), String> {
    bridge::set_body_text_selection(enabled)
}

/// Sets `document.title`.
///
/// # Errors
///
/// Returns an error when no document is available.
pub fn set_document_title(title: &str) -> Result<(), String> {
    bridge::set_document_title(title)
}
