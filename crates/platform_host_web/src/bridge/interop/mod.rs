//! Shared transport interop for browser bridge calls.
//!
//! This module routes calls to target-specific implementations while preserving a uniform API
//! for the bridge.

use platform_host::{DocumentFetchError, FetchedDocument, Viewport};

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub async fn fetch_document(url: &str) -> Result<FetchedDocument, DocumentFetchError> {
    imp::fetch_document(url).await
}

pub async fn open_external_url(url: &str) -> Result<(), String> {
    imp::open_external_url(url).await
}

pub fn viewport() -> Option<Viewport> {
    imp::viewport()
}

pub fn set_body_text_selection(enabled: bool) -> Result<(), String> {
    imp::set_body_text_selection(enabled)
}

pub fn set_document_title(title: &str) -> Result<(), String> {
    imp::set_document_title(title)
}
