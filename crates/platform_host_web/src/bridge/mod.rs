//! Browser capability bridge for `platform_host_web` service adapters.
//!
//! Every call is routed through `interop`, which selects the wasm implementation or the
//! non-wasm fallback at compile time.

mod interop;

use platform_host::{DocumentFetchError, FetchedDocument, Viewport};

pub async fn fetch_document(url: &str) -> Result<FetchedDocument, DocumentFetchError> {
    interop::fetch_document(url).await
}

pub async fn open_external_url(url: &str) -> Result<(), String> {
    interop::open_external_url(url).await
}

pub fn viewport() -> Option<Viewport> {
    interop::viewport()
}

pub fn set_body_text_selection(enabled: bool) -> Result<(), String> {
    interop::set_body_text_selection(enabled)
}

pub fn set_document_title(title: &str) -> Result<(), String> {
    interop::set_document_title(title)
}
