//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer for document fetching, external
//! URL opening, and the page-level effects applied by the desktop runtime (viewport size, body
//! text selection, document title). Native builds get inert fallbacks so dependents stay
//! testable off the browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
mod bridge;
pub mod document_fetch;
pub mod external_url;
pub mod page;

pub use adapters::{
    document_fetch_service, external_url_service, host_strategy_name, selected_host_strategy,
    DocumentFetchServiceAdapter, ExternalUrlServiceAdapter, HostStrategy,
};
pub use document_fetch::WebDocumentFetchService;
pub use external_url::WebExternalUrlService;
pub use page::{current_viewport, set_body_text_selection, set_document_title};
