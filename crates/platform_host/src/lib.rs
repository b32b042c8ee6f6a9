//! Typed host-domain contracts and shared models used across the runtime and browser adapters.
//!
//! This crate is the API-first boundary for platform services. It exposes the static virtual
//! file system, viewport dimensions, document fetch/classification contracts, and time helpers,
//! while concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod document;
pub mod external_url;
pub mod fs;
pub mod time;
pub mod viewport;

pub use document::{
    classify_document_response, is_absolute_http_url, looks_like_html, resolve_document_url,
    DocumentContent, DocumentFetchError, DocumentFetchFuture, DocumentFetchService,
    FetchedDocument, MemoryDocumentFetchService, NoopDocumentFetchService, RepositoryRecord,
    LOCAL_DOCUMENT_ROOT,
};
pub use external_url::{ExternalUrlFuture, ExternalUrlService, NoopExternalUrlService};
pub use fs::path::{
    is_home, join_location, location_segments, normalize_location, parent_location,
    DIRECTORY_MARKER, HOME, HOME_LOCATION,
};
pub use fs::seed::load_default_vfs;
pub use fs::types::{LeafKind, Vfs, VfsDirectoryEntry, VfsError, VfsLeaf, VfsNode};
pub use time::{next_launch_timestamp_ms, unix_time_ms_now};
pub use viewport::Viewport;
