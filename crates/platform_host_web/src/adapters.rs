use platform_host::{
    DocumentFetchError, DocumentFetchFuture, DocumentFetchService, ExternalUrlFuture,
    ExternalUrlService, FetchedDocument, NoopDocumentFetchService, NoopExternalUrlService,
};

use crate::{WebDocumentFetchService, WebExternalUrlService};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected host strategy for `platform_host_web` adapters.
pub enum HostStrategy {
    /// Browser-backed adapters.
    Browser,
    /// Inert adapters for native builds and tests.
    Headless,
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(target_arch = "wasm32")]
    {
        HostStrategy::Browser
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        HostStrategy::Headless
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    match selected_host_strategy() {
        HostStrategy::Browser => "browser",
        HostStrategy::Headless => "headless",
    }
}

/// Adapter enum that erases the concrete document fetch backend behind
/// [`DocumentFetchService`].
#[derive(Debug, Clone, Copy)]
pub enum DocumentFetchServiceAdapter {
    /// Browser `fetch`.
    Browser(WebDocumentFetchService),
    /// Always-failing fallback.
    Headless(NoopDocumentFetchService),
}

impl DocumentFetchService for DocumentFetchServiceAdapter {
    fn fetch<'a>(
        &'a self,
        url: &'a str,
    ) -> DocumentFetchFuture<'a, Result<FetchedDocument, DocumentFetchError>> {
        match self {
            Self::Browser(service) => service.fetch(url),
            Self::Headless(service) => service.fetch(url),
        }
    }
}

/// Adapter enum that erases the concrete external URL backend behind [`ExternalUrlService`].
#[derive(Debug, Clone, Copy)]
pub enum ExternalUrlServiceAdapter {
    /// Browser-backed external URL opening.
    Browser(WebExternalUrlService),
    /// No-op fallback.
    Headless(NoopExternalUrlService),
}

impl ExternalUrlService for ExternalUrlServiceAdapter {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(service) => service.open_url(url),
            Self::Headless(service) => service.open_url(url),
        }
    }
}

/// Builds the document fetch adapter for the selected host strategy.
pub fn document_fetch_service() -> DocumentFetchServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => DocumentFetchServiceAdapter::Browser(WebDocumentFetchService),
        HostStrategy::Headless => DocumentFetchServiceAdapter::Headless(NoopDocumentFetchService),
    }
}

/// Builds the external URL adapter for the selected host strategy.
pub fn external_url_service() -> ExternalUrlServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => ExternalUrlServiceAdapter::Browser(WebExternalUrlService),
        HostStrategy::Headless => ExternalUrlServiceAdapter::Headless(NoopExternalUrlService),
    }
}
