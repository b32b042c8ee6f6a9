//! `fetch`-backed document loading for the document viewer.

use platform_host::{
    DocumentFetchError, DocumentFetchFuture, DocumentFetchService, FetchedDocument,
};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser document fetch adapter backed by `window.fetch`.
pub struct WebDocumentFetchService;

impl DocumentFetchService for WebDocumentFetchService {
    fn fetch<'a>(
        &'a self,
        url: &'a str,
    ) -> DocumentFetchFuture<'a, Result<FetchedDocument, DocumentFetchError>> {
        Box::pin(async move { bridge::fetch_document(url).await })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_fetch_reports_network_error() {
        let result = futures::executor::block_on(WebDocumentFetchService.fetch("/documents/a.html"));
        assert!(matches!(result, Err(DocumentFetchError::Network(_))));
    }
}
