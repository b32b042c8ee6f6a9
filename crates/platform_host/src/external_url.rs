//! External URL host-service contracts.

use std::{future::Future, pin::Pin};

/// Object-safe boxed future used by [`ExternalUrlService`].
pub type ExternalUrlFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for opening links (for example the source repository) in a new browser tab.
pub trait ExternalUrlService {
    /// Opens a URL outside the desktop surface.
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op external URL service for targets without a browser.
pub struct NoopExternalUrlService;

impl ExternalUrlService for NoopExternalUrlService {
    fn open_url<'a>(&'a self, _url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_service_accepts_any_url() {
        let service: Box<dyn ExternalUrlService> = Box::new(NoopExternalUrlService);
        assert_eq!(
            futures::executor::block_on(service.open_url("https://example.com")),
            Ok(())
        );
        assert_eq!(futures::executor::block_on(service.open_url("")), Ok(()));
    }
}
