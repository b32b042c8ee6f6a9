//! Document fetch contracts and response classification for the document viewer.
//!
//! A document payload is either an absolute `http(s)` URL or a local document reference that
//! resolves to same-origin static HTML under [`LOCAL_DOCUMENT_ROOT`]. Fetched bodies are
//! classified into [`DocumentContent`] before rendering.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Same-origin directory holding local documents.
pub const LOCAL_DOCUMENT_ROOT: &str = "/documents/";

/// Object-safe boxed future used by [`DocumentFetchService`].
pub type DocumentFetchFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Raw fetched document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchedDocument {
    /// Response `Content-Type` header, when present.
    pub content_type: Option<String>,
    /// Response body text.
    pub body: String,
}

/// Document fetch failures. Never shown verbatim to visitors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentFetchError {
    /// Request could not be sent or was aborted.
    #[error("network error: {0}")]
    Network(String),
    /// Server answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(u16),
    /// Body could not be read as text.
    #[error("could not decode body: {0}")]
    Decode(String),
}

/// Host service fetching document bodies.
pub trait DocumentFetchService {
    /// Fetches `url` and returns its body with the declared content type.
    fn fetch<'a>(
        &'a self,
        url: &'a str,
    ) -> DocumentFetchFuture<'a, Result<FetchedDocument, DocumentFetchError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Fetch service for targets without network access.
pub struct NoopDocumentFetchService;

impl DocumentFetchService for NoopDocumentFetchService {
    fn fetch<'a>(
        &'a self,
        _url: &'a str,
    ) -> DocumentFetchFuture<'a, Result<FetchedDocument, DocumentFetchError>> {
        Box::pin(async {
            Err(DocumentFetchError::Network(
                "document fetch is unavailable on this target".to_string(),
            ))
        })
    }
}

#[derive(Debug, Default)]
/// In-memory fetch service keyed by URL.
pub struct MemoryDocumentFetchService {
    documents: RefCell<HashMap<String, FetchedDocument>>,
}

impl MemoryDocumentFetchService {
    /// Registers a response body for `url`.
    pub fn insert(&self, url: &str, content_type: Option<&str>, body: &str) {
        self.documents.borrow_mut().insert(
            url.to_string(),
            FetchedDocument {
                content_type: content_type.map(str::to_string),
                body: body.to_string(),
            },
        );
    }
}

impl DocumentFetchService for MemoryDocumentFetchService {
    fn fetch<'a>(
        &'a self,
        url: &'a str,
    ) -> DocumentFetchFuture<'a, Result<FetchedDocument, DocumentFetchError>> {
        Box::pin(async move {
            self.documents
                .borrow()
                .get(url)
                .cloned()
                .ok_or(DocumentFetchError::Status(404))
        })
    }
}

/// Returns `true` for absolute `http://` or `https://` URLs.
pub fn is_absolute_http_url(payload: &str) -> bool {
    let lower = payload.trim().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Resolves a document payload to the URL to fetch.
pub fn resolve_document_url(payload: &str) -> String {
    let payload = payload.trim();
    if is_absolute_http_url(payload) {
        return payload.to_string();
    }
    let name = payload.trim_start_matches('/');
    if name.ends_with(".html") {
        format!("{LOCAL_DOCUMENT_ROOT}{name}")
    } else {
        format!("{LOCAL_DOCUMENT_ROOT}{name}.html")
    }
}

/// One entry of a repository listing API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    /// Repository name.
    pub name: String,
    /// Browser URL.
    pub html_url: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Primary language, when reported.
    #[serde(default)]
    pub language: Option<String>,
    /// Whether the repository is a fork.
    #[serde(default)]
    pub fork: bool,
    /// Last push timestamp (RFC 3339).
    #[serde(default)]
    pub pushed_at: Option<String>,
    /// Last update timestamp (RFC 3339).
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl RepositoryRecord {
    /// Last-modified timestamp: `pushed_at`, falling back to `updated_at`.
    pub fn last_modified(&self) -> &str {
        self.pushed_at
            .as_deref()
            .or(self.updated_at.as_deref())
            .unwrap_or_default()
    }
}

/// Classified document body ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentContent {
    /// Non-fork repositories, most recently modified first.
    RepositoryList(Vec<RepositoryRecord>),
    /// Pretty-printed JSON.
    Json(String),
    /// Trusted same-origin or remote HTML.
    Html(String),
    /// Text shown verbatim in a preformatted block.
    Preformatted(String),
}

/// Returns `true` when `body` contains a tag-like substring such as `<p>` or `</div>`.
pub fn looks_like_html(body: &str) -> bool {
    let bytes = body.as_bytes();
    let Some(last_close) = bytes.iter().rposition(|byte| *byte == b'>') else {
        return false;
    };
    bytes[..last_close].iter().enumerate().any(|(idx, byte)| {
        if *byte != b'<' {
            return false;
        }
        let rest = &bytes[idx + 1..];
        let name = rest.strip_prefix(b"/").unwrap_or(rest);
        name.first().is_some_and(u8::is_ascii_alphabetic)
    })
}

fn parse_json(content_type: Option<&str>, body: &str) -> Option<serde_json::Value> {
    let declared_json = content_type
        .map(|value| value.to_ascii_lowercase().contains("json"))
        .unwrap_or(false);
    let sniff_json = content_type.is_none() && {
        let trimmed = body.trim_start();
        trimmed.starts_with('[') || trimmed.starts_with('{')
    };
    if !(declared_json || sniff_json) {
        return None;
    }
    serde_json::from_str(body).ok()
}

fn repository_list(value: &serde_json::Value) -> Option<Vec<RepositoryRecord>> {
    let items = value.as_array()?;
    if items.is_empty() {
        return None;
    }
    let mut records: Vec<RepositoryRecord> = serde_json::from_value(value.clone()).ok()?;
    records.retain(|record| !record.fork);
    records.sort_by(|a, b| b.last_modified().cmp(a.last_modified()));
    Some(records)
}

/// Classifies a fetched body by content type and shape.
pub fn classify_document_response(content_type: Option<&str>, body: &str) -> DocumentContent {
    if let Some(value) = parse_json(content_type, body) {
        if let Some(records) = repository_list(&value) {
            return DocumentContent::RepositoryList(records);
        }
        let pretty = serde_json::to_string_pretty(&value).unwrap_or_else(|_| body.to_string());
        return DocumentContent::Json(pretty);
    }
    if looks_like_html(body) {
        DocumentContent::Html(body.to_string())
    } else {
        DocumentContent::Preformatted(body.to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn resolve_document_url_keeps_remote_and_roots_local() {
        assert_eq!(
            resolve_document_url("https://api.github.com/users/x/repos"),
            "https://api.github.com/users/x/repos"
        );
        assert_eq!(resolve_document_url("aboutme"), "/documents/aboutme.html");
        assert_eq!(
            resolve_document_url("/projects.html"),
            "/documents/projects.html"
        );
    }

    #[test]
    fn repository_listing_drops_forks_and_sorts_newest_first() {
        let body = r#"[
            {"name":"old","html_url":"https://x/old","fork":false,"pushed_at":"2021-01-01T00:00:00Z"},
            {"name":"forked","html_url":"https://x/forked","fork":true,"pushed_at":"2024-01-01T00:00:00Z"},
            {"name":"new","html_url":"https://x/new","fork":false,"pushed_at":"2023-06-01T00:00:00Z"},
            {"name":"mid","html_url":"https://x/mid","fork":false,"updated_at":"2022-03-01T00:00:00Z"}
        ]"#;
        let DocumentContent::RepositoryList(records) =
            classify_document_response(Some("application/json; charset=utf-8"), body)
        else {
            panic!("expected repository list");
        };
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["new", "mid", "old"]);
    }

    #[test]
    fn other_json_is_pretty_printed() {
        assert_eq!(
            classify_document_response(Some("application/json"), r#"{"a":1}"#),
            DocumentContent::Json("{\n  \"a\": 1\n}".to_string())
        );
        assert_eq!(
            classify_document_response(Some("application/json"), "[]"),
            DocumentContent::Json("[]".to_string())
        );
    }

    #[test]
    fn text_is_html_only_when_tag_like() {
        assert_eq!(
            classify_document_response(Some("text/html"), "<h1>Hi</h1>"),
            DocumentContent::Html("<h1>Hi</h1>".to_string())
        );
        assert_eq!(
            classify_document_response(Some("text/plain"), "1 < 2 and 3 > 2"),
            DocumentContent::Preformatted("1 < 2 and 3 > 2".to_string())
        );
        assert_eq!(
            classify_document_response(None, "plain words"),
            DocumentContent::Preformatted("plain words".to_string())
        );
    }

    #[test]
    fn tag_detection_needs_a_closing_bracket_after_the_tag() {
        assert!(looks_like_html("x </div>"));
        assert!(!looks_like_html("x </div"));
        assert!(!looks_like_html("> then <b"));
        assert!(!looks_like_html("<>"));

        let unclosed = "<x".repeat(200_000);
        assert!(!looks_like_html(&unclosed));
        assert!(looks_like_html(&format!("{unclosed}>")));
    }

    #[test]
    fn untyped_json_body_is_sniffed() {
        assert!(matches!(
            classify_document_response(None, r#"{"ok":true}"#),
            DocumentContent::Json(_)
        ));
    }

    #[test]
    fn memory_service_serves_registered_documents() {
        let service = MemoryDocumentFetchService::default();
        service.insert("/documents/aboutme.html", Some("text/html"), "<p>me</p>");
        let found = futures::executor::block_on(service.fetch("/documents/aboutme.html"));
        assert_eq!(found.map(|doc| doc.body), Ok("<p>me</p>".to_string()));
        let missing = futures::executor::block_on(service.fetch("/documents/nope.html"));
        assert_eq!(missing, Err(DocumentFetchError::Status(404)));
    }
}
