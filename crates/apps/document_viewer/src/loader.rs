//! Document loading independent of the view layer.

use std::cell::Cell;

use desktop_app_contract::LaunchPayload;
use platform_host::{
    classify_document_response, resolve_document_url, DocumentContent, DocumentFetchService,
};

/// What the viewer shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerState {
    /// A fetch is in flight.
    Loading,
    /// Fetched and classified content.
    Ready(DocumentContent),
    /// Literal text handed over at launch.
    Text(String),
    /// Fetch failure or missing payload, as a user-facing message.
    Failed(String),
}

/// Load generation guard.
///
/// Every load takes a new generation; a finished load may only apply its result when its
/// generation is still the latest and the view has not been torn down.
#[derive(Debug)]
pub struct LoadGeneration {
    current: Cell<u64>,
    mounted: Cell<bool>,
}

impl Default for LoadGeneration {
    fn default() -> Self {
        Self {
            current: Cell::new(0),
            mounted: Cell::new(true),
        }
    }
}

impl LoadGeneration {
    /// Starts a load and returns its generation.
    pub fn begin(&self) -> u64 {
        let next = self.current.get() + 1;
        self.current.set(next);
        next
    }

    /// Whether a load started as `generation` may still apply its result.
    pub fn is_current(&self, generation: u64) -> bool {
        self.mounted.get() && self.current.get() == generation
    }

    /// Marks the view unmounted. Pending loads are discarded.
    pub fn retire(&self) {
        self.mounted.set(false);
    }
}

/// The state shown before any fetch completes.
pub fn initial_state(payload: &LaunchPayload) -> ViewerState {
    match payload {
        LaunchPayload::Document { .. } => ViewerState::Loading,
        LaunchPayload::Text { body, .. } => ViewerState::Text(body.clone()),
        LaunchPayload::None => ViewerState::Failed("Nothing to display.".to_string()),
    }
}

/// Fetches `source` (a local document name or an absolute URL) and classifies the response.
pub async fn load_document<S>(service: &S, source: &str) -> ViewerState
where
    S: DocumentFetchService + ?Sized,
{
    let url = resolve_document_url(source);
    match service.fetch(&url).await {
        Ok(document) => ViewerState::Ready(classify_document_response(
            document.content_type.as_deref(),
            &document.body,
        )),
        Err(err) => ViewerState::Failed(format!("Could not load {url}: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::MemoryDocumentFetchService;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn newer_load_supersedes_older() {
        let generation = LoadGeneration::default();
        let first = generation.begin();
        let second = generation.begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn retired_view_discards_every_load() {
        let generation = LoadGeneration::default();
        let pending = generation.begin();
        generation.retire();
        assert!(!generation.is_current(pending));
    }

    #[test]
    fn initial_state_follows_payload() {
        assert_eq!(
            initial_state(&LaunchPayload::Document {
                title: "aboutMe.html".to_string(),
                source: "aboutme".to_string(),
            }),
            ViewerState::Loading
        );
        assert_eq!(
            initial_state(&LaunchPayload::Text {
                title: "todo.txt".to_string(),
                body: "buy milk".to_string(),
            }),
            ViewerState::Text("buy milk".to_string())
        );
        assert!(matches!(
            initial_state(&LaunchPayload::None),
            ViewerState::Failed(_)
        ));
    }

    #[test]
    fn local_document_loads_as_html() {
        let service = MemoryDocumentFetchService::default();
        service.insert(
            "/documents/aboutme.html",
            Some("text/html"),
            "<h1>About me</h1>",
        );
        assert_eq!(
            block_on(load_document(&service, "aboutme")),
            ViewerState::Ready(DocumentContent::Html("<h1>About me</h1>".to_string()))
        );
    }

    #[test]
    fn remote_repository_listing_is_classified() {
        let service = MemoryDocumentFetchService::default();
        let url = "https://api.github.com/users/nygosaki/repos";
        service.insert(
            url,
            Some("application/json; charset=utf-8"),
            r#"[
                {"name":"old","html_url":"https://github.com/n/old","fork":false,"pushed_at":"2021-01-01T00:00:00Z"},
                {"name":"forked","html_url":"https://github.com/n/forked","fork":true,"pushed_at":"2024-01-01T00:00:00Z"},
                {"name":"new","html_url":"https://github.com/n/new","fork":false,"pushed_at":"2023-01-01T00:00:00Z"}
            ]"#,
        );
        let ViewerState::Ready(DocumentContent::RepositoryList(records)) =
            block_on(load_document(&service, url))
        else {
            panic!("expected a repository list");
        };
        let names: Vec<&str> = records.iter().map(|record| record.name.as_str()).collect();
        assert_eq!(names, vec!["new", "old"]);
    }

    #[test]
    fn missing_document_reports_status() {
        let service = MemoryDocumentFetchService::default();
        let ViewerState::Failed(message) = block_on(load_document(&service, "projects")) else {
            panic!("expected failure");
        };
        assert!(message.contains("/documents/projects.html"));
        assert!(message.contains("404"));
    }
}
