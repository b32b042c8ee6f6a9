//! Document viewer desktop app.
//!
//! Shows the document named by the window's launch payload. Local document names resolve to
//! same-origin static files; absolute URLs are fetched as-is. Responses are classified into a
//! repository listing, pretty JSON, HTML or preformatted text.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod loader;

use std::rc::Rc;

use desktop_app_contract::{AppMountContext, LaunchPayload};
use leptos::*;
use platform_host::{DocumentContent, RepositoryRecord};

pub use loader::{initial_state, load_document, LoadGeneration, ViewerState};

fn repository_row(record: RepositoryRecord) -> impl IntoView {
    let updated = record
        .last_modified()
        .split('T')
        .next()
        .unwrap_or_default()
        .to_string();
    view! {
        <li class="repo">
            <a href=record.html_url target="_blank" rel="noopener noreferrer">
                {record.name}
            </a>
            {record.language.map(|language| view! { <span class="repo-language">{language}</span> })}
            <span class="repo-updated">{updated}</span>
            {record
                .description
                .map(|description| view! { <p class="repo-description">{description}</p> })}
        </li>
    }
}

fn render_state(state: ViewerState) -> View {
    match state {
        ViewerState::Loading => {
            view! { <div class="document-status">"Loading..."</div> }.into_view()
        }
        ViewerState::Failed(message) => {
            view! { <div class="document-status document-error">{message}</div> }.into_view()
        }
        ViewerState::Text(body) => view! { <pre class="document-text">{body}</pre> }.into_view(),
        ViewerState::Ready(DocumentContent::Html(html)) => {
            view! { <div class="document-html" inner_html=html></div> }.into_view()
        }
        ViewerState::Ready(DocumentContent::Json(json)) => {
            view! { <pre class="document-json">{json}</pre> }.into_view()
        }
        ViewerState::Ready(DocumentContent::Preformatted(text)) => {
            view! { <pre class="document-text">{text}</pre> }.into_view()
        }
        ViewerState::Ready(DocumentContent::RepositoryList(records)) => view! {
            <ul class="repo-list">
                {records.into_iter().map(repository_row).collect_view()}
            </ul>
        }
        .into_view(),
    }
}

#[component]
/// Document viewer window contents.
pub fn DocumentViewerApp(
    /// Per-window mount context.
    context: AppMountContext,
) -> impl IntoView {
    let state = create_rw_signal(initial_state(&context.payload));
    let generation = Rc::new(LoadGeneration::default());
    on_cleanup({
        let generation = generation.clone();
        move || generation.retire()
    });

    if let LaunchPayload::Document { source, .. } = context.payload.clone() {
        let current = generation.begin();
        spawn_local(async move {
            let service = platform_host_web::document_fetch_service();
            let loaded = load_document(&service, &source).await;
            if !generation.is_current(current) {
                logging::log!("document load for {source} discarded");
                return;
            }
            if let ViewerState::Failed(message) = &loaded {
                logging::warn!("{message}");
            }
            state.set(loaded);
        });
    }

    view! {
        <div class="app-shell document-viewer">
            {move || render_state(state.get())}
        </div>
    }
}
