//! App registry built from the generated manifest catalog, and the mapping from launch targets
//! to reducer actions.

use std::sync::OnceLock;

use desktop_app_contract::{AppModule, AppMountContext, ApplicationId, LaunchPayload};
use desktop_app_document_viewer::DocumentViewerApp;
use desktop_app_explorer::ExplorerApp;
use desktop_app_terminal::TerminalApp;
use leptos::*;
use serde::Deserialize;
use system_shell_contract::{LaunchError, LaunchTarget};

use crate::{model::WindowRecord, reducer::DesktopAction};

include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));

/// Application id of the built-in document viewer.
pub const DOCUMENT_VIEWER_APP_ID: &str = "documentviewer";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Launchable application declared in `manifests/*.toml`.
pub struct AppManifest {
    pub app_id: ApplicationId,
    pub display_name: String,
    pub window_title: String,
    pub quick_launch: bool,
    pub quick_launch_order: u32,
    /// Opaque third-party page shown in an iframe instead of a mounted module.
    #[serde(default)]
    pub embed_url: Option<String>,
}

/// Parsed manifest catalog, quick-launch entries first in launch order.
pub fn app_catalog() -> &'static [AppManifest] {
    static CATALOG: OnceLock<Vec<AppManifest>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        serde_json::from_str(APP_MANIFEST_CATALOG_JSON).unwrap_or_else(|err| {
            logging::warn!("app manifest catalog failed to parse: {err}");
            Vec::new()
        })
    })
}

pub fn app_manifest(app_id: &ApplicationId) -> Option<&'static AppManifest> {
    app_catalog().iter().find(|entry| &entry.app_id == app_id)
}

/// Taskbar quick-launch entries in `quick_launch_order`.
pub fn quick_launch_apps() -> Vec<&'static AppManifest> {
    let mut apps = app_catalog()
        .iter()
        .filter(|entry| entry.quick_launch)
        .collect::<Vec<_>>();
    apps.sort_by_key(|entry| entry.quick_launch_order);
    apps
}

fn mount_terminal(context: AppMountContext) -> View {
    view! { <TerminalApp context=context /> }.into_view()
}

fn mount_explorer(context: AppMountContext) -> View {
    view! { <ExplorerApp context=context /> }.into_view()
}

fn mount_document_viewer(context: AppMountContext) -> View {
    view! { <DocumentViewerApp context=context /> }.into_view()
}

fn app_module(app_id: &str) -> Option<AppModule> {
    match app_id {
        "terminal" => Some(AppModule::new(mount_terminal)),
        "explorer" => Some(AppModule::new(mount_explorer)),
        DOCUMENT_VIEWER_APP_ID => Some(AppModule::new(mount_document_viewer)),
        _ => None,
    }
}

/// What a window body shows.
#[derive(Debug, Clone)]
pub enum WindowContents {
    /// A mounted app module.
    Module(AppModule),
    /// An iframe of an external page.
    Embed { url: String },
    /// Nothing is registered for the window's application.
    Missing,
}

pub fn window_contents(window: &WindowRecord) -> WindowContents {
    if matches!(
        window.payload,
        LaunchPayload::Document { .. } | LaunchPayload::Text { .. }
    ) {
        return WindowContents::Module(AppModule::new(mount_document_viewer));
    }
    if let Some(url) = app_manifest(&window.app_id).and_then(|entry| entry.embed_url.clone()) {
        return WindowContents::Embed { url };
    }
    app_module(window.app_id.as_str())
        .map(WindowContents::Module)
        .unwrap_or(WindowContents::Missing)
}

fn window_app_id(id: &str) -> Result<ApplicationId, LaunchError> {
    ApplicationId::new(id).map_err(|_| LaunchError::UnknownApplication(id.to_string()))
}

/// Maps a launch request from an app or the interpreter onto a reducer action.
///
/// # Errors
///
/// Returns [`LaunchError::UnknownApplication`] for app ids missing from the catalog or ids that
/// are not valid application ids, and [`LaunchError::NoDocumentViewer`] when the document viewer
/// is not registered.
pub fn launch_action(
    target: LaunchTarget,
    launched_at_ms: u64,
) -> Result<DesktopAction, LaunchError> {
    let (app_id, title, payload) = match target {
        LaunchTarget::App { app_id } => {
            let manifest = window_app_id(&app_id)
                .ok()
                .and_then(|id| app_manifest(&id))
                .ok_or(LaunchError::UnknownApplication(app_id))?;
            (
                manifest.app_id.clone(),
                manifest.window_title.clone(),
                LaunchPayload::None,
            )
        }
        LaunchTarget::Document { id, title, source } => {
            document_viewer_available()?;
            (
                window_app_id(&id)?,
                title.clone(),
                LaunchPayload::Document { title, source },
            )
        }
        LaunchTarget::Text { id, title, body } => {
            document_viewer_available()?;
            (
                window_app_id(&id)?,
                title.clone(),
                LaunchPayload::Text { title, body },
            )
        }
    };

    Ok(DesktopAction::Launch {
        app_id,
        title,
        payload,
        launched_at_ms,
    })
}

fn document_viewer_available() -> Result<(), LaunchError> {
    app_manifest(&ApplicationId::trusted(DOCUMENT_VIEWER_APP_ID))
        .map(|_| ())
        .ok_or(LaunchError::NoDocumentViewer)
}
