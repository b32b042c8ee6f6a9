//! Reducer actions, side-effect intents, and transition logic for the desktop window registry.
//!
//! The registry holds at most one window per application id. Geometry is not part of the
//! registry; each mounted window owns its own [`crate::window_manager::WindowController`].

use desktop_app_contract::{ApplicationId, LaunchPayload};
use leptos::logging;
use thiserror::Error;

use crate::model::{DesktopState, WindowId, WindowRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open an application, or restore and raise its existing window.
    Launch {
        /// Application to launch.
        app_id: ApplicationId,
        /// Title for a newly created window.
        title: String,
        /// Content for a newly created window.
        payload: LaunchPayload,
        /// Launch timestamp used to build the window id.
        launched_at_ms: u64,
    },
    /// Raise an application's window without changing its minimized flag.
    Focus {
        /// Application whose window is raised.
        app_id: ApplicationId,
    },
    /// Flip an application's minimized flag.
    ToggleMinimize {
        /// Application to minimize or restore.
        app_id: ApplicationId,
    },
    /// Remove an application's window.
    Close {
        /// Application to close.
        app_id: ApplicationId,
    },
    /// Open a URL outside the desktop.
    OpenExternalUrl {
        /// Target URL.
        url: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] and applied by the host layer.
pub enum RuntimeEffect {
    /// Set `document.title`.
    SetPageTitle(String),
    /// Open a URL in a new browser tab.
    OpenExternalUrl(String),
    /// Focus the primary input inside a window, if it has one.
    FocusWindowInput(WindowId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Reducer failures. These never reach the user; the runtime logs them.
pub enum ReducerError {
    /// The action named an application with no open window.
    #[error("no open window for application `{0}`")]
    WindowNotFound(ApplicationId),
}

fn window_position(state: &DesktopState, app_id: &ApplicationId) -> Result<usize, ReducerError> {
    state
        .windows
        .iter()
        .position(|window| &window.app_id == app_id)
        .ok_or_else(|| ReducerError::WindowNotFound(app_id.clone()))
}

fn raise(state: &mut DesktopState, index: usize) -> &mut WindowRecord {
    let window = state.windows.remove(index);
    state.windows.push(window);
    let last = state.windows.len() - 1;
    &mut state.windows[last]
}

/// Applies `action` to `state` and returns the effects the host must run.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when an action targets an application without a
/// window. `state` is left unchanged in that case.
pub fn reduce_desktop(
    state: &mut DesktopState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let previous_title = state.page_title();
    let mut effects = Vec::new();

    match action {
        DesktopAction::Launch {
            app_id,
            title,
            payload,
            launched_at_ms,
        } => {
            logging::log!("launch requested: {app_id}");
            let window_id = match window_position(state, &app_id) {
                Ok(index) => {
                    let window = raise(state, index);
                    window.minimized = false;
                    window.id.clone()
                }
                Err(_) => {
                    let id = WindowId::for_launch(&app_id, launched_at_ms);
                    state.windows.push(WindowRecord {
                        id: id.clone(),
                        app_id,
                        title,
                        minimized: false,
                        payload,
                    });
                    id
                }
            };
            effects.push(RuntimeEffect::FocusWindowInput(window_id));
        }
        DesktopAction::Focus { app_id } => {
            let index = window_position(state, &app_id)?;
            if index + 1 != state.windows.len() {
                raise(state, index);
            }
        }
        DesktopAction::ToggleMinimize { app_id } => {
            let index = window_position(state, &app_id)?;
            let window = &mut state.windows[index];
            window.minimized = !window.minimized;
            if !window.minimized {
                effects.push(RuntimeEffect::FocusWindowInput(window.id.clone()));
            }
        }
        DesktopAction::Close { app_id } => {
            let index = window_position(state, &app_id)?;
            state.windows.remove(index);
        }
        DesktopAction::OpenExternalUrl { url } => {
            effects.push(RuntimeEffect::OpenExternalUrl(url));
        }
    }

    let title = state.page_title();
    if title != previous_title {
        effects.insert(0, RuntimeEffect::SetPageTitle(title));
    }
    Ok(effects)
}
