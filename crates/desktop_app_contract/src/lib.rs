//! Shared contract types between the desktop shell runtime and the apps it mounts.
//!
//! Apps receive an [`AppMountContext`] per window: their application id, the window id, the
//! launch payload, the shared virtual file system, and an [`AppServices`] bundle of
//! capability handles routed back into the runtime.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::rc::Rc;

use leptos::View;
use platform_host::Vfs;
use serde::{Deserialize, Serialize};
use system_shell_contract::{AppLauncher, LaunchError, LaunchTarget};

/// Stable identifier for an application, for example `terminal` or `aboutme`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ApplicationId(String);

impl ApplicationId {
    /// Returns an app identifier when `raw` is a lowercase token of letters, digits and `-`.
    pub fn new(raw: impl Into<String>) -> Result<Self, String> {
        let raw = raw.into();
        if is_valid_application_id(&raw) {
            Ok(Self(raw))
        } else {
            Err(format!(
                "invalid application id `{raw}`; expected a lowercase token"
            ))
        }
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Creates an id without validation for compile-time/runtime trusted constants.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }
}

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn is_valid_application_id(raw: &str) -> bool {
    let Some(first) = raw.bytes().next() else {
        return false;
    };
    raw.len() <= 64
        && first.is_ascii_lowercase()
        && raw
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
        && !raw.ends_with('-')
}

/// Returns the DOM id of the primary input element inside a window.
///
/// Apps with a focusable input (the terminal prompt) render it with this id so the runtime can
/// refocus it after launch or restore.
pub fn window_primary_input_dom_id(window_id: &str) -> String {
    format!("window-primary-input-{window_id}")
}

/// Content handed to a window at launch time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LaunchPayload {
    /// Plain application launch.
    #[default]
    None,
    /// Document to display.
    Document {
        /// Window title.
        title: String,
        /// Document reference or absolute URL.
        source: String,
    },
    /// Literal text to display.
    Text {
        /// Window title.
        title: String,
        /// Text body.
        body: String,
    },
}

/// Launch function supplied by the runtime registry.
pub type LaunchFn = Rc<dyn Fn(LaunchTarget) -> Result<(), LaunchError>>;

#[derive(Clone)]
/// Launch capability handed to apps and, through [`AppLauncher`], to the command interpreter.
pub struct LaunchService {
    launch: LaunchFn,
}

impl LaunchService {
    /// Creates a launch service from a runtime callback.
    pub fn new(launch: LaunchFn) -> Self {
        Self { launch }
    }
}

impl AppLauncher for LaunchService {
    fn launch(&self, target: LaunchTarget) -> Result<(), LaunchError> {
        (self.launch)(target)
    }
}

#[derive(Clone)]
/// Injected app services bundle.
pub struct AppServices {
    /// Launch capability.
    pub launcher: LaunchService,
}

impl AppServices {
    /// Creates service handles around the runtime launch capability.
    pub fn new(launcher: LaunchService) -> Self {
        Self { launcher }
    }
}

#[derive(Clone)]
/// App mount context injected by the desktop runtime per window instance.
pub struct AppMountContext {
    /// Application id from the runtime catalog.
    pub app_id: ApplicationId,
    /// Window id, `<app>-<timestamp>`.
    pub window_id: String,
    /// Launch payload supplied at window-open time.
    pub payload: LaunchPayload,
    /// Shared read-only virtual file system.
    pub vfs: Rc<Vfs>,
    /// Runtime service bundle.
    pub services: AppServices,
}

/// Static app mount function used by the runtime registry.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Mounted app module descriptor used by the runtime app registry.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the app view with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn application_id_requires_lowercase_tokens() {
        assert!(ApplicationId::new("terminal").is_ok());
        assert!(ApplicationId::new("music-player2").is_ok());
        assert!(ApplicationId::new("").is_err());
        assert!(ApplicationId::new("Terminal").is_err());
        assert!(ApplicationId::new("2048").is_err());
        assert!(ApplicationId::new("system.calc").is_err());
        assert!(ApplicationId::new("trailing-").is_err());
    }

    #[test]
    fn primary_input_dom_id_embeds_window_id() {
        assert_eq!(
            window_primary_input_dom_id("terminal-17"),
            "window-primary-input-terminal-17"
        );
    }

    #[test]
    fn launch_service_forwards_targets() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let launcher = LaunchService::new(Rc::new(move |target: LaunchTarget| {
            sink.borrow_mut().push(target);
            Ok(())
        }));
        let target = LaunchTarget::App {
            app_id: "explorer".to_string(),
        };
        assert_eq!(launcher.launch(target.clone()), Ok(()));
        assert_eq!(*seen.borrow(), vec![target]);
    }
}
