//! Runtime-effect dispatch for the desktop host boundary.

use crate::{
    host::{host_ui, DesktopHostContext},
    reducer::RuntimeEffect,
};

pub(super) fn run_runtime_effect(host: DesktopHostContext, effect: RuntimeEffect) {
    match effect {
        RuntimeEffect::SetPageTitle(title) => host_ui::set_page_title(&title),
        RuntimeEffect::OpenExternalUrl(url) => host_ui::open_external_url(host, &url),
        RuntimeEffect::FocusWindowInput(window_id) => host_ui::focus_window_input(&window_id),
    }
}
