#[cfg(target_arch = "wasm32")]
use desktop_app_contract::window_primary_input_dom_id;
use leptos::{logging, spawn_local};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::{host::DesktopHostContext, model::WindowId, selection::SelectionEffect};

pub(super) fn focus_window_input(window_id: &WindowId) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let dom_id = window_primary_input_dom_id(window_id.as_str());
        let callback = Closure::once_into_js(move || {
            let element = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.get_element_by_id(&dom_id))
                .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());
            if let Some(element) = element {
                let _ = element.focus();
            }
        });
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = window_id;
}

pub(super) fn open_external_url(host: DesktopHostContext, url: &str) {
    let url = url.to_string();
    spawn_local(async move {
        if let Err(err) = host.external_url_service().open_url(&url).await {
            logging::warn!("open external url failed for `{url}`: {err}");
        }
    });
}

pub(super) fn set_page_title(title: &str) {
    if let Err(err) = platform_host_web::set_document_title(title) {
        logging::warn!("set page title failed: {err}");
    }
}

pub(super) fn apply_selection_effect(effect: SelectionEffect) {
    let enabled = effect == SelectionEffect::RestoreTextSelection;
    if let Err(err) = platform_host_web::set_body_text_selection(enabled) {
        logging::warn!("text selection toggle failed: {err}");
    }
}
