//! Host-side runtime helpers for executing reducer effects and querying browser page state.
//!
//! Reducers and controllers stay free of browser calls; everything that touches the page goes
//! through [`DesktopHostContext`].

mod effects;
mod host_ui;

use std::rc::Rc;

use platform_host::{ExternalUrlService, Viewport};
use platform_host_web::{current_viewport, external_url_service, host_strategy_name};

use crate::{reducer::RuntimeEffect, selection::SelectionEffect};

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    external_urls: Rc<dyn ExternalUrlService>,
    host_strategy_name: &'static str,
}

impl Default for DesktopHostContext {
    fn default() -> Self {
        Self {
            external_urls: Rc::new(external_url_service()),
            host_strategy_name: host_strategy_name(),
        }
    }
}

impl DesktopHostContext {
    /// Returns the configured external URL service.
    pub fn external_url_service(&self) -> Rc<dyn ExternalUrlService> {
        self.external_urls.clone()
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.host_strategy_name
    }

    /// Current browser viewport.
    pub fn viewport(&self) -> Viewport {
        current_viewport()
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, effect: RuntimeEffect) {
        effects::run_runtime_effect(self.clone(), effect);
    }

    /// Applies a text-selection toggle requested by the selection overlay.
    pub fn apply_selection_effect(&self, effect: SelectionEffect) {
        host_ui::apply_selection_effect(effect);
    }
}
