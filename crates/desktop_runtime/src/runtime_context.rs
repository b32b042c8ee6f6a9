//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the window registry signal, the runtime effect queue, the shared virtual
//! file system and the launch capability handed to apps. UI composition stays in
//! [`crate::components`].

use std::rc::Rc;

use desktop_app_contract::LaunchService;
use leptos::*;
use platform_host::{load_default_vfs, next_launch_timestamp_ms, Vfs, Viewport};
use system_shell_contract::LaunchTarget;

use crate::{
    apps, effect_executor,
    host::DesktopHostContext,
    model::DesktopState,
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive window registry.
    pub state: RwSignal<DesktopState>,
    /// Current browser viewport, updated on resize.
    pub viewport: RwSignal<Viewport>,
    /// Queue of runtime effects emitted by the reducer and processed by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
    /// Shared read-only file system.
    pub vfs: StoredValue<Rc<Vfs>>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Launch capability for apps and the command interpreter.
    ///
    /// Targets are validated synchronously; the resulting action is dispatched after the
    /// current event handler returns.
    pub fn launch_service(&self) -> LaunchService {
        let dispatch = self.dispatch;
        LaunchService::new(Rc::new(move |target: LaunchTarget| {
            let action = apps::launch_action(target, next_launch_timestamp_ms())?;
            defer(move || dispatch.call(action));
            Ok(())
        }))
    }
}

#[cfg(target_arch = "wasm32")]
fn defer(task: impl FnOnce() + 'static) {
    use wasm_bindgen::{closure::Closure, JsCast};

    match web_sys::window() {
        Some(window) => {
            let callback = Closure::once_into_js(task);
            window.queue_microtask(callback.unchecked_ref());
        }
        None => task(),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn defer(task: impl FnOnce() + 'static) {
    task();
}

fn load_vfs() -> Rc<Vfs> {
    match load_default_vfs() {
        Ok(vfs) => Rc::new(vfs),
        Err(err) => {
            logging::warn!("virtual file system seed rejected: {err}");
            Rc::new(Vfs::default())
        }
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(children: Children) -> impl IntoView {
    let host = store_value(DesktopHostContext::default());
    logging::log!(
        "desktop host strategy: {}",
        host.with_value(DesktopHostContext::host_strategy_name)
    );
    let state = create_rw_signal(DesktopState::default());
    let viewport = create_rw_signal(host.with_value(DesktopHostContext::viewport));
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let vfs = store_value(load_vfs());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        match reduce_desktop(&mut desktop, action) {
            Ok(new_effects) => {
                state.set(desktop);
                if !new_effects.is_empty() {
                    effects.update(|queue| queue.extend(new_effects));
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let resize_listener = window_event_listener(ev::resize, move |_| {
        viewport.set(host.with_value(DesktopHostContext::viewport));
    });
    on_cleanup(move || resize_listener.remove());

    let runtime = DesktopRuntimeContext {
        host,
        state,
        viewport,
        effects,
        dispatch,
        vfs,
    };
    provide_context(runtime);
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
