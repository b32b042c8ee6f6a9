//! Desktop shell UI composition and interaction surfaces.

mod taskbar;
mod window;

use leptos::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use self::{taskbar::Taskbar, window::DesktopWindow};

use crate::{
    model::{DesktopState, PointerPosition},
    selection::{SelectionEffect, SelectionOverlay, SELECTION_BLOCKING_SELECTOR},
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

/// Background video behind the desktop.
const WALLPAPER_URL: &str = "/wallpaper.mp4";

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition::new(ev.client_x(), ev.client_y())
}

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            if let Err(err) = element.set_pointer_capture(ev.pointer_id()) {
                logging::warn!("pointer capture failed: {err:?}");
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

#[cfg(target_arch = "wasm32")]
fn try_release_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.release_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_release_pointer_capture(_: &web_sys::PointerEvent) {}

/// Returns `true` when the event target sits inside an element matching `selector`.
#[cfg(target_arch = "wasm32")]
fn event_target_within(ev: &web_sys::PointerEvent, selector: &str) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.closest(selector).ok().flatten())
        .is_some()
}

#[cfg(not(target_arch = "wasm32"))]
fn event_target_within(_: &web_sys::PointerEvent, _: &str) -> bool {
    false
}

#[component]
/// Desktop surface: wallpaper, window layer, selection rectangle and taskbar.
///
/// Must be rendered inside [`DesktopProvider`].
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let selection = create_rw_signal(SelectionOverlay::default());

    let apply_selection_effect = move |effect: Option<SelectionEffect>| {
        if let Some(effect) = effect {
            runtime
                .host
                .with_value(|host| host.apply_selection_effect(effect));
        }
    };

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && selection.with_untracked(SelectionOverlay::is_selecting) {
            apply_selection_effect(selection.try_update(SelectionOverlay::cancel).flatten());
        }
    });
    on_cleanup(move || escape_listener.remove());

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        let blocked = event_target_within(&ev, SELECTION_BLOCKING_SELECTOR);
        let effect = selection
            .try_update(|overlay| {
                overlay.pointer_down(
                    ev.pointer_id(),
                    ev.button() == 0,
                    blocked,
                    pointer_from_pointer_event(&ev),
                )
            })
            .flatten();
        if effect.is_some() {
            try_set_pointer_capture(&ev);
        }
        apply_selection_effect(effect);
    };
    let on_pointermove = move |ev: web_sys::PointerEvent| {
        if selection.with_untracked(SelectionOverlay::pointer_id) != Some(ev.pointer_id()) {
            return;
        }
        selection.update(|overlay| {
            overlay.pointer_move(ev.pointer_id(), pointer_from_pointer_event(&ev));
        });
    };
    let on_pointerup = move |ev: web_sys::PointerEvent| {
        if selection.with_untracked(SelectionOverlay::pointer_id) != Some(ev.pointer_id()) {
            return;
        }
        let effect = selection
            .try_update(|overlay| overlay.pointer_up(ev.pointer_id()))
            .flatten();
        try_release_pointer_capture(&ev);
        apply_selection_effect(effect);
    };

    let window_ids = move || runtime.state.with(DesktopState::window_ids_by_launch);
    let selection_rect = move || {
        selection.with(SelectionOverlay::rect).map(|rect| {
            view! {
                <div
                    class="desktop-selection-rect"
                    aria-hidden="true"
                    style=format!(
                        "left:{}px;top:{}px;width:{}px;height:{}px;",
                        rect.left,
                        rect.top,
                        rect.width,
                        rect.height,
                    )
                />
            }
        })
    };

    view! {
        <div class="desktop-shell">
            <video
                class="desktop-wallpaper"
                src=WALLPAPER_URL
                autoplay=true
                loop=true
                prop:muted=true
                playsinline=true
            />
            <div
                class="desktop-surface"
                on:pointerdown=on_pointerdown
                on:pointermove=on_pointermove
                on:pointerup=on_pointerup
                on:pointercancel=on_pointerup
            >
                <div class="desktop-window-layer">
                    <For each=window_ids key=|window_id| window_id.clone() let:window_id>
                        <DesktopWindow window_id=window_id />
                    </For>
                </div>
                {selection_rect}
            </div>

            <Taskbar />
        </div>
    }
}
