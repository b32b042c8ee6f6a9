use desktop_app_contract::{AppMountContext, AppServices, ApplicationId};

use super::*;
use crate::{
    apps::{self, WindowContents},
    model::{ResizeEdge, WindowId, WindowRecord},
    reducer::DesktopAction,
    window_manager::{WindowController, DRAG_EXCLUDED_SELECTOR},
};

/// Repository opened by `Help > Source Code`.
pub(crate) const SOURCE_CODE_URL: &str = "https://github.com/Nygosaki/personalwebsite2";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WindowMenuAction {
    Minimize,
    OpenSourceCode,
}

const WINDOW_MENUS: [(&str, &[(&str, WindowMenuAction)]); 2] = [
    ("View", &[("Minimize", WindowMenuAction::Minimize)]),
    ("Help", &[("Source Code", WindowMenuAction::OpenSourceCode)]),
];

fn window_record(state: &crate::model::DesktopState, window_id: &WindowId) -> Option<WindowRecord> {
    state
        .windows
        .iter()
        .find(|window| &window.id == window_id)
        .cloned()
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let Some(initial) = runtime
        .state
        .with_untracked(|state| window_record(state, &window_id))
    else {
        return ().into_view();
    };
    let app_id = store_value(initial.app_id.clone());
    let id = store_value(window_id);

    let record = create_memo(move |_| {
        runtime
            .state
            .with(|state| id.with_value(|id| window_record(state, id)))
    });
    let controller = create_rw_signal(WindowController::new(runtime.viewport.get_untracked()));

    create_effect(move |_| {
        let viewport = runtime.viewport.get();
        controller.update(|controller| controller.viewport_resized(viewport));
    });

    let title = move || {
        record.with(|record| {
            record
                .as_ref()
                .map(|record| record.title.clone())
                .unwrap_or_default()
        })
    };
    let style = move || {
        let minimized = record.with(|record| record.as_ref().is_some_and(|record| record.minimized));
        let z_index = runtime.state.with(|state| {
            id.with_value(|id| state.window_index(id))
                .map(|index| index + 1)
                .unwrap_or(0)
        });
        format!(
            "{}z-index:{};visibility:{};",
            controller.with(|controller| controller.rect().css()),
            z_index,
            if minimized { "hidden" } else { "visible" }
        )
    };

    let dispatch_for_app = move |build: fn(ApplicationId) -> DesktopAction| {
        runtime.dispatch_action(build(app_id.get_value()));
    };
    let raise = move |_: web_sys::PointerEvent| {
        let is_front = runtime.state.with_untracked(|state| {
            id.with_value(|id| state.windows.last().is_some_and(|window| &window.id == id))
        });
        if !is_front {
            dispatch_for_app(|app_id| DesktopAction::Focus { app_id });
        }
    };
    let minimize = move || dispatch_for_app(|app_id| DesktopAction::ToggleMinimize { app_id });
    let close = move || dispatch_for_app(|app_id| DesktopAction::Close { app_id });
    let toggle_maximize = move || {
        let viewport = runtime.viewport.get_untracked();
        controller.update(|controller| controller.toggle_maximize(viewport));
    };
    let run_menu_action = move |action: WindowMenuAction| match action {
        WindowMenuAction::Minimize => minimize(),
        WindowMenuAction::OpenSourceCode => runtime.dispatch_action(DesktopAction::OpenExternalUrl {
            url: SOURCE_CODE_URL.to_string(),
        }),
    };

    let begin_move = move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 || event_target_within(&ev, DRAG_EXCLUDED_SELECTOR) {
            return;
        }
        let started = controller
            .try_update(|controller| {
                controller.begin_drag(ev.pointer_id(), pointer_from_pointer_event(&ev))
            })
            .unwrap_or(false);
        if started {
            ev.prevent_default();
            try_set_pointer_capture(&ev);
        }
    };
    let gesture_move = move |ev: web_sys::PointerEvent| {
        if controller.with_untracked(|controller| controller.gesture().pointer_id())
            != Some(ev.pointer_id())
        {
            return;
        }
        let viewport = runtime.viewport.get_untracked();
        controller.update(|controller| {
            controller.pointer_move(ev.pointer_id(), pointer_from_pointer_event(&ev), viewport);
        });
    };
    let gesture_end = move |ev: web_sys::PointerEvent| {
        if controller.with_untracked(|controller| controller.gesture().pointer_id())
            != Some(ev.pointer_id())
        {
            return;
        }
        controller.update(|controller| {
            controller.end_gesture(ev.pointer_id());
        });
        try_release_pointer_capture(&ev);
    };

    let resize_handles = ResizeEdge::ALL
        .into_iter()
        .map(|edge| {
            let begin_resize = move |ev: web_sys::PointerEvent| {
                if ev.button() != 0 {
                    return;
                }
                ev.prevent_default();
                ev.stop_propagation();
                let started = controller
                    .try_update(|controller| {
                        controller.begin_resize(
                            ev.pointer_id(),
                            edge,
                            pointer_from_pointer_event(&ev),
                        )
                    })
                    .unwrap_or(false);
                if started {
                    try_set_pointer_capture(&ev);
                }
            };
            view! {
                <div
                    class=format!("window-resize-handle edge-{}", edge.token())
                    aria-hidden="true"
                    on:pointerdown=begin_resize
                    on:pointermove=gesture_move
                    on:pointerup=gesture_end
                    on:pointercancel=gesture_end
                />
            }
        })
        .collect_view();

    let menus = WINDOW_MENUS
        .into_iter()
        .map(|(label, items)| {
            view! {
                <div class="window-menu">
                    <button type="button" class="window-menu-title">{label}</button>
                    <div class="window-menu-items" role="menu">
                        {items
                            .iter()
                            .map(|(item_label, action)| {
                                let action = *action;
                                view! {
                                    <button
                                        type="button"
                                        role="menuitem"
                                        on:click=move |_| run_menu_action(action)
                                    >
                                        {*item_label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section
            class="desktop-window"
            data-desktop-block-select="true"
            style=style
            on:pointerdown=raise
            role="dialog"
            aria-label=title
        >
            {resize_handles}
            <header
                class="titlebar"
                on:pointerdown=begin_move
                on:pointermove=gesture_move
                on:pointerup=gesture_end
                on:pointercancel=gesture_end
                on:dblclick=move |_| toggle_maximize()
            >
                <div class="titlebar-title">{title}</div>
                <div class="titlebar-controls">
                    <button
                        type="button"
                        class="titlebar-button minimize"
                        aria-label="Minimize window"
                        on:click=move |_| minimize()
                    ></button>
                    <button
                        type="button"
                        class="titlebar-button maximize"
                        aria-label="Maximize window"
                        on:click=move |_| toggle_maximize()
                    ></button>
                    <button
                        type="button"
                        class="titlebar-button close"
                        aria-label="Close window"
                        on:click=move |_| close()
                    ></button>
                </div>
            </header>
            <nav class="window-menubar">{menus}</nav>
            <div class="window-body">
                <WindowBody record=initial />
            </div>
        </section>
    }
    .into_view()
}

#[component]
fn WindowBody(record: WindowRecord) -> impl IntoView {
    let runtime = use_desktop_runtime();

    match apps::window_contents(&record) {
        WindowContents::Module(module) => module.mount(AppMountContext {
            app_id: record.app_id,
            window_id: record.id.0,
            payload: record.payload,
            vfs: runtime.vfs.get_value(),
            services: AppServices::new(runtime.launch_service()),
        }),
        WindowContents::Embed { url } => view! {
            <iframe
                class="window-embed"
                src=url
                title=record.title
                allow="autoplay; clipboard-write; encrypted-media; fullscreen; picture-in-picture"
                loading="lazy"
            ></iframe>
        }
        .into_view(),
        WindowContents::Missing => {
            logging::warn!("no app registered for window `{}`", record.id);
            view! { <p class="window-missing">"Nothing to show here."</p> }.into_view()
        }
    }
}
