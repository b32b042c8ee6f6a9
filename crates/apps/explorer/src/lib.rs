//! File explorer desktop app over the shared virtual file system.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod state;

use desktop_app_contract::{AppMountContext, LaunchService};
use leptos::*;
use platform_host::Vfs;
use system_shell_contract::AppLauncher;

pub use state::{
    ExplorerAction, ExplorerItem, ExplorerItemKind, ExplorerState, SidebarShortcut,
    SIDEBAR_SHORTCUTS,
};

fn open_item(
    vfs: &Vfs,
    launcher: &LaunchService,
    state: RwSignal<ExplorerState>,
    action: ExplorerAction,
) {
    match action {
        ExplorerAction::Navigate(path) => {
            let result = state.try_update(|state| state.navigate(vfs, &path));
            if let Some(Err(err)) = result {
                logging::warn!("explorer navigation to {path} failed: {err}");
            }
        }
        ExplorerAction::Launch(target) => {
            if let Err(err) = launcher.launch(target) {
                logging::warn!("explorer launch failed: {err}");
            }
        }
    }
}

#[component]
/// File explorer window contents.
pub fn ExplorerApp(
    /// Per-window mount context.
    context: AppMountContext,
) -> impl IntoView {
    let vfs = context.vfs.clone();
    let launcher = context.services.launcher.clone();
    let state = create_rw_signal(ExplorerState::default());
    let selected = create_rw_signal::<Option<String>>(None);

    let items = {
        let vfs = vfs.clone();
        move || state.with(|state| state.items(&vfs))
    };
    let item_count = {
        let items = items.clone();
        move || items().len()
    };
    let open = Callback::new(move |action: ExplorerAction| {
        selected.set(None);
        open_item(&vfs, &launcher, state, action);
    });

    view! {
        <div class="app-shell app-explorer-shell">
            <div class="app-toolbar">
                <button
                    type="button"
                    disabled=move || !state.with(ExplorerState::can_go_back)
                    on:click=move |_| {
                        selected.set(None);
                        state.update(ExplorerState::go_back);
                    }
                >
                    "Back"
                </button>
                <button
                    type="button"
                    on:click=move |_| {
                        selected.set(None);
                        state.update(ExplorerState::go_home);
                    }
                >
                    "Home"
                </button>
                <div class="pane-path">{move || state.with(|state| state.path().to_string())}</div>
            </div>

            <div class="explorer-workspace">
                <aside class="explorer-tree" aria-label="Places">
                    <ul class="tree-list">
                        {SIDEBAR_SHORTCUTS
                            .iter()
                            .map(|shortcut| {
                                let shortcut = *shortcut;
                                view! {
                                    <li>
                                        <button
                                            type="button"
                                            class=move || {
                                                if state.with(|state| shortcut.is_active(state.path())) {
                                                    "tree-node selected"
                                                } else {
                                                    "tree-node"
                                                }
                                            }
                                            on:click=move |_| {
                                                open.call(ExplorerAction::Navigate(shortcut.path.to_string()))
                                            }
                                        >
                                            {shortcut.label}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </aside>

                <section class="explorer-pane">
                    <div class="explorer-grid" role="grid" aria-label="Folder contents">
                        <For each=items key=|item| item.name.clone() let:item>
                            <ExplorerTile item=item selected=selected open=open />
                        </For>
                    </div>
                </section>
            </div>

            <div class="app-statusbar">
                <span>{move || format!("{} item(s)", item_count())}</span>
                <span>
                    {move || {
                        selected
                            .get()
                            .map(|name| format!("Selected: {name}"))
                            .unwrap_or_else(|| "Ready".to_string())
                    }}
                </span>
            </div>
        </div>
    }
}

#[component]
fn ExplorerTile(
    item: ExplorerItem,
    selected: RwSignal<Option<String>>,
    open: Callback<ExplorerAction>,
) -> impl IntoView {
    let name = item.name.clone();
    let is_selected = {
        let name = name.clone();
        Signal::derive(move || selected.with(|selected| selected.as_deref() == Some(name.as_str())))
    };
    let action = item.action.clone();
    let select_name = name.clone();

    view! {
        <button
            type="button"
            class=move || {
                let base = format!("explorer-item {}", item.kind.css_class());
                if is_selected.get() { format!("{base} selected") } else { base }
            }
            on:click=move |_| selected.set(Some(select_name.clone()))
            on:dblclick=move |_| open.call(action.clone())
        >
            <span class="explorer-item-icon" aria-hidden="true"></span>
            <span class="explorer-item-label">{name}</span>
        </button>
    }
}
