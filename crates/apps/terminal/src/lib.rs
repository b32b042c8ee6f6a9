//! Terminal desktop app: a prompt, a scrolling log and an input line driving [`ShellEngine`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod session;

use std::rc::Rc;

use desktop_app_contract::{window_primary_input_dom_id, AppMountContext};
use leptos::ev::KeyboardEvent;
use leptos::*;
use platform_host::HOME_LOCATION;
use system_shell::ShellEngine;

pub use session::{
    prompt, FollowUp, KeyOutcome, LineKind, RenderHint, TerminalKey, TerminalLine,
    TerminalSession, PROMPT_USER,
};
use session::utf16_to_byte_offset;

fn render_line(line: TerminalLine) -> View {
    match (line.kind, line.hint) {
        (LineKind::Input, _) => {
            let location = line.location.unwrap_or_else(|| HOME_LOCATION.to_string());
            view! {
                <div class="terminal-line terminal-line-input">
                    <span class="terminal-prompt">{prompt(&location)}</span>
                    " "
                    <span class="terminal-command">{line.text}</span>
                </div>
            }
            .into_view()
        }
        (LineKind::Output, RenderHint::Html) => {
            view! { <div class="terminal-line terminal-line-html" inner_html=line.text></div> }
                .into_view()
        }
        (LineKind::Output, RenderHint::Plain) => {
            view! { <div class="terminal-line">{line.text}</div> }.into_view()
        }
    }
}

fn caret_from_field(input_ref: NodeRef<html::Input>, value: &str) -> usize {
    input_ref
        .get_untracked()
        .and_then(|input| input.selection_start().ok().flatten())
        .map(|utf16| utf16_to_byte_offset(value, utf16 as usize))
        .unwrap_or(value.len())
}

/// Runs follow-ups in a microtask so they observe the committed DOM.
fn schedule_follow_ups(
    input_ref: NodeRef<html::Input>,
    session: RwSignal<TerminalSession>,
    follow_ups: Vec<FollowUp>,
) {
    if follow_ups.is_empty() {
        return;
    }

    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::{closure::Closure, JsCast};

        let Some(window) = web_sys::window() else {
            return;
        };
        let callback =
            Closure::once_into_js(move || run_follow_ups(input_ref, session, &follow_ups));
        window.queue_microtask(callback.unchecked_ref());
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (input_ref, session, follow_ups);
    }
}

#[cfg(target_arch = "wasm32")]
fn run_follow_ups(
    input_ref: NodeRef<html::Input>,
    session: RwSignal<TerminalSession>,
    follow_ups: &[FollowUp],
) {
    use crate::session::byte_to_utf16_offset;

    let Some(input) = input_ref.get_untracked() else {
        return;
    };
    for follow_up in follow_ups {
        match follow_up {
            FollowUp::FocusInput => {
                if let Err(err) = input.focus() {
                    logging::warn!("terminal focus failed: {err:?}");
                }
            }
            FollowUp::SyncCaret => {
                let caret = session
                    .with_untracked(|session| byte_to_utf16_offset(session.input(), session.caret()))
                    as u32;
                if let Err(err) = input.set_selection_range(caret, caret) {
                    logging::warn!("terminal caret update failed: {err:?}");
                }
            }
            FollowUp::ScrollToEnd => {
                let options = web_sys::ScrollIntoViewOptions::new();
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                options.set_block(web_sys::ScrollLogicalPosition::End);
                input.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    }
}

#[component]
/// Terminal app window contents.
///
/// The session starts at the home location with an empty log. The input carries the window's
/// primary input id so the runtime can focus it when the window opens or is restored.
pub fn TerminalApp(
    /// Per-window mount context.
    context: AppMountContext,
) -> impl IntoView {
    let input_id = window_primary_input_dom_id(&context.window_id);
    let shell = Rc::new(ShellEngine::new(
        context.vfs.clone(),
        Rc::new(context.services.launcher.clone()),
    ));
    let session = create_rw_signal(TerminalSession::default());
    let input_ref = create_node_ref::<html::Input>();

    let lines = move || session.with(|session| session.lines().to_vec());
    let prompt_text = move || session.with(|session| prompt(session.location()));
    let input_value = move || session.with(|session| session.input().to_string());

    let on_input = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        let caret = caret_from_field(input_ref, &value);
        session.update(|session| session.set_input(value, caret));
    };

    let on_keydown = move |ev: KeyboardEvent| {
        let key = TerminalKey::from_key(&ev.key());
        if key == TerminalKey::Other {
            return;
        }
        if key == TerminalKey::Tab {
            session.update_untracked(|session| {
                let caret = caret_from_field(input_ref, session.input());
                session.set_caret(caret);
            });
        }

        let Some(outcome) = session.try_update(|session| session.handle_key(key, &shell)) else {
            return;
        };
        if outcome.prevent_default {
            ev.prevent_default();
        }
        schedule_follow_ups(input_ref, session, outcome.follow_ups);
    };

    let focus_input = move |_: ev::MouseEvent| {
        if let Some(input) = input_ref.get_untracked() {
            let _ = input.focus();
        }
    };

    view! {
        <div class="terminal" on:click=focus_input>
            <div class="terminal-screen" role="log" aria-live="polite">
                <For each=lines key=|line| line.id let:line>
                    {render_line(line)}
                </For>
                <div class="terminal-input-row">
                    <label class="terminal-prompt" for=input_id.clone()>
                        {prompt_text}
                    </label>
                    <input
                        node_ref=input_ref
                        id=input_id
                        class="terminal-input"
                        type="text"
                        prop:value=input_value
                        on:input=on_input
                        on:keydown=on_keydown
                        autocomplete="off"
                        autocapitalize="off"
                        spellcheck="false"
                    />
                </div>
            </div>
        </div>
    }
}
