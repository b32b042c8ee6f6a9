use std::{cell::RefCell, rc::Rc};

use desktop_app_terminal::{FollowUp, LineKind, TerminalKey, TerminalSession};
use platform_host::load_default_vfs;
use pretty_assertions::assert_eq;
use system_shell::ShellEngine;
use system_shell_contract::{AppLauncher, LaunchError, LaunchTarget};

#[derive(Default)]
struct RecordingLauncher {
    launched: RefCell<Vec<LaunchTarget>>,
}

impl AppLauncher for RecordingLauncher {
    fn launch(&self, target: LaunchTarget) -> Result<(), LaunchError> {
        self.launched.borrow_mut().push(target);
        Ok(())
    }
}

struct Harness {
    shell: ShellEngine,
    session: TerminalSession,
    launcher: Rc<RecordingLauncher>,
}

impl Harness {
    fn new() -> Self {
        let launcher = Rc::new(RecordingLauncher::default());
        Self {
            shell: ShellEngine::new(Rc::new(load_default_vfs().expect("seed")), launcher.clone()),
            session: TerminalSession::default(),
            launcher,
        }
    }

    fn type_text(&mut self, text: &str) {
        self.session.set_input(text, text.len());
    }

    fn press(&mut self, key: TerminalKey) -> Vec<FollowUp> {
        self.session.handle_key(key, &self.shell).follow_ups
    }

    fn submit(&mut self, text: &str) {
        self.type_text(text);
        self.press(TerminalKey::Enter);
    }

    fn last_text(&self) -> &str {
        &self.session.lines().last().expect("line").text
    }
}

#[test]
fn history_walks_back_then_forward_to_draft() {
    let mut harness = Harness::new();
    for line in ["ls", "pwd", "echo hi"] {
        harness.submit(line);
    }
    harness.type_text("ec");

    harness.press(TerminalKey::ArrowUp);
    assert_eq!(harness.session.input(), "echo hi");
    harness.press(TerminalKey::ArrowUp);
    assert_eq!(harness.session.input(), "pwd");
    harness.press(TerminalKey::ArrowUp);
    harness.press(TerminalKey::ArrowUp);
    assert_eq!(harness.session.input(), "ls");
    assert_eq!(harness.session.history_cursor(), Some(0));

    harness.press(TerminalKey::ArrowDown);
    harness.press(TerminalKey::ArrowDown);
    assert_eq!(harness.session.input(), "echo hi");
    harness.press(TerminalKey::ArrowDown);
    assert_eq!(harness.session.input(), "ec");
    assert_eq!(harness.session.history_cursor(), None);
    assert_eq!(harness.session.caret(), 2);
}

#[test]
fn up_then_down_restores_draft_exactly() {
    let mut harness = Harness::new();
    harness.submit("pwd");
    harness.type_text("half typed");
    let follow_ups = harness.press(TerminalKey::ArrowUp);
    assert_eq!(follow_ups, vec![FollowUp::FocusInput, FollowUp::SyncCaret]);
    harness.press(TerminalKey::ArrowDown);
    assert_eq!(harness.session.input(), "half typed");
}

#[test]
fn submitting_records_location_at_commit_time() {
    let mut harness = Harness::new();
    harness.submit("cd Documents");
    harness.submit("ls");
    let inputs: Vec<(&str, Option<&str>)> = harness
        .session
        .lines()
        .iter()
        .filter(|line| line.kind == LineKind::Input)
        .map(|line| (line.text.as_str(), line.location.as_deref()))
        .collect();
    assert_eq!(
        inputs,
        vec![("cd Documents", Some("~/")), ("ls", Some("~/Documents/"))]
    );
    assert_eq!(harness.session.location(), "~/Documents/");
    assert_eq!(harness.last_text(), "aboutMe.html\nprojects.html");
}

#[test]
fn unknown_command_prints_hint_and_keeps_location() {
    let mut harness = Harness::new();
    harness.submit("cd Music");
    harness.submit("foobar");
    assert_eq!(
        harness.last_text(),
        "Unknown command: foobar. Type 'help' for a list of available commands."
    );
    assert_eq!(harness.session.location(), "~/Music/");
    assert_eq!(harness.session.history().last().map(String::as_str), Some("foobar"));
}

#[test]
fn tab_extends_to_common_prefix_then_lists() {
    let mut harness = Harness::new();
    harness.type_text("cd ");
    harness.press(TerminalKey::Tab);
    assert_eq!(harness.session.input(), "cd ");
    assert_eq!(
        harness.last_text(),
        "..\nApplications/\nDocuments/\nPictures/\nMusic/\nVideos/"
    );

    harness.type_text("cd d");
    harness.press(TerminalKey::Tab);
    assert_eq!(harness.session.input(), "cd Documents/");
    assert_eq!(harness.session.caret(), "cd Documents/".len());
}

#[test]
fn completion_is_deterministic() {
    let mut first = Harness::new();
    let mut second = Harness::new();
    for harness in [&mut first, &mut second] {
        harness.submit("cd Applications");
        harness.type_text("open ");
        harness.press(TerminalKey::Tab);
    }
    assert_eq!(first.session.lines(), second.session.lines());
    assert_eq!(
        first.last_text(),
        "firefox.app\nterminal.app\nexplorer.app\nmusicplayer.app"
    );
}

#[test]
fn open_from_terminal_reaches_launcher() {
    let mut harness = Harness::new();
    harness.submit("cd Applications");
    harness.type_text("open term");
    harness.press(TerminalKey::Tab);
    assert_eq!(harness.session.input(), "open terminal.app");
    harness.press(TerminalKey::Enter);
    assert_eq!(
        *harness.launcher.launched.borrow(),
        vec![LaunchTarget::App {
            app_id: "terminal".to_string()
        }]
    );
}
