use std::{cell::RefCell, rc::Rc};

use platform_host::load_default_vfs;
use pretty_assertions::assert_eq;
use system_shell::ShellEngine;
use system_shell_contract::{
    AppLauncher, CommandOutput, CompletionRequest, LaunchError, LaunchTarget, ShellRequest,
    ShellResponse,
};

#[derive(Default)]
struct RecordingLauncher {
    known_apps: Vec<&'static str>,
    documents: bool,
    launched: RefCell<Vec<LaunchTarget>>,
}

impl AppLauncher for RecordingLauncher {
    fn launch(&self, target: LaunchTarget) -> Result<(), LaunchError> {
        match &target {
            LaunchTarget::App { app_id } if !self.known_apps.iter().any(|known| known == app_id) => {
                return Err(LaunchError::UnknownApplication(app_id.clone()));
            }
            LaunchTarget::Document { .. } if !self.documents => {
                return Err(LaunchError::NoDocumentViewer);
            }
            _ => {}
        }
        self.launched.borrow_mut().push(target);
        Ok(())
    }
}

struct Session {
    engine: ShellEngine,
    cwd: String,
}

impl Session {
    fn new(launcher: Rc<RecordingLauncher>) -> Self {
        let vfs = Rc::new(load_default_vfs().expect("seed"));
        Self {
            engine: ShellEngine::new(vfs, launcher),
            cwd: "~/".to_string(),
        }
    }

    fn run(&mut self, line: &str) -> CommandOutput {
        let ShellResponse { output, cwd } = self.engine.execute(&ShellRequest {
            line: line.to_string(),
            cwd: self.cwd.clone(),
        });
        if let Some(cwd) = cwd {
            self.cwd = cwd;
        }
        output
    }

    fn complete(&self, argv: &[&str], prefix: &str) -> Vec<String> {
        self.engine.complete(&CompletionRequest {
            cwd: self.cwd.clone(),
            argv: argv.iter().map(|token| token.to_string()).collect(),
            prefix: prefix.to_string(),
        })
    }
}

fn text(value: &str) -> CommandOutput {
    CommandOutput::Text(value.to_string())
}

#[test]
fn ls_at_home_lists_configured_directories_in_order() {
    let mut session = Session::new(Rc::default());
    assert_eq!(
        session.run("ls"),
        text("Applications/\nDocuments/\nPictures/\nMusic/\nVideos/")
    );
}

#[test]
fn ls_lists_current_directory_whatever_the_arguments() {
    let mut session = Session::new(Rc::default());
    session.run("cd Documents");
    let listing = session.run("ls");
    assert_eq!(session.run("ls aboutMe.html"), listing);
    assert_eq!(session.run("ls Music"), listing);
    assert_eq!(session.cwd, "~/Documents/");
}

#[test]
fn cd_pwd_round_trip() {
    let mut session = Session::new(Rc::default());
    assert_eq!(session.run("cd Documents"), CommandOutput::empty());
    assert_eq!(session.run("pwd"), text("~/Documents/"));
    assert_eq!(session.run("ls"), text("aboutMe.html\nprojects.html"));
    assert_eq!(session.run("cd .."), CommandOutput::empty());
    assert_eq!(session.run("pwd"), text("~/"));
    assert_eq!(session.run("cd .."), CommandOutput::empty());
    assert_eq!(session.run("pwd"), text("~/"));
}

#[test]
fn cd_accepts_trailing_marker_and_home() {
    let mut session = Session::new(Rc::default());
    session.run("cd Applications/");
    assert_eq!(session.run("pwd"), text("~/Applications/"));
    session.run("cd");
    assert_eq!(session.run("pwd"), text("~/"));
    session.run("cd Music");
    session.run("cd ~");
    assert_eq!(session.run("pwd"), text("~/"));
}

#[test]
fn cd_into_missing_or_leaf_reports_error_and_keeps_location() {
    let mut session = Session::new(Rc::default());
    assert_eq!(
        session.run("cd Downloads"),
        text("cd: No such directory: Downloads")
    );
    session.run("cd Documents");
    assert_eq!(
        session.run("cd aboutMe.html"),
        text("cd: No such directory: aboutMe.html")
    );
    assert_eq!(session.run("pwd"), text("~/Documents/"));
}

#[test]
fn open_launches_apps_by_payload() {
    let launcher = Rc::new(RecordingLauncher {
        known_apps: vec!["terminal"],
        ..RecordingLauncher::default()
    });
    let mut session = Session::new(launcher.clone());
    session.run("cd Applications");
    assert_eq!(session.run("open terminal.app"), CommandOutput::empty());
    assert_eq!(
        session.run("open firefox.app"),
        text("open: application firefox.app not found")
    );
    assert_eq!(
        *launcher.launched.borrow(),
        vec![LaunchTarget::App {
            app_id: "terminal".to_string()
        }]
    );
}

#[test]
fn open_launches_documents_in_viewer() {
    let launcher = Rc::new(RecordingLauncher {
        documents: true,
        ..RecordingLauncher::default()
    });
    let mut session = Session::new(launcher.clone());
    session.run("cd Documents");
    assert_eq!(session.run("open aboutMe.html"), CommandOutput::empty());
    assert_eq!(
        *launcher.launched.borrow(),
        vec![LaunchTarget::Document {
            id: "aboutme".to_string(),
            title: "aboutMe.html".to_string(),
            source: "aboutme".to_string(),
        }]
    );
}

#[test]
fn open_without_viewer_reports_document_missing() {
    let mut session = Session::new(Rc::default());
    session.run("cd Documents");
    assert_eq!(
        session.run("open projects.html"),
        text("open: document projects.html not found")
    );
}

#[test]
fn open_missing_entry_or_directory() {
    let mut session = Session::new(Rc::default());
    assert_eq!(
        session.run("open nothing.txt"),
        text("open: nothing.txt not found")
    );
    assert_eq!(
        session.run("open Documents"),
        text("open: cannot open Documents: is a directory")
    );
}

#[test]
fn unknown_command_leaves_location_unchanged() {
    let mut session = Session::new(Rc::default());
    session.run("cd Music");
    assert_eq!(
        session.run("foobar"),
        text("Unknown command: foobar. Type 'help' for a list of available commands.")
    );
    assert_eq!(session.cwd, "~/Music/");
}

#[test]
fn unknown_command_echoes_the_line_as_typed() {
    let mut session = Session::new(Rc::default());
    assert_eq!(
        session.run("  foobar baz "),
        text("Unknown command:   foobar baz . Type 'help' for a list of available commands.")
    );
}

#[test]
fn verb_completion_filters_by_prefix() {
    let session = Session::new(Rc::default());
    assert_eq!(session.complete(&[], "h"), vec!["help".to_string()]);
    assert_eq!(session.complete(&[], "L"), vec!["ls".to_string()]);
    assert_eq!(
        session.complete(&[], "c"),
        vec!["cd".to_string(), "clear".to_string()]
    );
    assert!(session.complete(&[], "su").is_empty());
}

#[test]
fn argument_completion_depends_on_verb() {
    let mut session = Session::new(Rc::default());
    assert_eq!(
        session.complete(&["cd"], ""),
        vec![
            "..".to_string(),
            "Applications/".to_string(),
            "Documents/".to_string(),
            "Pictures/".to_string(),
            "Music/".to_string(),
            "Videos/".to_string(),
        ]
    );
    assert_eq!(session.complete(&["cat"], "m"), vec!["Music/".to_string()]);
    assert!(session.complete(&["open"], "").is_empty());

    session.run("cd Documents");
    assert_eq!(
        session.complete(&["open"], "a"),
        vec!["aboutMe.html".to_string()]
    );
    assert_eq!(session.complete(&["cd"], ""), vec!["..".to_string()]);
}

#[test]
fn ls_completion_offers_every_entry_like_other_verbs() {
    let mut session = Session::new(Rc::default());
    assert_eq!(session.complete(&["ls"], "d"), vec!["Documents/".to_string()]);

    session.run("cd Documents");
    assert_eq!(
        session.complete(&["ls"], "a"),
        vec!["aboutMe.html".to_string()]
    );
    assert_eq!(session.complete(&["ls"], "a"), session.complete(&["pwd"], "a"));
}
