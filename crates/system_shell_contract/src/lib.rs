//! Shared shell command contracts used by the command interpreter, the terminal session, and the
//! desktop runtime.
//!
//! This crate is intentionally runtime-agnostic. It defines command metadata, execution requests,
//! completion payloads, command output, and the launch capability handed to the interpreter
//! without depending on Leptos, browser APIs, or desktop runtime internals.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Visibility policy for registered commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommandVisibility {
    /// Command is listed in help and offered by completion.
    Public,
    /// Command is callable but omitted from help and completion.
    Hidden,
}

/// Help metadata for a registered command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpDoc {
    /// Summary sentence.
    pub summary: String,
    /// Usage string displayed in help output.
    pub usage: String,
}

/// Full command registration metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDescriptor {
    /// Verb typed as the first token of a command line.
    pub name: String,
    /// Visibility policy.
    pub visibility: CommandVisibility,
    /// Help metadata.
    pub help: HelpDoc,
}

impl CommandDescriptor {
    /// Builds a public command descriptor.
    pub fn public(name: &str, usage: &str, summary: &str) -> Self {
        Self {
            name: name.to_string(),
            visibility: CommandVisibility::Public,
            help: HelpDoc {
                summary: summary.to_string(),
                usage: usage.to_string(),
            },
        }
    }

    /// Builds a hidden command descriptor.
    pub fn hidden(name: &str, usage: &str, summary: &str) -> Self {
        Self {
            visibility: CommandVisibility::Hidden,
            ..Self::public(name, usage, summary)
        }
    }

    /// Returns whether the command appears in help and completion.
    pub fn is_public(&self) -> bool {
        self.visibility == CommandVisibility::Public
    }
}

/// Shell execution request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellRequest {
    /// Raw input line to parse and execute.
    pub line: String,
    /// Current logical location, for example `~/Documents/`.
    pub cwd: String,
}

/// Output produced by one command execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandOutput {
    /// Literal text. The session still sniffs a leading tag to pick the rendering hint.
    Text(String),
    /// Pre-rendered HTML fragment.
    Html(String),
    /// Reserved result asking the session to empty its visible log.
    Clear,
}

impl CommandOutput {
    /// Empty literal output, used by commands that succeed silently.
    pub fn empty() -> Self {
        Self::Text(String::new())
    }
}

/// Result of one shell execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellResponse {
    /// Displayable command output.
    pub output: CommandOutput,
    /// Location change requested by the command, if any.
    pub cwd: Option<String>,
}

impl ShellResponse {
    /// Builds a response that leaves the location untouched.
    pub fn output(output: CommandOutput) -> Self {
        Self { output, cwd: None }
    }
}

/// Completion request payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Location the candidate set is computed against.
    pub cwd: String,
    /// Tokens preceding the token under the caret.
    pub argv: Vec<String>,
    /// Partial token under the caret.
    pub prefix: String,
}

impl CompletionRequest {
    /// Returns whether the token under the caret is the command verb.
    pub fn completes_verb(&self) -> bool {
        self.argv.is_empty()
    }
}

/// Something the interpreter can ask the desktop to open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaunchTarget {
    /// Launch an application window by application id.
    App {
        /// Application id, for example `terminal`.
        app_id: String,
    },
    /// Open a document in its own viewer window.
    Document {
        /// Document id, used as the window's application id.
        id: String,
        /// Window title.
        title: String,
        /// Document reference or absolute URL.
        source: String,
    },
    /// Show literal text in a viewer window.
    Text {
        /// Entry id, used as the window's application id.
        id: String,
        /// Window title.
        title: String,
        /// Text body.
        body: String,
    },
}

/// Launch capability failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LaunchError {
    /// No registered application matches the requested id.
    #[error("no application registered for `{0}`")]
    UnknownApplication(String),
    /// The desktop has no viewer able to display documents.
    #[error("no document viewer registered")]
    NoDocumentViewer,
}

/// Capability injected into the interpreter for launching desktop windows.
pub trait AppLauncher {
    /// Requests that the desktop opens or restores the target window.
    fn launch(&self, target: LaunchTarget) -> Result<(), LaunchError>;
}

/// Launcher that accepts nothing. Used where no desktop is attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLauncher;

impl AppLauncher for NoopLauncher {
    fn launch(&self, target: LaunchTarget) -> Result<(), LaunchError> {
        Err(match target {
            LaunchTarget::App { app_id } => LaunchError::UnknownApplication(app_id),
            LaunchTarget::Document { .. } | LaunchTarget::Text { .. } => {
                LaunchError::NoDocumentViewer
            }
        })
    }
}

/// Terminal-visible command errors. `Display` is exactly the line shown in the terminal log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    /// `cd` target does not exist under the current location.
    #[error("cd: No such directory: {0}")]
    NoSuchDirectory(String),
    /// `open` target does not exist among the current location's entries.
    #[error("open: {0} not found")]
    NotFound(String),
    /// `open` found the entry but the desktop could not launch it.
    #[error("open: {kind} {name} not found")]
    LaunchTargetMissing {
        /// Entry kind label, `application` or `document`.
        kind: &'static str,
        /// Entry display name.
        name: String,
    },
    /// `open` target names a directory rather than a leaf.
    #[error("open: cannot open {name}: is a directory")]
    CannotOpen {
        /// Directory name as typed.
        name: String,
    },
    /// Verb is not registered.
    #[error("Unknown command: {0}. Type 'help' for a list of available commands.")]
    UnknownCommand(String),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn shell_errors_render_terminal_lines() {
        assert_eq!(
            ShellError::NoSuchDirectory("Foo".to_string()).to_string(),
            "cd: No such directory: Foo"
        );
        assert_eq!(
            ShellError::NotFound("x.txt".to_string()).to_string(),
            "open: x.txt not found"
        );
        assert_eq!(
            ShellError::LaunchTargetMissing {
                kind: "application",
                name: "firefox.app".to_string(),
            }
            .to_string(),
            "open: application firefox.app not found"
        );
        assert_eq!(
            ShellError::CannotOpen {
                name: "Documents".to_string(),
            }
            .to_string(),
            "open: cannot open Documents: is a directory"
        );
        assert_eq!(
            ShellError::UnknownCommand("foobar".to_string()).to_string(),
            "Unknown command: foobar. Type 'help' for a list of available commands."
        );
    }

    #[test]
    fn noop_launcher_rejects_every_target() {
        let launcher = NoopLauncher;
        assert_eq!(
            launcher.launch(LaunchTarget::App {
                app_id: "terminal".to_string()
            }),
            Err(LaunchError::UnknownApplication("terminal".to_string()))
        );
        assert!(launcher
            .launch(LaunchTarget::Document {
                id: "aboutme".to_string(),
                title: "aboutMe.html".to_string(),
                source: "aboutme".to_string(),
            })
            .is_err());
    }

    #[test]
    fn hidden_descriptors_are_not_public() {
        assert!(CommandDescriptor::public("ls", "ls", "List entries").is_public());
        assert!(!CommandDescriptor::hidden("sudo", "sudo", "Nope").is_public());
    }
}
