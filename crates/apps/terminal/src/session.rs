//! Terminal session state machine.
//!
//! [`TerminalSession`] is the single owner of one terminal window's location, visible log,
//! command history, history cursor, draft and input field. Every keypress the component
//! forwards goes through [`TerminalSession::handle_key`], which mutates the session and returns
//! the DOM follow-ups (focus, caret placement, scrolling) the component must schedule after
//! the render commits.

use platform_host::HOME_LOCATION;
use system_shell::{longest_common_prefix, ShellEngine};
use system_shell_contract::{CommandOutput, CompletionRequest, ShellRequest};

/// User label rendered before every prompt.
pub const PROMPT_USER: &str = "user@nygosaki";

/// Prompt text shown before input at `location`.
pub fn prompt(location: &str) -> String {
    format!("{PROMPT_USER}:{location}$")
}

/// Origin of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Echo of a submitted command.
    Input,
    /// Command output.
    Output,
}

/// How a log line's text is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderHint {
    /// Literal text.
    Plain,
    /// Trusted HTML fragment.
    Html,
}

/// One visible log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalLine {
    /// Render key. Increases monotonically; array order is authoritative.
    pub id: u64,
    /// Line origin.
    pub kind: LineKind,
    /// Line text.
    pub text: String,
    /// Rendering hint.
    pub hint: RenderHint,
    /// Location at commit time, for input lines.
    pub location: Option<String>,
}

/// Keys the session reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalKey {
    /// Submit the input.
    Enter,
    /// Older history entry.
    ArrowUp,
    /// Newer history entry, or back to the draft.
    ArrowDown,
    /// Complete the token under the caret.
    Tab,
    /// Anything else; left to the text field.
    Other,
}

impl TerminalKey {
    /// Maps a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Self {
        match key {
            "Enter" => Self::Enter,
            "ArrowUp" => Self::ArrowUp,
            "ArrowDown" => Self::ArrowDown,
            "Tab" => Self::Tab,
            _ => Self::Other,
        }
    }
}

/// Deferred DOM work requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    /// Focus the input field.
    FocusInput,
    /// Place the field's caret at [`TerminalSession::caret`].
    SyncCaret,
    /// Scroll the input row into view.
    ScrollToEnd,
}

/// Result of one key transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyOutcome {
    /// Whether the browser's default key action must be suppressed.
    pub prevent_default: bool,
    /// Follow-ups to run after the DOM reflects the new state, in order.
    pub follow_ups: Vec<FollowUp>,
}

impl KeyOutcome {
    fn prevented(follow_ups: Vec<FollowUp>) -> Self {
        Self {
            prevent_default: true,
            follow_ups,
        }
    }
}

/// State of one terminal window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalSession {
    location: String,
    lines: Vec<TerminalLine>,
    history: Vec<String>,
    history_cursor: Option<usize>,
    draft: String,
    input: String,
    caret: usize,
    next_line_id: u64,
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self::new(HOME_LOCATION)
    }
}

impl TerminalSession {
    /// Creates an empty session at `location`.
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            lines: Vec::new(),
            history: Vec::new(),
            history_cursor: None,
            draft: String::new(),
            input: String::new(),
            caret: 0,
            next_line_id: 1,
        }
    }

    /// Current location.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Visible log, oldest first.
    pub fn lines(&self) -> &[TerminalLine] {
        &self.lines
    }

    /// Submitted commands, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// History index being shown, or `None` while editing the live draft.
    pub fn history_cursor(&self) -> Option<usize> {
        self.history_cursor
    }

    /// Input field content.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Caret position as a byte offset into [`Self::input`].
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Applies a direct edit of the input field. Leaves history browsing.
    pub fn set_input(&mut self, value: impl Into<String>, caret: usize) {
        self.input = value.into();
        self.set_caret(caret);
        self.history_cursor = None;
    }

    /// Moves the caret, clamped to the input and snapped back to a char boundary.
    pub fn set_caret(&mut self, caret: usize) {
        let mut caret = caret.min(self.input.len());
        while !self.input.is_char_boundary(caret) {
            caret -= 1;
        }
        self.caret = caret;
    }

    /// Runs one key transition.
    pub fn handle_key(&mut self, key: TerminalKey, shell: &ShellEngine) -> KeyOutcome {
        match key {
            TerminalKey::Enter => self.submit(shell),
            TerminalKey::ArrowUp => self.history_up(),
            TerminalKey::ArrowDown => self.history_down(),
            TerminalKey::Tab => self.complete(shell),
            TerminalKey::Other => KeyOutcome::default(),
        }
    }

    fn push_line(&mut self, kind: LineKind, text: String, hint: RenderHint, location: Option<String>) {
        let id = self.next_line_id;
        self.next_line_id += 1;
        self.lines.push(TerminalLine {
            id,
            kind,
            text,
            hint,
            location,
        });
    }

    fn replace_input(&mut self, value: String) {
        self.caret = value.len();
        self.input = value;
    }

    /// Commits the input: echoes it, records history, runs the command and appends its output.
    pub fn submit(&mut self, shell: &ShellEngine) -> KeyOutcome {
        let value = std::mem::take(&mut self.input);
        self.caret = 0;
        self.push_line(
            LineKind::Input,
            value.clone(),
            RenderHint::Plain,
            Some(self.location.clone()),
        );

        let trimmed = value.trim();
        if !trimmed.is_empty() && self.history.last().map(String::as_str) != Some(trimmed) {
            self.history.push(trimmed.to_string());
        }
        self.history_cursor = None;
        self.draft.clear();

        let response = shell.execute(&ShellRequest {
            line: value,
            cwd: self.location.clone(),
        });
        if let Some(cwd) = response.cwd {
            self.location = cwd;
        }
        match response.output {
            CommandOutput::Clear => self.lines.clear(),
            CommandOutput::Html(html) => self.push_line(LineKind::Output, html, RenderHint::Html, None),
            CommandOutput::Text(text) => {
                let hint = if starts_with_tag(&text) {
                    RenderHint::Html
                } else {
                    RenderHint::Plain
                };
                self.push_line(LineKind::Output, text, hint, None);
            }
        }

        KeyOutcome {
            prevent_default: false,
            follow_ups: vec![FollowUp::FocusInput, FollowUp::ScrollToEnd],
        }
    }

    /// Shows the previous history entry, saving the draft when browsing starts.
    pub fn history_up(&mut self) -> KeyOutcome {
        let Some(last) = self.history.len().checked_sub(1) else {
            return KeyOutcome::prevented(Vec::new());
        };
        let cursor = match self.history_cursor {
            None => {
                self.draft = self.input.clone();
                last
            }
            Some(index) => index.saturating_sub(1),
        };
        self.history_cursor = Some(cursor);
        self.replace_input(self.history[cursor].clone());
        KeyOutcome::prevented(vec![FollowUp::FocusInput, FollowUp::SyncCaret])
    }

    /// Shows the next history entry, or restores the draft past the newest one.
    pub fn history_down(&mut self) -> KeyOutcome {
        let Some(index) = self.history_cursor else {
            return KeyOutcome::prevented(Vec::new());
        };
        if index + 1 >= self.history.len() {
            self.history_cursor = None;
            let draft = std::mem::take(&mut self.draft);
            self.replace_input(draft);
        } else {
            self.history_cursor = Some(index + 1);
            self.replace_input(self.history[index + 1].clone());
        }
        KeyOutcome::prevented(vec![FollowUp::FocusInput, FollowUp::SyncCaret])
    }

    /// Completes the token under the caret.
    pub fn complete(&mut self, shell: &ShellEngine) -> KeyOutcome {
        let before = &self.input[..self.caret];
        let token_start = before.rfind(' ').map(|idx| idx + 1).unwrap_or(0);
        let token = before[token_start..].to_string();
        let argv: Vec<String> = before[..token_start]
            .split_whitespace()
            .map(str::to_string)
            .collect();
        let request = CompletionRequest {
            cwd: self.location.clone(),
            argv,
            prefix: token.clone(),
        };
        let completes_verb = request.completes_verb();
        let matches = shell.complete(&request);

        let replacement = match matches.as_slice() {
            [] => return KeyOutcome::prevented(Vec::new()),
            [only] if completes_verb => format!("{only} "),
            [only] => only.clone(),
            many => {
                let prefix = longest_common_prefix(many);
                if prefix.chars().count() > token.chars().count() {
                    prefix
                } else {
                    self.push_line(LineKind::Output, many.join("\n"), RenderHint::Plain, None);
                    return KeyOutcome::prevented(vec![FollowUp::ScrollToEnd]);
                }
            }
        };

        let mut input = String::with_capacity(self.input.len() + replacement.len());
        input.push_str(&self.input[..token_start]);
        input.push_str(&replacement);
        input.push_str(&self.input[self.caret..]);
        self.caret = token_start + replacement.len();
        self.input = input;
        self.history_cursor = None;
        KeyOutcome::prevented(vec![FollowUp::FocusInput, FollowUp::SyncCaret])
    }
}

/// Returns `true` when `text` begins with an HTML tag such as `<pre>` or `</b>`.
pub fn starts_with_tag(text: &str) -> bool {
    let Some(rest) = text.trim_start().strip_prefix('<') else {
        return false;
    };
    let rest = rest.strip_prefix('/').unwrap_or(rest);
    rest.chars().next().is_some_and(|ch| ch.is_ascii_alphabetic()) && rest.contains('>')
}

/// Converts a UTF-16 offset (as reported by `selectionStart`) into a byte offset.
pub fn utf16_to_byte_offset(text: &str, utf16: usize) -> usize {
    let mut units = 0;
    for (byte, ch) in text.char_indices() {
        if units >= utf16 {
            return byte;
        }
        units += ch.len_utf16();
    }
    text.len()
}

/// Converts a byte offset into the UTF-16 offset expected by `setSelectionRange`.
pub fn byte_to_utf16_offset(text: &str, byte: usize) -> usize {
    text.char_indices()
        .take_while(|(idx, _)| *idx < byte)
        .map(|(_, ch)| ch.len_utf16())
        .sum()
}
