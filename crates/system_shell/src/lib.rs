//! Runtime-agnostic command interpreter for the desktop terminal.
//!
//! [`ShellEngine`] parses one input line into a verb and arguments, runs the matching built-in
//! command against the read-only [`Vfs`] and the caller's current location, and returns a
//! displayable [`ShellResponse`]. Location changes are returned rather than applied, and
//! launches go through the injected [`AppLauncher`] capability.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod commands;
pub mod completion;

use std::rc::Rc;

use platform_host::Vfs;
use system_shell_contract::{
    AppLauncher, CommandDescriptor, CommandOutput, CompletionRequest, ShellError, ShellRequest,
    ShellResponse,
};

pub use completion::{filter_candidates, longest_common_prefix};

/// Synchronous command handler.
pub type CommandHandler = fn(&CommandContext<'_>) -> Result<ShellResponse, ShellError>;

/// Candidate source used when completing a command's arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentCompletion {
    /// `..` followed by child directory names of the current location.
    Directories,
    /// Leaf names of the current location.
    Leaves,
    /// Every entry of the current location.
    Entries,
}

/// Execution context handed to command handlers.
pub struct CommandContext<'a> {
    /// Raw input line as submitted.
    pub line: &'a str,
    /// Whitespace-separated tokens after the verb.
    pub args: &'a [&'a str],
    /// Current location, for example `~/Documents/`.
    pub cwd: &'a str,
    /// Read-only file system.
    pub vfs: &'a Vfs,
    /// Launch capability.
    pub launcher: &'a dyn AppLauncher,
    /// Registry the command was resolved from.
    pub registry: &'a CommandRegistry,
}

#[derive(Clone)]
struct RegisteredCommand {
    descriptor: CommandDescriptor,
    completion: ArgumentCompletion,
    handler: CommandHandler,
}

/// Ordered command registry.
#[derive(Clone, Default)]
pub struct CommandRegistry {
    commands: Vec<RegisteredCommand>,
}

impl CommandRegistry {
    /// Registry holding every built-in command.
    pub fn builtin() -> Self {
        let mut registry = Self::default();
        commands::register_builtins(&mut registry);
        registry
    }

    /// Registers one command. A later registration with the same name replaces the earlier one.
    pub fn register(
        &mut self,
        descriptor: CommandDescriptor,
        completion: ArgumentCompletion,
        handler: CommandHandler,
    ) {
        self.commands
            .retain(|registered| registered.descriptor.name != descriptor.name);
        self.commands.push(RegisteredCommand {
            descriptor,
            completion,
            handler,
        });
    }

    fn find(&self, name: &str) -> Option<&RegisteredCommand> {
        self.commands
            .iter()
            .find(|registered| registered.descriptor.name == name)
    }

    /// Descriptors of public commands in registration order.
    pub fn descriptors(&self) -> Vec<CommandDescriptor> {
        self.commands
            .iter()
            .filter(|registered| registered.descriptor.is_public())
            .map(|registered| registered.descriptor.clone())
            .collect()
    }

    /// Public verb names in registration order.
    pub fn verbs(&self) -> Vec<String> {
        self.commands
            .iter()
            .filter(|registered| registered.descriptor.is_public())
            .map(|registered| registered.descriptor.name.clone())
            .collect()
    }

    fn argument_completion(&self, name: &str) -> ArgumentCompletion {
        self.find(name)
            .map(|registered| registered.completion)
            .unwrap_or(ArgumentCompletion::Entries)
    }
}

/// Command interpreter bound to one file system and one launcher.
#[derive(Clone)]
pub struct ShellEngine {
    registry: CommandRegistry,
    vfs: Rc<Vfs>,
    launcher: Rc<dyn AppLauncher>,
}

impl ShellEngine {
    /// Creates an engine with the built-in command set.
    pub fn new(vfs: Rc<Vfs>, launcher: Rc<dyn AppLauncher>) -> Self {
        Self::with_registry(CommandRegistry::builtin(), vfs, launcher)
    }

    /// Creates an engine with a custom registry.
    pub fn with_registry(
        registry: CommandRegistry,
        vfs: Rc<Vfs>,
        launcher: Rc<dyn AppLauncher>,
    ) -> Self {
        Self {
            registry,
            vfs,
            launcher,
        }
    }

    /// Command registry.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Parses and runs one line.
    ///
    /// Never fails: command errors become their terminal line as [`CommandOutput::Text`].
    pub fn execute(&self, request: &ShellRequest) -> ShellResponse {
        let tokens: Vec<&str> = request.line.split_whitespace().collect();
        let Some((verb, args)) = tokens.split_first() else {
            return ShellResponse::output(CommandOutput::empty());
        };

        let result = match self.registry.find(verb) {
            Some(registered) => (registered.handler)(&CommandContext {
                line: &request.line,
                args,
                cwd: &request.cwd,
                vfs: &self.vfs,
                launcher: self.launcher.as_ref(),
                registry: &self.registry,
            }),
            None => Err(ShellError::UnknownCommand(request.line.clone())),
        };

        result.unwrap_or_else(|err| ShellResponse::output(CommandOutput::Text(err.to_string())))
    }

    /// Completion candidates for the token under the caret, filtered by case-insensitive prefix.
    pub fn complete(&self, request: &CompletionRequest) -> Vec<String> {
        let candidates = match request.argv.first() {
            None => self.registry.verbs(),
            Some(verb) => completion::argument_candidates(
                &self.vfs,
                &request.cwd,
                self.registry.argument_completion(verb),
            ),
        };
        filter_candidates(candidates, &request.prefix)
    }
}
