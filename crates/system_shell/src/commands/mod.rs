//! Built-in command set.

mod filesystem;
mod novelty;

use system_shell_contract::{CommandDescriptor, CommandOutput, ShellError, ShellResponse};

use crate::{ArgumentCompletion, CommandContext, CommandRegistry};

pub use novelty::{blahaj_art, escape_html, neofetch_html, BlahajFlag};

/// Registers every built-in command in help order.
pub fn register_builtins(registry: &mut CommandRegistry) {
    registry.register(
        CommandDescriptor::public("help", "help", "Show this list of commands"),
        ArgumentCompletion::Entries,
        help,
    );
    registry.register(
        CommandDescriptor::public("ls", "ls", "List the entries of the current directory"),
        ArgumentCompletion::Entries,
        filesystem::ls,
    );
    registry.register(
        CommandDescriptor::public("cd", "cd <dir|..>", "Change the current directory"),
        ArgumentCompletion::Directories,
        filesystem::cd,
    );
    registry.register(
        CommandDescriptor::public("clear", "clear", "Clear the terminal"),
        ArgumentCompletion::Entries,
        clear,
    );
    registry.register(
        CommandDescriptor::public("pwd", "pwd", "Print the current directory"),
        ArgumentCompletion::Entries,
        filesystem::pwd,
    );
    registry.register(
        CommandDescriptor::public("echo", "echo <text...>", "Print text"),
        ArgumentCompletion::Entries,
        echo,
    );
    registry.register(
        CommandDescriptor::public("open", "open <name>", "Open an app, document or text file"),
        ArgumentCompletion::Leaves,
        filesystem::open,
    );
    registry.register(
        CommandDescriptor::public("neofetch", "neofetch", "Show system information"),
        ArgumentCompletion::Entries,
        novelty::neofetch,
    );
    registry.register(
        CommandDescriptor::public(
            "blahaj",
            "blahaj [trans|pride|bi|lesbian|ace|enby]",
            "Summon a shark",
        ),
        ArgumentCompletion::Entries,
        novelty::blahaj,
    );
    registry.register(
        CommandDescriptor::hidden("sudo", "sudo <command>", "Run a command as root"),
        ArgumentCompletion::Entries,
        novelty::sudo,
    );
}

fn help(ctx: &CommandContext<'_>) -> Result<ShellResponse, ShellError> {
    let descriptors = ctx.registry.descriptors();
    let width = descriptors
        .iter()
        .map(|descriptor| descriptor.help.usage.chars().count())
        .max()
        .unwrap_or_default();
    let text = descriptors
        .iter()
        .map(|descriptor| {
            format!(
                "{:<width$}  {}",
                descriptor.help.usage, descriptor.help.summary
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    Ok(ShellResponse::output(CommandOutput::Text(text)))
}

fn clear(_: &CommandContext<'_>) -> Result<ShellResponse, ShellError> {
    Ok(ShellResponse::output(CommandOutput::Clear))
}

fn echo(ctx: &CommandContext<'_>) -> Result<ShellResponse, ShellError> {
    Ok(ShellResponse::output(CommandOutput::Text(ctx.args.join(" "))))
}
