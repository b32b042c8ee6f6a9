use platform_host::{
    is_home, join_location, parent_location, LeafKind, VfsLeaf, HOME, HOME_LOCATION,
};
use system_shell_contract::{CommandOutput, LaunchTarget, ShellError, ShellResponse};

use crate::{completion::PARENT_DIRECTORY, CommandContext};

pub(super) fn ls(ctx: &CommandContext<'_>) -> Result<ShellResponse, ShellError> {
    let text = match ctx.vfs.list(ctx.cwd) {
        Ok(entries) => entries.join("\n"),
        Err(_) => format!("ls: cannot access {}: No such directory", ctx.cwd),
    };
    Ok(ShellResponse::output(CommandOutput::Text(text)))
}

pub(super) fn pwd(ctx: &CommandContext<'_>) -> Result<ShellResponse, ShellError> {
    Ok(ShellResponse::output(CommandOutput::Text(ctx.cwd.to_string())))
}

pub(super) fn cd(ctx: &CommandContext<'_>) -> Result<ShellResponse, ShellError> {
    let next = match ctx.args.first().copied() {
        None | Some(HOME) | Some(HOME_LOCATION) => HOME_LOCATION.to_string(),
        Some(PARENT_DIRECTORY) if is_home(ctx.cwd) => {
            return Ok(ShellResponse::output(CommandOutput::empty()));
        }
        Some(PARENT_DIRECTORY) => parent_location(ctx.cwd),
        Some(name) => {
            let candidate = join_location(ctx.cwd, name);
            ctx.vfs
                .resolve(&candidate)
                .map_err(|_| ShellError::NoSuchDirectory(name.to_string()))?;
            candidate
        }
    };
    Ok(ShellResponse {
        output: CommandOutput::empty(),
        cwd: Some(next),
    })
}

pub(super) fn open(ctx: &CommandContext<'_>) -> Result<ShellResponse, ShellError> {
    let Some(name) = ctx.args.first().copied() else {
        return Ok(ShellResponse::output(CommandOutput::Text(
            "usage: open <name>".to_string(),
        )));
    };
    let node = ctx
        .vfs
        .resolve(ctx.cwd)
        .map_err(|_| ShellError::NotFound(name.to_string()))?;

    match node.find_leaf(name) {
        Some(leaf) => open_leaf(ctx, leaf),
        None if node.child(name).is_some() => Err(ShellError::CannotOpen {
            name: name.to_string(),
        }),
        None => Err(ShellError::NotFound(name.to_string())),
    }
}

fn open_leaf(ctx: &CommandContext<'_>, leaf: &VfsLeaf) -> Result<ShellResponse, ShellError> {
    let target = match leaf.kind {
        LeafKind::Txt => {
            return Ok(ShellResponse::output(CommandOutput::Text(
                leaf.payload.clone(),
            )))
        }
        LeafKind::App => LaunchTarget::App {
            app_id: leaf.payload.clone(),
        },
        LeafKind::Document => LaunchTarget::Document {
            id: leaf.id.clone(),
            title: leaf.name.clone(),
            source: leaf.payload.clone(),
        },
    };
    ctx.launcher
        .launch(target)
        .map_err(|_| ShellError::LaunchTargetMissing {
            kind: leaf.kind.label(),
            name: leaf.name.clone(),
        })?;
    Ok(ShellResponse::output(CommandOutput::empty()))
}
