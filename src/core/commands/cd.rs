use std::io::Write;

use log::debug;

use super::{argument, Command, CommandContext, CommandError, Verb};

#[derive(Debug, Clone, Copy, Default)]
pub struct PwdCommand;

impl Command for PwdCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, _args: &[String]) -> Result<(), CommandError> {
        writeln!(ctx.out, "{}", ctx.session.current_dir().display())?;
        Ok(())
    }
}

/// Moves the session cursor. The cursor is only updated after the target
/// has been confirmed to be a directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct CdCommand;

impl Command for CdCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<(), CommandError> {
        let name = argument(args, 0, Verb::Cd)?;
        let target = ctx.session.resolve(name);

        ctx.fs
            .change_dir(&target)
            .map_err(CommandError::fs(name))?;

        debug!("cd {} -> {}", name, target.display());
        ctx.session.change_dir(target);
        Ok(())
    }
}
