use std::io::Write;

use super::{argument, Command, CommandContext, CommandError, Verb};

#[derive(Debug, Clone, Copy, Default)]
pub struct MkdirCommand;

impl Command for MkdirCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<(), CommandError> {
        let name = argument(args, 0, Verb::Mkdir)?;
        ctx.fs
            .make_dir(&ctx.session.resolve(name))
            .map_err(CommandError::fs(name))?;
        ctx.out.report_success(format_args!("Directory created: {}", name))?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RmdirCommand;

impl Command for RmdirCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<(), CommandError> {
        let name = argument(args, 0, Verb::Rmdir)?;
        ctx.fs
            .remove_dir(&ctx.session.resolve(name))
            .map_err(CommandError::fs(name))?;
        ctx.out.report_success(format_args!("Directory removed: {}", name))?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TouchCommand;

impl Command for TouchCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<(), CommandError> {
        let name = argument(args, 0, Verb::Touch)?;
        ctx.fs
            .create_file(&ctx.session.resolve(name))
            .map_err(CommandError::fs(name))?;
        ctx.out.report_success(format_args!("File created: {}", name))?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RmCommand;

impl Command for RmCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<(), CommandError> {
        let name = argument(args, 0, Verb::Rm)?;
        ctx.fs
            .remove_file(&ctx.session.resolve(name))
            .map_err(CommandError::fs(name))?;
        ctx.out.report_success(format_args!("File removed: {}", name))?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CatCommand;

impl Command for CatCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<(), CommandError> {
        let name = argument(args, 0, Verb::Cat)?;
        let lines = ctx
            .fs
            .read_lines(&ctx.session.resolve(name))
            .map_err(CommandError::fs(name))?;

        for line in lines {
            writeln!(ctx.out, "{}", line)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MvCommand;

impl Command for MvCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<(), CommandError> {
        let source = argument(args, 0, Verb::Mv)?;
        let destination = argument(args, 1, Verb::Mv)?;

        ctx.fs
            .move_or_rename(&ctx.session.resolve(source), &ctx.session.resolve(destination))
            .map_err(CommandError::fs(source))?;
        ctx.out.report_success(format_args!(
            "Moved/Renamed '{}' to '{}'.",
            source, destination
        ))?;
        Ok(())
    }
}
