use std::io::Write;

use super::{Command, CommandContext, CommandError};

const HELP_TEXT: &[(&str, &str)] = &[
    ("pwd", "Print working directory"),
    ("cd <directory>", "Change directory"),
    ("ls [-a] [-r]", "List directory contents (-a: include hidden, -r: reverse)"),
    ("mkdir <name>", "Create directory"),
    ("rmdir <name>", "Remove directory"),
    ("touch <name>", "Create file"),
    ("rm <name>", "Remove file"),
    ("cat <name>", "Display file contents"),
    ("mv <source> <destination>", "Move or rename a file or directory"),
    ("<cmd> > <file>", "Redirect output of pwd or ls to a file (overwrite)"),
    ("<cmd> >> <file>", "Redirect output of pwd or ls to a file (append)"),
    ("<cmd> | cat", "Pipe the output of pwd or ls into cat"),
    ("exit", "Exit the CLI"),
    ("help", "Display this help message"),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct HelpCommand;

impl Command for HelpCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, _args: &[String]) -> Result<(), CommandError> {
        writeln!(ctx.out, "Available Commands:")?;
        for (usage, description) in HELP_TEXT {
            writeln!(ctx.out, "{} - {}", usage, description)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExitCommand;

impl Command for ExitCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, _args: &[String]) -> Result<(), CommandError> {
        writeln!(ctx.out, "Exiting CLI. Goodbye!")?;
        ctx.session.stop();
        Ok(())
    }
}
