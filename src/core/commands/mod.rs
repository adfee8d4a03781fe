use std::fmt;
use std::io::Write;

use log::debug;

mod builtin;
mod cd;
mod files;
mod list;

pub use builtin::{ExitCommand, HelpCommand};
pub use cd::{CdCommand, PwdCommand};
pub use files::{CatCommand, MkdirCommand, MvCommand, RmCommand, RmdirCommand, TouchCommand};
pub use list::ListCommand;

use super::fs::{FileSystem, FsError};
use super::output::Output;
use super::session::Session;

/// The fixed command vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Pwd,
    Cd,
    Ls,
    Mkdir,
    Rmdir,
    Touch,
    Rm,
    Cat,
    Mv,
    Help,
    Exit,
}

impl Verb {
    pub const ALL: [Verb; 11] = [
        Verb::Pwd,
        Verb::Cd,
        Verb::Ls,
        Verb::Mkdir,
        Verb::Rmdir,
        Verb::Touch,
        Verb::Rm,
        Verb::Cat,
        Verb::Mv,
        Verb::Help,
        Verb::Exit,
    ];

    /// Case-insensitive lookup.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        Self::ALL.into_iter().find(|verb| verb.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Verb::Pwd => "pwd",
            Verb::Cd => "cd",
            Verb::Ls => "ls",
            Verb::Mkdir => "mkdir",
            Verb::Rmdir => "rmdir",
            Verb::Touch => "touch",
            Verb::Rm => "rm",
            Verb::Cat => "cat",
            Verb::Mv => "mv",
            Verb::Help => "help",
            Verb::Exit => "exit",
        }
    }

    pub fn required_args(self) -> usize {
        match self {
            Verb::Cd | Verb::Mkdir | Verb::Rmdir | Verb::Touch | Verb::Rm | Verb::Cat => 1,
            Verb::Mv => 2,
            Verb::Pwd | Verb::Ls | Verb::Help | Verb::Exit => 0,
        }
    }

    /// Verbs whose output may be redirected to a file or piped into `cat`.
    pub fn is_capturable(self) -> bool {
        matches!(self, Verb::Pwd | Verb::Ls)
    }

    fn argument_hint(self) -> &'static str {
        match self {
            Verb::Cd => "a directory path",
            Verb::Mkdir | Verb::Rmdir => "a directory name",
            Verb::Touch | Verb::Rm | Verb::Cat => "a file name",
            Verb::Mv => "a source and a destination",
            Verb::Pwd | Verb::Ls | Verb::Help | Verb::Exit => "no arguments",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One command line split on whitespace runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub args: Vec<String>,
}

impl ParsedCommand {
    /// `None` for a blank line.
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let name = parts.next()?.to_string();
        let args = parts.map(str::to_string).collect();
        Some(Self { name, args })
    }

    pub fn verb(&self) -> Option<Verb> {
        Verb::parse(&self.name)
    }
}

#[derive(Debug)]
pub enum CommandError {
    UnknownCommand(String),
    MissingArgument(Verb),
    Fs { name: String, source: FsError },
    Io(std::io::Error),
}

impl CommandError {
    pub(crate) fn fs(name: &str) -> impl FnOnce(FsError) -> Self + '_ {
        move |source| CommandError::Fs {
            name: name.to_string(),
            source,
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::UnknownCommand(name) => write!(
                f,
                "Unknown command '{}'. Type 'help' for a list of commands.",
                name
            ),
            CommandError::MissingArgument(verb) => {
                write!(f, "'{}' requires {}.", verb, verb.argument_hint())
            }
            CommandError::Fs { name, source } => match source {
                FsError::NotADirectory => write!(f, "'{}' is not a directory.", name),
                FsError::IsADirectory => write!(f, "'{}' is a directory, not a file.", name),
                FsError::SourceMissing => write!(f, "Source '{}' does not exist.", name),
                FsError::Io { action, source } => {
                    write!(f, "Could not {} '{}': {}", action, name, source)
                }
                FsError::NotFound(_) => write!(f, "{}", source),
            },
            CommandError::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::Io(err)
    }
}

/// Everything a verb may touch while it runs.
pub struct CommandContext<'a> {
    pub session: &'a mut Session,
    pub fs: &'a dyn FileSystem,
    pub out: &'a mut Output,
}

pub trait Command {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<(), CommandError>;
}

/// The `index`th argument of `verb`, or the missing-argument error.
fn argument(args: &[String], index: usize, verb: Verb) -> Result<&str, CommandError> {
    if args.len() < verb.required_args() {
        return Err(CommandError::MissingArgument(verb));
    }
    args.get(index)
        .map(String::as_str)
        .ok_or(CommandError::MissingArgument(verb))
}

impl Command for Verb {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<(), CommandError> {
        match self {
            Verb::Pwd => PwdCommand.execute(ctx, args),
            Verb::Cd => CdCommand.execute(ctx, args),
            Verb::Ls => ListCommand.execute(ctx, args),
            Verb::Mkdir => MkdirCommand.execute(ctx, args),
            Verb::Rmdir => RmdirCommand.execute(ctx, args),
            Verb::Touch => TouchCommand.execute(ctx, args),
            Verb::Rm => RmCommand.execute(ctx, args),
            Verb::Cat => CatCommand.execute(ctx, args),
            Verb::Mv => MvCommand.execute(ctx, args),
            Verb::Help => HelpCommand.execute(ctx, args),
            Verb::Exit => ExitCommand.execute(ctx, args),
        }
    }
}

/// Routes parsed commands to their verbs over one filesystem provider.
#[derive(Debug, Clone, Default)]
pub struct CommandExecutor<F> {
    fs: F,
}

impl<F: FileSystem> CommandExecutor<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    pub fn execute(
        &self,
        command: &ParsedCommand,
        session: &mut Session,
        out: &mut Output,
    ) -> Result<(), CommandError> {
        let verb = command
            .verb()
            .ok_or_else(|| CommandError::UnknownCommand(command.name.clone()))?;
        debug!("dispatching {} with {:?}", verb, command.args);

        let mut ctx = CommandContext {
            session,
            fs: &self.fs,
            out,
        };
        verb.execute(&mut ctx, &command.args)?;
        ctx.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fs::LocalFs;
    use crate::core::output::testing::SharedBuffer;
    use std::fs;
    use tempfile::TempDir;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn setup_test_env() -> Result<(CommandExecutor<LocalFs>, Session, Output, SharedBuffer, TempDir), std::io::Error> {
        let temp_dir = TempDir::new()?;
        let console = SharedBuffer::default();
        let out = Output::with_console(Box::new(console.clone()), false);
        let session = Session::new(temp_dir.path());
        Ok((CommandExecutor::new(LocalFs), session, out, console, temp_dir))
    }

    fn command(line: &str) -> ParsedCommand {
        ParsedCommand::parse(line).unwrap_or_else(|| ParsedCommand {
            name: String::new(),
            args: Vec::new(),
        })
    }

    #[test]
    fn test_verb_parse_is_case_insensitive() {
        assert_eq!(Verb::parse("LS"), Some(Verb::Ls));
        assert_eq!(Verb::parse("Exit"), Some(Verb::Exit));
        assert_eq!(Verb::parse("grep"), None);
        assert_eq!(Verb::parse(""), None);
    }

    #[test]
    fn test_parsed_command_splits_whitespace_runs() {
        assert_eq!(ParsedCommand::parse("   \t "), None);
        assert_eq!(
            ParsedCommand::parse("  mv   a.txt\tb.txt "),
            Some(ParsedCommand {
                name: "mv".to_string(),
                args: vec!["a.txt".to_string(), "b.txt".to_string()],
            })
        );
    }

    #[test]
    fn test_unknown_command() -> TestResult {
        let (executor, mut session, mut out, _console, _dir) = setup_test_env()?;

        let result = executor.execute(&command("frobnicate now"), &mut session, &mut out);
        assert!(matches!(result, Err(CommandError::UnknownCommand(name)) if name == "frobnicate"));
        assert!(session.is_running());
        Ok(())
    }

    #[test]
    fn test_missing_arguments_change_nothing() -> TestResult {
        let (executor, mut session, mut out, console, dir) = setup_test_env()?;
        fs::write(dir.path().join("keep.txt"), "x")?;
        let before: Vec<_> = fs::read_dir(dir.path())?.collect::<Result<_, _>>()?;
        let cwd = session.current_dir().to_path_buf();

        for line in ["cd", "mkdir", "rmdir", "touch", "rm", "cat", "mv", "mv keep.txt"] {
            let parsed = command(line);
            let verb = parsed.verb();
            let result = executor.execute(&parsed, &mut session, &mut out);
            assert!(
                matches!(result, Err(CommandError::MissingArgument(v)) if Some(v) == verb),
                "{} should need more arguments",
                line
            );
        }

        let after: Vec<_> = fs::read_dir(dir.path())?.collect::<Result<_, _>>()?;
        assert_eq!(before.len(), after.len());
        assert!(dir.path().join("keep.txt").exists());
        assert_eq!(session.current_dir(), cwd);
        assert_eq!(console.contents(), "");
        Ok(())
    }

    #[test]
    fn test_command_error_display() {
        let errors = vec![
            (
                CommandError::MissingArgument(Verb::Cd),
                "'cd' requires a directory path.",
            ),
            (
                CommandError::MissingArgument(Verb::Mv),
                "'mv' requires a source and a destination.",
            ),
            (
                CommandError::Fs {
                    name: "notes".to_string(),
                    source: FsError::NotADirectory,
                },
                "'notes' is not a directory.",
            ),
            (
                CommandError::Fs {
                    name: "docs".to_string(),
                    source: FsError::IsADirectory,
                },
                "'docs' is a directory, not a file.",
            ),
            (
                CommandError::Fs {
                    name: "a".to_string(),
                    source: FsError::SourceMissing,
                },
                "Source 'a' does not exist.",
            ),
        ];

        for (error, expected) in errors {
            assert_eq!(error.to_string(), expected);
        }
    }
}
