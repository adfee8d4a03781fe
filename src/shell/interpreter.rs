use log::debug;

use super::classify::{classify, LineKind};
use super::executor::CommandHandler;
use super::pipeline::PipeHandler;
use super::redirect::RedirectHandler;
use crate::core::commands::CommandExecutor;
use crate::core::fs::{FileSystem, LocalFs};
use crate::core::output::Output;
use crate::core::session::Session;
use crate::error::ShellError;

/// Runs one input line at a time against a session.
pub struct Interpreter<F = LocalFs> {
    pub(crate) session: Session,
    pub(crate) output: Output,
    pub(crate) executor: CommandExecutor<F>,
}

impl<F: FileSystem> Interpreter<F> {
    pub fn new(session: Session, output: Output, fs: F) -> Self {
        Self {
            session,
            output,
            executor: CommandExecutor::new(fs),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_running(&self) -> bool {
        self.session.is_running()
    }

    /// Command failures are reported through the output and never returned;
    /// an `Err` here means the output itself could not be written.
    pub fn execute_line(&mut self, line: &str) -> Result<(), ShellError> {
        let line = line.trim();
        let kind = classify(line);
        debug!("{:?} line: {:?}", kind, line);

        match kind {
            LineKind::Redirect => self.handle_redirect(line),
            LineKind::Pipe => self.handle_pipe(line),
            LineKind::Plain => self.execute_command(line),
        }
    }
}
