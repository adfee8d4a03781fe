use crate::core::commands::ParsedCommand;
use crate::core::fs::FileSystem;
use crate::error::ShellError;

use super::interpreter::Interpreter;

pub(crate) trait CommandHandler {
    fn execute_command(&mut self, command: &str) -> Result<(), ShellError>;
}

impl<F: FileSystem> CommandHandler for Interpreter<F> {
    fn execute_command(&mut self, command: &str) -> Result<(), ShellError> {
        // Skip empty commands early
        let Some(parsed) = ParsedCommand::parse(command) else {
            return Ok(());
        };

        if let Err(e) = self
            .executor
            .execute(&parsed, &mut self.session, &mut self.output)
        {
            self.output.report_error(e)?;
        }
        Ok(())
    }
}
