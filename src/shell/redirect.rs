use std::fs::{File, OpenOptions};
use std::path::Path;

use log::debug;

use super::interpreter::Interpreter;
use super::pipeline::{capturable, PipelineError};
use crate::core::fs::FileSystem;
use crate::core::output::Capture;
use crate::error::ShellError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectMode {
    /// `>`
    Overwrite,
    /// `>>`
    Append,
}

impl RedirectMode {
    /// Creates the file if needed, then truncates or appends.
    pub fn open(self, path: &Path) -> std::io::Result<File> {
        let mut options = OpenOptions::new();
        options.create(true);
        match self {
            RedirectMode::Overwrite => options.write(true).truncate(true),
            RedirectMode::Append => options.append(true),
        };
        options.open(path)
    }
}

/// `command > target` or `command >> target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectSpec {
    pub command: String,
    pub target: String,
    pub mode: RedirectMode,
}

impl RedirectSpec {
    /// Splits on the first `>>` if the line has one, otherwise on the first `>`.
    pub fn parse(input: &str) -> Result<Self, PipelineError> {
        let (split, mode) = if input.contains(">>") {
            (input.split_once(">>"), RedirectMode::Append)
        } else {
            (input.split_once('>'), RedirectMode::Overwrite)
        };

        let (command, target) = split.ok_or(PipelineError::Syntax("redirection"))?;
        let (command, target) = (command.trim(), target.trim());
        if command.is_empty() || target.is_empty() {
            return Err(PipelineError::Syntax("redirection"));
        }

        Ok(Self {
            command: command.to_string(),
            target: target.to_string(),
            mode,
        })
    }
}

pub(crate) trait RedirectHandler {
    fn handle_redirect(&mut self, line: &str) -> Result<(), ShellError>;
}

impl<F: FileSystem> RedirectHandler for Interpreter<F> {
    fn handle_redirect(&mut self, line: &str) -> Result<(), ShellError> {
        match self.run_redirect(line) {
            Ok(target) => self
                .output
                .report_success(format_args!("Output redirected to {}", target))?,
            Err(e) => self.output.report_error(e)?,
        }
        Ok(())
    }
}

impl<F: FileSystem> Interpreter<F> {
    /// Validate, open the target, run the command into it and restore the
    /// console. Returns the target as typed.
    fn run_redirect(&mut self, line: &str) -> Result<String, PipelineError> {
        let spec = RedirectSpec::parse(line)?;
        // Checked before opening so a rejected command never touches the target.
        let command = capturable(&spec.command)
            .ok_or_else(|| PipelineError::UnsupportedRedirect(spec.command.clone()))?;

        let path = self.session.resolve(&spec.target);
        let file = spec.mode.open(&path).map_err(|source| PipelineError::Open {
            target: spec.target.clone(),
            source,
        })?;
        debug!("redirecting '{}' to {} ({:?})", spec.command, path.display(), spec.mode);

        let mut guard = self.output.begin_capture(Capture::File(file))?;
        if let Err(e) = self.executor.execute(&command, &mut self.session, &mut guard) {
            guard.report_error(e)?;
        }
        guard.finish()?;

        Ok(spec.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_overwrite() -> Result<(), PipelineError> {
        let spec = RedirectSpec::parse("pwd > out.txt")?;
        assert_eq!(
            spec,
            RedirectSpec {
                command: "pwd".to_string(),
                target: "out.txt".to_string(),
                mode: RedirectMode::Overwrite,
            }
        );
        Ok(())
    }

    #[test]
    fn test_parse_append() -> Result<(), PipelineError> {
        let spec = RedirectSpec::parse("ls -a>>listing.txt")?;
        assert_eq!(spec.command, "ls -a");
        assert_eq!(spec.target, "listing.txt");
        assert_eq!(spec.mode, RedirectMode::Append);
        Ok(())
    }

    #[test]
    fn test_malformed_redirection() {
        for line in ["ls >", "> out.txt", ">>", "  >>  ", "pwd >>   "] {
            assert!(
                matches!(RedirectSpec::parse(line), Err(PipelineError::Syntax(_))),
                "{:?} should be rejected",
                line
            );
        }
    }

    #[test]
    fn test_open_modes() -> Result<(), Box<dyn std::error::Error>> {
        use std::io::Write;

        let dir = TempDir::new()?;
        let path = dir.path().join("out.txt");
        fs::write(&path, "old contents\n")?;

        writeln!(RedirectMode::Append.open(&path)?, "more")?;
        assert_eq!(fs::read_to_string(&path)?, "old contents\nmore\n");

        writeln!(RedirectMode::Overwrite.open(&path)?, "fresh")?;
        assert_eq!(fs::read_to_string(&path)?, "fresh\n");

        let created = dir.path().join("new.txt");
        RedirectMode::Overwrite.open(&created)?;
        assert!(created.is_file());
        Ok(())
    }
}
