use std::io::Write;

use log::debug;

use super::interpreter::Interpreter;
use crate::core::commands::{ParsedCommand, Verb};
use crate::core::fs::FileSystem;
use crate::core::output::{Capture, OutputError};
use crate::error::ShellError;

#[derive(Debug)]
pub enum PipelineError {
    Syntax(&'static str),
    UnsupportedRedirect(String),
    UnsupportedPipe(String),
    UnsupportedSecond(String),
    Open {
        target: String,
        source: std::io::Error,
    },
    Capture(OutputError),
}

impl std::fmt::Display for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(what) => write!(f, "Invalid syntax for {}.", what),
            Self::UnsupportedRedirect(cmd) => write!(
                f,
                "'{}' is unsupported for redirection; only pwd and ls can be redirected.",
                cmd
            ),
            Self::UnsupportedPipe(cmd) => write!(
                f,
                "'{}' is unsupported for piping; only pwd and ls can be piped.",
                cmd
            ),
            Self::UnsupportedSecond(cmd) => write!(
                f,
                "Unsupported second command '{}' for piping; only cat is supported.",
                cmd
            ),
            Self::Open { target, source } => {
                write!(f, "Could not redirect output to '{}': {}", target, source)
            }
            Self::Capture(err) => write!(f, "Capture error: {}", err),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<OutputError> for PipelineError {
    fn from(err: OutputError) -> Self {
        PipelineError::Capture(err)
    }
}

impl From<std::io::Error> for PipelineError {
    fn from(err: std::io::Error) -> Self {
        PipelineError::Capture(OutputError::Io(err))
    }
}

/// The left-hand side of `>`, `>>` or `|` must be exactly `pwd` or `ls`:
/// lowercase, no arguments. `ls` then runs with its defaults.
pub(crate) fn capturable(text: &str) -> Option<ParsedCommand> {
    let text = text.trim();
    let verb = Verb::ALL
        .into_iter()
        .filter(|verb| verb.is_capturable())
        .find(|verb| verb.name() == text)?;
    Some(ParsedCommand {
        name: verb.name().to_string(),
        args: Vec::new(),
    })
}

/// `first | second`, split on the first `|`. Further `|` characters stay in
/// `second` untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipeSpec {
    pub first: String,
    pub second: String,
}

impl PipeSpec {
    pub fn parse(input: &str) -> Result<Self, PipelineError> {
        let (first, second) = input
            .split_once('|')
            .ok_or(PipelineError::Syntax("piping"))?;
        let (first, second) = (first.trim(), second.trim());
        if first.is_empty() || second.is_empty() {
            return Err(PipelineError::Syntax("piping"));
        }

        Ok(Self {
            first: first.to_string(),
            second: second.to_string(),
        })
    }

    /// Only the leading token of the second stage matters, and it must be
    /// `cat` as typed.
    pub fn second_is_cat(&self) -> bool {
        self.second.split_whitespace().next() == Some(Verb::Cat.name())
    }
}

pub(crate) trait PipeHandler {
    fn handle_pipe(&mut self, line: &str) -> Result<(), ShellError>;
}

impl<F: FileSystem> PipeHandler for Interpreter<F> {
    fn handle_pipe(&mut self, line: &str) -> Result<(), ShellError> {
        match self.run_pipe(line) {
            Ok(text) => {
                self.output.write_all(text.as_bytes())?;
                self.output.flush()?;
            }
            Err(e) => self.output.report_error(e)?,
        }
        Ok(())
    }
}

impl<F: FileSystem> Interpreter<F> {
    /// Run the first stage into a buffer and return what it printed.
    fn run_pipe(&mut self, line: &str) -> Result<String, PipelineError> {
        let spec = PipeSpec::parse(line)?;
        let first = capturable(&spec.first)
            .ok_or_else(|| PipelineError::UnsupportedPipe(spec.first.clone()))?;
        if !spec.second_is_cat() {
            return Err(PipelineError::UnsupportedSecond(spec.second.clone()));
        }

        let mut guard = self.output.begin_capture(Capture::buffer())?;
        if let Err(e) = self.executor.execute(&first, &mut self.session, &mut guard) {
            guard.report_error(e)?;
        }
        let text = guard.finish()?.into_text();

        debug!("pipe handed {} bytes from '{}' to cat", text.len(), spec.first);
        Ok(text)
    }
}
