use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::ops::{Deref, DerefMut};

use log::debug;

use crate::highlight::SyntaxHighlighter;

/// Where text goes while a capture is active.
#[derive(Debug)]
pub enum Capture {
    File(File),
    Buffer(Vec<u8>),
}

impl Capture {
    pub fn buffer() -> Self {
        Capture::Buffer(Vec::new())
    }

    /// Captured text for a buffer capture; a file capture yields nothing.
    pub fn into_text(self) -> String {
        match self {
            Capture::Buffer(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Capture::File(_) => String::new(),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Capture::File(_) => "file",
            Capture::Buffer(_) => "buffer",
        }
    }
}

#[derive(Debug)]
pub enum OutputError {
    CaptureActive,
    NoCapture,
    Io(io::Error),
}

impl From<io::Error> for OutputError {
    fn from(err: io::Error) -> Self {
        OutputError::Io(err)
    }
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputError::CaptureActive => write!(f, "output is already being captured"),
            OutputError::NoCapture => write!(f, "no capture is active"),
            OutputError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for OutputError {}

/// The user-visible output stream. Writes go to the console unless a
/// capture is active, in which case they go to the capture instead.
pub struct Output {
    console: Box<dyn Write>,
    capture: Option<Capture>,
    highlighter: SyntaxHighlighter,
}

impl Output {
    pub fn stdout(color: bool) -> Self {
        Self::with_console(Box::new(io::stdout()), color)
    }

    pub fn with_console(console: Box<dyn Write>, color: bool) -> Self {
        Self {
            console,
            capture: None,
            highlighter: SyntaxHighlighter::new(color),
        }
    }

    pub fn is_capturing(&self) -> bool {
        self.capture.is_some()
    }

    /// Send everything written from now on into `capture` until the returned
    /// guard is finished or dropped. Captures do not nest.
    pub fn begin_capture(&mut self, capture: Capture) -> Result<CaptureGuard<'_>, OutputError> {
        if self.capture.is_some() {
            return Err(OutputError::CaptureActive);
        }
        debug!("capturing output into {}", capture.kind());
        self.capture = Some(capture);
        Ok(CaptureGuard { output: self })
    }

    pub fn report_error(&mut self, message: impl fmt::Display) -> io::Result<()> {
        let text = format!("Error: {}", message);
        let text = if self.is_capturing() {
            text
        } else {
            self.highlighter.highlight_error(&text)
        };
        writeln!(self, "{}", text)
    }

    pub fn report_success(&mut self, message: impl fmt::Display) -> io::Result<()> {
        let text = message.to_string();
        let text = if self.is_capturing() {
            text
        } else {
            self.highlighter.highlight_success(&text)
        };
        writeln!(self, "{}", text)
    }

    fn active(&mut self) -> &mut dyn Write {
        match &mut self.capture {
            Some(Capture::File(file)) => file,
            Some(Capture::Buffer(buffer)) => buffer,
            None => &mut *self.console,
        }
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.active().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.active().flush()
    }
}

/// Scoped capture. The console is back in place once this is finished or
/// dropped, whichever happens first.
pub struct CaptureGuard<'a> {
    output: &'a mut Output,
}

impl CaptureGuard<'_> {
    /// Flush and hand back the capture, restoring the console.
    pub fn finish(self) -> Result<Capture, OutputError> {
        let mut capture = self.output.capture.take().ok_or(OutputError::NoCapture)?;
        debug!("restored console after {} capture", capture.kind());
        if let Capture::File(file) = &mut capture {
            file.flush()?;
        }
        Ok(capture)
    }
}

impl Deref for CaptureGuard<'_> {
    type Target = Output;

    fn deref(&self) -> &Output {
        self.output
    }
}

impl DerefMut for CaptureGuard<'_> {
    fn deref_mut(&mut self) -> &mut Output {
        self.output
    }
}

impl Drop for CaptureGuard<'_> {
    fn drop(&mut self) {
        if let Some(capture) = self.output.capture.take() {
            debug!("dropped unfinished {} capture", capture.kind());
        }
    }
}
