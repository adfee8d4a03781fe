/// How a raw input line is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Contains `>` (which includes `>>`).
    Redirect,
    /// Contains `|` and no `>`.
    Pipe,
    Plain,
}

/// Decide the execution path before any tokenizing. `>` wins over `|`, so
/// a line holding both is always a redirection.
pub fn classify(line: &str) -> LineKind {
    if line.contains('>') {
        LineKind::Redirect
    } else if line.contains('|') {
        LineKind::Pipe
    } else {
        LineKind::Plain
    }
}
