use std::{borrow::Cow, path::PathBuf};

use super::{command::CommandCompleter, path::PathCompleter};
use crate::highlight::SyntaxHighlighter;

use rustyline::{
    completion::{Completer, Pair},
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

#[derive(Clone)]
pub struct ShellCompleter {
    command_completer: CommandCompleter,
    path_completer: PathCompleter,
    highlighter: SyntaxHighlighter,
}

impl Default for ShellCompleter {
    fn default() -> Self {
        Self::new(SyntaxHighlighter::default())
    }
}

impl ShellCompleter {
    pub fn new(highlighter: SyntaxHighlighter) -> Self {
        ShellCompleter {
            command_completer: CommandCompleter::new(),
            path_completer: PathCompleter::new(PathBuf::from(".")),
            highlighter,
        }
    }

    pub fn set_current_dir(&mut self, dir: PathBuf) {
        self.path_completer.set_base(dir);
    }

    /// Commands start a line and follow a `|`; everything else is a path.
    fn completions(&self, line_up_to_cursor: &str, pos: usize) -> (usize, Vec<Pair>) {
        let start = line_up_to_cursor
            .char_indices()
            .rev()
            .find(|&(_, c)| c.is_whitespace() || c == '|' || c == '>')
            .map_or(0, |(i, c)| i + c.len_utf8());
        let word = &line_up_to_cursor[start..pos];

        let before = line_up_to_cursor[..start].trim_end();
        if before.is_empty() || before.ends_with('|') {
            (start, self.command_completer.complete_command(word))
        } else {
            (start, self.path_completer.complete_path(word))
        }
    }
}

impl Helper for ShellCompleter {}
impl Highlighter for ShellCompleter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Owned(self.highlighter.highlight_command(line))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        self.highlighter.is_enabled()
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(self.highlighter.highlight_hint(hint))
    }
}
impl Hinter for ShellCompleter {
    type Hint = String;
}
impl Validator for ShellCompleter {}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_up_to_cursor = &line[..pos];
        Ok(self.completions(line_up_to_cursor, pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn replacements(pairs: Vec<Pair>) -> Vec<String> {
        pairs.into_iter().map(|pair| pair.replacement).collect()
    }

    #[test]
    fn test_first_word_completes_commands() {
        let completer = ShellCompleter::new(SyntaxHighlighter::plain());

        let (start, pairs) = completer.completions("mk", 2);
        assert_eq!(start, 0);
        assert_eq!(replacements(pairs), vec!["mkdir "]);

        let (start, pairs) = completer.completions("ls | ca", 7);
        assert_eq!(start, 5);
        assert_eq!(replacements(pairs), vec!["cat "]);
    }

    #[test]
    fn test_later_words_complete_paths() -> Result<(), std::io::Error> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join("report.txt"), "")?;

        let mut completer = ShellCompleter::new(SyntaxHighlighter::plain());
        completer.set_current_dir(dir.path().to_path_buf());

        let (start, pairs) = completer.completions("cat re", 6);
        assert_eq!(start, 4);
        assert_eq!(replacements(pairs), vec!["report.txt "]);

        let (start, pairs) = completer.completions("pwd >rep", 8);
        assert_eq!(start, 5);
        assert_eq!(replacements(pairs), vec!["report.txt "]);
        Ok(())
    }
}
