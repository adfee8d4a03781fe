use std::{
    fs,
    path::{Path, PathBuf},
};

use rustyline::completion::Pair;

/// Completes file names relative to the session's current directory, which
/// is not necessarily the process working directory.
#[derive(Debug, Clone)]
pub struct PathCompleter {
    base: PathBuf,
}

impl PathCompleter {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    pub fn set_base(&mut self, base: PathBuf) {
        self.base = base;
    }

    pub fn complete_path(&self, incomplete: &str) -> Vec<Pair> {
        let (typed_dir, file_prefix) = Self::parse_path_input(incomplete);
        let dir_to_search = self.base.join(&typed_dir);

        let mut matches = Vec::new();
        if let Ok(entries) = fs::read_dir(&dir_to_search) {
            for entry in entries.filter_map(Result::ok) {
                let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                    continue;
                };
                if !name.starts_with(&file_prefix) {
                    continue;
                }
                // Dotfiles only when asked for.
                if name.starts_with('.') && !file_prefix.starts_with('.') {
                    continue;
                }
                matches.push(Self::create_completion_pair(&name, &entry.path(), &typed_dir));
            }
        }

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        matches
    }

    /// Split what was typed into the directory part (as typed) and the
    /// partial file name.
    fn parse_path_input(incomplete: &str) -> (String, String) {
        match incomplete.rfind('/') {
            Some(slash) => (
                incomplete[..=slash].to_string(),
                incomplete[slash + 1..].to_string(),
            ),
            None => (String::new(), incomplete.to_string()),
        }
    }

    fn create_completion_pair(name: &str, path: &Path, typed_dir: &str) -> Pair {
        let relative_path = format!("{}{}", typed_dir, name);

        if path.is_dir() {
            Pair {
                display: format!("{}/", name),
                replacement: format!("{}/", relative_path),
            }
        } else {
            Pair {
                display: name.to_string(),
                replacement: format!("{} ", relative_path),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn replacements(pairs: Vec<Pair>) -> Vec<String> {
        pairs.into_iter().map(|pair| pair.replacement).collect()
    }

    #[test]
    fn test_parse_path_input() {
        assert_eq!(
            PathCompleter::parse_path_input("docs/no"),
            ("docs/".to_string(), "no".to_string())
        );
        assert_eq!(
            PathCompleter::parse_path_input("notes"),
            (String::new(), "notes".to_string())
        );
        assert_eq!(
            PathCompleter::parse_path_input("/etc/"),
            ("/etc/".to_string(), String::new())
        );
    }

    #[test]
    fn test_completes_relative_to_base() -> Result<(), std::io::Error> {
        let dir = TempDir::new()?;
        fs::create_dir(dir.path().join("docs"))?;
        fs::write(dir.path().join("docs").join("notes.txt"), "")?;
        fs::write(dir.path().join("data.csv"), "")?;
        fs::write(dir.path().join(".dotfile"), "")?;

        let completer = PathCompleter::new(dir.path().to_path_buf());

        assert_eq!(
            replacements(completer.complete_path("d")),
            vec!["data.csv ".to_string(), "docs/".to_string()]
        );
        assert_eq!(
            replacements(completer.complete_path("docs/n")),
            vec!["docs/notes.txt ".to_string()]
        );
        assert_eq!(
            replacements(completer.complete_path(".d")),
            vec![".dotfile ".to_string()]
        );
        Ok(())
    }
}
