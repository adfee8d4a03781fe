use rustyline::completion::Pair;

use crate::core::commands::Verb;

#[derive(Debug, Clone)]
pub struct CommandCompleter {
    commands: Vec<&'static str>,
}

impl Default for CommandCompleter {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandCompleter {
    pub fn new() -> Self {
        let mut commands: Vec<&'static str> = Verb::ALL.iter().map(|verb| verb.name()).collect();
        commands.sort_unstable();
        Self { commands }
    }

    pub fn complete_command(&self, word: &str) -> Vec<Pair> {
        let input = word.trim().to_ascii_lowercase();

        self.commands
            .iter()
            .filter(|cmd| cmd.starts_with(&input))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: format!("{} ", cmd),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn displays(pairs: Vec<Pair>) -> Vec<String> {
        pairs.into_iter().map(|pair| pair.display).collect()
    }

    #[test]
    fn test_prefix_matches() {
        let completer = CommandCompleter::new();

        assert_eq!(displays(completer.complete_command("r")), vec!["rm", "rmdir"]);
        assert_eq!(displays(completer.complete_command("MK")), vec!["mkdir"]);
        assert!(completer.complete_command("zz").is_empty());
    }

    #[test]
    fn test_empty_prefix_lists_everything() {
        let completer = CommandCompleter::new();
        assert_eq!(completer.complete_command("").len(), Verb::ALL.len());
    }
}
