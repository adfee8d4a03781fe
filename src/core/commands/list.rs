use std::io::Write;

use super::{Command, CommandContext, CommandError};
use crate::core::fs::ListOptions;

impl ListOptions {
    /// `-a` shows hidden entries, `-r` reverses; combined forms like `-ar`
    /// work too. Anything else is ignored.
    pub fn from_args(args: &[String]) -> Self {
        let mut options = ListOptions::default();
        for arg in args {
            let Some(letters) = arg.strip_prefix('-') else {
                continue;
            };
            for letter in letters.chars() {
                match letter {
                    'a' => options.show_hidden = true,
                    'r' => options.reverse = true,
                    _ => {}
                }
            }
        }
        options
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ListCommand;

impl Command for ListCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<(), CommandError> {
        let options = ListOptions::from_args(args);
        let dir = ctx.session.current_dir();
        let names = ctx
            .fs
            .list(dir, options)
            .map_err(CommandError::fs(&dir.display().to_string()))?;

        for name in names {
            writeln!(ctx.out, "{}", name)?;
        }
        Ok(())
    }
}
