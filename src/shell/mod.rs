use std::path::PathBuf;

use log::{debug, warn};
use rustyline::{config::Configurer, error::ReadlineError, history::FileHistory, Editor};

mod classify;
mod executor;
mod interpreter;
mod pipeline;
mod redirect;

pub use classify::{classify, LineKind};
pub use interpreter::Interpreter;
pub use pipeline::{PipeSpec, PipelineError};
pub use redirect::{RedirectMode, RedirectSpec};

use crate::{
    core::{
        config::{Config, ConfigPaths},
        fs::LocalFs,
        output::Output,
        session::Session,
    },
    error::ShellError,
    flags::Flags,
    highlight::SyntaxHighlighter,
    input::ShellCompleter,
};

const BANNER: &str = "Welcome to the CLI. Type 'help' to see available commands.";

pub struct Shell {
    editor: Editor<ShellCompleter, FileHistory>,
    interpreter: Interpreter<LocalFs>,
    config: Config,
    flags: Flags,
    history_path: Option<PathBuf>,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let paths = ConfigPaths::new(flags.get_value("config").map(PathBuf::from));
        let config = Config::load(&paths)?;
        debug!("config: {:?}", config);

        let color = config.color && !flags.is_set("no-color");
        let completer = ShellCompleter::new(SyntaxHighlighter::new(color));

        let mut editor = Editor::<ShellCompleter, FileHistory>::new()?;
        editor.set_helper(Some(completer));
        editor.set_auto_add_history(true);
        editor.set_max_history_size(config.history_size)?;

        let history_path = paths.history_path.clone().filter(|_| config.history);
        if let Some(path) = history_path.as_ref().filter(|path| path.exists()) {
            if let Err(e) = editor.load_history(path) {
                warn!("Couldn't load history from {}: {}", path.display(), e);
            }
        }

        // Set up ctrl-c handler
        ctrlc::set_handler(move || {
            println!("\nUse 'exit' to exit the shell");
        })?;

        let session = Session::from_env()?;
        let interpreter = Interpreter::new(session, Output::stdout(color), LocalFs);

        Ok(Shell {
            editor,
            interpreter,
            config,
            flags,
            history_path,
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        let quiet = self.flags.is_set("quiet");
        if self.config.banner && !quiet {
            println!("{}", BANNER);
        }

        while self.interpreter.is_running() {
            let current_dir = self.interpreter.session().current_dir().to_path_buf();
            if let Some(helper) = self.editor.helper_mut() {
                helper.set_current_dir(current_dir.clone());
            }

            let prompt = format!("{} > ", current_dir.display());
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    if let Err(e) = self.interpreter.execute_line(&line) {
                        eprintln!("{}", e);
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    if !quiet {
                        println!("Use 'exit' to exit the shell");
                    }
                    continue;
                }
                Err(ReadlineError::Eof) => break,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    continue;
                }
            }
        }

        self.save_history();
        Ok(())
    }

    fn save_history(&mut self) {
        if let Some(path) = &self.history_path {
            if let Err(e) = self.editor.save_history(path) {
                warn!("Couldn't save history to {}: {}", path.display(), e);
            }
        }
    }
}
