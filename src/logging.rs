use log::{LevelFilter, SetLoggerError};
use simplelog::{ColorChoice, TermLogger, TerminalMode};

use crate::flags::Flags;

/// Install the stderr logger. `--debug` lowers the level to `Debug`; otherwise
/// only warnings (ignored config keys, history failures) are shown.
///
/// Fails if a global logger is already installed.
pub fn init(flags: &Flags) -> Result<(), SetLoggerError> {
    let level = if flags.is_set("debug") {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
}
