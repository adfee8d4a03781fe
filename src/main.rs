use husk::error::ShellError;
use husk::flags::Flags;
use husk::shell::Shell;
use std::env;

fn main() {
    // Startup problems are reported, never turned into a failing exit status.
    if let Err(e) = run() {
        eprintln!("husk: {}", e);
    }
}

fn run() -> Result<(), ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("Husk {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if let Err(e) = husk::logging::init(&flags) {
        eprintln!("husk: logging disabled: {}", e);
    }

    let mut shell = Shell::new(flags)?;
    shell.run()
}
