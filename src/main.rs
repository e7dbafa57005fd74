use anyhow::Result;

use content_sweep::cli::Command;
use content_sweep::{handle_count, handle_normalize, handle_replace, handle_setup, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Setup { store, seed_file } => handle_setup(store, seed_file.as_deref()),
        Command::Count { store, filter } => handle_count(store, filter),
        Command::Normalize {
            store,
            filter,
            page,
        } => handle_normalize(store, filter, page),
        Command::Replace {
            find,
            replace,
            field,
            regex,
            store,
            filter,
            page,
        } => handle_replace(find, replace, *field, *regex, store, filter, page),
    }
}
