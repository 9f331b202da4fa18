//! Ludus CLI - Latin dictionary lookup and paradigm tables.

use clap::Parser;
use ludus_cli::commands;
use ludus_cli::repl;
use ludus_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so table and JSON output stay clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> ludus_cli::Result<()> {
    let cli = Cli::parse();

    // An explicit config file must load; the default one is created on first run
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|_| {
            let cfg = Config::default();
            cfg.save().ok();
            cfg
        }),
    };

    if let Some(path) = cli.dictionary {
        config.artifact_path = path;
    }

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let dictionary = || commands::load_dictionary(&config.artifact_path);

    match cli.command {
        Some(Command::Build(args)) => commands::execute_build(args, &config, &formatter)?,
        None | Some(Command::Repl) => repl::run_repl(&dictionary()?, &config, &formatter)?,
        Some(Command::Lookup(args)) => commands::execute_lookup(args, &dictionary()?, &formatter)?,
        Some(Command::Paradigm(args)) => {
            commands::execute_paradigm(args, &dictionary()?, &formatter)?
        }
        Some(Command::English(args)) => {
            commands::execute_english(args, &dictionary()?, &formatter)?
        }
        Some(Command::Stats) => commands::execute_stats(&dictionary()?, &formatter)?,
    }

    Ok(())
}
