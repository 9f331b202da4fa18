//! Interactive REPL (Read-Eval-Print Loop) mode.

use std::path::PathBuf;

use ludus_store::Dictionary;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::cli::{EnglishArgs, LookupArgs, ParadigmArgs};
use crate::commands;
use crate::config::{data_dir, Config};
use crate::error::{CliError, Result};
use crate::output::Formatter;

/// Run the interactive REPL over a loaded dictionary.
pub fn run_repl(dictionary: &Dictionary, config: &Config, formatter: &Formatter) -> Result<()> {
    println!(
        "{}",
        formatter.info(&format!(
            "Ludus REPL - {} entries. Type a Latin form, 'help' for commands, 'exit' to quit",
            dictionary.len()
        ))
    );
    println!();

    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)
        .map_err(|e| CliError::Editor(e.to_string()))?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config)
        .map_err(|e| CliError::Editor(format!("Failed to initialize editor: {}", e)))?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        match editor.readline("ludus> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Vale!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => print_help(formatter),
                    Ok(command) => {
                        if let Err(e) = execute_repl_command(command, dictionary, formatter) {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug, PartialEq)]
enum ReplCommand {
    Exit,
    Help,
    Lookup(String),
    Paradigm(String),
    English(Vec<String>),
}

/// Parse a REPL command line.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, rest)) = parts.split_first() else {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    };

    match head {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        ":p" => match rest {
            [form] => Ok(ReplCommand::Paradigm(form.to_string())),
            _ => Err(CliError::InvalidInput("Usage: :p FORM".to_string())),
        },
        ":e" => {
            if rest.is_empty() {
                return Err(CliError::InvalidInput("Usage: :e WORD".to_string()));
            }
            Ok(ReplCommand::English(rest.iter().map(|w| w.to_string()).collect()))
        }
        command if command.starts_with(':') => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            command
        ))),
        _ if rest.is_empty() => Ok(ReplCommand::Lookup(head.to_string())),
        _ => Err(CliError::InvalidInput(
            "Look up one form at a time".to_string(),
        )),
    }
}

/// Execute a REPL command.
fn execute_repl_command(
    command: ReplCommand,
    dictionary: &Dictionary,
    formatter: &Formatter,
) -> Result<()> {
    match command {
        ReplCommand::Lookup(term) => {
            commands::execute_lookup(LookupArgs { term }, dictionary, formatter)
        }
        ReplCommand::Paradigm(term) => commands::execute_paradigm(
            ParadigmArgs {
                term: Some(term),
                id: None,
            },
            dictionary,
            formatter,
        ),
        ReplCommand::English(words) => {
            commands::execute_english(EnglishArgs { words }, dictionary, formatter)
        }
        ReplCommand::Exit | ReplCommand::Help => Ok(()),
    }
}

fn get_history_path() -> Result<PathBuf> {
    let dir = data_dir();
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  <form>             - Look up the entries a Latin form belongs to");
    println!("  :p <form>          - Show the full paradigm of each matching entry");
    println!("  :e <word>          - Find entries by English meaning");
    println!("  help, ?            - Show this help");
    println!("  exit, quit, q      - Exit REPL");
    println!();
}
