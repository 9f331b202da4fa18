//! CLI command definitions and argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Ludus - Latin dictionary lookup and paradigm tables.
#[derive(Debug, Parser)]
#[command(name = "ludus")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "LUDUS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Dictionary artifact path
    #[arg(short, long, global = true, env = "LUDUS_DICTIONARY")]
    pub dictionary: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (ids or bare forms only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build the dictionary artifact from a lexicon file
    Build(BuildArgs),

    /// Look up the entries an inflected form belongs to
    Lookup(LookupArgs),

    /// Print the full paradigm of matching entries
    Paradigm(ParadigmArgs),

    /// Find entries by English gloss
    English(EnglishArgs),

    /// Show artifact metadata
    Stats,

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the build command.
#[derive(Debug, Parser)]
pub struct BuildArgs {
    /// Lexicon file (fixed-width)
    #[arg(short, long)]
    pub lexicon: Option<PathBuf>,

    /// Where to write the artifact
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Do not merge the hand-curated priority records ahead of the lexicon
    #[arg(long)]
    pub no_priority: bool,

    /// Record filter preset
    #[arg(long, value_enum)]
    pub filter: Option<FilterArg>,

    /// Print the full build metrics report
    #[arg(long)]
    pub metrics: bool,
}

/// Arguments for the lookup command.
#[derive(Debug, Parser)]
pub struct LookupArgs {
    /// Latin form to look up
    pub term: String,
}

/// Arguments for the paradigm command.
#[derive(Debug, Parser)]
pub struct ParadigmArgs {
    /// Latin form whose entries to show
    #[arg(required_unless_present = "id")]
    pub term: Option<String>,

    /// Show only this entry id
    #[arg(short, long)]
    pub id: Option<u32>,
}

/// Arguments for the english command.
#[derive(Debug, Parser)]
pub struct EnglishArgs {
    /// English word or short phrase
    #[arg(required = true)]
    pub words: Vec<String>,
}

/// Record filter preset argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FilterArg {
    /// Standard rules
    Default,
    /// Reject placeholder-headed perfect-only rows and long stems
    Strict,
    /// Allow empty glosses
    Permissive,
}

impl FilterArg {
    /// Preset name as used in the configuration file
    pub fn name(&self) -> &'static str {
        match self {
            FilterArg::Default => "default",
            FilterArg::Strict => "strict",
            FilterArg::Permissive => "permissive",
        }
    }
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
