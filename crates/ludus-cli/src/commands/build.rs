//! Build command implementation.

use ludus_extractor::{priority_records, ExtractorConfig, RecordReader};
use ludus_gatekeeper::{FilterConfig, Gatekeeper};
use ludus_store::{BuildConfig, BuildContext};

use crate::cli::BuildArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;

/// Execute the build command.
pub fn execute_build(args: BuildArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let lexicon = args.lexicon.unwrap_or_else(|| config.lexicon_path.clone());
    let output = args.output.unwrap_or_else(|| config.artifact_path.clone());

    let filter = match args.filter {
        Some(preset) => FilterConfig::preset(preset.name())
            .ok_or_else(|| CliError::InvalidInput(format!("Unknown filter '{}'", preset.name())))?,
        None => config.filter_config()?,
    };

    let reader = RecordReader::open(&lexicon, ExtractorConfig::default())?;
    let mut reader = if args.no_priority {
        reader
    } else {
        reader.with_priority(priority_records())
    };

    let label = lexicon
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| lexicon.display().to_string());
    let mut context = BuildContext::new(
        BuildConfig::default().with_source_label(label),
        Gatekeeper::new(filter),
    );
    context.ingest_source(&mut reader)?;
    let (dictionary, metrics) = context.finish_with_metrics();

    dictionary.save(&output)?;

    if args.metrics {
        println!("{}", metrics.summary());
    }
    println!(
        "{}",
        formatter.success(&format!(
            "Built {} entries and {} forms into {}",
            dictionary.len(),
            dictionary.index().len(),
            output.display()
        ))
    );
    if metrics.malformed > 0 {
        println!(
            "{}",
            formatter.warning(&format!("Skipped {} malformed line(s)", metrics.malformed))
        );
    }

    Ok(())
}
