use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use ramadan_core::convert::{self, ConversionReport};

use crate::render::Render;

/// Convert `input` to `output`, printing row warnings and the summary.
pub fn run(input: &Path, output: &Path, verbose: bool) -> Result<ConversionReport> {
    if verbose {
        println!("{} {}", "Input CSV file:".dimmed(), input.display());
        println!("{} {}", "Output ICS file:".dimmed(), output.display());
    }

    let report = convert::convert(input, output)?;
    tracing::debug!(
        events = report.events_written,
        warnings = report.warnings.len(),
        "conversion finished"
    );

    for warning in &report.warnings {
        eprintln!("{}", warning.render());
    }
    println!("{}", report.render());

    Ok(report)
}
