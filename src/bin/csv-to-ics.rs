//! Single-purpose converter: CSV in, ICS out, no subcommands.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use ramadan_cal::{commands, logging};
use ramadan_core::ConvertResult;
use ramadan_core::config::ConverterConfig;

#[derive(Parser)]
#[command(name = "csv-to-ics")]
#[command(about = "Convert Ramadan prayer times from CSV to ICS format")]
struct Args {
    /// Input CSV file path (default from config, else RamadanCSV.csv)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output ICS file path (default from config, else RamadanCalendar.ics)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Fill in missing paths from the config, which is only read when needed.
fn resolve_paths(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    load_config: impl FnOnce() -> ConvertResult<ConverterConfig>,
) -> ConvertResult<(PathBuf, PathBuf)> {
    match (input, output) {
        (Some(input), Some(output)) => Ok((input, output)),
        (input, output) => {
            let config = load_config()?;
            Ok((
                input.unwrap_or(config.default_input),
                output.unwrap_or(config.default_output),
            ))
        }
    }
}

fn run(args: Args) -> Result<()> {
    let (input, output) = resolve_paths(args.input, args.output, ConverterConfig::load)?;

    commands::convert::run(&input, &output, args.verbose)?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
