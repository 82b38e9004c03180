use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};
use owo_colors::OwoColorize;
use ramadan_cal::{commands, logging};

#[derive(Parser)]
#[command(name = "ramadan-cal")]
#[command(about = "Ramadan Calendar Manager - Convert and manage Ramadan prayer times")]
#[command(after_help = "Examples:\n  \
    Convert CSV to ICS:\n    \
    ramadan-cal convert RamadanCSV.csv RamadanCalendar.ics\n\n  \
    Show help for a specific command:\n    \
    ramadan-cal convert --help")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert CSV to ICS calendar
    Convert {
        /// Input CSV file
        input_file: PathBuf,

        /// Output ICS file
        output_file: PathBuf,

        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
    },
    /// Show information about the calendar
    Info {
        /// Calendar file (CSV or ICS)
        file: PathBuf,
    },
    /// Show version information
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        let _ = Cli::command().print_help();
        return ExitCode::SUCCESS;
    };

    let verbose = matches!(command, Commands::Convert { verbose: true, .. });
    logging::init(verbose);

    let result = match command {
        Commands::Convert {
            input_file,
            output_file,
            verbose,
        } => commands::convert::run(&input_file, &output_file, verbose).map(|_| ()),
        Commands::Info { file } => commands::info::run(&file).map(|_| ()),
        Commands::Version => {
            commands::version::run();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
