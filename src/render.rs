//! Terminal rendering for converter results.
//!
//! Extension trait adding colored output to ramadan-core types using owo_colors.

use owo_colors::OwoColorize;
use ramadan_core::convert::{ConversionReport, RowWarning};
use ramadan_core::inspect::Inspection;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for RowWarning {
    fn render(&self) -> String {
        match self {
            RowWarning::InvalidTimestamp { .. } => {
                format!("{} {}", "✗".red(), self.to_string().red())
            }
            RowWarning::DuplicateUid { .. } => {
                format!("{} {}", "!".yellow(), self.to_string().yellow())
            }
        }
    }
}

impl Render for ConversionReport {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "{} Calendar successfully converted with {} {}.",
            "✓".green(),
            self.events_written,
            pluralize("event", self.events_written)
        ));

        let skipped = self.skipped_rows();
        if skipped > 0 {
            let label = format!("({} {} skipped)", skipped, pluralize("row", skipped));
            lines.push(format!("  {}", label.dimmed()));
        }

        lines.push(format!("Saved to {}", self.destination.display().bold()));
        lines.join("\n")
    }
}

impl Render for Inspection {
    fn render(&self) -> String {
        match self {
            Inspection::Csv { rows, .. } => {
                format!("CSV file contains {} prayer time {}", rows, pluralize("event", *rows))
            }
            Inspection::Ics { path } => format!(
                "ICS calendar file: {}\n{}",
                path.display(),
                "Use a calendar application to view the contents".dimmed()
            ),
        }
    }
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
