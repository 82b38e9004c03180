//! CSV → ICS conversion.
//!
//! Rows whose timestamps do not parse are skipped and reported as
//! [`RowWarning`]s; the run only fails as a whole for a missing input,
//! a document with no events, or an I/O error on the destination.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::calendar::CalendarDocument;
use crate::constants::EXPECTED_FORMAT_HINT;
use crate::csv_source::{self, RawRow};
use crate::error::{ConvertError, ConvertResult};
use crate::event::{PrayerEvent, parse_schedule_datetime};
use crate::ics::generate_ics;

/// Which timestamp of a row failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Start,
    End,
}

impl Boundary {
    pub fn as_str(&self) -> &'static str {
        match self {
            Boundary::Start => "start",
            Boundary::End => "end",
        }
    }
}

/// A recoverable, per-row problem found during conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowWarning {
    /// The row was skipped; no event was produced for it.
    InvalidTimestamp {
        row: usize,
        subject: String,
        boundary: Boundary,
        value: String,
        reason: String,
    },
    /// The event was kept but shares its UID with an earlier one.
    DuplicateUid { row: usize, uid: String },
}

impl fmt::Display for RowWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowWarning::InvalidTimestamp {
                subject,
                boundary,
                value,
                reason,
                ..
            } => write!(
                f,
                "Error parsing {} date/time for event '{}' ('{}': {}). {}",
                boundary.as_str(),
                subject,
                value,
                reason,
                EXPECTED_FORMAT_HINT
            ),
            RowWarning::DuplicateUid { row, uid } => {
                write!(f, "Row {row}: duplicate UID '{uid}'")
            }
        }
    }
}

/// Outcome of a successful conversion.
#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub destination: PathBuf,
    pub events_written: usize,
    pub warnings: Vec<RowWarning>,
}

impl ConversionReport {
    pub fn skipped_rows(&self) -> usize {
        self.warnings
            .iter()
            .filter(|w| matches!(w, RowWarning::InvalidTimestamp { .. }))
            .count()
    }
}

/// Convert the CSV at `source` into an ICS file at `destination`, stamping
/// events with the current time.
pub fn convert(source: &Path, destination: &Path) -> ConvertResult<ConversionReport> {
    convert_at(source, destination, Utc::now())
}

/// Same as [`convert`] with an explicit DTSTAMP for every event.
pub fn convert_at(
    source: &Path,
    destination: &Path,
    now: DateTime<Utc>,
) -> ConvertResult<ConversionReport> {
    let rows = csv_source::read_rows(source)?;
    tracing::debug!(rows = rows.len(), source = %source.display(), "read CSV rows");

    let (doc, warnings) = build_document(rows, now);

    if doc.is_empty() {
        return Err(ConvertError::EmptyResult);
    }

    let ics = generate_ics(&doc)?;
    write_atomically(destination, &ics)?;

    tracing::debug!(events = doc.len(), destination = %destination.display(), "wrote calendar");

    Ok(ConversionReport {
        destination: destination.to_path_buf(),
        events_written: doc.len(),
        warnings,
    })
}

/// Turn rows into events, collecting warnings for rows that had to be skipped.
pub fn build_document(
    rows: impl IntoIterator<Item = RawRow>,
    now: DateTime<Utc>,
) -> (CalendarDocument, Vec<RowWarning>) {
    let mut doc = CalendarDocument::new();
    let mut warnings = Vec::new();

    for row in rows {
        let event = match row_to_event(&row, now) {
            Ok(event) => event,
            Err(warning) => {
                tracing::warn!(row = row.row, "{}", warning);
                warnings.push(warning);
                continue;
            }
        };

        if doc.contains_uid(&event.uid) {
            let warning = RowWarning::DuplicateUid {
                row: row.row,
                uid: event.uid.clone(),
            };
            tracing::warn!(row = row.row, "{}", warning);
            warnings.push(warning);
        }

        tracing::debug!(row = row.row, uid = %event.uid, "built event");
        doc.push(event);
    }

    (doc, warnings)
}

fn row_to_event(row: &RawRow, now: DateTime<Utc>) -> Result<PrayerEvent, RowWarning> {
    let start = parse_boundary(row, Boundary::Start)?;
    let end = parse_boundary(row, Boundary::End)?;

    Ok(PrayerEvent::new(
        row.subject.clone(),
        start,
        end,
        row.description.clone(),
        now,
    ))
}

fn parse_boundary(row: &RawRow, boundary: Boundary) -> Result<NaiveDateTime, RowWarning> {
    let (date, time) = match boundary {
        Boundary::Start => (&row.start_date, &row.start_time),
        Boundary::End => (&row.end_date, &row.end_time),
    };

    parse_schedule_datetime(date, time).map_err(|e| RowWarning::InvalidTimestamp {
        row: row.row,
        subject: row.subject.clone(),
        boundary,
        value: format!("{date} {time}"),
        reason: e.to_string(),
    })
}

/// Write to a sibling temp file, then rename over the destination.
fn write_atomically(destination: &Path, content: &str) -> ConvertResult<()> {
    let mut temp_name = destination.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp = PathBuf::from(temp_name);

    let write_err = |source| ConvertError::OutputWrite {
        path: destination.to_path_buf(),
        source,
    };

    let result =
        std::fs::write(&temp, content).and_then(|()| std::fs::rename(&temp, destination));
    if let Err(e) = result {
        let _ = std::fs::remove_file(&temp);
        return Err(write_err(e));
    }

    Ok(())
}
