//! Read-only summaries of schedule and calendar files.

use std::path::{Path, PathBuf};

use crate::csv_source;
use crate::error::{ConvertError, ConvertResult};

/// What [`inspect`] found out about a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inspection {
    /// Data rows present, whether or not they would convert.
    Csv { path: PathBuf, rows: usize },
    /// Calendar files are only identified, not summarized.
    Ics { path: PathBuf },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileKind {
    Csv,
    Ics,
}

fn file_kind(path: &Path) -> Option<FileKind> {
    let ext = path.extension()?.to_str()?;
    if ext.eq_ignore_ascii_case("csv") {
        Some(FileKind::Csv)
    } else if ext.eq_ignore_ascii_case("ics") {
        Some(FileKind::Ics)
    } else {
        None
    }
}

pub fn inspect(path: &Path) -> ConvertResult<Inspection> {
    if !path.exists() {
        return Err(ConvertError::InputNotFound(path.to_path_buf()));
    }

    match file_kind(path) {
        Some(FileKind::Csv) => Ok(Inspection::Csv {
            path: path.to_path_buf(),
            rows: csv_source::count_rows(path)?,
        }),
        Some(FileKind::Ics) => Ok(Inspection::Ics {
            path: path.to_path_buf(),
        }),
        None => Err(ConvertError::UnsupportedFormat(path.to_path_buf())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::convert_at;
    use chrono::{TimeZone, Utc};
    use std::fs;

    const HEADER: &str = "Subject,Start Date,Start Time,End Date,End Time,Description";

    #[test]
    fn test_row_count_can_exceed_converted_events() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("times.csv");
        fs::write(
            &source,
            format!(
                "// Ramadan 2025\n{HEADER}\n\
                 Fajr,03/16/2025,05:10 AM,03/16/2025,05:30 AM,Dawn\n\
                 Dhuhr,2025-03-16,12:30 PM,2025-03-16,12:50 PM,Noon\n\
                 Asr,03/16/2025,3:45,03/16/2025,4:05,Afternoon\n"
            ),
        )
        .unwrap();

        let inspection = inspect(&source).unwrap();
        assert_eq!(
            inspection,
            Inspection::Csv {
                path: source.clone(),
                rows: 3
            }
        );

        let now = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
        let report = convert_at(&source, &dir.path().join("out.ics"), now).unwrap();
        assert_eq!(report.events_written, 1);
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("TIMES.CSV");
        let ics = dir.path().join("Calendar.Ics");
        fs::write(&csv, format!("{HEADER}\n")).unwrap();
        fs::write(&ics, "BEGIN:VCALENDAR\r\nEND:VCALENDAR\r\n").unwrap();

        assert_eq!(
            inspect(&csv).unwrap(),
            Inspection::Csv {
                path: csv.clone(),
                rows: 0
            }
        );
        assert_eq!(inspect(&ics).unwrap(), Inspection::Ics { path: ics.clone() });
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("times.txt");
        fs::write(&path, "hello").unwrap();

        let err = inspect(&path).unwrap_err();
        assert!(matches!(err, ConvertError::UnsupportedFormat(ref p) if *p == path));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.ics");
        assert!(matches!(inspect(&path), Err(ConvertError::InputNotFound(_))));
    }
}
