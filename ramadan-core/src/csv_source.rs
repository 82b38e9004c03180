//! Reading CSV prayer-time schedules into typed rows.
//!
//! Input files may start with a non-standard `//` comment line, which is
//! dropped before the remaining text is handed to the CSV parser. The first
//! line left after that is the header row.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::constants::COMMENT_MARKER;
use crate::error::{ConvertError, ConvertResult};

pub const SUBJECT: &str = "Subject";
pub const START_DATE: &str = "Start Date";
pub const START_TIME: &str = "Start Time";
pub const END_DATE: &str = "End Date";
pub const END_TIME: &str = "End Time";
pub const DESCRIPTION: &str = "Description";

/// One data line of the schedule, fields copied verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based position among the data rows (header excluded)
    pub row: usize,
    pub subject: String,
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
    pub description: String,
}

/// Positions of the required columns within the header.
struct ColumnIndex {
    subject: usize,
    start_date: usize,
    start_time: usize,
    end_date: usize,
    end_time: usize,
    description: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> ConvertResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| ConvertError::MissingColumn(name.to_string()))
        };

        Ok(ColumnIndex {
            subject: find(SUBJECT)?,
            start_date: find(START_DATE)?,
            start_time: find(START_TIME)?,
            end_date: find(END_DATE)?,
            end_time: find(END_TIME)?,
            description: find(DESCRIPTION)?,
        })
    }

    /// Short records yield empty strings, which later fail timestamp parsing.
    fn row(&self, row: usize, record: &StringRecord) -> RawRow {
        let field = |idx: usize| record.get(idx).unwrap_or_default().to_string();

        RawRow {
            row,
            subject: field(self.subject),
            start_date: field(self.start_date),
            start_time: field(self.start_time),
            end_date: field(self.end_date),
            end_time: field(self.end_time),
            description: field(self.description),
        }
    }
}

/// Drop the first line if it starts with the `//` comment marker.
pub fn strip_comment_header(content: &str) -> &str {
    if !content.starts_with(COMMENT_MARKER) {
        return content;
    }

    match content.find('\n') {
        Some(idx) => &content[idx + 1..],
        None => "",
    }
}

fn load(path: &Path) -> ConvertResult<String> {
    if !path.exists() {
        return Err(ConvertError::InputNotFound(path.to_path_buf()));
    }

    Ok(std::fs::read_to_string(path)?)
}

fn reader(body: &str) -> csv::Reader<&[u8]> {
    ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(body.as_bytes())
}

/// Read every data row of the CSV file at `path`, in input order.
pub fn read_rows(path: &Path) -> ConvertResult<Vec<RawRow>> {
    let content = load(path)?;
    parse_rows(strip_comment_header(&content))
}

/// Parse already comment-stripped CSV text into rows.
pub fn parse_rows(body: &str) -> ConvertResult<Vec<RawRow>> {
    let mut rdr = reader(body);

    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Ok(Vec::new());
    }
    let columns = ColumnIndex::from_headers(&headers)?;

    rdr.records()
        .enumerate()
        .map(|(idx, record)| Ok(columns.row(idx + 1, &record?)))
        .collect()
}

/// Count data rows without validating their contents or the header names.
pub fn count_rows(path: &Path) -> ConvertResult<usize> {
    let content = load(path)?;
    let mut rdr = reader(strip_comment_header(&content));

    let mut count = 0;
    for record in rdr.records() {
        record?;
        count += 1;
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Subject,Start Date,Start Time,End Date,End Time,Description";

    #[test]
    fn test_strip_comment_header() {
        assert_eq!(strip_comment_header("// note\nA,B\n"), "A,B\n");
        assert_eq!(strip_comment_header("// note\r\nA,B\r\n"), "A,B\r\n");
        assert_eq!(strip_comment_header("A,B\n// not first\n"), "A,B\n// not first\n");
        assert_eq!(strip_comment_header("// only a comment"), "");
        assert_eq!(strip_comment_header("/ single slash\n"), "/ single slash\n");
    }

    #[test]
    fn test_parse_rows_maps_columns_by_name() {
        // Column order differs from the canonical one on purpose
        let body = "Description,Subject,End Time,End Date,Start Time,Start Date\n\
                    Break fast,Iftar,07:15 PM,03/15/2025,06:45 PM,03/15/2025\n";

        let rows = parse_rows(body).unwrap();
        assert_eq!(
            rows,
            vec![RawRow {
                row: 1,
                subject: "Iftar".into(),
                start_date: "03/15/2025".into(),
                start_time: "06:45 PM".into(),
                end_date: "03/15/2025".into(),
                end_time: "07:15 PM".into(),
                description: "Break fast".into(),
            }]
        );
    }

    #[test]
    fn test_parse_rows_missing_column() {
        let body = "Subject,Start Date,Start Time,End Date,End Time\nIftar,a,b,c,d\n";
        let err = parse_rows(body).unwrap_err();
        assert!(
            matches!(err, ConvertError::MissingColumn(ref c) if c == "Description"),
            "got {err:?}"
        );
    }

    #[test]
    fn test_parse_rows_short_record_gets_empty_fields() {
        let body = format!("{HEADER}\nSuhoor,03/16/2025\n");
        let rows = parse_rows(&body).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].subject, "Suhoor");
        assert_eq!(rows[0].start_time, "");
        assert_eq!(rows[0].description, "");
    }

    #[test]
    fn test_parse_rows_quoted_fields_and_order() {
        let body = format!(
            "{HEADER}\n\
             Fajr,03/16/2025,05:10 AM,03/16/2025,05:30 AM,\"Dawn, first prayer\"\n\
             Dhuhr,03/16/2025,12:30 PM,03/16/2025,12:50 PM,Noon\n"
        );
        let rows = parse_rows(&body).unwrap();
        let subjects: Vec<_> = rows.iter().map(|r| r.subject.as_str()).collect();
        assert_eq!(subjects, ["Fajr", "Dhuhr"]);
        assert_eq!(rows[0].description, "Dawn, first prayer");
        assert_eq!(rows[1].row, 2);
    }

    #[test]
    fn test_parse_rows_empty_body() {
        assert!(parse_rows("").unwrap().is_empty());
    }

    #[test]
    fn test_read_rows_nonexistent_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.csv");
        let err = read_rows(&path).unwrap_err();
        assert!(matches!(err, ConvertError::InputNotFound(p) if p == path));
    }

    #[test]
    fn test_count_rows_skips_comment_and_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("times.csv");
        std::fs::write(
            &path,
            format!("// Ramadan 2025\n{HEADER}\nA,1,2,3,4,x\nB,1,2,3,4,y\n\nC,1,2,3,4,z\n"),
        )
        .unwrap();

        assert_eq!(count_rows(&path).unwrap(), 3);
    }
}
