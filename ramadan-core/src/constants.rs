/// PRODID written into every generated calendar.
pub const PRODUCT_ID: &str = "-//Ramadan Calendar Converter//mxm.dk//";

/// iCalendar format version marker.
pub const ICS_VERSION: &str = "2.0";

/// chrono pattern for the joined "date time" cell pair, e.g. `03/15/2025 06:45 PM`.
pub const DATETIME_FORMAT: &str = "%m/%d/%Y %I:%M %p";

/// Human-readable form of [`DATETIME_FORMAT`] used in warnings.
pub const EXPECTED_FORMAT_HINT: &str = "Format should be 'MM/DD/YYYY' and 'HH:MM AM/PM'";

/// Timestamp layout used in event UIDs.
pub const UID_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Marker that flags an optional leading comment line in CSV input.
pub const COMMENT_MARKER: &str = "//";

pub const DEFAULT_INPUT_FILE: &str = "RamadanCSV.csv";
pub const DEFAULT_OUTPUT_FILE: &str = "RamadanCalendar.ics";
