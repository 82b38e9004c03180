//! Core of the Ramadan calendar converter.
//!
//! This crate turns CSV prayer-time schedules into iCalendar documents:
//! - `csv_source` reads and normalizes the CSV rows
//! - `convert` builds events and writes the ICS file
//! - `inspect` summarizes CSV or ICS files without converting them

pub mod calendar;
pub mod config;
pub mod constants;
pub mod convert;
pub mod csv_source;
pub mod error;
pub mod event;
pub mod ics;
pub mod inspect;

pub use calendar::CalendarDocument;
pub use convert::{ConversionReport, RowWarning, convert, convert_at};
pub use error::{ConvertError, ConvertResult};
pub use event::PrayerEvent;
pub use inspect::{Inspection, inspect};
