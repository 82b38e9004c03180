//! Calendar entries built from schedule rows.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::constants::{DATETIME_FORMAT, UID_TIMESTAMP_FORMAT};

/// A single prayer-time calendar entry.
///
/// Start and end are naive local times; they are written as floating
/// times so calendar apps show them in whatever zone they run in.
#[derive(Debug, Clone, PartialEq)]
pub struct PrayerEvent {
    pub uid: String,
    pub summary: String,
    pub description: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// When the entry was generated (DTSTAMP)
    pub stamp: DateTime<Utc>,
}

impl PrayerEvent {
    pub fn new(
        summary: String,
        start: NaiveDateTime,
        end: NaiveDateTime,
        description: String,
        stamp: DateTime<Utc>,
    ) -> Self {
        let uid = event_uid(&summary, &start);
        PrayerEvent {
            uid,
            summary,
            description,
            start,
            end,
            stamp,
        }
    }
}

impl fmt::Display for PrayerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary)
    }
}

/// `{summary}-{start as YYYYMMDDHHMMSS}`
pub fn event_uid(summary: &str, start: &NaiveDateTime) -> String {
    format!("{}-{}", summary, start.format(UID_TIMESTAMP_FORMAT))
}

/// Parse a date cell and a time cell, e.g. `03/15/2025` and `06:45 PM`.
///
/// chrono skips whitespace before numbers, so the cell layout is checked
/// first: no whitespace in the date, and the time is `HH:MM`, whitespace,
/// then the AM/PM marker with nothing around it.
pub fn parse_schedule_datetime(date: &str, time: &str) -> Result<NaiveDateTime, String> {
    if date.contains(char::is_whitespace) {
        return Err(format!("unexpected whitespace in date '{date}'"));
    }
    if !is_clock_layout(time) {
        return Err(format!("unexpected whitespace in time '{time}'"));
    }

    NaiveDateTime::parse_from_str(&format!("{date} {time}"), DATETIME_FORMAT)
        .map_err(|e| e.to_string())
}

fn is_clock_layout(time: &str) -> bool {
    let Some((clock, meridiem)) = time.split_once(char::is_whitespace) else {
        return false;
    };
    let meridiem = meridiem.trim_start();

    !clock.is_empty() && !meridiem.is_empty() && !meridiem.contains(char::is_whitespace)
}
