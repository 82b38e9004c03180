use chrono::NaiveDateTime;
use icalendar::{Calendar, Component};

use crate::calendar::CalendarDocument;
use crate::error::{ConvertError, ConvertResult};
use crate::event::PrayerEvent;

/// Serialize a calendar document to ICS text.
///
/// An empty document is refused with [`ConvertError::EmptyResult`].
pub fn generate_ics(doc: &CalendarDocument) -> ConvertResult<String> {
    if doc.is_empty() {
        return Err(ConvertError::EmptyResult);
    }

    let mut cal = Calendar::new();
    for event in doc.events() {
        cal.push(to_ics_event(event));
    }
    let cal = cal.done();

    Ok(rewrite_calendar_header(&cal.to_string(), doc))
}

fn to_ics_event(event: &PrayerEvent) -> icalendar::Event {
    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&event.uid);
    ics_event.summary(&event.summary);

    // DTSTAMP must be UTC
    let dtstamp = event.stamp.format("%Y%m%dT%H%M%SZ").to_string();
    ics_event.add_property("DTSTAMP", &dtstamp);

    add_floating_datetime(&mut ics_event, "DTSTART", &event.start);
    add_floating_datetime(&mut ics_event, "DTEND", &event.end);

    ics_event.description(&event.description);

    ics_event.done()
}

/// Floating datetime (no Z, no TZID)
fn add_floating_datetime(ics_event: &mut icalendar::Event, name: &str, dt: &NaiveDateTime) {
    ics_event.add_property(name, dt.format("%Y%m%dT%H%M%S").to_string());
}

/// Clean up the calendar header written by the icalendar crate
/// - Replace PRODID and VERSION with the document's own values
/// - Remove CALSCALE:GREGORIAN (it's the default)
fn rewrite_calendar_header(ics: &str, doc: &CalendarDocument) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str(&format!("PRODID:{}\r\n", doc.product_id()));
            continue;
        }

        if line.starts_with("VERSION:") {
            result.push_str(&format!("VERSION:{}\r\n", doc.version()));
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
