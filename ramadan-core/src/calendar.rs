//! In-memory calendar document assembled during a conversion run.

use crate::constants::{ICS_VERSION, PRODUCT_ID};
use crate::event::PrayerEvent;

/// Ordered collection of events plus the fixed calendar metadata.
#[derive(Debug, Clone)]
pub struct CalendarDocument {
    product_id: &'static str,
    version: &'static str,
    events: Vec<PrayerEvent>,
}

impl Default for CalendarDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl CalendarDocument {
    pub fn new() -> Self {
        CalendarDocument {
            product_id: PRODUCT_ID,
            version: ICS_VERSION,
            events: Vec::new(),
        }
    }

    pub fn product_id(&self) -> &str {
        self.product_id
    }

    pub fn version(&self) -> &str {
        self.version
    }

    pub fn events(&self) -> &[PrayerEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn contains_uid(&self, uid: &str) -> bool {
        self.events.iter().any(|e| e.uid == uid)
    }

    pub fn push(&mut self, event: PrayerEvent) {
        self.events.push(event);
    }
}
