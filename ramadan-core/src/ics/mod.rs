//! ICS file generation.
//!
//! Output follows RFC 5545 with floating start/end times.

mod generate;

pub use generate::generate_ics;
