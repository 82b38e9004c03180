//! Command-line front end for `ramadan-core`.

pub mod commands;
pub mod logging;
pub mod render;
