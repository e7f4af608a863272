// crates/cli/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod options;
pub mod parsers;
pub mod presentation;

use crate::config::Config;
use crate::error::Result;
use crate::presentation::Report;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Loads the subject, runs the counter and returns what should be printed.
///
/// # Errors
///
/// I/O failures while loading the subject, or the counter's own
/// contract violations (absent input, bad range, non-positive limit).
pub fn run(config: &Config) -> Result<Report> {
    let subject = input::load_subject(&config.source, config.trim_newline)?;
    let count = looking_for_chars_core::count(subject.as_deref(), config.chars.as_deref(), &config.options)?;

    log::info!("counted {count} matches");
    Ok(Report::new(count, subject.as_deref().unwrap_or_default(), &config.options))
}
