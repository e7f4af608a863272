use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[value(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bare count on a single line
    #[default]
    Text,
    /// JSON object with the count and the bounds that produced it
    Json,
}

/// Where the subject string comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubjectSource {
    /// Nothing given; the counter reports the subject as absent.
    #[default]
    Missing,
    Inline(String),
    File(std::path::PathBuf),
    Stdin,
}
