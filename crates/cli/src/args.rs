use crate::options::OutputFormat;
use crate::parsers::CharSetArg;
use clap::{ArgAction, Parser, ValueHint};
use std::path::PathBuf;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "looking_for_chars",
    version = crate::VERSION,
    about = "Count occurrences of a set of characters in a string",
    allow_negative_numbers = true,
    // Subject sources are exclusive (positional / file / stdin)
    group(
        clap::ArgGroup::new("subject_source")
            .args(["subject", "file", "stdin"])
            .multiple(false)
    )
)]
pub struct Args {
    /// String to search
    pub subject: Option<String>,

    /// Characters to search for (supports \n \t \r \0 \\ \u{XXXX})
    #[arg(short, long, help_heading = "Query")]
    pub chars: Option<CharSetArg>,

    /// Read the subject from a file
    #[arg(short, long, value_hint = ValueHint::FilePath, help_heading = "Input")]
    pub file: Option<PathBuf>,

    /// Read the subject from stdin
    #[arg(long, help_heading = "Input")]
    pub stdin: bool,

    /// Strip one trailing newline from file or stdin input
    #[arg(long, help_heading = "Input")]
    pub trim_newline: bool,

    /// First character position to examine (inclusive)
    #[arg(short, long, requires = "end", help_heading = "Range")]
    pub start: Option<i64>,

    /// Last character position to examine (inclusive)
    #[arg(short, long, requires = "start", help_heading = "Range")]
    pub end: Option<i64>,

    /// Stop after this many matches
    #[arg(short, long, help_heading = "Range")]
    pub limit: Option<i64>,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "text",
        env = "LOOKING_FOR_CHARS_FORMAT",
        help_heading = "Output"
    )]
    pub format: OutputFormat,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, help_heading = "Output")]
    pub verbose: u8,
}
