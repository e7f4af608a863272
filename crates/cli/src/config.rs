// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::AppError;
use crate::options::{OutputFormat, SubjectSource};
use derive_builder::Builder;
use looking_for_chars_core::CountOptions;

/// Resolved run configuration.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub source: SubjectSource,
    /// `None` when `--chars` was not given.
    #[builder(default)]
    pub chars: Option<Vec<char>>,
    #[builder(default)]
    pub options: CountOptions,
    #[builder(default)]
    pub trim_newline: bool,
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub verbose: u8,
}

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let source = match (args.subject, args.file, args.stdin) {
            (Some(subject), _, _) => SubjectSource::Inline(subject),
            (None, Some(path), _) => SubjectSource::File(path),
            (None, None, true) => SubjectSource::Stdin,
            (None, None, false) => SubjectSource::Missing,
        };

        let options = CountOptions {
            range: args.start.zip(args.end),
            limit: args.limit,
        };

        ConfigBuilder::default()
            .source(source)
            .chars(args.chars.map(|set| set.0))
            .options(options)
            .trim_newline(args.trim_newline)
            .format(args.format)
            .verbose(args.verbose)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))
    }
}
