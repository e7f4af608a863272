use crate::error::{CountError, Result};
use crate::query::QuerySet;
use crate::range::{Limit, ScanRange};

/// Optional bounds for [`count`].
///
/// `range` is an inclusive `(start, end)` pair of character positions.
/// A `limit` without a `range` applies to the whole subject.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountOptions {
    pub range: Option<(i64, i64)>,
    pub limit: Option<i64>,
}

impl CountOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            range: None,
            limit: None,
        }
    }

    #[must_use]
    pub const fn with_range(mut self, start: i64, end: i64) -> Self {
        self.range = Some((start, end));
        self
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Counts the characters of `subject` that appear in `chars`.
///
/// # Errors
///
/// [`CountError::InvalidArgument`] when `subject` or `chars` is absent.
pub fn count_all(subject: Option<&str>, chars: Option<&[char]>) -> Result<usize> {
    let (subject, chars) = require_inputs(subject, chars)?;
    let query = QuerySet::new(chars);

    let matches = subject.chars().filter(|&ch| query.contains(ch)).count();
    log::trace!("count_all: {matches} matches over {} positions", subject.chars().count());
    Ok(matches)
}

/// Counts matches within the inclusive character range `[start, end]`.
///
/// # Errors
///
/// [`CountError::InvalidArgument`] when an input is absent,
/// [`CountError::OutOfRange`] when `0 <= start <= end < len` does not hold.
pub fn count_range(subject: Option<&str>, chars: Option<&[char]>, start: i64, end: i64) -> Result<usize> {
    let (subject, chars) = require_inputs(subject, chars)?;
    let range = ScanRange::new(start, end, subject.chars().count()).inspect_err(log_rejection)?;

    Ok(scan(subject, &QuerySet::new(chars), range, None))
}

/// Like [`count_range`], but stops as soon as `limit` matches were counted.
///
/// `limit` is validated before the range bounds.
///
/// # Errors
///
/// [`CountError::InvalidArgument`] when an input is absent or `limit <= 0`,
/// [`CountError::OutOfRange`] when `0 <= start <= end < len` does not hold.
pub fn count_range_limited(
    subject: Option<&str>,
    chars: Option<&[char]>,
    start: i64,
    end: i64,
    limit: i64,
) -> Result<usize> {
    let (subject, chars) = require_inputs(subject, chars)?;
    let limit = Limit::new(limit).inspect_err(log_rejection)?;
    let range = ScanRange::new(start, end, subject.chars().count()).inspect_err(log_rejection)?;

    Ok(scan(subject, &QuerySet::new(chars), range, Some(limit)))
}

/// Single entry point dispatching on which [`CountOptions`] are set.
///
/// # Errors
///
/// Same as the variant selected by `options`.
pub fn count(subject: Option<&str>, chars: Option<&[char]>, options: &CountOptions) -> Result<usize> {
    match (options.range, options.limit) {
        (None, None) => count_all(subject, chars),
        (Some((start, end)), None) => count_range(subject, chars, start, end),
        (Some((start, end)), Some(limit)) => count_range_limited(subject, chars, start, end, limit),
        (None, Some(limit)) => {
            let (subject, chars) = require_inputs(subject, chars)?;
            let limit = Limit::new(limit).inspect_err(log_rejection)?;
            let range = ScanRange::full(subject.chars().count()).inspect_err(log_rejection)?;
            Ok(scan(subject, &QuerySet::new(chars), range, Some(limit)))
        }
    }
}

fn require_inputs<'a, 'b>(
    subject: Option<&'a str>,
    chars: Option<&'b [char]>,
) -> Result<(&'a str, &'b [char])> {
    let subject = subject.ok_or(CountError::absent("subject")).inspect_err(log_rejection)?;
    let chars = chars.ok_or(CountError::absent("chars")).inspect_err(log_rejection)?;
    Ok((subject, chars))
}

fn log_rejection(err: &CountError) {
    log::debug!("rejected count request: {err}");
}

/// Walks `range` in ascending order. With a limit, each position is
/// examined and counted before the limit is checked, so the first
/// position is always examined.
fn scan(subject: &str, query: &QuerySet, range: ScanRange, limit: Option<Limit>) -> usize {
    let positions = subject.chars().skip(range.start()).take(range.len());

    let Some(limit) = limit else {
        let matches = positions.filter(|&ch| query.contains(ch)).count();
        log::trace!("scan [{}, {}]: {matches} matches", range.start(), range.end());
        return matches;
    };

    let mut matches = 0;
    let mut examined = 0;
    for ch in positions {
        examined += 1;
        if query.contains(ch) {
            matches += 1;
        }
        if matches >= limit.value() {
            break;
        }
    }

    log::trace!(
        "scan [{}, {}] limit {}: {matches} matches, stopped after {examined} of {} positions",
        range.start(),
        range.end(),
        limit.value(),
        range.len()
    );
    matches
}
