use core::num::NonZeroUsize;

use crate::error::{CountError, Result};

/// Inclusive window `[start, end]` of character positions, validated
/// against a subject length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanRange {
    start: usize,
    end: usize,
}

impl ScanRange {
    /// Checks `0 <= start < len` and then `start <= end < len`.
    ///
    /// # Errors
    ///
    /// Returns [`CountError::OutOfRange`] naming `start` or `end`.
    pub fn new(start: i64, end: i64, len: usize) -> Result<Self> {
        let start_idx = usize::try_from(start)
            .ok()
            .filter(|&s| s < len)
            .ok_or(CountError::OutOfRange {
                argument: "start",
                value: start,
                reason: "must be within [0, subject length)",
            })?;

        let end_idx = usize::try_from(end)
            .ok()
            .filter(|&e| e >= start_idx && e < len)
            .ok_or(CountError::OutOfRange {
                argument: "end",
                value: end,
                reason: "must be within [start, subject length)",
            })?;

        Ok(Self {
            start: start_idx,
            end: end_idx,
        })
    }

    /// Whole subject. Fails on an empty subject like `new(0, -1, 0)` would.
    ///
    /// # Errors
    ///
    /// Returns [`CountError::OutOfRange`] when `len == 0`.
    pub fn full(len: usize) -> Result<Self> {
        match len.checked_sub(1) {
            Some(last) => Ok(Self { start: 0, end: last }),
            None => Err(CountError::OutOfRange {
                argument: "start",
                value: 0,
                reason: "must be within [0, subject length)",
            }),
        }
    }

    #[inline]
    pub const fn start(self) -> usize {
        self.start
    }

    #[inline]
    pub const fn end(self) -> usize {
        self.end
    }

    /// Number of positions in the window; never zero.
    #[inline]
    pub const fn len(self) -> usize {
        self.end - self.start + 1
    }

    #[inline]
    pub const fn contains(self, index: usize) -> bool {
        index >= self.start && index <= self.end
    }
}

/// Maximum number of matches counted before a scan stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Limit(NonZeroUsize);

impl Limit {
    /// # Errors
    ///
    /// Returns [`CountError::InvalidArgument`] when `limit <= 0`.
    pub fn new(limit: i64) -> Result<Self> {
        let invalid = CountError::InvalidArgument {
            argument: "limit",
            reason: "must be greater than zero",
        };
        if limit <= 0 {
            return Err(invalid);
        }

        // A limit wider than usize can never be reached by a scan.
        let clamped = usize::try_from(limit).unwrap_or(usize::MAX);
        NonZeroUsize::new(clamped).map(Self).ok_or(invalid)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0.get()
    }
}

impl From<NonZeroUsize> for Limit {
    fn from(value: NonZeroUsize) -> Self {
        Self(value)
    }
}
