// crates/core/src/error.rs
use thiserror::Error;

/// Contract violations reported by the counting routines.
///
/// Every variant is raised before any character is examined, so a failed
/// call never yields a partial count.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountError {
    /// A required input was absent, or `limit` was not positive.
    #[error("Invalid argument '{argument}': {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: &'static str,
    },

    /// A range bound fell outside the subject.
    #[error("Argument '{argument}' = {value} is out of range: {reason}")]
    OutOfRange {
        argument: &'static str,
        value: i64,
        reason: &'static str,
    },
}

impl CountError {
    pub(crate) const fn absent(argument: &'static str) -> Self {
        Self::InvalidArgument {
            argument,
            reason: "value must be present",
        }
    }

    #[inline]
    pub const fn argument(&self) -> &'static str {
        match self {
            Self::InvalidArgument { argument, .. } | Self::OutOfRange { argument, .. } => argument,
        }
    }

    #[inline]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    #[inline]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

pub type Result<T> = core::result::Result<T, CountError>;
