// crates/core/src/lib.rs
#![no_std]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

extern crate alloc;

pub mod counter;
pub mod error;
pub mod query;
pub mod range;

pub use counter::{CountOptions, count, count_all, count_range, count_range_limited};
pub use error::{CountError, Result};
pub use query::{HASHED_QUERY_THRESHOLD, QuerySet};
pub use range::{Limit, ScanRange};
