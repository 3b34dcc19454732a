//! Error types for mining runs.

use std::fmt;

/// Configuration rejected before any pass over the transactions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// Minimum support must be a ratio in `[0, 1]`.
    InvalidMinSupport(f64),
    /// The hash-bucket table needs at least one bucket.
    InvalidBucketCount(usize),
    /// A maximum itemset length of zero would report nothing.
    InvalidMaxLen(usize),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidMinSupport(value) => {
                write!(f, "min_support must be within [0, 1], got {}", value)
            }
            Error::InvalidBucketCount(value) => {
                write!(f, "num_buckets must be positive, got {}", value)
            }
            Error::InvalidMaxLen(value) => {
                write!(f, "max_len must be positive, got {}", value)
            }
        }
    }
}

impl std::error::Error for Error {}
