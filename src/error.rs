//! Error taxonomy for the table engine.
//!
//! Absence of a key is never an error: `get`/`remove` return `Option` and
//! `contains` returns `bool`. Errors cover invalid configuration, layout
//! violations, and allocation failure, each as a distinct kind.

use std::collections::TryReserveError;
use thiserror::Error;

/// Failures reported by table construction and mutation.
#[derive(Debug, Error)]
pub enum TableError {
    /// The configured maximum load factor was not a finite positive
    /// number. Rejected at construction rather than clamped.
    #[error("max load factor must be finite and positive, got {0}")]
    InvalidLoadFactor(f64),

    /// A bucket count of zero was requested, at construction or as a
    /// resize target.
    #[error("bucket count must be nonzero")]
    ZeroBuckets,

    /// A key did not match the table's fixed key layout.
    #[error("fixed key layout expects {expected} bytes, got {got}")]
    KeySize { expected: usize, got: usize },

    /// A value did not match the table's fixed value layout.
    #[error("fixed value layout expects {expected} bytes, got {got}")]
    ValueSize { expected: usize, got: usize },

    /// Memory could not be reserved for an entry or a bucket array. The
    /// table is left in its prior consistent state: a failed insert keeps
    /// every existing entry reachable, a failed resize keeps the old
    /// array.
    #[error("allocation failed")]
    Alloc(#[from] TryReserveError),
}
