use std::collections::TryReserveError;

use thiserror::Error;

/// Failure to build a bucket array.
///
/// Lookups and removals never fail; only operations that may rebuild the table
/// (`put`, `resize_table` and the fallible constructors) return this error. Once a
/// rebuild has started re-inserting entries, an error leaves the map holding only
/// the entries placed so far.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The allocator refused a bucket array of the requested length
    #[error("could not allocate a bucket array of {capacity} buckets")]
    AllocationFailed {
        /// Bucket count that was requested
        capacity: usize,
        /// Underlying reservation failure
        #[source]
        source: TryReserveError,
    },

    /// No prime capacity at or above the requested one fits in a `usize`
    #[error("no prime capacity at or above {requested} is representable")]
    CapacityOverflow {
        /// Capacity that could not be satisfied
        requested: usize,
    },
}
