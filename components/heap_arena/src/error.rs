//! Recoverable arena errors.

use thiserror::Error;

/// Errors returned by fallible arena operations.
///
/// Only allocation can fail recoverably. Every other misuse of the arena
/// (stale references, double release, type-mismatched access) is an
/// engine-internal programming error and faults instead of returning.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// No free slot is available for a new cell.
    ///
    /// The caller is expected to surface this as a thrown script error,
    /// or as a failing exit where exception support is unavailable.
    #[error("heap arena exhausted ({capacity} slots in use)")]
    Exhausted {
        /// Configured slot capacity of the arena.
        capacity: usize,
    },
}
