//! Reference-counted heap arena for the engine's heap-resident values.
//!
//! This crate provides the single managed arena that backs every heap
//! number, string and object the engine creates. Cells are addressed
//! through restricted-width references (a 16-bit slot index plus a 16-bit
//! generation counter) instead of full machine pointers, which keeps a
//! reference small enough to embed in a value cell on memory-constrained
//! targets.
//!
//! # Overview
//!
//! - [`HeapArena`] - The slot table with allocation and retain/release
//! - [`NumberRef`], [`StringRef`], [`ObjectRef`] - Typed arena references
//! - [`NumberCell`], [`StringCell`], [`ObjectCell`] - Cell payloads
//! - [`HeapError`] - Recoverable allocation failures
//!
//! # Examples
//!
//! ```
//! use heap_arena::HeapArena;
//!
//! let mut heap = HeapArena::new();
//! let num = heap.alloc_number(42.0).unwrap();
//!
//! assert_eq!(heap.get_number(num), 42.0);
//! assert_eq!(heap.number_ref_count(num), 1);
//!
//! heap.release_number(num);
//! assert_eq!(heap.live_cells(), 0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod arena;
mod cell;
mod error;
mod refs;

pub use arena::{HeapArena, DEFAULT_CAPACITY, MAX_SLOTS};
pub use cell::{CellKind, NumberCell, ObjectCell, StringCell};
pub use error::HeapError;
pub use refs::{NumberRef, ObjectRef, StringRef};
