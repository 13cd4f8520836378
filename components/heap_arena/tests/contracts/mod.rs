//! Contract tests for the heap arena API
//!
//! These tests verify the public API matches the contract the value
//! representation layer is built against.

use heap_arena::{CellKind, HeapArena, HeapError, NumberRef, ObjectRef, StringRef};

/// Test HeapArena::new() returns an empty arena
#[test]
fn contract_arena_new() {
    let heap = HeapArena::new();
    assert_eq!(heap.live_cells(), 0, "new arena must hold no cells");
}

/// Test alloc_number() -> Result<NumberRef, HeapError>
#[test]
fn contract_alloc_number() {
    let mut heap = HeapArena::new();
    let result: Result<NumberRef, HeapError> = heap.alloc_number(1.0);
    assert!(result.is_ok(), "allocation in a fresh arena must succeed");
}

/// Test alloc_string() -> Result<StringRef, HeapError>
#[test]
fn contract_alloc_string() {
    let mut heap = HeapArena::new();
    let result: Result<StringRef, HeapError> = heap.alloc_string("s");
    assert!(result.is_ok(), "allocation in a fresh arena must succeed");
}

/// Test alloc_object() -> Result<ObjectRef, HeapError>
#[test]
fn contract_alloc_object() {
    let mut heap = HeapArena::new();
    let result: Result<ObjectRef, HeapError> = heap.alloc_object();
    assert!(result.is_ok(), "allocation in a fresh arena must succeed");
}

/// Test references are Copy and compare by slot identity
#[test]
fn contract_refs_are_copy() {
    let mut heap = HeapArena::new();
    let a = heap.alloc_number(1.0).unwrap();
    let b = a;

    // The copy aliases the same cell and did not touch its count.
    assert_eq!(a, b);
    assert_eq!(heap.number_ref_count(b), 1);
}

/// Test allocation hands the caller the single owning reference
#[test]
fn contract_alloc_count_starts_at_one() {
    let mut heap = HeapArena::new();
    let n = heap.alloc_number(1.0).unwrap();
    let s = heap.alloc_string("s").unwrap();
    let o = heap.alloc_object().unwrap();

    assert_eq!(heap.number_ref_count(n), 1);
    assert_eq!(heap.string_ref_count(s), 1);
    assert_eq!(heap.object_ref_count(o), 1);
}

/// Test retain/release are paired count operations
#[test]
fn contract_retain_release_pairing() {
    let mut heap = HeapArena::new();
    let o = heap.alloc_object().unwrap();

    heap.retain_object(o);
    heap.release_object(o);
    assert_eq!(
        heap.object_ref_count(o),
        1,
        "matched retain/release must leave the count unchanged"
    );
}

/// Test exhaustion surfaces as an error, never as a bad reference
#[test]
fn contract_exhaustion_is_err() {
    let mut heap = HeapArena::with_capacity(1);
    let _held = heap.alloc_object().unwrap();

    let result = heap.alloc_number(0.0);
    assert!(
        matches!(result, Err(HeapError::Exhausted { capacity: 1 })),
        "full arena must refuse allocation"
    );
}

/// Test CellKind covers exactly the three heap payloads
#[test]
fn contract_cell_kinds() {
    let _ = CellKind::Number;
    let _ = CellKind::String;
    let _ = CellKind::Object;
}

/// Test statistics accessors
#[test]
fn contract_statistics() {
    let mut heap = HeapArena::with_capacity(8);
    assert_eq!(heap.capacity(), 8);

    let n = heap.alloc_number(1.0).unwrap();
    assert_eq!(heap.live_cells(), 1);
    assert_eq!(heap.free_slots(), 7);

    heap.release_number(n);
    assert_eq!(heap.live_cells(), 0);
    assert_eq!(heap.free_slots(), 8);
}
