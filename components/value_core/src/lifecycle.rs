//! Explicit reference lifecycle for heap-referencing cells.
//!
//! Value and completion cells are plain `Copy` scalars; duplicating one
//! never keeps the referenced heap cell alive on its own. These
//! operations are the ownership boundary: copying with retention takes a
//! reference, freeing gives one back, and every retained cell must pass
//! through a matching free exactly once.
//!
//! Numbers and strings are always retained on copy and released on free.
//! Objects are retained/released only when the flag says so, because many
//! call sites alias an object borrowed from a longer-lived owner and must
//! not release it through this path.

use heap_arena::HeapArena;

use crate::completion::Completion;
use crate::value::Value;

/// Duplicates `value`, retaining the heap cell it names.
///
/// Numbers and strings are always retained. Objects are retained only
/// when `retain_if_object` is set; an unretained object copy aliases the
/// source's ownership and must not outlive it.
///
/// Simple cells copy without side effects.
///
/// # Examples
///
/// ```
/// use heap_arena::HeapArena;
/// use value_core::lifecycle::{copy_value, free_value};
/// use value_core::Value;
///
/// let mut heap = HeapArena::new();
/// let num = heap.alloc_number(1.0).unwrap();
/// let original = Value::Number(num);
///
/// let copy = copy_value(&mut heap, original, true);
/// assert_eq!(heap.number_ref_count(num), 2);
///
/// free_value(&mut heap, copy, true);
/// assert_eq!(heap.number_ref_count(num), 1);
/// # free_value(&mut heap, original, true);
/// ```
pub fn copy_value(heap: &mut HeapArena, value: Value, retain_if_object: bool) -> Value {
    match value {
        Value::Simple(_) => {}
        Value::Number(reference) => heap.retain_number(reference),
        Value::String(reference) => heap.retain_string(reference),
        Value::Object(reference) => {
            if retain_if_object {
                heap.retain_object(reference);
            }
        }
    }
    value
}

/// Consumes `value`, releasing the heap cell it names.
///
/// Numbers and strings are always released. Objects are released only
/// when `release_if_object` is set, mirroring the copy-side flag.
///
/// Simple cells free without side effects.
pub fn free_value(heap: &mut HeapArena, value: Value, release_if_object: bool) {
    match value {
        Value::Simple(_) => {}
        Value::Number(reference) => heap.release_number(reference),
        Value::String(reference) => heap.release_string(reference),
        Value::Object(reference) => {
            if release_if_object {
                heap.release_object(reference);
            }
        }
    }
}

/// Duplicates a completion, retaining the heap cell its value names.
///
/// The kind is preserved; the value is copied with object retention (a
/// copied completion owns its value outright). `Meta` completions carry
/// nothing and copy without side effects.
pub fn copy_completion(heap: &mut HeapArena, completion: Completion) -> Completion {
    if completion.is_meta() {
        return completion;
    }
    let value = copy_value(heap, completion.value(), true);
    Completion::new(completion.kind(), value)
}

/// Consumes a completion, releasing the heap cell its value names.
///
/// The value is freed with object release, matching
/// [`copy_completion`]'s retention. `Meta` completions carry nothing and
/// free without side effects.
pub fn free_completion(heap: &mut HeapArena, completion: Completion) {
    if completion.is_meta() {
        return;
    }
    free_value(heap, completion.value(), true);
}
