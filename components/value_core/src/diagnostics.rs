//! Assertion and formatting helpers.

use heap_arena::HeapArena;

use crate::value::Value;

/// Debug-asserts that `value` is one the language specification can
/// observe, i.e. not the internal empty placeholder.
///
/// Evaluator code calls this at points where an internal placeholder must
/// not leak into script-visible territory (completed script results,
/// argument lists, property values).
pub fn assert_value_spec_defined(value: Value) {
    debug_assert!(
        !value.is_empty(),
        "internal empty value in spec-visible position"
    );
}

/// Renders `value` for diagnostics.
///
/// Simple values render by name, numbers the way the language prints
/// them, strings verbatim, objects as an opaque marker. Used by tests and
/// host-side logging; evaluator semantics never go through here.
pub fn format_value(heap: &HeapArena, value: Value) -> String {
    match value {
        Value::Simple(simple) => simple.name().to_string(),
        Value::Number(reference) => heap.number_cell(reference).to_display_string(),
        Value::String(reference) => heap.get_string(reference).to_string(),
        Value::Object(_) => "[object Object]".to_string(),
    }
}
