//! The tagged value cell.

use heap_arena::{NumberRef, ObjectRef, StringRef};

use crate::simple::SimpleValue;

/// One runtime value.
///
/// A value is either a [`SimpleValue`] stored inline or a restricted-width
/// reference to a heap number, string or object. The variant tag fully
/// determines how the payload is interpreted, and the whole cell is a
/// small `Copy` scalar, so arrays of values, stack frames of values and
/// argument lists can all be sized statically.
///
/// # Ownership
///
/// A heap-referencing cell does **not** own the cell it names. Assigning
/// or copying a `Value` duplicates the reference only and never touches
/// reference counts; taking or giving up ownership is the explicit job of
/// [`lifecycle::copy_value`](crate::lifecycle::copy_value) and
/// [`lifecycle::free_value`](crate::lifecycle::free_value).
///
/// # Examples
///
/// ```
/// use heap_arena::HeapArena;
/// use value_core::Value;
///
/// let mut heap = HeapArena::new();
/// let num = heap.alloc_number(42.0).unwrap();
///
/// let value = Value::Number(num);
/// assert!(value.is_number());
/// assert_eq!(heap.get_number(value.as_number()), 42.0);
///
/// let flag = Value::boolean(true);
/// assert!(flag.is_boolean());
/// assert!(flag.is_true());
///
/// heap.release_number(num);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    /// A non-heap constant stored inline
    Simple(SimpleValue),
    /// Reference to a heap number cell
    Number(NumberRef),
    /// Reference to a heap string cell
    String(StringRef),
    /// Reference to a heap object cell
    Object(ObjectRef),
}

impl Value {
    /// The internal "no value yet" placeholder.
    pub fn empty() -> Self {
        Value::Simple(SimpleValue::Empty)
    }

    /// The language's `undefined`.
    pub fn undefined() -> Self {
        Value::Simple(SimpleValue::Undefined)
    }

    /// The language's `null`.
    pub fn null() -> Self {
        Value::Simple(SimpleValue::Null)
    }

    /// The boolean cell for a host boolean.
    pub fn boolean(value: bool) -> Self {
        Value::Simple(SimpleValue::from_bool(value))
    }

    /// Whether this is the internal empty placeholder.
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Simple(SimpleValue::Empty))
    }

    /// Whether this is `undefined`.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Simple(SimpleValue::Undefined))
    }

    /// Whether this is `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Simple(SimpleValue::Null))
    }

    /// Whether this is the boolean `true` or `false`.
    pub fn is_boolean(&self) -> bool {
        matches!(
            self,
            Value::Simple(SimpleValue::True) | Value::Simple(SimpleValue::False)
        )
    }

    /// Whether this is the boolean `true`.
    ///
    /// Defined only for boolean cells; asking a non-boolean cell is an
    /// engine-internal programming error.
    pub fn is_true(&self) -> bool {
        debug_assert!(self.is_boolean(), "is_true asked of a non-boolean value");
        matches!(self, Value::Simple(SimpleValue::True))
    }

    /// Whether this references a heap number.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Whether this references a heap string.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Whether this references a heap object.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// The heap number reference this cell carries.
    ///
    /// The returned reference is non-owning.
    ///
    /// # Panics
    ///
    /// Panics if the cell is not number-tagged.
    pub fn as_number(&self) -> NumberRef {
        match self {
            Value::Number(reference) => *reference,
            other => panic!("number extraction from a {:?} value", other),
        }
    }

    /// The heap string reference this cell carries.
    ///
    /// The returned reference is non-owning.
    ///
    /// # Panics
    ///
    /// Panics if the cell is not string-tagged.
    pub fn as_string(&self) -> StringRef {
        match self {
            Value::String(reference) => *reference,
            other => panic!("string extraction from a {:?} value", other),
        }
    }

    /// The heap object reference this cell carries.
    ///
    /// The returned reference is non-owning.
    ///
    /// # Panics
    ///
    /// Panics if the cell is not object-tagged.
    pub fn as_object(&self) -> ObjectRef {
        match self {
            Value::Object(reference) => *reference,
            other => panic!("object extraction from a {:?} value", other),
        }
    }
}

impl Default for Value {
    /// Default construction yields the empty placeholder.
    fn default() -> Self {
        Value::empty()
    }
}
