//! Value object trait: equality by value, not identity.
//!
//! Item names and quantities carry no identity of their own; two values with
//! the same contents are interchangeable.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "change" one,
/// construct a new value. Implementors validate their contents on
/// construction, so holding one is proof the input was well-formed.
///
/// ```ignore
/// let a = ItemName::parse("apple")?;
/// let b = ItemName::parse("apple")?;
/// assert_eq!(a, b); // equal by value
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
