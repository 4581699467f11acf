//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// A value object has no identity of its own; two instances with the same
/// attribute values are interchangeable. They are immutable: "modifying"
/// one means constructing a replacement with the new values, which is
/// exactly how the filter state is updated on every user interaction.
///
/// The bounds (`Clone + PartialEq + Debug`) are the minimum needed to
/// copy, compare, and log a value.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
