//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Shelf-life
/// profiles, ambient readings and predictions are all value objects: two
/// readings of 21.5 °C / 60 % are the same reading no matter where they came
/// from, and "changing" one means building a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct AmbientConditions {
///     temp_c: f64,
///     humidity: f64,
/// }
///
/// impl ValueObject for AmbientConditions {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
