//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Pantry items are entities: their predictions, quantity and storage change
/// over time while the identifier stays put.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
