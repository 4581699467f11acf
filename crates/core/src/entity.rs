//! Entity trait: identity + lookup by identifier.

/// Entity marker + minimal interface.
///
/// Everything in the reference data is keyed by a strongly-typed id;
/// implementing `Entity` is what lets the catalog resolve foreign-key
/// style references generically.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}

/// First entity in `items` whose id equals `id`, if any.
///
/// Total: a reference that matches nothing yields `None`, never an error.
pub fn find_by_id<E: Entity>(items: &[E], id: E::Id) -> Option<&E> {
    items.iter().find(|item| item.id() == id)
}
