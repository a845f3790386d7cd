//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// An entity keeps its identifier for its whole lifetime; every other field may
/// change through guarded mutators.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;

    /// Whether `other` carries the same identity, regardless of its other fields.
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
