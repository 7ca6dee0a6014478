//! Entity trait: things identified by a key rather than by their values.

/// An object with a stable identifier, e.g. a catalog row keyed by its
/// `ProductCode`. Two entities with the same id denote the same product even
/// if their other fields differ (a stock snapshot taken before and after a
/// sale).
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
