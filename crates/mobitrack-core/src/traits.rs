//! Core traits for the datastore layer.

/// Trait for entities with an opaque string primary key.
///
/// The key accessor is what lets the generic table adapter address items
/// without knowing their concrete type.
pub trait Entity {
    /// Returns the entity's primary key.
    fn id(&self) -> &str;
}
