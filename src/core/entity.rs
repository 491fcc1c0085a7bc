//! Entity traits defining the core abstraction for all console records

use std::fmt::Debug;

/// Base trait for all entities held by a store.
///
/// All entities have:
/// - id: Identifier assigned by the store (`0` until created)
/// - resource names used in logs and URLs
///
/// Entities are plain values: a store replaces them wholesale on update and
/// hands out clones, so a draft never aliases the stored record.
pub trait Entity: Clone + Debug + Send + Sync + 'static {
    /// The plural resource name (e.g., "coupons", "slabs")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "coupon", "slab")
    fn resource_name_singular() -> &'static str;

    /// Get the identifier for this entity instance
    fn id(&self) -> i64;

    /// Replace the identifier (used by stores when assigning identity)
    fn set_id(&mut self, id: i64);

    /// True until the store has assigned an identity
    fn is_new(&self) -> bool {
        self.id() == 0
    }
}

/// Trait for entities that the filter engine can search and narrow down.
///
/// - search_fields: textual fields consulted by the free-text search
/// - status / kind: the two enum dimensions exposed as select filters
pub trait Searchable: Entity {
    /// Status dimension (e.g., Active / Expired / Inactive)
    type Status: Copy + PartialEq + Debug;

    /// Type or category dimension (e.g., Generated / Community)
    type Kind: Copy + PartialEq + Debug;

    /// Textual fields matched by free-text search. `None` means the field is
    /// absent and is skipped.
    fn search_fields(&self) -> Vec<Option<&str>>;

    fn status(&self) -> Self::Status;

    fn kind(&self) -> Self::Kind;
}
