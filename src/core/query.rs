//! Filter engine for client-side collections
//!
//! The filter engine narrows a fully resident collection down to the rows that
//! match the criteria a list screen exposes: a free-text search box plus a
//! status select and a type/category select.
//!
//! # Example
//! ```rust,ignore
//! let criteria = FilterCriteria::new()
//!     .search("summer")
//!     .status(CouponStatus::Active);
//!
//! let visible = criteria.apply(&coupons);
//! ```

use crate::core::entity::Searchable;
use crate::core::field::WireEnum;

/// Filter criteria for one list screen
///
/// Empty search term and `None` selects mean "no filter" for that dimension.
/// All set dimensions must match (logical AND).
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria<S, K> {
    /// Free-text search, matched case-insensitively as a substring
    pub search_term: String,

    /// Keep only entities with this status
    pub status: Option<S>,

    /// Keep only entities of this type or category
    pub kind: Option<K>,
}

impl<S, K> Default for FilterCriteria<S, K> {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            status: None,
            kind: None,
        }
    }
}

impl<S: Copy + PartialEq, K: Copy + PartialEq> FilterCriteria<S, K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn status(mut self, status: S) -> Self {
        self.status = Some(status);
        self
    }

    pub fn kind(mut self, kind: K) -> Self {
        self.kind = Some(kind);
        self
    }

    /// True when no dimension is set
    pub fn is_empty(&self) -> bool {
        self.search_term.trim().is_empty() && self.status.is_none() && self.kind.is_none()
    }

    /// Check a single entity against the criteria
    pub fn matches<T>(&self, entity: &T) -> bool
    where
        T: Searchable<Status = S, Kind = K>,
    {
        let term = self.search_term.trim().to_lowercase();
        if !term.is_empty() && !matches_text(entity, &term) {
            return false;
        }

        self.status.is_none_or(|s| entity.status() == s)
            && self.kind.is_none_or(|k| entity.kind() == k)
    }

    /// Apply the criteria to a collection.
    ///
    /// This is a stable filter: the output keeps the input's relative order.
    pub fn apply<T>(&self, collection: &[T]) -> Vec<T>
    where
        T: Searchable<Status = S, Kind = K>,
    {
        if self.is_empty() {
            return collection.to_vec();
        }

        let filtered: Vec<T> = collection
            .iter()
            .filter(|entity| self.matches(*entity))
            .cloned()
            .collect();

        tracing::debug!(
            entity_type = T::resource_name(),
            total = collection.len(),
            matched = filtered.len(),
            "Applied filter criteria"
        );

        filtered
    }
}

impl<S: WireEnum, K: WireEnum> FilterCriteria<S, K> {
    /// Build criteria from raw select values.
    ///
    /// Empty or unknown labels leave the dimension unfiltered.
    pub fn from_labels(search_term: &str, status_label: &str, kind_label: &str) -> Self {
        Self {
            search_term: search_term.to_string(),
            status: S::from_label(status_label),
            kind: K::from_label(kind_label),
        }
    }
}

/// Case-insensitive substring match against any present textual field.
/// `term` must already be lower-cased.
fn matches_text<T: Searchable>(entity: &T, term: &str) -> bool {
    entity
        .search_fields()
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(term))
}
