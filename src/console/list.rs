//! Filtered list view backing a console screen

use crate::core::{EntityStore, FilterCriteria, Searchable};

/// The collection last loaded from a store, plus the rows visible under the
/// current criteria.
///
/// The view is not reactive: call [`refresh`](Self::refresh) after a mutation,
/// or [`set_criteria`](Self::set_criteria) when the filters change.
#[derive(Debug, Clone)]
pub struct ListView<T: Searchable> {
    collection: Vec<T>,
    criteria: FilterCriteria<T::Status, T::Kind>,
    visible: Vec<T>,
}

impl<T: Searchable> Default for ListView<T> {
    fn default() -> Self {
        Self {
            collection: Vec::new(),
            criteria: FilterCriteria::default(),
            visible: Vec::new(),
        }
    }
}

impl<T: Searchable> ListView<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reload the collection from `store` and re-run the filter
    pub async fn refresh<S>(&mut self, store: &S)
    where
        S: EntityStore<T> + ?Sized,
    {
        let collection = store.list().await;
        self.load(collection);
    }

    /// Replace the collection and re-run the filter
    pub fn load(&mut self, collection: Vec<T>) {
        self.collection = collection;
        self.apply();
    }

    /// Replace the criteria and re-run the filter
    pub fn set_criteria(&mut self, criteria: FilterCriteria<T::Status, T::Kind>) {
        self.criteria = criteria;
        self.apply();
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.criteria.search_term = term.into();
        self.apply();
    }

    /// Reset every filter
    pub fn clear_filters(&mut self) {
        self.set_criteria(FilterCriteria::default());
    }

    pub fn criteria(&self) -> &FilterCriteria<T::Status, T::Kind> {
        &self.criteria
    }

    /// The full collection, unfiltered
    pub fn collection(&self) -> &[T] {
        &self.collection
    }

    /// Rows matching the current criteria, in collection order
    pub fn visible(&self) -> &[T] {
        &self.visible
    }

    fn apply(&mut self) {
        self.visible = self.criteria.apply(&self.collection);
    }
}
