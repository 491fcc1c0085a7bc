//! Row selection over the filtered view
//!
//! Selection is derived state: it only ever refers to rows of the current
//! view, and is recomputed from the view after every refresh so that it never
//! points at a removed entity.

use crate::core::Entity;
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    view_ids: Vec<i64>,
    selected: HashSet<i64>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt a new view. Selected ids that left the view are dropped.
    pub fn refresh<T: Entity>(&mut self, view: &[T]) {
        self.view_ids = view.iter().map(Entity::id).collect();
        let in_view: HashSet<i64> = self.view_ids.iter().copied().collect();
        self.selected.retain(|id| in_view.contains(id));
    }

    /// Flip one row. Returns the new state, or `None` if `id` is not in the view.
    pub fn toggle(&mut self, id: i64) -> Option<bool> {
        if !self.view_ids.contains(&id) {
            return None;
        }
        if self.selected.remove(&id) {
            Some(false)
        } else {
            self.selected.insert(id);
            Some(true)
        }
    }

    /// Set every row of the view to `checked`
    pub fn toggle_all(&mut self, checked: bool) {
        if checked {
            self.selected = self.view_ids.iter().copied().collect();
        } else {
            self.selected.clear();
        }
    }

    /// True iff the view is non-empty and every row is selected
    pub fn all_selected(&self) -> bool {
        !self.view_ids.is_empty() && self.view_ids.iter().all(|id| self.selected.contains(id))
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selected.contains(&id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Selected ids, in view order
    pub fn selected_ids(&self) -> Vec<i64> {
        self.view_ids
            .iter()
            .copied()
            .filter(|id| self.selected.contains(id))
            .collect()
    }

    /// Selected rows of `view`, in view order
    pub fn selected<'a, T: Entity>(&self, view: &'a [T]) -> Vec<&'a T> {
        view.iter().filter(|e| self.selected.contains(&e.id())).collect()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::seed;

    fn tracker_over_seed() -> (SelectionTracker, Vec<crate::entities::Coupon>) {
        let view = seed::coupons();
        let mut tracker = SelectionTracker::new();
        tracker.refresh(&view);
        (tracker, view)
    }

    #[test]
    fn test_toggle_all_then_single_toggle() {
        let (mut tracker, _) = tracker_over_seed();

        tracker.toggle_all(true);
        assert!(tracker.all_selected());
        assert_eq!(tracker.selected_count(), 3);

        assert_eq!(tracker.toggle(2), Some(false));
        assert!(!tracker.all_selected());
        assert_eq!(tracker.selected_ids(), vec![1, 3]);
    }

    #[test]
    fn test_empty_view_is_never_all_selected() {
        let mut tracker = SelectionTracker::new();
        tracker.refresh::<crate::entities::Coupon>(&[]);
        tracker.toggle_all(true);

        assert!(!tracker.all_selected());
    }

    #[test]
    fn test_toggle_outside_view_is_ignored() {
        let (mut tracker, _) = tracker_over_seed();
        assert_eq!(tracker.toggle(99), None);
        assert_eq!(tracker.selected_count(), 0);
    }

    #[test]
    fn test_refresh_drops_rows_that_left_the_view() {
        let (mut tracker, view) = tracker_over_seed();
        tracker.toggle_all(true);

        let narrowed: Vec<_> = view.iter().filter(|c| c.id != 1).cloned().collect();
        tracker.refresh(&narrowed);

        assert_eq!(tracker.selected_ids(), vec![2, 3]);
        assert!(tracker.all_selected());
        assert!(!tracker.is_selected(1));
    }

    #[test]
    fn test_selected_rows_follow_view_order() {
        let (mut tracker, view) = tracker_over_seed();
        tracker.toggle(3);
        tracker.toggle(1);

        let codes: Vec<&str> = tracker
            .selected(&view)
            .into_iter()
            .map(|c| c.code.as_str())
            .collect();
        assert_eq!(codes, vec!["WELCOME10", "THANKS-ASHA"]);
    }

    #[test]
    fn test_toggle_all_false_clears() {
        let (mut tracker, _) = tracker_over_seed();
        tracker.toggle_all(true);
        tracker.toggle_all(false);
        assert_eq!(tracker.selected_count(), 0);
    }
}
