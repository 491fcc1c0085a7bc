//! The coupon screen: list, stats, selection and bulk deletion wired to a store

use std::sync::Arc;

use crate::console::coupon_form::{CouponForm, SaveOutcome};
use crate::console::list::ListView;
use crate::console::prompt::Confirm;
use crate::console::selection::SelectionTracker;
use crate::console::stats::{self, CouponStats};
use crate::core::{ConsoleError, EntityStore, FilterCriteria, Mutation};
use crate::entities::{Coupon, CouponStatus, CouponType};

pub type CouponCriteria = FilterCriteria<CouponStatus, CouponType>;

/// Result of a confirmed-or-declined deletion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user said no; nothing was sent to the store
    Declined,
    /// Nothing matched, so no prompt was shown
    NothingToDelete,
    /// The store processed the deletes
    Deleted { removed: usize, missing: usize },
}

/// Coupon list screen state
///
/// Every mutation goes through the store and is followed by a refresh, which
/// re-runs the filter and recomputes the selection from the new view.
pub struct CouponBoard<S: EntityStore<Coupon> + ?Sized> {
    store: Arc<S>,
    list: ListView<Coupon>,
    selection: SelectionTracker,
}

impl<S: EntityStore<Coupon> + ?Sized> CouponBoard<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            list: ListView::new(),
            selection: SelectionTracker::new(),
        }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Reload from the store, re-filter and recompute the selection
    pub async fn refresh(&mut self) {
        self.list.refresh(self.store.as_ref()).await;
        self.selection.refresh(self.list.visible());
    }

    pub fn set_criteria(&mut self, criteria: CouponCriteria) {
        self.list.set_criteria(criteria);
        self.selection.refresh(self.list.visible());
    }

    /// Apply raw select values from the filter bar
    pub fn apply_filter_inputs(&mut self, search: &str, status: &str, coupon_type: &str) {
        self.set_criteria(CouponCriteria::from_labels(search, status, coupon_type));
    }

    pub fn criteria(&self) -> &CouponCriteria {
        self.list.criteria()
    }

    /// Every coupon, unfiltered
    pub fn coupons(&self) -> &[Coupon] {
        self.list.collection()
    }

    /// The filtered view
    pub fn visible(&self) -> &[Coupon] {
        self.list.visible()
    }

    /// Dashboard figures over the full collection
    pub fn stats(&self) -> CouponStats {
        CouponStats::compute(self.list.collection())
    }

    pub fn expired_coupons(&self) -> Vec<&Coupon> {
        stats::expired(self.list.collection())
    }

    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    pub fn toggle(&mut self, id: i64) -> Option<bool> {
        self.selection.toggle(id)
    }

    pub fn toggle_all(&mut self, checked: bool) {
        self.selection.toggle_all(checked);
    }

    pub fn all_selected(&self) -> bool {
        self.selection.all_selected()
    }

    pub fn selected(&self) -> Vec<&Coupon> {
        self.selection.selected(self.list.visible())
    }

    /// Delete one coupon after confirmation
    pub async fn delete_one(
        &mut self,
        id: i64,
        confirm: &dyn Confirm,
    ) -> Result<DeleteOutcome, ConsoleError> {
        let label = self
            .list
            .collection()
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.code.clone())
            .unwrap_or_else(|| format!("#{}", id));

        if !confirm.confirm(&format!("Delete coupon {}?", label)) {
            return Ok(DeleteOutcome::Declined);
        }
        self.delete_ids(vec![id]).await
    }

    /// Delete every selected coupon of the current view after confirmation
    pub async fn delete_selected(
        &mut self,
        confirm: &dyn Confirm,
    ) -> Result<DeleteOutcome, ConsoleError> {
        let ids = self.selection.selected_ids();
        if ids.is_empty() {
            return Ok(DeleteOutcome::NothingToDelete);
        }
        if !confirm.confirm(&format!("Delete {} selected coupon(s)?", ids.len())) {
            return Ok(DeleteOutcome::Declined);
        }
        self.delete_ids(ids).await
    }

    /// Delete every expired coupon of the collection after confirmation
    pub async fn delete_expired(
        &mut self,
        confirm: &dyn Confirm,
    ) -> Result<DeleteOutcome, ConsoleError> {
        let ids: Vec<i64> = self.expired_coupons().iter().map(|c| c.id).collect();
        if ids.is_empty() {
            return Ok(DeleteOutcome::NothingToDelete);
        }
        if !confirm.confirm(&format!("Delete {} expired coupon(s)?", ids.len())) {
            return Ok(DeleteOutcome::Declined);
        }
        self.delete_ids(ids).await
    }

    /// Commit the form through this board's store, then refresh
    pub async fn save_form(
        &mut self,
        form: &mut CouponForm,
    ) -> Result<SaveOutcome<Coupon>, ConsoleError> {
        let result = form.save(self.store.as_ref()).await;
        if !matches!(result, Err(ConsoleError::Validation(_))) {
            self.refresh().await;
        }
        result
    }

    async fn delete_ids(&mut self, ids: Vec<i64>) -> Result<DeleteOutcome, ConsoleError> {
        let mut removed = 0;
        let mut missing = 0;
        let mut failure = None;

        for id in ids {
            match self.store.delete(id).await {
                Ok(Mutation::Applied) => removed += 1,
                Ok(Mutation::NotFound) => missing += 1,
                Err(e) => {
                    failure = Some(e);
                    break;
                }
            }
        }

        // Refresh even after a failure so the view drops what was removed
        self.refresh().await;
        tracing::info!(removed, missing, "Coupon deletion finished");

        match failure {
            Some(e) => Err(e),
            None => Ok(DeleteOutcome::Deleted { removed, missing }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{InMemoryStore, seed};
    use std::cell::RefCell;

    struct ScriptedConfirm {
        answer: bool,
        prompts: RefCell<Vec<String>>,
    }

    impl ScriptedConfirm {
        fn new(answer: bool) -> Self {
            Self {
                answer,
                prompts: RefCell::new(Vec::new()),
            }
        }
    }

    impl Confirm for ScriptedConfirm {
        fn confirm(&self, message: &str) -> bool {
            self.prompts.borrow_mut().push(message.to_string());
            self.answer
        }
    }

    async fn seeded_board() -> CouponBoard<InMemoryStore<Coupon>> {
        let mut board = CouponBoard::new(Arc::new(InMemoryStore::seeded(seed::coupons())));
        board.refresh().await;
        board
    }

    #[tokio::test]
    async fn test_filter_inputs_use_labels() {
        let mut board = seeded_board().await;

        board.apply_filter_inputs("", "Expired", "");
        assert_eq!(board.visible().len(), 1);

        board.apply_filter_inputs("", "", "Generate");
        assert_eq!(board.visible().len(), 2);

        board.apply_filter_inputs("asha", "", "unknown");
        assert_eq!(board.visible().len(), 1);
        assert_eq!(board.visible()[0].code, "THANKS-ASHA");
    }

    #[tokio::test]
    async fn test_declined_delete_changes_nothing() {
        let mut board = seeded_board().await;
        let confirm = ScriptedConfirm::new(false);

        let outcome = board.delete_one(1, &confirm).await.unwrap();

        assert_eq!(outcome, DeleteOutcome::Declined);
        assert_eq!(board.coupons().len(), 3);
        assert_eq!(confirm.prompts.borrow()[0], "Delete coupon WELCOME10?");
    }

    #[tokio::test]
    async fn test_delete_selected_recomputes_selection() {
        let mut board = seeded_board().await;
        board.toggle(1);
        board.toggle(3);

        let outcome = board.delete_selected(&|_: &str| true).await.unwrap();

        assert_eq!(
            outcome,
            DeleteOutcome::Deleted {
                removed: 2,
                missing: 0
            }
        );
        assert_eq!(board.visible().len(), 1);
        assert_eq!(board.selection().selected_count(), 0);
    }

    #[tokio::test]
    async fn test_delete_selected_without_selection_does_not_prompt() {
        let mut board = seeded_board().await;
        let confirm = ScriptedConfirm::new(true);

        let outcome = board.delete_selected(&confirm).await.unwrap();

        assert_eq!(outcome, DeleteOutcome::NothingToDelete);
        assert!(confirm.prompts.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_toggle_all_respects_filtered_view() {
        let mut board = seeded_board().await;
        board.set_criteria(CouponCriteria::new().kind(CouponType::Generated));

        board.toggle_all(true);
        assert!(board.all_selected());
        assert_eq!(board.selected().len(), 2);

        board.toggle(1);
        assert!(!board.all_selected());
    }

    #[tokio::test]
    async fn test_save_form_refreshes_view() {
        let mut board = seeded_board().await;
        let mut form = CouponForm::default();
        form.show_create(CouponType::Community);
        {
            let draft = form.draft_mut().unwrap();
            draft.name = "Cyclists".to_string();
            draft.discount_value = 7.5;
            draft.community_name = Some("Velo club".to_string());
        }

        board.save_form(&mut form).await.unwrap();

        assert_eq!(board.coupons().len(), 4);
        assert_eq!(board.stats().by_type.community, 2);
    }
}
