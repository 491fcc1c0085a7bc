//! Create/edit modal for preference slabs

use crate::console::coupon_form::SaveOutcome;
use crate::core::validation::{ValidationReport, filters, validators};
use crate::core::{ConsoleError, EntityStore, Mutation, ValidationError};
use crate::entities::{CustomerType, Slab};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlabFormState {
    Closed,
    Creating,
    Editing,
}

/// State machine behind the slab modal
#[derive(Debug, Clone)]
pub struct SlabForm {
    state: SlabFormState,
    draft: Option<Slab>,
}

impl Default for SlabForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SlabForm {
    pub fn new() -> Self {
        Self {
            state: SlabFormState::Closed,
            draft: None,
        }
    }

    pub fn state(&self) -> SlabFormState {
        self.state
    }

    pub fn draft(&self) -> Option<&Slab> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut Slab> {
        self.draft.as_mut()
    }

    pub fn show_create(&mut self, customer_type: CustomerType) {
        self.draft = Some(Slab::draft(customer_type));
        self.state = SlabFormState::Creating;
    }

    pub fn edit(&mut self, slab: &Slab) {
        self.draft = Some(slab.clone());
        self.state = SlabFormState::Editing;
    }

    pub fn close(&mut self) {
        self.state = SlabFormState::Closed;
        self.draft = None;
    }

    /// Validate and commit the draft, then close
    pub async fn save<S>(&mut self, store: &S) -> Result<SaveOutcome<Slab>, ConsoleError>
    where
        S: EntityStore<Slab> + ?Sized,
    {
        let Some(draft) = self.draft.as_mut() else {
            return Err(ConsoleError::invalid_state("no slab form is open"));
        };

        draft.name = filters::trim()(draft.name.as_str());
        let round = filters::round_decimals(2);
        draft.min_amount = round(draft.min_amount);
        draft.max_amount = round(draft.max_amount);
        draft.delivery_charge = round(draft.delivery_charge);
        draft.tax_percent = round(draft.tax_percent);

        validate(draft)?;
        let draft = draft.clone();

        let outcome = match self.state {
            SlabFormState::Closed => {
                return Err(ConsoleError::invalid_state("no slab form is open"));
            }
            SlabFormState::Creating => {
                let created = store.add(draft).await?;
                SaveOutcome {
                    message: format!("Slab {} created", created.name),
                    saved: vec![created],
                }
            }
            SlabFormState::Editing => match store.update(draft.clone()).await? {
                Mutation::Applied => SaveOutcome {
                    message: format!("Slab {} updated", draft.name),
                    saved: vec![draft],
                },
                Mutation::NotFound => SaveOutcome {
                    message: format!("Slab {} no longer exists, nothing was updated", draft.name),
                    saved: Vec::new(),
                },
            },
        };

        self.close();
        Ok(outcome)
    }
}

fn validate(draft: &Slab) -> Result<(), ValidationError> {
    let mut report = ValidationReport::new();
    report
        .check("name", validators::required()("Name", draft.name.as_str()))
        .check(
            "minAmount",
            validators::non_negative()("Minimum amount", draft.min_amount),
        )
        .check(
            "maxAmount",
            validators::ordered_range()("Amount range", draft.min_amount, draft.max_amount),
        )
        .check(
            "deliveryCharge",
            validators::non_negative()("Delivery charge", draft.delivery_charge),
        )
        .check(
            "taxPercent",
            validators::non_negative()("Tax", draft.tax_percent),
        )
        .check(
            "taxPercent",
            validators::max_value(100.0)("Tax", draft.tax_percent),
        );
    report.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{InMemoryStore, seed};

    #[tokio::test]
    async fn test_create_slab() {
        let store = InMemoryStore::seeded(seed::slabs());
        let mut form = SlabForm::new();
        form.show_create(CustomerType::Corporate);
        {
            let draft = form.draft_mut().unwrap();
            draft.name = " Corporate bulk ".to_string();
            draft.min_amount = 20000.0;
            draft.max_amount = 99999.999;
            draft.tax_percent = 18.0;
        }

        let outcome = form.save(&store).await.unwrap();

        let created = &outcome.saved[0];
        assert_eq!(created.id, 6);
        assert_eq!(created.name, "Corporate bulk");
        assert_eq!(created.max_amount, 100000.0);
        assert_eq!(form.state(), SlabFormState::Closed);
        assert_eq!(store.len(), 6);
    }

    #[tokio::test]
    async fn test_min_above_max_fails() {
        let store = InMemoryStore::seeded(seed::slabs());
        let mut form = SlabForm::new();
        let existing = store.get(1).await.unwrap();
        form.edit(&existing);
        form.draft_mut().unwrap().min_amount = 1000.0;

        let err = form.save(&store).await.unwrap_err();

        match err {
            ConsoleError::Validation(v) => assert!(v.has_field("maxAmount")),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(form.state(), SlabFormState::Editing);
        assert_eq!(store.get(1).await.unwrap().min_amount, 0.0);
    }

    #[tokio::test]
    async fn test_edit_updates_store() {
        let store = InMemoryStore::seeded(seed::slabs());
        let mut form = SlabForm::new();
        form.edit(&store.get(3).await.unwrap());
        form.draft_mut().unwrap().delivery_charge = 199.0;

        let outcome = form.save(&store).await.unwrap();

        assert_eq!(outcome.message, "Slab Wholesale standard updated");
        assert_eq!(store.get(3).await.unwrap().delivery_charge, 199.0);
    }

    #[tokio::test]
    async fn test_save_while_closed() {
        let store = InMemoryStore::<Slab>::new();
        let mut form = SlabForm::new();
        assert!(matches!(
            form.save(&store).await,
            Err(ConsoleError::InvalidState { .. })
        ));
    }
}
