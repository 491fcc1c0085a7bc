//! Create/edit modal for coupons
//!
//! ```text
//!             show_create(Generated)          save() ok / close()
//!   Closed ───────────────────────▶ CreatingGenerated ──────────────▶ Closed
//!     │       show_create(Community)
//!     ├───────────────────────────▶ CreatingCommunity ──────────────▶ Closed
//!     │       edit(coupon)
//!     └───────────────────────────▶ Editing ────────────────────────▶ Closed
//! ```
//!
//! A failed `save()` leaves the state and the draft in place so the user can
//! fix the fields and retry.

use chrono::{Days, Local, NaiveDate};
use std::collections::HashSet;

use crate::config::CouponDefaults;
use crate::console::codes::{code_space, generate_code, generate_unique_code};
use crate::core::validation::{ValidationReport, filters, validators};
use crate::core::{ConsoleError, EntityStore, FieldError, Mutation, ValidationError};
use crate::entities::{Coupon, CouponType, DiscountType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Closed,
    CreatingGenerated,
    CreatingCommunity,
    Editing,
}

impl FormState {
    pub fn is_open(&self) -> bool {
        !matches!(self, FormState::Closed)
    }

    pub fn is_creating(&self) -> bool {
        matches!(self, FormState::CreatingGenerated | FormState::CreatingCommunity)
    }
}

/// Result of a successful save
#[derive(Debug, Clone, PartialEq)]
pub struct SaveOutcome<T> {
    /// Entities written to the store, in commit order
    pub saved: Vec<T>,
    /// Message for the success alert
    pub message: String,
}

/// State machine behind the coupon modal
#[derive(Debug, Clone)]
pub struct CouponForm {
    state: FormState,
    draft: Option<Coupon>,
    quantity: u32,
    defaults: CouponDefaults,
}

impl Default for CouponForm {
    fn default() -> Self {
        Self::new(CouponDefaults::default())
    }
}

impl CouponForm {
    pub fn new(defaults: CouponDefaults) -> Self {
        Self {
            state: FormState::Closed,
            draft: None,
            quantity: 1,
            defaults,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn draft(&self) -> Option<&Coupon> {
        self.draft.as_ref()
    }

    /// Mutable access for input bindings; `None` while closed
    pub fn draft_mut(&mut self) -> Option<&mut Coupon> {
        self.draft.as_mut()
    }

    /// Number of coupons a generated-type save creates
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    /// Open the modal on a fresh draft valid from today
    pub fn show_create(&mut self, coupon_type: CouponType) {
        self.show_create_on(coupon_type, Local::now().date_naive());
    }

    /// Open the modal on a fresh draft valid from `today`
    pub fn show_create_on(&mut self, coupon_type: CouponType, today: NaiveDate) {
        let end = today
            .checked_add_days(Days::new(u64::from(self.defaults.validity_days)))
            .unwrap_or(today);
        let code = generate_code(self.defaults.code_length);

        self.draft = Some(Coupon::draft(coupon_type, code, today, end));
        self.quantity = 1;
        self.state = match coupon_type {
            CouponType::Generated => FormState::CreatingGenerated,
            CouponType::Community => FormState::CreatingCommunity,
        };
        tracing::debug!(state = ?self.state, "Coupon form opened");
    }

    /// Open the modal on a copy of `coupon`
    pub fn edit(&mut self, coupon: &Coupon) {
        self.draft = Some(coupon.clone());
        self.quantity = 1;
        self.state = FormState::Editing;
        tracing::debug!(id = coupon.id, "Coupon form opened for edit");
    }

    /// Discard the draft
    pub fn close(&mut self) {
        self.state = FormState::Closed;
        self.draft = None;
        self.quantity = 1;
    }

    /// Validate and commit the draft.
    ///
    /// Editing commits through `update`, creating through `add` (once per
    /// requested coupon for generated batches). On success the modal closes.
    pub async fn save<S>(&mut self, store: &S) -> Result<SaveOutcome<Coupon>, ConsoleError>
    where
        S: EntityStore<Coupon> + ?Sized,
    {
        let state = self.state;
        let Some(draft) = self.draft.as_mut() else {
            return Err(ConsoleError::invalid_state("no coupon form is open"));
        };
        normalize(draft);

        let mut taken: HashSet<String> = if state.is_creating() {
            store.list().await.into_iter().map(|c| c.code).collect()
        } else {
            HashSet::new()
        };

        let draft = draft.clone();
        validate(&draft, state, self.quantity, &self.defaults, &taken)?;

        let outcome = match state {
            FormState::Closed => {
                return Err(ConsoleError::invalid_state("no coupon form is open"));
            }
            FormState::Editing => match store.update(draft.clone()).await? {
                Mutation::Applied => SaveOutcome {
                    message: format!("Coupon {} updated", draft.code),
                    saved: vec![draft],
                },
                Mutation::NotFound => SaveOutcome {
                    message: format!("Coupon {} no longer exists, nothing was updated", draft.code),
                    saved: Vec::new(),
                },
            },
            FormState::CreatingCommunity => {
                let created = store.add(draft).await?;
                SaveOutcome {
                    message: format!("Coupon {} created", created.code),
                    saved: vec![created],
                }
            }
            FormState::CreatingGenerated => {
                taken.insert(draft.code.clone());
                let mut saved = Vec::with_capacity(self.quantity as usize);
                for i in 0..self.quantity {
                    let mut coupon = draft.clone();
                    if i > 0 {
                        let Some(code) = generate_unique_code(self.defaults.code_length, &mut taken)
                        else {
                            tracing::warn!(
                                created = saved.len(),
                                requested = self.quantity,
                                "Coupon batch interrupted, no free code found"
                            );
                            return Err(ConsoleError::Internal(format!(
                                "no free coupon code of length {} after {} created",
                                self.defaults.code_length,
                                saved.len()
                            )));
                        };
                        coupon.code = code;
                    }
                    match store.add(coupon).await {
                        Ok(created) => saved.push(created),
                        Err(e) => {
                            tracing::warn!(
                                created = saved.len(),
                                requested = self.quantity,
                                error = %e,
                                "Coupon batch interrupted"
                            );
                            return Err(e);
                        }
                    }
                }
                SaveOutcome {
                    message: if saved.len() == 1 {
                        format!("Coupon {} created", saved[0].code)
                    } else {
                        format!("{} coupons created", saved.len())
                    },
                    saved,
                }
            }
        };

        tracing::info!(saved = outcome.saved.len(), "Coupon form saved");
        self.close();
        Ok(outcome)
    }
}

/// Trim text fields, upper-case the code, blank optionals become `None`
fn normalize(draft: &mut Coupon) {
    let trim = filters::trim();
    let trim_option = filters::trim_option();

    draft.name = trim(draft.name.as_str());
    draft.code = filters::uppercase()(draft.code.as_str());
    draft.description = trim_option(draft.description.as_deref());
    draft.community_name = trim_option(draft.community_name.as_deref());
    draft.customer_name = trim_option(draft.customer_name.as_deref());
}

fn validate(
    draft: &Coupon,
    state: FormState,
    quantity: u32,
    defaults: &CouponDefaults,
    taken: &HashSet<String>,
) -> Result<(), ValidationError> {
    let mut report = ValidationReport::new();
    report
        .check("name", validators::required()("Name", draft.name.as_str()))
        .check("code", validators::required()("Code", draft.code.as_str()))
        .check(
            "discountValue",
            validators::positive()("Discount value", draft.discount_value),
        )
        .check(
            "endDate",
            validators::date_order()("Validity", draft.start_date, draft.end_date),
        );

    if draft.discount_type == DiscountType::Percentage {
        report.check(
            "discountValue",
            validators::max_value(100.0)("Percentage discount", draft.discount_value),
        );
    }

    if draft.coupon_type == CouponType::Community {
        report.check(
            "communityName",
            validators::required_option()("Community name", draft.community_name.as_deref()),
        );
    }

    if state == FormState::CreatingGenerated {
        report.check(
            "quantity",
            validators::count_between(defaults.max_batch)("Quantity", quantity),
        );
        report.check("quantity", fits_code_space(draft, quantity, defaults, taken));
    }

    let mut result = report.finish();
    if state.is_creating() && !draft.code.is_empty() && taken.contains(&draft.code) {
        let duplicate = FieldError::new("code", format!("Code {} is already in use", draft.code));
        result = match result {
            Ok(()) => Err(ValidationError::FieldErrors(vec![duplicate])),
            Err(ValidationError::FieldErrors(mut errors)) => {
                errors.push(duplicate);
                Err(ValidationError::FieldErrors(errors))
            }
        };
    }
    result
}

/// The batch needs `quantity - 1` fresh codes besides the draft's own
fn fits_code_space(
    draft: &Coupon,
    quantity: u32,
    defaults: &CouponDefaults,
    taken: &HashSet<String>,
) -> Result<(), String> {
    let length = defaults.code_length;
    let used = taken
        .iter()
        .chain(std::iter::once(&draft.code))
        .filter(|code| code.len() == length)
        .collect::<HashSet<_>>()
        .len() as u64;
    let free = code_space(length).saturating_sub(used);
    let needed = u64::from(quantity.saturating_sub(1));
    if needed > free {
        return Err(format!(
            "Only {} more unique codes of length {} are available",
            free, length
        ));
    }
    Ok(())
}
