//! Screen-level controllers built on top of the stores
//!
//! - [`list::ListView`]: collection plus filtered view, shared by all screens
//! - [`board::CouponBoard`]: coupon list with stats, selection and bulk delete
//! - [`coupon_form::CouponForm`] / [`slab_form::SlabForm`]: create/edit modals

pub mod board;
pub mod codes;
pub mod coupon_form;
pub mod list;
pub mod prompt;
pub mod selection;
pub mod slab_form;
pub mod stats;

pub use board::{CouponBoard, CouponCriteria, DeleteOutcome};
pub use coupon_form::{CouponForm, FormState, SaveOutcome};
pub use list::ListView;
pub use prompt::Confirm;
pub use selection::SelectionTracker;
pub use slab_form::{SlabForm, SlabFormState};
pub use stats::CouponStats;
