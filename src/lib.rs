//! # Backoffice Console
//!
//! The client-side core of a store backoffice: coupons, orders and delivery
//! preference slabs, each managed through the same filter-and-aggregate
//! pattern over a locally held collection.
//!
//! ## Features
//!
//! - **Entity stores**: one async [`EntityStore`](core::EntityStore) trait,
//!   backed by an in-memory seeded store or the remote coupon REST API
//! - **Snapshots**: every mutation publishes the new collection to subscribers
//! - **Filtering**: free-text search plus status/kind selects, combined with AND
//! - **Stats**: coupon counts by status, discount type and origin, usage and savings
//! - **Selection**: id-based checkbox tracking, recomputed on every refresh
//! - **Forms**: create/edit state machines with field-level validation
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use backoffice::prelude::*;
//!
//! let store = Arc::new(InMemoryStore::seeded(seed::coupons()));
//! let mut board = CouponBoard::new(store);
//! board.refresh().await;
//!
//! board.apply_filter_inputs("", "Expired", "");
//! println!("{} expired", board.visible().len());
//!
//! board.delete_expired(&|msg: &str| { println!("{msg}"); true }).await?;
//! ```

pub mod config;
pub mod console;
pub mod core;
pub mod entities;
pub mod storage;
pub mod telemetry;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        ConsoleError, Entity, EntityStore, FieldError, FilterCriteria, Mutation, Searchable,
        SharedSnapshot, Snapshot, SnapshotBus, ValidationError, WireEnum,
    };

    // === Macros ===
    pub use crate::impl_wire_enum;

    // === Entities ===
    pub use crate::entities::{
        Coupon, CouponStatus, CouponType, CustomerType, DiscountType, Order, OrderChannel,
        OrderItem, OrderStatus, Slab, SlabStatus,
    };

    // === Storage ===
    pub use crate::storage::{InMemoryStore, RemoteCouponStore, seed};

    // === Console ===
    pub use crate::console::{
        Confirm, CouponBoard, CouponCriteria, CouponForm, CouponStats, DeleteOutcome, FormState,
        ListView, SaveOutcome, SelectionTracker, SlabForm, SlabFormState,
    };

    // === Config ===
    pub use crate::config::{ApiConfig, ConsoleConfig, CouponDefaults};

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use chrono::NaiveDate;
    pub use std::sync::Arc;
}
