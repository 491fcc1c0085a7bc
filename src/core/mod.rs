//! Core traits and types shared by every screen of the console

pub mod entity;
pub mod error;
pub mod events;
pub mod field;
pub mod query;
pub mod service;
pub mod validation;

pub use entity::{Entity, Searchable};
pub use error::{ConsoleError, FieldError, ValidationError};
pub use events::{SharedSnapshot, Snapshot, SnapshotBus};
pub use field::WireEnum;
pub use query::FilterCriteria;
pub use service::{EntityStore, Mutation};
