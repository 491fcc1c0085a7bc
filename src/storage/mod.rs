//! Store implementations for the console screens

pub mod in_memory;
pub mod remote;
pub mod seed;

pub use in_memory::InMemoryStore;
pub use remote::RemoteCouponStore;
