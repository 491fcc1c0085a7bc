//! Console entities: coupons, orders and preference slabs

pub mod coupon;
pub mod macros;
pub mod order;
pub mod slab;

pub use coupon::{Coupon, CouponStatus, CouponType, DiscountType};
pub use order::{Order, OrderChannel, OrderItem, OrderStatus};
pub use slab::{CustomerType, Slab, SlabStatus};
