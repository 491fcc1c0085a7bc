//! Sample collections for the locally backed screens
//!
//! Orders and slabs have no API yet; their screens start from these records.
//! `coupons()` mirrors what the coupon API returns in a fresh environment and is
//! handy for offline work.

use chrono::NaiveDate;

use crate::entities::{
    Coupon, CouponStatus, CouponType, CustomerType, DiscountType, Order, OrderChannel, OrderItem,
    OrderStatus, Slab, SlabStatus,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: 1,
            order_number: "ORD-1001".to_string(),
            customer_name: "Asha Verma".to_string(),
            customer_email: Some("asha.verma@example.com".to_string()),
            status: OrderStatus::Delivered,
            channel: OrderChannel::Online,
            items: vec![
                OrderItem::new("Assam tea 500g", 2, 6.5),
                OrderItem::new("Ceramic mug", 1, 12.0),
            ],
            placed_on: date(2026, 9, 2),
        },
        Order {
            id: 2,
            order_number: "ORD-1002".to_string(),
            customer_name: "Bruno Costa".to_string(),
            customer_email: None,
            status: OrderStatus::Processing,
            channel: OrderChannel::InStore,
            items: vec![OrderItem::new("Espresso beans 1kg", 1, 24.0)],
            placed_on: date(2026, 9, 14),
        },
        Order {
            id: 3,
            order_number: "ORD-1003".to_string(),
            customer_name: "Chen Li".to_string(),
            customer_email: Some("chen.li@example.com".to_string()),
            status: OrderStatus::Pending,
            channel: OrderChannel::Online,
            items: vec![
                OrderItem::new("Green tea 250g", 3, 5.0),
                OrderItem::new("Tea strainer", 2, 3.5),
            ],
            placed_on: date(2026, 10, 1),
        },
        Order {
            id: 4,
            order_number: "ORD-1004".to_string(),
            customer_name: "Dana Okafor".to_string(),
            customer_email: Some("dana@example.com".to_string()),
            status: OrderStatus::Cancelled,
            channel: OrderChannel::Online,
            items: vec![OrderItem::new("French press", 1, 29.0)],
            placed_on: date(2026, 10, 3),
        },
    ]
}

pub fn slabs() -> Vec<Slab> {
    let slab = |id, name: &str, customer_type, min, max, charge, tax| Slab {
        id,
        name: name.to_string(),
        customer_type,
        min_amount: min,
        max_amount: max,
        delivery_charge: charge,
        tax_percent: tax,
        status: SlabStatus::Active,
    };

    vec![
        slab(1, "Retail small basket", CustomerType::Retail, 0.0, 499.0, 49.0, 5.0),
        slab(2, "Retail large basket", CustomerType::Retail, 500.0, 4999.0, 0.0, 5.0),
        slab(3, "Wholesale standard", CustomerType::Wholesale, 5000.0, 49999.0, 250.0, 12.0),
        slab(4, "Distributor bulk", CustomerType::Distributor, 50000.0, 500000.0, 0.0, 12.0),
        Slab {
            status: SlabStatus::Inactive,
            ..slab(5, "Corporate gifting", CustomerType::Corporate, 1000.0, 20000.0, 99.0, 18.0)
        },
    ]
}

pub fn coupons() -> Vec<Coupon> {
    vec![
        Coupon {
            id: 1,
            name: "Welcome offer".to_string(),
            code: "WELCOME10".to_string(),
            description: Some("10% off the first order".to_string()),
            coupon_type: CouponType::Generated,
            discount_type: DiscountType::Percentage,
            discount_value: 10.0,
            min_order_amount: Some(20.0),
            max_discount: Some(15.0),
            usage_limit: Some(1000),
            usage_count: Some(312),
            start_date: date(2026, 1, 1),
            end_date: date(2026, 12, 31),
            status: CouponStatus::Active,
            community_name: None,
            customer_name: None,
        },
        Coupon {
            id: 2,
            name: "Runners club".to_string(),
            code: "RUNCLUB5".to_string(),
            description: None,
            coupon_type: CouponType::Community,
            discount_type: DiscountType::Fixed,
            discount_value: 5.0,
            min_order_amount: None,
            max_discount: None,
            usage_limit: None,
            usage_count: Some(48),
            start_date: date(2026, 3, 1),
            end_date: date(2026, 6, 30),
            status: CouponStatus::Expired,
            community_name: Some("City Runners".to_string()),
            customer_name: None,
        },
        Coupon {
            id: 3,
            name: "Loyalty thank-you".to_string(),
            code: "THANKS-ASHA".to_string(),
            description: Some("Personal coupon".to_string()),
            coupon_type: CouponType::Generated,
            discount_type: DiscountType::Fixed,
            discount_value: 8.0,
            min_order_amount: Some(40.0),
            max_discount: None,
            usage_limit: Some(1),
            usage_count: None,
            start_date: date(2026, 9, 1),
            end_date: date(2026, 11, 30),
            status: CouponStatus::Inactive,
            community_name: None,
            customer_name: Some("Asha Verma".to_string()),
        },
    ]
}
