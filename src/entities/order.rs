//! Customer orders shown on the orders screen

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::entity::{Entity, Searchable};
use crate::impl_wire_enum;

impl_wire_enum! {
    /// Fulfilment status of an order
    pub enum OrderStatus {
        Pending = 0 => "Pending",
        Processing = 1 => "Processing",
        Shipped = 2 => "Shipped",
        Delivered = 3 => "Delivered",
        Cancelled = 4 => "Cancelled",
    }
}

impl_wire_enum! {
    /// Where the order was placed
    pub enum OrderChannel {
        Online = 0 => "Online",
        InStore = 1 => "In store",
    }
}

/// One line of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Client generated, only meaningful while the order is on screen
    pub id: Uuid,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl OrderItem {
    pub fn new(product_name: impl Into<String>, quantity: u32, unit_price: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_name: product_name.into(),
            quantity,
            unit_price,
        }
    }

    pub fn line_total(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default)]
    pub id: i64,
    pub order_number: String,
    pub customer_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    pub status: OrderStatus,
    pub channel: OrderChannel,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub placed_on: NaiveDate,
}

impl Order {
    pub fn total(&self) -> f64 {
        self.items.iter().map(OrderItem::line_total).sum()
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

impl Entity for Order {
    fn resource_name() -> &'static str {
        "orders"
    }

    fn resource_name_singular() -> &'static str {
        "order"
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

impl Searchable for Order {
    type Status = OrderStatus;
    type Kind = OrderChannel;

    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(&self.order_number),
            Some(&self.customer_name),
            self.customer_email.as_deref(),
        ]
    }

    fn status(&self) -> OrderStatus {
        self.status
    }

    fn kind(&self) -> OrderChannel {
        self.channel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_total_sums_lines() {
        let order = Order {
            id: 1,
            order_number: "ORD-1001".to_string(),
            customer_name: "Asha".to_string(),
            customer_email: None,
            status: OrderStatus::Pending,
            channel: OrderChannel::Online,
            items: vec![OrderItem::new("Tea", 2, 4.5), OrderItem::new("Mug", 1, 12.0)],
            placed_on: NaiveDate::from_ymd_opt(2026, 5, 2).unwrap(),
        };

        assert_eq!(order.total(), 21.0);
        assert_eq!(order.item_count(), 3);
    }

    #[test]
    fn test_item_ids_are_distinct() {
        let a = OrderItem::new("Tea", 1, 1.0);
        let b = OrderItem::new("Tea", 1, 1.0);
        assert_ne!(a.id, b.id);
    }
}
