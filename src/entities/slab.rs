//! Preference slabs: pricing tiers keyed by customer type and order amount

use serde::{Deserialize, Serialize};

use crate::core::entity::{Entity, Searchable};
use crate::impl_wire_enum;

impl_wire_enum! {
    pub enum CustomerType {
        Retail = 0 => "Retail",
        Wholesale = 1 => "Wholesale",
        Distributor = 2 => "Distributor",
        Corporate = 3 => "Corporate",
    }
}

impl_wire_enum! {
    pub enum SlabStatus {
        Active = 0 => "Active",
        Inactive = 1 => "Inactive",
    }
}

/// A pricing tier applied to orders whose amount falls in `min_amount..=max_amount`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slab {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub customer_type: CustomerType,
    pub min_amount: f64,
    pub max_amount: f64,
    pub delivery_charge: f64,
    pub tax_percent: f64,
    pub status: SlabStatus,
}

impl Slab {
    pub fn draft(customer_type: CustomerType) -> Self {
        Self {
            id: 0,
            name: String::new(),
            customer_type,
            min_amount: 0.0,
            max_amount: 0.0,
            delivery_charge: 0.0,
            tax_percent: 0.0,
            status: SlabStatus::Active,
        }
    }

    /// True when `amount` falls inside this slab's range (inclusive)
    pub fn covers(&self, amount: f64) -> bool {
        amount >= self.min_amount && amount <= self.max_amount
    }
}

impl Entity for Slab {
    fn resource_name() -> &'static str {
        "slabs"
    }

    fn resource_name_singular() -> &'static str {
        "slab"
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

impl Searchable for Slab {
    type Status = SlabStatus;
    type Kind = CustomerType;

    fn search_fields(&self) -> Vec<Option<&str>> {
        use crate::core::field::WireEnum;
        vec![Some(&self.name), Some(self.customer_type.label())]
    }

    fn status(&self) -> SlabStatus {
        self.status
    }

    fn kind(&self) -> CustomerType {
        self.customer_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_is_inclusive() {
        let mut slab = Slab::draft(CustomerType::Retail);
        slab.min_amount = 100.0;
        slab.max_amount = 500.0;

        assert!(slab.covers(100.0));
        assert!(slab.covers(500.0));
        assert!(!slab.covers(500.01));
        assert!(!slab.covers(99.0));
    }

    #[test]
    fn test_search_includes_customer_type_label() {
        let slab = Slab::draft(CustomerType::Wholesale);
        let fields: Vec<&str> = slab.search_fields().into_iter().flatten().collect();
        assert!(fields.contains(&"Wholesale"));
    }
}
