//! Coupon records served by the remote coupon API

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::entity::{Entity, Searchable};
use crate::impl_wire_enum;

impl_wire_enum! {
    /// Lifecycle status of a coupon
    pub enum CouponStatus {
        Active = 0 => "Active",
        Expired = 1 => "Expired",
        Inactive = 2 => "Inactive",
    }
}

impl_wire_enum! {
    /// How a coupon was issued
    pub enum CouponType {
        /// Bulk-generated codes
        Generated = 0 => "Generate",
        /// Codes handed out to a named community
        Community = 1 => "Community",
    }
}

impl_wire_enum! {
    /// Unit of `discount_value`
    pub enum DiscountType {
        Percentage = 0 => "Percentage",
        Fixed = 1 => "Fixed",
    }
}

/// A discount coupon
///
/// Serialized as the flat camelCase record the coupon API exchanges, with
/// enums as integers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    /// Server assigned, `0` until created
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub coupon_type: CouponType,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_order_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_discount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_count: Option<i32>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: CouponStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub community_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
}

impl Coupon {
    /// A blank draft of the given type, active over `start..=end`
    pub fn draft(coupon_type: CouponType, code: String, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            id: 0,
            name: String::new(),
            code,
            description: None,
            coupon_type,
            discount_type: DiscountType::Percentage,
            discount_value: 0.0,
            min_order_amount: None,
            max_discount: None,
            usage_limit: None,
            usage_count: None,
            start_date: start,
            end_date: end,
            status: CouponStatus::Active,
            community_name: None,
            customer_name: None,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.status == CouponStatus::Expired
    }

    pub fn is_community(&self) -> bool {
        self.coupon_type == CouponType::Community
    }
}

impl Entity for Coupon {
    fn resource_name() -> &'static str {
        "coupons"
    }

    fn resource_name_singular() -> &'static str {
        "coupon"
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

impl Searchable for Coupon {
    type Status = CouponStatus;
    type Kind = CouponType;

    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(&self.name),
            Some(&self.code),
            self.description.as_deref(),
            self.community_name.as_deref(),
            self.customer_name.as_deref(),
        ]
    }

    fn status(&self) -> CouponStatus {
        self.status
    }

    fn kind(&self) -> CouponType {
        self.coupon_type
    }
}
