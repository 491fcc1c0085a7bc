//! Coupon statistics for the dashboard header
//!
//! All functions are total and recomputed from the full collection on every
//! call.

use serde::Serialize;

use crate::entities::{Coupon, CouponStatus, CouponType, DiscountType};

/// Counts by coupon status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusBreakdown {
    pub active: usize,
    pub expired: usize,
    pub inactive: usize,
}

impl StatusBreakdown {
    pub fn total(&self) -> usize {
        self.active + self.expired + self.inactive
    }
}

/// Counts by discount type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiscountBreakdown {
    pub percentage: usize,
    pub fixed: usize,
}

/// Counts by coupon type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TypeBreakdown {
    pub generated: usize,
    pub community: usize,
}

pub fn total_count(coupons: &[Coupon]) -> usize {
    coupons.len()
}

pub fn count_by_status(coupons: &[Coupon], status: CouponStatus) -> usize {
    coupons.iter().filter(|c| c.status == status).count()
}

pub fn status_breakdown(coupons: &[Coupon]) -> StatusBreakdown {
    coupons
        .iter()
        .fold(StatusBreakdown::default(), |mut acc, c| {
            match c.status {
                CouponStatus::Active => acc.active += 1,
                CouponStatus::Expired => acc.expired += 1,
                CouponStatus::Inactive => acc.inactive += 1,
            }
            acc
        })
}

pub fn discount_type_breakdown(coupons: &[Coupon]) -> DiscountBreakdown {
    coupons
        .iter()
        .fold(DiscountBreakdown::default(), |mut acc, c| {
            match c.discount_type {
                DiscountType::Percentage => acc.percentage += 1,
                DiscountType::Fixed => acc.fixed += 1,
            }
            acc
        })
}

pub fn type_breakdown(coupons: &[Coupon]) -> TypeBreakdown {
    coupons.iter().fold(TypeBreakdown::default(), |mut acc, c| {
        match c.coupon_type {
            CouponType::Generated => acc.generated += 1,
            CouponType::Community => acc.community += 1,
        }
        acc
    })
}

/// Sum of `usage_count`, missing values count as zero
pub fn total_usage(coupons: &[Coupon]) -> i64 {
    coupons
        .iter()
        .map(|c| i64::from(c.usage_count.unwrap_or(0)))
        .sum()
}

/// Sum of `discount_value` across all coupons.
///
/// Known limitation: percentage and fixed-amount values are added together
/// without unit normalisation, so the figure mixes percents and currency.
/// Kept as shown on the dashboard until product decides what "savings" means.
pub fn total_savings(coupons: &[Coupon]) -> f64 {
    coupons.iter().map(|c| c.discount_value).sum()
}

/// Coupons whose status is Expired, in collection order
pub fn expired(coupons: &[Coupon]) -> Vec<&Coupon> {
    coupons.iter().filter(|c| c.is_expired()).collect()
}

/// Everything the dashboard header shows, computed in one pass per figure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CouponStats {
    pub total: usize,
    pub by_status: StatusBreakdown,
    pub by_discount_type: DiscountBreakdown,
    pub by_type: TypeBreakdown,
    pub total_usage: i64,
    pub total_savings: f64,
}

impl CouponStats {
    pub fn compute(coupons: &[Coupon]) -> Self {
        Self {
            total: total_count(coupons),
            by_status: status_breakdown(coupons),
            by_discount_type: discount_type_breakdown(coupons),
            by_type: type_breakdown(coupons),
            total_usage: total_usage(coupons),
            total_savings: total_savings(coupons),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::WireEnum;
    use crate::storage::seed;

    #[test]
    fn test_total_matches_length() {
        let coupons = seed::coupons();
        assert_eq!(total_count(&coupons), coupons.len());
        assert_eq!(total_count(&[]), 0);
    }

    #[test]
    fn test_status_counts_sum_to_total() {
        let coupons = seed::coupons();
        let breakdown = status_breakdown(&coupons);

        assert_eq!(breakdown.total(), total_count(&coupons));
        let summed: usize = CouponStatus::ALL
            .iter()
            .map(|s| count_by_status(&coupons, *s))
            .sum();
        assert_eq!(summed, coupons.len());
    }

    #[test]
    fn test_breakdowns_on_seed() {
        let coupons = seed::coupons();

        assert_eq!(
            status_breakdown(&coupons),
            StatusBreakdown {
                active: 1,
                expired: 1,
                inactive: 1
            }
        );
        assert_eq!(
            discount_type_breakdown(&coupons),
            DiscountBreakdown {
                percentage: 1,
                fixed: 2
            }
        );
        assert_eq!(
            type_breakdown(&coupons),
            TypeBreakdown {
                generated: 2,
                community: 1
            }
        );
    }

    #[test]
    fn test_usage_treats_missing_as_zero() {
        let coupons = seed::coupons();
        assert_eq!(total_usage(&coupons), 312 + 48);
    }

    #[test]
    fn test_savings_mixes_units() {
        // 10 (percent) + 5 (fixed) + 8 (fixed)
        assert_eq!(total_savings(&seed::coupons()), 23.0);
    }

    #[test]
    fn test_expired_in_collection_order() {
        let coupons = seed::coupons();
        let expired = expired(&coupons);
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].code, "RUNCLUB5");
    }

    #[test]
    fn test_compute_on_empty_collection() {
        let stats = CouponStats::compute(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.by_status, StatusBreakdown::default());
        assert_eq!(stats.total_usage, 0);
        assert_eq!(stats.total_savings, 0.0);
    }
}
