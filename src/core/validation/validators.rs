//! Reusable field validators
//!
//! These validators are used by the form controllers to check drafts before
//! commit. Each returns the user-visible message on failure.

use chrono::NaiveDate;

/// Validator: text field is required (not empty after trimming)
pub fn required() -> impl Fn(&str, &str) -> Result<(), String> + Send + Sync + Clone {
    |label: &str, value: &str| {
        if value.trim().is_empty() {
            Err(format!("{} is required", label))
        } else {
            Ok(())
        }
    }
}

/// Validator: optional text field must be present for this draft
pub fn required_option() -> impl Fn(&str, Option<&str>) -> Result<(), String> + Send + Sync + Clone
{
    |label: &str, value: Option<&str>| required()(label, value.unwrap_or_default())
}

/// Validator: number must be positive
pub fn positive() -> impl Fn(&str, f64) -> Result<(), String> + Send + Sync + Clone {
    |label: &str, value: f64| {
        if value <= 0.0 || value.is_nan() {
            Err(format!("{} must be greater than 0 (value: {})", label, value))
        } else {
            Ok(())
        }
    }
}

/// Validator: number must not be negative
pub fn non_negative() -> impl Fn(&str, f64) -> Result<(), String> + Send + Sync + Clone {
    |label: &str, value: f64| {
        if value < 0.0 || value.is_nan() {
            Err(format!("{} must not be negative (value: {})", label, value))
        } else {
            Ok(())
        }
    }
}

/// Validator: number must not exceed maximum
pub fn max_value(max: f64) -> impl Fn(&str, f64) -> Result<(), String> + Send + Sync + Clone {
    move |label: &str, value: f64| {
        if value > max {
            Err(format!("{} must not exceed {} (value: {})", label, max, value))
        } else {
            Ok(())
        }
    }
}

/// Validator: lower bound must not be greater than upper bound
pub fn ordered_range() -> impl Fn(&str, f64, f64) -> Result<(), String> + Send + Sync + Clone {
    |label: &str, min: f64, max: f64| {
        if min > max {
            Err(format!(
                "{}: minimum ({}) must not be greater than maximum ({})",
                label, min, max
            ))
        } else {
            Ok(())
        }
    }
}

/// Validator: start date must not be after end date
pub fn date_order()
-> impl Fn(&str, NaiveDate, NaiveDate) -> Result<(), String> + Send + Sync + Clone {
    |label: &str, start: NaiveDate, end: NaiveDate| {
        if start > end {
            Err(format!(
                "{}: start date ({}) must not be after end date ({})",
                label, start, end
            ))
        } else {
            Ok(())
        }
    }
}

/// Validator: count must be within `1..=max`
pub fn count_between(
    max: u32,
) -> impl Fn(&str, u32) -> Result<(), String> + Send + Sync + Clone {
    move |label: &str, value: u32| {
        if value == 0 || value > max {
            Err(format!(
                "{} must be between 1 and {} (value: {})",
                label, max, value
            ))
        } else {
            Ok(())
        }
    }
}
