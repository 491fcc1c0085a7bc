//! Reusable field filters
//!
//! These filters normalise draft text fields before validation

/// Filter: trim whitespace from a string
pub fn trim() -> impl Fn(&str) -> String + Send + Sync + Clone {
    |value: &str| value.trim().to_string()
}

/// Filter: trim and convert to uppercase
pub fn uppercase() -> impl Fn(&str) -> String + Send + Sync + Clone {
    |value: &str| value.trim().to_uppercase()
}

/// Filter: trim an optional field, turning blank input into `None`
pub fn trim_option() -> impl Fn(Option<&str>) -> Option<String> + Send + Sync + Clone {
    |value: Option<&str>| {
        value
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }
}

/// Filter: round number to specified decimal places
pub fn round_decimals(decimals: u32) -> impl Fn(f64) -> f64 + Send + Sync + Clone {
    move |value: f64| {
        let factor = 10_f64.powi(decimals as i32);
        (value * factor).round() / factor
    }
}
