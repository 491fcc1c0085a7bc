//! Validation and filtering system
//!
//! Drafts are normalised with [`filters`] and then checked field by field with
//! [`validators`]. A [`ValidationReport`] collects every failure so the form can
//! show all messages at once instead of the first one only.

pub mod filters;
pub mod validators;

use crate::core::error::{FieldError, ValidationError};

/// Accumulates field errors while a draft is being checked
#[derive(Debug, Default)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one validator for `field`
    pub fn check(&mut self, field: &str, result: Result<(), String>) -> &mut Self {
        if let Err(message) = result {
            self.errors.push(FieldError::new(field, message));
        }
        self
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::FieldErrors(self.errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_collects_all_failures() {
        let mut report = ValidationReport::new();
        report
            .check("name", validators::required()("Name", ""))
            .check("code", validators::required()("Code", "ABC"))
            .check("discountValue", validators::positive()("Discount value", 0.0));

        assert!(!report.is_valid());
        let err = report.finish().unwrap_err();
        assert_eq!(err.field_errors().len(), 2);
        assert!(err.has_field("name"));
        assert!(err.has_field("discountValue"));
    }

    #[test]
    fn test_empty_report_is_ok() {
        let report = ValidationReport::new();
        assert!(report.finish().is_ok());
    }
}
