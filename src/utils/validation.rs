//! Validation utilities for quote input at the form boundary
//!
//! The calculation functions accept any values; callers that take user
//! input run these checks first.

use bigdecimal::BigDecimal;

use crate::quote::{QuoteDraft, QuoteLine};
use crate::types::*;

/// Validate that a percentage lies in `[0, 100]`
pub fn validate_percentage(value: &BigDecimal, field: &str) -> PricingResult<()> {
    if *value < BigDecimal::from(0) || *value > BigDecimal::from(100) {
        return Err(PricingError::Validation(format!(
            "{} must be between 0 and 100, got {}",
            field, value
        )));
    }
    Ok(())
}

/// Validate a quote-level discount percentage
pub fn validate_discount(discounts_pct: &BigDecimal) -> PricingResult<()> {
    validate_percentage(discounts_pct, "Discount")
}

/// Validate that a line is fit for pricing
pub fn validate_line(line: &QuoteLine) -> PricingResult<()> {
    if line.description.trim().is_empty() {
        return Err(PricingError::Validation(
            "Description is required".to_string(),
        ));
    }

    if line.quantity <= BigDecimal::from(0) {
        return Err(PricingError::Validation(format!(
            "Quantity must be positive for '{}'",
            line.description
        )));
    }

    if line.unit_price < BigDecimal::from(0) {
        return Err(PricingError::Validation(format!(
            "Unit price cannot be negative for '{}'",
            line.description
        )));
    }

    validate_percentage(&line.gst_rate, "GST rate")
}

/// Validate a draft before it is submitted
pub fn validate_draft(draft: &QuoteDraft) -> PricingResult<()> {
    if draft.lines.is_empty() {
        return Err(PricingError::Validation(
            "At least one line item is required".to_string(),
        ));
    }

    validate_discount(&draft.discounts_pct)?;
    for line in &draft.lines {
        validate_line(line)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::PricingContext;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn line() -> QuoteLine {
        QuoteLine::new(
            "Consulting".to_string(),
            BigDecimal::from_str("0.5").unwrap(),
            BigDecimal::from(4000),
            BigDecimal::from(18),
        )
    }

    #[test]
    fn test_valid_line() {
        assert!(validate_line(&line()).is_ok());
        assert!(validate_line(&line().with_unit_price(BigDecimal::from(0))).is_ok());
    }

    #[test]
    fn test_invalid_lines() {
        let cases = [
            line().with_quantity(BigDecimal::from(0)),
            line().with_unit_price(BigDecimal::from(-1)),
            line().with_gst_rate(BigDecimal::from(101)),
            QuoteLine {
                description: "   ".to_string(),
                ..line()
            },
        ];

        for case in cases {
            assert!(matches!(validate_line(&case), Err(PricingError::Validation(_))));
        }
    }

    #[test]
    fn test_discount_bounds() {
        assert!(validate_discount(&BigDecimal::from(0)).is_ok());
        assert!(validate_discount(&BigDecimal::from(100)).is_ok());
        assert!(validate_discount(&BigDecimal::from(-5)).is_err());
        assert!(validate_discount(&BigDecimal::from_str("100.01").unwrap()).is_err());
    }

    #[test]
    fn test_validate_draft() {
        let context = PricingContext::new("Karnataka");
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut draft = QuoteDraft::new(&context, "Kerala", today);
        assert!(validate_draft(&draft).is_err());

        draft.add_line(line());
        assert!(validate_draft(&draft).is_ok());

        draft.set_discount(BigDecimal::from(120));
        assert!(validate_draft(&draft).is_err());
    }
}
