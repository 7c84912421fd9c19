//! Integration tests for quote-pricing

use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use quote_pricing::{
    calculate_gst, compute_quote_totals, format_gst_number, format_inr, format_inr_compact,
    parse_inr,
    utils::{validate_draft, validate_line},
    validate_gst_number, GstRate, PricingContext, PricingError, QuoteDraft, QuoteLine, QuoteStatus,
};

fn dec(value: &str) -> BigDecimal {
    BigDecimal::from_str(value).unwrap()
}

fn hospital_quote(context: &PricingContext, customer_state: &str) -> QuoteDraft {
    let mut draft = QuoteDraft::new(
        context,
        customer_state,
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
    );
    draft.add_line(context.default_line(
        "Patient monitor",
        BigDecimal::from(2),
        BigDecimal::from(50000),
    ));
    draft.add_line(context.default_line(
        "Installation and training",
        BigDecimal::from(1),
        BigDecimal::from(30000),
    ));
    draft.set_discount(BigDecimal::from(10));
    draft
}

#[test]
fn test_complete_quote_workflow() {
    let context = PricingContext::new("Karnataka");
    let draft = hospital_quote(&context, "karnataka ");

    validate_draft(&draft).unwrap();
    assert!(!draft.is_inter_state);

    let totals = draft.totals();
    assert_eq!(format_inr(&totals.subtotal), "₹1,30,000");
    assert_eq!(format!("-{}", format_inr(&totals.discount_amount)), "-₹13,000");
    assert_eq!(format_inr(&totals.taxable_amount), "₹1,17,000");
    assert_eq!(format_inr(&totals.cgst), "₹10,530");
    assert_eq!(format_inr(&totals.sgst), "₹10,530");
    assert_eq!(format_inr(&totals.grand_total), "₹1,38,060");
    assert_eq!(format_inr_compact(&totals.grand_total), "₹1.38L");

    // Component rate shown next to the CGST and SGST amounts
    let rate = GstRate::for_jurisdiction(context.default_gst_rate.clone(), draft.is_inter_state);
    assert_eq!(rate.cgst_rate, BigDecimal::from(9));
    assert_eq!(rate.sgst_rate, BigDecimal::from(9));
}

#[test]
fn test_jurisdiction_changes_split_not_total() {
    let context = PricingContext::new("Karnataka");
    let intra = hospital_quote(&context, "Karnataka").totals();
    let inter = hospital_quote(&context, "Tamil Nadu").totals();

    assert_eq!(inter.igst, BigDecimal::from(21060));
    assert_eq!(inter.cgst, BigDecimal::from(0));
    assert_eq!(inter.sgst, BigDecimal::from(0));
    assert_eq!(inter.total_tax, intra.total_tax);
    assert_eq!(inter.grand_total, intra.grand_total);
}

#[test]
fn test_editing_lines_recomputes_totals() {
    let context = PricingContext::new("Maharashtra");
    let mut draft = hospital_quote(&context, "Gujarat");
    let monitor = draft.lines[0].clone();

    draft
        .replace_line(monitor.clone().with_quantity(BigDecimal::from(3)))
        .unwrap();
    assert_eq!(draft.totals().subtotal, BigDecimal::from(180000));

    draft.remove_line(monitor.id).unwrap();
    assert_eq!(draft.totals().subtotal, BigDecimal::from(30000));

    let missing = draft.remove_line(monitor.id);
    assert!(matches!(missing, Err(PricingError::LineNotFound(id)) if id == monitor.id));
}

#[test]
fn test_validation_is_separate_from_calculation() {
    let negative = QuoteLine::new(
        "Credit".to_string(),
        BigDecimal::from(1),
        BigDecimal::from(-500),
        BigDecimal::from(18),
    );

    assert!(validate_line(&negative).is_err());

    let totals = compute_quote_totals(&[negative], &BigDecimal::from(0), false);
    assert_eq!(totals.grand_total, BigDecimal::from(-590));
    assert_eq!(format_inr(&totals.grand_total), "-₹590");
}

#[test]
fn test_breakdown_and_totals_field_names() {
    let gst = calculate_gst(&BigDecimal::from(100000), &BigDecimal::from(18), false);
    let breakdown = serde_json::to_value(gst).unwrap();
    assert!(breakdown.get("total").is_some());
    assert!(breakdown.get("totalTax").is_none());

    let context = PricingContext::default();
    let totals = serde_json::to_value(hospital_quote(&context, "Karnataka").totals()).unwrap();
    for field in [
        "subtotal",
        "discountAmount",
        "taxableAmount",
        "cgst",
        "sgst",
        "igst",
        "totalTax",
        "grandTotal",
    ] {
        assert!(totals.get(field).is_some(), "missing field {field}");
    }
    assert!(totals.get("total").is_none());
}

#[test]
fn test_draft_serialization_round_trip() {
    let context = PricingContext::new("Kerala");
    let mut draft = hospital_quote(&context, "Kerala");
    draft.status = QuoteStatus::AwaitingApproval;
    draft.terms = Some("Payment within 30 days".to_string());

    let json = serde_json::to_string(&draft).unwrap();
    assert!(json.contains("\"awaiting_approval\""));
    assert!(json.contains("\"unitPrice\""));

    let restored: QuoteDraft = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, draft);
    assert_eq!(restored.totals(), draft.totals());
}

#[test]
fn test_parse_formatted_amounts() {
    for text in ["₹1,38,060", "₹10,530.25", "-₹1,000", "₹0"] {
        let amount = parse_inr(text);
        assert_eq!(format_inr(&amount), text);
    }
    assert_eq!(parse_inr("₹1.25Cr"), dec("1.25"));
    assert_eq!(parse_inr("n/a"), BigDecimal::from(0));
}

#[test]
fn test_gstin_helpers() {
    let gstin = "29ABCDE1234F1Z5";
    assert!(validate_gst_number(gstin));
    assert_eq!(format_gst_number(gstin), "29 ABCDE1234F 1Z5");
    assert!(!validate_gst_number(&format_gst_number(gstin)));
}
