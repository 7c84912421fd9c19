//! Quote line items and quote totals aggregation

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::tax::gst::{calculate_gst, GstBreakdown};

/// A priced line on a quote
///
/// Lines are values: editing a quote replaces a line rather than mutating it.
/// `optional` is a presentation flag only and does not exclude the line from
/// any total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLine {
    /// Identifier of the line within its quote
    pub id: Uuid,
    /// Product or service description
    pub description: String,
    /// Quantity; fractional values are allowed (e.g. hours)
    pub quantity: BigDecimal,
    /// Unit of measure
    pub uom: String,
    /// Unit price before discount and GST
    pub unit_price: BigDecimal,
    /// GST rate percentage for this line
    pub gst_rate: BigDecimal,
    /// Shown to the customer as an optional item
    pub optional: bool,
}

impl QuoteLine {
    /// Create a new line with a fresh id, measured in `units`
    pub fn new(
        description: String,
        quantity: BigDecimal,
        unit_price: BigDecimal,
        gst_rate: BigDecimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description,
            quantity,
            uom: "units".to_string(),
            unit_price,
            gst_rate,
            optional: false,
        }
    }

    /// Same line with a different quantity
    pub fn with_quantity(self, quantity: BigDecimal) -> Self {
        Self { quantity, ..self }
    }

    /// Same line with a different unit price
    pub fn with_unit_price(self, unit_price: BigDecimal) -> Self {
        Self { unit_price, ..self }
    }

    /// Same line with a different GST rate
    pub fn with_gst_rate(self, gst_rate: BigDecimal) -> Self {
        Self { gst_rate, ..self }
    }

    /// Same line with a different unit of measure
    pub fn with_uom(self, uom: impl Into<String>) -> Self {
        Self {
            uom: uom.into(),
            ..self
        }
    }

    /// Same line marked optional or not
    pub fn with_optional(self, optional: bool) -> Self {
        Self { optional, ..self }
    }

    /// Line total before discount and GST
    pub fn line_total(&self) -> BigDecimal {
        &self.quantity * &self.unit_price
    }

    /// GST on this line after a proportional quote discount
    pub fn gst_after_discount(
        &self,
        discounts_pct: &BigDecimal,
        is_inter_state: bool,
    ) -> GstBreakdown {
        let retained = BigDecimal::from(1) - discounts_pct / BigDecimal::from(100);
        calculate_gst(&(self.line_total() * retained), &self.gst_rate, is_inter_state)
    }
}

/// Totals of a quote after discount and GST
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteTotals {
    /// Sum of all line totals
    pub subtotal: BigDecimal,
    /// Quote-level discount on the subtotal
    pub discount_amount: BigDecimal,
    /// Subtotal less discount
    pub taxable_amount: BigDecimal,
    /// Total Central GST
    pub cgst: BigDecimal,
    /// Total State GST
    pub sgst: BigDecimal,
    /// Total Integrated GST
    pub igst: BigDecimal,
    /// CGST + SGST + IGST
    pub total_tax: BigDecimal,
    /// Taxable amount plus all GST
    pub grand_total: BigDecimal,
}

impl QuoteTotals {
    /// Totals of a quote with no lines
    pub fn zero() -> Self {
        Self {
            subtotal: BigDecimal::from(0),
            discount_amount: BigDecimal::from(0),
            taxable_amount: BigDecimal::from(0),
            cgst: BigDecimal::from(0),
            sgst: BigDecimal::from(0),
            igst: BigDecimal::from(0),
            total_tax: BigDecimal::from(0),
            grand_total: BigDecimal::from(0),
        }
    }
}

/// Compute the totals of a quote.
///
/// The discount is applied to every line proportionally before that line is
/// taxed at its own GST rate; lines with different rates are never blended.
/// Inputs are not validated: negative values give negative totals.
pub fn compute_quote_totals(
    lines: &[QuoteLine],
    discounts_pct: &BigDecimal,
    is_inter_state: bool,
) -> QuoteTotals {
    let subtotal: BigDecimal = lines.iter().map(QuoteLine::line_total).sum();
    let discount_amount = (&subtotal * discounts_pct) / BigDecimal::from(100);
    let taxable_amount = &subtotal - &discount_amount;

    let breakdowns: Vec<GstBreakdown> = lines
        .iter()
        .map(|line| line.gst_after_discount(discounts_pct, is_inter_state))
        .collect();

    let cgst: BigDecimal = breakdowns.iter().map(|gst| &gst.cgst).sum();
    let sgst: BigDecimal = breakdowns.iter().map(|gst| &gst.sgst).sum();
    let igst: BigDecimal = breakdowns.iter().map(|gst| &gst.igst).sum();

    let total_tax = &cgst + &sgst + &igst;
    let grand_total = &taxable_amount + &total_tax;

    tracing::debug!(
        lines = lines.len(),
        %discounts_pct,
        is_inter_state,
        %grand_total,
        "computed quote totals"
    );

    QuoteTotals {
        subtotal,
        discount_amount,
        taxable_amount,
        cgst,
        sgst,
        igst,
        total_tax,
        grand_total,
    }
}
