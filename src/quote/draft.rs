//! Quote drafts: an ordered, editable sequence of quote lines

use bigdecimal::BigDecimal;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::quote::totals::{compute_quote_totals, QuoteLine, QuoteTotals};
use crate::settings::PricingContext;
use crate::types::{PricingError, PricingResult};

/// Lifecycle of a quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    Draft,
    AwaitingApproval,
    Approved,
    Sent,
    Signed,
    Declined,
}

impl QuoteStatus {
    /// Whether lines and pricing may still change
    pub fn is_editable(&self) -> bool {
        matches!(self, QuoteStatus::Draft | QuoteStatus::AwaitingApproval)
    }
}

/// A quote being prepared for a customer
///
/// Lines keep their insertion order. Editing a line replaces it in place;
/// totals are recomputed from the lines on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteDraft {
    /// Unique identifier for the quote
    pub id: Uuid,
    /// Quote lines in display order
    pub lines: Vec<QuoteLine>,
    /// Quote-level discount percentage
    pub discounts_pct: BigDecimal,
    /// Whether the customer is billed IGST
    pub is_inter_state: bool,
    /// Currency code
    pub currency: String,
    /// Last day the quote may be accepted
    pub valid_until: NaiveDate,
    /// Commercial terms
    pub terms: Option<String>,
    /// Internal notes
    pub notes: Option<String>,
    /// Current status
    pub status: QuoteStatus,
}

impl QuoteDraft {
    /// Start an empty draft for a customer in `customer_state`
    pub fn new(context: &PricingContext, customer_state: &str, today: NaiveDate) -> Self {
        let valid_until = today
            .checked_add_days(Days::new(u64::from(context.default_validity_days)))
            .unwrap_or(NaiveDate::MAX);

        Self {
            id: Uuid::new_v4(),
            lines: Vec::new(),
            discounts_pct: BigDecimal::from(0),
            is_inter_state: context.is_inter_state_for(customer_state),
            currency: context.currency.clone(),
            valid_until,
            terms: None,
            notes: None,
            status: QuoteStatus::Draft,
        }
    }

    /// Append a line to the end of the quote
    pub fn add_line(&mut self, line: QuoteLine) {
        self.lines.push(line);
    }

    /// Replace the line with the same id, keeping its position
    pub fn replace_line(&mut self, line: QuoteLine) -> PricingResult<()> {
        let index = self.position(line.id)?;
        self.lines[index] = line;
        Ok(())
    }

    /// Remove a line and return it
    pub fn remove_line(&mut self, line_id: Uuid) -> PricingResult<QuoteLine> {
        let index = self.position(line_id)?;
        Ok(self.lines.remove(index))
    }

    /// Move a line to `index`, clamped to the end of the quote
    pub fn move_line(&mut self, line_id: Uuid, index: usize) -> PricingResult<()> {
        let from = self.position(line_id)?;
        let line = self.lines.remove(from);
        let to = index.min(self.lines.len());
        self.lines.insert(to, line);
        Ok(())
    }

    /// Look up a line by id
    pub fn line(&self, line_id: Uuid) -> Option<&QuoteLine> {
        self.lines.iter().find(|line| line.id == line_id)
    }

    /// Set the quote-level discount percentage
    pub fn set_discount(&mut self, discounts_pct: BigDecimal) {
        self.discounts_pct = discounts_pct;
    }

    /// Current totals of the quote
    pub fn totals(&self) -> QuoteTotals {
        compute_quote_totals(&self.lines, &self.discounts_pct, self.is_inter_state)
    }

    /// Whether the quote can no longer be accepted on `today`
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        today > self.valid_until
    }

    fn position(&self, line_id: Uuid) -> PricingResult<usize> {
        self.lines
            .iter()
            .position(|line| line.id == line_id)
            .ok_or(PricingError::LineNotFound(line_id))
    }
}
