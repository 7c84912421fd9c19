//! GST (Goods and Services Tax) calculation engine for Indian tax compliance

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::types::{PricingError, PricingResult};

/// Tax on a single amount, split by jurisdiction
///
/// Intra-state amounts carry CGST and SGST in equal halves; inter-state
/// amounts carry IGST only. `cgst + sgst + igst == total` always holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GstBreakdown {
    /// Central GST amount
    pub cgst: BigDecimal,
    /// State GST amount
    pub sgst: BigDecimal,
    /// Integrated GST amount
    pub igst: BigDecimal,
    /// Full tax on the amount
    pub total: BigDecimal,
}

/// Calculate the GST on `amount` at `gst_rate` percent.
///
/// Callers are expected to pass `amount >= 0` and a rate in `[0, 100]`; other
/// values are computed as-is. No rounding is applied here, so per-line results
/// can be summed without compounding rounding error.
pub fn calculate_gst(
    amount: &BigDecimal,
    gst_rate: &BigDecimal,
    is_inter_state: bool,
) -> GstBreakdown {
    let total = (amount * gst_rate) / BigDecimal::from(100);

    if is_inter_state {
        GstBreakdown {
            cgst: BigDecimal::from(0),
            sgst: BigDecimal::from(0),
            igst: total.clone(),
            total,
        }
    } else {
        let half = &total / BigDecimal::from(2);
        GstBreakdown {
            cgst: half.clone(),
            sgst: half,
            igst: BigDecimal::from(0),
            total,
        }
    }
}

/// Amount including GST at `gst_rate` percent
pub fn calculate_total_with_gst(amount: &BigDecimal, gst_rate: &BigDecimal) -> BigDecimal {
    amount + (amount * gst_rate) / BigDecimal::from(100)
}

/// Whether a sale between the two states is inter-state (IGST) rather than
/// intra-state (CGST + SGST).
///
/// Names are compared case-insensitively with surrounding whitespace ignored.
/// They are not checked against a list of real states.
pub fn is_inter_state(customer_state: &str, company_state: &str) -> bool {
    customer_state.trim().to_lowercase() != company_state.trim().to_lowercase()
}

/// GST rate structure for Indian taxation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GstRate {
    /// Total GST rate percentage (e.g., 18.0 for 18%)
    pub total_rate: BigDecimal,
    /// CGST rate percentage (Central GST)
    pub cgst_rate: BigDecimal,
    /// SGST rate percentage (State GST)
    pub sgst_rate: BigDecimal,
    /// IGST rate percentage (Integrated GST)
    pub igst_rate: BigDecimal,
}

impl GstRate {
    /// Create a new GST rate with intra-state rates (CGST + SGST)
    pub fn intra_state(total_rate: BigDecimal) -> Self {
        let half_rate = &total_rate / BigDecimal::from(2);
        Self {
            total_rate,
            cgst_rate: half_rate.clone(),
            sgst_rate: half_rate,
            igst_rate: BigDecimal::from(0),
        }
    }

    /// Create a new GST rate with inter-state rates (IGST)
    pub fn inter_state(total_rate: BigDecimal) -> Self {
        Self {
            total_rate: total_rate.clone(),
            cgst_rate: BigDecimal::from(0),
            sgst_rate: BigDecimal::from(0),
            igst_rate: total_rate,
        }
    }

    /// Component rates for the given jurisdiction
    pub fn for_jurisdiction(total_rate: BigDecimal, is_inter_state: bool) -> Self {
        if is_inter_state {
            Self::inter_state(total_rate)
        } else {
            Self::intra_state(total_rate)
        }
    }

    /// Whether this rate is charged as IGST
    pub fn is_inter_state(&self) -> bool {
        self.igst_rate > BigDecimal::from(0)
    }

    /// Validate that the GST rate structure is correct
    pub fn validate(&self) -> PricingResult<()> {
        let calculated_total = &self.cgst_rate + &self.sgst_rate + &self.igst_rate;

        if calculated_total != self.total_rate {
            return Err(PricingError::InvalidRate(format!(
                "GST components don't add up to total rate: {} != {}",
                calculated_total, self.total_rate
            )));
        }

        if self.igst_rate == BigDecimal::from(0) && self.cgst_rate != self.sgst_rate {
            return Err(PricingError::InvalidRate(
                "CGST and SGST rates must be equal for intra-state transactions".to_string(),
            ));
        }

        if self.igst_rate > BigDecimal::from(0)
            && (self.cgst_rate > BigDecimal::from(0) || self.sgst_rate > BigDecimal::from(0))
        {
            return Err(PricingError::InvalidRate(
                "Only IGST should be applicable for inter-state transactions".to_string(),
            ));
        }

        Ok(())
    }

    /// Apply this rate to an amount
    pub fn breakdown(&self, amount: &BigDecimal) -> GstBreakdown {
        calculate_gst(amount, &self.total_rate, self.is_inter_state())
    }
}

/// Standard GST slabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GstSlab {
    /// Exempt supplies (many healthcare services) - 0%
    Nil,
    /// Reduced rate items - 5%
    Reduced,
    /// Standard rate items (many medical devices) - 12%
    Standard,
    /// Higher rate items (most services, software) - 18%
    Higher,
    /// Luxury/Sin goods - 28%
    Luxury,
}

impl GstSlab {
    /// All slabs in ascending rate order
    pub const ALL: [GstSlab; 5] = [
        GstSlab::Nil,
        GstSlab::Reduced,
        GstSlab::Standard,
        GstSlab::Higher,
        GstSlab::Luxury,
    ];

    /// Get the standard GST rate for this slab
    pub fn rate(&self) -> BigDecimal {
        match self {
            GstSlab::Nil => BigDecimal::from(0),
            GstSlab::Reduced => BigDecimal::from(5),
            GstSlab::Standard => BigDecimal::from(12),
            GstSlab::Higher => BigDecimal::from(18),
            GstSlab::Luxury => BigDecimal::from(28),
        }
    }

    /// The slab charging exactly `rate`, if any
    pub fn from_rate(rate: &BigDecimal) -> Option<Self> {
        Self::ALL.into_iter().find(|slab| slab.rate() == *rate)
    }

    /// Create intra-state GST rate for this slab
    pub fn intra_state_rate(&self) -> GstRate {
        GstRate::intra_state(self.rate())
    }

    /// Create inter-state GST rate for this slab
    pub fn inter_state_rate(&self) -> GstRate {
        GstRate::inter_state(self.rate())
    }
}
