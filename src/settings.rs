//! Pricing settings passed explicitly to quote operations

use bigdecimal::BigDecimal;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::quote::totals::QuoteLine;
use crate::tax::gst::is_inter_state;
use crate::types::PricingResult;

/// Company-level settings used when building and pricing quotes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingContext {
    /// State the selling company is registered in
    #[serde(default = "default_company_state")]
    pub company_state: String,
    /// GST rate applied to new lines
    #[serde(default = "default_gst_rate")]
    pub default_gst_rate: BigDecimal,
    /// Quote currency code
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Days a new quote stays valid
    #[serde(default = "default_validity_days")]
    pub default_validity_days: u32,
}

fn default_company_state() -> String {
    "Karnataka".to_string()
}

fn default_gst_rate() -> BigDecimal {
    BigDecimal::from(18)
}

fn default_currency() -> String {
    "INR".to_string()
}

fn default_validity_days() -> u32 {
    30
}

impl Default for PricingContext {
    fn default() -> Self {
        Self {
            company_state: default_company_state(),
            default_gst_rate: default_gst_rate(),
            currency: default_currency(),
            default_validity_days: default_validity_days(),
        }
    }
}

impl PricingContext {
    /// Create settings for a company registered in `company_state`
    pub fn new(company_state: impl Into<String>) -> Self {
        Self {
            company_state: company_state.into(),
            ..Self::default()
        }
    }

    /// Load settings from an optional `pricing` file and `PRICING__*` variables.
    pub fn load() -> PricingResult<Self> {
        let settings = Config::builder()
            .add_source(File::with_name("pricing").required(false))
            .add_source(Environment::with_prefix("PRICING").separator("__"))
            .build()?;

        let context: Self = settings.try_deserialize()?;
        tracing::debug!(
            company_state = %context.company_state,
            default_gst_rate = %context.default_gst_rate,
            "loaded pricing settings"
        );
        Ok(context)
    }

    /// Whether a customer in `customer_state` is billed IGST
    pub fn is_inter_state_for(&self, customer_state: &str) -> bool {
        is_inter_state(customer_state, &self.company_state)
    }

    /// A new line at the default GST rate
    pub fn default_line(
        &self,
        description: impl Into<String>,
        quantity: BigDecimal,
        unit_price: BigDecimal,
    ) -> QuoteLine {
        QuoteLine::new(
            description.into(),
            quantity,
            unit_price,
            self.default_gst_rate.clone(),
        )
    }
}
