//! # Quote Pricing
//!
//! Pricing core for B2B quotes under Indian GST: tax computation, quote
//! totals and Indian Rupee formatting.
//!
//! ## Features
//!
//! - **GST calculations**: CGST/SGST for intra-state and IGST for inter-state sales
//! - **Quote totals**: subtotal, proportional discount, per-line GST and grand total
//! - **INR formatting**: lakh/crore digit grouping and compact `K`/`L`/`Cr` display
//! - **GSTIN helpers**: registration number display and format validation
//! - **Quote drafts**: ordered line editing with totals recomputed on demand
//!
//! ## Quick Start
//!
//! ```rust
//! use quote_pricing::{compute_quote_totals, format_inr, QuoteLine};
//! use bigdecimal::BigDecimal;
//!
//! let gst_rate = BigDecimal::from(18);
//! let lines = vec![
//!     QuoteLine::new("Ultrasound probe".to_string(), BigDecimal::from(2), BigDecimal::from(50000), gst_rate.clone()),
//!     QuoteLine::new("Installation".to_string(), BigDecimal::from(1), BigDecimal::from(30000), gst_rate),
//! ];
//!
//! let totals = compute_quote_totals(&lines, &BigDecimal::from(10), false);
//! assert_eq!(format_inr(&totals.grand_total), "₹1,38,060");
//! ```

pub mod currency;
pub mod quote;
pub mod settings;
pub mod tax;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use currency::*;
pub use quote::*;
pub use settings::*;
pub use tax::*;
pub use types::*;
