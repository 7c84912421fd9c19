//! Quote module containing line items, totals aggregation and drafts

pub mod draft;
pub mod totals;

pub use draft::*;
pub use totals::*;
