//! Tax computation: GST engine and GSTIN helpers

pub mod gst;
pub mod gstin;

pub use gst::*;
pub use gstin::*;
