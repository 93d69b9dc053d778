//! Utility modules
//!
//! - Fields: lenient extraction of canonical fields from loose JSON records

pub mod fields;
