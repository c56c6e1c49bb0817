//! Display formatting for the printed report
//!
//! Provides the fixed-width column helpers the report renderer lays its
//! lines out with.

pub mod format;

pub use format::{fit_left, fit_number, fit_right, fits, separator, truncate};
