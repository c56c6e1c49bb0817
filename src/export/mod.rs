//! Export module
//!
//! Provides side outputs of a report run:
//! - CSV: report rows with plain decimal amounts (spreadsheet-compatible)

pub mod csv;

pub use self::csv::export_rows_csv;
