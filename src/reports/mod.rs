//! Reports module
//!
//! Provides the printed movement exception report.

pub mod movement;

pub use movement::{ControlCode, MovementReport, ReportHeading, ReportLine};
