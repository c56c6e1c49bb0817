//! Loan/OD movement exception report
//!
//! Compares two consecutive daily snapshots of loan and overdraft accounts
//! and reports every account line whose balance moved by at least a
//! threshold, grouped by loan category, as a fixed-width printable report.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path layout and report settings
//! - `error`: Custom error types
//! - `models`: Money, dates, categories, snapshot records and report rows
//! - `storage`: Input readers behind the `ReportInputs` trait
//! - `services`: Pipeline stages (categorize, aggregate, join, enrich)
//! - `reports`: The printed report renderer
//! - `quality`: Non-fatal data quality warnings and their log
//! - `export`: CSV export of report rows
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use loan_movement::config::{ReportPaths, Settings};
//! use loan_movement::services::run_report;
//! use loan_movement::storage::FileStorage;
//!
//! let paths = ReportPaths::new()?;
//! let settings = Settings::load_or_default(&paths)?;
//! let output = run_report(&FileStorage::new(paths), &settings)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod quality;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ReportError, ReportResult};
