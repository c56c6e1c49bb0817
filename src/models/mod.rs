//! Core data models for the movement report
//!
//! This module contains the records that flow through a report run: snapshot
//! rows, per-period aggregates, movements, rendered rows, and the customer and
//! branch lookups used to enrich them.

pub mod branch;
pub mod category;
pub mod customer;
pub mod date_context;
pub mod money;
pub mod movement;
pub mod snapshot;

pub use branch::{BranchDirectory, BranchReference};
pub use category::{LoanCategory, CATEGORY_LABELS, CATEGORY_RULES, LABEL_WIDTH};
pub use customer::{CustomerDirectory, CustomerEntry, CustomerInfo};
pub use date_context::{DateContext, SnapshotDate};
pub use money::Money;
pub use movement::{MovementRecord, PeriodAggregate, ReportRow};
pub use snapshot::{AccountKey, CategorizedRecord, Period, SnapshotRecord};
