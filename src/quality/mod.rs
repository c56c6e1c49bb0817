//! Data quality log
//!
//! Problems in the input that do not stop a run (null amounts, accounts no
//! rule categorizes, names missing from the directories) are recorded here
//! rather than raised. After a successful run the log is written next to the
//! report as line-delimited JSON.

mod logger;
mod warning;

pub use logger::{read_quality_log, QualityEntry, QualityLog};
pub use warning::{AmountField, DataQualityWarning};
