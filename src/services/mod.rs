//! Pipeline stages for the movement report
//!
//! Each stage consumes the previous stage's full output and returns a new
//! collection. `pipeline` chains them into a run.

pub mod aggregator;
pub mod categorizer;
pub mod directory;
pub mod enrichment;
pub mod movement;
pub mod pipeline;

pub use aggregator::aggregate;
pub use categorizer::{categorize, categorize_snapshot};
pub use directory::{build_branch_directory, build_customer_directory};
pub use enrichment::enrich;
pub use movement::compute_movements;
pub use pipeline::{build_report, run_report, ReportOutput, ReportSources};
