//! Storage layer for report runs
//!
//! The pipeline reads its inputs through the `ReportInputs` trait. `FileStorage`
//! implements it over the files laid out by `ReportPaths`; tests and other
//! callers can supply their own implementation.

pub mod branches;
pub mod customers;
pub mod file_io;
pub mod report_date;
pub mod snapshots;

pub use branches::parse_branches;
pub use customers::parse_customers;
pub use file_io::{ensure_parent_dir, stage_lines, StagedFile};
pub use report_date::parse_report_dates;
pub use snapshots::parse_snapshot;

use chrono::NaiveDate;

use crate::config::paths::ReportPaths;
use crate::error::{ReportError, ReportResult};
use crate::models::{
    date_context::single_report_date, BranchReference, CustomerEntry, Period, SnapshotDate,
    SnapshotRecord,
};

use file_io::open_input;

/// Sources a report run reads from
pub trait ReportInputs {
    /// The single report date
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the source holds zero or several dates.
    fn read_report_date(&self) -> ReportResult<NaiveDate>;

    /// Both customer sources, each in its original row order
    fn read_customer_sources(&self) -> ReportResult<(Vec<CustomerEntry>, Vec<CustomerEntry>)>;

    /// The branch reference table
    fn read_branch_reference(&self) -> ReportResult<Vec<BranchReference>>;

    /// The snapshot taken on `date`
    ///
    /// # Errors
    ///
    /// Returns a missing snapshot error if no snapshot exists for the date.
    fn read_snapshot(&self, period: Period, date: &SnapshotDate)
        -> ReportResult<Vec<SnapshotRecord>>;
}

/// File-backed report inputs
pub struct FileStorage {
    paths: ReportPaths,
}

impl FileStorage {
    /// Create a new FileStorage instance
    pub fn new(paths: ReportPaths) -> Self {
        Self { paths }
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ReportPaths {
        &self.paths
    }
}

impl ReportInputs for FileStorage {
    fn read_report_date(&self) -> ReportResult<NaiveDate> {
        let file = open_input(&self.paths.report_date_file(), ReportError::Config)?;
        let dates = parse_report_dates(file)?;
        single_report_date(&dates)
    }

    fn read_customer_sources(&self) -> ReportResult<(Vec<CustomerEntry>, Vec<CustomerEntry>)> {
        let primary_path = self.paths.primary_customers_file();
        let secondary_path = self.paths.secondary_customers_file();

        let primary = parse_customers(
            open_input(&primary_path, ReportError::ReferenceData)?,
            &primary_path.display().to_string(),
        )?;
        let secondary = parse_customers(
            open_input(&secondary_path, ReportError::ReferenceData)?,
            &secondary_path.display().to_string(),
        )?;

        tracing::debug!(
            primary = primary.len(),
            secondary = secondary.len(),
            "Loaded customer sources"
        );
        Ok((primary, secondary))
    }

    fn read_branch_reference(&self) -> ReportResult<Vec<BranchReference>> {
        let file = open_input(&self.paths.branch_reference_file(), ReportError::ReferenceData)?;
        let branches = parse_branches(file)?;
        tracing::debug!(branches = branches.len(), "Loaded branch reference");
        Ok(branches)
    }

    fn read_snapshot(
        &self,
        period: Period,
        date: &SnapshotDate,
    ) -> ReportResult<Vec<SnapshotRecord>> {
        let path = self.paths.snapshot_file(date);
        if !path.exists() {
            return Err(ReportError::missing_snapshot(
                period.as_str(),
                date.snapshot_id(),
                path.display().to_string(),
            ));
        }

        let file = open_input(&path, ReportError::Io)?;
        let records = parse_snapshot(file, &path.display().to_string())?;
        tracing::debug!(
            period = period.as_str(),
            snapshot = %date.snapshot_id(),
            records = records.len(),
            "Loaded snapshot"
        );
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, FileStorage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::with_base_dir(temp_dir.path().to_path_buf());
        fs::create_dir_all(paths.snapshot_dir()).unwrap();
        (temp_dir, FileStorage::new(paths))
    }

    #[test]
    fn test_read_report_date() {
        let (_temp_dir, storage) = create_test_storage();
        fs::write(storage.paths().report_date_file(), "report_date\n2024-03-01\n").unwrap();

        assert_eq!(
            storage.read_report_date().unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
    }

    #[test]
    fn test_report_date_must_be_single() {
        let (_temp_dir, storage) = create_test_storage();

        fs::write(storage.paths().report_date_file(), "report_date\n").unwrap();
        assert!(storage.read_report_date().unwrap_err().is_config());

        fs::write(
            storage.paths().report_date_file(),
            "report_date\n2024-03-01\n2024-03-02\n",
        )
        .unwrap();
        assert!(storage.read_report_date().unwrap_err().is_config());
    }

    #[test]
    fn test_missing_report_date_file_is_config_error() {
        let (_temp_dir, storage) = create_test_storage();
        assert!(storage.read_report_date().unwrap_err().is_config());
    }

    #[test]
    fn test_missing_snapshot() {
        let (_temp_dir, storage) = create_test_storage();
        let date = SnapshotDate::new(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        let err = storage.read_snapshot(Period::Previous, &date).unwrap_err();
        assert!(err.is_missing_snapshot());
        assert!(err.to_string().contains("previous snapshot 0229"));
    }

    #[test]
    fn test_read_snapshot() {
        let (_temp_dir, storage) = create_test_storage();
        let date = SnapshotDate::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        fs::write(
            storage.paths().snapshot_file(&date),
            "acct_no,branch,acct_type,product,appr_limit,appr_limit_alt,balance\n\
             1001,1,LN,100,100.00,,50.00\n",
        )
        .unwrap();

        let records = storage.read_snapshot(Period::Current, &date).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_missing_branch_reference() {
        let (_temp_dir, storage) = create_test_storage();
        assert!(storage
            .read_branch_reference()
            .unwrap_err()
            .is_reference_data());
    }

    #[test]
    fn test_read_customer_sources() {
        let (_temp_dir, storage) = create_test_storage();
        fs::write(
            storage.paths().primary_customers_file(),
            "acct_no,cust_name,secondary_flag\n1,A,N\n",
        )
        .unwrap();
        fs::write(
            storage.paths().secondary_customers_file(),
            "acct_no,cust_name,secondary_flag\n1,B,Y\n2,C,N\n",
        )
        .unwrap();

        let (primary, secondary) = storage.read_customer_sources().unwrap();
        assert_eq!(primary.len(), 1);
        assert_eq!(secondary.len(), 2);
    }
}
