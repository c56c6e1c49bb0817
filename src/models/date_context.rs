//! Report date context
//!
//! Derives the current and previous snapshot dates from the report date,
//! along with the two-digit components used for snapshot identifiers and
//! report headings.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ReportError, ReportResult};

/// One snapshot date with its derived identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SnapshotDate(NaiveDate);

impl SnapshotDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The calendar date
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Two-digit day of month ("DD")
    pub fn day(&self) -> String {
        format!("{:02}", self.0.day())
    }

    /// Two-digit month ("MM")
    pub fn month(&self) -> String {
        format!("{:02}", self.0.month())
    }

    /// Two-digit year ("YY")
    pub fn year(&self) -> String {
        format!("{:02}", self.0.year().rem_euclid(100))
    }

    /// Identifier used to name the snapshot taken on this date ("MMDD")
    pub fn snapshot_id(&self) -> String {
        format!("{}{}", self.month(), self.day())
    }

    /// Display string for headings ("DD/MM/YY")
    pub fn display(&self) -> String {
        format!("{}/{}/{}", self.day(), self.month(), self.year())
    }

    /// Compact form used in output file names ("DDMMYY")
    pub fn compact(&self) -> String {
        format!("{}{}{}", self.day(), self.month(), self.year())
    }
}

impl fmt::Display for SnapshotDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// The pair of dates a report run compares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateContext {
    report: SnapshotDate,
    previous: SnapshotDate,
}

impl DateContext {
    /// Build the context for a report date; the previous date is the prior calendar day
    pub fn new(report_date: NaiveDate) -> ReportResult<Self> {
        let previous = report_date.pred_opt().ok_or_else(|| {
            ReportError::Config(format!("No calendar day precedes {}", report_date))
        })?;

        Ok(Self {
            report: SnapshotDate::new(report_date),
            previous: SnapshotDate::new(previous),
        })
    }

    /// The report (current snapshot) date
    pub fn report(&self) -> &SnapshotDate {
        &self.report
    }

    /// The previous snapshot date
    pub fn previous(&self) -> &SnapshotDate {
        &self.previous
    }

    /// Report date as shown on the report ("DD/MM/YY")
    pub fn display(&self) -> String {
        self.report.display()
    }
}

/// Require exactly one report date
pub fn single_report_date(dates: &[NaiveDate]) -> ReportResult<NaiveDate> {
    match dates {
        [date] => Ok(*date),
        [] => Err(ReportError::Config(
            "Report date source contains no dates".into(),
        )),
        _ => Err(ReportError::Config(format!(
            "Report date source contains {} dates, expected exactly one",
            dates.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_components() {
        let ctx = DateContext::new(date(2024, 7, 5)).unwrap();
        assert_eq!(ctx.report().day(), "05");
        assert_eq!(ctx.report().month(), "07");
        assert_eq!(ctx.report().year(), "24");
        assert_eq!(ctx.report().snapshot_id(), "0705");
        assert_eq!(ctx.previous().snapshot_id(), "0704");
        assert_eq!(ctx.display(), "05/07/24");
        assert_eq!(ctx.report().compact(), "050724");
    }

    #[test]
    fn test_previous_rolls_over_month_and_year() {
        let ctx = DateContext::new(date(2025, 1, 1)).unwrap();
        assert_eq!(ctx.previous().date(), date(2024, 12, 31));
        assert_eq!(ctx.previous().display(), "31/12/24");

        let ctx = DateContext::new(date(2025, 5, 1)).unwrap();
        assert_eq!(ctx.previous().date(), date(2025, 4, 30));
    }

    #[test]
    fn test_previous_handles_leap_day() {
        let ctx = DateContext::new(date(2024, 3, 1)).unwrap();
        assert_eq!(ctx.previous().date(), date(2024, 2, 29));
        assert_eq!(ctx.previous().snapshot_id(), "0229");

        let ctx = DateContext::new(date(2023, 3, 1)).unwrap();
        assert_eq!(ctx.previous().date(), date(2023, 2, 28));
    }

    #[test]
    fn test_single_report_date() {
        assert!(single_report_date(&[]).unwrap_err().is_config());
        assert!(single_report_date(&[date(2024, 1, 2), date(2024, 1, 3)])
            .unwrap_err()
            .is_config());
        assert_eq!(single_report_date(&[date(2024, 1, 2)]).unwrap(), date(2024, 1, 2));
    }
}
