//! Report date table reader
//!
//! The report date table is a one-column CSV (`report_date`) that must hold
//! exactly one date.

use std::io::Read;

use chrono::NaiveDate;
use serde::Deserialize;

use super::file_io::csv_reader;
use crate::error::{ReportError, ReportResult};

/// Accepted date formats, tried in order
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d/%m/%y", "%d/%m/%Y", "%Y%m%d"];

#[derive(Debug, Deserialize)]
struct ReportDateRow {
    report_date: String,
}

/// Parse every date in a report date table
pub fn parse_report_dates<R: Read>(reader: R) -> ReportResult<Vec<NaiveDate>> {
    let mut reader = csv_reader(reader);
    let mut dates = Vec::new();

    for (idx, result) in reader.deserialize::<ReportDateRow>().enumerate() {
        let row = result.map_err(|e| {
            ReportError::Config(format!("Malformed report date row {}: {}", idx + 1, e))
        })?;
        let date = parse_date(&row.report_date).map_err(ReportError::Config)?;
        dates.push(date);
    }

    Ok(dates)
}

/// Parse a date string using the accepted formats
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
        .ok_or_else(|| format!("Could not parse report date: '{}'", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_date() {
        let dates = parse_report_dates("report_date\n2024-03-01\n".as_bytes()).unwrap();
        assert_eq!(dates, vec![NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()]);
    }

    #[test]
    fn test_parse_multiple_and_empty() {
        let dates = parse_report_dates("report_date\n01/03/2024\n02/03/2024\n".as_bytes()).unwrap();
        assert_eq!(dates.len(), 2);

        let dates = parse_report_dates("report_date\n".as_bytes()).unwrap();
        assert!(dates.is_empty());
    }

    #[test]
    fn test_unparsable_date_is_config_error() {
        let err = parse_report_dates("report_date\nyesterday\n".as_bytes()).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(parse_date("2024-02-29").unwrap(), expected);
        assert_eq!(parse_date("29/02/2024").unwrap(), expected);
        assert_eq!(parse_date("20240229").unwrap(), expected);
        assert!(parse_date("2023-02-29").is_err());
    }
}
