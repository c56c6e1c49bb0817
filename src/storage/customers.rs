//! Customer source readers
//!
//! Each customer source is a CSV with `acct_no,cust_name,secondary_flag`.

use std::io::Read;

use serde::Deserialize;

use super::file_io::csv_reader;
use crate::error::{ReportError, ReportResult};
use crate::models::CustomerEntry;

#[derive(Debug, Deserialize)]
struct CustomerRow {
    acct_no: u64,
    cust_name: Option<String>,
    secondary_flag: Option<String>,
}

impl From<CustomerRow> for CustomerEntry {
    fn from(row: CustomerRow) -> Self {
        CustomerEntry::new(
            row.acct_no,
            row.cust_name.unwrap_or_default(),
            row.secondary_flag.unwrap_or_default(),
        )
    }
}

/// Parse one customer source, preserving row order
pub fn parse_customers<R: Read>(reader: R, source: &str) -> ReportResult<Vec<CustomerEntry>> {
    let mut reader = csv_reader(reader);
    let mut entries = Vec::new();

    for (idx, result) in reader.deserialize::<CustomerRow>().enumerate() {
        let row = result.map_err(|e| {
            ReportError::ReferenceData(format!(
                "Malformed customer row {} in {}: {}",
                idx + 1,
                source,
                e
            ))
        })?;
        entries.push(row.into());
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_order() {
        let data = "acct_no,cust_name,secondary_flag\n\
                    2002,SITI AMINAH,N\n\
                    1001,JOHN DOE,\n\
                    2002,SITI A.,Y\n";
        let entries = parse_customers(data.as_bytes(), "primary").unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], CustomerEntry::new(2002, "SITI AMINAH", "N"));
        assert_eq!(entries[1], CustomerEntry::new(1001, "JOHN DOE", ""));
        assert_eq!(entries[2].customer_name, "SITI A.");
    }

    #[test]
    fn test_bad_account_number() {
        let data = "acct_no,cust_name,secondary_flag\nABC,JOHN,N\n";
        let err = parse_customers(data.as_bytes(), "secondary").unwrap_err();
        assert!(err.is_reference_data());
        assert!(err.to_string().contains("secondary"));
    }
}
