//! Fixed-width branch reference reader
//!
//! Layout (0-based byte offsets):
//!
//! | offset | length | field        |
//! |--------|--------|--------------|
//! | 0      | 1      | bank code    |
//! | 1      | 3      | branch code  |
//! | 5      | 3      | branch abbr. |

use std::io::{BufRead, BufReader, Read};

use crate::error::{ReportError, ReportResult};
use crate::models::BranchReference;

const BRANCH_CODE: std::ops::Range<usize> = 1..4;
const BRANCH_ABBR_START: usize = 5;
const BRANCH_ABBR_LEN: usize = 3;

/// Parse every non-blank line of a branch reference table
pub fn parse_branches<R: Read>(reader: R) -> ReportResult<Vec<BranchReference>> {
    let mut branches = Vec::new();

    for (idx, line) in BufReader::new(reader).lines().enumerate() {
        let line = line.map_err(|e| {
            ReportError::ReferenceData(format!("Failed to read branch line {}: {}", idx + 1, e))
        })?;
        if let Some(branch) = parse_branch_line(&line, idx + 1)? {
            branches.push(branch);
        }
    }

    Ok(branches)
}

/// Parse one fixed-width line; blank lines yield `None`
pub fn parse_branch_line(line: &str, line_num: usize) -> ReportResult<Option<BranchReference>> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let malformed =
        |reason: &str| ReportError::ReferenceData(format!("Branch line {}: {}", line_num, reason));

    let bank_code = line.chars().next().ok_or_else(|| malformed("empty line"))?;

    if line.len() < BRANCH_CODE.end {
        return Err(malformed("line too short for branch code"));
    }
    let code = line
        .get(BRANCH_CODE)
        .ok_or_else(|| malformed("branch code is not valid text"))?;
    if !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed(&format!("branch code '{}' is not 3 digits", code)));
    }
    let branch_code: u16 = code
        .parse()
        .map_err(|_| malformed(&format!("invalid branch code '{}'", code)))?;

    let abbr_end = (BRANCH_ABBR_START + BRANCH_ABBR_LEN).min(line.len());
    let branch_abbr = if BRANCH_ABBR_START < abbr_end {
        line.get(BRANCH_ABBR_START..abbr_end)
            .ok_or_else(|| malformed("branch abbreviation is not valid text"))?
            .trim()
            .to_string()
    } else {
        String::new()
    };

    Ok(Some(BranchReference {
        bank_code,
        branch_code,
        branch_abbr,
    }))
}
