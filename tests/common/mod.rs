//! Shared fixtures: a data directory laid out the way `ReportPaths` expects

use std::fs;
use std::path::Path;

use loan_movement::config::ReportPaths;

pub const SNAPSHOT_HEADER: &str =
    "acct_no,branch,acct_type,product,appr_limit,appr_limit_alt,balance";

/// Write a complete input set for report date 2024-03-01
pub fn write_inputs(base: &Path) -> ReportPaths {
    let paths = ReportPaths::with_base_dir(base.to_path_buf());
    fs::create_dir_all(paths.snapshot_dir()).unwrap();

    fs::write(paths.report_date_file(), "report_date\n2024-03-01\n").unwrap();
    fs::write(
        paths.primary_customers_file(),
        "acct_no,cust_name,secondary_flag\n1001,JOHN DOE,N\n",
    )
    .unwrap();
    fs::write(
        paths.secondary_customers_file(),
        "acct_no,cust_name,secondary_flag\n1001,JOHN D,Y\n3003,ACME SDN BHD,N\n",
    )
    .unwrap();
    fs::write(paths.branch_reference_file(), "1001 ABC\n1002 DEF\n").unwrap();

    write_snapshot(
        &paths,
        "0301",
        &[
            "1001,1,LN,100,8000000.00,,5000000.00",
            "3003,2,OD,200,2500000.00,,\"1,200,000.00\"",
            "4004,2,OD,107,100.00,,9000000.00",
            "5005,2,LN,720,,,10.00",
        ],
    );
    write_snapshot(
        &paths,
        "0229",
        &[
            "1001,1,LN,100,8000000.00,,3500000.00",
            "6006,1,LN,910,3000000.00,,2000000.00",
        ],
    );

    paths
}

pub fn write_snapshot(paths: &ReportPaths, id: &str, rows: &[&str]) {
    let mut contents = String::from(SNAPSHOT_HEADER);
    contents.push('\n');
    for row in rows {
        contents.push_str(row);
        contents.push('\n');
    }
    fs::write(paths.snapshot_dir().join(format!("loan_{}.csv", id)), contents).unwrap();
}
