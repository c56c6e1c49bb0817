//! CLI command for showing the resolved configuration

use crate::config::{ReportPaths, Settings};

/// Print the resolved paths and effective settings
pub fn handle_config_command(paths: &ReportPaths, settings: &Settings) {
    println!("Loan Movement Configuration");
    println!("===========================");
    println!("Base directory:     {}", paths.base_dir().display());
    println!("Settings file:      {}", paths.settings_file().display());
    println!("Report date file:   {}", paths.report_date_file().display());
    println!("Primary customers:  {}", paths.primary_customers_file().display());
    println!("Secondary customers: {}", paths.secondary_customers_file().display());
    println!("Branch reference:   {}", paths.branch_reference_file().display());
    println!("Snapshot directory: {}", paths.snapshot_dir().display());
    println!("Output directory:   {}", paths.output_dir().display());
    println!();
    println!("Settings:");
    println!("  Movement threshold: {}", settings.movement_threshold);
    println!("  Page length:        {}", settings.page_length);
    println!("  Institution title:  {}", settings.institution_title);
    println!("  Report title:       {}", settings.report_title);
    println!("  Write quality log:  {}", settings.write_quality_log);
}
