//! Configuration module for the movement report
//!
//! This module provides configuration management including:
//! - Input and output path resolution
//! - Report settings persistence

pub mod paths;
pub mod settings;

pub use paths::ReportPaths;
pub use settings::Settings;
