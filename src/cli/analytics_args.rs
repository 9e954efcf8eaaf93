// Analytics operation arguments
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use clap::Args;
use std::path::PathBuf;

/// Forecast, comparison and summary operations
///
/// Each operation reads its input either from the analytics service or from
/// JSON files previously saved from it.
#[derive(Args, Debug, Clone, Default)]
pub struct AnalyticsArgs {
    /// Project the risk-score history forward
    #[arg(long = "forecast")]
    pub forecast: bool,

    /// Number of points to project (default: forecast.horizon from config, else 5)
    #[arg(long = "horizon", value_name = "N", allow_hyphen_values = true)]
    pub horizon: Option<i64>,

    /// Read the GET /analytics payload from a file instead of the service
    #[arg(long = "analytics-file", value_name = "FILE")]
    pub analytics_file: Option<PathBuf>,

    /// Compare two scans fetched from the service (format: SCAN_ID_1:SCAN_ID_2)
    #[arg(long = "compare", value_name = "SCAN_ID_1:SCAN_ID_2")]
    pub compare: Option<String>,

    /// Compare two scans saved as JSON (format: FILE_1:FILE_2)
    #[arg(long = "compare-files", value_name = "FILE_1:FILE_2")]
    pub compare_files: Option<String>,

    /// Score summary and severity distribution
    #[arg(long = "summary")]
    pub summary: bool,
}

impl AnalyticsArgs {
    /// Whether a comparison was requested in either form
    pub fn wants_compare(&self) -> bool {
        self.compare.is_some() || self.compare_files.is_some()
    }
}
