// CLI module - Command line interface and argument parsing
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use clap::Parser;
use std::path::PathBuf;

mod analytics_args;
mod output_args;

pub use analytics_args::AnalyticsArgs;
pub use output_args::OutputArgs;

/// scanlens - Risk forecasting and scan comparison for security dashboards
///
/// The Args struct composes the domain-specific argument groups with
/// clap's #[command(flatten)]:
/// - Analytics operations (AnalyticsArgs)
/// - Output formats (OutputArgs)
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
#[command(name = "scanlens")]
#[command(about = "Risk forecasting and scan comparison for security dashboards", long_about = None)]
pub struct Args {
    /// Configuration file (TOML format)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Generate example configuration file
    #[arg(long = "config-example", value_name = "FILE")]
    pub config_example: Option<PathBuf>,

    /// Analytics service base URL (overrides config and SCANLENS_API_URL)
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    #[command(flatten)]
    pub analytics: AnalyticsArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl Args {
    /// Validate CLI arguments for mutual exclusivity and logical consistency
    pub fn validate(&self) -> crate::Result<()> {
        if self.analytics.compare.is_some() && self.analytics.compare_files.is_some() {
            return Err(crate::AnalyticsError::InvalidArgument {
                message: "Cannot use --compare and --compare-files together".to_string(),
            });
        }

        if self.analytics.horizon.is_some() && !self.analytics.forecast {
            return Err(crate::AnalyticsError::InvalidArgument {
                message: "--horizon only applies to --forecast".to_string(),
            });
        }

        Ok(())
    }
}
