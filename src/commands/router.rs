// CommandRouter - Routes CLI arguments to appropriate Command
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use super::{Command, CompareCommand, ConfigExampleCommand, ForecastCommand, SummaryCommand};
use crate::{AnalyticsError, Args, Result};

/// CommandRouter determines which Command to execute based on CLI arguments
///
/// Priority order:
/// 1. Example configuration (--config-example)
/// 2. Scan comparison (--compare, --compare-files)
/// 3. Risk forecast (--forecast)
/// 4. Dashboard summary (--summary)
pub struct CommandRouter;

impl CommandRouter {
    /// Route CLI arguments to the appropriate Command
    ///
    /// # Errors
    /// Returns InvalidArgument when no operation was requested
    pub fn route(args: Args) -> Result<Box<dyn Command>> {
        if args.config_example.is_some() {
            return Ok(Box::new(ConfigExampleCommand::new(args)));
        }

        if args.analytics.wants_compare() {
            return Ok(Box::new(CompareCommand::new(args)));
        }

        if args.analytics.forecast {
            return Ok(Box::new(ForecastCommand::new(args)));
        }

        if args.analytics.summary {
            return Ok(Box::new(SummaryCommand::new(args)));
        }

        Err(AnalyticsError::InvalidArgument {
            message: "No operation requested (use --forecast, --compare, --compare-files, --summary or --config-example)"
                .to_string(),
        })
    }

    /// Reject argument sets that select more than one operation
    pub fn validate_routing(args: &Args) -> Result<()> {
        let mode_count = [
            args.config_example.is_some(),
            args.analytics.wants_compare(),
            args.analytics.forecast,
            args.analytics.summary,
        ]
        .iter()
        .filter(|&&x| x)
        .count();

        if mode_count > 1 {
            return Err(AnalyticsError::InvalidArgument {
                message: "Multiple operations specified. Please use only one of: --config-example, --compare/--compare-files, --forecast, --summary".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_forecast() {
        let mut args = Args::default();
        args.analytics.forecast = true;
        let cmd = CommandRouter::route(args).expect("test assertion should succeed");
        assert_eq!(cmd.name(), "ForecastCommand");
    }

    #[test]
    fn test_route_compare() {
        let mut args = Args::default();
        args.analytics.compare = Some("1:2".to_string());
        let cmd = CommandRouter::route(args).expect("test assertion should succeed");
        assert_eq!(cmd.name(), "CompareCommand");
    }

    #[test]
    fn test_route_compare_files() {
        let mut args = Args::default();
        args.analytics.compare_files = Some("a.json:b.json".to_string());
        let cmd = CommandRouter::route(args).expect("test assertion should succeed");
        assert_eq!(cmd.name(), "CompareCommand");
    }

    #[test]
    fn test_route_summary() {
        let mut args = Args::default();
        args.analytics.summary = true;
        let cmd = CommandRouter::route(args).expect("test assertion should succeed");
        assert_eq!(cmd.name(), "SummaryCommand");
    }

    #[test]
    fn test_route_config_example_wins() {
        let mut args = Args::default();
        args.config_example = Some(std::path::PathBuf::from("scanlens.toml"));
        args.analytics.forecast = true;
        let cmd = CommandRouter::route(args).expect("test assertion should succeed");
        assert_eq!(cmd.name(), "ConfigExampleCommand");
    }

    #[test]
    fn test_route_nothing_requested() {
        let result = CommandRouter::route(Args::default());
        assert!(matches!(result, Err(AnalyticsError::InvalidArgument { .. })));
    }

    #[test]
    fn test_validate_conflicting_modes() {
        let mut args = Args::default();
        args.analytics.forecast = true;
        args.analytics.summary = true;
        assert!(CommandRouter::validate_routing(&args).is_err());
    }

    #[test]
    fn test_validate_single_mode() {
        let mut args = Args::default();
        args.analytics.compare = Some("1:2".to_string());
        assert!(CommandRouter::validate_routing(&args).is_ok());
    }
}
