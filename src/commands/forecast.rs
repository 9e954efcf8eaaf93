// ForecastCommand - Risk-score projection
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use super::support::{emit_json, load_snapshot, print_unavailable, resolve_config};
use super::Command;
use crate::analytics::{trend_points, TrendDirection, TrendForecaster};
use crate::{AnalyticsError, Args, Result};
use async_trait::async_trait;
use colored::Colorize;
use tracing::{debug, warn};

/// ForecastCommand projects the score history from GET /analytics
///
/// Histories too short or too uniform to regress on are reported with the
/// matching fallback state instead of failing the run.
pub struct ForecastCommand {
    args: Args,
}

impl ForecastCommand {
    pub fn new(args: Args) -> Self {
        Self { args }
    }
}

#[async_trait]
impl Command for ForecastCommand {
    async fn execute(&self) -> Result<()> {
        let config = resolve_config(&self.args)?;
        let horizon = self.args.analytics.horizon.unwrap_or(config.forecast.horizon);
        let forecaster = TrendForecaster::new(horizon)?;

        let snapshot = load_snapshot(&self.args, &config).await?;
        let history = trend_points(&snapshot);
        debug!("Forecasting {} points over horizon {}", history.len(), horizon);

        let forecast = match forecaster.forecast(&history) {
            Ok(forecast) => forecast,
            Err(
                e @ (AnalyticsError::InsufficientData { .. } | AnalyticsError::DegenerateRegression),
            ) => {
                warn!("Forecast skipped: {}", e);
                print_unavailable(e.user_facing_state(), &e.to_string());
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        if self.args.output.wants_json() {
            return emit_json(&self.args, &forecast, "Forecast");
        }

        println!("{}", forecaster.generate_report(&forecast));
        let direction = match forecast.trend_direction {
            TrendDirection::Improving => "improving".green().bold(),
            TrendDirection::Declining => "declining".red().bold(),
        };
        println!("Risk posture is {} ({:+.2} per scan)", direction, forecast.slope);

        Ok(())
    }

    fn name(&self) -> &'static str {
        "ForecastCommand"
    }
}
