// Trend Forecaster
// Least-squares projection of the risk-score history

use crate::error::AnalyticsError;
use crate::models::{ForecastPoint, SeriesPoint, TrendPoint};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Number of projected points when the caller does not choose one
pub const DEFAULT_HORIZON: usize = 5;

/// Largest accepted horizon; one projected point per day for a year
pub const MAX_HORIZON: usize = 365;

/// Minimum history length for a meaningful fit
pub const MIN_HISTORY_POINTS: usize = 2;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Improving,
    Declining,
}

impl TrendDirection {
    /// Scores are "higher is safer": only a strictly positive slope improves
    pub fn from_slope(slope: f64) -> Self {
        if slope > 0.0 {
            TrendDirection::Improving
        } else {
            TrendDirection::Declining
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendDirection::Improving => write!(f, "improving"),
            TrendDirection::Declining => write!(f, "declining"),
        }
    }
}

/// Fitted line `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RegressionLine {
    pub slope: f64,
    pub intercept: f64,
}

impl RegressionLine {
    /// Ordinary least squares over the points' positions in `history`
    pub fn fit(history: &[TrendPoint]) -> crate::Result<Self> {
        if history.len() < MIN_HISTORY_POINTS {
            return Err(AnalyticsError::InsufficientData {
                points: history.len(),
            });
        }

        let n = history.len() as f64;
        let mut sum_x = 0.0;
        let mut sum_y = 0.0;
        let mut sum_xy = 0.0;
        let mut sum_x2 = 0.0;

        for (i, point) in history.iter().enumerate() {
            let x = i as f64;
            let y = point.risk_score() as f64;
            sum_x += x;
            sum_y += y;
            sum_xy += x * y;
            sum_x2 += x * x;
        }

        let denominator = n * sum_x2 - sum_x * sum_x;
        if denominator == 0.0 {
            return Err(AnalyticsError::DegenerateRegression);
        }

        let slope = (n * sum_xy - sum_x * sum_y) / denominator;
        let intercept = (sum_y - slope * sum_x) / n;

        Ok(Self { slope, intercept })
    }

    /// Raw value of the line at `x`
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Value at `x` clamped to [0, 100] and rounded to the nearest integer
    pub fn predict_score(&self, x: f64) -> u8 {
        self.predict(x).clamp(0.0, 100.0).round() as u8
    }
}

/// History plus projection, shaped for a line chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forecast {
    pub series: Vec<SeriesPoint>,
    pub trend_direction: TrendDirection,
    pub slope: f64,
    pub intercept: f64,
    /// Projected points; the first one is the bridge copy of the last history point
    pub forecast_points: Vec<ForecastPoint>,
}

impl Forecast {
    /// Projected scores without the bridge point
    pub fn projected_scores(&self) -> Vec<u8> {
        self.forecast_points
            .iter()
            .skip(1)
            .map(|p| p.predicted_score)
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct TrendForecaster {
    horizon: usize,
}

impl Default for TrendForecaster {
    fn default() -> Self {
        Self {
            horizon: DEFAULT_HORIZON,
        }
    }
}

impl TrendForecaster {
    /// Create a forecaster projecting `horizon` points ahead
    pub fn new(horizon: i64) -> crate::Result<Self> {
        if horizon <= 0 {
            return Err(AnalyticsError::InvalidArgument {
                message: format!("forecast horizon must be at least 1, got {}", horizon),
            });
        }

        let horizon = usize::try_from(horizon)
            .ok()
            .filter(|h| *h <= MAX_HORIZON)
            .ok_or_else(|| AnalyticsError::InvalidArgument {
                message: format!("forecast horizon must be at most {}, got {}", MAX_HORIZON, horizon),
            })?;

        Ok(Self { horizon })
    }

    /// Create a forecaster from an optional caller choice, defaulting to 5
    pub fn with_horizon(horizon: Option<i64>) -> crate::Result<Self> {
        match horizon {
            Some(h) => Self::new(h),
            None => Ok(Self::default()),
        }
    }

    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// Fit the history and project it `horizon` points forward
    pub fn forecast(&self, history: &[TrendPoint]) -> crate::Result<Forecast> {
        let line = RegressionLine::fit(history)?;
        let last_index = history.len() - 1;
        let last = &history[last_index];

        debug!(
            "Fitted {} points: slope={:.4}, intercept={:.4}",
            history.len(),
            line.slope,
            line.intercept
        );

        let mut forecast_points = Vec::with_capacity(self.horizon + 1);
        forecast_points.push(ForecastPoint {
            sequence_index: last_index,
            label: last.label().to_string(),
            predicted_score: last.risk_score(),
        });

        for i in 1..=self.horizon {
            let next_index = last_index + i;
            forecast_points.push(ForecastPoint {
                sequence_index: next_index,
                label: format!("+{}d", i),
                predicted_score: line.predict_score(next_index as f64),
            });
        }

        let mut series: Vec<SeriesPoint> = history
            .iter()
            .map(|p| SeriesPoint {
                label: p.label().to_string(),
                actual: Some(p.risk_score()),
                predicted: None,
            })
            .collect();

        if let Some(bridge) = series.last_mut() {
            bridge.predicted = bridge.actual;
        }

        series.extend(forecast_points.iter().skip(1).map(|p| SeriesPoint {
            label: p.label.clone(),
            actual: None,
            predicted: Some(p.predicted_score),
        }));

        Ok(Forecast {
            series,
            trend_direction: TrendDirection::from_slope(line.slope),
            slope: line.slope,
            intercept: line.intercept,
            forecast_points,
        })
    }

    /// Render a forecast as a terminal report
    pub fn generate_report(&self, forecast: &Forecast) -> String {
        let mut report = String::new();

        report.push_str("╔════════════════════════════════════════════════════════════════════╗\n");
        report.push_str("║                         RISK FORECAST                              ║\n");
        report.push_str("╚════════════════════════════════════════════════════════════════════╝\n\n");

        let history_len = forecast.series.iter().filter(|p| p.actual.is_some()).count();

        report.push_str("REGRESSION\n");
        report.push_str("───────────────────────────────────────────────────────────────────\n");
        report.push_str(&format!("Data points:   {}\n", history_len));
        report.push_str(&format!("Horizon:       {}\n", self.horizon));
        report.push_str(&format!("Slope:         {:.2}\n", forecast.slope));
        report.push_str(&format!("Intercept:     {:.2}\n", forecast.intercept));
        report.push_str(&format!("Trend:         {}\n\n", forecast.trend_direction));

        report.push_str("SERIES\n");
        report.push_str("───────────────────────────────────────────────────────────────────\n");
        for point in &forecast.series {
            let actual = point.actual.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string());
            let predicted = point
                .predicted
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string());
            report.push_str(&format!("  {:<18} actual {:>4}   predicted {:>4}\n", point.label, actual, predicted));
        }
        report.push('\n');

        report
    }
}

/// Forecast `history` with an explicit horizon
pub fn forecast(history: &[TrendPoint], horizon: i64) -> crate::Result<Forecast> {
    TrendForecaster::new(horizon)?.forecast(history)
}
