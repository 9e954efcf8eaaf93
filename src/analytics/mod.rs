// Analytics Module
// Risk forecasting and scan comparison over in-memory scan data

pub mod dashboard;
pub mod scan_diff;
pub mod trend_forecaster;

pub use dashboard::{
    distribution_from_counts, score_summary, severity_distribution, trend_points,
    trend_points_from_scans, DistributionPoint, RiskBand, ScoreSummary,
};
pub use scan_diff::{compare, ComparisonResult, ComparisonSummary, ScanDiffEngine, ScoreChange};
pub use trend_forecaster::{
    forecast, Forecast, RegressionLine, TrendDirection, TrendForecaster, DEFAULT_HORIZON,
    MAX_HORIZON,
};
