// Models Module
// Data types shared by the analytics core and its callers

pub mod scan;
pub mod trend;

pub use scan::{parse_timestamp, Finding, ScanRecord};
pub use trend::{AnalyticsSnapshot, ForecastPoint, SeriesPoint, TrendEntry, TrendPoint};
