// Trend Models
// Chart-ready points for the risk history and its projection

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One historical risk score, positioned by insertion order
///
/// Fields are private so every point, including deserialized ones, goes
/// through [`TrendPoint::new`] and carries a score in 0-100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawTrendPoint")]
pub struct TrendPoint {
    sequence_index: usize,
    label: String,
    risk_score: u8,
}

#[derive(Deserialize)]
struct RawTrendPoint {
    sequence_index: usize,
    label: String,
    risk_score: u8,
}

impl From<RawTrendPoint> for TrendPoint {
    fn from(raw: RawTrendPoint) -> Self {
        TrendPoint::new(raw.sequence_index, raw.label, raw.risk_score)
    }
}

impl TrendPoint {
    /// Scores above 100 are capped
    pub fn new(sequence_index: usize, label: impl Into<String>, risk_score: u8) -> Self {
        Self {
            sequence_index,
            label: label.into(),
            risk_score: risk_score.min(100),
        }
    }

    pub fn sequence_index(&self) -> usize {
        self.sequence_index
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn risk_score(&self) -> u8 {
        self.risk_score
    }
}

/// One projected risk score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub sequence_index: usize,
    pub label: String,
    pub predicted_score: u8, // clamped to 0-100
}

/// Row of the combined history + forecast series.
///
/// Historical rows carry `actual`, projected rows carry `predicted`; the last
/// historical row carries both so the two lines join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub actual: Option<u8>,
    pub predicted: Option<u8>,
}

/// Entry of the `trends` array in GET /analytics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendEntry {
    pub date: String,
    pub risk_score: f64,
}

/// Payload of GET /analytics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    #[serde(default)]
    pub trends: Vec<TrendEntry>,
    #[serde(default)]
    pub vulnerability_distribution: BTreeMap<String, usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_point_caps_score() {
        let point = TrendPoint::new(0, "2024-01-01", 140);
        assert_eq!(point.risk_score(), 100);
    }

    #[test]
    fn test_deserialized_trend_point_is_capped() {
        let point: TrendPoint =
            serde_json::from_str(r#"{"sequence_index": 2, "label": "2024-01-03", "risk_score": 250}"#)
                .unwrap();
        assert_eq!(point.risk_score(), 100);
        assert_eq!(point.sequence_index(), 2);
        assert_eq!(point.label(), "2024-01-03");
    }

    #[test]
    fn test_deserialize_analytics_snapshot() {
        let json = r#"{
            "trends": [
                {"date": "2024-01-01 10:00", "risk_score": 40},
                {"date": "2024-01-02 11:30", "risk_score": 55.5}
            ],
            "vulnerability_distribution": {"High": 1, "Medium": 3, "Low": 0, "Info": 7}
        }"#;

        let snapshot: AnalyticsSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.trends.len(), 2);
        assert_eq!(snapshot.trends[1].risk_score, 55.5);
        assert_eq!(snapshot.vulnerability_distribution.get("Info"), Some(&7));
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot: AnalyticsSnapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.trends.is_empty());
        assert!(snapshot.vulnerability_distribution.is_empty());
    }
}
