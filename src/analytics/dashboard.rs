// Dashboard Data Shaping
// Turns raw service payloads into the inputs and summaries the views consume

use crate::models::{AnalyticsSnapshot, ScanRecord, TrendPoint};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Severity buckets in display order; anything else is counted as Info
pub const SEVERITY_BUCKETS: [&str; 4] = ["High", "Medium", "Low", "Info"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DistributionPoint {
    pub label: String,
    pub value: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    Secure,
    Moderate,
    Critical,
}

impl RiskBand {
    pub fn from_score(score: u8) -> Self {
        if score > 80 {
            RiskBand::Secure
        } else if score > 50 {
            RiskBand::Moderate
        } else {
            RiskBand::Critical
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreSummary {
    pub total_scans: usize,
    pub average_score: u8,
    pub latest_score: Option<u8>,
    pub min_score: Option<u8>,
    pub max_score: Option<u8>,
    pub latest_band: Option<RiskBand>,
}

/// Trend points from GET /analytics, in the order the service returned them
pub fn trend_points(snapshot: &AnalyticsSnapshot) -> Vec<TrendPoint> {
    snapshot
        .trends
        .iter()
        .enumerate()
        .map(|(i, entry)| TrendPoint::new(i, short_label(&entry.date), clamp_score(entry.risk_score)))
        .collect()
}

/// Trend points from full scan records, preserving input order
pub fn trend_points_from_scans(scans: &[ScanRecord]) -> Vec<TrendPoint> {
    scans
        .iter()
        .enumerate()
        .map(|(i, scan)| {
            let label = scan
                .scan_date
                .as_deref()
                .map(short_label)
                .unwrap_or_else(|| format!("#{}", i + 1));
            TrendPoint::new(i, label, clamp_score(scan.risk_score as f64))
        })
        .collect()
}

/// Count findings per severity bucket across all scans
pub fn severity_distribution(scans: &[ScanRecord]) -> Vec<DistributionPoint> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for finding in scans.iter().flat_map(|s| s.findings()) {
        *counts.entry(finding.severity.clone()).or_insert(0) += 1;
    }
    distribution_from_counts(&counts)
}

/// Normalize a severity → count map into the fixed buckets
pub fn distribution_from_counts(counts: &BTreeMap<String, usize>) -> Vec<DistributionPoint> {
    let mut buckets = [0usize; SEVERITY_BUCKETS.len()];
    for (severity, count) in counts {
        let slot = SEVERITY_BUCKETS
            .iter()
            .position(|b| *b == severity.as_str())
            .unwrap_or(SEVERITY_BUCKETS.len() - 1);
        buckets[slot] += *count;
    }

    let total: usize = buckets.iter().sum();
    SEVERITY_BUCKETS
        .iter()
        .zip(buckets)
        .map(|(label, value)| DistributionPoint {
            label: label.to_string(),
            value,
            percentage: if total > 0 {
                value as f64 / total as f64 * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

/// Aggregate statistics over a score history
pub fn score_summary(history: &[TrendPoint]) -> ScoreSummary {
    let scores: Vec<u8> = history.iter().map(|p| p.risk_score()).collect();
    let average_score = if scores.is_empty() {
        0
    } else {
        let mean = scores.iter().map(|&s| s as f64).sum::<f64>() / scores.len() as f64;
        mean.round() as u8
    };
    let latest_score = scores.last().copied();

    ScoreSummary {
        total_scans: scores.len(),
        average_score,
        latest_score,
        min_score: scores.iter().min().copied(),
        max_score: scores.iter().max().copied(),
        latest_band: latest_score.map(RiskBand::from_score),
    }
}

/// Date part of a service timestamp ("2024-01-02 10:00" -> "2024-01-02")
fn short_label(date: &str) -> String {
    date.split(|c: char| c == ' ' || c == 'T').next().unwrap_or(date).to_string()
}

fn clamp_score(score: f64) -> u8 {
    if score.is_nan() {
        return 0;
    }
    score.round().clamp(0.0, 100.0) as u8
}
