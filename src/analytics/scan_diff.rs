// Scan Diff Engine
// Fixed / new / persisting findings between two scans of a target

use crate::error::AnalyticsError;
use crate::models::ScanRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScoreChange {
    Improved,
    Regressed,
    Unchanged,
}

impl ScoreChange {
    /// Higher scores are safer, so a positive delta is an improvement
    pub fn from_delta(delta: i32) -> Self {
        match delta {
            d if d > 0 => ScoreChange::Improved,
            d if d < 0 => ScoreChange::Regressed,
            _ => ScoreChange::Unchanged,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComparisonSummary {
    pub fixed_count: usize,
    pub introduced_count: usize,
    pub persisting_count: usize,
    pub total_changes: usize,
    pub score_change: ScoreChange,
    pub seconds_between_scans: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComparisonResult {
    pub older: ScanRecord,
    pub newer: ScanRecord,
    pub score_delta: i32,
    pub fixed: BTreeSet<String>,
    pub introduced: BTreeSet<String>,
    pub persisting: BTreeSet<String>,
    pub summary: ComparisonSummary,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScanDiffEngine;

impl ScanDiffEngine {
    pub fn new() -> Self {
        Self
    }

    /// Compare two scans; argument order does not matter
    pub fn compare(&self, scan_a: &ScanRecord, scan_b: &ScanRecord) -> crate::Result<ComparisonResult> {
        let ts_a = Self::scan_timestamp(scan_a)?;
        let ts_b = Self::scan_timestamp(scan_b)?;

        // Ties keep argument order
        let (older, newer, older_ts, newer_ts) = if ts_a > ts_b {
            (scan_b, scan_a, ts_b, ts_a)
        } else {
            (scan_a, scan_b, ts_a, ts_b)
        };

        let score_delta = newer.risk_score.saturating_sub(older.risk_score);

        let older_names = Self::finding_names(older);
        let newer_names = Self::finding_names(newer);

        let fixed: BTreeSet<String> = older_names.difference(&newer_names).cloned().collect();
        let introduced: BTreeSet<String> = newer_names.difference(&older_names).cloned().collect();
        let persisting: BTreeSet<String> = newer_names.intersection(&older_names).cloned().collect();

        debug!(
            "Compared scans {:?} -> {:?}: {} fixed, {} new, {} persisting",
            older.id,
            newer.id,
            fixed.len(),
            introduced.len(),
            persisting.len()
        );

        let summary = ComparisonSummary {
            fixed_count: fixed.len(),
            introduced_count: introduced.len(),
            persisting_count: persisting.len(),
            total_changes: fixed.len() + introduced.len(),
            score_change: ScoreChange::from_delta(score_delta),
            seconds_between_scans: (newer_ts - older_ts).num_seconds(),
        };

        Ok(ComparisonResult {
            older: older.clone(),
            newer: newer.clone(),
            score_delta,
            fixed,
            introduced,
            persisting,
            summary,
        })
    }

    /// Format comparison as string
    pub fn format_comparison(&self, comparison: &ComparisonResult, format: &str) -> crate::Result<String> {
        match format.to_lowercase().as_str() {
            "json" => Ok(serde_json::to_string_pretty(comparison)?),
            "terminal" | "text" => Ok(self.format_terminal(comparison)),
            _ => Err(AnalyticsError::InvalidArgument {
                message: format!("Unknown format: {}", format),
            }),
        }
    }

    // Helper methods

    fn scan_timestamp(scan: &ScanRecord) -> crate::Result<DateTime<Utc>> {
        let raw = scan.scan_date.as_deref().ok_or_else(|| AnalyticsError::InvalidScanRecord {
            scan_id: scan.id,
            reason: "missing scan_date".to_string(),
        })?;

        scan.timestamp().ok_or_else(|| AnalyticsError::InvalidScanRecord {
            scan_id: scan.id,
            reason: format!("unparsable scan_date '{}'", raw),
        })
    }

    fn finding_names(scan: &ScanRecord) -> BTreeSet<String> {
        scan.findings()
            .iter()
            .map(|f| f.vulnerability.clone())
            .collect()
    }

    fn format_terminal(&self, comp: &ComparisonResult) -> String {
        let mut output = String::new();

        output.push_str("╔════════════════════════════════════════════════════════════════════╗\n");
        output.push_str("║                        SCAN COMPARISON                             ║\n");
        output.push_str("╚════════════════════════════════════════════════════════════════════╝\n\n");

        output.push_str(&format!(
            "Older: {} (ID: {})\n",
            comp.older.scan_date.as_deref().unwrap_or("N/A"),
            comp.older.id.map(|id| id.to_string()).unwrap_or_else(|| "N/A".to_string())
        ));
        output.push_str(&format!(
            "Newer: {} (ID: {})\n",
            comp.newer.scan_date.as_deref().unwrap_or("N/A"),
            comp.newer.id.map(|id| id.to_string()).unwrap_or_else(|| "N/A".to_string())
        ));
        output.push_str(&format!("Target: {}\n\n", comp.newer.url));

        output.push_str("SUMMARY\n");
        output.push_str("───────────────────────────────────────────────────────────────────\n");
        let delta = if comp.score_delta > 0 {
            format!("+{}", comp.score_delta)
        } else {
            comp.score_delta.to_string()
        };
        output.push_str(&format!(
            "Risk score:         {} → {} ({})\n",
            comp.older.risk_score, comp.newer.risk_score, delta
        ));
        output.push_str(&format!("Vulnerabilities fixed: {}\n", comp.summary.fixed_count));
        output.push_str(&format!("New issues found:      {}\n", comp.summary.introduced_count));
        output.push_str(&format!("Persisting issues:     {}\n", comp.summary.persisting_count));
        output.push_str(&format!(
            "Time between scans:    {} seconds\n\n",
            comp.summary.seconds_between_scans
        ));

        output.push_str("RESOLVED ISSUES\n");
        output.push_str("───────────────────────────────────────────────────────────────────\n");
        if comp.fixed.is_empty() {
            output.push_str("  No fixed issues detected.\n");
        }
        for name in &comp.fixed {
            output.push_str(&format!("  - {}\n", name));
        }
        output.push('\n');

        output.push_str("NEW VULNERABILITIES\n");
        output.push_str("───────────────────────────────────────────────────────────────────\n");
        if comp.introduced.is_empty() {
            output.push_str("  No new vulnerabilities introduced.\n");
        }
        for name in &comp.introduced {
            output.push_str(&format!("  + {}\n", name));
        }
        output.push('\n');

        if !comp.persisting.is_empty() {
            output.push_str("PERSISTING\n");
            output.push_str("───────────────────────────────────────────────────────────────────\n");
            for name in &comp.persisting {
                output.push_str(&format!("  = {}\n", name));
            }
            output.push('\n');
        }

        output
    }
}

/// Compare two scans with the default engine
pub fn compare(scan_a: &ScanRecord, scan_b: &ScanRecord) -> crate::Result<ComparisonResult> {
    ScanDiffEngine::new().compare(scan_a, scan_b)
}
