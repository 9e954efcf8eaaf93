// SummaryCommand - Score statistics and severity distribution
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use super::support::{emit_json, load_snapshot, resolve_config};
use super::Command;
use crate::analytics::{
    distribution_from_counts, score_summary, trend_points, DistributionPoint, RiskBand,
    ScoreSummary,
};
use crate::models::AnalyticsSnapshot;
use crate::{Args, Result};
use async_trait::async_trait;
use colored::Colorize;
use serde::Serialize;

/// Dashboard summary payload
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    pub scores: ScoreSummary,
    pub severity_distribution: Vec<DistributionPoint>,
}

impl SummaryReport {
    pub fn from_snapshot(snapshot: &AnalyticsSnapshot) -> Self {
        Self {
            scores: score_summary(&trend_points(snapshot)),
            severity_distribution: distribution_from_counts(&snapshot.vulnerability_distribution),
        }
    }

    /// Render as a terminal report
    pub fn render(&self) -> String {
        let mut report = String::new();

        report.push_str("╔════════════════════════════════════════════════════════════════════╗\n");
        report.push_str("║                        SECURITY SUMMARY                            ║\n");
        report.push_str("╚════════════════════════════════════════════════════════════════════╝\n\n");

        report.push_str("SCORES\n");
        report.push_str("───────────────────────────────────────────────────────────────────\n");
        report.push_str(&format!("Total scans:   {}\n", self.scores.total_scans));

        if self.scores.total_scans == 0 {
            report.push_str("No scan history available.\n\n");
        } else {
            report.push_str(&format!("Average:       {}\n", self.scores.average_score));
            if let (Some(min), Some(max)) = (self.scores.min_score, self.scores.max_score) {
                report.push_str(&format!("Range:         {} - {}\n", min, max));
            }
            if let (Some(latest), Some(band)) = (self.scores.latest_score, self.scores.latest_band) {
                report.push_str(&format!("Latest:        {} ({})\n", latest, band_label(band)));
            }
            report.push('\n');
        }

        report.push_str("SEVERITY DISTRIBUTION\n");
        report.push_str("───────────────────────────────────────────────────────────────────\n");
        for point in &self.severity_distribution {
            report.push_str(&format!(
                "  {:<8} {:>5}  {:>5.1}%\n",
                point.label, point.value, point.percentage
            ));
        }
        report.push('\n');

        report
    }
}

fn band_label(band: RiskBand) -> String {
    match band {
        RiskBand::Secure => "secure".green().to_string(),
        RiskBand::Moderate => "moderate".yellow().to_string(),
        RiskBand::Critical => "critical".red().to_string(),
    }
}

/// SummaryCommand handles --summary
pub struct SummaryCommand {
    args: Args,
}

impl SummaryCommand {
    pub fn new(args: Args) -> Self {
        Self { args }
    }
}

#[async_trait]
impl Command for SummaryCommand {
    async fn execute(&self) -> Result<()> {
        let config = resolve_config(&self.args)?;
        let snapshot = load_snapshot(&self.args, &config).await?;
        let summary = SummaryReport::from_snapshot(&snapshot);

        if self.args.output.wants_json() {
            return emit_json(&self.args, &summary, "Summary");
        }

        println!("{}", summary.render());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "SummaryCommand"
    }
}
