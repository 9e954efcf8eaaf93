// CompareCommand - Diff two scans of the same target
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use super::support::{emit_json, print_unavailable, resolve_config};
use super::Command;
use crate::analytics::ScanDiffEngine;
use crate::client::{load_scan_file, AnalyticsClient};
use crate::models::ScanRecord;
use crate::{AnalyticsError, Args, Result};
use async_trait::async_trait;
use tracing::{info, warn};

/// CompareCommand handles --compare and --compare-files
pub struct CompareCommand {
    args: Args,
}

impl CompareCommand {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    async fn load_pair(&self) -> Result<(ScanRecord, ScanRecord)> {
        if let Some(files) = &self.args.analytics.compare_files {
            let (first, second) = split_pair(files, "--compare-files requires format FILE_1:FILE_2")?;
            info!("Comparing scan files {} and {}", first, second);
            return Ok((load_scan_file(first)?, load_scan_file(second)?));
        }

        let ids = self.args.analytics.compare.as_deref().unwrap_or_default();
        let (first, second) = parse_scan_ids(ids)?;

        let config = resolve_config(&self.args)?;
        let client = AnalyticsClient::new(&config.service)?;
        info!("Comparing scans {} and {} from {}", first, second, client.base_url());
        client.fetch_scan_pair(first, second).await
    }
}

/// Split "LEFT:RIGHT" into its two non-empty halves
fn split_pair<'a>(value: &'a str, usage: &str) -> Result<(&'a str, &'a str)> {
    match value.split_once(':') {
        Some((left, right)) if !left.trim().is_empty() && !right.trim().is_empty() => {
            Ok((left.trim(), right.trim()))
        }
        _ => Err(AnalyticsError::InvalidArgument {
            message: usage.to_string(),
        }),
    }
}

/// Parse "SCAN_ID_1:SCAN_ID_2"
pub(crate) fn parse_scan_ids(value: &str) -> Result<(i64, i64)> {
    let (left, right) = split_pair(value, "--compare requires format SCAN_ID_1:SCAN_ID_2")?;
    let parse = |raw: &str| {
        raw.parse::<i64>().map_err(|_| AnalyticsError::InvalidArgument {
            message: format!("Invalid scan ID: {}", raw),
        })
    };
    Ok((parse(left)?, parse(right)?))
}

#[async_trait]
impl Command for CompareCommand {
    async fn execute(&self) -> Result<()> {
        let (scan_a, scan_b) = match self.load_pair().await {
            Ok(pair) => pair,
            Err(e @ AnalyticsError::ScanNotFound { .. }) => {
                print_unavailable(e.user_facing_state(), &e.to_string());
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let engine = ScanDiffEngine::new();
        let comparison = match engine.compare(&scan_a, &scan_b) {
            Ok(comparison) => comparison,
            Err(e @ AnalyticsError::InvalidScanRecord { .. }) => {
                warn!("Comparison skipped: {}", e);
                print_unavailable(e.user_facing_state(), &e.to_string());
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        if self.args.output.wants_json() {
            return emit_json(&self.args, &comparison, "Comparison");
        }

        println!("{}", engine.format_comparison(&comparison, "terminal")?);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "CompareCommand"
    }
}
