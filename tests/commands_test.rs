// Copyright (c) 2025 Marc Rivero López
// Licensed under GPLv3. See LICENSE file for details.
// This test suite validates real code behavior without mocks or stubs.

//! Commands Module Integration Tests
//!
//! Tests the Command Pattern implementation for scanlens' operational modes.
//! This test suite validates:
//! - Command creation and naming
//! - Command router logic and priority-based routing
//! - End-to-end execution against JSON files saved from the service

use scanlens::commands::{
    Command, CommandRouter, CompareCommand, ConfigExampleCommand, ForecastCommand,
    SummaryCommand,
};
use scanlens::config::Config;
use scanlens::{AnalyticsError, Args};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ANALYTICS_JSON: &str = r#"{
    "trends": [
        {"date": "2024-01-01T08:00:00", "risk_score": 40},
        {"date": "2024-01-02T08:00:00", "risk_score": 50},
        {"date": "2024-01-03T08:00:00", "risk_score": 60}
    ],
    "vulnerability_distribution": {"High": 2, "Medium": 1, "Low": 1}
}"#;

const OLDER_SCAN_JSON: &str = r#"{
    "id": 1,
    "url": "https://example.com",
    "scan_date": "2024-01-01T08:00:00",
    "risk_score": 90,
    "scan_details": [
        {"vulnerability": "SQLi", "severity": "High"},
        {"vulnerability": "XSS", "severity": "Medium"}
    ]
}"#;

const NEWER_SCAN_JSON: &str = r#"{
    "id": 2,
    "url": "https://example.com",
    "scan_date": "2024-01-02T08:00:00",
    "risk_score": 70,
    "scan_details": [
        {"vulnerability": "XSS", "severity": "Medium"},
        {"vulnerability": "CSRF", "severity": "Medium"}
    ]
}"#;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

// ============================================================================
// Command Creation and Naming Tests
// ============================================================================

#[test]
fn test_command_names() {
    assert_eq!(ForecastCommand::new(Args::default()).name(), "ForecastCommand");
    assert_eq!(CompareCommand::new(Args::default()).name(), "CompareCommand");
    assert_eq!(SummaryCommand::new(Args::default()).name(), "SummaryCommand");
    assert_eq!(
        ConfigExampleCommand::new(Args::default()).name(),
        "ConfigExampleCommand"
    );
}

// ============================================================================
// Router Tests
// ============================================================================

#[test]
fn test_router_priority_compare_over_forecast() {
    let mut args = Args::default();
    args.analytics.forecast = true;
    args.analytics.compare_files = Some("a.json:b.json".to_string());

    let cmd = CommandRouter::route(args.clone()).unwrap();
    assert_eq!(cmd.name(), "CompareCommand");
    assert!(CommandRouter::validate_routing(&args).is_err());
}

#[test]
fn test_router_requires_operation() {
    let err = CommandRouter::route(Args::default()).err().unwrap();
    assert!(matches!(err, AnalyticsError::InvalidArgument { .. }));
}

// ============================================================================
// Execution Tests
// ============================================================================

#[tokio::test]
async fn test_forecast_to_json_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("forecast.json");

    let mut args = Args::default();
    args.analytics.forecast = true;
    args.analytics.horizon = Some(1);
    args.analytics.analytics_file = Some(write_file(&dir, "analytics.json", ANALYTICS_JSON));
    args.output.json = Some(output.clone());

    ForecastCommand::new(args).execute().await.unwrap();

    let value = read_json(&output);
    assert_eq!(value["trend_direction"], "improving");
    assert_eq!(value["slope"], 10.0);
    assert_eq!(value["forecast_points"][1]["predicted_score"], 70);
    assert_eq!(value["forecast_points"][1]["label"], "+1d");
}

#[tokio::test]
async fn test_forecast_uses_config_horizon() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("forecast.json");

    let mut args = Args::default();
    args.config = Some(write_file(&dir, "scanlens.toml", "[forecast]\nhorizon = 2\n"));
    args.analytics.forecast = true;
    args.analytics.analytics_file = Some(write_file(&dir, "analytics.json", ANALYTICS_JSON));
    args.output.json = Some(output.clone());

    ForecastCommand::new(args).execute().await.unwrap();

    let value = read_json(&output);
    assert_eq!(value["forecast_points"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_forecast_short_history_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("forecast.json");

    let mut args = Args::default();
    args.analytics.forecast = true;
    args.analytics.analytics_file = Some(write_file(
        &dir,
        "analytics.json",
        r#"{"trends": [{"date": "2024-01-01", "risk_score": 80}]}"#,
    ));
    args.output.json = Some(output.clone());

    ForecastCommand::new(args).execute().await.unwrap();
    assert!(!output.exists());
}

#[tokio::test]
async fn test_forecast_rejects_bad_horizon() {
    let dir = TempDir::new().unwrap();

    for horizon in [0, 1_000_000, i64::MAX / 2] {
        let mut args = Args::default();
        args.analytics.forecast = true;
        args.analytics.horizon = Some(horizon);
        args.analytics.analytics_file = Some(write_file(&dir, "analytics.json", ANALYTICS_JSON));

        let err = ForecastCommand::new(args).execute().await.unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidArgument { .. }), "{horizon}");
    }
}

#[tokio::test]
async fn test_compare_files_rejects_out_of_range_score() {
    let dir = TempDir::new().unwrap();
    let older = write_file(&dir, "older.json", OLDER_SCAN_JSON);
    let inflated = write_file(
        &dir,
        "inflated.json",
        r#"{"id": 4, "scan_date": "2024-01-03T08:00:00", "risk_score": 150}"#,
    );

    let mut args = Args::default();
    args.analytics.compare_files = Some(format!("{}:{}", older.display(), inflated.display()));

    let err = CompareCommand::new(args).execute().await.unwrap_err();
    assert!(matches!(err, AnalyticsError::Serialization(_)));
}

#[tokio::test]
async fn test_compare_files_to_json() {
    let dir = TempDir::new().unwrap();
    let newer = write_file(&dir, "newer.json", NEWER_SCAN_JSON);
    let older = write_file(&dir, "older.json", OLDER_SCAN_JSON);
    let output = dir.path().join("comparison.json");

    let mut args = Args::default();
    args.analytics.compare_files = Some(format!("{}:{}", newer.display(), older.display()));
    args.output.json = Some(output.clone());

    CompareCommand::new(args).execute().await.unwrap();

    let value = read_json(&output);
    assert_eq!(value["score_delta"], -20);
    assert_eq!(value["fixed"], serde_json::json!(["SQLi"]));
    assert_eq!(value["introduced"], serde_json::json!(["CSRF"]));
    assert_eq!(value["persisting"], serde_json::json!(["XSS"]));
    assert_eq!(value["older"]["id"], 1);
}

#[tokio::test]
async fn test_compare_files_missing_date_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let older = write_file(&dir, "older.json", OLDER_SCAN_JSON);
    let undated = write_file(&dir, "undated.json", r#"{"id": 3, "risk_score": 50}"#);
    let output = dir.path().join("comparison.json");

    let mut args = Args::default();
    args.analytics.compare_files = Some(format!("{}:{}", older.display(), undated.display()));
    args.output.json = Some(output.clone());

    CompareCommand::new(args).execute().await.unwrap();
    assert!(!output.exists());
}

#[tokio::test]
async fn test_compare_bad_ids() {
    let mut args = Args::default();
    args.analytics.compare = Some("one:two".to_string());

    let err = CompareCommand::new(args).execute().await.unwrap_err();
    assert!(matches!(err, AnalyticsError::InvalidArgument { .. }));
}

#[tokio::test]
async fn test_summary_to_json() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("summary.json");

    let mut args = Args::default();
    args.analytics.summary = true;
    args.analytics.analytics_file = Some(write_file(&dir, "analytics.json", ANALYTICS_JSON));
    args.output.json = Some(output.clone());

    SummaryCommand::new(args).execute().await.unwrap();

    let value = read_json(&output);
    assert_eq!(value["scores"]["total_scans"], 3);
    assert_eq!(value["scores"]["average_score"], 50);
    assert_eq!(value["scores"]["latest_band"], "moderate");
    assert_eq!(value["severity_distribution"][0]["label"], "High");
    assert_eq!(value["severity_distribution"][0]["value"], 2);
}

#[tokio::test]
async fn test_config_example_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scanlens.toml");

    let mut args = Args::default();
    args.config_example = Some(path.clone());

    CommandRouter::route(args).unwrap().execute().await.unwrap();
    assert_eq!(Config::from_file(&path).unwrap(), Config::default());
}
