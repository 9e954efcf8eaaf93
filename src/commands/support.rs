// Shared command plumbing - configuration, data sources and result emission
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use crate::client::{load_analytics_file, AnalyticsClient};
use crate::config::Config;
use crate::models::AnalyticsSnapshot;
use crate::{Args, Result};
use colored::Colorize;
use serde::Serialize;
use tracing::info;

/// Resolve configuration: file (or defaults), then SCANLENS_API_URL, then --api-url
pub fn resolve_config(args: &Args) -> Result<Config> {
    let mut config = Config::load(args.config.as_deref())?;

    if let Some(url) = &args.api_url {
        config.override_base_url(Some(url.clone()));
    }

    config.validate()?;
    Ok(config)
}

/// GET /analytics from --analytics-file when given, otherwise from the service
pub async fn load_snapshot(args: &Args, config: &Config) -> Result<AnalyticsSnapshot> {
    if let Some(path) = &args.analytics.analytics_file {
        info!("Reading analytics snapshot from {}", path.display());
        return load_analytics_file(path);
    }

    let client = AnalyticsClient::new(&config.service)?;
    info!("Fetching analytics from {}", client.base_url());
    client.fetch_analytics().await
}

/// Serialize `value` according to the output flags
pub fn to_json<T: Serialize>(args: &Args, value: &T) -> Result<String> {
    let json = if args.output.json_pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Write JSON to the --json file, or print it to stdout
pub fn emit_json<T: Serialize>(args: &Args, value: &T, what: &str) -> Result<()> {
    let json = to_json(args, value)?;

    if let Some(json_path) = &args.output.json {
        std::fs::write(json_path, &json).map_err(|e| crate::AnalyticsError::FileSystem {
            path: json_path.display().to_string(),
            source: e,
        })?;
        println!("{} {} saved to: {}", "✓".green(), what, json_path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

/// Print the fallback state for a core error the caller can render
pub fn print_unavailable(state: &str, detail: &str) {
    println!("{}", state.yellow().bold());
    println!("  {}", detail.dimmed());
}
