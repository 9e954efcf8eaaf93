// scanlens - Risk forecasting and scan comparison for security dashboards
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

//! scanlens turns the scan history of a web security scanner into dashboard
//! analytics: a least-squares projection of future risk scores and a
//! set-based diff between two scans of the same target.
//!
//! The analytics core ([`analytics`]) is pure and synchronous. The
//! [`client`], [`config`] and [`commands`] modules wire it to the scanner's
//! HTTP service and to the command line.

pub mod analytics;
pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use crate::analytics::{ScanDiffEngine, TrendForecaster};
pub use crate::cli::Args;
pub use crate::error::AnalyticsError;

/// Result type for scanlens operations
pub type Result<T> = std::result::Result<T, AnalyticsError>;
