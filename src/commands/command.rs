// Command trait - Defines the interface for all command implementations
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use crate::Result;
use async_trait::async_trait;

/// Command trait - Defines the interface for all command implementations
///
/// Each operational mode of scanlens (forecast, compare, summary, config
/// example) is an independent command object. A command validates its own
/// inputs, gathers data from the service or from files, runs the analytics
/// core and renders the result.
#[async_trait]
pub trait Command: Send + Sync {
    /// Execute the command asynchronously
    ///
    /// # Errors
    /// Core errors that have a user-facing fallback state are rendered and
    /// swallowed; everything else is returned as an AnalyticsError.
    async fn execute(&self) -> Result<()>;

    /// Get a human-readable name for this command (for logging/debugging)
    fn name(&self) -> &'static str;
}
