// ConfigExampleCommand - Write a commented example configuration
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use super::Command;
use crate::config::Config;
use crate::{AnalyticsError, Args, Result};
use async_trait::async_trait;

pub struct ConfigExampleCommand {
    args: Args,
}

impl ConfigExampleCommand {
    pub fn new(args: Args) -> Self {
        Self { args }
    }
}

#[async_trait]
impl Command for ConfigExampleCommand {
    async fn execute(&self) -> Result<()> {
        let path = self
            .args
            .config_example
            .as_ref()
            .ok_or_else(|| AnalyticsError::InvalidArgument {
                message: "--config-example requires a file path".to_string(),
            })?;

        Config::create_example_config(path)?;
        println!("✓ Example configuration written to: {}", path.display());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "ConfigExampleCommand"
    }
}
