// Commands module - Command Pattern implementation
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

mod command;
mod router;
mod support;

// Individual command implementations
mod compare;
mod config_example;
mod forecast;
mod summary;

pub use command::Command;
pub use router::CommandRouter;

// Re-export individual commands for testing purposes
pub use compare::CompareCommand;
pub use config_example::ConfigExampleCommand;
pub use forecast::ForecastCommand;
pub use summary::{SummaryCommand, SummaryReport};
