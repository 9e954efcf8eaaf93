// scanlens - Risk forecasting and scan comparison for security dashboards
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, version 3.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

use anyhow::Result;
use clap::Parser;
use scanlens::Args;
use scanlens::commands::{Command, CommandRouter};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

fn log_level(verbose: u8) -> Level {
    // RUST_LOG wins over -v
    if let Some(level) = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse::<Level>().ok())
    {
        return level;
    }

    match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging - respect RUST_LOG environment variable
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level(args.output.verbose))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if args.output.no_color {
        colored::control::set_override(false);
    }

    args.validate()?;
    CommandRouter::validate_routing(&args)?;

    let command = CommandRouter::route(args)?;
    debug!("Executing {}", command.name());
    command.execute().await?;

    Ok(())
}
