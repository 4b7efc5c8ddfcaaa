// ABOUTME: Server binary for the TrailFuel hiking provisions planner
// ABOUTME: Loads configuration, initializes logging, and serves the wizard and API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # TrailFuel Server Binary
//!
//! Starts the HTTP server with configuration from the environment, optionally
//! overridden on the command line.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};
use trailfuel_server::{config::ServerConfig, logging, resources::ServerResources, server};

#[derive(Parser)]
#[command(name = "trailfuel-server")]
#[command(about = "TrailFuel - calorie and water planner for multi-day hikes")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind host
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    config.validate()?;

    logging::init_from_env()?;

    info!("Starting TrailFuel server");
    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::new(config));

    if let Err(e) = server::run(resources).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}
