// ABOUTME: Server binary for the WHOOP Connect service
// ABOUTME: Loads configuration, initializes logging, and serves the HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 blkcipher.xyz

//! # WHOOP Connect Server Binary
//!
//! Starts the OAuth2 connect service: configuration comes from the
//! environment, logging from `RUST_LOG`/`LOG_FORMAT`, and the router serves
//! the authorization flow plus a health endpoint.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};
use whoop_connect::{config::ServerConfig, context::ServerResources, logging, routes};

#[derive(Parser)]
#[command(name = "whoop-connect-server")]
#[command(about = "WHOOP Connect - OAuth2 authorization flow for linking WHOOP accounts")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting WHOOP Connect");
    info!("{}", config.summary());
    if !config.whoop.validate_and_log() {
        warn!("serving anyway; the start endpoint will answer 500 until credentials are set");
    }

    let http_port = config.http_port;
    let resources = Arc::new(ServerResources::new(config));
    let app = routes::router(resources);

    let addr = format!("0.0.0.0:{http_port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on http://{addr}");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {e}");
    }
}
