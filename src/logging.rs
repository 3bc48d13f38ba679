// ABOUTME: Logging configuration and structured logging setup for observability
// ABOUTME: Configures log levels and output formats via environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 blkcipher.xyz

//! Production logging configuration with structured output

use anyhow::Result;
use std::env;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level directives (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
}

/// Log output format options
#[derive(Debug, Clone)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());

        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };

        Self { level, format }
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if the filter directives are invalid or a global
    /// subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let filter = EnvFilter::try_new(Self::directives(&self.level))?;
        let registry = tracing_subscriber::registry().with(filter);

        match self.format {
            LogFormat::Json => registry.with(fmt::layer().json()).try_init()?,
            LogFormat::Pretty => registry.with(fmt::layer()).try_init()?,
            LogFormat::Compact => {
                registry.with(fmt::layer().compact().with_target(false)).try_init()?;
            }
        }

        Ok(())
    }

    /// Append noise-reduction rules for chatty dependencies unless the
    /// operator already wrote per-target directives
    fn directives(level: &str) -> String {
        if level.contains('=') || level.contains(',') {
            level.to_owned()
        } else {
            format!("{level},hyper=warn,reqwest=warn,rustls=warn")
        }
    }
}

/// Initialize logging from environment variables
///
/// # Errors
///
/// Returns an error if subscriber initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}
