// ABOUTME: Server configuration loaded once from the environment at startup
// ABOUTME: Handlers receive configuration through shared state, never via ambient env reads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 blkcipher.xyz

//! Configuration management
//!
//! All configuration is read from the process environment exactly once, in
//! [`ServerConfig::from_env`], and handed to handlers through shared state.
//! Route handlers are pure functions of (request, config, cookie) and never
//! touch the environment themselves.

pub mod oauth;

pub use oauth::WhoopOAuthConfig;

use crate::constants::net;
use anyhow::Result;
use std::env;

/// Top-level server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Public base URL of this deployment, used to derive the redirect URI
    pub base_url: String,
    /// WHOOP OAuth configuration
    pub whoop: WhoopOAuthConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `BASE_URL` is set but not a valid URL
    pub fn from_env() -> Result<Self> {
        let http_port = env::var("HTTP_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(net::DEFAULT_HTTP_PORT);

        let base_url = env::var("BASE_URL").unwrap_or_else(|_| net::DEFAULT_BASE_URL.to_owned());
        url::Url::parse(&base_url)
            .map_err(|e| anyhow::anyhow!("BASE_URL is not a valid URL: {e}"))?;

        Ok(Self {
            http_port,
            base_url: base_url.clone(),
            whoop: WhoopOAuthConfig::from_env(&base_url),
        })
    }

    /// One-line configuration summary for startup logging. Never includes
    /// secret values, only their fingerprints.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "port={} base_url={} whoop_client_id={} whoop_secret_fingerprint={} success_redirect={}",
            self.http_port,
            self.base_url,
            self.whoop.client_id.as_deref().unwrap_or("<unset>"),
            self.whoop
                .secret_fingerprint()
                .unwrap_or_else(|| "<unset>".to_owned()),
            self.whoop.success_redirect.as_deref().unwrap_or("<none>"),
        )
    }
}
