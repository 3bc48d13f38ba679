// ABOUTME: Shared server resources handed to route handlers through axum state
// ABOUTME: Bundles the startup configuration with the token exchange client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 blkcipher.xyz

//! Dependency context for route handlers
//!
//! Everything a handler needs arrives through this struct; handlers never
//! read the process environment or construct clients themselves. The token
//! exchanger sits behind a trait so tests can substitute a stub.

use crate::config::ServerConfig;
use crate::oauth::exchange::WhoopTokenClient;
use crate::oauth::TokenExchanger;
use std::sync::Arc;

/// Shared, immutable resources for the request handlers
pub struct ServerResources {
    /// Configuration loaded once at startup
    pub config: Arc<ServerConfig>,
    /// Client performing the authorization-code exchange
    pub exchanger: Arc<dyn TokenExchanger>,
}

impl ServerResources {
    /// Build resources with the real WHOOP token client
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let exchanger = Arc::new(WhoopTokenClient::from_config(&config.whoop));
        Self {
            config: Arc::new(config),
            exchanger,
        }
    }

    /// Build resources with a custom token exchanger
    #[must_use]
    pub fn with_exchanger(config: ServerConfig, exchanger: Arc<dyn TokenExchanger>) -> Self {
        Self {
            config: Arc::new(config),
            exchanger,
        }
    }
}
