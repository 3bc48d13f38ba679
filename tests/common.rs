// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Provides test configuration and a call-counting stub token exchanger
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 blkcipher.xyz

#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::must_use_candidate
)]

//! Shared test utilities for `whoop_connect`
//!
//! Builds routers wired to a stub token exchanger so tests can assert both
//! the HTTP surface and how often the exchange seam was crossed.

use async_trait::async_trait;
use axum::Router;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};
use whoop_connect::{
    config::{ServerConfig, WhoopOAuthConfig},
    context::ServerResources,
    oauth::{ExchangeError, TokenExchanger, TokenResponse},
    routes,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .init();
    });
}

/// Outcome a stub exchanger returns on every call
pub enum StubOutcome {
    /// Successful exchange with the given token set
    Success(TokenResponse),
    /// Provider rejected the exchange with this status and body
    ProviderError {
        /// HTTP status the provider answered with
        status: u16,
        /// Provider error body
        body: String,
    },
}

/// Token exchanger stub that counts invocations
pub struct StubExchanger {
    outcome: StubOutcome,
    calls: Arc<AtomicUsize>,
}

impl StubExchanger {
    /// Stub returning the standard successful token set
    pub fn success() -> (Self, Arc<AtomicUsize>) {
        Self::with_outcome(StubOutcome::Success(token_response()))
    }

    /// Stub returning the given outcome on every call
    pub fn with_outcome(outcome: StubOutcome) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                outcome,
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

#[async_trait]
impl TokenExchanger for StubExchanger {
    async fn exchange_code(&self, _code: &str) -> Result<TokenResponse, ExchangeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            StubOutcome::Success(tokens) => Ok(tokens.clone()),
            StubOutcome::ProviderError { status, body } => Err(ExchangeError::Provider {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}

/// The token set used across success-path tests
pub fn token_response() -> TokenResponse {
    TokenResponse {
        access_token: "abc".to_owned(),
        refresh_token: None,
        expires_in: 3600,
        token_type: "bearer".to_owned(),
        scope: Some("read:profile".to_owned()),
    }
}

/// Fully configured server config, optionally with a success redirect
pub fn test_config(success_redirect: Option<&str>) -> ServerConfig {
    ServerConfig {
        http_port: 8080,
        base_url: "https://connect.example.com".to_owned(),
        whoop: WhoopOAuthConfig {
            client_id: Some("test-client-id".to_owned()),
            client_secret: Some("test-client-secret".to_owned()),
            redirect_uri: "https://connect.example.com/auth/whoop/callback".to_owned(),
            scopes: "read:recovery read:profile offline".to_owned(),
            success_redirect: success_redirect.map(str::to_owned),
        },
    }
}

/// Config with no client credentials (misconfigured deployment)
pub fn config_without_credentials() -> ServerConfig {
    let mut config = test_config(None);
    config.whoop.client_id = None;
    config.whoop.client_secret = None;
    config
}

/// Build the application router around a stub exchanger
pub fn app(config: ServerConfig, stub: StubExchanger) -> Router {
    init_test_logging();
    routes::router(Arc::new(ServerResources::with_exchanger(
        config,
        Arc::new(stub),
    )))
}
