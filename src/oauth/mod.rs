// ABOUTME: OAuth module organizing the WHOOP authorization-code flow building blocks
// ABOUTME: Centralizes token types, the exchange seam, state handling, and URL composition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 blkcipher.xyz

//! # OAuth Flow Module
//!
//! Building blocks for the authorization-code grant: the CSRF state token
//! and its carrier cookie ([`state`]), the server-to-WHOOP code exchange
//! ([`exchange`]), and pure URL composition for both redirects
//! ([`redirect`]).

pub mod exchange;
pub mod redirect;
pub mod state;

use async_trait::async_trait;
use serde::Deserialize;

/// Token set returned by WHOOP's token endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// Bearer credential for calling the WHOOP API
    pub access_token: String,
    /// Present only when the `offline` scope was granted
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Access token lifetime in seconds
    pub expires_in: u64,
    /// Token type, `bearer` for WHOOP
    pub token_type: String,
    /// Space-separated scopes actually granted
    #[serde(default)]
    pub scope: Option<String>,
}

/// Classified outcomes of a single token exchange attempt.
/// There is exactly one attempt per callback; nothing here is retried.
#[derive(Debug, thiserror::Error)]
pub enum ExchangeError {
    /// Transport failure or timeout reaching the token endpoint
    #[error("token endpoint unreachable: {0}")]
    Network(#[from] reqwest::Error),

    /// Token endpoint answered with a non-success status; `body` carries
    /// the provider's error payload for diagnosis
    #[error("token endpoint returned HTTP {status}")]
    Provider {
        /// HTTP status returned by the provider
        status: u16,
        /// Raw response body (WHOOP sends a JSON error object)
        body: String,
    },

    /// Token endpoint answered 2xx with a body that does not decode as a
    /// token response
    #[error("token endpoint returned an undecodable body: {0}")]
    MalformedResponse(#[source] serde_json::Error),
}

/// Seam between the callback handler and the WHOOP token endpoint.
/// Tests exercise the handler against a stub implementation.
#[async_trait]
pub trait TokenExchanger: Send + Sync {
    /// Exchange a one-time authorization code for a token set
    async fn exchange_code(&self, code: &str) -> Result<TokenResponse, ExchangeError>;
}
