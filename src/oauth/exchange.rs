// ABOUTME: WHOOP token endpoint client performing the authorization-code exchange
// ABOUTME: One bounded POST per callback; outcomes are classified, never retried
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 blkcipher.xyz

//! Token exchange client
//!
//! Performs the single server-to-provider POST that turns a one-time
//! authorization code into a token set. The client secret travels only in
//! this request body and nowhere else.

use super::{ExchangeError, TokenExchanger, TokenResponse};
use crate::config::WhoopOAuthConfig;
use crate::constants::oauth;
use crate::utils::http_client;
use async_trait::async_trait;
use tracing::debug;

/// HTTP client for WHOOP's token endpoint
pub struct WhoopTokenClient {
    client: reqwest::Client,
    token_url: String,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
}

impl WhoopTokenClient {
    /// Build a token client from the loaded WHOOP configuration.
    /// The callback handler verifies credentials are present before any
    /// exchange is attempted.
    #[must_use]
    pub fn from_config(config: &WhoopOAuthConfig) -> Self {
        Self {
            client: http_client::oauth_client(),
            token_url: oauth::WHOOP_TOKEN_URL.to_owned(),
            client_id: config.client_id.clone().unwrap_or_default(),
            client_secret: config.client_secret.clone().unwrap_or_default(),
            redirect_uri: config.redirect_uri.clone(),
        }
    }
}

#[async_trait]
impl TokenExchanger for WhoopTokenClient {
    async fn exchange_code(&self, code: &str) -> Result<TokenResponse, ExchangeError> {
        // redirect_uri must equal the one sent at authorization, WHOOP
        // rejects the exchange otherwise
        let params = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("redirect_uri", self.redirect_uri.as_str()),
        ];

        debug!("exchanging authorization code at WHOOP token endpoint");

        let response = self
            .client
            .post(&self.token_url)
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ExchangeError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(ExchangeError::MalformedResponse)
    }
}
