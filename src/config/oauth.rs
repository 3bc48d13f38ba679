// ABOUTME: WHOOP OAuth configuration types and environment loading
// ABOUTME: Carries client credentials, redirect URI, scopes, and the optional success redirect
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 blkcipher.xyz

use crate::constants::oauth;
use sha2::{Digest, Sha256};
use std::env;
use tracing::{info, warn};

/// WHOOP OAuth provider configuration
#[derive(Debug, Clone, Default)]
pub struct WhoopOAuthConfig {
    /// OAuth client ID
    pub client_id: Option<String>,
    /// OAuth client secret
    pub client_secret: Option<String>,
    /// OAuth redirect URI; must exactly match the URI registered with WHOOP
    pub redirect_uri: String,
    /// Space-separated OAuth scopes requested at authorization
    pub scopes: String,
    /// Optional URL the callback redirects to on success, with the token
    /// set appended as a URL fragment
    pub success_redirect: Option<String>,
}

impl WhoopOAuthConfig {
    /// Load WHOOP OAuth configuration from environment variables
    #[must_use]
    pub fn from_env(base_url: &str) -> Self {
        Self {
            client_id: env::var("WHOOP_CLIENT_ID").ok().filter(|v| !v.is_empty()),
            client_secret: env::var("WHOOP_CLIENT_SECRET")
                .ok()
                .filter(|v| !v.is_empty()),
            redirect_uri: env::var("WHOOP_REDIRECT_URI")
                .unwrap_or_else(|_| format!("{base_url}/auth/whoop/callback")),
            scopes: env::var("WHOOP_SCOPE")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| oauth::WHOOP_DEFAULT_SCOPES.to_owned()),
            success_redirect: env::var("WHOOP_SUCCESS_REDIRECT")
                .ok()
                .filter(|v| !v.is_empty()),
        }
    }

    /// Both client credentials, when fully configured
    #[must_use]
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.client_id.as_deref(), self.client_secret.as_deref()) {
            (Some(id), Some(secret)) => Some((id, secret)),
            _ => None,
        }
    }

    /// Compute a SHA256 fingerprint of the client secret (first 8 hex chars).
    /// Allows comparing deployed secrets in logs without exposing values.
    #[must_use]
    pub fn secret_fingerprint(&self) -> Option<String> {
        self.client_secret.as_ref().map(|secret| {
            let mut hasher = Sha256::new();
            hasher.update(secret.as_bytes());
            let digest = hasher.finalize();
            format!("{digest:x}").chars().take(8).collect()
        })
    }

    /// Validate credentials at startup and log diagnostics.
    /// Returns false when the flow cannot complete with this configuration.
    pub fn validate_and_log(&self) -> bool {
        match self.credentials() {
            Some((client_id, _)) => {
                let fingerprint = self
                    .secret_fingerprint()
                    .unwrap_or_else(|| "none".to_owned());
                info!(
                    "WHOOP OAuth configured: client_id={client_id}, \
                     secret_fingerprint={fingerprint}, redirect_uri={}, scopes={}",
                    self.redirect_uri, self.scopes
                );
                true
            }
            None => {
                warn!(
                    "WHOOP OAuth is not fully configured: set WHOOP_CLIENT_ID and \
                     WHOOP_CLIENT_SECRET to enable the authorization flow"
                );
                false
            }
        }
    }
}
