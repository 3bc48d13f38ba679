// ABOUTME: Shared HTTP client utilities with connection pooling and timeout configuration
// ABOUTME: OAuth exchanges get a short-timeout client; nothing here retries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 blkcipher.xyz

use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Create an HTTP client with custom timeout settings.
/// Falls back to a default client if builder configuration fails.
#[must_use]
pub fn create_client_with_timeout(timeout_secs: u64, connect_timeout_secs: u64) -> Client {
    ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// HTTP client for OAuth token exchanges. Short timeouts: a token exchange
/// is a fast operation, and the user is waiting on the callback response.
#[must_use]
pub fn oauth_client() -> Client {
    create_client_with_timeout(15, 5)
}
