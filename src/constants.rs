// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Groups WHOOP OAuth endpoints, cookie parameters, and service defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 blkcipher.xyz

//! Application constants
//!
//! Constants are grouped into logical domains rather than being scattered
//! across call sites.

/// WHOOP OAuth endpoints and flow parameters
pub mod oauth {
    /// WHOOP authorization endpoint (browser is redirected here)
    pub const WHOOP_AUTH_URL: &str = "https://api.prod.whoop.com/oauth/oauth2/auth";

    /// WHOOP token endpoint (server-to-server code exchange)
    pub const WHOOP_TOKEN_URL: &str = "https://api.prod.whoop.com/oauth/oauth2/token";

    /// WHOOP default scopes (space-separated as per WHOOP API requirements)
    /// - `read:recovery`: Access to recovery scores
    /// - `read:profile`: Access to user profile information
    /// - `offline`: Required for refresh tokens
    pub const WHOOP_DEFAULT_SCOPES: &str = "read:recovery read:profile offline";

    /// Name of the cookie carrying the CSRF state token between the start
    /// and callback requests
    pub const STATE_COOKIE: &str = "whoop_oauth_state";

    /// State cookie lifetime in seconds; bounds how long an authorization
    /// attempt stays valid
    pub const STATE_COOKIE_MAX_AGE_SECS: u64 = 600;

    /// Number of random bytes in a state token. Hex encoding doubles this,
    /// comfortably above WHOOP's 8-character minimum for `state`.
    pub const STATE_TOKEN_BYTES: usize = 16;
}

/// Network defaults
pub mod net {
    /// Default HTTP listen port
    pub const DEFAULT_HTTP_PORT: u16 = 8080;

    /// Default public base URL used to derive the OAuth redirect URI
    pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
}

/// Service identifiers for logging and health reporting
pub mod service_names {
    /// Canonical service name
    pub const WHOOP_CONNECT: &str = "whoop-connect";
}
