// ABOUTME: CSRF state token generation and the browser cookie that carries it
// ABOUTME: The cookie is the sole state store; no server-side session exists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 blkcipher.xyz

//! State token and state cookie
//!
//! The start endpoint mints a random state token and round-trips it two
//! ways: as the `state` query parameter through WHOOP, and as a short-lived
//! cookie through the browser. The callback accepts a request only when the
//! two arrive equal.

use crate::constants::oauth;
use rand::RngCore;

/// Generate a fresh state token from a cryptographically secure source.
/// Hex-encoded, 32 characters; WHOOP requires at least 8.
#[must_use]
pub fn generate_state_token() -> String {
    let mut bytes = [0_u8; oauth::STATE_TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Build the `Set-Cookie` value carrying the state token.
/// HttpOnly keeps scripts away from it; SameSite=Lax still sends it on the
/// top-level redirect back from WHOOP.
#[must_use]
pub fn state_cookie(state: &str) -> String {
    let name = oauth::STATE_COOKIE;
    let max_age = oauth::STATE_COOKIE_MAX_AGE_SECS;
    format!("{name}={state}; Path=/; HttpOnly; Secure; SameSite=Lax; Max-Age={max_age}")
}

/// Build the `Set-Cookie` value that clears the state cookie after a
/// terminal success, so the token cannot be replayed.
#[must_use]
pub fn clear_state_cookie() -> String {
    let name = oauth::STATE_COOKIE;
    format!("{name}=; Path=/; HttpOnly; Secure; SameSite=Lax; Max-Age=0")
}

/// Extract the state token from a `Cookie` request header.
/// An empty value counts as absent.
#[must_use]
pub fn state_from_cookie_header(cookie_header: &str) -> Option<String> {
    for cookie in cookie_header.split(';') {
        let cookie = cookie.trim();
        if let Some(value) = cookie
            .strip_prefix(oauth::STATE_COOKIE)
            .and_then(|rest| rest.strip_prefix('='))
        {
            if value.is_empty() {
                return None;
            }
            return Some(value.to_owned());
        }
    }
    None
}
