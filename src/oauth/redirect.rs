// ABOUTME: Pure URL composition for the authorization redirect and the client hand-off
// ABOUTME: No network or state access; both composers are plain functions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 blkcipher.xyz

//! Redirect URL composition
//!
//! Two pure constructions: the WHOOP authorization URL the start endpoint
//! redirects to, and the success hand-off URL whose fragment carries the
//! token set to the client application. Fragments are never sent to servers,
//! which keeps tokens out of request logs.

use crate::errors::{AppError, AppResult};
use url::Url;

/// Compose the provider authorization URL from a base endpoint and query
/// parameters, percent-encoding each pair.
///
/// # Errors
///
/// Returns a configuration error if the base endpoint is not a valid URL
pub fn authorization_url(base: &str, params: &[(&str, &str)]) -> AppResult<String> {
    let mut url = Url::parse(base)
        .map_err(|e| AppError::config(format!("invalid authorization endpoint: {e}")))?;
    {
        let mut query = url.query_pairs_mut();
        for (key, value) in params {
            query.append_pair(key, value);
        }
    }
    Ok(url.to_string())
}

/// Compose the client hand-off URL: strip any fragment already on the
/// target, then append the given pairs as a percent-encoded fragment.
/// Pair order is preserved.
#[must_use]
pub fn fragment_url(target: &str, pairs: &[(&str, &str)]) -> String {
    let base = target.split('#').next().unwrap_or(target);
    let fragment = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{base}#{fragment}")
}
