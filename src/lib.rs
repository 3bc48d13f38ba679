// ABOUTME: Main library entry point for the WHOOP Connect service
// ABOUTME: Implements the OAuth2 authorization-code flow for linking WHOOP accounts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 blkcipher.xyz

#![deny(unsafe_code)]

//! # WHOOP Connect
//!
//! A small web service implementing the OAuth2 authorization-code grant
//! against the WHOOP API. It exposes two endpoints: a start endpoint that
//! mints a CSRF state token and redirects the browser to WHOOP, and a
//! callback endpoint that validates the returned state, exchanges the
//! one-time authorization code for tokens, and hands the tokens back to
//! the client application.
//!
//! ## Flow
//!
//! 1. Browser hits `GET /auth/whoop/start`
//! 2. Service sets a short-lived state cookie and redirects to WHOOP
//! 3. User approves access on WHOOP
//! 4. WHOOP redirects to `GET /auth/whoop/callback?code=...&state=...`
//! 5. Service verifies `state` against the cookie, exchanges `code` for
//!    tokens, and renders a confirmation page or redirects to the
//!    configured success URL with the tokens in a URL fragment
//!
//! The browser cookie is the only state store; there is no server-side
//! session, so the service scales horizontally without coordination.
//!
//! ## Example
//!
//! ```rust,no_run
//! use whoop_connect::config::ServerConfig;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = ServerConfig::from_env()?;
//! println!("WHOOP Connect configured on port {}", config.http_port);
//! # Ok(())
//! # }
//! ```

/// Configuration management, loaded once from the environment at startup
pub mod config;

/// Application constants and WHOOP endpoint defaults
pub mod constants;

/// Shared server resources passed to route handlers
pub mod context;

/// Unified error handling with standard error codes and HTTP responses
pub mod errors;

/// Production logging and structured output
pub mod logging;

/// OAuth flow building blocks: state token, token exchange, URL composition
pub mod oauth;

/// `HTTP` routes for the authorization flow and health checks
pub mod routes;

/// Utility functions and helpers
pub mod utils;
