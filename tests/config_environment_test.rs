// ABOUTME: Tests for environment-based configuration loading
// ABOUTME: Exercises defaults, overrides, and derivation of the redirect URI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 blkcipher.xyz

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

//! Configuration loading tests. Env-var manipulation is process-global, so
//! every test here runs serially.

use serial_test::serial;
use std::env;
use whoop_connect::config::ServerConfig;

const VARS: &[&str] = &[
    "HTTP_PORT",
    "BASE_URL",
    "WHOOP_CLIENT_ID",
    "WHOOP_CLIENT_SECRET",
    "WHOOP_REDIRECT_URI",
    "WHOOP_SCOPE",
    "WHOOP_SUCCESS_REDIRECT",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.http_port, 8080);
    assert_eq!(config.base_url, "http://localhost:8080");
    assert_eq!(
        config.whoop.redirect_uri,
        "http://localhost:8080/auth/whoop/callback"
    );
    assert_eq!(config.whoop.scopes, "read:recovery read:profile offline");
    assert_eq!(config.whoop.client_id, None);
    assert_eq!(config.whoop.client_secret, None);
    assert_eq!(config.whoop.success_redirect, None);
}

#[test]
#[serial]
fn test_redirect_uri_derives_from_base_url() {
    clear_env();
    env::set_var("BASE_URL", "https://connect.example.com");
    let config = ServerConfig::from_env().unwrap();

    assert_eq!(
        config.whoop.redirect_uri,
        "https://connect.example.com/auth/whoop/callback"
    );
    clear_env();
}

#[test]
#[serial]
fn test_explicit_overrides_win() {
    clear_env();
    env::set_var("HTTP_PORT", "9999");
    env::set_var("BASE_URL", "https://connect.example.com");
    env::set_var("WHOOP_CLIENT_ID", "id-1");
    env::set_var("WHOOP_CLIENT_SECRET", "secret-1");
    env::set_var("WHOOP_REDIRECT_URI", "https://other.example.com/cb");
    env::set_var("WHOOP_SCOPE", "read:profile");
    env::set_var("WHOOP_SUCCESS_REDIRECT", "https://app.example.com/done");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 9999);
    assert_eq!(config.whoop.client_id.as_deref(), Some("id-1"));
    assert_eq!(config.whoop.client_secret.as_deref(), Some("secret-1"));
    assert_eq!(
        config.whoop.redirect_uri,
        "https://other.example.com/cb"
    );
    assert_eq!(config.whoop.scopes, "read:profile");
    assert_eq!(
        config.whoop.success_redirect.as_deref(),
        Some("https://app.example.com/done")
    );
    clear_env();
}

#[test]
#[serial]
fn test_empty_credentials_count_as_unset() {
    clear_env();
    env::set_var("WHOOP_CLIENT_ID", "");
    env::set_var("WHOOP_CLIENT_SECRET", "");
    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.whoop.client_id, None);
    assert_eq!(config.whoop.client_secret, None);
    assert!(config.whoop.credentials().is_none());
    clear_env();
}

#[test]
#[serial]
fn test_invalid_base_url_is_rejected() {
    clear_env();
    env::set_var("BASE_URL", "not a url");
    assert!(ServerConfig::from_env().is_err());
    clear_env();
}

#[test]
#[serial]
fn test_unparseable_port_falls_back_to_default() {
    clear_env();
    env::set_var("HTTP_PORT", "not-a-port");
    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 8080);
    clear_env();
}
