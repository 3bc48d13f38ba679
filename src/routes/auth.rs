// ABOUTME: WHOOP authorization flow route handlers for the start and callback endpoints
// ABOUTME: Start mints the CSRF state and redirects; callback validates and exchanges the code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 blkcipher.xyz

//! WHOOP authorization flow routes
//!
//! Two endpoints drive the whole flow:
//!
//! - `GET /auth/whoop/start` mints a fresh state token, sets it as a
//!   short-lived cookie, and redirects the browser to WHOOP.
//! - `GET /auth/whoop/callback` receives WHOOP's redirect, validates the
//!   state against the cookie, exchanges the code for tokens, and either
//!   renders a confirmation page or redirects to the configured success URL
//!   with the token set in a URL fragment.
//!
//! Callback checks run strictly in order and fail fast; the token endpoint
//! is never called unless every check passes. Rejections leave the state
//! cookie in place so the user can retry within its lifetime; success
//! clears it so the state cannot be replayed.

use crate::constants::oauth as oauth_consts;
use crate::context::ServerResources;
use crate::errors::AppError;
use crate::oauth::redirect;
use crate::oauth::state as oauth_state;
use crate::oauth::{ExchangeError, TokenResponse};
use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Query parameters WHOOP may send to the callback. All of this is
/// attacker-controlled input; values are escaped before rendering.
#[derive(Debug, Default)]
pub struct CallbackParams {
    /// One-time authorization code, present on user approval
    pub code: Option<String>,
    /// Echo of the state parameter sent at authorization
    pub state: Option<String>,
    /// OAuth error code, present when authorization did not complete
    pub error: Option<String>,
    /// Optional human-readable detail accompanying `error`
    pub error_description: Option<String>,
}

impl CallbackParams {
    /// Pick the known parameters out of the raw query map
    #[must_use]
    pub fn from_query(query: &BTreeMap<String, String>) -> Self {
        Self {
            code: query.get("code").cloned(),
            state: query.get("state").cloned(),
            error: query.get("error").cloned(),
            error_description: query.get("error_description").cloned(),
        }
    }
}

/// WHOOP authorization flow routes
pub struct WhoopAuthRoutes;

impl WhoopAuthRoutes {
    /// Create the start and callback routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/auth/whoop/start", get(Self::handle_start))
            .route("/auth/whoop/callback", get(Self::handle_callback))
            .with_state(resources)
    }

    /// Begin an authorization attempt: mint a state token, set the state
    /// cookie, redirect to WHOOP. Each call is independent and mints a
    /// fresh state.
    async fn handle_start(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let whoop = &resources.config.whoop;
        let Some(client_id) = whoop.client_id.as_deref() else {
            return Err(AppError::config("WHOOP_CLIENT_ID is not set"));
        };

        let state = oauth_state::generate_state_token();
        let location = redirect::authorization_url(
            oauth_consts::WHOOP_AUTH_URL,
            &[
                ("response_type", "code"),
                ("client_id", client_id),
                ("redirect_uri", whoop.redirect_uri.as_str()),
                ("state", state.as_str()),
                ("scope", whoop.scopes.as_str()),
            ],
        )?;

        info!("starting WHOOP authorization, redirecting to consent page");

        Ok((
            StatusCode::FOUND,
            [
                (header::LOCATION, location),
                (header::SET_COOKIE, oauth_state::state_cookie(&state)),
                (header::CACHE_CONTROL, "no-store".to_owned()),
            ],
        )
            .into_response())
    }

    /// Terminate an authorization attempt. Checks run in order: provider
    /// error, missing code, state validation, configured credentials, then
    /// the one exchange attempt. Every branch yields exactly one response.
    async fn handle_callback(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<BTreeMap<String, String>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let params = CallbackParams::from_query(&query);

        if let Some(error) = params.error.as_deref() {
            warn!("WHOOP authorization did not complete: {error}");
            return Ok(pages::provider_error(
                error,
                params.error_description.as_deref(),
            ));
        }

        let Some(code) = params.code.as_deref() else {
            return Ok(pages::missing_code(&query));
        };

        if !state_matches(&headers, params.state.as_deref()) {
            warn!("rejecting WHOOP callback with invalid or missing state");
            return Ok(pages::invalid_state());
        }

        let whoop = &resources.config.whoop;
        if whoop.credentials().is_none() {
            return Err(AppError::config(
                "WHOOP_CLIENT_ID or WHOOP_CLIENT_SECRET is not set",
            ));
        }

        match resources.exchanger.exchange_code(code).await {
            Ok(tokens) => Ok(success_response(
                whoop.success_redirect.as_deref(),
                &tokens,
            )),
            Err(err) => {
                error!("WHOOP token exchange failed: {err}");
                Ok(pages::exchange_failed(&err))
            }
        }
    }
}

/// Compare the state cookie against the `state` query parameter.
/// Absence of either side is a mismatch, never a default.
fn state_matches(headers: &HeaderMap, query_state: Option<&str>) -> bool {
    let cookie_state = headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(oauth_state::state_from_cookie_header);

    match (cookie_state, query_state) {
        (Some(cookie), Some(query)) => cookie == query,
        _ => false,
    }
}

/// Compose the terminal success response: clear the state cookie, then
/// either redirect to the configured success URL with the token set in the
/// fragment, or render a plain confirmation page.
fn success_response(success_redirect: Option<&str>, tokens: &TokenResponse) -> Response {
    info!(
        "WHOOP authorization complete, access token expires in {}s",
        tokens.expires_in
    );
    let clear_cookie = oauth_state::clear_state_cookie();

    if let Some(target) = success_redirect {
        let expires_in = tokens.expires_in.to_string();
        let location = redirect::fragment_url(
            target,
            &[
                ("access_token", tokens.access_token.as_str()),
                ("refresh_token", tokens.refresh_token.as_deref().unwrap_or("")),
                ("expires_in", expires_in.as_str()),
                ("token_type", tokens.token_type.as_str()),
                ("scope", tokens.scope.as_deref().unwrap_or("")),
            ],
        );
        return (
            StatusCode::FOUND,
            [
                (header::LOCATION, location),
                (header::SET_COOKIE, clear_cookie),
            ],
        )
            .into_response();
    }

    (
        StatusCode::OK,
        [(header::SET_COOKIE, clear_cookie)],
        Html(pages::success_body()),
    )
        .into_response()
}

/// User-facing HTML pages for the callback's terminal states. Bodies stay
/// deliberately small; every interpolated value is escaped.
mod pages {
    use super::{ExchangeError, Html, IntoResponse, Response, StatusCode};
    use std::borrow::Cow;
    use std::collections::BTreeMap;

    fn escape(value: &str) -> Cow<'_, str> {
        html_escape::encode_text(value)
    }

    fn client_error(body: String) -> Response {
        (StatusCode::BAD_REQUEST, Html(body)).into_response()
    }

    /// WHOOP reported an authorization error (e.g. the user denied access)
    pub fn provider_error(error: &str, description: Option<&str>) -> Response {
        let detail = description.map_or_else(String::new, |desc| {
            let decoded = urlencoding::decode(desc).unwrap_or_else(|_| Cow::Borrowed(desc));
            format!(" ({})", escape(&decoded))
        });
        client_error(format!(
            "<p><strong>WHOOP authorization did not complete.</strong></p>\n\
             <p>Error: {}{detail}</p>\n\
             <p>You can try again from your app's \"Connect to WHOOP\" link.</p>",
            escape(error)
        ))
    }

    /// Callback reached without a code or an error, usually by opening the
    /// URL directly
    pub fn missing_code(query: &BTreeMap<String, String>) -> Response {
        let hint = if query.is_empty() {
            String::new()
        } else {
            let names = query
                .keys()
                .map(|name| escape(name).into_owned())
                .collect::<Vec<_>>()
                .join(", ");
            format!("\n<p><small>Received query params: {names}</small></p>")
        };
        client_error(format!(
            "<p><strong>Missing code in callback.</strong></p>\n\
             <p>This URL is for WHOOP to redirect to after you authorize. Do not open it directly.</p>\n\
             <p>Start from your app's \"Connect to WHOOP\" link, which sends you to WHOOP to sign in; \
             after you approve, WHOOP redirects here with a <code>code</code> parameter.</p>{hint}"
        ))
    }

    /// CSRF check failed: the state cookie and query parameter are absent
    /// or do not match
    pub fn invalid_state() -> Response {
        client_error(
            "<p><strong>Invalid or missing state.</strong></p>\n\
             <p>This callback could not be matched to an authorization attempt you started. \
             Please restart from your app's \"Connect to WHOOP\" link.</p>"
                .to_owned(),
        )
    }

    /// The code exchange with WHOOP failed; for provider-returned errors
    /// the body is included for diagnosis
    pub fn exchange_failed(err: &ExchangeError) -> Response {
        match err {
            ExchangeError::Provider { body, .. } => {
                let pretty = serde_json::from_str::<serde_json::Value>(body)
                    .ok()
                    .and_then(|value| serde_json::to_string_pretty(&value).ok())
                    .unwrap_or_else(|| body.clone());
                client_error(format!(
                    "<p>WHOOP returned an error during the token exchange.</p>\n\
                     <pre>{}</pre>\n\
                     <p>You can try again from your app's \"Connect to WHOOP\" link.</p>",
                    escape(&pretty)
                ))
            }
            ExchangeError::Network(_) | ExchangeError::MalformedResponse(_) => client_error(
                "<p>The token exchange with WHOOP failed.</p>\n\
                 <p>You can try again from your app's \"Connect to WHOOP\" link.</p>"
                    .to_owned(),
            ),
        }
    }

    /// Terminal success without a configured redirect target
    pub fn success_body() -> String {
        "<p>WHOOP connected successfully. You can close this tab.</p>".to_owned()
    }
}
