// ABOUTME: Unified error handling with standard error codes and HTTP responses
// ABOUTME: Maps the flow's failure taxonomy onto status codes and operator diagnostics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 blkcipher.xyz

//! # Unified Error Handling
//!
//! Defines the error taxonomy for the authorization flow:
//! misconfiguration (operator-fixable, 500), user flow errors (400, rendered
//! as explanatory HTML by the handlers), and upstream exchange failures
//! (classified separately in [`crate::oauth::ExchangeError`]).
//!
//! Secrets never appear in an error message; messages may name missing
//! environment variables but never their values.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Request input failed validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,

    /// Authentication with an external service failed
    #[serde(rename = "EXTERNAL_AUTH_FAILED")]
    ExternalAuthFailed,

    /// An external service encountered an error
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError,

    /// Required configuration is missing
    #[serde(rename = "CONFIG_MISSING")]
    ConfigMissing,

    /// Configuration is present but invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid,

    /// An internal server error occurred
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            // 400 Bad Request: user flow errors and upstream exchange
            // failures both surface as client errors per the flow contract
            Self::InvalidInput | Self::ExternalAuthFailed | Self::ExternalServiceError => 400,

            // 500 Internal Server Error: operator-fixable problems
            Self::ConfigMissing | Self::ConfigInvalid | Self::InternalError => 500,
        }
    }

    /// Get a user-facing description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The request could not be processed",
            Self::ExternalAuthFailed => "Authorization with WHOOP did not complete",
            Self::ExternalServiceError => "WHOOP returned an error",
            Self::ConfigMissing | Self::ConfigInvalid | Self::InternalError => {
                "Server configuration error"
            }
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message (operator-facing, never a secret)
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Invalid request input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Missing configuration (operator error)
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigMissing, message)
    }

    /// External service error
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// This service talks to browsers, so errors render as a minimal HTML page.
/// The page carries only the generic description; the specific message is
/// logged server-side for the operator.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        tracing::error!("request failed: {self}");
        let body = format!("<p>{}.</p>", self.code.description());
        (
            status,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            body,
        )
            .into_response()
    }
}
