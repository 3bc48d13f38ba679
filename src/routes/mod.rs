// ABOUTME: Route module organization for the WHOOP Connect HTTP endpoints
// ABOUTME: Assembles the authorization flow and health routes into one router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 blkcipher.xyz

//! Route modules
//!
//! Each domain module contains route definitions and thin handler functions.
//! [`router`] assembles the full application router with tracing middleware.

/// WHOOP authorization flow routes (start and callback)
pub mod auth;
/// Health check routes for monitoring
pub mod health;

pub use auth::WhoopAuthRoutes;
pub use health::HealthRoutes;

use crate::context::ServerResources;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the application router
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(WhoopAuthRoutes::routes(resources))
        .merge(HealthRoutes::routes())
        .layer(TraceLayer::new_for_http())
}
