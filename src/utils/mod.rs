// ABOUTME: Utility module organizing shared helpers
// ABOUTME: Currently holds the pooled HTTP client used for outbound calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 blkcipher.xyz

/// Shared HTTP client utilities with pooling and timeout configuration
pub mod http_client;
