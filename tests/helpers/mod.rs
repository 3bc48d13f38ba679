// ABOUTME: Helper module index for integration tests
// ABOUTME: Exposes the axum request/response test harness
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 blkcipher.xyz

pub mod axum_test;
