// ABOUTME: Common benchmark utilities and test fixtures for performance testing
// ABOUTME: Provides deterministic measurement record generators for Criterion benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Common benchmark utilities and test fixtures.
//!
//! Provides deterministic measurement generators for Criterion benchmarks.

pub mod fixtures;

// Each benchmark imports only the fixtures it needs
