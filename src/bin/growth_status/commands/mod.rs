// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for growth-status
// ABOUTME: Provides access to single, batch and table validation commands

pub mod batch;
pub mod classify;
pub mod tables;
