// ABOUTME: Workout statistics computed from raw sensor readings
// ABOUTME: Foundation modules for metric formulas, sensor decoding, and report rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Workout Metrics Contributors

#![deny(unsafe_code)]

//! # Workout Metrics
//!
//! Computes workout statistics (distance, mean speed, calories burned) from
//! raw sensor readings for three exercise types (running, sports walking,
//! swimming) and renders a fixed-format human-readable summary.
//!
//! All calculations are pure, synchronous, and deterministic: each sensor
//! package is decoded and computed independently, with no shared state.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Formula coefficients organized by domain
//! - **models**: `Workout`, `WorkoutCode`, and `WorkoutSummary` data types
//! - **telemetry**: Sensor package decoding into `Workout` records
//! - **formatters**: Fixed-template rendering of workout summaries

/// Unified error handling system with standard error codes
pub mod errors;

/// Formula coefficients and conversion constants organized by domain
pub mod constants;

/// Core data models (`Workout`, `WorkoutCode`, `WorkoutSummary`)
pub mod models;

/// Sensor package decoding into workout records
pub mod telemetry;

/// Fixed-template rendering of workout summaries
pub mod formatters;
