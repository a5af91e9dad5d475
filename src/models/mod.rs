// ABOUTME: Core data models for workout processing
// ABOUTME: Re-exports Workout, WorkoutCode, and WorkoutSummary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Workout Metrics Contributors

//! # Data Models
//!
//! Core data structures for workout processing:
//!
//! - `WorkoutCode`: the closed set of recognized sensor type codes
//! - `Workout`: one completed workout with its raw sensor fields
//! - `WorkoutSummary`: the derived read-only metrics record

// Domain modules
mod code;
mod summary;
mod workout;

// Re-export all public types for convenience
pub use code::WorkoutCode;
pub use summary::WorkoutSummary;
pub use workout::Workout;
