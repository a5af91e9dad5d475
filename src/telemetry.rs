// ABOUTME: Sensor package decoding into workout records
// ABOUTME: Maps a type code and positional value vector onto the matching Workout variant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Workout Metrics Contributors

//! Sensor package decoding
//!
//! The sensor layer delivers one package per workout: a three-letter type
//! code and a positional vector of raw numeric values. [`decode`] resolves
//! the code, checks the vector against the variant's field list, and builds
//! the validated [`Workout`] record. A package either decodes fully or fails
//! with an explicit error; there is no partially decoded state.

use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::models::{Workout, WorkoutCode};

/// Decode one sensor package into a workout record.
///
/// `values` is unpacked positionally in the variant's fixed field order:
///
/// - `RUN`: `action_count, duration_hours, weight_kg`
/// - `WLK`: `action_count, duration_hours, weight_kg, height_cm`
/// - `SWM`: `action_count, duration_hours, weight_kg, pool_length_m, pool_lap_count`
///
/// # Errors
///
/// - `ErrorCode::ResourceNotFound` if `type_code` is not one of the
///   recognized codes
/// - `ErrorCode::InvalidInput` if the value count does not match the
///   variant's field list
/// - `ErrorCode::InvalidFormat` if a counter field carries a non-integral
///   or negative raw value
/// - `ErrorCode::ValueOutOfRange` if a physical field fails validation
pub fn decode(type_code: &str, values: &[f64]) -> AppResult<Workout> {
    let code: WorkoutCode = type_code.parse()?;

    if values.len() != code.field_count() {
        return Err(AppError::invalid_input(format!(
            "Workout type '{}' expects {} sensor values, got {}",
            code.as_str(),
            code.field_count(),
            values.len()
        )));
    }

    debug!(
        code = code.as_str(),
        value_count = values.len(),
        "decoding sensor package"
    );

    match code {
        WorkoutCode::Run => Workout::running(
            counter_field(code, "action_count", values[0])?,
            values[1],
            values[2],
        ),
        WorkoutCode::Wlk => Workout::sports_walking(
            counter_field(code, "action_count", values[0])?,
            values[1],
            values[2],
            values[3],
        ),
        WorkoutCode::Swm => Workout::swimming(
            counter_field(code, "action_count", values[0])?,
            values[1],
            values[2],
            counter_field(code, "pool_length_m", values[3])?,
            counter_field(code, "pool_lap_count", values[4])?,
        ),
    }
}

/// Convert a raw sensor value into a counter field.
///
/// Counter fields (step, stroke, and lap counts, pool length) are defined by
/// the sensor protocol as non-negative integers; anything else in the raw
/// vector is a malformed package.
fn counter_field(code: WorkoutCode, field: &str, value: f64) -> AppResult<u32> {
    if !value.is_finite() || value < 0.0 || value.fract() > 0.0 || value > f64::from(u32::MAX) {
        return Err(AppError::invalid_format(format!(
            "Field '{field}' for workout type '{}' must be a non-negative integer, got {value}",
            code.as_str()
        )));
    }
    Ok(value as u32)
}
