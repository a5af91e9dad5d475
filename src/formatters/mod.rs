// ABOUTME: Fixed-template rendering of workout summaries
// ABOUTME: Produces the single-line report string with 3 decimal places per metric
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Workout Metrics Contributors

//! Report formatting
//!
//! Renders a [`WorkoutSummary`] into the fixed single-line template. The
//! template text and its 3-decimal formatting are part of the output
//! contract; there is no localization beyond this fixed string.

use crate::models::WorkoutSummary;

/// Render a workout summary as the fixed single-line report.
///
/// Every numeric field is formatted with exactly 3 decimal places.
/// Formatting a valid summary cannot fail.
#[must_use]
pub fn format_summary(summary: &WorkoutSummary) -> String {
    format!(
        "Тип тренировки: {}; \
         Длительность: {:.3} ч.; \
         Дистанция: {:.3} км; \
         Ср. скорость: {:.3} км/ч; \
         Потрачено ккал: {:.3}.",
        summary.workout_name,
        summary.duration_hours,
        summary.distance_km,
        summary.mean_speed_kmh,
        summary.calories_kcal
    )
}
