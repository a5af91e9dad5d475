// ABOUTME: Derived read-only metrics record for one completed workout
// ABOUTME: Holds the name, duration, distance, speed, and calorie figures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Workout Metrics Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::formatters;

/// Derived metrics for one completed workout.
///
/// Constructed once from a [`crate::models::Workout`] via
/// [`crate::models::Workout::summary`] immediately before formatting; never
/// mutated afterwards and not persisted anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    /// Workout variant label ("Running", "SportsWalking", "Swimming")
    pub workout_name: String,
    /// Workout duration in hours
    pub duration_hours: f64,
    /// Distance covered in kilometers
    pub distance_km: f64,
    /// Mean speed over the full duration in km/h
    pub mean_speed_kmh: f64,
    /// Calories burned in kcal
    pub calories_kcal: f64,
}

impl fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", formatters::format_summary(self))
    }
}
