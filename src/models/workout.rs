// ABOUTME: Workout record variants with their distance, speed, and calorie formulas
// ABOUTME: Closed enum over running, sports walking, and swimming sensor fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Workout Metrics Contributors

use serde::{Deserialize, Serialize};

use crate::constants::calories::{running, swimming, walking};
use crate::constants::{distance, time};
use crate::errors::{AppError, AppResult};
use crate::models::{WorkoutCode, WorkoutSummary};

/// One completed workout over its raw sensor fields.
///
/// The three variants form a closed set: every metric is computed through an
/// exhaustive match, so a workout type without a calorie formula cannot be
/// constructed in the first place.
///
/// All variants share `action_count` (steps or strokes, depending on the
/// variant), `duration_hours`, and `weight_kg`. Construction goes through the
/// fallible constructors ([`Workout::running`], [`Workout::sports_walking`],
/// [`Workout::swimming`]), which reject physically impossible field values,
/// so an unvalidated record cannot exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "workout", rename_all = "snake_case")]
pub enum Workout {
    /// Running: distance and speed derive from the step count
    Running {
        /// Number of steps taken
        action_count: u32,
        /// Workout duration in hours
        duration_hours: f64,
        /// Athlete body weight in kilograms
        weight_kg: f64,
    },

    /// Sports walking: as running, plus height enters the calorie formula
    SportsWalking {
        /// Number of steps taken
        action_count: u32,
        /// Workout duration in hours
        duration_hours: f64,
        /// Athlete body weight in kilograms
        weight_kg: f64,
        /// Athlete height in centimeters
        height_cm: f64,
    },

    /// Swimming: distance derives from strokes, speed from pool geometry
    Swimming {
        /// Number of strokes taken
        action_count: u32,
        /// Workout duration in hours
        duration_hours: f64,
        /// Athlete body weight in kilograms
        weight_kg: f64,
        /// Pool length in meters
        pool_length_m: u32,
        /// Number of completed pool laps
        pool_lap_count: u32,
    },
}

/// Reject non-finite or non-positive values for a physical quantity
fn validate_positive(field: &str, value: f64) -> AppResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::value_out_of_range(format!(
            "Field '{field}' must be greater than zero, got {value}"
        )));
    }
    Ok(())
}

impl Workout {
    /// Create a running workout record
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ValueOutOfRange` if `duration_hours` or
    /// `weight_kg` is not a positive finite number
    pub fn running(action_count: u32, duration_hours: f64, weight_kg: f64) -> AppResult<Self> {
        validate_positive("duration_hours", duration_hours)?;
        validate_positive("weight_kg", weight_kg)?;
        Ok(Self::Running {
            action_count,
            duration_hours,
            weight_kg,
        })
    }

    /// Create a sports walking workout record
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ValueOutOfRange` if `duration_hours`, `weight_kg`,
    /// or `height_cm` is not a positive finite number
    pub fn sports_walking(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> AppResult<Self> {
        validate_positive("duration_hours", duration_hours)?;
        validate_positive("weight_kg", weight_kg)?;
        validate_positive("height_cm", height_cm)?;
        Ok(Self::SportsWalking {
            action_count,
            duration_hours,
            weight_kg,
            height_cm,
        })
    }

    /// Create a swimming workout record
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ValueOutOfRange` if `duration_hours` or
    /// `weight_kg` is not a positive finite number, or if `pool_length_m`
    /// is zero
    pub fn swimming(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: u32,
        pool_lap_count: u32,
    ) -> AppResult<Self> {
        validate_positive("duration_hours", duration_hours)?;
        validate_positive("weight_kg", weight_kg)?;
        if pool_length_m == 0 {
            return Err(AppError::value_out_of_range(
                "Field 'pool_length_m' must be greater than zero, got 0",
            ));
        }
        Ok(Self::Swimming {
            action_count,
            duration_hours,
            weight_kg,
            pool_length_m,
            pool_lap_count,
        })
    }

    /// Get the type code for this workout
    #[must_use]
    pub const fn code(&self) -> WorkoutCode {
        match self {
            Self::Running { .. } => WorkoutCode::Run,
            Self::SportsWalking { .. } => WorkoutCode::Wlk,
            Self::Swimming { .. } => WorkoutCode::Swm,
        }
    }

    /// Distance covered, in kilometers
    ///
    /// Formula: `action_count x unit_length_m / 1000`, where the unit length
    /// is one step (0.65 m) for running and sports walking, and one stroke
    /// (1.38 m) for swimming.
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        let (action_count, unit_length_m) = match self {
            Self::Running { action_count, .. } | Self::SportsWalking { action_count, .. } => {
                (*action_count, distance::STEP_LENGTH_M)
            }
            Self::Swimming { action_count, .. } => (*action_count, distance::STROKE_LENGTH_M),
        };
        f64::from(action_count) * unit_length_m / distance::METERS_PER_KILOMETER
    }

    /// Mean speed over the full duration, in km/h
    ///
    /// Running and sports walking divide the covered distance by the
    /// duration. Swimming computes speed directly from pool geometry
    /// (`pool_length_m x pool_lap_count / 1000 / duration_hours`), so the
    /// stroke count never enters the result.
    #[must_use]
    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Self::Running { duration_hours, .. } | Self::SportsWalking { duration_hours, .. } => {
                self.distance_km() / duration_hours
            }
            Self::Swimming {
                duration_hours,
                pool_length_m,
                pool_lap_count,
                ..
            } => {
                f64::from(*pool_length_m) * f64::from(*pool_lap_count)
                    / distance::METERS_PER_KILOMETER
                    / duration_hours
            }
        }
    }

    /// Calories burned over the workout, in kcal
    ///
    /// Formulas per variant:
    ///
    /// - Running: `(18 x speed - 20) x weight / 1000 x duration_min`
    /// - Sports walking: `(0.035 x weight + floor(speed^2 / height) x 0.029 x weight) x duration_min`
    /// - Swimming: `(speed + 1.1) x 2 x weight`
    #[must_use]
    pub fn calories_kcal(&self) -> f64 {
        match self {
            Self::Running {
                duration_hours,
                weight_kg,
                ..
            } => {
                let duration_min = duration_hours * time::MINUTES_PER_HOUR;
                (running::SPEED_MULTIPLIER * self.mean_speed_kmh() - running::SPEED_OFFSET)
                    * weight_kg
                    / distance::METERS_PER_KILOMETER
                    * duration_min
            }
            Self::SportsWalking {
                duration_hours,
                weight_kg,
                height_cm,
                ..
            } => {
                let duration_min = duration_hours * time::MINUTES_PER_HOUR;
                let speed = self.mean_speed_kmh();
                // The squared speed is floor-divided by height, not truly
                // divided. Established calorie output depends on this, so it
                // must not be "fixed" to ordinary division.
                let speed_height_term = (speed * speed / height_cm).floor();
                (walking::WEIGHT_MULTIPLIER * weight_kg
                    + speed_height_term * walking::SPEED_HEIGHT_MULTIPLIER * weight_kg)
                    * duration_min
            }
            Self::Swimming { weight_kg, .. } => {
                (self.mean_speed_kmh() + swimming::SPEED_OFFSET)
                    * swimming::WEIGHT_MULTIPLIER
                    * weight_kg
            }
        }
    }

    /// Workout duration in hours
    #[must_use]
    pub const fn duration_hours(&self) -> f64 {
        match self {
            Self::Running { duration_hours, .. }
            | Self::SportsWalking { duration_hours, .. }
            | Self::Swimming { duration_hours, .. } => *duration_hours,
        }
    }

    /// Compute the derived metrics record for this workout
    #[must_use]
    pub fn summary(&self) -> WorkoutSummary {
        WorkoutSummary {
            workout_name: self.code().workout_name().to_owned(),
            duration_hours: self.duration_hours(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.calories_kcal(),
        }
    }
}
