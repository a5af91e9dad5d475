// ABOUTME: Workout type code enumeration for sensor packages
// ABOUTME: Defines the recognized type codes with parsing and display implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Workout Metrics Contributors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{AppError, ErrorCode};

/// The closed set of workout type codes the sensor layer emits.
///
/// Each sensor package carries one of these three-letter codes as its
/// discriminator. Codes are matched exactly; the sensor protocol is
/// case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkoutCode {
    /// Swimming workout
    Swm,
    /// Running workout
    Run,
    /// Sports walking workout
    Wlk,
}

impl WorkoutCode {
    /// Get the wire form of this code
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Swm => "SWM",
            Self::Run => "RUN",
            Self::Wlk => "WLK",
        }
    }

    /// Get the workout name used in report output
    #[must_use]
    pub const fn workout_name(&self) -> &'static str {
        match self {
            Self::Swm => "Swimming",
            Self::Run => "Running",
            Self::Wlk => "SportsWalking",
        }
    }

    /// Number of positional sensor values this workout type requires
    #[must_use]
    pub const fn field_count(&self) -> usize {
        match self {
            Self::Swm => 5,
            Self::Run => 3,
            Self::Wlk => 4,
        }
    }
}

impl FromStr for WorkoutCode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SWM" => Ok(Self::Swm),
            "RUN" => Ok(Self::Run),
            "WLK" => Ok(Self::Wlk),
            other => Err(AppError::new(
                ErrorCode::ResourceNotFound,
                format!("Unknown workout type code '{other}'. Valid codes: SWM, RUN, WLK"),
            )),
        }
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
