// ABOUTME: Formula coefficients for workout metric calculations
// ABOUTME: Pure data constants organized by domain (distance, time, calories)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Workout Metrics Contributors

//! Constants module
//!
//! This module organizes formula coefficients by domain. The calorie
//! coefficients are fixed per workout variant and are not configurable.

/// Distance conversion constants
pub mod distance {
    /// Distance covered per step in meters (running and sports walking)
    pub const STEP_LENGTH_M: f64 = 0.65;
    /// Distance covered per stroke in meters (swimming)
    pub const STROKE_LENGTH_M: f64 = 1.38;
    /// Meters per kilometer
    pub const METERS_PER_KILOMETER: f64 = 1000.0;
}

/// Time conversion constants
pub mod time {
    /// Minutes per hour
    pub const MINUTES_PER_HOUR: f64 = 60.0;
}

/// Calorie formula coefficients, grouped per workout variant
pub mod calories {
    /// Running calorie coefficients
    pub mod running {
        /// Multiplier applied to mean speed
        pub const SPEED_MULTIPLIER: f64 = 18.0;
        /// Offset subtracted from the weighted speed term
        pub const SPEED_OFFSET: f64 = 20.0;
    }

    /// Sports walking calorie coefficients
    pub mod walking {
        /// Multiplier applied to body weight
        pub const WEIGHT_MULTIPLIER: f64 = 0.035;
        /// Multiplier applied to the speed-squared-over-height term
        pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    }

    /// Swimming calorie coefficients
    pub mod swimming {
        /// Offset added to mean speed
        pub const SPEED_OFFSET: f64 = 1.1;
        /// Multiplier applied to body weight
        pub const WEIGHT_MULTIPLIER: f64 = 2.0;
    }
}
