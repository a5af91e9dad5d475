// ABOUTME: Integration tests for the fixed-template report formatter
// ABOUTME: Asserts the exact reference output lines and the 3-decimal contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Workout Metrics Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use workout_metrics::formatters::format_summary;
use workout_metrics::models::WorkoutSummary;
use workout_metrics::telemetry;

/// The three reference packages and the exact lines they must render to
const REFERENCE_PACKAGES: [(&str, &[f64], &str); 3] = [
    (
        "SWM",
        &[720.0, 1.0, 80.0, 25.0, 40.0],
        "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
         Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.",
    ),
    (
        "RUN",
        &[15_000.0, 1.0, 75.0],
        "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
         Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750.",
    ),
    (
        "WLK",
        &[9_000.0, 1.0, 75.0, 180.0],
        "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; \
         Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500.",
    ),
];

// === Reference Output ===

#[test]
fn test_reference_packages_render_exact_lines() {
    for (type_code, values, expected) in REFERENCE_PACKAGES {
        let summary = telemetry::decode(type_code, values).unwrap().summary();
        assert_eq!(
            format_summary(&summary),
            expected,
            "Rendered line for {type_code} must match the fixed template"
        );
    }
}

#[test]
fn test_display_matches_format_summary() {
    let summary = telemetry::decode("RUN", &[15_000.0, 1.0, 75.0])
        .unwrap()
        .summary();
    assert_eq!(
        summary.to_string(),
        format_summary(&summary),
        "Display must render through the same fixed template"
    );
}

// === Template Shape ===

#[test]
fn test_formatted_line_shape() {
    let line = format_summary(&sample_summary());

    assert!(!line.contains('\n'), "Report must be a single line");
    assert_eq!(
        line.matches("; ").count(),
        4,
        "Template has exactly five segments"
    );
    assert!(line.ends_with('.'), "Report must end with a period");
}

#[test]
fn test_numeric_fields_have_three_decimals() {
    // Values chosen so naive formatting would print fewer or more digits
    let summary = WorkoutSummary {
        workout_name: "Running".to_owned(),
        duration_hours: 2.0,
        distance_km: 0.125_49,
        mean_speed_kmh: 0.062_745,
        calories_kcal: 100.0,
    };
    let line = format_summary(&summary);

    assert!(
        line.contains("Длительность: 2.000 ч."),
        "Duration must carry exactly 3 decimals, got: {line}"
    );
    assert!(
        line.contains("Дистанция: 0.125 км"),
        "Distance must round to 3 decimals, got: {line}"
    );
    assert!(
        line.contains("Ср. скорость: 0.063 км/ч"),
        "Speed must round to 3 decimals, got: {line}"
    );
    assert!(
        line.contains("Потрачено ккал: 100.000."),
        "Calories must carry exactly 3 decimals, got: {line}"
    );
}

// === Summary Serialization ===

#[test]
fn test_summary_serde_round_trip() {
    let summary = sample_summary();
    let json = serde_json::to_string(&summary).unwrap();
    let restored: WorkoutSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, summary, "Serde round-trip must preserve all fields");
}

fn sample_summary() -> WorkoutSummary {
    telemetry::decode("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0])
        .unwrap()
        .summary()
}
