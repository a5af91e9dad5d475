// ABOUTME: Integration tests for sensor package decoding
// ABOUTME: Covers type code resolution, arity checks, and malformed raw values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Workout Metrics Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use workout_metrics::errors::ErrorCode;
use workout_metrics::models::Workout;
use workout_metrics::telemetry;

// === Successful Decoding ===

#[test]
fn test_decode_running_package() {
    let workout = telemetry::decode("RUN", &[15_000.0, 1.0, 75.0]).unwrap();
    assert!(
        matches!(workout, Workout::Running { action_count: 15_000, .. }),
        "RUN should decode into a Running record"
    );
}

#[test]
fn test_decode_walking_package() {
    let workout = telemetry::decode("WLK", &[9_000.0, 1.0, 75.0, 180.0]).unwrap();
    match workout {
        Workout::SportsWalking {
            action_count,
            height_cm,
            ..
        } => {
            assert_eq!(action_count, 9_000);
            assert!((height_cm - 180.0).abs() < f64::EPSILON);
        }
        other => panic!("WLK should decode into SportsWalking, got {other:?}"),
    }
}

#[test]
fn test_decode_swimming_package() {
    let workout = telemetry::decode("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    match workout {
        Workout::Swimming {
            action_count,
            pool_length_m,
            pool_lap_count,
            ..
        } => {
            assert_eq!(action_count, 720);
            assert_eq!(pool_length_m, 25);
            assert_eq!(pool_lap_count, 40);
        }
        other => panic!("SWM should decode into Swimming, got {other:?}"),
    }
}

// === Unknown Type Codes ===

#[test]
fn test_decode_unknown_code_is_explicit_error() {
    let result = telemetry::decode("XYZ", &[1.0, 1.0, 1.0]);
    assert!(
        result.is_err(),
        "Unknown code must never yield a usable workout"
    );
    let err = result.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert!(
        err.message.contains("XYZ") && err.message.contains("Valid codes"),
        "Error should name the code and the valid options, got: {err}"
    );
}

#[test]
fn test_decode_codes_are_case_sensitive() {
    let result = telemetry::decode("swm", &[720.0, 1.0, 80.0, 25.0, 40.0]);
    assert!(
        result.is_err(),
        "Lowercase codes are not part of the sensor protocol"
    );
    assert_eq!(result.unwrap_err().code, ErrorCode::ResourceNotFound);
}

// === Arity Checks ===

#[test]
fn test_decode_rejects_too_few_values() {
    let result = telemetry::decode("RUN", &[15_000.0, 1.0]);
    assert!(result.is_err(), "Two values cannot fill a running record");
    let err = result.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(
        err.message.contains("expects 3") && err.message.contains("got 2"),
        "Error should report expected and actual counts, got: {err}"
    );
}

#[test]
fn test_decode_rejects_too_many_values() {
    let result = telemetry::decode("WLK", &[9_000.0, 1.0, 75.0, 180.0, 5.0]);
    assert!(result.is_err(), "Extra values must not be silently dropped");
    let err = result.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(
        err.message.contains("expects 4") && err.message.contains("got 5"),
        "Error should report expected and actual counts, got: {err}"
    );
}

#[test]
fn test_decode_rejects_empty_values() {
    let result = telemetry::decode("SWM", &[]);
    assert!(result.is_err());
    assert_eq!(result.unwrap_err().code, ErrorCode::InvalidInput);
}

// === Malformed Raw Values ===

#[test]
fn test_decode_rejects_fractional_counter() {
    let result = telemetry::decode("RUN", &[720.5, 1.0, 75.0]);
    assert!(
        result.is_err(),
        "Fractional step counts are malformed packages"
    );
    let err = result.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);
    assert!(
        err.message.contains("action_count"),
        "Error should name the offending field, got: {err}"
    );
}

#[test]
fn test_decode_rejects_negative_counter() {
    let result = telemetry::decode("SWM", &[720.0, 1.0, 80.0, -25.0, 40.0]);
    assert!(result.is_err(), "Negative pool length is malformed");
    let err = result.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);
    assert!(
        err.message.contains("pool_length_m"),
        "Error should name the offending field, got: {err}"
    );
}

#[test]
fn test_decode_applies_physical_validation() {
    let result = telemetry::decode("RUN", &[15_000.0, 0.0, 75.0]);
    assert!(result.is_err(), "Zero duration must fail validation");
    assert_eq!(result.unwrap_err().code, ErrorCode::ValueOutOfRange);
}
