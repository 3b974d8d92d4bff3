// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use buckcast::{CoreError, ScoringPolicy};
use buckcast_domain::{DomainError, Terrain};
use time::macros::date;

use crate::{ApiError, translate_core_error, translate_domain_error};

#[test]
fn test_domain_errors_name_their_field() {
    let err: ApiError = translate_domain_error(DomainError::InvalidTerrain(String::from("swamp")));
    assert_eq!(
        err,
        ApiError::InvalidInput {
            field: String::from("terrain"),
            message: String::from("Invalid terrain: swamp"),
        }
    );
}

#[test]
fn test_date_overflow_is_internal() {
    let err: ApiError = translate_domain_error(DomainError::DateArithmeticOverflow {
        operation: String::from("planning"),
    });
    assert!(matches!(err, ApiError::Internal { .. }));
}

#[test]
fn test_missing_weather_is_weather_unavailable() {
    let err: ApiError = translate_core_error(CoreError::MissingWeather {
        date: date!(2025 - 11 - 04),
    });
    assert_eq!(
        err,
        ApiError::WeatherUnavailable {
            message: String::from("no forecast for 2025-11-04"),
        }
    );
}

#[test]
fn test_core_domain_violation_is_unwrapped() {
    let err: ApiError = translate_core_error(CoreError::DomainViolation(
        DomainError::InvalidScoringPolicy(String::from("x")),
    ));
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "policy"));
}

#[test]
fn test_parse_failure_message_is_not_double_prefixed() {
    let err: ApiError = translate_domain_error(Terrain::parse("swamp").unwrap_err());
    assert_eq!(
        err,
        ApiError::InvalidInput {
            field: String::from("terrain"),
            message: String::from("Invalid terrain: swamp"),
        }
    );

    let err: ApiError = translate_core_error(CoreError::from(
        ScoringPolicy::parse("fancy").unwrap_err(),
    ));
    assert_eq!(
        err.to_string(),
        "Invalid input for field 'policy': Invalid scoring policy: fancy"
    );
}
