// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::forecast_window::ForecastWindowError;
use buckcast::CoreError;
use buckcast_domain::DomainError;

/// Appended to every weather failure shown to callers.
pub const WEATHER_UNAVAILABLE_HINT: &str =
    "Try a date within the next 16 days and check your connection.";

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// Weather for the requested date could not be loaded.
    WeatherUnavailable {
        /// What went wrong.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::WeatherUnavailable { message } => {
                write!(
                    f,
                    "Could not load weather or calculate odds ({message}). {WEATHER_UNAVAILABLE_HINT}"
                )
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ForecastWindowError> for ApiError {
    fn from(err: ForecastWindowError) -> Self {
        Self::WeatherUnavailable {
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let field: &str = match &err {
        DomainError::InvalidDate { input, reason } => {
            return ApiError::InvalidInput {
                field: String::from("date"),
                message: if input.is_empty() {
                    reason.clone()
                } else {
                    format!("'{input}' is not a valid date: {reason}")
                },
            };
        }
        DomainError::InvalidCoordinate { axis, .. } => {
            return ApiError::InvalidInput {
                field: String::from(*axis),
                message: String::from("Please enter a valid latitude and longitude"),
            };
        }
        DomainError::DateArithmeticOverflow { operation } => {
            return ApiError::Internal {
                message: format!("Date arithmetic overflow while {operation}"),
            };
        }
        DomainError::InvalidTimeOfDay(_) => "time_of_day",
        DomainError::InvalidTerrain(_) => "terrain",
        DomainError::InvalidHuntingPressure(_) => "hunting_pressure",
        DomainError::InvalidRutPhase(_) => "rut_phase",
        DomainError::InvalidScoringPolicy(_) => "policy",
    };
    ApiError::InvalidInput {
        field: String::from(field),
        message: err.to_string(),
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::MissingWeather { date } => ApiError::WeatherUnavailable {
            message: format!("no forecast for {date}"),
        },
        CoreError::InvalidPlanLength { days, max } => ApiError::InvalidInput {
            field: String::from("days"),
            message: format!("Plan length {days} is outside 1..={max}"),
        },
    }
}
