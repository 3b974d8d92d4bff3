// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Date string is missing or could not be parsed.
    InvalidDate {
        /// The offending input.
        input: String,
        /// The parsing error message.
        reason: String,
    },
    /// Latitude or longitude is not a finite number inside its range.
    InvalidCoordinate {
        /// Which axis failed (`latitude` or `longitude`).
        axis: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// Time-of-day value is not recognized.
    InvalidTimeOfDay(String),
    /// Terrain value is not recognized.
    InvalidTerrain(String),
    /// Hunting pressure value is not recognized.
    InvalidHuntingPressure(String),
    /// Rut phase identifier is not recognized.
    InvalidRutPhase(String),
    /// Scoring policy name is not recognized.
    InvalidScoringPolicy(String),
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { input, reason } => {
                write!(f, "Invalid date '{input}': {reason}")
            }
            Self::InvalidCoordinate { axis, value } => {
                write!(f, "Invalid {axis}: {value}")
            }
            Self::InvalidTimeOfDay(value) => write!(f, "Invalid time of day: {value}"),
            Self::InvalidTerrain(value) => write!(f, "Invalid terrain: {value}"),
            Self::InvalidHuntingPressure(value) => {
                write!(f, "Invalid hunting pressure: {value}")
            }
            Self::InvalidRutPhase(value) => write!(f, "Invalid rut phase: {value}"),
            Self::InvalidScoringPolicy(value) => write!(f, "Invalid scoring policy: {value}"),
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
