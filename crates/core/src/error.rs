// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use buckcast_domain::DomainError;
use time::Date;

/// Errors that can occur while assembling scoring inputs or plans.
///
/// Scoring itself never fails; these cover the data handed to it.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// No weather record exists for a date that must be scored.
    MissingWeather {
        /// The date without a record.
        date: Date,
    },
    /// The requested plan length is outside `1..=max`.
    InvalidPlanLength {
        /// The requested number of days.
        days: u8,
        /// The largest supported plan.
        max: u8,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::MissingWeather { date } => write!(f, "No weather data for {date}"),
            Self::InvalidPlanLength { days, max } => {
                write!(f, "Invalid plan length: {days}. Must be between 1 and {max}")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
