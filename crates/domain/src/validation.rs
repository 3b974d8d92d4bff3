// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::Coordinates;
use time::Date;
use time::macros::format_description;

/// Parses a hunt date in `YYYY-MM-DD` form.
///
/// # Arguments
///
/// * `input` - The raw date string from the caller
///
/// # Errors
///
/// Returns an error if the string is empty or is not a valid calendar date.
pub fn parse_hunt_date(input: &str) -> Result<Date, DomainError> {
    let trimmed: &str = input.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidDate {
            input: String::new(),
            reason: String::from("Please pick a hunt date"),
        });
    }

    Date::parse(trimmed, format_description!("[year]-[month]-[day]")).map_err(|e| {
        DomainError::InvalidDate {
            input: trimmed.to_string(),
            reason: e.to_string(),
        }
    })
}

/// Validates a latitude/longitude pair supplied as optional numbers.
///
/// Missing values are rejected the same way as non-numeric ones.
///
/// # Errors
///
/// Returns an error if either value is missing, non-finite, or out of range.
pub fn validate_coordinates(
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Result<Coordinates, DomainError> {
    let latitude: f64 = latitude.unwrap_or(f64::NAN);
    let longitude: f64 = longitude.unwrap_or(f64::NAN);
    Coordinates::new(latitude, longitude)
}
