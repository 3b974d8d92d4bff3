// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Forecast window checks.
//!
//! Weather providers only forecast a fixed number of days ahead and do not
//! serve history, so dates outside that window can never be scored.

use thiserror::Error;
use time::{Date, Duration};

/// Days ahead a typical provider forecasts.
pub const DEFAULT_FORECAST_DAYS: u16 = 16;

/// Forecast window errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ForecastWindowError {
    /// The date is further out than the provider forecasts.
    #[error("{date} is more than {days_ahead} days after {today}")]
    TooFarAhead {
        date: Date,
        today: Date,
        days_ahead: u16,
    },

    /// The date is before the earliest day the provider serves.
    #[error("{date} is more than {days_back} days before {today}")]
    TooFarBack {
        date: Date,
        today: Date,
        days_back: u16,
    },
}

/// The range of dates, relative to today, that can be scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastWindow {
    /// Days after today that are still forecast.
    pub days_ahead: u16,
    /// Days before today that can still be looked up.
    pub days_back: u16,
}

impl Default for ForecastWindow {
    fn default() -> Self {
        Self {
            days_ahead: DEFAULT_FORECAST_DAYS,
            days_back: 0,
        }
    }
}

impl ForecastWindow {
    #[must_use]
    pub const fn new(days_ahead: u16, days_back: u16) -> Self {
        Self {
            days_ahead,
            days_back,
        }
    }

    /// Checks that `date` lies inside the window around `today`.
    ///
    /// # Errors
    ///
    /// Returns an error if the date is too far ahead or too far back.
    pub fn validate(&self, date: Date, today: Date) -> Result<(), ForecastWindowError> {
        let offset: i64 = (date - today).whole_days();
        if offset > i64::from(self.days_ahead) {
            return Err(ForecastWindowError::TooFarAhead {
                date,
                today,
                days_ahead: self.days_ahead,
            });
        }
        if offset < -i64::from(self.days_back) {
            return Err(ForecastWindowError::TooFarBack {
                date,
                today,
                days_back: self.days_back,
            });
        }
        Ok(())
    }

    /// Checks that every day of a span starting at `start` lies inside the window.
    ///
    /// # Errors
    ///
    /// Returns an error if the first or last day falls outside.
    pub fn validate_span(
        &self,
        start: Date,
        days: u8,
        today: Date,
    ) -> Result<(), ForecastWindowError> {
        self.validate(start, today)?;
        let last_offset: i64 = i64::from(days.saturating_sub(1));
        match start.checked_add(Duration::days(last_offset)) {
            Some(last) => self.validate(last, today),
            None => Err(ForecastWindowError::TooFarAhead {
                date: start,
                today,
                days_ahead: self.days_ahead,
            }),
        }
    }
}
