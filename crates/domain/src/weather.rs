// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Daily weather records and the derived hunting signals.
//!
//! Records arrive from an external forecast provider already converted to
//! imperial units (°F, mph, inches). Signals compare the target day against
//! the day before it.

use crate::serde_formats::{clock_time_opt, iso_date};
use crate::types::TimeOfDay;
use serde::{Deserialize, Serialize};
use time::{Date, Month, Time};

/// Precipitation above this amount (inches) counts as real rain.
pub const MEASURABLE_PRECIP_IN: f64 = 0.05;

/// A day-over-day drop in high temperature of at least this much (°F) marks a front.
pub const COLD_FRONT_DROP_F: f64 = 10.0;

/// Daily maximum wind at or above this speed (mph) is considered high.
pub const HIGH_WIND_MPH: f64 = 15.0;

/// A daily high at or above this temperature (°F) is very warm for the season.
pub const VERY_WARM_F: f64 = 75.0;

const MM_PER_INCH: f64 = 25.4;

/// One day of forecast or observed weather.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyWeather {
    #[serde(with = "iso_date")]
    pub date: Date,
    pub temp_max_f: f64,
    pub temp_min_f: f64,
    pub precipitation_in: f64,
    pub wind_max_mph: f64,
    #[serde(default)]
    pub wind_direction_deg: Option<f64>,
    #[serde(default)]
    pub pressure_hpa: Option<f64>,
    #[serde(default, with = "clock_time_opt")]
    pub sunrise: Option<Time>,
    #[serde(default, with = "clock_time_opt")]
    pub sunset: Option<Time>,
}

impl DailyWeather {
    /// Precipitation total in millimetres.
    #[must_use]
    pub fn precipitation_mm(&self) -> f64 {
        self.precipitation_in * MM_PER_INCH
    }

    /// The temperature a hunter sitting during `time_of_day` will actually see.
    ///
    /// Mornings sit near the overnight low, midday and evening near the high,
    /// and an all-day sit averages the two.
    #[must_use]
    pub fn representative_temp_f(&self, time_of_day: TimeOfDay) -> f64 {
        match time_of_day {
            TimeOfDay::Morning => self.temp_min_f,
            TimeOfDay::Midday | TimeOfDay::Evening => self.temp_max_f,
            TimeOfDay::AllDay => (self.temp_min_f + self.temp_max_f) / 2.0,
        }
    }

    fn has_measurable_precip(&self) -> bool {
        self.precipitation_in > MEASURABLE_PRECIP_IN
    }
}

/// Boolean weather signals used by the additive scoring policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherFlags {
    pub cold_front: bool,
    pub recent_rain: bool,
    pub high_wind: bool,
    pub very_warm: bool,
}

impl WeatherFlags {
    /// Human-readable descriptions of the raised flags, in a fixed order.
    #[must_use]
    pub fn descriptions(&self) -> Vec<&'static str> {
        let mut out: Vec<&'static str> = Vec::new();
        if self.cold_front {
            out.push("Cold front detected");
        }
        if self.recent_rain {
            out.push("Recent rain");
        }
        if self.high_wind {
            out.push("High wind for part of the day");
        }
        if self.very_warm {
            out.push("Very warm for the season");
        }
        out
    }
}

/// Derives weather flags for `today`, optionally comparing against the prior day.
///
/// Without a prior day no cold front can be detected and only today's
/// precipitation counts toward recent rain.
#[must_use]
pub fn derive_weather_flags(today: &DailyWeather, prior: Option<&DailyWeather>) -> WeatherFlags {
    let recent_rain: bool =
        prior.is_some_and(DailyWeather::has_measurable_precip) || today.has_measurable_precip();

    let cold_front: bool = prior.is_some_and(|prev| {
        let drop: f64 = prev.temp_max_f - today.temp_max_f;
        drop >= COLD_FRONT_DROP_F && prev.has_measurable_precip()
    });

    let high_wind: bool = today.wind_max_mph >= HIGH_WIND_MPH;

    let very_warm: bool = is_fall_month(today.date.month()) && today.temp_max_f >= VERY_WARM_F;

    WeatherFlags {
        cold_front,
        recent_rain,
        high_wind,
        very_warm,
    }
}

/// One-line summary of `today`, e.g. `For 2025-11-02: High 61°F, Low 38°F, little/no precip, 9 mph max wind.`
#[must_use]
pub fn weather_summary(today: &DailyWeather) -> String {
    let precip: String = if today.has_measurable_precip() {
        format!("{:.2}\" precip", today.precipitation_in)
    } else {
        "little/no precip".to_string()
    };
    format!(
        "For {}: High {:.0}°F, Low {:.0}°F, {precip}, {:.0} mph max wind.",
        today.date, today.temp_max_f, today.temp_min_f, today.wind_max_mph
    )
}

/// Day-over-day comparison followed by the raised signals.
///
/// The prior-day part is omitted when no prior record is available. When no
/// flag is raised the signals sentence reads as neutral.
#[must_use]
pub fn weather_details(
    today: &DailyWeather,
    prior: Option<&DailyWeather>,
    flags: &WeatherFlags,
) -> String {
    let mut details: String = String::new();
    if let Some(prev) = prior {
        let drop: f64 = prev.temp_max_f - today.temp_max_f;
        let sign: char = if drop >= 0.0 { '-' } else { '+' };
        details.push_str(&format!(
            "Prev day high: {:.0}°F (change of {sign}{:.0}°F). ",
            prev.temp_max_f,
            drop.abs()
        ));
        if prev.has_measurable_precip() {
            details.push_str(&format!(
                "Prev day precip: {:.2}\". ",
                prev.precipitation_in
            ));
        }
    }

    let signals: Vec<&'static str> = flags.descriptions();
    if signals.is_empty() {
        details.push_str("Weather signals are fairly neutral.");
    } else {
        details.push_str(&format!("Signals: {}.", signals.join(", ")));
    }
    details
}

const fn is_fall_month(month: Month) -> bool {
    matches!(
        month,
        Month::September | Month::October | Month::November | Month::December
    )
}
