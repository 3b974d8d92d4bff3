// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod moon;
mod rut_phase;
pub mod serde_formats;
mod types;
mod validation;
mod weather;

#[cfg(test)]
mod tests;

// Re-export public types
pub use error::DomainError;
pub use moon::MoonRecord;
pub use rut_phase::{
    LOCKDOWN_DAYS, PRE_RUT_WINDOW_DAYS, RutAssessment, RutCalendar, RutPhase, assess_rut_phase,
};
pub use types::{Coordinates, HuntingPressure, ScoringFactors, Terrain, TimeOfDay};
pub use validation::{parse_hunt_date, validate_coordinates};
pub use weather::{
    COLD_FRONT_DROP_F, DailyWeather, HIGH_WIND_MPH, MEASURABLE_PRECIP_IN, VERY_WARM_F,
    WeatherFlags, derive_weather_flags, weather_details, weather_summary,
};
