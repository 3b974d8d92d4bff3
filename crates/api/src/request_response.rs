// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Requests carry raw caller input; every field is validated by the
//! handlers before the core is invoked.

use buckcast::{DayPlan, FactorContribution, ScoringPolicy};
use buckcast_domain::serde_formats::iso_date;
use buckcast_domain::{Coordinates, DailyWeather, MoonRecord, RutPhase, WeatherFlags};
use time::Date;

/// API request to score a single sit.
#[derive(Debug, Clone, PartialEq)]
pub struct OddsRequest {
    /// The hunt date (`YYYY-MM-DD`).
    pub date: String,
    pub time_of_day: String,
    pub terrain: String,
    pub hunting_pressure: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Scoring policy; the server default applies when absent.
    pub policy: Option<String>,
    /// Overrides the calendar-derived rut phase.
    pub rut_phase: Option<String>,
    /// Forecast records; must include the hunt date and may include the day before.
    pub weather: Vec<DailyWeather>,
}

/// API response for a scored sit.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct OddsResponse {
    #[serde(with = "iso_date")]
    pub date: Date,
    pub coordinates: Coordinates,
    pub policy: ScoringPolicy,
    pub rut_phase: RutPhase,
    pub rut_label: &'static str,
    pub flags: WeatherFlags,
    /// Descriptions of the raised weather flags.
    pub signals: Vec<&'static str>,
    /// One-line summary of the hunt day's forecast.
    pub weather_summary: String,
    /// Prior-day comparison and the raised signals, as prose.
    pub weather_details: String,
    pub score: u8,
    /// Estimated chance of a daylight sighting, for the additive policy.
    pub chance_percent: Option<u8>,
    /// The policy's word for the rating (e.g. "Solid" or "good").
    pub classification: &'static str,
    pub rating_text: &'static str,
    pub badge: &'static str,
    pub tips: Vec<String>,
    pub tips_text: String,
    pub breakdown: Vec<FactorContribution>,
    pub moon: Option<MoonRecord>,
}

/// API request to plan several days.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    /// First day of the plan (`YYYY-MM-DD`).
    pub start_date: String,
    /// Number of days; defaults to the maximum.
    pub days: Option<u8>,
    pub terrain: String,
    pub hunting_pressure: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub policy: Option<String>,
    pub weather: Vec<DailyWeather>,
}

/// API response for a multi-day plan.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PlanResponse {
    pub policy: ScoringPolicy,
    pub coordinates: Coordinates,
    #[serde(with = "iso_date")]
    pub best_day: Date,
    pub days: Vec<DayPlan>,
}

/// API response for a moon data upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoadMoonResponse {
    /// Records received in this upload.
    pub received: usize,
    /// Records held in the cache afterwards.
    pub cached: usize,
}
