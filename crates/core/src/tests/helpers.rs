// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use buckcast_domain::{
    DailyWeather, HuntingPressure, RutAssessment, RutPhase, ScoringFactors, Terrain, TimeOfDay,
    WeatherFlags,
};
use time::Date;

use crate::ScoringInput;

/// Factors with ideal weather: cool, calm, dry, high pressure.
pub fn ideal_factors(
    time_of_day: TimeOfDay,
    terrain: Terrain,
    hunting_pressure: HuntingPressure,
) -> ScoringFactors {
    ScoringFactors {
        time_of_day,
        temperature_f: 45.0,
        wind_speed_mph: 3.0,
        precipitation_mm: Some(0.0),
        barometric_pressure_hpa: Some(1020.0),
        terrain,
        hunting_pressure,
    }
}

pub fn input(phase: RutPhase, factors: ScoringFactors, flags: WeatherFlags) -> ScoringInput {
    ScoringInput::new(RutAssessment::from_phase(phase), factors, flags)
}

/// A dry, calm day with the given high and low.
pub fn weather_day(date: Date, temp_max_f: f64, temp_min_f: f64) -> DailyWeather {
    DailyWeather {
        date,
        temp_max_f,
        temp_min_f,
        precipitation_in: 0.0,
        wind_max_mph: 4.0,
        wind_direction_deg: None,
        pressure_hpa: Some(1018.0),
        sunrise: None,
        sunset: None,
    }
}
