// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use buckcast::ScoringPolicy;
use buckcast_domain::DailyWeather;
use time::Date;
use time::macros::date;

use crate::{ForecastWindow, OddsRequest, PlanRequest, RequestContext};

pub const TODAY: Date = date!(2025 - 10 - 28);

pub fn create_test_context() -> RequestContext {
    RequestContext {
        default_policy: ScoringPolicy::Additive,
        window: ForecastWindow::default(),
        today: TODAY,
    }
}

pub fn create_test_weather(date: Date, temp_max_f: f64, precipitation_in: f64) -> DailyWeather {
    DailyWeather {
        date,
        temp_max_f,
        temp_min_f: temp_max_f - 20.0,
        precipitation_in,
        wind_max_mph: 6.0,
        wind_direction_deg: Some(310.0),
        pressure_hpa: Some(1021.0),
        sunrise: None,
        sunset: None,
    }
}

/// A peak-rut morning sit behind a cold front.
pub fn create_test_odds_request() -> OddsRequest {
    OddsRequest {
        date: String::from("2025-11-01"),
        time_of_day: String::from("morning"),
        terrain: String::from("pinesClearcuts"),
        hunting_pressure: String::from("medium"),
        latitude: Some(33.2),
        longitude: Some(-82.8),
        policy: None,
        rut_phase: None,
        weather: vec![
            create_test_weather(date!(2025 - 10 - 31), 74.0, 0.45),
            create_test_weather(date!(2025 - 11 - 01), 58.0, 0.0),
        ],
    }
}

pub fn create_test_plan_request() -> PlanRequest {
    PlanRequest {
        start_date: String::from("2025-11-01"),
        days: Some(3),
        terrain: String::from("hardwoods"),
        hunting_pressure: String::from("low"),
        latitude: Some(33.2),
        longitude: Some(-82.8),
        policy: Some(String::from("weighted")),
        weather: vec![
            create_test_weather(date!(2025 - 11 - 01), 58.0, 0.0),
            create_test_weather(date!(2025 - 11 - 02), 52.0, 0.0),
            create_test_weather(date!(2025 - 11 - 03), 80.0, 0.0),
        ],
    }
}
