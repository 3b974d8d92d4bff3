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
    clippy::all
)]

mod error;
mod forecast_window;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, WEATHER_UNAVAILABLE_HINT, translate_core_error, translate_domain_error};
pub use forecast_window::{DEFAULT_FORECAST_DAYS, ForecastWindow, ForecastWindowError};
pub use handlers::{
    RequestContext, build_plan, calculate_odds, get_moon_record, load_moon_records,
    moon_not_cached,
};
pub use request_response::{
    LoadMoonResponse, OddsRequest, OddsResponse, PlanRequest, PlanResponse,
};
