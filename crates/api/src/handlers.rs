// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handlers.
//!
//! Each handler validates raw input, translates failures into [`ApiError`],
//! and only then calls into the core.

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::forecast_window::ForecastWindow;
use crate::request_response::{
    LoadMoonResponse, OddsRequest, OddsResponse, PlanRequest, PlanResponse,
};
use buckcast::{
    ActivityScorer, HuntPlan, HuntSite, MAX_PLAN_DAYS, MoonCache, ScoreResult, ScoringInput,
    ScoringPolicy, plan_days,
};
use buckcast_domain::{
    Coordinates, DailyWeather, HuntingPressure, MoonRecord, RutAssessment, RutPhase, Terrain,
    TimeOfDay, assess_rut_phase, parse_hunt_date, validate_coordinates, weather_details,
    weather_summary,
};
use time::Date;
use tracing::{debug, info, warn};

/// Server-wide settings every request is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext {
    /// Policy used when a request does not name one.
    pub default_policy: ScoringPolicy,
    pub window: ForecastWindow,
    /// The current date, for forecast window checks.
    pub today: Date,
}

/// Scores one sit.
///
/// # Arguments
///
/// * `request` - The raw request
/// * `context` - Server defaults and the current date
/// * `moon` - Cached moon data, attached to the response when present
///
/// # Errors
///
/// Returns an error if:
/// - Any field is missing, malformed, or out of range
/// - The date is outside the forecast window
/// - The weather records do not include the hunt date
pub fn calculate_odds(
    request: &OddsRequest,
    context: &RequestContext,
    moon: &MoonCache,
) -> Result<OddsResponse, ApiError> {
    let date: Date = parse_hunt_date(&request.date).map_err(translate_domain_error)?;
    let coordinates: Coordinates =
        validate_coordinates(request.latitude, request.longitude).map_err(translate_domain_error)?;
    let time_of_day: TimeOfDay =
        TimeOfDay::parse(&request.time_of_day).map_err(translate_domain_error)?;
    let site: HuntSite = parse_site(&request.terrain, &request.hunting_pressure)?;
    let policy: ScoringPolicy = resolve_policy(request.policy.as_deref(), context)?;
    let rut: RutAssessment = match request.rut_phase.as_deref() {
        Some(raw) => {
            RutAssessment::from_phase(RutPhase::parse(raw).map_err(translate_domain_error)?)
        }
        None => assess_rut_phase(date),
    };

    context.window.validate(date, context.today)?;

    let today: &DailyWeather = find_weather(&request.weather, date).ok_or_else(|| {
        warn!(date = %date, "Request has no weather for the hunt date");
        ApiError::WeatherUnavailable {
            message: format!("no forecast for {date}"),
        }
    })?;
    let prior: Option<&DailyWeather> = date
        .previous_day()
        .and_then(|prev| find_weather(&request.weather, prev));

    let input: ScoringInput = ScoringInput::from_weather(
        today,
        prior,
        time_of_day,
        site.terrain,
        site.hunting_pressure,
        rut,
    );
    let result: ScoreResult = ActivityScorer::new(policy).score(&input);

    info!(
        date = %date,
        policy = policy.as_str(),
        rut_phase = rut.phase.as_str(),
        time_of_day = time_of_day.as_str(),
        score = result.score,
        "Calculated odds"
    );

    Ok(OddsResponse {
        date,
        coordinates,
        policy,
        rut_phase: rut.phase,
        rut_label: rut.label,
        flags: input.flags,
        signals: input.flags.descriptions(),
        weather_summary: weather_summary(today),
        weather_details: weather_details(today, prior, &input.flags),
        score: result.score,
        chance_percent: result.chance_percent,
        classification: result.label(),
        rating_text: result.rating_text(),
        badge: result.badge(),
        tips_text: result.tips_text(),
        tips: result.tips,
        breakdown: result.breakdown,
        moon: moon.get(date).cloned(),
    })
}

/// Plans up to [`MAX_PLAN_DAYS`] consecutive days.
///
/// # Errors
///
/// Returns an error if:
/// - Any field is missing, malformed, or out of range
/// - Any planned day is outside the forecast window
/// - The weather records do not cover every planned day
pub fn build_plan(
    request: &PlanRequest,
    context: &RequestContext,
    moon: &MoonCache,
) -> Result<PlanResponse, ApiError> {
    let start: Date = parse_hunt_date(&request.start_date).map_err(translate_domain_error)?;
    let coordinates: Coordinates =
        validate_coordinates(request.latitude, request.longitude).map_err(translate_domain_error)?;
    let site: HuntSite = parse_site(&request.terrain, &request.hunting_pressure)?;
    let policy: ScoringPolicy = resolve_policy(request.policy.as_deref(), context)?;
    let days: u8 = request.days.unwrap_or(MAX_PLAN_DAYS);
    if days == 0 || days > MAX_PLAN_DAYS {
        return Err(ApiError::InvalidInput {
            field: String::from("days"),
            message: format!("Plans cover between 1 and {MAX_PLAN_DAYS} days"),
        });
    }

    context.window.validate_span(start, days, context.today)?;

    let plan: HuntPlan = plan_days(
        start,
        days,
        site,
        &request.weather,
        &ActivityScorer::new(policy),
        moon,
    )
    .map_err(translate_core_error)?;

    info!(
        start = %start,
        days,
        policy = policy.as_str(),
        best_day = %plan.best_day,
        "Built hunt plan"
    );

    Ok(PlanResponse {
        policy,
        coordinates,
        best_day: plan.best_day,
        days: plan.days,
    })
}

/// Adds moon records to the cache.
#[must_use]
pub fn load_moon_records(cache: &mut MoonCache, records: Vec<MoonRecord>) -> LoadMoonResponse {
    let received: usize = cache.extend(records);
    debug!(received, cached = cache.len(), "Loaded moon records");
    LoadMoonResponse {
        received,
        cached: cache.len(),
    }
}

/// Looks up the moon record for a date, asking `fetch` on a cache miss.
///
/// A record returned by `fetch` is cached and served to later lookups.
///
/// # Errors
///
/// Returns an error if the date is malformed or `fetch` fails.
pub fn get_moon_record(
    cache: &mut MoonCache,
    date: &str,
    fetch: impl FnOnce(Date) -> Result<MoonRecord, ApiError>,
) -> Result<MoonRecord, ApiError> {
    let date: Date = parse_hunt_date(date).map_err(translate_domain_error)?;
    cache.get_or_try_insert_with(date, fetch).cloned()
}

/// Moon fetcher for deployments without a moon provider.
///
/// # Errors
///
/// Always returns [`ApiError::ResourceNotFound`].
pub fn moon_not_cached(date: Date) -> Result<MoonRecord, ApiError> {
    Err(ApiError::ResourceNotFound {
        resource_type: String::from("Moon record"),
        message: format!("No moon data cached for {date}"),
    })
}

fn parse_site(terrain: &str, hunting_pressure: &str) -> Result<HuntSite, ApiError> {
    Ok(HuntSite {
        terrain: Terrain::parse(terrain).map_err(translate_domain_error)?,
        hunting_pressure: HuntingPressure::parse(hunting_pressure)
            .map_err(translate_domain_error)?,
    })
}

fn resolve_policy(
    raw: Option<&str>,
    context: &RequestContext,
) -> Result<ScoringPolicy, ApiError> {
    raw.map_or(Ok(context.default_policy), |s| {
        ScoringPolicy::parse(s).map_err(translate_domain_error)
    })
}

fn find_weather(weather: &[DailyWeather], date: Date) -> Option<&DailyWeather> {
    weather.iter().find(|record| record.date == date)
}
