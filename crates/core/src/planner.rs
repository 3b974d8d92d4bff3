// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Multi-day hunt planning.
//!
//! A plan scores each day in a short window for every sit window and picks
//! the best sit per day and the best day overall.

use crate::error::CoreError;
use crate::moon_cache::MoonCache;
use crate::scorer::{ActivityScorer, ScoreResult, ScoringInput};
use buckcast_domain::serde_formats::{clock_time_opt, iso_date};
use buckcast_domain::{
    DailyWeather, DomainError, HuntingPressure, MoonRecord, RutAssessment, Terrain, TimeOfDay,
    WeatherFlags, assess_rut_phase, derive_weather_flags,
};
use serde::Serialize;
use time::{Date, Duration, PrimitiveDateTime, Time};
use tracing::debug;

/// Longest plan the planner will build.
pub const MAX_PLAN_DAYS: u8 = 7;

/// Minutes before sunrise and after sunset that count as shooting light.
pub const LEGAL_LIGHT_MINUTES: i64 = 30;

/// Candidate sit windows, in tie-break order.
const SIT_WINDOWS: [TimeOfDay; 3] = [TimeOfDay::Morning, TimeOfDay::Evening, TimeOfDay::Midday];

/// The stand being planned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HuntSite {
    pub terrain: Terrain,
    pub hunting_pressure: HuntingPressure,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotScore {
    pub time_of_day: TimeOfDay,
    pub result: ScoreResult,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPlan {
    #[serde(with = "iso_date")]
    pub date: Date,
    pub rut: RutAssessment,
    pub flags: WeatherFlags,
    /// Morning, evening and midday, in that order.
    pub slots: Vec<SlotScore>,
    pub best_slot: TimeOfDay,
    pub best_score: u8,
    pub all_day: ScoreResult,
    /// Sunrise less the legal-light margin; absent when unknown or before midnight.
    #[serde(with = "clock_time_opt")]
    pub legal_light_start: Option<Time>,
    /// Sunset plus the margin; absent when unknown or past midnight.
    #[serde(with = "clock_time_opt")]
    pub legal_light_end: Option<Time>,
    pub moon: Option<MoonRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HuntPlan {
    pub days: Vec<DayPlan>,
    #[serde(with = "iso_date")]
    pub best_day: Date,
}

impl HuntPlan {
    /// The plan entry for the best day.
    #[must_use]
    pub fn best(&self) -> Option<&DayPlan> {
        self.days.iter().find(|day| day.date == self.best_day)
    }
}

/// Plans `days` consecutive days starting at `start`.
///
/// `weather` must hold a record for every planned day. A record for the day
/// before `start` is used as lead-in for the first day's weather flags when
/// present. Moon data is attached from `moon` where cached.
///
/// # Errors
///
/// Returns an error if `days` is zero or above [`MAX_PLAN_DAYS`], if any
/// planned day has no weather record, or if the dates overflow.
pub fn plan_days(
    start: Date,
    days: u8,
    site: HuntSite,
    weather: &[DailyWeather],
    scorer: &ActivityScorer,
    moon: &MoonCache,
) -> Result<HuntPlan, CoreError> {
    if days == 0 || days > MAX_PLAN_DAYS {
        return Err(CoreError::InvalidPlanLength {
            days,
            max: MAX_PLAN_DAYS,
        });
    }

    let mut plans: Vec<DayPlan> = Vec::with_capacity(usize::from(days));
    for offset in 0..days {
        let date: Date = start
            .checked_add(Duration::days(i64::from(offset)))
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: format!("planning {offset} days after {start}"),
            })?;
        let today: &DailyWeather =
            find_record(weather, date).ok_or(CoreError::MissingWeather { date })?;
        let prior: Option<&DailyWeather> = date
            .previous_day()
            .and_then(|prev| find_record(weather, prev));

        let day: DayPlan = plan_day(today, prior, site, scorer, moon.get(date).cloned());
        debug!(
            date = %date,
            best_slot = day.best_slot.as_str(),
            best_score = day.best_score,
            "Planned day"
        );
        plans.push(day);
    }

    // Strictly greater keeps the earliest day on ties.
    let mut best_day: Date = start;
    let mut best_score: Option<u8> = None;
    for day in &plans {
        if best_score.is_none_or(|score| day.best_score > score) {
            best_day = day.date;
            best_score = Some(day.best_score);
        }
    }

    Ok(HuntPlan {
        days: plans,
        best_day,
    })
}

fn plan_day(
    today: &DailyWeather,
    prior: Option<&DailyWeather>,
    site: HuntSite,
    scorer: &ActivityScorer,
    moon: Option<MoonRecord>,
) -> DayPlan {
    let rut: RutAssessment = assess_rut_phase(today.date);
    let score_for = |time_of_day: TimeOfDay| -> ScoreResult {
        let input: ScoringInput = ScoringInput::from_weather(
            today,
            prior,
            time_of_day,
            site.terrain,
            site.hunting_pressure,
            rut,
        );
        scorer.score(&input)
    };

    let slots: Vec<SlotScore> = SIT_WINDOWS
        .iter()
        .map(|&time_of_day| SlotScore {
            time_of_day,
            result: score_for(time_of_day),
        })
        .collect();

    let mut best_slot: TimeOfDay = TimeOfDay::Morning;
    let mut best_score: u8 = 0;
    for (index, slot) in slots.iter().enumerate() {
        if index == 0 || slot.result.score > best_score {
            best_slot = slot.time_of_day;
            best_score = slot.result.score;
        }
    }

    let all_day: ScoreResult = score_for(TimeOfDay::AllDay);
    let flags: WeatherFlags = derive_weather_flags(today, prior);
    let light: Duration = Duration::minutes(LEGAL_LIGHT_MINUTES);

    DayPlan {
        date: today.date,
        rut,
        flags,
        slots,
        best_slot,
        best_score,
        all_day,
        legal_light_start: today
            .sunrise
            .and_then(|t| shift_within_day(today.date, t, -light)),
        legal_light_end: today
            .sunset
            .and_then(|t| shift_within_day(today.date, t, light)),
        moon,
    }
}

/// Shifts `edge` by `offset`; `None` when the result falls on another date.
fn shift_within_day(date: Date, edge: Time, offset: Duration) -> Option<Time> {
    date.with_time(edge)
        .checked_add(offset)
        .filter(|shifted| shifted.date() == date)
        .map(PrimitiveDateTime::time)
}

fn find_record(weather: &[DailyWeather], date: Date) -> Option<&DailyWeather> {
    weather.iter().find(|record| record.date == date)
}
