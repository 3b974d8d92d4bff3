// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use buckcast_domain::{DailyWeather, HuntingPressure, MoonRecord, RutPhase, Terrain, TimeOfDay};
use time::macros::{date, time};

use crate::tests::helpers::weather_day;
use crate::{
    ActivityScorer, CoreError, HuntPlan, HuntSite, MAX_PLAN_DAYS, MoonCache, ScoringPolicy,
    plan_days,
};

const SITE: HuntSite = HuntSite {
    terrain: Terrain::PinesClearcuts,
    hunting_pressure: HuntingPressure::Medium,
};

fn early_november() -> Vec<DailyWeather> {
    vec![
        weather_day(date!(2025 - 11 - 01), 55.0, 35.0),
        weather_day(date!(2025 - 11 - 02), 55.0, 35.0),
        weather_day(date!(2025 - 11 - 03), 55.0, 35.0),
    ]
}

#[test]
fn test_plan_picks_best_slot_and_earliest_best_day() {
    let plan: HuntPlan = plan_days(
        date!(2025 - 11 - 01),
        3,
        SITE,
        &early_november(),
        &ActivityScorer::new(ScoringPolicy::Additive),
        &MoonCache::new(),
    )
    .unwrap();

    assert_eq!(plan.days.len(), 3);
    let first = &plan.days[0];
    assert_eq!(first.rut.phase, RutPhase::PeakRut);
    assert_eq!(first.best_slot, TimeOfDay::Morning);
    assert_eq!(first.best_score, 76);
    assert_eq!(first.all_day.score, 78);
    assert_eq!(plan.days[2].rut.phase, RutPhase::Lockdown);
    assert_eq!(plan.days[2].best_score, 58);
    // Nov 1 and Nov 2 tie; the earlier day wins.
    assert_eq!(plan.best_day, date!(2025 - 11 - 01));
    assert_eq!(plan.best().unwrap().date, date!(2025 - 11 - 01));
}

#[test]
fn test_equal_slots_prefer_morning_then_evening() {
    let weather: Vec<DailyWeather> = vec![weather_day(date!(2025 - 10 - 20), 45.0, 45.0)];
    let plan: HuntPlan = plan_days(
        date!(2025 - 10 - 20),
        1,
        SITE,
        &weather,
        &ActivityScorer::new(ScoringPolicy::Weighted),
        &MoonCache::new(),
    )
    .unwrap();

    let day = &plan.days[0];
    let slots: Vec<TimeOfDay> = day.slots.iter().map(|s| s.time_of_day).collect();
    assert_eq!(
        slots,
        vec![TimeOfDay::Morning, TimeOfDay::Evening, TimeOfDay::Midday]
    );
    assert_eq!(day.slots[0].result.score, day.slots[1].result.score);
    assert_eq!(day.best_slot, TimeOfDay::Morning);
}

#[test]
fn test_missing_day_stops_the_plan() {
    let result = plan_days(
        date!(2025 - 11 - 01),
        4,
        SITE,
        &early_november(),
        &ActivityScorer::default(),
        &MoonCache::new(),
    );
    assert_eq!(
        result,
        Err(CoreError::MissingWeather {
            date: date!(2025 - 11 - 04)
        })
    );
}

#[test]
fn test_plan_length_is_bounded() {
    let scorer: ActivityScorer = ActivityScorer::default();
    let cache: MoonCache = MoonCache::new();
    for days in [0, MAX_PLAN_DAYS + 1] {
        let result = plan_days(
            date!(2025 - 11 - 01),
            days,
            SITE,
            &early_november(),
            &scorer,
            &cache,
        );
        assert!(matches!(result, Err(CoreError::InvalidPlanLength { .. })));
    }
}

#[test]
fn test_lead_in_day_drives_first_day_flags() {
    let mut weather: Vec<DailyWeather> = early_november();
    let mut lead_in: DailyWeather = weather_day(date!(2025 - 10 - 31), 70.0, 50.0);
    lead_in.precipitation_in = 0.4;
    weather.insert(0, lead_in);

    let plan: HuntPlan = plan_days(
        date!(2025 - 11 - 01),
        2,
        SITE,
        &weather,
        &ActivityScorer::default(),
        &MoonCache::new(),
    )
    .unwrap();

    assert!(plan.days[0].flags.cold_front);
    assert!(plan.days[0].flags.recent_rain);
    assert!(!plan.days[1].flags.cold_front);
}

#[test]
fn test_legal_light_and_moon_are_attached() {
    let mut weather: Vec<DailyWeather> = vec![weather_day(date!(2025 - 11 - 05), 60.0, 40.0)];
    weather[0].sunrise = Some(time!(07:10));
    weather[0].sunset = Some(time!(17:45));
    let mut cache: MoonCache = MoonCache::new();
    cache.insert(MoonRecord::new(date!(2025 - 11 - 05), "Full Moon", 99.0));

    let plan: HuntPlan = plan_days(
        date!(2025 - 11 - 05),
        1,
        SITE,
        &weather,
        &ActivityScorer::default(),
        &cache,
    )
    .unwrap();

    let day = &plan.days[0];
    assert_eq!(day.legal_light_start, Some(time!(06:40)));
    assert_eq!(day.legal_light_end, Some(time!(18:15)));
    assert_eq!(day.moon.as_ref().unwrap().phase_name, "Full Moon");
}

#[test]
fn test_legal_light_never_wraps_past_midnight() {
    let mut weather: Vec<DailyWeather> = vec![
        weather_day(date!(2025 - 11 - 05), 60.0, 40.0),
        weather_day(date!(2025 - 11 - 06), 60.0, 40.0),
    ];
    weather[0].sunrise = Some(time!(00:15));
    weather[0].sunset = Some(time!(23:45));
    weather[1].sunrise = Some(time!(00:30));
    weather[1].sunset = Some(time!(23:29));

    let plan: HuntPlan = plan_days(
        date!(2025 - 11 - 05),
        2,
        SITE,
        &weather,
        &ActivityScorer::default(),
        &MoonCache::new(),
    )
    .unwrap();

    assert_eq!(plan.days[0].legal_light_start, None);
    assert_eq!(plan.days[0].legal_light_end, None);
    assert_eq!(plan.days[1].legal_light_start, Some(time!(00:00)));
    assert_eq!(plan.days[1].legal_light_end, Some(time!(23:59)));
}
