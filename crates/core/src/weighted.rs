// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Weighted-sum scoring over normalized factors.
//!
//! Each factor maps a reading onto `[0, 1]` (1 is best for deer movement).
//! The weighted sum is scaled by the hunting-pressure penalty and by 100,
//! then rounded and clamped to `[0, 100]`.

use crate::scorer::{FactorContribution, ScoringInput};
use buckcast_domain::{HuntingPressure, Terrain, TimeOfDay};

pub const RUT_WEIGHT: f64 = 0.35;
pub const TIME_WEIGHT: f64 = 0.20;
pub const TEMPERATURE_WEIGHT: f64 = 0.18;
pub const WIND_WEIGHT: f64 = 0.14;
pub const PRECIPITATION_WEIGHT: f64 = 0.08;
pub const PRESSURE_WEIGHT: f64 = 0.05;
/// Applied to the terrain shortfall `1 - terrain_factor` as a deduction.
pub const TERRAIN_WEIGHT: f64 = 0.05;

pub const MAX_SCORE: f64 = 100.0;

#[must_use]
pub const fn time_factor(time_of_day: TimeOfDay) -> f64 {
    match time_of_day {
        TimeOfDay::Morning | TimeOfDay::Evening => 1.0,
        TimeOfDay::AllDay => 0.85,
        TimeOfDay::Midday => 0.65,
    }
}

/// Cool days are best; the factor falls off in bands on either side.
#[must_use]
pub fn temperature_factor(temperature_f: f64) -> f64 {
    if (30.0..=55.0).contains(&temperature_f) {
        1.0
    } else if (20.0..30.0).contains(&temperature_f) || (55.0..=65.0).contains(&temperature_f) {
        0.85
    } else {
        0.6
    }
}

/// Negative or non-finite readings are treated as calm.
#[must_use]
pub fn wind_factor(wind_speed_mph: f64) -> f64 {
    if !wind_speed_mph.is_finite() || wind_speed_mph <= 5.0 {
        1.0
    } else if wind_speed_mph <= 10.0 {
        0.85
    } else if wind_speed_mph <= 15.0 {
        0.65
    } else if wind_speed_mph <= 20.0 {
        0.5
    } else {
        0.35
    }
}

/// Dry, light, or heavy precipitation. A missing reading counts as dry.
#[must_use]
pub fn precipitation_factor(precipitation_mm: Option<f64>) -> f64 {
    match precipitation_mm.filter(|mm| mm.is_finite()) {
        None => 1.0,
        Some(mm) if mm <= 0.1 => 1.0,
        Some(mm) if mm <= 2.5 => 0.8,
        Some(_) => 0.6,
    }
}

/// High pressure is neutral; falling pressure costs points.
#[must_use]
pub fn barometric_factor(pressure_hpa: Option<f64>) -> f64 {
    match pressure_hpa.filter(|hpa| hpa.is_finite()) {
        None => 1.0,
        Some(hpa) if hpa >= 1015.0 => 1.0,
        Some(hpa) if hpa >= 1005.0 => 0.85,
        Some(hpa) if hpa >= 995.0 => 0.7,
        Some(_) => 0.6,
    }
}

#[must_use]
pub const fn terrain_factor(terrain: Terrain) -> f64 {
    match terrain {
        Terrain::PinesClearcuts => 1.0,
        Terrain::Mixed => 0.95,
        Terrain::Hardwoods | Terrain::AgEdges => 0.9,
    }
}

/// Multiplier on the whole weighted sum.
#[must_use]
pub const fn pressure_penalty(pressure: HuntingPressure) -> f64 {
    match pressure {
        HuntingPressure::High => 0.9,
        HuntingPressure::Medium => 1.0,
        HuntingPressure::Low => 1.05,
    }
}

/// Scores an input, returning the clamped score and the per-factor breakdown.
///
/// Breakdown points are expressed on the final 0-100 scale and sum to the
/// unclamped score; the pressure penalty appears as its own entry.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn score(input: &ScoringInput) -> (u8, Vec<FactorContribution>) {
    let factors = &input.factors;
    let terrain: f64 = terrain_factor(factors.terrain);
    let weighted: [(&'static str, f64, f64); 7] = [
        ("rut", input.rut.factor, RUT_WEIGHT * input.rut.factor),
        (
            "time_of_day",
            time_factor(factors.time_of_day),
            TIME_WEIGHT * time_factor(factors.time_of_day),
        ),
        (
            "temperature",
            temperature_factor(factors.temperature_f),
            TEMPERATURE_WEIGHT * temperature_factor(factors.temperature_f),
        ),
        (
            "wind",
            wind_factor(factors.wind_speed_mph),
            WIND_WEIGHT * wind_factor(factors.wind_speed_mph),
        ),
        (
            "precipitation",
            precipitation_factor(factors.precipitation_mm),
            PRECIPITATION_WEIGHT * precipitation_factor(factors.precipitation_mm),
        ),
        (
            "barometric_pressure",
            barometric_factor(factors.barometric_pressure_hpa),
            PRESSURE_WEIGHT * barometric_factor(factors.barometric_pressure_hpa),
        ),
        ("terrain", terrain, -TERRAIN_WEIGHT * (1.0 - terrain)),
    ];

    let inner: f64 = weighted.iter().map(|(_, _, term)| term).sum();
    let penalty: f64 = pressure_penalty(factors.hunting_pressure);
    let raw: f64 = MAX_SCORE * penalty * inner;

    let mut breakdown: Vec<FactorContribution> = weighted
        .iter()
        .map(|&(factor, value, term)| FactorContribution {
            factor,
            value,
            points: MAX_SCORE * term,
        })
        .collect();
    breakdown.push(FactorContribution {
        factor: "hunting_pressure",
        value: penalty,
        points: MAX_SCORE * inner * (penalty - 1.0),
    });

    let score: f64 = if raw.is_finite() {
        raw.round().clamp(0.0, MAX_SCORE)
    } else {
        0.0
    };

    (score as u8, breakdown)
}
