// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Base-plus-modifiers scoring.
//!
//! Every term is a small signed integer. The sum is clamped to
//! `[MIN_SCORE, MAX_SCORE]` and doubles as the daylight-sighting chance.

use crate::scorer::{FactorContribution, ScoringInput};
use buckcast_domain::{HuntingPressure, RutPhase, Terrain, TimeOfDay, WeatherFlags};

pub const MIN_SCORE: i32 = 20;
pub const MAX_SCORE: i32 = 90;

const MIN_CHANCE: i32 = 10;
const MAX_CHANCE: i32 = 95;

/// Starting points for a rut phase.
#[must_use]
pub const fn base_points(phase: RutPhase) -> i32 {
    match phase {
        RutPhase::SecondRut => 68,
        RutPhase::PeakRut => 65,
        RutPhase::PreRut => 55,
        RutPhase::Lockdown | RutPhase::PostRut | RutPhase::GeneralSeason => 50,
        RutPhase::EarlySeason | RutPhase::LateSeason => 45,
    }
}

/// Midday only earns points while bucks are cruising.
#[must_use]
pub const fn time_points(time_of_day: TimeOfDay, phase: RutPhase) -> i32 {
    match time_of_day {
        TimeOfDay::Morning => 8,
        TimeOfDay::Evening => 6,
        TimeOfDay::AllDay => 10,
        TimeOfDay::Midday => {
            if phase.is_breeding_peak() {
                5
            } else {
                0
            }
        }
    }
}

#[must_use]
pub const fn weather_points(flags: &WeatherFlags) -> i32 {
    let mut points: i32 = 0;
    if flags.cold_front {
        points += 8;
    }
    if flags.recent_rain {
        points += 4;
    }
    if flags.high_wind {
        points -= 6;
    }
    if flags.very_warm {
        points -= 5;
    }
    points
}

#[must_use]
pub const fn pressure_points(pressure: HuntingPressure) -> i32 {
    match pressure {
        HuntingPressure::Low => 5,
        HuntingPressure::Medium => 0,
        HuntingPressure::High => -8,
    }
}

/// Pine/clearcut edges pay off while bucks are on their feet.
#[must_use]
pub const fn terrain_points(terrain: Terrain, phase: RutPhase) -> i32 {
    if phase.is_breeding_peak() && matches!(terrain, Terrain::PinesClearcuts) {
        3
    } else {
        0
    }
}

/// Scores an input, returning the clamped score, the chance estimate and
/// the per-factor breakdown.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn score(input: &ScoringInput) -> (u8, u8, Vec<FactorContribution>) {
    let phase: RutPhase = input.rut.phase;
    let terms: [(&'static str, i32); 5] = [
        ("rut", base_points(phase)),
        ("time_of_day", time_points(input.factors.time_of_day, phase)),
        ("weather", weather_points(&input.flags)),
        ("hunting_pressure", pressure_points(input.factors.hunting_pressure)),
        ("terrain", terrain_points(input.factors.terrain, phase)),
    ];

    let raw: i32 = terms.iter().map(|(_, points)| points).sum();
    let score: i32 = raw.clamp(MIN_SCORE, MAX_SCORE);
    let chance: i32 = score.clamp(MIN_CHANCE, MAX_CHANCE);

    let breakdown: Vec<FactorContribution> = terms
        .iter()
        .map(|&(factor, points)| FactorContribution {
            factor,
            value: f64::from(points),
            points: f64::from(points),
        })
        .collect();

    // Both clamps keep the values well inside u8.
    (score as u8, chance as u8, breakdown)
}
