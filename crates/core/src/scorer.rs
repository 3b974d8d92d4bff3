// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::classification::Classification;
use crate::policy::ScoringPolicy;
use crate::tips::build_tips;
use crate::{additive, weighted};
use buckcast_domain::{
    DailyWeather, HuntingPressure, RutAssessment, ScoringFactors, Terrain, TimeOfDay,
    WeatherFlags, derive_weather_flags,
};
use serde::Serialize;

/// Everything needed to score one sit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringInput {
    pub rut: RutAssessment,
    pub factors: ScoringFactors,
    pub flags: WeatherFlags,
}

impl ScoringInput {
    #[must_use]
    pub const fn new(rut: RutAssessment, factors: ScoringFactors, flags: WeatherFlags) -> Self {
        Self {
            rut,
            factors,
            flags,
        }
    }

    /// Builds an input from a day's weather record.
    ///
    /// The temperature is the one a hunter sees during `time_of_day`;
    /// weather flags compare `today` against `prior` when it is known.
    #[must_use]
    pub fn from_weather(
        today: &DailyWeather,
        prior: Option<&DailyWeather>,
        time_of_day: TimeOfDay,
        terrain: Terrain,
        hunting_pressure: HuntingPressure,
        rut: RutAssessment,
    ) -> Self {
        let factors: ScoringFactors = ScoringFactors {
            time_of_day,
            temperature_f: today.representative_temp_f(time_of_day),
            wind_speed_mph: today.wind_max_mph,
            precipitation_mm: Some(today.precipitation_mm()),
            barometric_pressure_hpa: today.pressure_hpa,
            terrain,
            hunting_pressure,
        };
        Self::new(rut, factors, derive_weather_flags(today, prior))
    }
}

/// One sub-factor's share of a score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FactorContribution {
    pub factor: &'static str,
    /// The factor's own value: a raw modifier for the additive policy, a
    /// normalized `[0, 1]` factor for the weighted one.
    pub value: f64,
    /// Signed contribution to the score before clamping.
    pub points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub policy: ScoringPolicy,
    pub score: u8,
    /// Estimated chance of a daylight sighting; additive policy only.
    pub chance_percent: Option<u8>,
    pub classification: Classification,
    pub breakdown: Vec<FactorContribution>,
    pub tips: Vec<String>,
}

impl ScoreResult {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.classification.label(self.policy)
    }

    #[must_use]
    pub const fn badge(&self) -> &'static str {
        self.classification.badge()
    }

    #[must_use]
    pub const fn rating_text(&self) -> &'static str {
        self.classification.rating_text()
    }

    /// All tips as one paragraph.
    #[must_use]
    pub fn tips_text(&self) -> String {
        self.tips.join(" ")
    }
}

/// Scores sits with a fixed policy.
///
/// Scoring is pure: the same input always yields the same result, and no
/// input makes it fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivityScorer {
    policy: ScoringPolicy,
}

impl ActivityScorer {
    #[must_use]
    pub const fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub const fn policy(&self) -> ScoringPolicy {
        self.policy
    }

    #[must_use]
    pub fn score(&self, input: &ScoringInput) -> ScoreResult {
        let (score, chance_percent, breakdown) = match self.policy {
            ScoringPolicy::Additive => {
                let (score, chance, breakdown) = additive::score(input);
                (score, Some(chance), breakdown)
            }
            ScoringPolicy::Weighted => {
                let (score, breakdown) = weighted::score(input);
                (score, None, breakdown)
            }
        };

        ScoreResult {
            policy: self.policy,
            score,
            chance_percent,
            classification: Classification::classify(self.policy, score),
            breakdown,
            tips: build_tips(
                input.factors.terrain,
                input.factors.time_of_day,
                input.rut.phase,
                &input.flags,
            ),
        }
    }
}
