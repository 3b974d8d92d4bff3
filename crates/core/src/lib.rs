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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

pub mod additive;
mod classification;
mod error;
mod moon_cache;
mod planner;
mod policy;
mod scorer;
mod tips;
pub mod weighted;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use classification::Classification;
pub use error::CoreError;
pub use moon_cache::MoonCache;
pub use planner::{
    DayPlan, HuntPlan, HuntSite, LEGAL_LIGHT_MINUTES, MAX_PLAN_DAYS, SlotScore, plan_days,
};
pub use policy::ScoringPolicy;
pub use scorer::{ActivityScorer, FactorContribution, ScoreResult, ScoringInput};
pub use tips::{build_tips, situational_tips, terrain_tip};
