// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use buckcast_domain::{RutPhase, Terrain, TimeOfDay, WeatherFlags};

const MIDDAY_RUT_TIP: &str =
    "During the rut or second rut, don’t sleep on 10 AM – 2 PM. Cruising bucks can appear out of nowhere.";
const COLD_FRONT_TIP: &str = "You’re hunting behind a front – be set up early, as deer may move earlier in the evening and later into the morning.";
const HIGH_WIND_TIP: &str = "With higher winds, cheat down into leeward sides of hills or thicker cover where deer feel more comfortable.";
const DEFAULT_TIP: &str = "Play the wind perfectly, keep your entry quiet, and give your best spots rest when the wind is wrong.";

/// Setup advice for a cover type.
#[must_use]
pub const fn terrain_tip(terrain: Terrain) -> &'static str {
    match terrain {
        Terrain::PinesClearcuts => {
            "Focus on edges where thick pines meet clearcuts. Hunt downwind of bedding, especially in corners and funnels, and sneak in through cover."
        }
        Terrain::Hardwoods => {
            "Key in on ridges, saddles, and downwind sides of oak flats. Set up on travel routes from bedding to feed in the morning."
        }
        Terrain::AgEdges => {
            "Evenings on the downwind edge of fields are prime. Look for cover fingers, ditches, or fence gaps that channel deer into the open."
        }
        Terrain::Mixed => {
            "Hunt hard transitions between cover types and places where several trails converge while still keeping the wind safe."
        }
    }
}

/// Situational tips, or the default tip when nothing special applies.
///
/// Never empty.
#[must_use]
pub fn situational_tips(
    time_of_day: TimeOfDay,
    phase: RutPhase,
    flags: &WeatherFlags,
) -> Vec<&'static str> {
    let mut tips: Vec<&'static str> = Vec::new();

    if phase.is_breeding_peak() && matches!(time_of_day, TimeOfDay::Midday | TimeOfDay::AllDay) {
        tips.push(MIDDAY_RUT_TIP);
    }
    if flags.cold_front {
        tips.push(COLD_FRONT_TIP);
    }
    if flags.high_wind {
        tips.push(HIGH_WIND_TIP);
    }
    if tips.is_empty() {
        tips.push(DEFAULT_TIP);
    }
    tips
}

/// The terrain tip followed by the situational tips.
#[must_use]
pub fn build_tips(
    terrain: Terrain,
    time_of_day: TimeOfDay,
    phase: RutPhase,
    flags: &WeatherFlags,
) -> Vec<String> {
    std::iter::once(terrain_tip(terrain))
        .chain(situational_tips(time_of_day, phase, flags))
        .map(String::from)
        .collect()
}
