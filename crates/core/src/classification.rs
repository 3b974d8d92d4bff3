// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::policy::ScoringPolicy;
use serde::{Deserialize, Serialize};

/// Discrete rating derived from a score.
///
/// Variants are ordered worst to best so ratings compare naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Classification {
    Poor,
    Fair,
    Good,
    Great,
}

impl Classification {
    /// Classifies a score using the thresholds bound to `policy`.
    #[must_use]
    pub const fn classify(policy: ScoringPolicy, score: u8) -> Self {
        match policy {
            ScoringPolicy::Additive => match score {
                75.. => Self::Great,
                60..=74 => Self::Good,
                50..=59 => Self::Fair,
                _ => Self::Poor,
            },
            ScoringPolicy::Weighted => match score {
                76.. => Self::Great,
                61..=75 => Self::Good,
                41..=60 => Self::Fair,
                _ => Self::Poor,
            },
        }
    }

    /// The word each policy uses for this rating.
    #[must_use]
    pub const fn label(&self, policy: ScoringPolicy) -> &'static str {
        match (policy, self) {
            (ScoringPolicy::Additive, Self::Great) => "High",
            (ScoringPolicy::Additive, Self::Good) => "Solid",
            (ScoringPolicy::Additive, Self::Fair) => "Fair",
            (ScoringPolicy::Additive, Self::Poor) => "Low",
            (ScoringPolicy::Weighted, Self::Great) => "great",
            (ScoringPolicy::Weighted, Self::Good) => "good",
            (ScoringPolicy::Weighted, Self::Fair) => "ok",
            (ScoringPolicy::Weighted, Self::Poor) => "bad",
        }
    }

    #[must_use]
    pub const fn badge(&self) -> &'static str {
        match self {
            Self::Great => "🔥",
            Self::Good => "👍",
            Self::Fair => "⚖️",
            Self::Poor => "😬",
        }
    }

    /// One-sentence advice for a sit with this rating.
    #[must_use]
    pub const fn rating_text(&self) -> &'static str {
        match self {
            Self::Great => {
                "🔥 High odds – this is a sit you don’t want to miss. Stay as long as you can."
            }
            Self::Good => "👍 Solid odds – definitely worth hunting hard in your best spot.",
            Self::Fair => {
                "⚖️ Fair odds – a good deer could still show with the right wind and stealth."
            }
            Self::Poor => {
                "😬 Low odds – maybe treat this as an observation sit or scouting mission."
            }
        }
    }
}
