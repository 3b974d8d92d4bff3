// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use buckcast_domain::DomainError;
use serde::{Deserialize, Serialize};

/// Which scoring formula to apply.
///
/// The two policies produce scores on different scales and classify them
/// with their own thresholds; a score from one must never be classified
/// with the other's table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoringPolicy {
    /// Integer base-plus-modifiers score in `[20, 90]` with a chance estimate.
    #[default]
    Additive,
    /// Weighted sum of normalized factors in `[0, 100]`.
    Weighted,
}

impl ScoringPolicy {
    /// Parses a policy from its wire name.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a known policy.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "additive" => Ok(Self::Additive),
            "weighted" => Ok(Self::Weighted),
            _ => Err(DomainError::InvalidScoringPolicy(s.to_string())),
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Additive => "additive",
            Self::Weighted => "weighted",
        }
    }
}

impl std::fmt::Display for ScoringPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
