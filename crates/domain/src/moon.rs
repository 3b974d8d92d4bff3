// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::serde_formats::iso_date;
use serde::{Deserialize, Serialize};
use time::Date;

/// Moon phase for one date, as reported by an external almanac.
///
/// Display-only; the moon never feeds the numeric score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoonRecord {
    #[serde(with = "iso_date")]
    pub date: Date,
    pub phase_name: String,
    /// Illuminated fraction in `[0, 1]`.
    pub illumination: f64,
}

impl MoonRecord {
    /// Creates a record, normalizing the illumination.
    ///
    /// Providers disagree on scale: values above 1 are read as a
    /// percentage. The result is clamped to `[0, 1]`; non-finite input
    /// becomes 0.
    #[must_use]
    pub fn new(date: Date, phase_name: impl Into<String>, illumination: f64) -> Self {
        Self {
            date,
            phase_name: phase_name.into(),
            illumination: normalize_illumination(illumination),
        }
    }

    /// Returns a copy with the illumination normalized.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.illumination = normalize_illumination(self.illumination);
        self
    }

    /// Illumination as a whole percentage.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn illumination_percent(&self) -> u8 {
        (self.illumination * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

fn normalize_illumination(raw: f64) -> f64 {
    if !raw.is_finite() {
        return 0.0;
    }
    let fraction: f64 = if raw > 1.0 { raw / 100.0 } else { raw };
    fraction.clamp(0.0, 1.0)
}
