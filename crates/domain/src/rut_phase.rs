// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rut phase model for the reference locale.
//!
//! Anchors follow the Georgia DNR rut map for Washington County, GA:
//! peak breeding Oct 27 – Nov 2, with a second rut about four weeks later.
//! The anchor set is rebuilt from the date's own calendar year on every
//! call, so dates on either side of New Year never share anchors.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::{Date, Duration, Month};

/// Days before the peak that still count as pre-rut.
pub const PRE_RUT_WINDOW_DAYS: i64 = 14;

/// Days after the peak during which bucks are locked down with does.
pub const LOCKDOWN_DAYS: i64 = 8;

/// A named phase of the breeding cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RutPhase {
    #[serde(rename = "early")]
    EarlySeason,
    #[serde(rename = "pre")]
    PreRut,
    #[serde(rename = "rut")]
    PeakRut,
    #[serde(rename = "lockdown")]
    Lockdown,
    #[serde(rename = "post")]
    PostRut,
    #[serde(rename = "secondRut")]
    SecondRut,
    #[serde(rename = "late")]
    LateSeason,
    /// Catch-all phase. The calendar never produces it; callers may
    /// select it explicitly.
    #[serde(rename = "general")]
    GeneralSeason,
}

impl RutPhase {
    /// Classifies a date using the anchors for that date's year.
    #[must_use]
    pub fn for_date(date: Date) -> Self {
        RutCalendar::for_year(date.year()).map_or(Self::GeneralSeason, |cal| cal.phase_of(date))
    }

    /// Parses a phase from its wire identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is not recognized.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "early" => Ok(Self::EarlySeason),
            "pre" => Ok(Self::PreRut),
            "rut" => Ok(Self::PeakRut),
            "lockdown" => Ok(Self::Lockdown),
            "post" => Ok(Self::PostRut),
            "secondRut" => Ok(Self::SecondRut),
            "late" => Ok(Self::LateSeason),
            "general" => Ok(Self::GeneralSeason),
            _ => Err(DomainError::InvalidRutPhase(s.to_string())),
        }
    }

    /// Returns the wire identifier of this phase.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EarlySeason => "early",
            Self::PreRut => "pre",
            Self::PeakRut => "rut",
            Self::Lockdown => "lockdown",
            Self::PostRut => "post",
            Self::SecondRut => "secondRut",
            Self::LateSeason => "late",
            Self::GeneralSeason => "general",
        }
    }

    /// Display label shown to hunters.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::EarlySeason => "Early season relative to peak rut",
            Self::PreRut => "Pre-rut (within 2 weeks of peak)",
            Self::PeakRut => "Peak rut (Washington County, GA)",
            Self::Lockdown => "Lockdown (bucks tending does just after peak)",
            Self::PostRut => "Post-peak rut heading toward second rut",
            Self::SecondRut => "Second rut (late November, Washington County, GA)",
            Self::LateSeason => "Late season after second rut",
            Self::GeneralSeason => "General season",
        }
    }

    /// Breeding intensity in `[0, 1]`; the peak carries the maximum.
    #[must_use]
    pub const fn factor(&self) -> f64 {
        match self {
            Self::PeakRut => 1.0,
            Self::SecondRut => 0.90,
            Self::PostRut => 0.80,
            Self::PreRut => 0.75,
            Self::Lockdown => 0.65,
            Self::LateSeason => 0.55,
            Self::EarlySeason | Self::GeneralSeason => 0.50,
        }
    }

    /// Whether bucks are actively cruising for does (peak or second rut).
    #[must_use]
    pub const fn is_breeding_peak(&self) -> bool {
        matches!(self, Self::PeakRut | Self::SecondRut)
    }
}

/// The phase of a specific date together with its display label and factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RutAssessment {
    pub phase: RutPhase,
    pub label: &'static str,
    pub factor: f64,
}

impl RutAssessment {
    /// Builds an assessment for an already-known phase.
    #[must_use]
    pub const fn from_phase(phase: RutPhase) -> Self {
        Self {
            phase,
            label: phase.label(),
            factor: phase.factor(),
        }
    }
}

/// Assesses the rut phase for a date.
#[must_use]
pub fn assess_rut_phase(date: Date) -> RutAssessment {
    RutAssessment::from_phase(RutPhase::for_date(date))
}

/// The fixed anchor dates for one calendar year.
///
/// All windows are inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RutCalendar {
    peak_start: Date,
    peak_end: Date,
    lockdown_end: Date,
    second_start: Date,
    second_end: Date,
}

impl RutCalendar {
    /// Builds the anchor set for a year.
    ///
    /// # Errors
    ///
    /// Returns an error if the year is outside the supported date range.
    pub fn for_year(year: i32) -> Result<Self, DomainError> {
        let anchor = |month: Month, day: u8| {
            Date::from_calendar_date(year, month, day).map_err(|e| DomainError::InvalidDate {
                input: format!("{year}-{month}-{day}"),
                reason: e.to_string(),
            })
        };

        let peak_end: Date = anchor(Month::November, 2)?;
        let lockdown_end: Date = peak_end
            .checked_add(Duration::days(LOCKDOWN_DAYS))
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: format!("deriving lockdown end for {year}"),
            })?;

        Ok(Self {
            peak_start: anchor(Month::October, 27)?,
            peak_end,
            lockdown_end,
            second_start: anchor(Month::November, 24)?,
            second_end: anchor(Month::November, 30)?,
        })
    }

    #[must_use]
    pub const fn peak_start(&self) -> Date {
        self.peak_start
    }

    #[must_use]
    pub const fn peak_end(&self) -> Date {
        self.peak_end
    }

    #[must_use]
    pub const fn lockdown_end(&self) -> Date {
        self.lockdown_end
    }

    #[must_use]
    pub const fn second_start(&self) -> Date {
        self.second_start
    }

    #[must_use]
    pub const fn second_end(&self) -> Date {
        self.second_end
    }

    /// Classifies a date against this year's anchors, first match wins.
    ///
    /// The caller is responsible for passing a date from the same year.
    #[must_use]
    pub fn phase_of(&self, date: Date) -> RutPhase {
        if date >= self.peak_start && date <= self.peak_end {
            return RutPhase::PeakRut;
        }
        if date >= self.second_start && date <= self.second_end {
            return RutPhase::SecondRut;
        }
        if date < self.peak_start {
            let days_until_peak: i64 = (self.peak_start - date).whole_days();
            if days_until_peak <= PRE_RUT_WINDOW_DAYS {
                return RutPhase::PreRut;
            }
            return RutPhase::EarlySeason;
        }
        if date > self.peak_end && date <= self.lockdown_end {
            return RutPhase::Lockdown;
        }
        if date > self.lockdown_end && date < self.second_start {
            return RutPhase::PostRut;
        }
        if date > self.second_end {
            return RutPhase::LateSeason;
        }
        RutPhase::GeneralSeason
    }
}
