// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// The part of the day a hunter plans to sit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeOfDay {
    /// First light through mid-morning.
    Morning,
    /// Roughly 10 AM to 2 PM.
    Midday,
    /// Mid-afternoon through last light.
    Evening,
    /// Sunrise to sunset.
    AllDay,
}

impl TimeOfDay {
    /// All variants, in the order they are offered to users.
    pub const ALL: [Self; 4] = [Self::Morning, Self::Midday, Self::Evening, Self::AllDay];

    /// Parses a time of day from its wire name.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a known time of day.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "morning" => Ok(Self::Morning),
            "midday" => Ok(Self::Midday),
            "evening" => Ok(Self::Evening),
            "allDay" => Ok(Self::AllDay),
            _ => Err(DomainError::InvalidTimeOfDay(s.to_string())),
        }
    }

    /// Returns the wire name of this time of day.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Midday => "midday",
            Self::Evening => "evening",
            Self::AllDay => "allDay",
        }
    }
}

/// Dominant cover type around the stand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Terrain {
    /// Planted pines broken up by clearcuts.
    PinesClearcuts,
    /// Oak ridges, saddles and flats.
    Hardwoods,
    /// Edges of agricultural fields.
    AgEdges,
    /// A mix of cover types.
    Mixed,
}

impl Terrain {
    /// Parses a terrain from its wire name.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a known terrain.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "pinesClearcuts" => Ok(Self::PinesClearcuts),
            "hardwoods" => Ok(Self::Hardwoods),
            "agEdges" => Ok(Self::AgEdges),
            "mixed" => Ok(Self::Mixed),
            _ => Err(DomainError::InvalidTerrain(s.to_string())),
        }
    }

    /// Returns the wire name of this terrain.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PinesClearcuts => "pinesClearcuts",
            Self::Hardwoods => "hardwoods",
            Self::AgEdges => "agEdges",
            Self::Mixed => "mixed",
        }
    }
}

/// How much competing hunter traffic the property sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HuntingPressure {
    Low,
    Medium,
    High,
}

impl HuntingPressure {
    /// Parses a hunting pressure level from its wire name.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a known level.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(DomainError::InvalidHuntingPressure(s.to_string())),
        }
    }

    /// Returns the wire name of this pressure level.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// A validated latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Creates a new coordinate pair.
    ///
    /// # Errors
    ///
    /// Returns an error if either value is not finite or lies outside
    /// `[-90, 90]` (latitude) or `[-180, 180]` (longitude).
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(DomainError::InvalidCoordinate {
                axis: "latitude",
                value: latitude,
            });
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::InvalidCoordinate {
                axis: "longitude",
                value: longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// The situational inputs to a single activity score.
///
/// Optional readings fall back to a neutral factor when absent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringFactors {
    pub time_of_day: TimeOfDay,
    /// Representative air temperature for the sit, in °F.
    pub temperature_f: f64,
    /// Wind speed in mph; negative or non-finite readings are treated as calm.
    pub wind_speed_mph: f64,
    /// Precipitation in millimetres, if reported.
    pub precipitation_mm: Option<f64>,
    /// Barometric pressure in hPa, if reported.
    pub barometric_pressure_hpa: Option<f64>,
    pub terrain: Terrain,
    pub hunting_pressure: HuntingPressure,
}
