//! Type definitions for `swc_core`.
//!
//! Catalog records, route and cargo value types, and the name newtypes
//! shared by the loader and the CLI.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Name newtypes
// ---------------------------------------------------------------------------

macro_rules! string_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub String);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

string_id!(ShipId);
string_id!(SystemName);

/// Label used for waypoints that are not catalog systems.
pub const DEEP_SPACE: &str = "Deep Space";

// ---------------------------------------------------------------------------
// Grid and travel
// ---------------------------------------------------------------------------

/// A point on the galaxy grid. No bounds are enforced.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One stop on a route.
///
/// `hyperspeed` applies to the leg arriving at this stop, so the first
/// waypoint's value is never used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub label: String,
    /// `None` for Deep Space stops.
    pub sector: Option<String>,
    pub coordinate: Coordinate,
    pub hyperspeed: i32,
}

impl Waypoint {
    pub fn deep_space(coordinate: Coordinate, hyperspeed: i32) -> Self {
        Self {
            label: DEEP_SPACE.to_string(),
            sector: None,
            coordinate,
            hyperspeed,
        }
    }
}

/// Travel time split into whole days, hours and minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Eta {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
}

impl Eta {
    pub const MINUTES_PER_DAY: u64 = 1440;
    pub const MINUTES_PER_HOUR: u64 = 60;

    /// Decomposes a raw minute count, truncating every component.
    ///
    /// Negative or NaN input decomposes to zero.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_minutes(raw: f64) -> Self {
        let raw = if raw.is_nan() { 0.0 } else { raw.max(0.0) };
        let day = Self::MINUTES_PER_DAY as f64;
        let hour = Self::MINUTES_PER_HOUR as f64;
        Self {
            days: (raw / day).floor() as u64,
            hours: ((raw % day) / hour).floor() as u64,
            minutes: (raw % hour).floor() as u64,
        }
    }

    pub fn from_whole_minutes(total: u64) -> Self {
        Self {
            days: total / Self::MINUTES_PER_DAY,
            hours: (total % Self::MINUTES_PER_DAY) / Self::MINUTES_PER_HOUR,
            minutes: total % Self::MINUTES_PER_HOUR,
        }
    }

    /// Recomposes the minute count, saturating at `u64::MAX`.
    pub fn total_minutes(&self) -> u64 {
        self.days
            .saturating_mul(Self::MINUTES_PER_DAY)
            .saturating_add(self.hours.saturating_mul(Self::MINUTES_PER_HOUR))
            .saturating_add(self.minutes)
    }
}

impl fmt::Display for Eta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}D {}H {}M", self.days, self.hours, self.minutes)
    }
}

/// One computed leg of a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegEta {
    pub from: String,
    pub to: String,
    pub eta: Eta,
}

/// Per-leg ETAs plus their sum.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RouteEta {
    pub legs: Vec<LegEta>,
    pub total: Eta,
}

// ---------------------------------------------------------------------------
// Catalog records
// ---------------------------------------------------------------------------

/// A row of the galaxy catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemDef {
    pub name: SystemName,
    pub sector: String,
    pub coordinate: Coordinate,
    pub owner: String,
}

/// A ship from the vehicle catalog, normalized to tons.
///
/// The same record describes a ship as a carrier (capacities, docking bay)
/// and as cargo (its own weight and volume).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipDef {
    pub id: ShipId,
    pub class: String,
    pub hyperspeed: String,
    pub hangar_bay: String,
    pub landing_capacity: String,
    pub tractor_beams: String,
    pub has_docking_bay: bool,
    pub weight_capacity_t: f64,
    pub volume_capacity_m3: f64,
    pub weight_t: f64,
    pub volume_m3: f64,
}

/// Summed weight and volume of a cargo manifest.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CargoTotals {
    pub weight_t: f64,
    pub volume_m3: f64,
}
