//! Travel time on the galaxy grid.
//!
//! Movement is Chebyshev: a diagonal step costs the same as an axis step.
//! One grid unit takes 120 minutes at hyperspeed 1 with no pilot bonus.

use crate::{Coordinate, Eta};

/// Minutes to cross one grid unit at hyperspeed 1.
pub const MINUTES_PER_GRID_UNIT: f64 = 120.0;

/// Travel-time multiplier for a pilot skill level. Unknown levels get no bonus.
pub fn pilot_skill_coefficient(skill: i32) -> f64 {
    match skill {
        1 => 6857.0 / 7200.0,
        2 => 1309.0 / 1440.0,
        3 => 313.0 / 360.0,
        4 => 5.0 / 6.0,
        5 => 4.0 / 5.0,
        _ => 1.0,
    }
}

pub fn chebyshev_distance(a: Coordinate, b: Coordinate) -> f64 {
    (b.x - a.x).abs().max((b.y - a.y).abs())
}

/// Unrounded travel time in minutes. Hyperspeed below 1 counts as 1.
pub fn raw_eta_minutes(
    origin: Coordinate,
    destination: Coordinate,
    pilot_skill: i32,
    hyperspeed: i32,
) -> f64 {
    let hyperspeed = hyperspeed.max(1);
    let distance = chebyshev_distance(origin, destination);
    MINUTES_PER_GRID_UNIT * pilot_skill_coefficient(pilot_skill) * distance
        / f64::from(hyperspeed)
}

/// Travel time between two coordinates, truncated to whole minutes.
pub fn compute_eta(
    origin: Coordinate,
    destination: Coordinate,
    pilot_skill: i32,
    hyperspeed: i32,
) -> Eta {
    Eta::from_minutes(raw_eta_minutes(
        origin,
        destination,
        pilot_skill,
        hyperspeed,
    ))
}
