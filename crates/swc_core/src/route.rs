//! Multi-stop routes.
//!
//! A route is folded pairwise: each leg is computed on its own, truncated to
//! whole minutes, and the truncated minutes are summed into the total.

use crate::{eta::compute_eta, Eta, LegEta, RouteEta, Waypoint};

/// Computes every leg of a route and their total.
///
/// Leg `i` runs from `waypoints[i - 1]` to `waypoints[i]` at the hyperspeed
/// stored on `waypoints[i]`. Fewer than two waypoints yields no legs.
pub fn route_eta(waypoints: &[Waypoint], pilot_skill: i32) -> RouteEta {
    let legs: Vec<LegEta> = waypoints
        .windows(2)
        .map(|pair| {
            let (prev, curr) = (&pair[0], &pair[1]);
            LegEta {
                from: prev.label.clone(),
                to: curr.label.clone(),
                eta: compute_eta(prev.coordinate, curr.coordinate, pilot_skill, curr.hyperspeed),
            }
        })
        .collect();
    let total_minutes = legs
        .iter()
        .fold(0_u64, |total, leg| total.saturating_add(leg.eta.total_minutes()));
    RouteEta {
        legs,
        total: Eta::from_whole_minutes(total_minutes),
    }
}

/// Caller-owned route under construction.
#[derive(Debug, Clone, Default)]
pub struct RouteBuilder {
    waypoints: Vec<Waypoint>,
}

impl RouteBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, waypoint: Waypoint) -> &mut Self {
        self.waypoints.push(waypoint);
        self
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn clear(&mut self) {
        self.waypoints.clear();
    }

    pub fn eta(&self, pilot_skill: i32) -> RouteEta {
        route_eta(&self.waypoints, pilot_skill)
    }
}
