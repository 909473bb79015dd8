//! Shared test fixtures for swc_core and downstream crates.
//!
//! `sample_fleet()` is a small mixed catalog: two fighters with no cargo
//! capacity and two freighters with docking bays of different sizes.

use crate::{Coordinate, ShipDef, ShipId, SystemDef, SystemName, Waypoint};

/// A ship with a docking bay and the given capacities; weighs 100 t itself.
pub fn carrier(name: &str, weight_capacity_t: f64, volume_capacity_m3: f64) -> ShipDef {
    ShipDef {
        id: ShipId::from(name),
        class: "Freighter".to_string(),
        hyperspeed: "3".to_string(),
        hangar_bay: "No".to_string(),
        landing_capacity: "Yes".to_string(),
        tractor_beams: "0".to_string(),
        has_docking_bay: true,
        weight_capacity_t,
        volume_capacity_m3,
        weight_t: 100.0,
        volume_m3: 500.0,
    }
}

/// A ship with no cargo capacity, used as cargo.
pub fn fighter(name: &str, weight_t: f64, volume_m3: f64) -> ShipDef {
    ShipDef {
        id: ShipId::from(name),
        class: "Fighter".to_string(),
        hyperspeed: "6".to_string(),
        hangar_bay: "No".to_string(),
        landing_capacity: "Yes".to_string(),
        tractor_beams: "0".to_string(),
        has_docking_bay: false,
        weight_capacity_t: 0.0,
        volume_capacity_m3: 0.0,
        weight_t,
        volume_m3,
    }
}

pub fn sample_fleet() -> Vec<ShipDef> {
    vec![
        fighter("X-wing", 12.5, 60.0),
        fighter("TIE Fighter", 6.0, 35.0),
        carrier("YT-1300", 100.0, 400.0),
        carrier("Action VI Transport", 30_000.0, 120_000.0),
    ]
}

pub fn system(name: &str, x: f64, y: f64) -> SystemDef {
    SystemDef {
        name: SystemName::from(name),
        sector: "Test Sector".to_string(),
        coordinate: Coordinate::new(x, y),
        owner: "Nobody".to_string(),
    }
}

pub fn waypoint(label: &str, x: f64, y: f64, hyperspeed: i32) -> Waypoint {
    Waypoint {
        label: label.to_string(),
        sector: None,
        coordinate: Coordinate::new(x, y),
        hyperspeed,
    }
}
