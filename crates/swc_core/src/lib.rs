//! `swc_core`: travel-time and cargo-capacity math for Star Wars Combine.
//!
//! No IO. Catalogs are loaded elsewhere and passed in; session state
//! (`RouteBuilder`, `CargoManifest`) is owned by the caller.

mod cargo;
mod error;
mod eta;
mod route;
mod types;
pub mod units;

#[cfg(any(test, feature = "test-support"))]
pub mod test_fixtures;

pub use cargo::{
    can_carry, cargo_totals, filter_carriers, ship_classes, ships_in_class, CargoManifest,
    ManifestEntry,
};
pub use error::CoreError;
pub use eta::{
    chebyshev_distance, compute_eta, pilot_skill_coefficient, raw_eta_minutes,
    MINUTES_PER_GRID_UNIT,
};
pub use route::{route_eta, RouteBuilder};
pub use types::*;
