use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;
use swc_core::{CargoManifest, Coordinate, CoreError, RouteBuilder, ShipId};
use swc_world::{Catalog, SystemChoice};

/// A route saved as JSON: stops in travel order plus the pilot skill.
#[derive(Debug, Deserialize)]
pub struct RoutePlan {
    #[serde(default = "default_pilot_skill")]
    pub pilot_skill: i32,
    pub stops: Vec<StopSpec>,
}

/// Matches the pilot skill slider's starting position.
pub fn default_pilot_skill() -> i32 {
    3
}

fn default_hyperspeed() -> i32 {
    1
}

fn default_count() -> u32 {
    1
}

/// A catalog system stop.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SystemStop {
    pub system: String,
    #[serde(default = "default_hyperspeed")]
    pub hyperspeed: i32,
}

/// A Deep Space stop given by coordinates.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeepSpaceStop {
    pub x: f64,
    pub y: f64,
    #[serde(default = "default_hyperspeed")]
    pub hyperspeed: i32,
}

/// One route stop. A stop naming a system and giving coordinates matches neither shape.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum StopSpec {
    System(SystemStop),
    DeepSpace(DeepSpaceStop),
}

impl StopSpec {
    fn choice(&self) -> (SystemChoice, i32) {
        match self {
            StopSpec::System(stop) => (SystemChoice::Named(stop.system.clone()), stop.hyperspeed),
            StopSpec::DeepSpace(stop) => (
                SystemChoice::DeepSpace(Coordinate::new(stop.x, stop.y)),
                stop.hyperspeed,
            ),
        }
    }
}

impl RoutePlan {
    /// Resolves every stop against the galaxy catalog.
    pub fn build_route(&self, catalog: &Catalog) -> Result<RouteBuilder> {
        let mut route = RouteBuilder::new();
        for (index, stop) in self.stops.iter().enumerate() {
            let (choice, hyperspeed) = stop.choice();
            let waypoint = catalog
                .waypoint(&choice, hyperspeed)
                .with_context(|| format!("route stop {}", index + 1))?;
            tracing::debug!(
                label = %waypoint.label,
                coordinate = %waypoint.coordinate,
                hyperspeed,
                "added stop"
            );
            route.push(waypoint);
        }
        Ok(route)
    }
}

/// A cargo list saved as JSON.
#[derive(Debug, Deserialize)]
pub struct CargoPlan {
    pub cargo: Vec<CargoSpec>,
}

#[derive(Debug, Deserialize)]
pub struct CargoSpec {
    pub ship: String,
    #[serde(default = "default_count")]
    pub count: u32,
}

impl CargoPlan {
    /// Builds the manifest, rejecting ships the catalog does not know.
    pub fn build_manifest(&self, catalog: &Catalog) -> Result<CargoManifest> {
        let mut manifest = CargoManifest::new();
        for spec in &self.cargo {
            let id = ShipId(spec.ship.clone());
            if catalog.ship(&id).is_none() {
                return Err(CoreError::UnknownShip(id).into());
            }
            manifest.add(id, spec.count);
        }
        Ok(manifest)
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading {what} file: {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("parsing {what} file: {}", path.display()))
}

pub fn load_route_plan(path: &Path) -> Result<RoutePlan> {
    let plan: RoutePlan = read_json(path, "route plan")?;
    if plan.stops.is_empty() {
        bail!("route plan 'stops' must contain at least one stop");
    }
    Ok(plan)
}

pub fn load_cargo_plan(path: &Path) -> Result<CargoPlan> {
    let plan: CargoPlan = read_json(path, "cargo plan")?;
    if plan.cargo.is_empty() {
        bail!("cargo plan 'cargo' must list at least one ship");
    }
    if let Some(spec) = plan.cargo.iter().find(|spec| spec.count == 0) {
        bail!("cargo plan entry '{}' must have count > 0", spec.ship);
    }
    Ok(plan)
}
