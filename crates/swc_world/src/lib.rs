//! Catalog loading shared by the CLI and tests.
//!
//! Reads `galaxy_db.csv` and `swc_ships_db.csv` from a content directory,
//! normalizes ship weights to tons, and validates the result.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use swc_core::{
    units::{parse_tons, parse_volume},
    Coordinate, CoreError, ShipDef, ShipId, SystemDef, SystemName, Waypoint, DEEP_SPACE,
};

pub const GALAXY_FILE: &str = "galaxy_db.csv";
pub const SHIPS_FILE: &str = "swc_ships_db.csv";

#[derive(Deserialize)]
struct SystemRow {
    #[serde(rename = "System")]
    system: String,
    #[serde(rename = "Sector")]
    sector: String,
    #[serde(rename = "Coordinate x")]
    x: f64,
    #[serde(rename = "Coordinate y")]
    y: f64,
    #[serde(rename = "Owner", default)]
    owner: String,
}

#[derive(Deserialize)]
struct ShipRow {
    #[serde(rename = "Class")]
    class: String,
    #[serde(rename = "Ship")]
    ship: String,
    #[serde(rename = "Hyperspeed", default)]
    hyperspeed: String,
    #[serde(rename = "Hangar Bay", default)]
    hangar_bay: String,
    #[serde(rename = "Landing Capacity", default)]
    landing_capacity: String,
    #[serde(rename = "Tractor Beams", default)]
    tractor_beams: String,
    #[serde(rename = "Weight Cap")]
    weight_cap: String,
    #[serde(rename = "Volume Cap")]
    volume_cap: String,
    #[serde(rename = "Docking Bay")]
    docking_bay: String,
    #[serde(rename = "Weight")]
    weight: String,
    #[serde(rename = "Volume")]
    volume: String,
}

impl ShipRow {
    fn into_def(self) -> Result<ShipDef> {
        let has_docking_bay = parse_docking_bay(&self.docking_bay)?;
        Ok(ShipDef {
            weight_capacity_t: parse_tons(&self.weight_cap).context("column 'Weight Cap'")?,
            volume_capacity_m3: parse_volume(&self.volume_cap).context("column 'Volume Cap'")?,
            weight_t: parse_tons(&self.weight).context("column 'Weight'")?,
            volume_m3: parse_volume(&self.volume).context("column 'Volume'")?,
            id: ShipId(self.ship),
            class: self.class,
            hyperspeed: self.hyperspeed,
            hangar_bay: self.hangar_bay,
            landing_capacity: self.landing_capacity,
            tractor_beams: self.tractor_beams,
            has_docking_bay,
        })
    }
}

fn parse_docking_bay(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "yes" => Ok(true),
        "no" | "" => Ok(false),
        other => bail!("column 'Docking Bay': expected 'Yes' or 'No', got '{other}'"),
    }
}

fn open_csv(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))
}

/// Loads the galaxy catalog. Rows are numbered from 2 (after the header) in errors.
pub fn load_galaxy(path: &Path) -> Result<Vec<SystemDef>> {
    let mut reader = open_csv(path)?;
    let mut systems = Vec::new();
    for (index, row) in reader.deserialize::<SystemRow>().enumerate() {
        let line = index + 2;
        let row = row.with_context(|| format!("parsing {} row {line}", path.display()))?;
        systems.push(SystemDef {
            name: SystemName(row.system),
            sector: row.sector,
            coordinate: Coordinate::new(row.x, row.y),
            owner: row.owner,
        });
    }
    tracing::info!(path = %path.display(), systems = systems.len(), "loaded galaxy catalog");
    Ok(systems)
}

/// Loads the ship catalog, converting every weight to tons.
///
/// The first malformed row aborts the load; nothing is defaulted.
pub fn load_ships(path: &Path) -> Result<Vec<ShipDef>> {
    let mut reader = open_csv(path)?;
    let mut ships = Vec::new();
    for (index, row) in reader.deserialize::<ShipRow>().enumerate() {
        let line = index + 2;
        let def = row
            .map_err(anyhow::Error::from)
            .and_then(ShipRow::into_def)
            .with_context(|| format!("parsing {} row {line}", path.display()))?;
        tracing::debug!(ship = %def.id, weight_t = def.weight_t, "normalized ship record");
        ships.push(def);
    }
    tracing::info!(path = %path.display(), ships = ships.len(), "loaded ship catalog");
    Ok(ships)
}

/// Where a route stop comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum SystemChoice {
    Named(String),
    DeepSpace(Coordinate),
}

/// Both catalogs, loaded once per session.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub systems: Vec<SystemDef>,
    pub ships: Vec<ShipDef>,
}

impl Catalog {
    pub fn system(&self, name: &str) -> Option<&SystemDef> {
        self.systems.iter().find(|system| system.name.0 == name)
    }

    pub fn ship(&self, id: &ShipId) -> Option<&ShipDef> {
        self.ships.iter().find(|ship| &ship.id == id)
    }

    pub fn systems_in_sector<'a>(&'a self, sector: Option<&'a str>) -> impl Iterator<Item = &'a SystemDef> {
        self.systems
            .iter()
            .filter(move |system| sector.map_or(true, |sector| system.sector == sector))
    }

    /// Builds a route stop. Deep Space skips the catalog entirely.
    pub fn waypoint(&self, choice: &SystemChoice, hyperspeed: i32) -> Result<Waypoint, CoreError> {
        match choice {
            SystemChoice::DeepSpace(coordinate) => Ok(Waypoint::deep_space(*coordinate, hyperspeed)),
            SystemChoice::Named(name) if name == DEEP_SPACE => {
                Err(CoreError::UnknownSystem(name.clone()))
            }
            SystemChoice::Named(name) => {
                let system = self
                    .system(name)
                    .ok_or_else(|| CoreError::UnknownSystem(name.clone()))?;
                Ok(Waypoint {
                    label: system.name.0.clone(),
                    sector: Some(system.sector.clone()),
                    coordinate: system.coordinate,
                    hyperspeed,
                })
            }
        }
    }
}

/// Validates loaded catalogs, panicking on any authoring error.
///
/// Catches mistakes like duplicate ship names (cargo lookups would become
/// ambiguous), negative capacities, or non-finite coordinates.
pub fn validate_content(catalog: &Catalog) {
    let mut system_names: HashSet<&str> = HashSet::new();
    for system in &catalog.systems {
        assert!(!system.name.0.is_empty(), "galaxy catalog has a system with an empty name");
        assert!(
            system.name.0 != DEEP_SPACE,
            "galaxy catalog must not define a system named '{DEEP_SPACE}'"
        );
        assert!(
            system_names.insert(system.name.0.as_str()),
            "system '{}' appears more than once",
            system.name
        );
        assert!(
            system.coordinate.x.is_finite() && system.coordinate.y.is_finite(),
            "system '{}' has non-finite coordinates",
            system.name
        );
    }

    let mut ship_ids: HashSet<&ShipId> = HashSet::new();
    for ship in &catalog.ships {
        assert!(!ship.id.0.is_empty(), "ship catalog has a ship with an empty name");
        assert!(ship_ids.insert(&ship.id), "ship '{}' appears more than once", ship.id);
        for (field, value) in [
            ("weight capacity", ship.weight_capacity_t),
            ("volume capacity", ship.volume_capacity_m3),
            ("weight", ship.weight_t),
            ("volume", ship.volume_m3),
        ] {
            assert!(value >= 0.0, "ship '{}' has negative {field}: {value}", ship.id);
        }
    }
}

pub fn load_content(content_dir: &str) -> Result<Catalog> {
    let dir = Path::new(content_dir);
    let systems = load_galaxy(&dir.join(GALAXY_FILE)).with_context(|| format!("reading {GALAXY_FILE}"))?;
    let ships = load_ships(&dir.join(SHIPS_FILE)).with_context(|| format!("reading {SHIPS_FILE}"))?;
    let catalog = Catalog { systems, ships };
    validate_content(&catalog);
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use swc_core::test_fixtures::{sample_fleet, system};

    const SHIP_HEADER: &str = "Class,Ship,Hyperspeed,Hangar Bay,Landing Capacity,Tractor Beams,Weight Cap,Volume Cap,Docking Bay,Weight,Volume\n";

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn sample_catalog() -> Catalog {
        Catalog {
            systems: vec![system("Alpha", 0.0, 0.0), system("Beta", 10.0, -4.0)],
            ships: sample_fleet(),
        }
    }

    #[test]
    fn test_load_ships_normalizes_units() {
        let file = write_temp(&format!(
            "{SHIP_HEADER}\
             Fighter,Z-95,6,No,Yes,0,0,0,No,500 kg,40\n\
             Freighter,Hauler,3,Yes,Yes,2,\"1,500 t\",\"2,000\",Yes,3 t,900\n\
             Freighter,Barge,2,No,Yes,1,250,800,yes,2.0,700\n"
        ));
        let ships = load_ships(file.path()).unwrap();
        assert_eq!(ships.len(), 3);
        assert!((ships[0].weight_t - 0.5).abs() < 1e-9);
        assert!(!ships[0].has_docking_bay);
        assert!((ships[1].weight_capacity_t - 1500.0).abs() < 1e-9);
        assert!((ships[1].volume_capacity_m3 - 2000.0).abs() < 1e-9);
        assert!((ships[1].weight_t - 3.0).abs() < 1e-9);
        assert!(ships[1].has_docking_bay);
        assert!((ships[2].weight_t - 2.0).abs() < 1e-9);
        assert!(ships[2].has_docking_bay);
    }

    #[test]
    fn test_load_ships_rejects_bad_weight() {
        let file = write_temp(&format!(
            "{SHIP_HEADER}\
             Fighter,Z-95,6,No,Yes,0,0,0,No,500 kg,40\n\
             Fighter,Broken,6,No,Yes,0,0,0,No,heavy,40\n"
        ));
        let err = load_ships(file.path()).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("row 3"), "{message}");
        assert!(message.contains("heavy"), "{message}");
    }

    #[test]
    fn test_load_ships_rejects_unknown_docking_bay() {
        let file = write_temp(&format!(
            "{SHIP_HEADER}Freighter,Hauler,3,No,Yes,0,10,10,Maybe,1,1\n"
        ));
        let err = load_ships(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("Docking Bay"));
    }

    #[test]
    fn test_load_galaxy_reads_coordinates() {
        let file = write_temp(
            "System,Sector,Coordinate x,Coordinate y,Owner\n\
             Coruscant,Corusca,0,0,Galactic Empire\n\
             Tatooine, Arkanis ,160,-98,\n",
        );
        let systems = load_galaxy(file.path()).unwrap();
        assert_eq!(systems.len(), 2);
        assert_eq!(systems[1].name, SystemName::from("Tatooine"));
        assert_eq!(systems[1].sector, "Arkanis");
        assert!((systems[1].coordinate.y + 98.0).abs() < 1e-9);
        assert!(systems[1].owner.is_empty());
    }

    #[test]
    fn test_load_galaxy_rejects_non_numeric_coordinate() {
        let file = write_temp(
            "System,Sector,Coordinate x,Coordinate y,Owner\n\
             Coruscant,Corusca,zero,0,Galactic Empire\n",
        );
        assert!(load_galaxy(file.path()).is_err());
    }

    #[test]
    fn test_waypoint_from_named_system() {
        let catalog = sample_catalog();
        let waypoint = catalog
            .waypoint(&SystemChoice::Named("Beta".to_string()), 4)
            .unwrap();
        assert_eq!(waypoint.label, "Beta");
        assert_eq!(waypoint.coordinate, Coordinate::new(10.0, -4.0));
        assert_eq!(waypoint.hyperspeed, 4);
    }

    #[test]
    fn test_waypoint_deep_space_bypasses_catalog() {
        let catalog = Catalog::default();
        let waypoint = catalog
            .waypoint(&SystemChoice::DeepSpace(Coordinate::new(7.0, 8.0)), 2)
            .unwrap();
        assert_eq!(waypoint.label, DEEP_SPACE);
        assert_eq!(waypoint.coordinate, Coordinate::new(7.0, 8.0));
    }

    #[test]
    fn test_waypoint_unknown_system() {
        let catalog = sample_catalog();
        let err = catalog
            .waypoint(&SystemChoice::Named("Nowhere".to_string()), 1)
            .unwrap_err();
        assert_eq!(err, CoreError::UnknownSystem("Nowhere".to_string()));
    }

    #[test]
    fn test_systems_in_sector() {
        let mut catalog = sample_catalog();
        catalog.systems[1].sector = "Other".to_string();
        let names: Vec<&str> = catalog
            .systems_in_sector(Some("Other"))
            .map(|system| system.name.0.as_str())
            .collect();
        assert_eq!(names, vec!["Beta"]);
        assert_eq!(catalog.systems_in_sector(None).count(), 2);
    }

    #[test]
    fn test_valid_content_passes_validation() {
        validate_content(&sample_catalog());
    }

    #[test]
    #[should_panic(expected = "appears more than once")]
    fn test_duplicate_ship_panics() {
        let mut catalog = sample_catalog();
        let duplicate = catalog.ships[0].clone();
        catalog.ships.push(duplicate);
        validate_content(&catalog);
    }

    #[test]
    #[should_panic(expected = "negative weight capacity")]
    fn test_negative_capacity_panics() {
        let mut catalog = sample_catalog();
        catalog.ships[2].weight_capacity_t = -1.0;
        validate_content(&catalog);
    }

    #[test]
    #[should_panic(expected = "must not define a system named")]
    fn test_deep_space_system_name_panics() {
        let mut catalog = sample_catalog();
        catalog.systems.push(system(DEEP_SPACE, 1.0, 1.0));
        validate_content(&catalog);
    }
}
