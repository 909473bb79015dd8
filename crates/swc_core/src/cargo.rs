//! Cargo manifests and carrier selection.
//!
//! A manifest counts ships by type; its weight and volume totals decide which
//! catalog ships can carry the whole lot in a docking bay.

use serde::{Deserialize, Serialize};

use crate::{CargoTotals, CoreError, ShipDef, ShipId};

/// True if `ship` has a docking bay and room for `totals`. Equal capacity is enough.
pub fn can_carry(ship: &ShipDef, totals: CargoTotals) -> bool {
    ship.has_docking_bay
        && ship.weight_capacity_t >= totals.weight_t
        && ship.volume_capacity_m3 >= totals.volume_m3
}

/// Catalog ships able to carry `totals`, in catalog order. May be empty.
pub fn filter_carriers(catalog: &[ShipDef], totals: CargoTotals) -> Vec<&ShipDef> {
    catalog
        .iter()
        .filter(|ship| can_carry(ship, totals))
        .collect()
}

/// Ships of the given class, or the whole catalog when `class` is `None`.
pub fn ships_in_class<'a>(catalog: &'a [ShipDef], class: Option<&str>) -> Vec<&'a ShipDef> {
    catalog
        .iter()
        .filter(|ship| class.map_or(true, |class| ship.class == class))
        .collect()
}

/// Distinct ship classes in first-seen catalog order.
pub fn ship_classes(catalog: &[ShipDef]) -> Vec<&str> {
    let mut classes: Vec<&str> = Vec::new();
    for ship in catalog {
        if !classes.contains(&ship.class.as_str()) {
            classes.push(ship.class.as_str());
        }
    }
    classes
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub ship: ShipId,
    pub count: u32,
}

/// Counted ships waiting to be transported.
///
/// Entries keep the order in which each type was first added. Counts only
/// grow; the only way to remove anything is [`CargoManifest::clear`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CargoManifest {
    entries: Vec<ManifestEntry>,
}

impl CargoManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` ships of one type. A zero count changes nothing.
    pub fn add(&mut self, ship: ShipId, count: u32) {
        if count == 0 {
            return;
        }
        match self.entries.iter_mut().find(|entry| entry.ship == ship) {
            Some(entry) => entry.count = entry.count.saturating_add(count),
            None => self.entries.push(ManifestEntry { ship, count }),
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count_of(&self, ship: &ShipId) -> u32 {
        self.entries
            .iter()
            .find(|entry| &entry.ship == ship)
            .map_or(0, |entry| entry.count)
    }

    /// Total number of ships across all types.
    pub fn ship_count(&self) -> u64 {
        self.entries.iter().map(|entry| u64::from(entry.count)).sum()
    }
}

/// Sums weight and volume over the manifest using catalog records.
pub fn cargo_totals(manifest: &CargoManifest, catalog: &[ShipDef]) -> Result<CargoTotals, CoreError> {
    manifest
        .entries()
        .iter()
        .try_fold(CargoTotals::default(), |totals, entry| {
            let def = catalog
                .iter()
                .find(|def| def.id == entry.ship)
                .ok_or_else(|| CoreError::UnknownShip(entry.ship.clone()))?;
            let count = f64::from(entry.count);
            Ok(CargoTotals {
                weight_t: totals.weight_t + def.weight_t * count,
                volume_m3: totals.volume_m3 + def.volume_m3 * count,
            })
        })
}
