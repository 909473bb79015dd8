//! Plain-text rendering for route and cargo results.
//!
//! Everything here returns a `String`; `main` decides where it goes.

use swc_core::{CargoManifest, CargoTotals, RouteEta, ShipDef, SystemDef, Waypoint};

const NO_CARRIER: &str =
    "No ships available with enough capacity to transport the selected cargo.";

fn pad_line(cells: &[&str], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    padded.join("  ").trim_end().to_string()
}

fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = pad_line(headers, &widths);
    out.push('\n');
    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    out.push_str(&rule.join("  "));
    out.push('\n');
    for row in rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push_str(&pad_line(&cells, &widths));
        out.push('\n');
    }
    out
}

fn sector_label(waypoint: &Waypoint) -> &str {
    waypoint.sector.as_deref().unwrap_or("-")
}

/// Route table, one line per leg, and the total.
pub fn route_summary(waypoints: &[Waypoint], eta: &RouteEta) -> String {
    let rows: Vec<Vec<String>> = waypoints
        .iter()
        .map(|waypoint| {
            vec![
                waypoint.label.clone(),
                sector_label(waypoint).to_string(),
                waypoint.coordinate.x.to_string(),
                waypoint.coordinate.y.to_string(),
                waypoint.hyperspeed.to_string(),
            ]
        })
        .collect();

    let mut out = String::from("Current Route:\n");
    out.push_str(&render_table(
        &["System", "Sector", "Coordinate x", "Coordinate y", "Hyperspeed"],
        &rows,
    ));
    out.push_str("\nETA Details:\n");
    for leg in &eta.legs {
        out.push_str(&format!("ETA from {} to {}: {}\n", leg.from, leg.to, leg.eta));
    }
    out.push_str(&format!("\nTotal ETA: {}\n", eta.total));
    out
}

/// Point-by-point report with the ETA into each point after the first.
pub fn route_report(waypoints: &[Waypoint], eta: &RouteEta) -> String {
    let mut points: Vec<String> = Vec::with_capacity(waypoints.len());
    for (index, waypoint) in waypoints.iter().enumerate() {
        let mut point = format!(
            "POINT {}\nSector: {}\nSystem: {} {}\nHyperspeed: {}",
            index + 1,
            sector_label(waypoint),
            waypoint.label,
            waypoint.coordinate,
            waypoint.hyperspeed
        );
        if let Some(leg) = index.checked_sub(1).and_then(|leg| eta.legs.get(leg)) {
            point.push_str(&format!("\nETA: {} from {} to {}", leg.eta, leg.from, leg.to));
        }
        points.push(point);
    }
    let mut out = points.join("\n\n");
    out.push('\n');
    out
}

/// Grouped cargo lines and the two totals.
pub fn cargo_summary(manifest: &CargoManifest, totals: CargoTotals) -> String {
    let mut out = String::from("Cargo Summary\n");
    for entry in manifest.entries() {
        out.push_str(&format!("{} x {}\n", entry.count, entry.ship));
    }
    out.push_str(&format!("Total Weight: {:.2} T\n", totals.weight_t));
    out.push_str(&format!("Total Volume: {:.2} m³\n", totals.volume_m3));
    out
}

fn yes_no(value: bool) -> String {
    let label = if value { "Yes" } else { "No" };
    label.to_string()
}

/// Suitable carriers, or the no-carrier warning when there are none.
pub fn carrier_table(carriers: &[&ShipDef]) -> String {
    if carriers.is_empty() {
        return format!("{NO_CARRIER}\n");
    }
    let rows: Vec<Vec<String>> = carriers
        .iter()
        .map(|ship| {
            vec![
                ship.class.clone(),
                ship.id.to_string(),
                ship.hyperspeed.clone(),
                ship.hangar_bay.clone(),
                ship.landing_capacity.clone(),
                ship.tractor_beams.clone(),
                ship.weight_capacity_t.to_string(),
                ship.volume_capacity_m3.to_string(),
                yes_no(ship.has_docking_bay),
            ]
        })
        .collect();
    let mut out = String::from("Suitable Transport Ships\n");
    out.push_str(&render_table(
        &[
            "Class",
            "Ship",
            "Hyperspeed",
            "Hangar Bay",
            "Landing Capacity",
            "Tractor Beams",
            "Weight Cap",
            "Volume Cap",
            "Docking Bay",
        ],
        &rows,
    ));
    out
}

pub fn ships_table(ships: &[&ShipDef]) -> String {
    let rows: Vec<Vec<String>> = ships
        .iter()
        .map(|ship| {
            vec![
                ship.class.clone(),
                ship.id.to_string(),
                ship.weight_t.to_string(),
                ship.volume_m3.to_string(),
                yes_no(ship.has_docking_bay),
            ]
        })
        .collect();
    render_table(&["Class", "Ship", "Weight", "Volume", "Docking Bay"], &rows)
}

pub fn systems_table<'a>(systems: impl Iterator<Item = &'a SystemDef>) -> String {
    let rows: Vec<Vec<String>> = systems
        .map(|system| {
            vec![
                system.name.to_string(),
                system.sector.clone(),
                system.coordinate.x.to_string(),
                system.coordinate.y.to_string(),
                system.owner.clone(),
            ]
        })
        .collect();
    render_table(
        &["System", "Sector", "Coordinate x", "Coordinate y", "Owner"],
        &rows,
    )
}
