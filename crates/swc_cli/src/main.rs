use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::Path;
use swc_core::{
    cargo_totals, compute_eta, filter_carriers, ship_classes, ships_in_class, Coordinate,
};
use swc_world::load_content;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod plan;
mod report;

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(name = "swc_cli", about = "Route ETA and cargo transport planner for Star Wars Combine")]
struct Cli {
    /// Directory holding galaxy_db.csv and swc_ships_db.csv.
    #[arg(long, default_value = "./content", global = true)]
    content_dir: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// ETA for a single hop between two coordinates.
    Eta {
        /// Origin as X,Y.
        #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
        from: Coordinate,
        /// Destination as X,Y.
        #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
        to: Coordinate,
        #[arg(long, default_value_t = plan::default_pilot_skill())]
        pilot_skill: i32,
        #[arg(long, default_value_t = 1)]
        hyperspeed: i32,
    },
    /// ETA for every leg of a route plan and the total.
    Route {
        /// Path to the route plan JSON file.
        #[arg(long)]
        plan: String,
        /// Overrides the plan's pilot skill.
        #[arg(long)]
        pilot_skill: Option<i32>,
        /// Print the point-by-point report instead of the summary.
        #[arg(long)]
        report: bool,
    },
    /// Ships able to carry a cargo plan in their docking bay.
    Cargo {
        /// Path to the cargo plan JSON file.
        #[arg(long)]
        plan: String,
    },
    /// List galaxy systems.
    Systems {
        #[arg(long)]
        sector: Option<String>,
    },
    /// List catalog ships.
    Ships {
        #[arg(long)]
        class: Option<String>,
    },
}

fn parse_coordinate(value: &str) -> Result<Coordinate, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{value}'"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<f64>()
            .map_err(|err| format!("invalid coordinate '{}': {err}", part.trim()))
    };
    Ok(Coordinate::new(parse(x)?, parse(y)?))
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn run_route(content_dir: &str, plan_path: &str, pilot_skill: Option<i32>, report: bool) -> Result<()> {
    let catalog = load_content(content_dir)?;
    let plan = plan::load_route_plan(Path::new(plan_path))?;
    let route = plan.build_route(&catalog)?;
    let skill = pilot_skill.unwrap_or(plan.pilot_skill);
    let eta = route.eta(skill);
    tracing::info!(stops = route.len(), pilot_skill = skill, total = %eta.total, "route computed");

    if report {
        print!("{}", report::route_report(route.waypoints(), &eta));
    } else {
        print!("{}", report::route_summary(route.waypoints(), &eta));
    }
    Ok(())
}

fn run_cargo(content_dir: &str, plan_path: &str) -> Result<()> {
    let catalog = load_content(content_dir)?;
    let plan = plan::load_cargo_plan(Path::new(plan_path))?;
    let manifest = plan.build_manifest(&catalog)?;
    let totals = cargo_totals(&manifest, &catalog.ships).context("summing cargo")?;
    let carriers = filter_carriers(&catalog.ships, totals);
    tracing::info!(
        ships = manifest.ship_count(),
        weight_t = totals.weight_t,
        volume_m3 = totals.volume_m3,
        carriers = carriers.len(),
        "cargo evaluated"
    );

    println!("{}", report::cargo_summary(&manifest, totals));
    print!("{}", report::carrier_table(&carriers));
    Ok(())
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Eta {
            from,
            to,
            pilot_skill,
            hyperspeed,
        } => {
            println!("{}", compute_eta(from, to, pilot_skill, hyperspeed));
        }
        Commands::Route {
            plan,
            pilot_skill,
            report,
        } => run_route(&cli.content_dir, &plan, pilot_skill, report)?,
        Commands::Cargo { plan } => run_cargo(&cli.content_dir, &plan)?,
        Commands::Systems { sector } => {
            let catalog = load_content(&cli.content_dir)?;
            print!(
                "{}",
                report::systems_table(catalog.systems_in_sector(sector.as_deref()))
            );
        }
        Commands::Ships { class } => {
            let catalog = load_content(&cli.content_dir)?;
            if class.is_none() {
                println!("Classes: {}\n", ship_classes(&catalog.ships).join(", "));
            }
            print!(
                "{}",
                report::ships_table(&ships_in_class(&catalog.ships, class.as_deref()))
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_coordinate() {
        let coordinate = parse_coordinate("-35, 18").unwrap();
        assert_eq!(coordinate, Coordinate::new(-35.0, 18.0));
        assert!(parse_coordinate("12").is_err());
        assert!(parse_coordinate("a,b").is_err());
    }

    #[test]
    fn test_negative_coordinates_parse_as_values() {
        let cli = Cli::try_parse_from(["swc_cli", "eta", "--from", "-35,18", "--to", "0,0"]).unwrap();
        match cli.command {
            Commands::Eta {
                from,
                pilot_skill,
                hyperspeed,
                ..
            } => {
                assert_eq!(from, Coordinate::new(-35.0, 18.0));
                assert_eq!(pilot_skill, 3);
                assert_eq!(hyperspeed, 1);
            }
            _ => panic!("expected eta subcommand"),
        }
    }
}
