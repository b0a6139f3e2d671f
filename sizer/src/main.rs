use anyhow::{bail, Context};
use chargecore::params::ChargingStrategy;
use chargecore::report::{to_json, EXPORT_MIME_TYPE};
use clap::{Args as ClapArgs, Parser, Subcommand};
use input::{Preset, VehicleForm, VesselForm};
use std::path::PathBuf;
use workflow::config::ScenarioConfig;
use workflow::runner::{Runner, SizingRequest};

mod input;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Charging infrastructure sizing calculator")]
struct Args {
    /// Load a saved calculator run from YAML instead of flags
    #[arg(long, global = true)]
    scenario: Option<PathBuf>,
    /// Write evessel_charging_sizing.csv into this directory
    #[arg(long, global = true)]
    export: Option<PathBuf>,
    /// Print the metric rows as JSON after the summary
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Depot charging for a road vehicle fleet
    Vehicle(VehicleArgs),
    /// Shore charging for a vessel fleet
    Vessel(VesselArgs),
}

#[derive(ClapArgs)]
struct VehicleArgs {
    #[arg(long)]
    num_vehicles: Option<u32>,
    /// Battery capacity per vehicle (kWh)
    #[arg(long)]
    battery_kwh: Option<f64>,
    /// State of charge at arrival (%)
    #[arg(long)]
    soc_start_pct: Option<u8>,
    /// Required state of charge before departure (%)
    #[arg(long)]
    soc_end_pct: Option<u8>,
    /// Available dwell time per vehicle (hours)
    #[arg(long)]
    dwell_time_hours: Option<f64>,
    #[arg(long)]
    efficiency: Option<f64>,
}

#[derive(ClapArgs)]
struct VesselArgs {
    /// Starting profile; individual flags override its values
    #[arg(long, default_value_t = Preset::CandelaP12)]
    preset: Preset,
    #[arg(long)]
    battery_kwh: Option<f64>,
    /// Energy consumption (kWh per nautical mile)
    #[arg(long)]
    consumption_per_nm: Option<f64>,
    /// One-way trip distance (nautical miles)
    #[arg(long)]
    trip_distance_nm: Option<f64>,
    #[arg(long)]
    round_trips_per_day: Option<u32>,
    #[arg(long)]
    dwell_time_hours: Option<f64>,
    #[arg(long)]
    charging_efficiency: Option<f64>,
    #[arg(long)]
    num_vessels_total: Option<u32>,
    #[arg(long)]
    num_vessels_active: Option<u32>,
    /// concurrent or staggered
    #[arg(long)]
    charging_strategy: Option<ChargingStrategy>,
    #[arg(long)]
    cost_per_kw: Option<f64>,
    #[arg(long)]
    cost_per_point: Option<f64>,
}

impl VehicleArgs {
    fn into_form(self) -> VehicleForm {
        let defaults = VehicleForm::default();
        VehicleForm {
            num_vehicles: self.num_vehicles.unwrap_or(defaults.num_vehicles),
            battery_kwh: self.battery_kwh.unwrap_or(defaults.battery_kwh),
            soc_start_pct: self.soc_start_pct.unwrap_or(defaults.soc_start_pct),
            soc_end_pct: self.soc_end_pct.unwrap_or(defaults.soc_end_pct),
            dwell_time_hours: self.dwell_time_hours.unwrap_or(defaults.dwell_time_hours),
            efficiency: self.efficiency.unwrap_or(defaults.efficiency),
        }
    }
}

impl VesselArgs {
    fn into_form(self) -> VesselForm {
        let base = self.preset.form();
        VesselForm {
            battery_kwh: self.battery_kwh.unwrap_or(base.battery_kwh),
            consumption_per_nm: self.consumption_per_nm.unwrap_or(base.consumption_per_nm),
            trip_distance_nm: self.trip_distance_nm.unwrap_or(base.trip_distance_nm),
            round_trips_per_day: self.round_trips_per_day.unwrap_or(base.round_trips_per_day),
            dwell_time_hours: self.dwell_time_hours.unwrap_or(base.dwell_time_hours),
            charging_efficiency: self
                .charging_efficiency
                .unwrap_or(base.charging_efficiency),
            num_vessels_total: self.num_vessels_total.unwrap_or(base.num_vessels_total),
            num_vessels_active: self.num_vessels_active.unwrap_or(base.num_vessels_active),
            charging_strategy: self.charging_strategy.unwrap_or(base.charging_strategy),
            cost_per_kw: self.cost_per_kw.unwrap_or(base.cost_per_kw),
            cost_per_point: self.cost_per_point.unwrap_or(base.cost_per_point),
        }
    }
}

fn build_request(
    scenario: Option<PathBuf>,
    command: Option<Command>,
) -> anyhow::Result<SizingRequest> {
    let config = match (scenario, command) {
        (Some(path), None) => ScenarioConfig::load(path)?,
        (None, Some(Command::Vehicle(args))) => ScenarioConfig::Vehicle(args.into_form()),
        (None, Some(Command::Vessel(args))) => ScenarioConfig::Vessel(args.into_form()),
        (Some(_), Some(_)) => {
            bail!("--scenario replaces the calculator subcommand; pass one or the other")
        }
        (None, None) => bail!("choose a calculator (vehicle or vessel) or pass --scenario"),
    };
    config.into_request().context("collecting calculator inputs")
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let request = build_request(args.scenario, args.command)?;
    let runner = Runner::new(args.export);
    let outcome = runner.execute(&request)?;

    println!("Results ({} calculator)", outcome.calculator);
    for line in &outcome.lines {
        println!("  {}", line);
    }

    if args.json {
        println!("{}", to_json(&outcome.rows)?);
    }

    if let Some(path) = runner.export(&outcome)? {
        println!("Exported {} ({})", path.display(), EXPORT_MIME_TYPE);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vessel_flags_override_preset() {
        let args = Args::parse_from([
            "sizer",
            "vessel",
            "--num-vessels-active",
            "5",
            "--charging-strategy",
            "staggered",
        ]);
        match build_request(args.scenario, args.command).unwrap() {
            SizingRequest::Vessel(params) => {
                assert_eq!(params.charging_strategy, ChargingStrategy::Staggered);
                assert_eq!(params.consumption_per_nm, 0.8);
            }
            other => panic!("expected vessel request, got {:?}", other),
        }
    }

    #[test]
    fn vehicle_flags_fill_defaults() {
        let args = Args::parse_from(["sizer", "vehicle", "--soc-start-pct", "35"]);
        match build_request(args.scenario, args.command).unwrap() {
            SizingRequest::Vehicle(params) => {
                assert_eq!(params.soc_start, 0.35);
                assert_eq!(params.num_vehicles, 5);
            }
            other => panic!("expected vehicle request, got {:?}", other),
        }
    }

    #[test]
    fn missing_calculator_is_an_error() {
        let args = Args::parse_from(["sizer"]);
        assert!(build_request(args.scenario, args.command).is_err());
    }

    #[test]
    fn scenario_with_subcommand_is_an_error() {
        let args = Args::parse_from(["sizer", "--scenario", "x.yaml", "vehicle"]);
        let err = build_request(args.scenario, args.command).unwrap_err();
        assert!(err.to_string().contains("--scenario"));
    }

    #[test]
    fn nan_flag_is_rejected() {
        let args = Args::parse_from(["sizer", "vehicle", "--battery-kwh", "NaN"]);
        assert!(build_request(args.scenario, args.command).is_err());
    }

    #[test]
    fn active_above_fleet_is_rejected() {
        let args = Args::parse_from([
            "sizer",
            "vessel",
            "--num-vessels-total",
            "2",
            "--num-vessels-active",
            "3",
        ]);
        assert!(build_request(args.scenario, args.command).is_err());
    }
}
