use crate::input::{clamp_field, clamp_real};
use chargecore::params::{ChargingStrategy, VesselParams};
use chargecore::{SizingError, SizingResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MIN_BATTERY_KWH: f64 = 10.0;
const MIN_CONSUMPTION_PER_NM: f64 = 0.01;
const MIN_TRIP_DISTANCE_NM: f64 = 0.1;
const MIN_ROUND_TRIPS: u32 = 1;
const MIN_DWELL_HOURS: f64 = 0.1;
const MIN_EFFICIENCY: f64 = 0.5;
const MAX_EFFICIENCY: f64 = 1.0;
const MIN_VESSELS: u32 = 1;
const MIN_COST: f64 = 0.0;

/// Named vessel profiles offered in place of manual entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    #[default]
    CandelaP12,
}

impl Preset {
    pub fn form(self) -> VesselForm {
        match self {
            Preset::CandelaP12 => VesselForm::from(VesselParams::candela_p12()),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preset::CandelaP12 => write!(f, "candela-p12"),
        }
    }
}

impl FromStr for Preset {
    type Err = SizingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "candela-p12" | "p12" => Ok(Preset::CandelaP12),
            other => Err(SizingError::InvalidInput(format!(
                "unknown vessel preset '{}'",
                other
            ))),
        }
    }
}

/// Vessel calculator form. Missing fields fall back to the Candela P-12 profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VesselForm {
    pub battery_kwh: f64,
    pub consumption_per_nm: f64,
    pub trip_distance_nm: f64,
    pub round_trips_per_day: u32,
    pub dwell_time_hours: f64,
    pub charging_efficiency: f64,
    pub num_vessels_total: u32,
    pub num_vessels_active: u32,
    pub charging_strategy: ChargingStrategy,
    pub cost_per_kw: f64,
    pub cost_per_point: f64,
}

impl Default for VesselForm {
    fn default() -> Self {
        Preset::default().form()
    }
}

impl From<VesselParams> for VesselForm {
    fn from(params: VesselParams) -> Self {
        Self {
            battery_kwh: params.battery_kwh,
            consumption_per_nm: params.consumption_per_nm,
            trip_distance_nm: params.trip_distance_nm,
            round_trips_per_day: params.round_trips_per_day,
            dwell_time_hours: params.dwell_time_hours,
            charging_efficiency: params.charging_efficiency,
            num_vessels_total: params.num_vessels_total,
            num_vessels_active: params.num_vessels_active,
            charging_strategy: params.charging_strategy,
            cost_per_kw: params.cost_per_kw,
            cost_per_point: params.cost_per_point,
        }
    }
}

impl VesselForm {
    /// Clamps each field to its bounds and rejects an oversubscribed fleet.
    pub fn normalize(&self) -> SizingResult<VesselParams> {
        let params = VesselParams {
            battery_kwh: clamp_real("battery_kwh", self.battery_kwh, MIN_BATTERY_KWH, None)?,
            consumption_per_nm: clamp_real(
                "consumption_per_nm",
                self.consumption_per_nm,
                MIN_CONSUMPTION_PER_NM,
                None,
            )?,
            trip_distance_nm: clamp_real(
                "trip_distance_nm",
                self.trip_distance_nm,
                MIN_TRIP_DISTANCE_NM,
                None,
            )?,
            round_trips_per_day: clamp_field(
                "round_trips_per_day",
                self.round_trips_per_day,
                MIN_ROUND_TRIPS,
                None,
            ),
            dwell_time_hours: clamp_real(
                "dwell_time_hours",
                self.dwell_time_hours,
                MIN_DWELL_HOURS,
                None,
            )?,
            charging_efficiency: clamp_real(
                "charging_efficiency",
                self.charging_efficiency,
                MIN_EFFICIENCY,
                Some(MAX_EFFICIENCY),
            )?,
            num_vessels_total: clamp_field(
                "num_vessels_total",
                self.num_vessels_total,
                MIN_VESSELS,
                None,
            ),
            num_vessels_active: clamp_field(
                "num_vessels_active",
                self.num_vessels_active,
                MIN_VESSELS,
                None,
            ),
            charging_strategy: self.charging_strategy,
            cost_per_kw: clamp_real("cost_per_kw", self.cost_per_kw, MIN_COST, None)?,
            cost_per_point: clamp_real("cost_per_point", self.cost_per_point, MIN_COST, None)?,
        };
        params.check_fleet()?;
        Ok(params)
    }
}
