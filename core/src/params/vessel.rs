use crate::prelude::{SizingError, SizingResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the active fleet shares the charging window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChargingStrategy {
    /// Every active vessel draws power at the same time.
    #[default]
    Concurrent,
    /// The active fleet is split over two equal time windows.
    Staggered,
}

impl fmt::Display for ChargingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChargingStrategy::Concurrent => write!(f, "Concurrent"),
            ChargingStrategy::Staggered => write!(f, "Staggered"),
        }
    }
}

impl FromStr for ChargingStrategy {
    type Err = SizingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "concurrent" => Ok(ChargingStrategy::Concurrent),
            "staggered" => Ok(ChargingStrategy::Staggered),
            other => Err(SizingError::InvalidInput(format!(
                "unknown charging strategy '{}'",
                other
            ))),
        }
    }
}

/// Operating profile of a passenger vessel fleet on a fixed route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselParams {
    pub battery_kwh: f64,
    /// kWh per nautical mile.
    pub consumption_per_nm: f64,
    /// One-way route length in nautical miles.
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

impl VesselParams {
    /// Candela P-12 operating defaults.
    pub fn candela_p12() -> Self {
        Self {
            battery_kwh: 252.0,
            consumption_per_nm: 0.8,
            trip_distance_nm: 12.5,
            round_trips_per_day: 4,
            dwell_time_hours: 6.0,
            charging_efficiency: 0.9,
            num_vessels_total: 5,
            num_vessels_active: 5,
            charging_strategy: ChargingStrategy::Concurrent,
            cost_per_kw: 800.0,
            cost_per_point: 20_000.0,
        }
    }

    /// Fails when more vessels are active than the fleet holds.
    pub fn check_fleet(&self) -> SizingResult<()> {
        if self.num_vessels_active > self.num_vessels_total {
            return Err(SizingError::RangeViolation {
                active: self.num_vessels_active,
                total: self.num_vessels_total,
            });
        }
        Ok(())
    }
}

impl Default for VesselParams {
    fn default() -> Self {
        Self::candela_p12()
    }
}
