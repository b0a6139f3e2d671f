use serde::{Deserialize, Serialize};

/// Fleet of road vehicles sharing one depot.
///
/// State-of-charge values are fractions in `[0, 1]`; percentage inputs are
/// normalized before a record is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleParams {
    pub num_vehicles: u32,
    pub battery_kwh: f64,
    pub soc_start: f64,
    pub soc_end: f64,
    pub dwell_time_hours: f64,
    pub efficiency: f64,
}

impl Default for VehicleParams {
    fn default() -> Self {
        Self {
            num_vehicles: 5,
            battery_kwh: 100.0,
            soc_start: 0.2,
            soc_end: 0.8,
            dwell_time_hours: 1.0,
            efficiency: 0.9,
        }
    }
}
