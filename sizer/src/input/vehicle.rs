use crate::input::{clamp_field, clamp_real};
use chargecore::params::VehicleParams;
use chargecore::SizingResult;
use serde::{Deserialize, Serialize};

const MIN_VEHICLES: u32 = 1;
const MIN_BATTERY_KWH: f64 = 10.0;
const MIN_DWELL_HOURS: f64 = 0.1;
const MIN_EFFICIENCY: f64 = 0.5;
const MAX_EFFICIENCY: f64 = 1.0;
const MAX_SOC_PCT: u8 = 100;

/// Depot calculator form; SoC is entered as whole percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleForm {
    pub num_vehicles: u32,
    pub battery_kwh: f64,
    pub soc_start_pct: u8,
    pub soc_end_pct: u8,
    pub dwell_time_hours: f64,
    pub efficiency: f64,
}

impl Default for VehicleForm {
    fn default() -> Self {
        Self {
            num_vehicles: 5,
            battery_kwh: 100.0,
            soc_start_pct: 20,
            soc_end_pct: 80,
            dwell_time_hours: 1.0,
            efficiency: 0.9,
        }
    }
}

impl VehicleForm {
    pub fn normalize(&self) -> SizingResult<VehicleParams> {
        let soc_start = clamp_field("soc_start_pct", self.soc_start_pct, 0, Some(MAX_SOC_PCT));
        let soc_end = clamp_field("soc_end_pct", self.soc_end_pct, 0, Some(MAX_SOC_PCT));

        Ok(VehicleParams {
            num_vehicles: clamp_field("num_vehicles", self.num_vehicles, MIN_VEHICLES, None),
            battery_kwh: clamp_real("battery_kwh", self.battery_kwh, MIN_BATTERY_KWH, None)?,
            soc_start: f64::from(soc_start) / 100.0,
            soc_end: f64::from(soc_end) / 100.0,
            dwell_time_hours: clamp_real(
                "dwell_time_hours",
                self.dwell_time_hours,
                MIN_DWELL_HOURS,
                None,
            )?,
            efficiency: clamp_real(
                "efficiency",
                self.efficiency,
                MIN_EFFICIENCY,
                Some(MAX_EFFICIENCY),
            )?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chargecore::SizingError;

    #[test]
    fn defaults_normalize_to_fractions() {
        let params = VehicleForm::default().normalize().unwrap();
        assert_eq!(params.soc_start, 0.2);
        assert_eq!(params.soc_end, 0.8);
        assert_eq!(params, VehicleParams::default());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let form = VehicleForm {
            num_vehicles: 0,
            battery_kwh: 2.0,
            soc_start_pct: 10,
            soc_end_pct: 140,
            dwell_time_hours: 0.0,
            efficiency: 0.2,
        };
        let params = form.normalize().unwrap();
        assert_eq!(params.num_vehicles, 1);
        assert_eq!(params.battery_kwh, 10.0);
        assert_eq!(params.soc_end, 1.0);
        assert_eq!(params.dwell_time_hours, 0.1);
        assert_eq!(params.efficiency, 0.5);
    }

    #[test]
    fn inverted_soc_is_not_corrected() {
        let form = VehicleForm {
            soc_start_pct: 90,
            soc_end_pct: 30,
            ..Default::default()
        };
        let params = form.normalize().unwrap();
        assert!(params.soc_end < params.soc_start);
    }

    #[test]
    fn nan_and_infinite_inputs_are_rejected() {
        let form = VehicleForm {
            battery_kwh: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(form.normalize(), Err(SizingError::InvalidInput(_))));

        let form = VehicleForm {
            dwell_time_hours: f64::INFINITY,
            ..Default::default()
        };
        assert!(form.normalize().is_err());
    }
}
