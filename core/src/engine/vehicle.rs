use crate::math::guard::{require_efficiency, require_positive};
use crate::params::VehicleParams;
use crate::prelude::{MetricReport, SizingEngine, SizingResult};
use crate::report::{MetricRow, MetricValue};
use crate::telemetry::log::LogManager;
use serde::Serialize;

/// Depot sizing for a road vehicle fleet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleMetrics {
    pub params: VehicleParams,
    pub energy_needed: f64,
    pub energy_with_losses: f64,
    pub power_per_vehicle: f64,
    pub total_power: f64,
    pub recommended_charge_points: u32,
}

impl MetricReport for VehicleMetrics {
    fn rows(&self) -> Vec<MetricRow> {
        vec![
            MetricRow::new(
                "Number of Vehicles",
                MetricValue::Count(self.params.num_vehicles),
            ),
            MetricRow::new(
                "Battery Capacity",
                MetricValue::Energy(self.params.battery_kwh),
            ),
            MetricRow::new(
                "Energy Needed per Vehicle",
                MetricValue::Energy(self.energy_needed),
            ),
            MetricRow::new(
                "Energy with Losses per Vehicle",
                MetricValue::Energy(self.energy_with_losses),
            ),
            MetricRow::new(
                "Charging Power per Vehicle",
                MetricValue::Power(self.power_per_vehicle),
            ),
            MetricRow::new(
                "Total Site Power Required",
                MetricValue::Power(self.total_power),
            ),
            MetricRow::new(
                "Recommended Charging Points",
                MetricValue::Count(self.recommended_charge_points),
            ),
        ]
    }
}

pub struct VehicleEngine {
    logger: LogManager,
}

impl VehicleEngine {
    pub fn new() -> Self {
        Self {
            logger: LogManager::new("vehicle"),
        }
    }
}

impl Default for VehicleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SizingEngine for VehicleEngine {
    type Params = VehicleParams;
    type Metrics = VehicleMetrics;

    fn name(&self) -> &'static str {
        "vehicle"
    }

    fn execute(&self, params: &VehicleParams) -> SizingResult<VehicleMetrics> {
        let efficiency = require_efficiency("efficiency", params.efficiency)?;
        let dwell = require_positive("dwell_time_hours", params.dwell_time_hours)?;

        // soc_end < soc_start yields negative energy and power; passed through as-is.
        let energy_needed = params.battery_kwh * (params.soc_end - params.soc_start);
        if energy_needed < 0.0 {
            self.logger.caution(&format!(
                "departure SoC {:.2} below arrival SoC {:.2}, energy is negative",
                params.soc_end, params.soc_start
            ));
        }

        let energy_with_losses = energy_needed / efficiency;
        let power_per_vehicle = energy_with_losses / dwell;
        let total_power = power_per_vehicle * f64::from(params.num_vehicles);

        self.logger.record(&format!(
            "{} vehicles -> {:.2} kW per vehicle, {:.2} kW total",
            params.num_vehicles, power_per_vehicle, total_power
        ));

        Ok(VehicleMetrics {
            params: params.clone(),
            energy_needed,
            energy_with_losses,
            power_per_vehicle,
            total_power,
            recommended_charge_points: params.num_vehicles,
        })
    }
}
