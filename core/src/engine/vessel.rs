use crate::math::guard::{require_efficiency, require_positive};
use crate::math::rounding::staggered_concurrency;
use crate::params::{ChargingStrategy, VesselParams};
use crate::prelude::{MetricReport, SizingEngine, SizingResult};
use crate::report::{MetricRow, MetricValue};
use crate::telemetry::log::LogManager;
use serde::Serialize;

/// Shore-side charging requirements for a vessel fleet.
///
/// `concurrent_vessels` counts vessels drawing power at the same moment,
/// which is what the grid connection and the number of charge points are
/// sized for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VesselMetrics {
    pub params: VesselParams,
    pub trip_energy: f64,
    pub daily_energy_per_vessel: f64,
    pub energy_with_losses: f64,
    pub power_per_vessel: f64,
    pub concurrent_vessels: u32,
    pub total_power_required: f64,
    pub estimated_total_cost: f64,
}

impl MetricReport for VesselMetrics {
    fn rows(&self) -> Vec<MetricRow> {
        vec![
            MetricRow::new(
                "Battery Capacity",
                MetricValue::Energy(self.params.battery_kwh),
            ),
            MetricRow::new(
                "Vessels in Fleet",
                MetricValue::Count(self.params.num_vessels_total),
            ),
            MetricRow::new(
                "Vessels Active",
                MetricValue::Count(self.params.num_vessels_active),
            ),
            MetricRow::new(
                "Charging Strategy",
                MetricValue::Text(self.params.charging_strategy.to_string()),
            ),
            MetricRow::new("Trip Energy", MetricValue::Energy(self.trip_energy)),
            MetricRow::new(
                "Daily Energy per Vessel",
                MetricValue::Energy(self.daily_energy_per_vessel),
            ),
            MetricRow::new(
                "Energy with Losses per Vessel",
                MetricValue::Energy(self.energy_with_losses),
            ),
            MetricRow::new(
                "Charging Power per Vessel",
                MetricValue::Power(self.power_per_vessel),
            ),
            MetricRow::new(
                "Concurrent Vessels Charging",
                MetricValue::Count(self.concurrent_vessels),
            ),
            MetricRow::new(
                "Total Power Required",
                MetricValue::Power(self.total_power_required),
            ),
            MetricRow::new(
                "Estimated Total Cost",
                MetricValue::Currency(self.estimated_total_cost),
            ),
        ]
    }
}

pub struct VesselEngine {
    logger: LogManager,
}

impl VesselEngine {
    pub fn new() -> Self {
        Self {
            logger: LogManager::new("vessel"),
        }
    }

    fn concurrency(strategy: ChargingStrategy, active: u32) -> u32 {
        match strategy {
            ChargingStrategy::Concurrent => active,
            ChargingStrategy::Staggered => staggered_concurrency(active),
        }
    }
}

impl Default for VesselEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SizingEngine for VesselEngine {
    type Params = VesselParams;
    type Metrics = VesselMetrics;

    fn name(&self) -> &'static str {
        "vessel"
    }

    fn execute(&self, params: &VesselParams) -> SizingResult<VesselMetrics> {
        let efficiency = require_efficiency("charging_efficiency", params.charging_efficiency)?;
        let dwell = require_positive("dwell_time_hours", params.dwell_time_hours)?;

        let trip_energy = params.trip_distance_nm * 2.0 * params.consumption_per_nm;
        let daily_energy_per_vessel = trip_energy * f64::from(params.round_trips_per_day);
        let energy_with_losses = daily_energy_per_vessel / efficiency;
        let power_per_vessel = energy_with_losses / dwell;

        let concurrent_vessels =
            Self::concurrency(params.charging_strategy, params.num_vessels_active);
        let total_power_required = power_per_vessel * f64::from(concurrent_vessels);
        let estimated_total_cost = total_power_required * params.cost_per_kw
            + f64::from(concurrent_vessels) * params.cost_per_point;

        self.logger.record(&format!(
            "{} strategy, {} of {} vessels charging -> {:.2} kW, cost {:.0}",
            params.charging_strategy,
            concurrent_vessels,
            params.num_vessels_active,
            total_power_required,
            estimated_total_cost
        ));

        Ok(VesselMetrics {
            params: params.clone(),
            trip_energy,
            daily_energy_per_vessel,
            energy_with_losses,
            power_per_vessel,
            concurrent_vessels,
            total_power_required,
            estimated_total_cost,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::SizingError;
    use crate::report::{format_fixed, group_thousands, render_lines};

    fn staggered(active: u32) -> VesselParams {
        VesselParams {
            num_vessels_total: active.max(5),
            num_vessels_active: active,
            charging_strategy: ChargingStrategy::Staggered,
            ..VesselParams::candela_p12()
        }
    }

    #[test]
    fn candela_defaults_concurrent_scenario() {
        let metrics = VesselEngine::new()
            .execute(&VesselParams::candela_p12())
            .unwrap();
        assert!((metrics.trip_energy - 20.0).abs() < 1e-9);
        assert!((metrics.daily_energy_per_vessel - 80.0).abs() < 1e-9);
        assert_eq!(format_fixed(metrics.power_per_vessel), "14.81");
        assert_eq!(metrics.concurrent_vessels, 5);
        assert_eq!(format_fixed(metrics.total_power_required), "74.07");
        assert_eq!(group_thousands(metrics.estimated_total_cost), "159,259");
    }

    #[test]
    fn staggered_single_vessel_keeps_one_point() {
        let metrics = VesselEngine::new().execute(&staggered(1)).unwrap();
        assert_eq!(metrics.concurrent_vessels, 1);
        assert_eq!(metrics.total_power_required, metrics.power_per_vessel);
    }

    #[test]
    fn staggered_five_vessels_round_half_to_even() {
        let metrics = VesselEngine::new().execute(&staggered(5)).unwrap();
        assert_eq!(metrics.concurrent_vessels, 2);
        assert_eq!(
            metrics.estimated_total_cost,
            metrics.power_per_vessel * 2.0 * 800.0 + 2.0 * 20_000.0
        );
    }

    #[test]
    fn staggered_seven_vessels_round_up_to_even() {
        let metrics = VesselEngine::new().execute(&staggered(7)).unwrap();
        assert_eq!(metrics.concurrent_vessels, 4);
    }

    #[test]
    fn concurrent_strategy_charges_every_active_vessel() {
        let params = VesselParams {
            num_vessels_total: 8,
            num_vessels_active: 7,
            ..VesselParams::candela_p12()
        };
        let metrics = VesselEngine::new().execute(&params).unwrap();
        assert_eq!(metrics.concurrent_vessels, 7);
    }

    #[test]
    fn higher_efficiency_lowers_power() {
        let engine = VesselEngine::new();
        let low = VesselParams {
            charging_efficiency: 0.8,
            ..VesselParams::candela_p12()
        };
        let high = VesselParams {
            charging_efficiency: 0.95,
            ..VesselParams::candela_p12()
        };
        assert!(
            engine.execute(&high).unwrap().power_per_vessel
                < engine.execute(&low).unwrap().power_per_vessel
        );
    }

    #[test]
    fn invalid_divisors_are_rejected() {
        let engine = VesselEngine::new();
        let params = VesselParams {
            dwell_time_hours: -2.0,
            ..VesselParams::candela_p12()
        };
        assert_eq!(
            engine.execute(&params),
            Err(SizingError::Domain {
                field: "dwell_time_hours",
                value: -2.0
            })
        );

        let params = VesselParams {
            charging_efficiency: 1.2,
            ..VesselParams::candela_p12()
        };
        assert!(matches!(
            engine.execute(&params),
            Err(SizingError::Domain {
                field: "charging_efficiency",
                ..
            })
        ));
    }

    #[test]
    fn repeated_runs_are_identical() {
        let engine = VesselEngine::new();
        let params = staggered(3);
        assert_eq!(engine.execute(&params), engine.execute(&params));
    }

    #[test]
    fn report_lines_for_candela_defaults() {
        let metrics = VesselEngine::new()
            .execute(&VesselParams::candela_p12())
            .unwrap();
        let lines = render_lines(&metrics.rows());
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[3], "Charging Strategy: Concurrent");
        assert_eq!(lines[4], "Trip Energy: 20.00 kWh");
        assert_eq!(lines[7], "Charging Power per Vessel: 14.81 kW");
        assert_eq!(lines[10], "Estimated Total Cost: 159,259");
    }
}
