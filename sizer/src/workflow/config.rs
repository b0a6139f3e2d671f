use crate::input::{VehicleForm, VesselForm};
use crate::workflow::runner::SizingRequest;
use anyhow::Context;
use chargecore::SizingResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A saved calculator run, keyed by calculator name.
///
/// ```yaml
/// vessel:
///   num_vessels_active: 3
///   charging_strategy: staggered
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioConfig {
    Vehicle(VehicleForm),
    Vessel(VesselForm),
}

impl ScenarioConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading scenario {}", path_ref.display()))?;
        let config: ScenarioConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing scenario {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn into_request(self) -> SizingResult<SizingRequest> {
        match self {
            ScenarioConfig::Vehicle(form) => form.normalize().map(SizingRequest::Vehicle),
            ScenarioConfig::Vessel(form) => form.normalize().map(SizingRequest::Vessel),
        }
    }
}
