use anyhow::Context;
use chargecore::engine::{VehicleEngine, VesselEngine};
use chargecore::params::{VehicleParams, VesselParams};
use chargecore::report::{render_lines, to_csv, MetricRow, EXPORT_FILE_NAME};
use chargecore::{MetricReport, SizingEngine};
use std::fs;
use std::path::{Path, PathBuf};

/// A normalized parameter record for one calculator.
#[derive(Debug, Clone, PartialEq)]
pub enum SizingRequest {
    Vehicle(VehicleParams),
    Vessel(VesselParams),
}

pub struct SizingOutcome {
    pub calculator: &'static str,
    pub rows: Vec<MetricRow>,
    pub lines: Vec<String>,
}

#[derive(Clone, Default)]
pub struct Runner {
    export_dir: Option<PathBuf>,
}

fn run_engine<E: SizingEngine>(engine: E, params: &E::Params) -> anyhow::Result<SizingOutcome> {
    let metrics = engine
        .execute(params)
        .with_context(|| format!("executing {} sizing", engine.name()))?;
    let rows = metrics.rows();
    let lines = render_lines(&rows);
    Ok(SizingOutcome {
        calculator: engine.name(),
        rows,
        lines,
    })
}

impl Runner {
    pub fn new(export_dir: Option<PathBuf>) -> Self {
        Self { export_dir }
    }

    pub fn execute(&self, request: &SizingRequest) -> anyhow::Result<SizingOutcome> {
        match request {
            SizingRequest::Vehicle(params) => run_engine(VehicleEngine::new(), params),
            SizingRequest::Vessel(params) => run_engine(VesselEngine::new(), params),
        }
    }

    /// Writes the `Metric,Value` table when an export directory is configured.
    pub fn export(&self, outcome: &SizingOutcome) -> anyhow::Result<Option<PathBuf>> {
        match self.export_dir.as_deref() {
            Some(dir) => write_export(dir, &outcome.rows).map(Some),
            None => Ok(None),
        }
    }
}

fn write_export(dir: &Path, rows: &[MetricRow]) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("creating export directory {}", dir.display()))?;
    let path = dir.join(EXPORT_FILE_NAME);
    fs::write(&path, to_csv(rows))
        .with_context(|| format!("writing export {}", path.display()))?;
    Ok(path)
}
