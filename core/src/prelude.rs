use crate::report::MetricRow;
use thiserror::Error;

/// Common error type for sizing computations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SizingError {
    #[error("domain error: {field} must lie in its valid range, got {value}")]
    Domain { field: &'static str, value: f64 },
    #[error("range violation: {active} active vessels exceed a fleet of {total}")]
    RangeViolation { active: u32, total: u32 },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("internal failure: {0}")]
    Internal(String),
}

pub type SizingResult<T> = Result<T, SizingError>;

/// Ordered label/value view of a metrics record, consumed by the report layer.
pub trait MetricReport {
    fn rows(&self) -> Vec<MetricRow>;
}

/// A pure calculator mapping one parameter record to one metrics record.
pub trait SizingEngine {
    type Params;
    type Metrics: MetricReport;

    fn name(&self) -> &'static str;
    fn execute(&self, params: &Self::Params) -> SizingResult<Self::Metrics>;
}
