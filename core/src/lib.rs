//! Sizing engine for electric vehicle and vessel charging infrastructure.
//!
//! Parameter records go in, complete metrics records come out. The report
//! module turns those records into display lines and a `Metric,Value` CSV.

pub mod engine;
pub mod math;
pub mod params;
pub mod prelude;
pub mod report;
pub mod telemetry;

pub use prelude::{MetricReport, SizingEngine, SizingError, SizingResult};
