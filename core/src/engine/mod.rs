pub mod vehicle;
pub mod vessel;

pub use vehicle::{VehicleEngine, VehicleMetrics};
pub use vessel::{VesselEngine, VesselMetrics};
