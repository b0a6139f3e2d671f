pub mod vehicle;
pub mod vessel;

pub use vehicle::VehicleParams;
pub use vessel::{ChargingStrategy, VesselParams};
