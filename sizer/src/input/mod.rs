//! Form values as a user enters them, with the bounds the form enforces.
//!
//! Forms normalize into the engine's parameter records; percentage-to-fraction
//! conversion happens here and nowhere else.

pub mod vehicle;
pub mod vessel;

pub use vehicle::VehicleForm;
pub use vessel::{Preset, VesselForm};

use chargecore::{SizingError, SizingResult};
use log::warn;
use std::fmt::Display;

/// Clamps `value` into `[min, max]`, logging when the input was out of range.
pub(crate) fn clamp_field<T>(field: &str, value: T, min: T, max: Option<T>) -> T
where
    T: PartialOrd + Copy + Display,
{
    if value < min {
        warn!("{} = {} below minimum, using {}", field, value, min);
        return min;
    }
    match max {
        Some(max) if value > max => {
            warn!("{} = {} above maximum, using {}", field, value, max);
            max
        }
        _ => value,
    }
}

/// Rejects NaN and infinities, then clamps like [`clamp_field`].
pub(crate) fn clamp_real(
    field: &str,
    value: f64,
    min: f64,
    max: Option<f64>,
) -> SizingResult<f64> {
    if !value.is_finite() {
        return Err(SizingError::InvalidInput(format!(
            "{} must be a finite number, got {}",
            field, value
        )));
    }
    Ok(clamp_field(field, value, min, max))
}
