use crate::prelude::{SizingError, SizingResult};

/// Rejects divisors that are zero, negative or NaN.
pub fn require_positive(field: &'static str, value: f64) -> SizingResult<f64> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(SizingError::Domain { field, value })
    }
}

/// Efficiencies are fractions in (0, 1].
pub fn require_efficiency(field: &'static str, value: f64) -> SizingResult<f64> {
    let value = require_positive(field, value)?;
    if value <= 1.0 {
        Ok(value)
    } else {
        Err(SizingError::Domain { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_values_pass_through() {
        assert_eq!(require_positive("dwell_time_hours", 0.1).unwrap(), 0.1);
    }

    #[test]
    fn zero_negative_and_nan_are_domain_errors() {
        for value in [0.0, -1.0, f64::NAN] {
            match require_positive("dwell_time_hours", value) {
                Err(SizingError::Domain { field, .. }) => assert_eq!(field, "dwell_time_hours"),
                other => panic!("expected domain error, got {:?}", other),
            }
        }
    }

    #[test]
    fn efficiency_accepts_unit_interval_only() {
        assert!(require_efficiency("efficiency", 1.0).is_ok());
        assert!(require_efficiency("efficiency", 0.01).is_ok());
        assert!(require_efficiency("efficiency", 1.01).is_err());
        assert!(require_efficiency("efficiency", 0.0).is_err());
    }
}
