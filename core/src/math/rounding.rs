/// Rounds to the nearest integer, resolving exact halves to the even neighbour.
pub fn round_half_even(value: f64) -> f64 {
    value.round_ties_even()
}

/// Vessels charging at once when the fleet is split over two equal windows.
///
/// Half the active fleet, rounded half-to-even and floored at one: 1 -> 1,
/// 3 -> 2, 5 -> 2, 7 -> 4.
pub fn staggered_concurrency(active: u32) -> u32 {
    let half = round_half_even(f64::from(active) / 2.0) as u32;
    half.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halves_resolve_to_even() {
        assert_eq!(round_half_even(0.5), 0.0);
        assert_eq!(round_half_even(1.5), 2.0);
        assert_eq!(round_half_even(2.5), 2.0);
        assert_eq!(round_half_even(3.5), 4.0);
        assert_eq!(round_half_even(2.4), 2.0);
        assert_eq!(round_half_even(2.6), 3.0);
    }

    #[test]
    fn single_active_vessel_still_charges() {
        assert_eq!(staggered_concurrency(1), 1);
        assert_eq!(staggered_concurrency(0), 1);
    }

    #[test]
    fn odd_fleets_round_to_even_half() {
        assert_eq!(staggered_concurrency(3), 2);
        assert_eq!(staggered_concurrency(5), 2);
        assert_eq!(staggered_concurrency(7), 4);
        assert_eq!(staggered_concurrency(9), 4);
    }

    #[test]
    fn even_fleets_halve_exactly() {
        assert_eq!(staggered_concurrency(2), 1);
        assert_eq!(staggered_concurrency(10), 5);
    }
}
