use crate::number_traits::Float;

/// Compares `value` against `reference` with the machine epsilon of `T`,
/// scaled by the magnitude of the operands.
///
/// See [`combined_tolerance_equals_with`].
pub fn combined_tolerance_equals<T>(value: T, reference: T) -> bool
where
    T: Float,
{
    combined_tolerance_equals_with(value, reference, T::epsilon())
}

/// Returns `true` iff `|value - reference| <= epsilon * max(1, |value|, |reference|)`.
///
/// Below magnitude 1 this is an absolute comparison, above it a relative one.
pub fn combined_tolerance_equals_with<T>(value: T, reference: T, epsilon: T) -> bool
where
    T: Float,
{
    let scale = T::one().max(value.abs()).max(reference.abs());
    (value - reference).abs() <= epsilon * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_values() {
        assert!(combined_tolerance_equals(1.0_f64, 1.0));
        assert!(combined_tolerance_equals(0.0_f32, 0.0));
    }

    #[test]
    fn one_ulp_away_from_one() {
        let next = f64::from_bits(1.0_f64.to_bits() + 1);
        assert!(combined_tolerance_equals(next, 1.0));
    }

    #[test]
    fn clearly_different_values() {
        assert!(!combined_tolerance_equals(1.0_f64, 1.001));
        assert!(!combined_tolerance_equals(0.5_f32, 1.0));
    }

    #[test]
    fn scales_with_magnitude() {
        let big = 1.0e12_f64;
        let shifted = big + 1.0e-4;

        assert!(combined_tolerance_equals(shifted, big));
        assert!(!combined_tolerance_equals_with(1.0e-4_f64, 0.0, f64::EPSILON));
    }

    #[test]
    fn explicit_epsilon() {
        assert!(combined_tolerance_equals_with(1.05_f64, 1.0, 0.1));
        assert!(!combined_tolerance_equals_with(1.2_f64, 1.0, 0.1));
    }
}
