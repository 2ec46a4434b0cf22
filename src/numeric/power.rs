//! Power function factory.

/// Creates a function raising its input to a fixed `exponent`.
///
/// Exponentiation is `f64::powf`, so negative and fractional exponents are
/// supported: `power_of(0.5)` is a square root and `power_of(-1.0)` is the
/// reciprocal.
///
/// # Examples
///
/// ```
/// use combinars::numeric::power_of;
///
/// let square = power_of(2.0);
/// assert_eq!(square(3.0), 9.0);
///
/// let reciprocal = power_of(-1.0);
/// assert_eq!(reciprocal(4.0), 0.25);
/// ```
#[inline]
pub fn power_of(exponent: f64) -> impl Fn(f64) -> f64 + Copy {
    move |base| base.powf(exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_of_zero_exponent_is_one() {
        let one = power_of(0.0);
        assert_eq!(one(123.0), 1.0);
        assert_eq!(one(-7.5), 1.0);
    }

    #[test]
    fn test_power_of_cube() {
        assert_eq!(power_of(3.0)(-2.0), -8.0);
    }

    #[test]
    fn test_power_of_square_root_of_negative_is_nan() {
        assert!(power_of(0.5)(-4.0).is_nan());
    }
}
