//! Fixed-precision probability handling.
//!
//! Posteriors are reported, cached and compared at four decimal digits. The
//! rounding is done on the exact decimal expansion of the double, so
//! `0.45762711...` becomes `0.4576`. Scaling by `10^4` and calling
//! `f64::round` would disagree on values whose scaled product is not exactly
//! representable.

/// Number of fractional digits carried by every reported posterior.
pub const PROBABILITY_DIGITS: usize = 4;

/// Round `value` to `digits` fractional decimal digits.
///
/// Non-finite values are returned unchanged.
pub fn round_to_digits(value: f64, digits: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", digits, value).parse().unwrap_or(value)
}

/// Round a probability to [`PROBABILITY_DIGITS`] digits.
pub fn round_probability(value: f64) -> f64 {
    round_to_digits(value, PROBABILITY_DIGITS)
}

/// Render a probability with exactly [`PROBABILITY_DIGITS`] fractional digits.
pub fn format_probability(value: f64) -> String {
    format!("{:.*}", PROBABILITY_DIGITS, value)
}

/// True when `value` is a finite number in `[0, 1]`.
pub fn is_probability(value: f64) -> bool {
    value.is_finite() && (0.0..=1.0).contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_four_digits() {
        assert_eq!(round_probability(0.054 / 0.118), 0.4576);
        assert_eq!(round_probability(0.2), 0.2);
        assert_eq!(round_probability(1.0), 1.0);
        assert_eq!(round_probability(0.0), 0.0);
        assert_eq!(round_probability(0.99996), 1.0);
    }

    #[test]
    fn non_finite_passes_through() {
        assert!(round_probability(f64::NAN).is_nan());
        assert_eq!(round_probability(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn formats_with_fixed_width() {
        assert_eq!(format_probability(0.2), "0.2000");
        assert_eq!(format_probability(1.0), "1.0000");
        assert_eq!(format_probability(0.4576), "0.4576");
    }

    #[test]
    fn probability_range_check() {
        assert!(is_probability(0.0));
        assert!(is_probability(1.0));
        assert!(is_probability(0.5));
        assert!(!is_probability(-0.0001));
        assert!(!is_probability(1.0001));
        assert!(!is_probability(f64::NAN));
        assert!(!is_probability(f64::INFINITY));
    }
}
