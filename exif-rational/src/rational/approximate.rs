use super::Rational;
use crate::component::RationalComponent;
use crate::error::RationalError;

/// Default precision of [`Rational::approximate`].
pub const DEFAULT_EPSILON: f64 = 0.000_001;

impl<T: RationalComponent> Rational<T> {
    /// Approximates a decimal value with a rational within [`DEFAULT_EPSILON`].
    pub fn approximate(value: f64) -> Result<Self, RationalError> {
        Self::approximate_with(value, DEFAULT_EPSILON)
    }

    /// Approximates a decimal value with a rational within `epsilon`.
    ///
    /// The search starts from the truncated value over `1` and greedily walks towards `value`:
    /// while the fraction is below the target the numerator is incremented, otherwise the
    /// denominator is incremented and the numerator is recalculated as the rounded product. The
    /// search stops when the fraction is close enough or when a component reaches the maximum value
    /// of `T`. The result is not guaranteed to be reduced.
    ///
    /// Returns [`RationalError::Overflow`] if `value` is not finite or the result does not fit
    /// into `T` (for example, a negative value with an unsigned component type).
    pub fn approximate_with(value: f64, epsilon: f64) -> Result<Self, RationalError> {
        if !value.is_finite() {
            return Err(RationalError::Overflow);
        }

        let max = T::MAX;
        let max_f = max as f64;
        let truncated = value.trunc();
        if truncated.abs() > max_f {
            return Err(RationalError::Overflow);
        }

        let mut numerator = truncated as i128;
        let mut denominator: i128 = 1;
        let mut fraction = numerator as f64;

        while (fraction - value).abs() > epsilon && numerator.abs() < max && denominator < max {
            if fraction < value {
                numerator += 1;
            } else {
                denominator += 1;
                let next = (value * denominator as f64).round_ties_even();
                if next.abs() > max_f {
                    log::debug!(
                        "Approximation of {value} stopped at the component limit with {numerator}/{}",
                        denominator - 1
                    );
                    denominator -= 1;
                    break;
                }

                numerator = next as i128;
            }

            fraction = numerator as f64 / denominator as f64;
        }

        Self::from_wide(numerator, denominator)
    }
}
