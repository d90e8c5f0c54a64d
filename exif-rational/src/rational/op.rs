use super::Rational;
use crate::component::RationalComponent;
use crate::error::RationalError;

/// Greatest common divisor of two integers (Euclidean algorithm on absolute values).
///
/// `gcd(0, 0)` is `0`.
pub fn gcd(a: i128, b: i128) -> u128 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();
    while b != 0 {
        let rem = a % b;
        a = b;
        b = rem;
    }

    a
}

/// Least common denominator `a * b / gcd(a, b)` of two integers.
///
/// `lcd(0, 0)` is `0`. Returns `None` if the result does not fit into `i128`.
pub fn lcd(a: i128, b: i128) -> Option<i128> {
    if a == 0 && b == 0 {
        return Some(0);
    }

    let divisor = i128::try_from(gcd(a, b)).ok()?;
    (a / divisor).checked_mul(b)
}

type Wide = (i128, i128);

fn add_wide((lhs_num, lhs_den): Wide, (rhs_num, rhs_den): Wide) -> Option<Wide> {
    let denominator = lcd(lhs_den, rhs_den)?;
    if denominator == 0 {
        // At least one of the operands has zero denominator, the sum stays indeterminate.
        return Some((lhs_num.checked_add(rhs_num)?, 0));
    }

    let lhs = lhs_num.checked_mul(denominator / lhs_den)?;
    let rhs = rhs_num.checked_mul(denominator / rhs_den)?;
    Some((lhs.checked_add(rhs)?, denominator))
}

fn mul_wide((lhs_num, lhs_den): Wide, (rhs_num, rhs_den): Wide) -> Option<Wide> {
    Some((lhs_num.checked_mul(rhs_num)?, lhs_den.checked_mul(rhs_den)?))
}

impl<T: RationalComponent> Rational<T> {
    /// Reduces the rational to its lowest terms.
    ///
    /// Numerator and denominator are divided by their greatest common divisor, then the signs are
    /// flipped if needed so that the denominator is not negative. The empty value is returned
    /// unchanged, indeterminate values become `±1/0`.
    ///
    /// Returns [`RationalError::Overflow`] if flipping the signs does not fit into `T`.
    pub fn reduce(&self) -> Result<Self, RationalError> {
        let (mut numerator, mut denominator) = self.to_wide();
        let divisor = gcd(numerator, denominator);
        if divisor > 1 {
            let divisor = i128::try_from(divisor).map_err(|_| RationalError::Overflow)?;
            numerator /= divisor;
            denominator /= divisor;
        }

        if denominator < 0 {
            numerator = -numerator;
            denominator = -denominator;
        }

        Self::from_wide(numerator, denominator)
    }

    /// Negates the numerator.
    pub fn try_neg(&self) -> Result<Self, RationalError> {
        let (numerator, denominator) = self.to_wide();
        Self::from_wide(-numerator, denominator)
    }

    /// Adds two rationals over their least common denominator.
    pub fn try_add(&self, other: &Self) -> Result<Self, RationalError> {
        let (numerator, denominator) =
            add_wide(self.to_wide(), other.to_wide()).ok_or(RationalError::Overflow)?;
        Self::from_wide(numerator, denominator)
    }

    /// Subtracts `other` by adding its negation.
    ///
    /// The negation is done in the working domain, so subtraction of unsigned rationals only fails
    /// if the final result is negative.
    pub fn try_sub(&self, other: &Self) -> Result<Self, RationalError> {
        let (other_num, other_den) = other.to_wide();
        let (numerator, denominator) =
            add_wide(self.to_wide(), (-other_num, other_den)).ok_or(RationalError::Overflow)?;
        Self::from_wide(numerator, denominator)
    }

    /// Multiplies numerators and denominators. The result is not reduced.
    pub fn try_mul(&self, other: &Self) -> Result<Self, RationalError> {
        let (numerator, denominator) =
            mul_wide(self.to_wide(), other.to_wide()).ok_or(RationalError::Overflow)?;
        Self::from_wide(numerator, denominator)
    }

    /// Multiplies by the reciprocal of `other`. The result is not reduced.
    pub fn try_div(&self, other: &Self) -> Result<Self, RationalError> {
        self.try_mul(&other.reciprocal())
    }
}

macro_rules! impl_op {
    ($op:ident, $method:ident, $checked:ident) => {
        impl<T: RationalComponent> std::ops::$op for Rational<T> {
            type Output = Rational<T>;

            /// # Panics
            ///
            /// Panics if the result does not fit into the component type.
            fn $method(self, rhs: Self) -> Self::Output {
                match self.$checked(&rhs) {
                    Ok(value) => value,
                    Err(err) => panic!("{}: {} {} {}", err, self, stringify!($method), rhs),
                }
            }
        }
    };
}

impl_op!(Add, add, try_add);
impl_op!(Sub, sub, try_sub);
impl_op!(Mul, mul, try_mul);
impl_op!(Div, div, try_div);

impl<T: RationalComponent> std::ops::Neg for Rational<T> {
    type Output = Rational<T>;

    /// # Panics
    ///
    /// Panics if the negated numerator does not fit into the component type.
    fn neg(self) -> Self::Output {
        match self.try_neg() {
            Ok(value) => value,
            Err(err) => panic!("{}: neg {}", err, self),
        }
    }
}
