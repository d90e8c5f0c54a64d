use super::Rational;
use crate::component::RationalComponent;
use std::cmp::Ordering;

const HASH_SEED: i32 = 0x1fb8_d67d;
const HASH_MULTIPLIER: i32 = -1_521_134_295;

impl<T: RationalComponent> Rational<T> {
    /// Compares two rationals.
    ///
    /// Values with zero denominator are not ordered by their decimal value (which is `0`), so that
    /// the empty value, indeterminate values and true zero can be told apart:
    ///
    /// * if both denominators are zero, the numerators are compared;
    /// * if one denominator is zero and the numerator of the *other* operand is zero, the
    ///   denominators are compared;
    /// * otherwise the decimal values are compared.
    ///
    /// This is not a total order: `1/0 > 0/-1` and `0/-1 == 0/1`, but `1/0 < 0/1`.
    pub fn compare(&self, other: &Self) -> Ordering {
        let zero = T::zero();
        if self.denominator == zero {
            if other.denominator == zero {
                return self.numerator.cmp(&other.numerator);
            }

            if other.numerator == zero {
                return self.denominator.cmp(&other.denominator);
            }
        } else if other.denominator == zero && self.numerator == zero {
            return self.denominator.cmp(&other.denominator);
        }

        compare_values(self.to_wide(), other.to_wide())
    }

    /// Hash of the rational that is stable across processes and implementations.
    ///
    /// The hash combines the hash codes of numerator and denominator (see
    /// [`RationalComponent::hash_code`]). Note that rationals that compare equal do not necessarily
    /// have equal hashes (`1/2` and `2/4`), which is why [`std::hash::Hash`] is not implemented.
    pub fn stable_hash(&self) -> i32 {
        let hash = HASH_MULTIPLIER
            .wrapping_mul(HASH_SEED)
            .wrapping_add(self.numerator.hash_code());
        HASH_MULTIPLIER
            .wrapping_mul(hash)
            .wrapping_add(self.denominator.hash_code())
    }
}

/// Compares decimal values of two fractions, treating zero denominator as value `0`.
fn compare_values(lhs: (i128, i128), rhs: (i128, i128)) -> Ordering {
    let (lhs_num, lhs_den) = normalize(lhs);
    let (rhs_num, rhs_den) = normalize(rhs);

    let by_sign = lhs_num.signum().cmp(&rhs_num.signum());
    if by_sign != Ordering::Equal {
        return by_sign;
    }

    // Components are at most 64 bits wide, so the cross products of magnitudes fit into `u128`.
    let lhs = lhs_num.unsigned_abs() * rhs_den.unsigned_abs();
    let rhs = rhs_num.unsigned_abs() * lhs_den.unsigned_abs();
    if lhs_num < 0 {
        rhs.cmp(&lhs)
    } else {
        lhs.cmp(&rhs)
    }
}

fn normalize((numerator, denominator): (i128, i128)) -> (i128, i128) {
    match denominator.cmp(&0) {
        Ordering::Equal => (0, 1),
        Ordering::Less => (-numerator, -denominator),
        Ordering::Greater => (numerator, denominator),
    }
}

impl<T: RationalComponent> PartialEq for Rational<T> {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl<T: RationalComponent> PartialOrd for Rational<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}
