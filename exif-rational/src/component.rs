//! Numeric types that can be used as numerator and denominator of a [`Rational`](crate::Rational).

use num_traits::PrimInt;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

/// Integer type usable as a component of a [`Rational`](crate::Rational).
///
/// All arithmetic on rationals is done in the `i128` working domain, so every implementor must
/// embed into `i128` exactly. Conversion back is checked: a value that does not fit into the type
/// is reported as an overflow by the operation that produced it.
pub trait RationalComponent:
    PrimInt + FromStr + Display + Debug + Hash + Send + Sync + 'static
{
    /// Largest representable value of the type in the working domain.
    const MAX: i128;

    /// Converts the value into the working domain.
    fn to_wide(self) -> i128;

    /// Converts a working domain value back into the type, if it fits.
    fn from_wide(value: i128) -> Option<Self>;

    /// 32-bit hash of the value.
    ///
    /// The hash is stable across platforms and processes and matches the classic hash codes of
    /// the integer types, so it can be used to interoperate with other implementations of
    /// [`Rational::stable_hash`](crate::Rational::stable_hash).
    fn hash_code(self) -> i32;
}

macro_rules! impl_component {
    ($t:ty, |$v:ident| $hash:expr) => {
        impl RationalComponent for $t {
            const MAX: i128 = <$t>::MAX as i128;

            fn to_wide(self) -> i128 {
                self as i128
            }

            fn from_wide(value: i128) -> Option<Self> {
                <$t>::try_from(value).ok()
            }

            fn hash_code(self) -> i32 {
                let $v = self;
                $hash
            }
        }
    };
}

impl_component!(i8, |v| (v as i32) ^ ((v as i32) << 8));
impl_component!(u8, |v| v as i32);
impl_component!(i16, |v| ((v as u16) as i32) | ((v as i32) << 16));
impl_component!(u16, |v| v as i32);
impl_component!(i32, |v| v);
impl_component!(u32, |v| v as i32);
impl_component!(i64, |v| (v as i32) ^ ((v >> 32) as i32));
impl_component!(u64, |v| (v as i32) ^ ((v >> 32) as i32));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn working_domain_round_trip() {
        assert_eq!(u32::from_wide(u32::MAX.to_wide()), Some(u32::MAX));
        assert_eq!(i64::from_wide(i64::MIN.to_wide()), Some(i64::MIN));
        assert_eq!(u32::from_wide(-1), None);
        assert_eq!(i8::from_wide(128), None);
        assert_eq!(<u64 as RationalComponent>::MAX, u64::MAX as i128);
    }

    #[test]
    fn hash_codes() {
        assert_eq!(7u32.hash_code(), 7);
        assert_eq!(u32::MAX.hash_code(), -1);
        assert_eq!((-5i32).hash_code(), -5);
        assert_eq!(1i64.hash_code(), 1);
        assert_eq!((-1i64).hash_code(), 0);
        assert_eq!(0x1_0000_0002u64.hash_code(), 3);
        assert_eq!((-1i16).hash_code(), -1);
        assert_eq!(1i8.hash_code(), 257);
    }
}
