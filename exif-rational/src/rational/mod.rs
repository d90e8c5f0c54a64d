use crate::component::RationalComponent;
use crate::error::RationalError;
use approx::AbsDiffEq;
use std::fmt::{Display, Formatter};

mod approximate;
mod cmp;
mod op;
mod parse;

pub use approximate::DEFAULT_EPSILON;
pub use op::{gcd, lcd};
pub use parse::ParsedRational;

/// A numerator/denominator pair of integers.
///
/// The pair is stored exactly as it was constructed: reduction only happens when [`Rational::reduce`]
/// is called. Two special values are legal and are handled explicitly by comparisons and
/// conversions:
///
/// * `(0, 0)` is the *empty* value ([`Rational::empty`]). It denotes an absent value and is
///   distinct from zero.
/// * `(n, 0)` with `n != 0` is an *indeterminate* value (division by zero). Its decimal value is
///   defined as `0`.
#[derive(Debug, Clone, Copy)]
pub struct Rational<T> {
    numerator: T,
    denominator: T,
}

impl<T: RationalComponent> Rational<T> {
    /// Creates a new rational without reducing it.
    pub const fn new(numerator: T, denominator: T) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Creates a new rational and reduces it (see [`Rational::reduce`]).
    pub fn new_reduced(numerator: T, denominator: T) -> Result<Self, RationalError> {
        Self::new(numerator, denominator).reduce()
    }

    /// The empty value `(0, 0)`.
    pub fn empty() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Creates an integer rational `value/1`.
    pub fn from_integer(value: T) -> Self {
        Self::new(value, T::one())
    }

    /// Numerator of the rational.
    pub fn numerator(&self) -> T {
        self.numerator
    }

    /// Denominator of the rational.
    pub fn denominator(&self) -> T {
        self.denominator
    }

    /// Returns true for the empty value `(0, 0)`.
    pub fn is_empty(&self) -> bool {
        self.numerator.is_zero() && self.denominator.is_zero()
    }

    /// Returns true if the denominator is zero but the numerator is not.
    pub fn is_indeterminate(&self) -> bool {
        self.denominator.is_zero() && !self.numerator.is_zero()
    }

    /// Returns true if the denominator is exactly one.
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Swaps numerator and denominator.
    pub fn reciprocal(&self) -> Self {
        Self::new(self.denominator, self.numerator)
    }

    /// Decimal value of the rational. A zero denominator gives `0.0`.
    pub fn to_f64(&self) -> f64 {
        if self.denominator.is_zero() {
            return 0.0;
        }

        self.numerator.to_wide() as f64 / self.denominator.to_wide() as f64
    }

    /// Decimal value of the rational as `f32`. A zero denominator gives `0.0`.
    pub fn to_f32(&self) -> f32 {
        self.to_f64() as f32
    }

    /// Converts the rational into one with a different component type. Numerator and denominator
    /// are converted independently.
    pub fn cast<U: RationalComponent>(&self) -> Result<Rational<U>, RationalError> {
        Ok(Rational::new(
            U::from_wide(self.numerator.to_wide()).ok_or(RationalError::Overflow)?,
            U::from_wide(self.denominator.to_wide()).ok_or(RationalError::Overflow)?,
        ))
    }

    pub(crate) fn from_wide(numerator: i128, denominator: i128) -> Result<Self, RationalError> {
        Ok(Self::new(
            T::from_wide(numerator).ok_or(RationalError::Overflow)?,
            T::from_wide(denominator).ok_or(RationalError::Overflow)?,
        ))
    }

    pub(crate) fn to_wide(self) -> (i128, i128) {
        (self.numerator.to_wide(), self.denominator.to_wide())
    }
}

impl<T: RationalComponent> Default for Rational<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: RationalComponent> From<T> for Rational<T> {
    fn from(value: T) -> Self {
        Self::from_integer(value)
    }
}

impl<T: RationalComponent> Display for Rational<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl<T: RationalComponent> AbsDiffEq for Rational<T> {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        DEFAULT_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.to_f64().abs_diff_eq(&other.to_f64(), epsilon)
    }
}

#[cfg(feature = "serde")]
impl<T: RationalComponent> serde::Serialize for Rational<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: RationalComponent> serde::Deserialize<'de> for Rational<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
