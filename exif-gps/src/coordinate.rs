use crate::direction::Direction;
use crate::error::GeoError;
use approx::AbsDiffEq;
use exif_rational::Rational;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geographic coordinate in degrees, minutes and seconds.
///
/// Each component is an unsigned [`Rational`], as in the `GPSLatitude` and `GPSLongitude` EXIF tags. The
/// sign of the coordinate is given by its [`Direction`]. Components that were never set hold
/// [`Rational::empty`].
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoCoordinate {
    degrees: Rational<u32>,
    minutes: Rational<u32>,
    seconds: Rational<u32>,
    direction: Option<Direction>,
}

impl GeoCoordinate {
    /// Creates a coordinate with all components empty and no direction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decomposes decimal degrees into degrees, minutes and seconds. The direction is not set.
    ///
    /// Integer degrees and minutes are split off, the rest becomes (possibly fractional) seconds.
    /// Negative values cannot be represented by unsigned components and give
    /// [`GeoError::Rational`]; use [`GeoCoordinate::from_latitude`] or
    /// [`GeoCoordinate::from_longitude`] for signed values.
    pub fn from_decimal(value: f64) -> Result<Self, GeoError> {
        let degrees = value.trunc();
        let minutes = (value % 1.0) * 60.0;
        let seconds = (minutes % 1.0) * 60.0;

        Self::from_dms(degrees, minutes.trunc(), seconds)
    }

    /// Creates a coordinate from decimal degrees, minutes and seconds. Every component is
    /// approximated with [`Rational::approximate`].
    pub fn from_dms(degrees: f64, minutes: f64, seconds: f64) -> Result<Self, GeoError> {
        let mut coordinate = Self::new();
        coordinate.set_degrees(degrees)?;
        coordinate.set_minutes(minutes)?;
        coordinate.set_seconds(seconds)?;

        Ok(coordinate)
    }

    /// Creates a coordinate from exact rational components.
    pub fn from_rational_triple(
        degrees: Rational<u32>,
        minutes: Rational<u32>,
        seconds: Rational<u32>,
    ) -> Self {
        Self {
            degrees,
            minutes,
            seconds,
            direction: None,
        }
    }

    /// Creates a coordinate from the raw value of a `GPSLatitude`/`GPSLongitude` tag.
    pub fn from_rational_slice(values: &[Rational<u32>]) -> Result<Self, GeoError> {
        match values {
            [degrees, minutes, seconds] => {
                Ok(Self::from_rational_triple(*degrees, *minutes, *seconds))
            }
            _ => Err(GeoError::InvalidTriple(values.len())),
        }
    }

    /// Creates a latitude from signed decimal degrees. Negative values are southern.
    pub fn from_latitude(value: f64) -> Result<Self, GeoError> {
        Self::from_signed(value, Direction::North, Direction::South)
    }

    /// Creates a longitude from signed decimal degrees. Negative values are western.
    pub fn from_longitude(value: f64) -> Result<Self, GeoError> {
        Self::from_signed(value, Direction::East, Direction::West)
    }

    fn from_signed(value: f64, positive: Direction, negative: Direction) -> Result<Self, GeoError> {
        let direction = if value < 0.0 { negative } else { positive };
        Ok(Self::from_decimal(value.abs())?.with_direction(Some(direction)))
    }

    /// Degrees component.
    pub fn degrees(&self) -> Rational<u32> {
        self.degrees
    }

    /// Minutes component.
    pub fn minutes(&self) -> Rational<u32> {
        self.minutes
    }

    /// Seconds component.
    pub fn seconds(&self) -> Rational<u32> {
        self.seconds
    }

    /// Hemisphere of the coordinate.
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Sets degrees from a decimal value.
    pub fn set_degrees(&mut self, value: f64) -> Result<(), GeoError> {
        self.degrees = Rational::approximate(value)?;
        Ok(())
    }

    /// Sets minutes from a decimal value.
    pub fn set_minutes(&mut self, value: f64) -> Result<(), GeoError> {
        self.minutes = Rational::approximate(value)?;
        Ok(())
    }

    /// Sets seconds from a decimal value.
    pub fn set_seconds(&mut self, value: f64) -> Result<(), GeoError> {
        self.seconds = Rational::approximate(value)?;
        Ok(())
    }

    /// Sets the hemisphere of the coordinate.
    pub fn set_direction(&mut self, direction: Option<Direction>) {
        self.direction = direction;
    }

    /// Sets the hemisphere from a reference string (see [`Direction::from_ref`]).
    ///
    /// On error the current direction is kept.
    pub fn set_direction_ref(&mut self, reference: &str) -> Result<(), GeoError> {
        self.direction = Direction::from_ref(reference)?;
        Ok(())
    }

    /// Returns a copy of the coordinate with the given hemisphere.
    pub fn with_direction(self, direction: Option<Direction>) -> Self {
        Self { direction, ..self }
    }

    /// Components of the coordinate: `[degrees, minutes, seconds]`.
    pub fn to_rational_triple(&self) -> [Rational<u32>; 3] {
        [self.degrees, self.minutes, self.seconds]
    }

    /// Signed decimal degrees.
    ///
    /// Southern and western coordinates are negative. Empty and indeterminate components count as
    /// zero.
    pub fn value(&self) -> f64 {
        let minutes = self.minutes.to_f64() + self.seconds.to_f64() / 60.0;
        let value = self.degrees.to_f64() + minutes / 60.0;

        match self.direction {
            Some(direction) if direction.is_negative() && value > 0.0 => -value,
            _ => value,
        }
    }
}

impl AbsDiffEq for GeoCoordinate {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.value().abs_diff_eq(&other.value(), epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use exif_rational::RationalError;

    #[test]
    fn from_decimal() {
        let coordinate = GeoCoordinate::from_decimal(40.6892).unwrap();
        assert_eq!(coordinate.degrees().to_string(), "40/1");
        assert_eq!(coordinate.minutes().to_string(), "41/1");
        assert_eq!(coordinate.seconds().to_string(), "528/25");
        assert_eq!(coordinate.direction(), None);
        assert_abs_diff_eq!(coordinate.value(), 40.6892, epsilon = 1e-9);
    }

    #[test]
    fn from_decimal_negative() {
        assert_matches!(
            GeoCoordinate::from_decimal(-40.5),
            Err(GeoError::Rational(RationalError::Overflow))
        );
    }

    #[test]
    fn from_signed_decimal() {
        let latitude = GeoCoordinate::from_latitude(-33.8688).unwrap();
        assert_eq!(latitude.direction(), Some(Direction::South));
        assert_abs_diff_eq!(latitude.value(), -33.8688, epsilon = 1e-9);

        let longitude = GeoCoordinate::from_longitude(151.2093).unwrap();
        assert_eq!(longitude.direction(), Some(Direction::East));
        assert_abs_diff_eq!(longitude.value(), 151.2093, epsilon = 1e-9);

        let longitude = GeoCoordinate::from_longitude(-74.0445).unwrap();
        assert_eq!(longitude.direction(), Some(Direction::West));
        assert_abs_diff_eq!(longitude.value(), -74.0445, epsilon = 1e-9);
    }

    #[test]
    fn rational_triple_is_exact() {
        let seconds = Rational::new(212_345, 10_000);
        let coordinate = GeoCoordinate::from_rational_triple(
            Rational::from_integer(40),
            Rational::from_integer(41),
            seconds,
        );
        let [degrees, minutes, restored] = coordinate.to_rational_triple();
        assert_eq!(degrees.to_string(), "40/1");
        assert_eq!(minutes.to_string(), "41/1");
        assert_eq!(restored.numerator(), 212_345);
        assert_eq!(restored.denominator(), 10_000);
    }

    #[test]
    fn rational_slice() {
        let values = [Rational::new(51, 1), Rational::new(30, 1), Rational::new(0, 1)];
        let coordinate = GeoCoordinate::from_rational_slice(&values).unwrap();
        assert_abs_diff_eq!(coordinate.value(), 51.5);

        assert_matches!(
            GeoCoordinate::from_rational_slice(&values[..2]),
            Err(GeoError::InvalidTriple(2))
        );
    }

    #[test]
    fn value_with_direction() {
        let mut coordinate = GeoCoordinate::from_dms(10.0, 30.0, 0.0).unwrap();
        assert_abs_diff_eq!(coordinate.value(), 10.5);

        coordinate.set_direction(Some(Direction::South));
        assert_abs_diff_eq!(coordinate.value(), -10.5);

        coordinate.set_direction(Some(Direction::East));
        assert_abs_diff_eq!(coordinate.value(), 10.5);

        coordinate.set_direction(Some(Direction::West));
        assert_abs_diff_eq!(coordinate.value(), -10.5);
    }

    #[test]
    fn value_of_empty_components() {
        let mut coordinate = GeoCoordinate::new();
        coordinate.set_degrees(12.25).unwrap();
        assert!(coordinate.minutes().is_empty());
        assert!(coordinate.seconds().is_empty());
        assert_abs_diff_eq!(coordinate.value(), 12.25);
    }

    #[test]
    fn direction_reference() {
        let mut coordinate = GeoCoordinate::from_decimal(1.0).unwrap();
        coordinate.set_direction_ref("w").unwrap();
        assert_eq!(coordinate.direction(), Some(Direction::West));

        assert_matches!(
            coordinate.set_direction_ref("x"),
            Err(GeoError::InvalidDirection(_))
        );
        assert_eq!(coordinate.direction(), Some(Direction::West));

        coordinate.set_direction_ref("").unwrap();
        assert_eq!(coordinate.direction(), None);
    }

    #[test]
    fn approximate_equality() {
        let parsed = GeoCoordinate::from_dms(40.0, 41.0, 21.12).unwrap();
        let decimal = GeoCoordinate::from_decimal(40.6892).unwrap();
        assert_abs_diff_eq!(parsed, decimal, epsilon = 1e-9);
    }
}
