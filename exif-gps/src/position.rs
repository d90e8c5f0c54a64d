use crate::coordinate::GeoCoordinate;
use crate::error::GeoError;
use crate::format::CoordinateFormat;
use exif_rational::Rational;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Altitude relative to sea level, as stored in `GPSAltitude` and `GPSAltitudeRef` tags.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Altitude {
    meters: Rational<u32>,
    below_sea_level: bool,
}

impl Altitude {
    /// `GPSAltitudeRef` value for altitudes below sea level.
    pub const BELOW_SEA_LEVEL_REF: u8 = 1;

    /// Creates a new altitude.
    pub fn new(meters: Rational<u32>, below_sea_level: bool) -> Self {
        Self {
            meters,
            below_sea_level,
        }
    }

    /// Creates an altitude from raw tag values. Any reference other than
    /// [`Altitude::BELOW_SEA_LEVEL_REF`] means above sea level.
    pub fn from_exif(meters: Rational<u32>, reference: u8) -> Self {
        Self::new(meters, reference == Self::BELOW_SEA_LEVEL_REF)
    }

    /// Creates an altitude from signed meters.
    pub fn from_meters(meters: f64) -> Result<Self, GeoError> {
        Ok(Self::new(Rational::approximate(meters.abs())?, meters < 0.0))
    }

    /// Unsigned distance from sea level.
    pub fn distance(&self) -> Rational<u32> {
        self.meters
    }

    /// Returns true if the altitude is below sea level.
    pub fn is_below_sea_level(&self) -> bool {
        self.below_sea_level
    }

    /// Signed altitude in meters.
    pub fn meters(&self) -> f64 {
        let meters = self.meters.to_f64();
        if self.below_sea_level {
            -meters
        } else {
            meters
        }
    }
}

/// Position of an image: latitude, longitude and optionally altitude.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GpsPosition {
    latitude: GeoCoordinate,
    longitude: GeoCoordinate,
    altitude: Option<Altitude>,
}

impl GpsPosition {
    /// Creates a position from two coordinates.
    pub fn new(latitude: GeoCoordinate, longitude: GeoCoordinate) -> Self {
        Self {
            latitude,
            longitude,
            altitude: None,
        }
    }

    /// Creates a position from raw values of `GPSLatitudeRef`, `GPSLatitude`, `GPSLongitudeRef` and
    /// `GPSLongitude` tags.
    pub fn from_exif(
        latitude_ref: &str,
        latitude: &[Rational<u32>],
        longitude_ref: &str,
        longitude: &[Rational<u32>],
    ) -> Result<Self, GeoError> {
        let mut lat = GeoCoordinate::from_rational_slice(latitude)?;
        lat.set_direction_ref(latitude_ref)?;

        let mut lon = GeoCoordinate::from_rational_slice(longitude)?;
        lon.set_direction_ref(longitude_ref)?;

        Ok(Self::new(lat, lon))
    }

    /// Creates a position from signed latitude and longitude in decimal degrees.
    pub fn from_decimal(lat: f64, lon: f64) -> Result<Self, GeoError> {
        Ok(Self::new(
            GeoCoordinate::from_latitude(lat)?,
            GeoCoordinate::from_longitude(lon)?,
        ))
    }

    /// Returns a copy of the position with the given altitude.
    pub fn with_altitude(self, altitude: Option<Altitude>) -> Self {
        Self { altitude, ..self }
    }

    /// Latitude coordinate.
    pub fn latitude(&self) -> &GeoCoordinate {
        &self.latitude
    }

    /// Longitude coordinate.
    pub fn longitude(&self) -> &GeoCoordinate {
        &self.longitude
    }

    /// Altitude, if known.
    pub fn altitude(&self) -> Option<Altitude> {
        self.altitude
    }

    /// Latitude in signed decimal degrees.
    pub fn lat(&self) -> f64 {
        self.latitude.value()
    }

    /// Longitude in signed decimal degrees.
    pub fn lon(&self) -> f64 {
        self.longitude.value()
    }

    /// Signed altitude in meters, if known.
    pub fn altitude_meters(&self) -> Option<f64> {
        self.altitude.map(|altitude| altitude.meters())
    }

    /// Formats latitude and longitude separated by a space.
    pub fn format(&self, format: CoordinateFormat) -> String {
        format!(
            "{} {}",
            self.latitude.format(format),
            self.longitude.format(format)
        )
    }
}

impl Display for GpsPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format(CoordinateFormat::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    #[test]
    fn altitude() {
        let altitude = Altitude::from_exif(Rational::new(1234, 10), 0);
        assert!(!altitude.is_below_sea_level());
        assert_abs_diff_eq!(altitude.meters(), 123.4);

        let altitude = Altitude::from_exif(Rational::new(28, 1), Altitude::BELOW_SEA_LEVEL_REF);
        assert!(altitude.is_below_sea_level());
        assert_abs_diff_eq!(altitude.meters(), -28.0);

        let altitude = Altitude::from_meters(-430.5).unwrap();
        assert_eq!(altitude.distance().to_string(), "861/2");
        assert_abs_diff_eq!(altitude.meters(), -430.5);
    }

    #[test]
    fn from_decimal() {
        let position = GpsPosition::from_decimal(-33.8688, 151.2093).unwrap();
        assert_eq!(position.latitude().direction(), Some(Direction::South));
        assert_eq!(position.longitude().direction(), Some(Direction::East));
        assert_abs_diff_eq!(position.lat(), -33.8688, epsilon = 1e-9);
        assert_abs_diff_eq!(position.lon(), 151.2093, epsilon = 1e-9);
        assert_eq!(position.altitude_meters(), None);
    }

    #[test]
    fn from_exif_with_invalid_values() {
        let triple = [Rational::new(1, 1), Rational::new(2, 1), Rational::new(3, 1)];
        assert_matches!(
            GpsPosition::from_exif("N", &triple[..1], "E", &triple),
            Err(GeoError::InvalidTriple(1))
        );
        assert_matches!(
            GpsPosition::from_exif("N", &triple, "Z", &triple),
            Err(GeoError::InvalidDirection(_))
        );
    }

    #[test]
    fn format() {
        let position = GpsPosition::from_decimal(-33.8688, 151.2093)
            .unwrap()
            .with_altitude(Some(Altitude::new(Rational::new(58, 1), false)));
        assert_eq!(position.to_string(), "33,52.128S 151,12.558E");
        assert_eq!(
            position.format(CoordinateFormat::Decimal),
            "-33.8688 151.2093"
        );
        assert_eq!(position.altitude_meters(), Some(58.0));
    }
}
