//! GPS coordinates as stored in EXIF metadata: degrees, minutes and seconds (see [`GeoCoordinate`]) kept
//! as [`Rational`](exif_rational::Rational) values, with a hemisphere [`Direction`], and latitude/longitude
//! pairs of them (see [`GpsPosition`]).
//!
//! ```
//! use exif_gps::{CoordinateFormat, GeoCoordinate};
//!
//! let coordinate = GeoCoordinate::parse("40°41'21.2\"N").unwrap();
//! assert!((coordinate.value() - 40.6892).abs() < 1e-4);
//! assert_eq!(coordinate.format(CoordinateFormat::Xmp), "40,41.3533333N");
//! ```

mod coordinate;
pub use coordinate::GeoCoordinate;

mod direction;
pub use direction::Direction;

mod format;
pub use format::CoordinateFormat;

mod parse;

mod position;
pub use position::{Altitude, GpsPosition};

#[cfg(feature = "geo-types")]
mod geo_types;

mod error;
pub use error::GeoError;

pub use exif_rational::{Rational, RationalError};
