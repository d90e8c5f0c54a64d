use crate::coordinate::GeoCoordinate;
use crate::error::GeoError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Text representation of a [`GeoCoordinate`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateFormat {
    /// Signed decimal degrees without direction: `40.6892`. Selector `N`.
    Decimal,
    /// Comma separated form used by XMP: `40,41,21N` or `40,41.352N`. Selector `X`.
    #[default]
    Xmp,
    /// Degrees, minutes and seconds with unit marks: `40° 41' 21" N`. Selector `D`.
    Dms,
}

/// Marks placed around coordinate components.
struct Marks {
    degrees: &'static str,
    minutes: &'static str,
    seconds: &'static str,
    fractional_minutes: &'static str,
    decimal_degrees: &'static str,
    direction: &'static str,
}

impl CoordinateFormat {
    fn marks(&self) -> Marks {
        match self {
            Self::Dms => Marks {
                degrees: "° ",
                minutes: "' ",
                seconds: "\"",
                fractional_minutes: "'",
                decimal_degrees: "°",
                direction: " ",
            },
            Self::Decimal | Self::Xmp => Marks {
                degrees: ",",
                minutes: ",",
                seconds: "",
                fractional_minutes: "",
                decimal_degrees: "",
                direction: "",
            },
        }
    }
}

impl FromStr for CoordinateFormat {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "N" | "n" => Ok(Self::Decimal),
            "" | "X" | "x" => Ok(Self::Xmp),
            "D" | "d" => Ok(Self::Dms),
            _ => Err(GeoError::InvalidFormat(s.to_string())),
        }
    }
}

impl GeoCoordinate {
    /// Formats the coordinate.
    ///
    /// [`CoordinateFormat::Xmp`] and [`CoordinateFormat::Dms`] fall back to decimal degrees (with
    /// the direction, if any) when one of the components is empty or the degrees are fractional.
    /// If minutes or seconds are fractional, they are combined into decimal minutes.
    pub fn format(&self, format: CoordinateFormat) -> String {
        match format {
            CoordinateFormat::Decimal => format_decimal(self.value()),
            CoordinateFormat::Xmp | CoordinateFormat::Dms => self.format_segments(format.marks()),
        }
    }

    /// Formats the coordinate with a format selector: `N`, `X` or `D`, case-insensitive. An empty
    /// selector means [`CoordinateFormat::default`].
    pub fn to_string_with(&self, selector: &str) -> Result<String, GeoError> {
        Ok(self.format(selector.parse()?))
    }

    fn format_segments(&self, marks: Marks) -> String {
        let [degrees, minutes, seconds] = self.to_rational_triple();

        let mut result = if degrees.is_empty()
            || minutes.is_empty()
            || seconds.is_empty()
            || !degrees.is_integer()
        {
            log::trace!("Formatting {self:?} as decimal degrees");
            let value = match self.direction() {
                Some(_) => self.value().abs(),
                None => self.value(),
            };

            format!("{}{}", format_decimal(value), marks.decimal_degrees)
        } else if !minutes.is_integer() || !seconds.is_integer() {
            let minutes = minutes.to_f64() + seconds.to_f64() / 60.0;
            format!(
                "{}{}{}{}",
                degrees.numerator(),
                marks.degrees,
                format_decimal(minutes),
                marks.fractional_minutes
            )
        } else {
            format!(
                "{}{}{}{}{}{}",
                degrees.numerator(),
                marks.degrees,
                minutes.numerator(),
                marks.minutes,
                seconds.numerator(),
                marks.seconds
            )
        };

        if let Some(direction) = self.direction() {
            result.push_str(marks.direction);
            result.push(direction.as_char());
        }

        result
    }
}

impl Display for GeoCoordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format(CoordinateFormat::default()))
    }
}

/// Decimal number with up to 7 fractional digits, trailing zeros removed.
fn format_decimal(value: f64) -> String {
    let text = format!("{value:.7}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    match text {
        "-0" => "0".to_string(),
        _ => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;
    use assert_matches::assert_matches;
    use exif_rational::Rational;

    fn dms(degrees: u32, minutes: u32, seconds: Rational<u32>) -> GeoCoordinate {
        GeoCoordinate::from_rational_triple(
            Rational::from_integer(degrees),
            Rational::from_integer(minutes),
            seconds,
        )
    }

    #[test]
    fn decimal_numbers() {
        assert_eq!(format_decimal(40.6892), "40.6892");
        assert_eq!(format_decimal(40.0), "40");
        assert_eq!(format_decimal(0.0), "0");
        assert_eq!(format_decimal(-0.000_000_01), "0");
        assert_eq!(format_decimal(-12.5), "-12.5");
        assert_eq!(format_decimal(41.353_333_333), "41.3533333");
        assert_eq!(format_decimal(100.0), "100");
    }

    #[test]
    fn format_selectors() {
        assert_eq!("N".parse::<CoordinateFormat>(), Ok(CoordinateFormat::Decimal));
        assert_eq!("x".parse::<CoordinateFormat>(), Ok(CoordinateFormat::Xmp));
        assert_eq!("d".parse::<CoordinateFormat>(), Ok(CoordinateFormat::Dms));
        assert_eq!("".parse::<CoordinateFormat>(), Ok(CoordinateFormat::default()));
        assert_matches!(
            "G".parse::<CoordinateFormat>(),
            Err(GeoError::InvalidFormat(_))
        );
        assert_matches!(
            GeoCoordinate::new().to_string_with("xx"),
            Err(GeoError::InvalidFormat(_))
        );
    }

    #[test]
    fn decimal_format() {
        let coordinate = GeoCoordinate::from_decimal(40.6892).unwrap();
        assert_eq!(coordinate.format(CoordinateFormat::Decimal), "40.6892");

        let coordinate = coordinate.with_direction(Some(Direction::South));
        assert_eq!(coordinate.to_string_with("N").unwrap(), "-40.6892");
    }

    #[test]
    fn integer_segments() {
        let coordinate =
            dms(40, 41, Rational::from_integer(21)).with_direction(Some(Direction::North));
        assert_eq!(coordinate.format(CoordinateFormat::Xmp), "40,41,21N");
        assert_eq!(coordinate.format(CoordinateFormat::Dms), "40° 41' 21\" N");
        assert_eq!(coordinate.to_string(), "40,41,21N");

        assert_eq!(coordinate.to_string_with("").unwrap(), "40,41,21N");

        let coordinate = coordinate.with_direction(None);
        assert_eq!(coordinate.to_string_with("X").unwrap(), "40,41,21");
        assert_eq!(coordinate.to_string_with("D").unwrap(), "40° 41' 21\"");
    }

    #[test]
    fn fractional_seconds_collapse_into_minutes() {
        let coordinate =
            dms(40, 41, Rational::new(106, 5)).with_direction(Some(Direction::North));
        assert_eq!(coordinate.format(CoordinateFormat::Xmp), "40,41.3533333N");
        assert_eq!(coordinate.format(CoordinateFormat::Dms), "40° 41.3533333' N");

        let coordinate = GeoCoordinate::from_decimal(40.6892).unwrap();
        assert_eq!(coordinate.format(CoordinateFormat::Xmp), "40,41.352");
    }

    #[test]
    fn fractional_minutes() {
        let coordinate = GeoCoordinate::from_rational_triple(
            Rational::new(51, 1),
            Rational::new(61, 2),
            Rational::new(0, 1),
        )
        .with_direction(Some(Direction::West));
        assert_eq!(coordinate.to_string(), "51,30.5W");
    }

    #[test]
    fn decimal_fallback() {
        // Parsed degrees are approximated: 40.6892 becomes 49356/1213.
        let coordinate = GeoCoordinate::parse("40.6892N").unwrap();
        assert_eq!(coordinate.degrees().to_string(), "49356/1213");
        assert_eq!(coordinate.format(CoordinateFormat::Xmp), "40.6892003N");
        assert_eq!(coordinate.format(CoordinateFormat::Dms), "40.6892003° N");

        let coordinate = GeoCoordinate::parse("74.0445W").unwrap();
        assert_eq!(coordinate.format(CoordinateFormat::Xmp), "74.0444994W");
        assert_eq!(coordinate.format(CoordinateFormat::Decimal), "-74.0444994");

        let coordinate = GeoCoordinate::parse("12.5").unwrap();
        assert_eq!(coordinate.format(CoordinateFormat::Dms), "12.5°");

        let coordinate = GeoCoordinate::from_rational_triple(
            Rational::new(81, 2),
            Rational::new(0, 1),
            Rational::new(0, 1),
        );
        assert_eq!(coordinate.to_string(), "40.5");
    }

    #[test]
    fn text_round_trip() {
        let original =
            dms(33, 52, Rational::new(192, 25)).with_direction(Some(Direction::South));
        for format in [CoordinateFormat::Xmp, CoordinateFormat::Dms] {
            let text = original.format(format);
            let parsed = GeoCoordinate::parse(&text).unwrap();
            assert_eq!(parsed.direction(), Some(Direction::South));
            approx::assert_abs_diff_eq!(parsed, original, epsilon = 1e-7);
        }
    }
}
