use crate::coordinate::GeoCoordinate;
use crate::direction::Direction;
use crate::error::GeoError;
use std::str::FromStr;

const DEGREE_SEPARATORS: &[char] = &[',', '°', ' '];
const MINUTE_SEPARATORS: &[char] = &[',', '\'', ' '];
const SECOND_SEPARATORS: &[char] = &[',', '"', ' '];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Degrees,
    SkipSep1,
    Minutes,
    SkipSep2,
    Seconds,
    SkipSep3,
    Done(Option<Direction>),
}

impl ScanState {
    fn next(self) -> Option<Self> {
        match self {
            Self::Degrees => Some(Self::SkipSep1),
            Self::SkipSep1 => Some(Self::Minutes),
            Self::Minutes => Some(Self::SkipSep2),
            Self::SkipSep2 => Some(Self::Seconds),
            Self::Seconds => Some(Self::SkipSep3),
            Self::SkipSep3 | Self::Done(_) => None,
        }
    }
}

struct Scanner {
    chars: Vec<char>,
    pos: usize,
}

impl Scanner {
    fn new(text: &str) -> Self {
        Self {
            chars: text.trim().chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Scans an optional sign, digits and at most one decimal point.
    fn number(&mut self) -> Option<f64> {
        let start = self.pos;
        if matches!(self.peek(), Some('+' | '-')) {
            self.pos += 1;
        }

        let mut digits = 0;
        let mut has_point = false;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                digits += 1;
            } else if c == '.' && !has_point {
                has_point = true;
            } else {
                break;
            }

            self.pos += 1;
        }

        if digits == 0 {
            self.pos = start;
            return None;
        }

        self.chars[start..self.pos]
            .iter()
            .collect::<String>()
            .parse()
            .ok()
    }

    fn skip(&mut self, separators: &[char]) {
        while self.peek().is_some_and(|c| separators.contains(&c)) {
            self.pos += 1;
        }
    }

    /// If the rest of the input is empty or a single direction letter, returns that direction.
    fn trailing_direction(&self) -> Option<Option<Direction>> {
        let rest = &self.chars[self.pos..];
        let first_non_space = rest.iter().position(|c| !c.is_whitespace());
        match first_non_space {
            None => Some(None),
            Some(index) if index + 1 == rest.len() => Direction::from_char(rest[index]).map(Some),
            Some(_) => None,
        }
    }
}

impl GeoCoordinate {
    /// Parses a coordinate from text.
    ///
    /// Accepted forms are decimal degrees (`40.6892`, `40.6892N`) and degrees followed by minutes
    /// and optionally seconds, each of which can be decimal. Degrees can be followed by `,`, `°`
    /// or space, minutes by `,`, `'` or space, seconds by `,`, `"` or space. A single direction
    /// letter can end the input after any of the units:
    ///
    /// ```
    /// use exif_gps::GeoCoordinate;
    ///
    /// for text in ["40.6892N", "40,41.352N", "40°41'21.12\"N", "40 41 21.12 n"] {
    ///     let coordinate = GeoCoordinate::parse(text).unwrap();
    ///     assert!((coordinate.value() - 40.6892).abs() < 1e-6);
    /// }
    /// ```
    ///
    /// Units that are not present in the text stay empty. Every parsed number goes through
    /// [`Rational::approximate`](exif_rational::Rational::approximate).
    pub fn parse(text: &str) -> Result<Self, GeoError> {
        let mut scanner = Scanner::new(text);
        let mut units = Vec::with_capacity(3);
        let mut state = ScanState::Degrees;

        let direction = loop {
            let separators = match state {
                ScanState::Done(direction) => break direction,
                ScanState::Degrees | ScanState::Minutes | ScanState::Seconds => {
                    let Some(value) = scanner.number() else {
                        return Err(parse_error(text, scanner.pos));
                    };
                    units.push(value);
                    None
                }
                ScanState::SkipSep1 => Some(DEGREE_SEPARATORS),
                ScanState::SkipSep2 => Some(MINUTE_SEPARATORS),
                ScanState::SkipSep3 => Some(SECOND_SEPARATORS),
            };

            if let Some(separators) = separators {
                scanner.skip(separators);
            }

            state = match scanner.trailing_direction() {
                Some(direction) => ScanState::Done(direction),
                None => state.next().ok_or_else(|| parse_error(text, scanner.pos))?,
            };
        };

        let mut coordinate = GeoCoordinate::new();
        let mut units = units.into_iter();
        if let Some(degrees) = units.next() {
            coordinate.set_degrees(degrees)?;
        }
        if let Some(minutes) = units.next() {
            coordinate.set_minutes(minutes)?;
        }
        if let Some(seconds) = units.next() {
            coordinate.set_seconds(seconds)?;
        }
        coordinate.set_direction(direction);

        Ok(coordinate)
    }

    /// Parses a coordinate from text, returning `None` if the text is not a valid coordinate.
    pub fn try_parse(text: &str) -> Option<Self> {
        Self::parse(text).ok()
    }
}

impl FromStr for GeoCoordinate {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_error(text: &str, pos: usize) -> GeoError {
    log::debug!("Failed to parse coordinate {text:?} at position {pos}");
    GeoError::Parse(text.to_string())
}
