use crate::error::GeoError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Hemisphere of a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Northern latitude.
    #[cfg_attr(feature = "serde", serde(rename = "N"))]
    North,
    /// Eastern longitude.
    #[cfg_attr(feature = "serde", serde(rename = "E"))]
    East,
    /// Southern latitude.
    #[cfg_attr(feature = "serde", serde(rename = "S"))]
    South,
    /// Western longitude.
    #[cfg_attr(feature = "serde", serde(rename = "W"))]
    West,
}

impl Direction {
    /// Direction from its letter, case-insensitive.
    pub fn from_char(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'N' => Some(Self::North),
            'E' => Some(Self::East),
            'S' => Some(Self::South),
            'W' => Some(Self::West),
            _ => None,
        }
    }

    /// Parses a direction reference as stored in `GPSLatitudeRef`/`GPSLongitudeRef` tags.
    ///
    /// Empty text means no direction. Otherwise only the first character is taken into account.
    pub fn from_ref(reference: &str) -> Result<Option<Self>, GeoError> {
        match reference.chars().next() {
            None => Ok(None),
            Some(letter) => Self::from_char(letter)
                .map(Some)
                .ok_or_else(|| GeoError::InvalidDirection(reference.to_string())),
        }
    }

    /// Uppercase letter of the direction.
    pub fn as_char(&self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }

    /// Returns true for southern and western directions, which give negative decimal degrees.
    pub fn is_negative(&self) -> bool {
        matches!(self, Self::South | Self::West)
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
