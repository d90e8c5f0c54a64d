//! Error type used by the crate.

use exif_rational::RationalError;
use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeoError {
    /// Input text is not a valid coordinate.
    #[error("invalid coordinate: {0}")]
    Parse(String),
    /// Unknown format selector.
    #[error("unknown coordinate format: {0}")]
    InvalidFormat(String),
    /// Direction reference is not one of `N`, `E`, `S`, `W`.
    #[error("invalid direction: {0}")]
    InvalidDirection(String),
    /// Raw coordinate value does not consist of exactly three rationals.
    #[error("expected degrees, minutes and seconds, got {0} values")]
    InvalidTriple(usize),
    /// A component of the coordinate cannot be represented.
    #[error(transparent)]
    Rational(#[from] RationalError),
}
