//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RationalError {
    /// Input text is not a valid rational value.
    #[error("invalid rational value: {0}")]
    Parse(String),
    /// Result does not fit into the component type of the rational.
    #[error("rational value overflows its component type")]
    Overflow,
}
