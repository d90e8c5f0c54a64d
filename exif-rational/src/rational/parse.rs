use super::Rational;
use crate::component::RationalComponent;
use crate::error::RationalError;
use std::str::FromStr;

/// Outcome of [`Rational::try_parse`].
#[derive(Debug, Clone, Copy)]
pub enum ParsedRational<T> {
    /// Both numerator and denominator were present and valid.
    Complete(Rational<T>),
    /// Only a numerator was given. The value carries a zero denominator, same as
    /// [`Rational::parse`] returns for such input, but the parse is not considered successful.
    NumeratorOnly(Rational<T>),
    /// The input was empty or malformed.
    Invalid,
}

impl<T: RationalComponent> ParsedRational<T> {
    /// Returns true only if both parts of the rational were parsed.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// The parsed value. [`Rational::empty`] if the input could not be parsed.
    pub fn value(&self) -> Rational<T> {
        match self {
            Self::Complete(value) | Self::NumeratorOnly(value) => *value,
            Self::Invalid => Rational::empty(),
        }
    }
}

impl<T: RationalComponent> Rational<T> {
    /// Parses a rational from its text form `numerator/denominator`.
    ///
    /// Empty input gives [`Rational::empty`]. A bare number without `/` is accepted as a numerator
    /// with zero denominator.
    pub fn parse(text: &str) -> Result<Self, RationalError> {
        if text.is_empty() {
            return Ok(Self::empty());
        }

        let (numerator, denominator) = split(text);
        let numerator = parse_component(numerator, text)?;
        let denominator = match denominator {
            Some(part) => parse_component(part, text)?,
            None => T::zero(),
        };

        Ok(Self::new(numerator, denominator))
    }

    /// Parses a rational without returning an error.
    ///
    /// Unlike [`Rational::parse`], input without a denominator is not reported as a success, though
    /// the parsed numerator is still available through [`ParsedRational::value`].
    pub fn try_parse(text: &str) -> ParsedRational<T> {
        if text.is_empty() {
            return ParsedRational::Invalid;
        }

        let (numerator, denominator) = split(text);
        let Ok(numerator) = parse_component::<T>(numerator, text) else {
            return ParsedRational::Invalid;
        };

        match denominator {
            Some(part) => match parse_component::<T>(part, text) {
                Ok(denominator) => ParsedRational::Complete(Self::new(numerator, denominator)),
                Err(_) => ParsedRational::Invalid,
            },
            None => ParsedRational::NumeratorOnly(Self::new(numerator, T::zero())),
        }
    }
}

impl<T: RationalComponent> FromStr for Rational<T> {
    type Err = RationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn split(text: &str) -> (&str, Option<&str>) {
    match text.split_once('/') {
        Some((numerator, denominator)) => (numerator, Some(denominator)),
        None => (text, None),
    }
}

fn parse_component<T: RationalComponent>(part: &str, text: &str) -> Result<T, RationalError> {
    part.trim().parse::<T>().map_err(|_| {
        log::debug!("Failed to parse rational component {part:?} of {text:?}");
        RationalError::Parse(text.to_string())
    })
}
