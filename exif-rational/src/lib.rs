//! Rational values as they are stored in EXIF metadata: a pair of integers that is kept exactly as
//! written by the producer, so `(0, 0)` (absent value) and `(n, 0)` (indeterminate value) survive
//! parsing, comparison and formatting.
//!
//! ```
//! use exif_rational::Rational;
//!
//! let half = Rational::<u32>::approximate(0.5).unwrap();
//! assert_eq!(half, Rational::new(1, 2));
//!
//! let sum = (Rational::<i32>::new(1, 2) + Rational::new(1, 3)).reduce().unwrap();
//! assert_eq!(sum.to_string(), "5/6");
//! ```

pub mod component;
pub use component::RationalComponent;

mod rational;
pub use rational::*;

mod error;
pub use error::RationalError;
