//! Parametrized numeric function factories.
//!
//! The factories in this module fix their parameters once, at creation time,
//! and return pure `Fn(f64) -> f64` closures.
//!
//! - [`power_of`]: `x ^ exponent`
//! - [`polynom_of`]: polynomials of degree at most two
//!
//! # Examples
//!
//! ```
//! use combinars::numeric::{polynom_of, power_of};
//!
//! let square_root = power_of(0.5);
//! assert_eq!(square_root(4.0), 2.0);
//!
//! let quadratic = polynom_of(&[2.0, 3.0, 5.0]).unwrap();
//! assert_eq!(quadratic(1.0), 10.0);
//!
//! assert!(polynom_of(&[]).is_none());
//! ```

mod error;
mod polynom;
mod power;

pub use error::PolynomError;
pub use polynom::{Polynom, polynom_of};
pub use power::power_of;
