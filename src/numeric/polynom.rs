//! Polynomial function factory.
//!
//! Coefficients are given from the highest power down, so `[a, b, c]`
//! describes `a*x² + b*x + c`.

use std::fmt;

use super::PolynomError;

/// A polynomial of degree zero, one, or two.
///
/// # Examples
///
/// ```rust
/// use combinars::numeric::Polynom;
///
/// let linear = Polynom::from_coefficients(&[1.0, -3.0]).unwrap();
/// assert_eq!(linear, Polynom::Linear(1.0, -3.0));
/// assert_eq!(linear.evaluate(5.0), 2.0);
/// assert_eq!(linear.to_string(), "1x - 3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Polynom {
    /// `q(x) = a`
    Constant(f64),
    /// `q(x) = a*x + b`
    Linear(f64, f64),
    /// `q(x) = a*x² + b*x + c`
    Quadratic(f64, f64, f64),
}

impl Polynom {
    /// Builds a polynomial, ignoring every coefficient past the third.
    ///
    /// Returns `None` for an empty slice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::numeric::Polynom;
    ///
    /// assert_eq!(Polynom::from_coefficients(&[]), None);
    /// assert_eq!(
    ///     Polynom::from_coefficients(&[1.0, 2.0, 3.0, 4.0]),
    ///     Some(Polynom::Quadratic(1.0, 2.0, 3.0))
    /// );
    /// ```
    #[must_use]
    pub fn from_coefficients(coefficients: &[f64]) -> Option<Self> {
        match *coefficients {
            [] => None,
            [a] => Some(Self::Constant(a)),
            [a, b] => Some(Self::Linear(a, b)),
            [a, b, c, ..] => Some(Self::Quadratic(a, b, c)),
        }
    }

    /// Builds a polynomial, rejecting empty and over-long coefficient lists.
    ///
    /// # Errors
    ///
    /// - [`PolynomError::Empty`] when `coefficients` is empty
    /// - [`PolynomError::TooManyCoefficients`] when it holds more than three values
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::numeric::{Polynom, PolynomError};
    ///
    /// assert_eq!(
    ///     Polynom::try_from_coefficients(&[1.0, 2.0, 3.0, 4.0]),
    ///     Err(PolynomError::TooManyCoefficients { count: 4 })
    /// );
    /// ```
    pub fn try_from_coefficients(coefficients: &[f64]) -> Result<Self, PolynomError> {
        if coefficients.len() > 3 {
            return Err(PolynomError::TooManyCoefficients {
                count: coefficients.len(),
            });
        }
        Self::from_coefficients(coefficients).ok_or(PolynomError::Empty)
    }

    /// Evaluates the polynomial at `x`.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        match *self {
            Self::Constant(a) => a,
            Self::Linear(a, b) => a * x + b,
            Self::Quadratic(a, b, c) => a * x * x + b * x + c,
        }
    }

    /// Returns the degree implied by the number of coefficients.
    ///
    /// A leading zero coefficient does not lower the degree.
    #[must_use]
    pub const fn degree(&self) -> usize {
        match self {
            Self::Constant(_) => 0,
            Self::Linear(..) => 1,
            Self::Quadratic(..) => 2,
        }
    }

    /// Returns the coefficients, highest power first.
    #[must_use]
    pub fn coefficients(&self) -> Vec<f64> {
        match *self {
            Self::Constant(a) => vec![a],
            Self::Linear(a, b) => vec![a, b],
            Self::Quadratic(a, b, c) => vec![a, b, c],
        }
    }

    /// Converts the polynomial into a plain closure.
    pub fn into_fn(self) -> impl Fn(f64) -> f64 + Copy {
        move |x| self.evaluate(x)
    }
}

fn write_term(
    formatter: &mut fmt::Formatter<'_>,
    coefficient: f64,
    variable: &str,
) -> fmt::Result {
    if coefficient.is_sign_negative() {
        write!(formatter, " - {}{variable}", -coefficient)
    } else {
        write!(formatter, " + {coefficient}{variable}")
    }
}

impl fmt::Display for Polynom {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Constant(a) => write!(formatter, "{a}"),
            Self::Linear(a, b) => {
                write!(formatter, "{a}x")?;
                write_term(formatter, b, "")
            }
            Self::Quadratic(a, b, c) => {
                write!(formatter, "{a}x²")?;
                write_term(formatter, b, "x")?;
                write_term(formatter, c, "")
            }
        }
    }
}

/// Creates a function evaluating the polynomial with the given coefficients.
///
/// | coefficients | function               |
/// |--------------|------------------------|
/// | `[]`         | `None`                 |
/// | `[a]`        | `x -> a`               |
/// | `[a, b]`     | `x -> a*x + b`         |
/// | `[a, b, c]`  | `x -> a*x² + b*x + c`  |
///
/// Coefficients past the third are ignored. Use
/// [`Polynom::try_from_coefficients`] to reject them instead.
///
/// # Examples
///
/// ```
/// use combinars::numeric::polynom_of;
///
/// assert!(polynom_of(&[]).is_none());
///
/// let constant = polynom_of(&[8.0]).unwrap();
/// assert_eq!(constant(-100.0), 8.0);
///
/// let linear = polynom_of(&[1.0, -3.0]).unwrap();
/// assert_eq!(linear(5.0), 2.0);
/// ```
#[must_use]
pub fn polynom_of(coefficients: &[f64]) -> Option<impl Fn(f64) -> f64 + Copy + use<>> {
    Polynom::from_coefficients(coefficients).map(Polynom::into_fn)
}
