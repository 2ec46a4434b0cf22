//! Error types for the numeric factories.

/// Represents a coefficient list that cannot describe a supported polynomial.
///
/// Only returned by the strict constructor
/// [`Polynom::try_from_coefficients`](super::Polynom::try_from_coefficients);
/// the lenient [`polynom_of`](super::polynom_of) reports the empty case as
/// `None` and ignores extra coefficients instead.
///
/// # Examples
///
/// ```rust
/// use combinars::numeric::PolynomError;
///
/// let error = PolynomError::TooManyCoefficients { count: 4 };
/// assert_eq!(
///     format!("{error}"),
///     "polynomials take at most 3 coefficients, got 4"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolynomError {
    /// No coefficients were given.
    Empty,
    /// More than three coefficients were given.
    TooManyCoefficients {
        /// The number of coefficients that were given.
        count: usize,
    },
}

impl std::fmt::Display for PolynomError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(formatter, "a polynomial needs at least 1 coefficient"),
            Self::TooManyCoefficients { count } => write!(
                formatter,
                "polynomials take at most 3 coefficients, got {count}"
            ),
        }
    }
}

impl std::error::Error for PolynomError {}
