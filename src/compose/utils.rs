//! Composition combinators.
//!
//! - [`compose`]: The B combinator, `f . g`
//! - [`identity`]: The I combinator

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition:
/// - `compose(identity, f)` is equivalent to `f`
/// - `compose(f, identity)` is equivalent to `f`
///
/// # Examples
///
/// ```
/// use combinars::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Composes two unary functions right-to-left.
///
/// `compose(outer, inner)(x)` evaluates `outer(inner(x))`. Nothing is checked
/// when the composition is built: whatever `inner` or `outer` produce,
/// including `Err` values and panics, reaches the caller unchanged.
///
/// # Type Parameters
///
/// * `A` - The input type of `inner`
/// * `B` - The output type of `inner`, which is the input type of `outer`
/// * `C` - The output type of `outer`
///
/// # Examples
///
/// ```
/// use combinars::compose::compose;
///
/// let parse_then_double = compose(
///     |parsed: Result<i32, std::num::ParseIntError>| parsed.map(|n| n * 2),
///     |text: &str| text.parse::<i32>(),
/// );
///
/// assert_eq!(parse_then_double("21"), Ok(42));
/// assert!(parse_then_double("forty-two").is_err());
/// ```
///
/// ## Type conversion
///
/// ```
/// use combinars::compose::compose;
///
/// let length_of_display = compose(|text: String| text.len(), |n: i32| n.to_string());
/// assert_eq!(length_of_display(12345), 5);
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |argument| outer(inner(argument))
}
