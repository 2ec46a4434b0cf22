//! Partial application over argument sequences.
//!
//! A function taking its arguments as one ordered `Vec<T>` can have a prefix
//! of them fixed in advance:
//!
//! ```text
//! partial(f, [a, b])([c, d]) = f([a, b, c, d])
//! ```
//!
//! # Examples
//!
//! ```rust
//! use combinars::partial::partial;
//!
//! let concatenate = |parts: Vec<&str>| parts.concat();
//!
//! let greet = partial(concatenate, ["Hello", ", "]);
//! assert_eq!(greet(vec!["world", "!"]), "Hello, world!");
//! assert_eq!(greet(vec!["Rust"]), "Hello, Rust");
//! ```

use std::fmt;

/// A function with a fixed prefix of its arguments.
///
/// The bound arguments are captured once and cloned into every call, so the
/// same `Partial` can be completed any number of times.
///
/// # Type Parameters
///
/// * `T` - The argument type
/// * `F` - The wrapped function, `Fn(Vec<T>) -> R`
pub struct Partial<T, F> {
    function: F,
    bound: Box<[T]>,
}

impl<T, F> Partial<T, F> {
    /// Binds `bound` as the leading arguments of `function`.
    pub fn new(function: F, bound: impl IntoIterator<Item = T>) -> Self {
        Self {
            function,
            bound: bound.into_iter().collect(),
        }
    }

    /// Returns the arguments fixed at creation.
    pub fn bound_arguments(&self) -> &[T] {
        &self.bound
    }
}

impl<T: Clone, F> Partial<T, F> {
    /// Calls the wrapped function with the bound arguments followed by `rest`.
    pub fn call<R>(&self, rest: impl IntoIterator<Item = T>) -> R
    where
        F: Fn(Vec<T>) -> R,
    {
        let mut arguments = self.bound.to_vec();
        arguments.extend(rest);
        (self.function)(arguments)
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Partial<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Partial")
            .field("bound", &self.bound)
            .finish_non_exhaustive()
    }
}

/// Fixes the leading arguments of `function`.
///
/// The returned closure calls `function` with `bound` followed by the
/// arguments it receives, and returns whatever `function` returns.
///
/// # Examples
///
/// ```rust
/// use combinars::partial::partial;
///
/// let sum = |numbers: Vec<i32>| numbers.iter().sum::<i32>();
///
/// let add_ten = partial(sum, [10]);
/// assert_eq!(add_ten(vec![1, 2]), 13);
/// assert_eq!(add_ten(vec![]), 10);
/// ```
pub fn partial<T, R, F, I>(
    function: F,
    bound: I,
) -> impl Fn(Vec<T>) -> R + use<T, R, F, I>
where
    I: IntoIterator<Item = T>,
    T: Clone,
    F: Fn(Vec<T>) -> R,
{
    let partial = Partial::new(function, bound);
    move |rest| partial.call(rest)
}
