//! Per-argument memoization.
//!
//! This module provides [`Memoized`], a function wrapper that caches each
//! result under the argument that produced it, and the factories
//! [`memoize`] and [`try_memoize`] that return it as a plain closure.
//!
//! # Examples
//!
//! ```rust
//! use combinars::memoize::memoize;
//! use std::cell::Cell;
//!
//! let call_count = Cell::new(0);
//! let slow_square = |x: u64| {
//!     call_count.set(call_count.get() + 1);
//!     x * x
//! };
//!
//! let square = memoize(slow_square);
//! assert_eq!(square(5), 25);
//! assert_eq!(square(5), 25);
//! assert_eq!(call_count.get(), 1); // Second call served from the cache
//!
//! assert_eq!(square(6), 36);
//! assert_eq!(call_count.get(), 2);
//! ```
//!
//! # Cache Semantics
//!
//! - Keys are compared with [`Eq`] exactly as given, without normalization.
//! - The cache only grows; nothing is ever evicted.
//! - A call that fails (an `Err` from [`try_memoize`], or a panic) stores
//!   nothing, so the next call with the same argument runs the function again.

use std::borrow::Borrow;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// A function paired with a private cache of its results.
///
/// `Memoized<A, B, F>` wraps `F` and stores every successfully computed `B`
/// under the argument `A` that produced it. Cached values are cloned out on
/// each hit.
///
/// # Type Parameters
///
/// * `A` - The argument type, used as the cache key
/// * `B` - The cached value type
/// * `F` - The wrapped function: `Fn(A) -> B` for [`call`](Self::call),
///   `Fn(A) -> Result<B, E>` for [`try_call`](Self::try_call)
///
/// # Thread Safety
///
/// The cache lives in a [`RefCell`], so `Memoized` is not `Sync`. Wrap it in a
/// `Mutex` if it must be shared between threads.
pub struct Memoized<A, B, F> {
    function: F,
    cache: RefCell<HashMap<A, B>>,
}

static_assertions::assert_not_impl_any!(Memoized<i32, i32, fn(i32) -> i32>: Sync);

impl<A, B, F> Memoized<A, B, F> {
    /// Wraps `function` with an empty cache.
    pub fn new(function: F) -> Self {
        Self {
            function,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Returns the number of cached entries.
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Returns `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }
}

impl<A: Hash + Eq, B: Clone, F> Memoized<A, B, F> {
    /// Returns `true` if a result is cached for `argument`.
    pub fn contains<Q>(&self, argument: &Q) -> bool
    where
        A: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.cache.borrow().contains_key(argument)
    }

    fn cached<Q>(&self, argument: &Q) -> Option<B>
    where
        A: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.cache.borrow().get(argument).cloned()
    }

    fn store(&self, argument: A, value: B) {
        self.cache.borrow_mut().insert(argument, value);
    }
}

impl<A, B, F> Memoized<A, B, F>
where
    A: Hash + Eq + Clone,
    B: Clone,
    F: Fn(A) -> B,
{
    /// Returns the cached result for `argument`, computing it on a miss.
    ///
    /// The cache is not borrowed while the wrapped function runs.
    pub fn call(&self, argument: A) -> B {
        if let Some(value) = self.cached(&argument) {
            return value;
        }
        let value = (self.function)(argument.clone());
        self.store(argument, value.clone());
        value
    }
}

impl<A, B, F> Memoized<A, B, F>
where
    A: Hash + Eq + Clone,
    B: Clone,
{
    /// Returns the cached result for `argument`, computing it on a miss.
    ///
    /// Only `Ok` values are cached.
    ///
    /// # Errors
    ///
    /// Returns the wrapped function's error unchanged. Nothing is cached for
    /// `argument` in that case.
    pub fn try_call<E>(&self, argument: A) -> Result<B, E>
    where
        F: Fn(A) -> Result<B, E>,
    {
        if let Some(value) = self.cached(&argument) {
            return Ok(value);
        }
        let value = (self.function)(argument.clone())?;
        self.store(argument, value.clone());
        Ok(value)
    }
}

impl<A, B, F> fmt::Debug for Memoized<A, B, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoized")
            .field("cached_entries", &self.len())
            .finish_non_exhaustive()
    }
}

/// Wraps `function` with a per-argument result cache.
///
/// The returned closure calls `function` at most once per distinct argument.
///
/// # Examples
///
/// ```rust
/// use combinars::memoize::memoize;
///
/// let shout = memoize(|word: String| word.to_uppercase());
/// assert_eq!(shout("hello".to_string()), "HELLO");
/// ```
pub fn memoize<A, B, F>(function: F) -> impl Fn(A) -> B
where
    A: Hash + Eq + Clone,
    B: Clone,
    F: Fn(A) -> B,
{
    let memoized = Memoized::new(function);
    move |argument| memoized.call(argument)
}

/// Wraps a fallible `function` with a per-argument cache of its successes.
///
/// Errors are returned to the caller and never cached.
///
/// # Examples
///
/// ```rust
/// use combinars::memoize::try_memoize;
///
/// let parse = try_memoize(|text: &'static str| text.parse::<i32>());
/// assert_eq!(parse("42"), Ok(42));
/// assert!(parse("x").is_err());
/// ```
pub fn try_memoize<A, B, E, F>(function: F) -> impl Fn(A) -> Result<B, E>
where
    A: Hash + Eq + Clone,
    B: Clone,
    F: Fn(A) -> Result<B, E>,
{
    let memoized = Memoized::new(function);
    move |argument| memoized.try_call(argument)
}
