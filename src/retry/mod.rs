//! Bounded retry of fallible functions.
//!
//! [`retry`] invokes a niladic function and, when it returns `Err`, invokes it
//! again up to `attempts` more times.
//!
//! # Behavior
//!
//! - If the first call returns `Ok`, that value is returned without retry
//! - If a call returns `Err`, it is retried while the budget allows
//! - At most `attempts + 1` calls are made in total
//! - If every call fails, the error from the final call is returned
//! - If `attempts` is 0, the function runs exactly once
//!
//! There is no delay between attempts.
//!
//! # Examples
//!
//! ```rust
//! use combinars::retry::retry;
//!
//! let mut calls = 0;
//! let result = retry(
//!     || {
//!         calls += 1;
//!         if calls < 3 { Err("not yet") } else { Ok(calls) }
//!     },
//!     5,
//! );
//! assert_eq!(result, Ok(3));
//! ```

#[cfg(feature = "async")]
mod async_retry;

#[cfg(feature = "async")]
pub use async_retry::retry_async;

#[cfg(feature = "tracing")]
fn report_failure(attempt: usize, attempts: usize) {
    if attempt < attempts {
        tracing::debug!(
            attempt = attempt + 1,
            remaining = attempts - attempt,
            "attempt failed, retrying"
        );
    } else {
        tracing::warn!(attempts = attempt + 1, "all attempts failed");
    }
}

#[cfg(not(feature = "tracing"))]
#[inline]
const fn report_failure(_attempt: usize, _attempts: usize) {}

/// Runs `function` until it succeeds or the budget is spent.
///
/// Returns the outcome together with the number of calls made.
fn run_with_budget<T, E, F>(function: &mut F, attempts: usize) -> (Result<T, E>, usize)
where
    F: FnMut() -> Result<T, E>,
{
    let mut attempt = 0;
    loop {
        match function() {
            Ok(value) => return (Ok(value), attempt + 1),
            Err(error) => {
                report_failure(attempt, attempts);
                if attempt == attempts {
                    return (Err(error), attempt + 1);
                }
                attempt += 1;
            }
        }
    }
}

/// Invokes `function`, retrying up to `attempts` times after a failure.
///
/// # Errors
///
/// Returns the error produced by the final call when all `attempts + 1`
/// calls fail. Errors from earlier calls are dropped.
///
/// # Examples
///
/// ```rust
/// use combinars::retry::retry;
///
/// let mut calls = 0;
/// let result: Result<(), String> = retry(
///     || {
///         calls += 1;
///         Err(format!("failure #{calls}"))
///     },
///     2,
/// );
/// assert_eq!(result, Err("failure #3".to_string()));
/// assert_eq!(calls, 3);
/// ```
pub fn retry<T, E, F>(mut function: F, attempts: usize) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
{
    run_with_budget(&mut function, attempts).0
}

/// A fallible function bundled with its retry budget.
///
/// Each [`call`](Self::call) gets the full budget of `attempts` retries; the
/// budget is not shared between calls. The wrapper also counts every
/// invocation of the underlying function over its whole lifetime. That
/// counter is never reset between calls, but it only records attempts and
/// never limits them: two failing calls with `attempts = 2` make six
/// invocations in total.
///
/// # Examples
///
/// ```rust
/// use combinars::retry::Retrier;
///
/// let mut flaky = 0;
/// let mut retrier = Retrier::new(
///     move || {
///         flaky += 1;
///         if flaky % 2 == 1 { Err("odd") } else { Ok(flaky) }
///     },
///     1,
/// );
///
/// assert_eq!(retrier.call(), Ok(2));
/// assert_eq!(retrier.call(), Ok(4));
/// assert_eq!(retrier.attempts_made(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct Retrier<F> {
    function: F,
    attempts: usize,
    attempts_made: usize,
}

impl<F> Retrier<F> {
    /// Wraps `function` with a budget of `attempts` retries per call.
    pub const fn new(function: F, attempts: usize) -> Self {
        Self {
            function,
            attempts,
            attempts_made: 0,
        }
    }

    /// Returns the number of retries allowed after the first call.
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    /// Returns how many times the wrapped function has been invoked so far.
    pub const fn attempts_made(&self) -> usize {
        self.attempts_made
    }

    /// Invokes the wrapped function under the retry budget.
    ///
    /// # Errors
    ///
    /// Returns the error from the final attempt when every attempt fails.
    pub fn call<T, E>(&mut self) -> Result<T, E>
    where
        F: FnMut() -> Result<T, E>,
    {
        let (outcome, calls) = run_with_budget(&mut self.function, self.attempts);
        self.attempts_made += calls;
        outcome
    }
}
