//! Retry for asynchronous operations.

use std::future::Future;

/// Retries an asynchronous operation produced by `factory`.
///
/// `factory` is called once per attempt, so each attempt awaits a fresh
/// future. Attempts run one after another with no delay in between, and the
/// budget matches [`retry`](super::retry): at most `attempts + 1` futures are
/// awaited.
///
/// # Errors
///
/// Returns the error from the final attempt when every attempt fails.
///
/// # Examples
///
/// ```rust
/// use combinars::retry::retry_async;
/// use std::cell::Cell;
///
/// let calls = Cell::new(0);
/// let result = futures::executor::block_on(retry_async(
///     || {
///         calls.set(calls.get() + 1);
///         let current = calls.get();
///         async move { if current < 2 { Err("cold") } else { Ok(current) } }
///     },
///     3,
/// ));
/// assert_eq!(result, Ok(2));
/// ```
pub async fn retry_async<T, E, F, Fut>(mut factory: F, attempts: usize) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut attempt = 0;
    loop {
        match factory().await {
            Ok(value) => return Ok(value),
            Err(error) => {
                super::report_failure(attempt, attempts);
                if attempt == attempts {
                    return Err(error);
                }
                attempt += 1;
            }
        }
    }
}
