//! Before/after call logging.
//!
//! [`with_logging`] decorates a function so that every call writes two lines
//! to a [`LogSink`]:
//!
//! ```text
//! <name>(<arguments>) starts
//! <name>(<arguments>) ends
//! ```
//!
//! The "starts" line is written before the function runs and the "ends" line
//! after it returns. Rust closures carry no name, so the name is passed in
//! explicitly. Argument rendering is described in [`LogArguments`].
//!
//! # Examples
//!
//! ```rust
//! use combinars::logging::with_logging;
//! use std::cell::RefCell;
//!
//! let lines = RefCell::new(Vec::new());
//! let logged_cos = with_logging("cos", f64::cos, |line: &str| {
//!     lines.borrow_mut().push(line.to_string());
//! });
//!
//! let result = logged_cos(std::f64::consts::PI);
//!
//! assert!((result + 1.0).abs() < 1e-12);
//! assert_eq!(
//!     *lines.borrow(),
//!     vec![
//!         "cos(3.141592653589793) starts".to_string(),
//!         "cos(3.141592653589793) ends".to_string(),
//!     ]
//! );
//! ```
//!
//! Functions of several arguments take them as one tuple:
//!
//! ```rust
//! use combinars::logging::with_logging;
//! use std::cell::RefCell;
//!
//! let lines = RefCell::new(Vec::new());
//! let count_matches = with_logging(
//!     "countMatches",
//!     |(words, minimum): (Vec<&str>, usize)| {
//!         words.iter().filter(|word| word.len() >= minimum).count()
//!     },
//!     |line: &str| lines.borrow_mut().push(line.to_string()),
//! );
//!
//! assert_eq!(count_matches((vec!["expected", "test"], 5)), 1);
//! assert_eq!(lines.borrow()[0], r#"countMatches(["expected","test"],5) starts"#);
//! ```

mod format;
mod sink;

pub use format::{LogArguments, LogValue};
#[cfg(feature = "tracing")]
pub use sink::TracingSink;
pub use sink::LogSink;

use std::fmt;

/// A function decorated with start/end logging.
///
/// Built by [`with_logging`] (and `with_logging_async` with the `async`
/// feature). Use it directly to keep the decorated function as a named
/// value or to call an async function through `call_async`.
pub struct Logged<F, S> {
    name: String,
    function: F,
    sink: S,
}

impl<F, S> Logged<F, S> {
    /// Decorates `function`, reporting it as `name` to `sink`.
    pub fn new(name: impl Into<String>, function: F, sink: S) -> Self {
        Self {
            name: name.into(),
            function,
            sink,
        }
    }

    /// Returns the name used in log lines.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn invocation<A: LogArguments>(&self, arguments: &A) -> String {
        format!("{}({})", self.name, arguments.format_arguments())
    }
}

impl<F, S: LogSink> Logged<F, S> {
    /// Calls the decorated function, logging before and after.
    ///
    /// A panic in the decorated function unwinds past the "ends" line, which
    /// is then never written.
    pub fn call<A, R>(&self, arguments: A) -> R
    where
        A: LogArguments,
        F: Fn(A) -> R,
    {
        let invocation = self.invocation(&arguments);
        self.sink.log(&format!("{invocation} starts"));
        let result = (self.function)(arguments);
        self.sink.log(&format!("{invocation} ends"));
        result
    }

    /// Calls an asynchronous decorated function, logging before and after.
    ///
    /// The "ends" line is written only once the returned future has completed.
    #[cfg(feature = "async")]
    pub async fn call_async<A, Fut>(&self, arguments: A) -> Fut::Output
    where
        A: LogArguments,
        F: Fn(A) -> Fut,
        Fut: std::future::Future,
    {
        let invocation = self.invocation(&arguments);
        self.sink.log(&format!("{invocation} starts"));
        let result = (self.function)(arguments).await;
        self.sink.log(&format!("{invocation} ends"));
        result
    }
}

impl<F, S> fmt::Debug for Logged<F, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Logged")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Decorates `function` with start/end logging to `sink`.
///
/// The returned closure renders its argument, writes
/// `"<name>(<arguments>) starts"`, calls `function`, writes
/// `"<name>(<arguments>) ends"` and returns the result unchanged.
pub fn with_logging<A, R, F, S, N>(
    name: N,
    function: F,
    sink: S,
) -> impl Fn(A) -> R + use<A, R, F, S, N>
where
    N: Into<String>,
    A: LogArguments,
    F: Fn(A) -> R,
    S: LogSink,
{
    let logged = Logged::new(name, function, sink);
    move |arguments| logged.call(arguments)
}

/// Decorates an asynchronous `function` with start/end logging to `sink`.
///
/// Each call returns a boxed future. The "ends" line is written after the
/// decorated function's future completes, right before the boxed future
/// resolves.
///
/// # Examples
///
/// ```rust
/// use combinars::logging::with_logging_async;
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let lines = Rc::new(RefCell::new(Vec::new()));
/// let recorded = Rc::clone(&lines);
/// let fetch = with_logging_async(
///     "fetch",
///     |id: u32| async move { id * 2 },
///     move |line: &str| recorded.borrow_mut().push(line.to_string()),
/// );
///
/// assert_eq!(futures::executor::block_on(fetch(21)), 42);
/// assert_eq!(lines.borrow().as_slice(), ["fetch(21) starts", "fetch(21) ends"]);
/// ```
#[cfg(feature = "async")]
pub fn with_logging_async<A, F, Fut, S, N>(
    name: N,
    function: F,
    sink: S,
) -> impl Fn(A) -> futures::future::LocalBoxFuture<'static, Fut::Output>
    + use<A, F, Fut, S, N>
where
    N: Into<String>,
    A: LogArguments + 'static,
    F: Fn(A) -> Fut + 'static,
    Fut: std::future::Future + 'static,
    S: LogSink + 'static,
{
    use futures::FutureExt;
    use std::rc::Rc;

    let logged = Rc::new(Logged::new(name, function, sink));
    move |arguments| {
        let logged = Rc::clone(&logged);
        async move { logged.call_async(arguments).await }.boxed_local()
    }
}
