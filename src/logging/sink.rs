//! Destinations for log lines.

/// Receives the lines produced by a logged function.
///
/// Implemented for every `Fn(&str)` closure, so any closure that records or
/// prints a line can be used directly.
///
/// # Examples
///
/// ```rust
/// use combinars::logging::LogSink;
/// use std::cell::RefCell;
///
/// let lines = RefCell::new(Vec::new());
/// let sink = |line: &str| lines.borrow_mut().push(line.to_string());
///
/// sink.log("hello");
/// assert_eq!(*lines.borrow(), vec!["hello".to_string()]);
/// ```
pub trait LogSink {
    /// Consumes one complete log line.
    fn log(&self, line: &str);
}

impl<F: Fn(&str)> LogSink for F {
    fn log(&self, line: &str) {
        self(line);
    }
}

/// A sink forwarding every line to `tracing` as an `INFO` event.
///
/// Events are emitted under the `combinars::logging` target.
///
/// # Examples
///
/// ```rust
/// use combinars::logging::{TracingSink, with_logging};
///
/// let logged_abs = with_logging("abs", i32::abs, TracingSink);
/// assert_eq!(logged_abs(-3), 3);
/// ```
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TracingSink;

#[cfg(feature = "tracing")]
impl LogSink for TracingSink {
    fn log(&self, line: &str) {
        tracing::info!(target: "combinars::logging", "{line}");
    }
}
