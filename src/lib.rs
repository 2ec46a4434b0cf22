//! # combinars
//!
//! Closure-based function combinators for Rust.
//!
//! ## Overview
//!
//! Every item in this crate is a small factory that returns a callable value
//! owning its own private state. None of the factories share state, perform
//! I/O, or depend on each other. The crate includes:
//!
//! - **Composition**: [`compose`](compose::compose) and [`identity`](compose::identity)
//! - **Numeric factories**: [`power_of`](numeric::power_of) and [`polynom_of`](numeric::polynom_of)
//! - **Memoization**: [`memoize`](memoize::memoize) and [`try_memoize`](memoize::try_memoize)
//! - **Retry**: [`retry`](retry::retry) and the [`Retrier`](retry::Retrier) wrapper
//! - **Call logging**: [`with_logging`](logging::with_logging)
//! - **Partial application**: [`partial`](partial::partial)
//! - **Id generation**: [`id_generator`](id::id_generator)
//!
//! ## Feature Flags
//!
//! - `compose`: Function composition
//! - `numeric`: Power and polynomial function factories
//! - `memoize`: Per-argument result caching
//! - `retry`: Bounded re-invocation of fallible functions
//! - `logging`: Before/after call logging
//! - `partial`: Partial application over argument sequences
//! - `id`: Monotonic id generators
//! - `async`: Async variants of logging and retry
//! - `tracing`: `tracing` integration for logging and retry
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use combinars::prelude::*;
//!
//! let square_then_negate = compose(|x: f64| -x, power_of(2.0));
//! assert_eq!(square_then_negate(3.0), -9.0);
//!
//! let mut next_id = id_generator(4);
//! assert_eq!([next_id(), next_id(), next_id()], [4, 5, 6]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every factory and the types they return, forming the flat
/// public API surface of the crate.
///
/// # Usage
///
/// ```rust
/// use combinars::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "numeric")]
    pub use crate::numeric::*;

    #[cfg(feature = "memoize")]
    pub use crate::memoize::*;

    #[cfg(feature = "retry")]
    pub use crate::retry::*;

    #[cfg(feature = "logging")]
    pub use crate::logging::*;

    #[cfg(feature = "partial")]
    pub use crate::partial::*;

    #[cfg(feature = "id")]
    pub use crate::id::*;
}

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "numeric")]
pub mod numeric;

#[cfg(feature = "memoize")]
pub mod memoize;

#[cfg(feature = "retry")]
pub mod retry;

#[cfg(feature = "logging")]
pub mod logging;

#[cfg(feature = "partial")]
pub mod partial;

#[cfg(feature = "id")]
pub mod id;
