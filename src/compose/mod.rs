//! Function composition.
//!
//! This module builds new unary functions out of existing ones.
//!
//! # Overview
//!
//! - [`compose`]: Compose two functions right-to-left (mathematical composition)
//! - [`identity`]: The identity function, the unit element of composition
//!
//! # Examples
//!
//! ```
//! use combinars::compose::compose;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // compose(f, g)(x) = f(g(x))
//! let composed = compose(add_one, double);
//! assert_eq!(composed(5), 11); // add_one(double(5)) = add_one(10) = 11
//! ```
//!
//! # Mathematical Background
//!
//! Given `f: B -> C` and `g: A -> B`, the composition `(f . g): A -> C` is defined as:
//!
//! ```text
//! (f . g)(x) = f(g(x))
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose(f, compose(g, h)) == compose(compose(f, g), h)`
//! - **Left Identity**: `compose(identity, f) == f`
//! - **Right Identity**: `compose(f, identity) == f`

mod utils;

pub use utils::{compose, identity};
