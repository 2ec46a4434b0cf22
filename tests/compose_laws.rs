#![cfg(feature = "compose")]
//! Property-based tests for function composition laws.
//!
//! ## Composition Laws
//! - **Definition**: `compose(f, g)(x) == f(g(x))`
//! - **Associativity**: `compose(f, compose(g, h)) == compose(compose(f, g), h)`
//! - **Left Identity**: `compose(identity, f) == f`
//! - **Right Identity**: `compose(f, identity) == f`

use combinars::compose::{compose, identity};
use proptest::prelude::*;

proptest! {
    /// Definition: compose(f, g)(x) == f(g(x))
    #[test]
    fn prop_compose_definition(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_sub(7);
        let function2 = |n: i32| n.wrapping_mul(3);

        let composed = compose(function1, function2);

        prop_assert_eq!(composed(x), function1(function2(x)));
    }

    /// Left Identity Law: compose(identity, f)(x) == f(x)
    #[test]
    fn prop_compose_left_identity(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(2);

        let composed = compose(identity, function);

        prop_assert_eq!(composed(x), function(x));
    }

    /// Right Identity Law: compose(f, identity)(x) == f(x)
    #[test]
    fn prop_compose_right_identity(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(2);

        let composed = compose(function, identity);

        prop_assert_eq!(composed(x), function(x));
    }

    /// Associativity Law: compose(f, compose(g, h)) == compose(compose(f, g), h)
    #[test]
    fn prop_compose_associativity(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);
        let function3 = |n: i32| n.wrapping_sub(3);

        let left = compose(function1, compose(function2, function3));
        let right = compose(compose(function1, function2), function3);

        prop_assert_eq!(left(x), right(x));
    }
}
