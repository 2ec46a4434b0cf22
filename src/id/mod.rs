//! Monotonic id generators.
//!
//! Every generator owns its own counter. Two generators never influence each
//! other, even when they start from the same value.
//!
//! # Examples
//!
//! ```rust
//! use combinars::id::id_generator;
//!
//! let mut next_id = id_generator(4);
//! assert_eq!([next_id(), next_id(), next_id()], [4, 5, 6]);
//!
//! let mut other = id_generator(10);
//! assert_eq!([other(), other()], [10, 11]);
//! assert_eq!(next_id(), 7);
//! ```

/// A consecutive sequence of `i64` ids.
///
/// The first id is the start value, each later id is the previous one plus
/// one. Past `i64::MAX` the sequence wraps around to `i64::MIN`.
///
/// `IdGenerator` is an infinite [`Iterator`].
///
/// # Examples
///
/// ```rust
/// use combinars::id::IdGenerator;
///
/// let ids: Vec<i64> = IdGenerator::new(-1).take(3).collect();
/// assert_eq!(ids, vec![-1, 0, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdGenerator {
    current: i64,
    started: bool,
}

static_assertions::assert_impl_all!(IdGenerator: Send, Sync);

impl IdGenerator {
    /// Creates a generator whose first id is `start`.
    pub const fn new(start: i64) -> Self {
        Self {
            current: start,
            started: false,
        }
    }

    /// Returns the next id and advances the generator.
    pub const fn next_id(&mut self) -> i64 {
        if self.started {
            self.current = self.current.wrapping_add(1);
        } else {
            self.started = true;
        }
        self.current
    }

    /// Returns the id the next call to [`next_id`](Self::next_id) will produce.
    pub const fn peek_next(&self) -> i64 {
        if self.started {
            self.current.wrapping_add(1)
        } else {
            self.current
        }
    }
}

impl Iterator for IdGenerator {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        Some(self.next_id())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Creates a closure returning `start`, `start + 1`, `start + 2`, ...
///
/// The counter is owned by the closure and unreachable from outside it.
pub fn id_generator(start: i64) -> impl FnMut() -> i64 {
    let mut generator = IdGenerator::new(start);
    move || generator.next_id()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_does_not_advance() {
        let mut generator = IdGenerator::new(1);
        assert_eq!(generator.peek_next(), 1);
        assert_eq!(generator.peek_next(), 1);
        assert_eq!(generator.next_id(), 1);
        assert_eq!(generator.peek_next(), 2);
    }

    #[test]
    fn test_wraps_past_maximum() {
        let mut generator = IdGenerator::new(i64::MAX);
        assert_eq!(generator.next_id(), i64::MAX);
        assert_eq!(generator.next_id(), i64::MIN);
    }

    #[test]
    fn test_cloned_generator_continues_independently() {
        let mut original = IdGenerator::new(0);
        original.next_id();
        let mut copy = original.clone();
        assert_eq!(original.next_id(), 1);
        assert_eq!(copy.next_id(), 1);
        assert_eq!(original.next_id(), 2);
    }
}
