//! Unit tests for id generators.

#![cfg(feature = "id")]

use combinars::id::{IdGenerator, id_generator};
use rstest::rstest;

#[rstest]
fn test_id_generator_counts_up_from_start() {
    let mut next_id = id_generator(4);
    assert_eq!([next_id(), next_id(), next_id()], [4, 5, 6]);
}

#[rstest]
fn test_id_generators_are_independent() {
    let mut first = id_generator(4);
    first();
    first();
    first();

    let mut second = id_generator(10);
    assert_eq!([second(), second()], [10, 11]);
    assert_eq!(first(), 7);
}

#[rstest]
fn test_generators_with_same_start_do_not_interfere() {
    let mut left = id_generator(0);
    let mut right = id_generator(0);

    assert_eq!(left(), 0);
    assert_eq!(left(), 1);
    assert_eq!(right(), 0);
    assert_eq!(left(), 2);
    assert_eq!(right(), 1);
}

#[rstest]
#[case(0)]
#[case(-5)]
#[case(1_000_000)]
#[case(i64::MIN)]
fn test_first_id_is_start(#[case] start: i64) {
    let mut next_id = id_generator(start);
    assert_eq!(next_id(), start);
}

#[rstest]
fn test_id_generator_as_iterator() {
    let ids: Vec<i64> = IdGenerator::new(-2).take(5).collect();
    assert_eq!(ids, vec![-2, -1, 0, 1, 2]);
}

#[rstest]
fn test_iterator_and_next_id_share_state() {
    let mut generator = IdGenerator::new(100);
    assert_eq!(generator.next(), Some(100));
    assert_eq!(generator.next_id(), 101);
    assert_eq!(generator.peek_next(), 102);
}
