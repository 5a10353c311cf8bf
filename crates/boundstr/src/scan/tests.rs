use std::{boxed::Box, vec::Vec};

use quickcheck::{QuickCheck, TestResult};
use quickcheck_macros::quickcheck;
use rstest::rstest;

use super::*;

fn scan(bytes: &[u8], dmax: usize, c: u8) -> Option<usize> {
    assert!(dmax <= bytes.len());
    unsafe { last_char(&Buffer::from_slice(bytes), dmax, c) }
}

/// Straightforward model: the scanned range is the prefix before the first
/// terminator, truncated to `dmax`.
fn model(bytes: &[u8], dmax: usize, c: u8) -> Option<usize> {
    let window = &bytes[..dmax];
    let end = window.iter().position(|&b| b == NUL).unwrap_or(window.len());
    window[..end].iter().rposition(|&b| b == c)
}

/// Runs the scan over `bytes`, returning the result and every index read.
fn traced(bytes: &[u8], dmax: usize, c: u8) -> (Option<usize>, Vec<usize>) {
    let mut reads = Vec::new();
    let found = last_match(dmax, c, |i| {
        reads.push(i);
        bytes[i]
    });
    (found, reads)
}

/// Copies `bytes[..dmax]` into an allocation of exactly `dmax` bytes with no
/// terminator, so a read at index `dmax` leaves the allocation.
fn scan_exact(bytes: &[u8], dmax: usize, c: u8) -> Option<usize> {
    let exact: Box<[u8]> = bytes[..dmax].into();
    unsafe { last_char(&Buffer::from_slice(&exact), dmax, c) }
}

fn tests() -> u64 {
    if cfg!(miri) {
        50
    } else if is_ci::cached() {
        10_000
    } else {
        1_000
    }
}

#[test]
fn rightmost_match_wins() {
    assert_eq!(scan(b"banana", 6, b'a'), Some(5));
}

#[test]
fn terminator_stops_the_scan() {
    assert_eq!(scan(b"ab\0cd", 5, b'c'), None);
}

#[test]
fn budget_stops_the_scan() {
    assert_eq!(scan(b"aaaaaa", 3, b'a'), Some(2));
}

#[test]
fn dmax_one_sees_one_byte() {
    assert_eq!(scan(b"xa", 1, b'a'), None);
    assert_eq!(scan(b"ax", 1, b'a'), Some(0));
}

#[test]
fn empty_string_is_never_a_match() {
    assert_eq!(scan(b"\0aaaa", 5, b'a'), None);
}

#[test]
fn searching_for_the_terminator_finds_nothing() {
    assert_eq!(scan(b"ab\0", 3, NUL), None);
}

#[test]
fn comparison_is_exact() {
    assert_eq!(scan(b"aAa", 3, b'A'), Some(1));
    assert_eq!(scan(b"\xff\xfe", 2, 0xff), Some(0));
}

#[rstest]
#[case::budget_before_match(b"xyz!", 3, b'!', None, 3)]
#[case::budget_exhausted(b"aaaaaa", 3, b'a', Some(2), 3)]
#[case::terminator_first(b"ab\0cd", 5, b'c', None, 3)]
#[case::single(b"ab", 1, b'a', Some(0), 1)]
fn reads_stay_below_budget(
    #[case] bytes: &[u8],
    #[case] dmax: usize,
    #[case] c: u8,
    #[case] found: Option<usize>,
    #[case] read_count: usize,
) {
    let (result, reads) = traced(bytes, dmax, c);
    assert_eq!(result, found);
    assert_eq!(reads, (0..read_count).collect::<Vec<_>>());
}

#[rstest]
#[case(b"aaaaaa", 3, b'a', Some(2))]
#[case(b"banana", 6, b'a', Some(5))]
#[case(b"xyz!", 3, b'!', None)]
#[case(b"q", 1, b'q', Some(0))]
fn exact_length_allocation(
    #[case] bytes: &[u8],
    #[case] dmax: usize,
    #[case] c: u8,
    #[case] found: Option<usize>,
) {
    assert_eq!(scan_exact(bytes, dmax, c), found);
}

#[test]
fn matches_model_quickcheck() {
    fn prop(bytes: Vec<u8>, dmax: usize, c: u8) -> TestResult {
        if bytes.is_empty() {
            return TestResult::discard();
        }
        let dmax = 1 + dmax % bytes.len();
        let expected = model(&bytes, dmax, c);
        let (found, reads) = traced(&bytes, dmax, c);
        let in_budget = reads.iter().all(|&i| i < dmax);
        TestResult::from_bool(
            scan(&bytes, dmax, c) == expected
                && scan_exact(&bytes, dmax, c) == expected
                && found == expected
                && in_budget,
        )
    }
    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Vec<u8>, usize, u8) -> TestResult);
}

#[test]
fn match_is_the_target_quickcheck() {
    fn prop(bytes: Vec<u8>, c: u8) -> TestResult {
        if bytes.is_empty() {
            return TestResult::discard();
        }
        match scan(&bytes, bytes.len(), c) {
            Some(i) => {
                let before_terminator = !bytes[..i].contains(&NUL);
                let later_match = bytes[i + 1..]
                    .iter()
                    .take_while(|&&b| b != NUL)
                    .any(|&b| b == c);
                TestResult::from_bool(bytes[i] == c && before_terminator && !later_match)
            }
            None => TestResult::passed(),
        }
    }
    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Vec<u8>, u8) -> TestResult);
}

#[quickcheck]
fn scan_is_idempotent(bytes: Vec<u8>, c: u8) -> bool {
    let first = scan(&bytes, bytes.len(), c);
    first == scan(&bytes, bytes.len(), c)
}
