// Copyright 2025 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use sufrep::SuffixArray;

use crate::{
    haystack::Haystack,
    hooks::PhaseHooks,
    matcher::{self, BYTE_TABLE_SIZE, GRAM_TABLE_SIZE, ShiftTable, WIDE_TABLE_SIZE},
};

/// The largest window length with a specialized matcher.
const MAX_ORDER: usize = 10;

/// The fixed window length of the wide fallback matcher.
const WIDE_ORDER: usize = 8;

/// The matcher chosen for one search call.
///
/// Selection happens exactly once per call; the scan loop itself never
/// branches on the order again.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Strategy {
    /// A specialized matcher of the given order, always in `1..=10`.
    Ordered(usize),
    /// The 8-byte-window fallback with a larger table, for patterns so
    /// repetitive that no small order is safe.
    Wide,
}

impl Strategy {
    /// Picks the matcher for `pattern` from its self-repetition.
    ///
    /// The window must be one byte longer than the longest repeated prefix
    /// between adjacent suffixes, or two distinct pattern positions would
    /// share a window verbatim. Note an undersized window would only cost
    /// wasted verification work, not correctness, so the `+ 1` and the
    /// fallback threshold are performance tuning rather than safety.
    fn select(pattern: &[u8]) -> Self {
        let q = SuffixArray::new(pattern).max_repeated_prefix() + 1;

        if q <= MAX_ORDER {
            Self::Ordered(q)
        } else {
            Self::Wide
        }
    }

    /// The shortest pattern the chosen matcher accepts.
    ///
    /// Orders 1 and 2 share a minimum of 2; selection can only reach the wide
    /// fallback with patterns of length 11 or more, so its minimum of 8 never
    /// rejects anything in practice.
    fn min_pattern_len(self) -> usize {
        match self {
            Self::Ordered(q) => q.max(2),
            Self::Wide => WIDE_ORDER,
        }
    }
}

/// An error indicating that a search request was rejected.
///
/// Rejected searches perform no work: the haystack's scratch region is left
/// untouched, no phase hook fires, and no match callback is invoked.
///
/// # Examples
///
/// ```
/// use ohash::{Haystack, SearchError};
///
/// let mut haystack = Haystack::new(&b"some text"[..]);
/// let result = ohash::count(b"x", &mut haystack);
///
/// assert!(matches!(result, Err(SearchError::PatternTooShort { len: 1, min: 2 })));
/// ```
#[derive(Debug, Eq, PartialEq)]
pub enum SearchError {
    /// The pattern is empty
    EmptyPattern,
    /// The pattern is shorter than the selected matcher's minimum length
    PatternTooShort {
        /// The length of the rejected pattern
        len: usize,
        /// The minimum length the selected matcher accepts
        min: usize,
    },
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            SearchError::EmptyPattern => write!(f, "pattern is empty"),
            SearchError::PatternTooShort { len, min } => {
                write!(
                    f,
                    "pattern of length {len} is shorter than the matcher minimum of {min}",
                )
            }
        }
    }
}

impl Error for SearchError {}

/// Searches `haystack` for every occurrence of `pattern`, reporting each
/// match and exposing phase boundaries to `hooks`.
///
/// This is the full-form search the shorthands [`count`], [`find`], and
/// [`positions`] delegate to. `on_match` is invoked once per confirmed
/// occurrence with its zero-based start offset, in ascending order; the
/// returned count equals the number of invocations. `hooks` receives the
/// preprocessing and scanning phase boundaries as described on
/// [`PhaseHooks`].
///
/// Searching overwrites the haystack's internal scratch region, so a
/// haystack must not be searched from multiple threads at once. Results are
/// deterministic: repeating a search yields identical matches.
///
/// # Errors
///
/// Returns an error if the pattern is empty or shorter than the minimum
/// length of the matcher selected for it.
///
/// # Examples
///
/// ```
/// use ohash::Haystack;
///
/// # fn main() -> Result<(), ohash::SearchError> {
/// let mut haystack = Haystack::new(&b"ABABAB"[..]);
/// let mut ends = Vec::new();
///
/// let count = ohash::search(b"AB", &mut haystack, |start| ends.push(start + 2), &mut ())?;
///
/// assert_eq!(count, 3);
/// assert_eq!(ends, [2, 4, 6]);
/// # Ok(())
/// # }
/// ```
pub fn search<F, H>(
    pattern: &[u8],
    haystack: &mut Haystack,
    on_match: F,
    hooks: &mut H,
) -> Result<usize, SearchError>
where
    F: FnMut(usize),
    H: PhaseHooks,
{
    if pattern.is_empty() {
        return Err(SearchError::EmptyPattern);
    }

    let strategy = Strategy::select(pattern);
    let min = strategy.min_pattern_len();
    if pattern.len() < min {
        return Err(SearchError::PatternTooShort {
            len: pattern.len(),
            min,
        });
    }

    hooks.preprocessing_started();

    let m = pattern.len();
    let n = haystack.len();
    let buf = haystack.write_sentinel(pattern);

    let count = match strategy {
        Strategy::Ordered(q) => {
            let buckets = if q == 1 { BYTE_TABLE_SIZE } else { GRAM_TABLE_SIZE };
            // A window absent from the pattern admits a shift of m - q,
            // except at order 1 where the full pattern length is safe
            let default = if q == 1 { m } else { (m - q).max(1) };

            match q {
                1 => run::<1, _, _>(pattern, buf, n, buckets, default, on_match, hooks),
                2 => run::<2, _, _>(pattern, buf, n, buckets, default, on_match, hooks),
                3 => run::<3, _, _>(pattern, buf, n, buckets, default, on_match, hooks),
                4 => run::<4, _, _>(pattern, buf, n, buckets, default, on_match, hooks),
                5 => run::<5, _, _>(pattern, buf, n, buckets, default, on_match, hooks),
                6 => run::<6, _, _>(pattern, buf, n, buckets, default, on_match, hooks),
                7 => run::<7, _, _>(pattern, buf, n, buckets, default, on_match, hooks),
                8 => run::<8, _, _>(pattern, buf, n, buckets, default, on_match, hooks),
                9 => run::<9, _, _>(pattern, buf, n, buckets, default, on_match, hooks),
                10 => run::<10, _, _>(pattern, buf, n, buckets, default, on_match, hooks),
                _ => unreachable!("selection only yields orders in 1..=10"),
            }
        }
        // The wide window can afford the tighter m - 7 default because its
        // minimum pattern length keeps it positive
        Strategy::Wide => run::<WIDE_ORDER, _, _>(
            pattern,
            buf,
            n,
            WIDE_TABLE_SIZE,
            m - (WIDE_ORDER - 1),
            on_match,
            hooks,
        ),
    };

    Ok(count)
}

/// Preprocesses and scans with a fixed order, firing the phase hooks around
/// the boundary.
fn run<const Q: usize, F, H>(
    pattern: &[u8],
    buf: &[u8],
    n: usize,
    buckets: usize,
    default: usize,
    on_match: F,
    hooks: &mut H,
) -> usize
where
    F: FnMut(usize),
    H: PhaseHooks,
{
    let table = ShiftTable::build::<Q>(pattern, buckets, default);
    hooks.preprocessing_finished();

    hooks.scanning_started();
    let count = matcher::scan::<Q>(pattern, buf, n, &table, on_match);
    hooks.scanning_finished();

    count
}

/// Counts the occurrences of `pattern` in `haystack`.
///
/// # Errors
///
/// Returns an error if the pattern is empty or shorter than the minimum
/// length of the matcher selected for it.
///
/// # Examples
///
/// ```
/// use ohash::Haystack;
///
/// # fn main() -> Result<(), ohash::SearchError> {
/// let mut haystack = Haystack::new(&b"the cat sat on the mat"[..]);
///
/// assert_eq!(ohash::count(b"at", &mut haystack)?, 3);
/// # Ok(())
/// # }
/// ```
pub fn count(pattern: &[u8], haystack: &mut Haystack) -> Result<usize, SearchError> {
    search(pattern, haystack, |_| {}, &mut ())
}

/// Searches `haystack` for `pattern`, invoking `on_match` with the zero-based
/// start offset of each occurrence in ascending order.
///
/// Returns the occurrence count, which equals the number of times `on_match`
/// was invoked.
///
/// # Errors
///
/// Returns an error if the pattern is empty or shorter than the minimum
/// length of the matcher selected for it.
///
/// # Examples
///
/// ```
/// use ohash::Haystack;
///
/// # fn main() -> Result<(), ohash::SearchError> {
/// let mut haystack = Haystack::new(&b"mississippi"[..]);
/// let mut offsets = Vec::new();
///
/// ohash::find(b"ss", &mut haystack, |start| offsets.push(start))?;
///
/// assert_eq!(offsets, [2, 5]);
/// # Ok(())
/// # }
/// ```
pub fn find<F>(pattern: &[u8], haystack: &mut Haystack, on_match: F) -> Result<usize, SearchError>
where
    F: FnMut(usize),
{
    search(pattern, haystack, on_match, &mut ())
}

/// Collects the zero-based start offsets of every occurrence of `pattern` in
/// `haystack`, in ascending order.
///
/// # Errors
///
/// Returns an error if the pattern is empty or shorter than the minimum
/// length of the matcher selected for it.
pub fn positions(pattern: &[u8], haystack: &mut Haystack) -> Result<Vec<usize>, SearchError> {
    let mut offsets = Vec::new();
    find(pattern, haystack, |start| offsets.push(start))?;

    Ok(offsets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_bytes_select_order_one() {
        assert_eq!(Strategy::select(b"AB"), Strategy::Ordered(1));
        assert_eq!(Strategy::select(b"abcdefgh"), Strategy::Ordered(1));
    }

    #[test]
    fn repetition_raises_the_order() {
        // Max repeated prefix of "AAAA" is 3
        assert_eq!(Strategy::select(b"AAAA"), Strategy::Ordered(4));
        assert_eq!(Strategy::select(b"abcabcabc"), Strategy::Ordered(7));
    }

    #[test]
    fn extreme_repetition_selects_wide_fallback() {
        assert_eq!(Strategy::select(b"AAAAAAAAAAB"), Strategy::Ordered(10));
        assert_eq!(Strategy::select(b"AAAAAAAAAAAB"), Strategy::Wide);
        assert_eq!(Strategy::select(&[b'z'; 32]), Strategy::Wide);
    }

    #[test]
    fn wide_fallback_requires_eleven_bytes_minimum() {
        // Selection reaches the fallback only via a repeated prefix of at
        // least 10, so the selected pattern always has at least 11 bytes and
        // can never fail the fallback's minimum of 8
        for len in 1..=10 {
            assert_ne!(Strategy::select(&vec![b'a'; len]), Strategy::Wide);
        }
    }

    #[test]
    fn minimum_lengths() {
        assert_eq!(Strategy::Ordered(1).min_pattern_len(), 2);
        assert_eq!(Strategy::Ordered(2).min_pattern_len(), 2);
        assert_eq!(Strategy::Ordered(7).min_pattern_len(), 7);
        assert_eq!(Strategy::Wide.min_pattern_len(), 8);
    }

    #[test]
    fn rejected_patterns_fire_no_hooks() {
        struct Panicking;

        impl PhaseHooks for Panicking {
            fn preprocessing_started(&mut self) {
                panic!("no phase may begin for a rejected pattern");
            }
        }

        let mut haystack = Haystack::new(&b"text"[..]);

        assert_eq!(
            search(b"", &mut haystack, |_| {}, &mut Panicking),
            Err(SearchError::EmptyPattern),
        );
        // A too-short pattern is rejected only after order selection, but the
        // hook sequence must stay untouched on that path too
        assert_eq!(
            search(b"t", &mut haystack, |_| {}, &mut Panicking),
            Err(SearchError::PatternTooShort { len: 1, min: 2 }),
        );
    }

    #[test]
    fn single_byte_pattern_is_rejected() {
        let mut haystack = Haystack::new(&b"aaaa"[..]);

        assert_eq!(
            count(b"a", &mut haystack),
            Err(SearchError::PatternTooShort { len: 1, min: 2 }),
        );
    }
}
