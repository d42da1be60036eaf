// Copyright 2025 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

//! The order-parameterized hash-shift matcher.
//!
//! One abstract algorithm serves every supported window length: the order `Q`
//! is a const generic so the rolling-hash accumulation unrolls at compile
//! time, while the bucket count and default shift stay runtime parameters
//! because the wide fallback shares this code with a larger table.

/// Bucket count for the order-1 table, which is indexed by the byte itself.
pub(crate) const BYTE_TABLE_SIZE: usize = 256;

/// Bucket count for the order-2 through order-10 tables.
pub(crate) const GRAM_TABLE_SIZE: usize = 1 << 16;

/// Bucket count for the wide fallback table.
pub(crate) const WIDE_TABLE_SIZE: usize = 1 << 20;

/// A per-search table mapping q-gram hashes to scan shift distances.
///
/// After construction every bucket holds a shift of at least 1, except the
/// single bucket of the pattern's final q-gram, which holds 0 to mark
/// verification candidates during the scan. The shift that bucket held before
/// being zeroed is preserved in `post_match` (forced to at least 1) and is
/// applied after every verification attempt so the scan always makes
/// progress.
pub(crate) struct ShiftTable {
    shifts: Vec<usize>,
    post_match: usize,
}

impl ShiftTable {
    /// Builds the shift table for `pattern` with `buckets` hash buckets.
    ///
    /// `default` is the shift for q-grams that occur nowhere in the pattern
    /// and must be a safe distance for the order: no occurrence of the
    /// pattern may end within `default` positions of a window whose q-gram
    /// the pattern doesn't contain.
    ///
    /// Windows are slid left to right, so when two pattern positions share a
    /// hash bucket the rightmost (smallest-shift) occurrence wins.
    pub(crate) fn build<const Q: usize>(pattern: &[u8], buckets: usize, default: usize) -> Self {
        debug_assert!(pattern.len() >= Q, "pattern must be at least one window long");

        let m = pattern.len();
        let mut shifts = vec![default; buckets];

        for i in (Q - 1)..(m - 1) {
            let h = fold::<Q>(&pattern[i + 1 - Q..=i]) % buckets;
            shifts[h] = m - 1 - i;
        }

        let last = fold::<Q>(&pattern[m - Q..]) % buckets;
        let mut post_match = shifts[last];
        shifts[last] = 0;
        // A pattern whose final q-gram also ends one position earlier would
        // otherwise yield a zero post-match shift and a scan that never
        // advances
        if post_match == 0 {
            post_match = 1;
        }

        Self { shifts, post_match }
    }
}

/// Scans `buf` (logical text of length `n` plus sentinel scratch) for
/// `pattern`, returning the occurrence count and reporting each match offset
/// to `on_match`.
///
/// The cursor tracks the *end* position of the current alignment. The inner
/// loop hashes the window ending at the cursor and advances by the table
/// shift until it lands on a zero shift; the sentinel copy of the pattern
/// past the logical end guarantees this happens without any bounds checks.
/// A zero shift inside the logical text is a candidate and is verified
/// byte-wise.
pub(crate) fn scan<const Q: usize>(
    pattern: &[u8],
    buf: &[u8],
    n: usize,
    table: &ShiftTable,
    mut on_match: impl FnMut(usize),
) -> usize {
    let m = pattern.len();
    let buckets = table.shifts.len();
    // Orders 1 and 2 hash without collisions, so a zero shift already pins
    // the final one or two bytes and verification can skip them
    let verified = match Q {
        1 => &pattern[..m - 1],
        2 => &pattern[..m - 2],
        _ => pattern,
    };

    let mut count = 0;
    let mut i = m - 1;
    loop {
        let mut shift = 1;
        while shift != 0 {
            let h = fold::<Q>(&buf[i + 1 - Q..=i]) % buckets;
            shift = table.shifts[h];
            i += shift;
        }

        if i >= n {
            return count;
        }

        let start = i + 1 - m;
        if &buf[start..start + verified.len()] == verified {
            count += 1;
            on_match(start);
        }
        i += table.post_match;
    }
}

/// Folds a window of `Q` bytes into its hash value.
///
/// Order 2 packs both bytes losslessly; every other order shifts the
/// accumulator left one bit per byte, which is cheap and spreads well enough
/// once the window is as long as the pattern's repetition demands. The caller
/// reduces the result modulo its bucket count.
#[inline(always)]
fn fold<const Q: usize>(window: &[u8]) -> usize {
    if Q == 2 {
        (usize::from(window[0]) << 8) + usize::from(window[1])
    } else {
        let mut h = 0;
        for j in 0..Q {
            h = (h << 1) + usize::from(window[j]);
        }
        h
    }
}
