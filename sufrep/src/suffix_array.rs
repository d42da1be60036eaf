// Copyright 2025 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

use crate::repetition;

/// A suffix array for a byte string.
pub struct SuffixArray<'a> {
    data: &'a [u8],
    inner: Vec<u32>,
}

impl<'a> SuffixArray<'a> {
    /// Creates a new `SuffixArray` for `data`.
    ///
    /// Suffixes are ordered by bounded lexicographic comparison: no comparison
    /// ever reads past the end of `data`, and when one suffix is a prefix of
    /// another the shorter suffix sorts first.
    ///
    /// This operation is *O*(*n*² log *n*) in the worst case, which is
    /// acceptable for the pattern-sized inputs this crate is built for.
    ///
    /// # Panics
    ///
    /// Panics if `data` is empty or if `data.len() > u32::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sufrep::SuffixArray;
    ///
    /// let sa = SuffixArray::new(b"banana");
    /// assert_eq!(sa.as_slice(), &[5, 3, 1, 0, 4, 2]);
    /// ```
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        assert!(!data.is_empty(), "`data` must not be empty");
        assert!(
            u32::try_from(data.len()).is_ok(),
            "`data` must be no longer than u32::MAX",
        );

        let mut inner: Vec<u32> = (0..data.len() as u32).collect();
        inner.sort_unstable_by(|&a, &b| data[a as usize..].cmp(&data[b as usize..]));

        Self { data, inner }
    }

    /// Returns the suffix start indices in ascending lexicographic order of
    /// the suffixes they denote.
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.inner
    }

    /// Returns the maximum length of any prefix shared between two
    /// lexicographically adjacent suffixes of the data.
    ///
    /// The result is always in `[0, data.len() - 1]` and is `0` exactly when
    /// no two adjacent suffixes agree on even their first byte. A large value
    /// means the data repeats itself heavily, so a hash window shorter than
    /// the result cannot tell all positions of the data apart.
    ///
    /// # Examples
    ///
    /// ```
    /// use sufrep::SuffixArray;
    ///
    /// assert_eq!(SuffixArray::new(b"AB").max_repeated_prefix(), 0);
    /// assert_eq!(SuffixArray::new(b"AAAA").max_repeated_prefix(), 3);
    /// ```
    #[must_use]
    pub fn max_repeated_prefix(&self) -> usize {
        repetition::max_adjacent_lcp(self.data, &self.inner)
    }
}
