// Copyright 2025 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

/// Computes the maximum longest common prefix between lexicographically
/// adjacent suffixes of `data` using the rank-array technique.
///
/// Positions are walked left to right while a running match length `ell` is
/// maintained. Dropping the first byte of a suffix shortens its match with the
/// preceding suffix by at most one, so `ell` only ever decreases by one step
/// between successive positions and every byte of `data` is compared *O*(1)
/// times on average.
pub(crate) fn max_adjacent_lcp(data: &[u8], suffix_array: &[u32]) -> usize {
    let len = data.len();

    let mut rank = vec![0u32; len];
    for (r, &suffix) in suffix_array.iter().enumerate() {
        rank[suffix as usize] = r as u32;
    }

    let mut ell: usize = 0;
    let mut max = 0;
    for j in 0..len {
        ell = ell.saturating_sub(1);
        let r = rank[j] as usize;
        if r > 0 {
            let prev = suffix_array[r - 1] as usize;
            while j.max(prev) + ell < len && data[j + ell] == data[prev + ell] {
                ell += 1;
            }
        } else {
            // The lexicographically smallest suffix has no predecessor
            ell = 0;
        }
        max = max.max(ell);
    }

    max
}
