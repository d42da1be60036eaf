// Copyright 2025 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use ohash::Haystack;

const TEXT_LEN: usize = 1 << 16;

/// Deterministic pseudo-random bytes over a small alphabet so runs are
/// reproducible without a test data file.
fn pseudo_random_bytes(len: usize, alphabet: u8) -> Vec<u8> {
    let mut state: u64 = 0x243f_6a88_85a3_08d3;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            b'a' + ((state >> 33) % u64::from(alphabet)) as u8
        })
        .collect()
}

fn count(c: &mut Criterion) {
    let mut group = c.benchmark_group("count");

    let text = pseudo_random_bytes(TEXT_LEN, 4);
    let mut haystack = Haystack::new(text.clone());

    // Patterns lifted from the text so every length has real occurrences;
    // longer patterns on this small alphabet drive the selected order up
    for pattern_len in [4_usize, 8, 16, 32] {
        let pattern = &text[1024..1024 + pattern_len];

        group
            .throughput(Throughput::Bytes(TEXT_LEN as u64))
            .bench_with_input(
                BenchmarkId::from_parameter(pattern_len),
                pattern,
                |b, pattern| {
                    b.iter(|| ohash::count(pattern, &mut haystack).unwrap());
                },
            );
    }

    group.finish();
}

criterion_group!(benches, count);
criterion_main!(benches);
