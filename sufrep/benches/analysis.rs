// Copyright 2025 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sufrep::SuffixArray;

/// Deterministic pseudo-random bytes over a small alphabet so runs are
/// reproducible without a test data file.
fn pseudo_random_bytes(len: usize, alphabet: u8) -> Vec<u8> {
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            b'a' + ((state >> 33) % u64::from(alphabet)) as u8
        })
        .collect()
}

fn analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");

    for len in [64_usize, 256, 1024, 4096] {
        let pattern = pseudo_random_bytes(len, 4);

        group
            .throughput(Throughput::Bytes(len as u64))
            .bench_with_input(BenchmarkId::from_parameter(len), &pattern, |b, pattern| {
                b.iter(|| SuffixArray::new(pattern).max_repeated_prefix());
            });
    }

    group.finish();
}

criterion_group!(benches, analyze);
criterion_main!(benches);
