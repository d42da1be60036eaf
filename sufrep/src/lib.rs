// Copyright 2025 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

//! Suffix array construction and self-repetition analysis for byte patterns.
//!
//! This crate measures how self-repetitive a byte string is: it builds a
//! suffix array of the string and computes the longest prefix shared by any
//! two lexicographically adjacent suffixes. Search algorithms use this value
//! to size their hash windows so that distinct positions of the string rarely
//! hash identically.

mod repetition;
mod suffix_array;

pub use suffix_array::SuffixArray;
