// Copyright 2025 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

//! Exact single-pattern byte search with adaptively sized hash windows.
//!
//! This crate searches a text for every occurrence of a pattern using a
//! Horspool-style skip loop driven by a rolling hash over a window of `q`
//! consecutive bytes (a *q-gram*). Instead of fixing `q`, each search first
//! analyzes the pattern itself: a suffix array of the pattern and an
//! adjacent-suffix longest-common-prefix pass measure how self-repetitive the
//! pattern is, and the smallest window that keeps hash collisions rare is
//! chosen. A matcher specialized for that window length then builds a shift
//! table and scans the text, falling back to a wide 8-byte window with a
//! larger table for highly repetitive patterns.
//!
//! The alphabet is raw bytes; no text encoding is assumed.
//!
//! # Examples
//!
//! Counting occurrences:
//!
//! ```
//! use ohash::Haystack;
//!
//! # fn main() -> Result<(), ohash::SearchError> {
//! let mut haystack = Haystack::new(&b"ABABAB"[..]);
//!
//! assert_eq!(ohash::count(b"AB", &mut haystack)?, 3);
//! # Ok(())
//! # }
//! ```
//!
//! Collecting match offsets:
//!
//! ```
//! use ohash::Haystack;
//!
//! # fn main() -> Result<(), ohash::SearchError> {
//! let mut haystack = Haystack::new(&b"AAAAAA"[..]);
//!
//! assert_eq!(ohash::positions(b"AAAA", &mut haystack)?, [0, 1, 2]);
//! # Ok(())
//! # }
//! ```

mod haystack;
mod hooks;
mod matcher;
mod search;

pub use haystack::Haystack;
pub use hooks::PhaseHooks;
pub use search::{SearchError, count, find, positions, search};
