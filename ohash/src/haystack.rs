// Copyright 2025 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

/// A text buffer with the trailing scratch region the matchers require.
///
/// The skip loop at the heart of every matcher has no bounds checks; it
/// terminates because a copy of the pattern is placed just past the logical
/// end of the text before each scan, guaranteeing one final candidate window.
/// `Haystack` owns that scratch region so the sentinel write can never touch
/// memory the caller still considers text.
///
/// The scratch region is rewritten on every search, so a `Haystack` must not
/// be shared between concurrent searches. Reuse across sequential searches is
/// fine and avoids reallocating the buffer.
pub struct Haystack {
    buf: Vec<u8>,
    len: usize,
}

impl Haystack {
    /// Creates a new `Haystack` over `text`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ohash::Haystack;
    ///
    /// let haystack = Haystack::new(&b"needle in a haystack"[..]);
    /// assert_eq!(haystack.len(), 20);
    /// ```
    #[must_use]
    pub fn new(text: impl Into<Vec<u8>>) -> Self {
        let buf = text.into();
        let len = buf.len();

        Self { buf, len }
    }

    /// Returns the length of the logical text, excluding any scratch space.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the logical text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the logical text.
    ///
    /// Sentinel writes from earlier searches are not visible through this
    /// view.
    #[must_use]
    pub fn text(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Writes `pattern` followed by a single `0` into the scratch region past
    /// the logical text, growing the buffer as needed, and returns the full
    /// extended buffer.
    ///
    /// The returned slice is exactly `self.len() + pattern.len() + 1` bytes
    /// long, which is every byte a scan with a window no longer than the
    /// pattern may read.
    pub(crate) fn write_sentinel(&mut self, pattern: &[u8]) -> &[u8] {
        self.buf.resize(self.len + pattern.len() + 1, 0);
        self.buf[self.len..self.len + pattern.len()].copy_from_slice(pattern);
        self.buf[self.len + pattern.len()] = 0;

        &self.buf
    }
}
