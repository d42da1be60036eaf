// Copyright 2025 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

/// Phase-boundary callbacks for timing instrumentation.
///
/// Once a matcher has been selected, a search runs in two phases:
/// preprocessing (the sentinel write and shift-table construction) and
/// scanning. A harness that wants to time the phases separately can implement
/// this trait and pass it to [`search`](crate::search()); the search itself
/// places no meaning on what the callbacks do. All methods default to no-ops,
/// and `()` implements the trait for callers that don't need instrumentation.
///
/// The four callbacks always fire paired and in order. A search that rejects
/// its pattern invokes no hooks at all.
pub trait PhaseHooks {
    /// Called before the sentinel write and shift-table construction begin.
    fn preprocessing_started(&mut self) {}

    /// Called once the shift table is ready.
    fn preprocessing_finished(&mut self) {}

    /// Called before the text scan begins.
    fn scanning_started(&mut self) {}

    /// Called once the scan has consumed the whole text.
    fn scanning_finished(&mut self) {}
}

impl PhaseHooks for () {}
